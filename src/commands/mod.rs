use crate::flags::Flags;
use crate::process::{ProcessError, ProcessExecutor};

mod cd;
mod datetime;
mod exit;
mod help;
mod interface;
mod ping;
mod pwd;
mod userinfo;

pub use cd::CdCommand;
pub use datetime::DateTimeCommand;
pub use exit::ExitCommand;
pub use help::HelpCommand;
pub use interface::InterfaceCommand;
pub use ping::PingCommand;
pub use pwd::PwdCommand;
pub use userinfo::UserInfoCommand;

#[derive(Debug)]
pub enum CommandError {
    InvalidArguments(String),
    ExecutionError(String),
    IoError(std::io::Error),
    ProcessError(ProcessError),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::InvalidArguments(msg) => write!(f, "invalid arguments: {}", msg),
            CommandError::ExecutionError(msg) => write!(f, "execution error: {}", msg),
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
            CommandError::ProcessError(err) => write!(f, "{}", err),
        }
    }
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        CommandError::ProcessError(err)
    }
}

/// Signal every dispatch path produces: keep reading commands, or leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub trait Command {
    fn execute(&self, tokens: &[String]) -> Result<Flow, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Cd(CdCommand),
    Help(HelpCommand),
    Exit(ExitCommand),
    Pwd(PwdCommand),
    Interface(InterfaceCommand),
    DateTime(DateTimeCommand),
    UserInfo(UserInfoCommand),
    Ping(PingCommand),
}

impl Command for CommandType {
    fn execute(&self, tokens: &[String]) -> Result<Flow, CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(tokens),
            CommandType::Help(cmd) => cmd.execute(tokens),
            CommandType::Exit(cmd) => cmd.execute(tokens),
            CommandType::Pwd(cmd) => cmd.execute(tokens),
            CommandType::Interface(cmd) => cmd.execute(tokens),
            CommandType::DateTime(cmd) => cmd.execute(tokens),
            CommandType::UserInfo(cmd) => cmd.execute(tokens),
            CommandType::Ping(cmd) => cmd.execute(tokens),
        }
    }
}

/// Dispatches a token sequence to the matching builtin, or hands it to the
/// process launcher when the first token names no builtin.
#[derive(Clone)]
pub struct CommandExecutor {
    commands: Vec<(&'static str, CommandType)>,
    process_executor: ProcessExecutor,
}

impl CommandExecutor {
    pub fn new(flags: &Flags) -> Self {
        let process_executor = ProcessExecutor::new(flags);

        // Registration order is the order `help` lists the builtins in.
        let mut commands: Vec<(&'static str, CommandType)> = vec![
            ("cd", CommandType::Cd(CdCommand::new())),
            ("help", CommandType::Help(HelpCommand::new())),
            ("exit", CommandType::Exit(ExitCommand::new())),
            ("pw", CommandType::Pwd(PwdCommand::new())),
            (
                "ifc",
                CommandType::Interface(InterfaceCommand::new(process_executor.clone())),
            ),
            ("dt", CommandType::DateTime(DateTimeCommand::new())),
            ("ud", CommandType::UserInfo(UserInfoCommand::new())),
            (
                "ping",
                CommandType::Ping(PingCommand::new(process_executor.clone())),
            ),
        ];

        let names: Vec<&'static str> = commands.iter().map(|(name, _)| *name).collect();
        for (_, command) in &mut commands {
            if let CommandType::Help(help) = command {
                help.set_names(names.clone());
            }
        }

        CommandExecutor {
            commands,
            process_executor,
        }
    }

    /// Runs one tokenized command line.
    ///
    /// An empty token sequence is a no-op. Builtin names are matched by
    /// exact, case-sensitive string equality; anything else is launched as
    /// an external program, which never terminates the shell.
    pub fn execute(&self, tokens: &[String]) -> Result<Flow, CommandError> {
        if tokens.is_empty() {
            return Ok(Flow::Continue);
        }

        if let Some(command) = self.lookup(&tokens[0]) {
            return command.execute(tokens);
        }

        let args: Vec<&str> = tokens.iter().map(String::as_str).collect();
        self.process_executor.spawn_process(&args)?;
        Ok(Flow::Continue)
    }

    pub fn is_builtin(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    pub fn builtin_names(&self) -> Vec<&'static str> {
        self.commands.iter().map(|(name, _)| *name).collect()
    }

    fn lookup(&self, name: &str) -> Option<&CommandType> {
        self.commands
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, command)| command)
    }
}
