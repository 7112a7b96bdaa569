use std::io::{self, Write};

mod executor;

use crate::{
    commands::{CommandExecutor, Flow},
    error::ShellError,
    flags::Flags,
    highlight::Highlighter,
    input::LineReader,
    process::ProcessExecutor,
};

use executor::CommandHandler;

pub struct Shell {
    pub(crate) reader: LineReader<io::StdinLock<'static>>,
    pub(crate) prompt: String,
    pub(crate) highlighter: Highlighter,
    pub(crate) flags: Flags,
    pub(crate) executor: CommandExecutor,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let highlighter = Highlighter::new();
        let executor = CommandExecutor::new(&flags);

        // The display identity is resolved once per session and cached; a
        // mid-session privilege change will not refresh the prompt.
        let user = resolve_user(&ProcessExecutor::new(&flags));
        let prompt = format!("{}@tsh > ", user);

        ctrlc::set_handler(move || {
            println!("\nUse 'exit' to exit the shell");
        })?;

        Ok(Shell {
            reader: LineReader::new(io::stdin().lock()),
            prompt,
            highlighter,
            flags,
            executor,
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            print!("{}", self.highlighter.highlight_prompt(&self.prompt));
            io::stdout().flush()?;

            let line = match self.reader.read_line() {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };

            match self.execute_command(&line) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(e) => {
                    if !self.flags.is_set("quiet") {
                        let diagnostic = format!("tsh: {}", e);
                        eprintln!("{}", self.highlighter.highlight_error(&diagnostic));
                    }
                }
            }
        }
        Ok(())
    }
}

/// Resolves the name shown in the prompt, preferring what the system itself
/// reports over the environment.
fn resolve_user(processes: &ProcessExecutor) -> String {
    processes
        .capture_output(&["whoami"])
        .ok()
        .map(|output| output.trim_end().to_string())
        .filter(|user| !user.is_empty())
        .or_else(|| std::env::var("USER").ok())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolved_user_is_never_empty() {
        let user = resolve_user(&ProcessExecutor::new(&Flags::default()));
        assert!(!user.is_empty());
    }
}
