use super::{Command, CommandError, Flow};
use std::env;

/// Prints the shell's current working directory. Extra tokens are ignored.
#[derive(Clone)]
pub struct PwdCommand;

impl Default for PwdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl PwdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for PwdCommand {
    fn execute(&self, _tokens: &[String]) -> Result<Flow, CommandError> {
        let dir = env::current_dir()?;
        println!("{}", dir.display());
        Ok(Flow::Continue)
    }
}
