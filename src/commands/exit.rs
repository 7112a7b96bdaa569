use super::{Command, CommandError, Flow};

#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(&self, _tokens: &[String]) -> Result<Flow, CommandError> {
        Ok(Flow::Exit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_signals_termination() {
        let cmd = ExitCommand::new();
        assert_eq!(cmd.execute(&["exit".to_string()]).unwrap(), Flow::Exit);
    }

    #[test]
    fn test_exit_ignores_arguments() {
        let cmd = ExitCommand::new();
        let tokens = vec!["exit".to_string(), "0".to_string(), "now".to_string()];

        assert_eq!(cmd.execute(&tokens).unwrap(), Flow::Exit);
    }
}
