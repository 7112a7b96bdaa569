use super::{Command, CommandError, Flow};
use std::env;

#[derive(Clone)]
pub struct CdCommand;

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CdCommand {
    fn execute(&self, tokens: &[String]) -> Result<Flow, CommandError> {
        let target = tokens.get(1).ok_or_else(|| {
            CommandError::InvalidArguments("expected argument to \"cd\"".to_string())
        })?;

        env::set_current_dir(target)
            .map_err(|e| CommandError::ExecutionError(format!("cd: {}", e)))?;

        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cd_without_target() {
        let cmd = CdCommand::new();
        let result = cmd.execute(&["cd".to_string()]);

        assert!(matches!(result, Err(CommandError::InvalidArguments(_))));
    }

    #[test]
    fn test_cd_nonexistent_path() {
        let cmd = CdCommand::new();
        let result = cmd.execute(&["cd".to_string(), "/nonexistent-path".to_string()]);

        assert!(matches!(result, Err(CommandError::ExecutionError(_))));
    }

    #[test]
    fn test_cd_temp() {
        let cmd = CdCommand::new();
        let temp_dir = env::temp_dir();

        let result = cmd
            .execute(&["cd".to_string(), temp_dir.to_str().unwrap().to_string()])
            .unwrap();

        assert_eq!(result, Flow::Continue);
        assert_eq!(env::current_dir().unwrap(), temp_dir);
    }
}
