use crate::{commands::Flow, error::ShellError, input::tokenize};

pub(crate) trait CommandHandler {
    fn execute_command(&mut self, line: &str) -> Result<Flow, ShellError>;
}

impl CommandHandler for super::Shell {
    fn execute_command(&mut self, line: &str) -> Result<Flow, ShellError> {
        let tokens = tokenize(line);
        if tokens.is_empty() {
            return Ok(Flow::Continue);
        }

        Ok(self.executor.execute(&tokens)?)
    }
}
