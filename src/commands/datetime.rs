use super::{Command, CommandError, Flow};
use chrono::Local;

const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Prints the current local time as a compact timestamp.
#[derive(Clone)]
pub struct DateTimeCommand;

impl Default for DateTimeCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl DateTimeCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for DateTimeCommand {
    fn execute(&self, _tokens: &[String]) -> Result<Flow, CommandError> {
        println!("{}", Local::now().format(TIMESTAMP_FORMAT));
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dt_continues() {
        let cmd = DateTimeCommand::new();
        assert_eq!(cmd.execute(&["dt".to_string()]).unwrap(), Flow::Continue);
    }

    #[test]
    fn test_timestamp_shape() {
        let stamp = Local::now().format(TIMESTAMP_FORMAT).to_string();

        assert_eq!(stamp.len(), 14);
        assert!(stamp.bytes().all(|b| b.is_ascii_digit()));
    }
}
