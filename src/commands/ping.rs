use super::{Command, CommandError, Flow};
use crate::net;
use crate::process::ProcessExecutor;

const PING_PATH: &str = "/bin/ping";

/// Wraps the system ping utility. The target address must pass the dotted-
/// quad format check before any process is spawned.
#[derive(Clone)]
pub struct PingCommand {
    executor: ProcessExecutor,
}

impl PingCommand {
    pub fn new(executor: ProcessExecutor) -> Self {
        Self { executor }
    }
}

impl Command for PingCommand {
    fn execute(&self, tokens: &[String]) -> Result<Flow, CommandError> {
        let address = tokens.get(1).ok_or_else(|| {
            CommandError::InvalidArguments("expected argument to \"ping\"".to_string())
        })?;

        if !net::is_valid_ipv4(address) {
            return Err(CommandError::InvalidArguments(
                "invalid argument to \"ping\"".to_string(),
            ));
        }

        self.executor.spawn_process(&[PING_PATH, address.as_str()])?;
        Ok(Flow::Continue)
    }
}
