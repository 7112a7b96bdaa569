use super::{Command, CommandError, Flow};
use crate::net;
use crate::process::ProcessExecutor;

const DEFAULT_INTERFACE: &str = "eth0";

/// Wraps the system `ifconfig` utility: display the default interface,
/// display a named interface, or assign a validated address to one.
#[derive(Clone)]
pub struct InterfaceCommand {
    executor: ProcessExecutor,
}

impl InterfaceCommand {
    pub fn new(executor: ProcessExecutor) -> Self {
        Self { executor }
    }

    fn print_captured(&self, args: &[&str]) -> Result<(), CommandError> {
        let report = self.executor.capture_output(args)?;
        for line in report.lines() {
            println!("{}", line);
        }
        Ok(())
    }
}

impl Command for InterfaceCommand {
    fn execute(&self, tokens: &[String]) -> Result<Flow, CommandError> {
        match tokens {
            [_] => {
                self.executor
                    .spawn_process(&["ifconfig", DEFAULT_INTERFACE])?;
            }
            [_, interface] => {
                self.print_captured(&["/sbin/ifconfig", interface.as_str()])?;
            }
            [_, interface, address] => {
                if !net::is_valid_ipv4(address) {
                    return Err(CommandError::InvalidArguments(
                        "invalid argument to \"ifc\"".to_string(),
                    ));
                }
                self.print_captured(&[
                    "sudo",
                    "/sbin/ifconfig",
                    interface.as_str(),
                    address.as_str(),
                ])?;
            }
            _ => {
                return Err(CommandError::InvalidArguments(
                    "invalid argument to \"ifc\"".to_string(),
                ));
            }
        }

        Ok(Flow::Continue)
    }
}
