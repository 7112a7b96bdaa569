use super::{Command, CommandError, Flow};

/// Prints the shell banner and the builtin table, in registration order.
#[derive(Clone)]
pub struct HelpCommand {
    names: Vec<&'static str>,
}

impl Default for HelpCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpCommand {
    pub fn new() -> Self {
        Self { names: Vec::new() }
    }

    pub(crate) fn set_names(&mut self, names: Vec<&'static str>) {
        self.names = names;
    }
}

impl Command for HelpCommand {
    fn execute(&self, _tokens: &[String]) -> Result<Flow, CommandError> {
        println!("tsh {}", env!("CARGO_PKG_VERSION"));
        println!("Type program names and arguments, and hit enter.");
        println!("The following are built in:");

        for name in &self.names {
            println!("  {}", name);
        }

        println!("Use the man command for information on other programs.");
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_continues() {
        let mut cmd = HelpCommand::new();
        cmd.set_names(vec!["cd", "help", "exit"]);

        let result = cmd.execute(&["help".to_string()]).unwrap();
        assert_eq!(result, Flow::Continue);
    }
}
