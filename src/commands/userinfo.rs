use std::env;
use std::ffi::CStr;
use std::fs;
use std::os::unix::fs::MetadataExt;

use super::{Command, CommandError, Flow};

/// Prints `uid, gid, user, group, home-inode` for the invoking user.
///
/// Every lookup that can fail (unset USER, unknown group, missing home
/// directory) is reported as an error instead of printing garbage.
#[derive(Clone)]
pub struct UserInfoCommand;

impl Default for UserInfoCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInfoCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for UserInfoCommand {
    fn execute(&self, _tokens: &[String]) -> Result<Flow, CommandError> {
        let user = env::var("USER")
            .map_err(|_| CommandError::ExecutionError("USER is not set".to_string()))?;

        let uid = unsafe { libc::getuid() };
        let gid = unsafe { libc::getgid() };

        let group = unsafe { libc::getgrgid(gid) };
        if group.is_null() {
            return Err(CommandError::ExecutionError(format!(
                "no group entry for gid {}",
                gid
            )));
        }
        let group_name = unsafe { CStr::from_ptr((*group).gr_name) }
            .to_string_lossy()
            .into_owned();

        let home = dirs::home_dir().ok_or_else(|| {
            CommandError::ExecutionError("home directory not found".to_string())
        })?;
        let inode = fs::metadata(&home)
            .map_err(|e| CommandError::ExecutionError(format!("{}: {}", home.display(), e)))?
            .ino();

        println!("{}, {}, {}, {}, {}", uid, gid, user, group_name, inode);
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ud_reports_or_flags_a_lookup_failure() {
        let cmd = UserInfoCommand::new();

        // Environment-dependent: either every lookup succeeds and the
        // command continues, or the failing lookup surfaces as an error.
        match cmd.execute(&["ud".to_string()]) {
            Ok(flow) => assert_eq!(flow, Flow::Continue),
            Err(e) => assert!(matches!(e, CommandError::ExecutionError(_))),
        }
    }
}
