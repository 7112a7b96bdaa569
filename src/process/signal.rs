use crate::process::ProcessError;

use libc::{sighandler_t, signal, SIGINT, SIG_ERR};

pub extern "C" fn handle_sigint(_: i32) {
    // Do nothing, let the child process handle the signal
}

pub fn setup_signal_handlers() -> Result<(), ProcessError> {
    let previous = unsafe { signal(SIGINT, handle_sigint as sighandler_t) };
    if previous == SIG_ERR {
        return Err(ProcessError::SignalError(
            "failed to install SIGINT handler".to_string(),
        ));
    }
    Ok(())
}
