//! Exec-based launcher adapter

use std::io;
use std::process::Command;

use crate::application::ports::AppLauncher;
use crate::domain::DispatchError;

/// Launcher that replaces the current process with the native app.
pub struct ExecLauncher;

impl AppLauncher for ExecLauncher {
    #[cfg(unix)]
    fn launch(&self, argv: &[String]) -> Result<(), DispatchError> {
        use std::os::unix::process::CommandExt;

        let (program, args) = split_argv(argv)?;
        // exec only returns on failure; on success the native app takes
        // over this process id and its exit code becomes ours.
        let err = Command::new(program).args(args).exec();
        Err(launch_error(program, err))
    }

    // Without an exec facility the child is spawned and awaited, and its
    // exit code forwarded, so the observable contract is unchanged.
    #[cfg(not(unix))]
    fn launch(&self, argv: &[String]) -> Result<(), DispatchError> {
        let (program, args) = split_argv(argv)?;
        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|e| launch_error(program, e))?;
        std::process::exit(status.code().unwrap_or(1));
    }
}

fn split_argv(argv: &[String]) -> Result<(&String, &[String]), DispatchError> {
    argv.split_first().ok_or_else(|| DispatchError::LaunchFailed {
        app: String::new(),
        message: "empty argument vector".to_string(),
    })
}

fn launch_error(program: &str, err: io::Error) -> DispatchError {
    let message = if err.kind() == io::ErrorKind::NotFound {
        "no such app; reinstalling the aisctl package may fix this".to_string()
    } else {
        err.to_string()
    };
    DispatchError::LaunchFailed {
        app: program.to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_binary_reports_launch_failure() {
        let argv = vec![
            "/nonexistent/aisctl-test/manager_app".to_string(),
            "--op_id=1".to_string(),
        ];
        let err = ExecLauncher.launch(&argv).unwrap_err();
        match err {
            DispatchError::LaunchFailed { app, message } => {
                assert_eq!(app, "/nonexistent/aisctl-test/manager_app");
                assert!(message.contains("no such app"));
            }
            other => panic!("Expected LaunchFailed, got {:?}", other),
        }
    }

    #[test]
    fn empty_argv_is_rejected() {
        let err = split_argv(&[]).unwrap_err();
        assert!(matches!(err, DispatchError::LaunchFailed { .. }));
    }
}
