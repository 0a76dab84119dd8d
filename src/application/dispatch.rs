//! Dispatch use case: invocation to process replacement

use std::path::PathBuf;

use tracing::debug;

use crate::application::ports::AppLauncher;
use crate::domain::{DispatchError, Invocation};

/// Dispatches one invocation to its native app.
///
/// The dispatcher resolves the app binary inside `app_dir`, renders and
/// splits the command line, and hands the token vector to the launcher.
/// With the real exec launcher a successful dispatch never returns.
pub struct Dispatcher<L: AppLauncher> {
    launcher: L,
    app_dir: PathBuf,
}

impl<L: AppLauncher> Dispatcher<L> {
    pub fn new(launcher: L, app_dir: PathBuf) -> Self {
        Self { launcher, app_dir }
    }

    /// Build the argument vector and transfer control to the native app.
    pub fn dispatch(&self, invocation: &Invocation) -> Result<(), DispatchError> {
        let app_path = self.app_dir.join(invocation.app().file_name());
        debug!(
            "Executing command {}",
            invocation.command_line(&app_path)
        );
        let argv = invocation.argv(&app_path)?;
        self.launcher.launch(&argv)
    }
}
