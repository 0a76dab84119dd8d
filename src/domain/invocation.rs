//! Invocation configuration value object

use std::path::Path;

use crate::domain::apps::NativeApp;
use crate::domain::error::DispatchError;
use crate::domain::flags::{quote, FlagValue};

/// Ordered flag configuration for a single native app invocation.
///
/// Built once per CLI run, consumed exactly once by the dispatcher.
/// Rendering is deterministic: tokens come out in insertion order, and
/// building twice from the same input yields an identical sequence.
#[derive(Debug, Clone)]
pub struct Invocation {
    app: NativeApp,
    flags: Vec<(&'static str, FlagValue)>,
}

impl Invocation {
    pub fn new(app: NativeApp) -> Self {
        Self {
            app,
            flags: Vec::new(),
        }
    }

    /// The native app this invocation targets.
    pub fn app(&self) -> NativeApp {
        self.app
    }

    /// Append a `--name=value` pair.
    pub fn flag(mut self, name: &'static str, value: impl Into<FlagValue>) -> Self {
        self.flags.push((name, value.into()));
        self
    }

    /// Render the full intermediate command line, app path first.
    ///
    /// String values (the app path included) are double-quoted here; the
    /// quoting is consumed again by [`Invocation::argv`], so the final
    /// token vector never depends on an invoking shell.
    pub fn command_line(&self, app_path: &Path) -> String {
        let mut command = quote(&app_path.display().to_string());
        for (name, value) in &self.flags {
            command.push_str(" --");
            command.push_str(name);
            command.push('=');
            command.push_str(&value.render());
        }
        command
    }

    /// Split the rendered command line into the argument vector handed to
    /// the exec call, using shell-word-splitting rules.
    pub fn argv(&self, app_path: &Path) -> Result<Vec<String>, DispatchError> {
        shell_words::split(&self.command_line(app_path))
            .map_err(|e| DispatchError::MalformedCommandLine(e.to_string()))
    }
}
