//! Launcher port interface

use crate::domain::DispatchError;

/// Port for transferring control to a native app.
pub trait AppLauncher {
    /// Launch `argv[0]` with the remaining tokens as its argument list.
    ///
    /// The real implementation replaces the current process image (or, on
    /// hosts without an exec facility, waits for the child and exits with
    /// its code), so it only ever returns on failure. An `Ok` return is
    /// observable from test doubles only.
    fn launch(&self, argv: &[String]) -> Result<(), DispatchError>;
}
