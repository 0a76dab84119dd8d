//! Install-directory resolution and native app environment

use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::DispatchError;

/// Overrides the directory the native apps are resolved from.
pub const APP_DIR_ENV: &str = "AIS_APP_DIR";

/// Media-plugin search path read by the native apps.
pub const GST_PLUGIN_PATH_ENV: &str = "GST_PLUGIN_PATH";

/// Makes the native apps mirror their logs onto stderr.
pub const GLOG_ALSOLOGTOSTDERR_ENV: &str = "GLOG_alsologtostderr";

/// Directory holding the native app binaries.
///
/// `AIS_APP_DIR` wins when set (relocated installs, tests); otherwise the
/// apps are expected next to the `aisctl` executable itself.
pub fn app_dir() -> Result<PathBuf, DispatchError> {
    if let Some(dir) = env::var_os(APP_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    let exe = env::current_exe()
        .map_err(|e| DispatchError::InstallDirUnresolved(e.to_string()))?;
    let dir = exe.parent().ok_or_else(|| {
        DispatchError::InstallDirUnresolved("executable has no parent directory".to_string())
    })?;
    Ok(dir.to_path_buf())
}

/// Set the environment variables the native apps' media and logging
/// subsystems read. The mutation is process-wide for the remainder of this
/// process's lifetime, which ends at exec.
pub fn prepare_environment(app_dir: &Path) {
    let plugin_path = app_dir.join("gst-plugins");
    debug!("Setting GST_PLUGIN_PATH to \"{}\"", plugin_path.display());
    env::set_var(GST_PLUGIN_PATH_ENV, &plugin_path);
    env::set_var(GLOG_ALSOLOGTOSTDERR_ENV, "1");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepare_environment_points_plugins_under_app_dir() {
        prepare_environment(Path::new("/opt/aisctl"));
        assert_eq!(
            env::var(GST_PLUGIN_PATH_ENV).unwrap(),
            Path::new("/opt/aisctl").join("gst-plugins").display().to_string()
        );
        assert_eq!(env::var(GLOG_ALSOLOGTOSTDERR_ENV).unwrap(), "1");
    }
}
