use crate::error::{PipupError, Result};
use std::ffi::OsString;
use std::path::PathBuf;

/// Installer executables probed on PATH, in preference order.
const INSTALLER_CANDIDATES: &[&str] = &["pip", "pip3"];

/// InstallerScannerAgent resolves the package installer before any work runs
pub struct InstallerScannerAgent;

impl InstallerScannerAgent {
    pub fn new() -> Self {
        Self
    }

    /// Resolves the installer executable against the process PATH
    pub fn locate(&self) -> Result<InstallerInfo> {
        Self::locate_in(std::env::var_os("PATH"))
    }

    fn locate_in(search_path: Option<OsString>) -> Result<InstallerInfo> {
        let cwd = std::env::current_dir()?;

        for candidate in INSTALLER_CANDIDATES {
            if let Ok(program) = which::which_in(candidate, search_path.as_ref(), &cwd) {
                return Ok(InstallerInfo { program });
            }
        }

        Err(PipupError::CommandNotFound(INSTALLER_CANDIDATES.join(" or ")))
    }
}

#[derive(Debug, Clone)]
pub struct InstallerInfo {
    pub program: PathBuf,
}
