pub mod installer_execution;
pub mod installer_scanner;

pub use installer_execution::{InstallerExecutionAgent, UPGRADE_PACKAGES};
pub use installer_scanner::InstallerScannerAgent;
