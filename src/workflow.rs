use crate::agents::{InstallerExecutionAgent, InstallerScannerAgent, UPGRADE_PACKAGES};
use crate::error::Result;
use colored::Colorize;

/// Upgrade the pinned Python packages through the ambient installer.
/// The first failing step aborts the run; nothing after it executes.
pub fn execute_upgrade() -> Result<()> {
    println!(
        "{}",
        "Upgrading Python codegen dependencies...".cyan().bold()
    );

    println!("\n{}", "1. Locating package installer...".yellow());
    let scanner = InstallerScannerAgent::new();
    let installer = scanner.locate()?;
    println!(
        "{}",
        format!("✓ Found installer at {}", installer.program.display()).green()
    );

    println!("\n{}", "2. Upgrading packages...".yellow());
    for package in UPGRADE_PACKAGES {
        println!("   • {}", package.bright_cyan());
    }
    let executor = InstallerExecutionAgent::new(&installer.program);
    executor.execute_upgrade()?;

    println!("\n{}", "✨ Packages upgraded successfully!".green().bold());

    Ok(())
}
