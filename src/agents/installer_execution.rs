use crate::error::{PipupError, Result};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Packages passed to the installer on every run, in order.
///
/// Duplicates the codegen dependencies declared in `pyproject.toml`: pip has
/// no way to install a project's dependencies without the project itself.
// TODO: read these from the manifest once pip can install dependencies only.
pub const UPGRADE_PACKAGES: &[&str] = &["xsdata", "typing_extensions"];

/// InstallerExecutionAgent executes the package installer
pub struct InstallerExecutionAgent {
    program: PathBuf,
}

impl InstallerExecutionAgent {
    pub fn new<P: AsRef<Path>>(program: P) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
        }
    }

    /// Upgrade the fixed package set, streaming installer output
    pub fn execute_upgrade(&self) -> Result<()> {
        let mut args = vec!["install", "--upgrade"];
        args.extend_from_slice(UPGRADE_PACKAGES);
        self.execute_installer_command(&args)
    }

    /// Execute an installer command with live output streaming
    fn execute_installer_command(&self, args: &[&str]) -> Result<()> {
        println!("Executing: {} {}", self.program.display(), args.join(" "));

        let mut command = Command::new(&self.program);
        command
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());

        let mut child = command.spawn().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PipupError::CommandNotFound(self.program.display().to_string())
            } else {
                PipupError::Io(e)
            }
        })?;

        // Stream stdout
        if let Some(stdout) = child.stdout.take() {
            let reader = BufReader::new(stdout);
            for line in reader.lines() {
                if let Ok(line) = line {
                    println!("{}", line);
                }
            }
        }

        // Wait for completion
        let status = child.wait()?;

        if !status.success() {
            return Err(PipupError::InstallerFailed {
                code: status.code().unwrap_or(-1),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::tempdir;

    fn fake_installer(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("pip");
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn succeeding_installer_returns_ok() {
        let dir = tempdir().unwrap();
        let program = fake_installer(dir.path(), "exit 0");
        let agent = InstallerExecutionAgent::new(&program);
        assert!(agent.execute_upgrade().is_ok());
    }

    #[test]
    fn failing_installer_propagates_exit_code() {
        let dir = tempdir().unwrap();
        let program = fake_installer(dir.path(), "exit 7");
        let agent = InstallerExecutionAgent::new(&program);
        let err = agent.execute_upgrade().unwrap_err();
        assert!(matches!(err, PipupError::InstallerFailed { code: 7 }));
    }

    #[test]
    fn missing_program_is_command_not_found() {
        let dir = tempdir().unwrap();
        let agent = InstallerExecutionAgent::new(dir.path().join("pip"));
        let err = agent.execute_upgrade().unwrap_err();
        assert!(matches!(err, PipupError::CommandNotFound(_)));
    }

    #[test]
    fn passes_exact_upgrade_arguments() {
        let dir = tempdir().unwrap();
        let record = dir.path().join("argv");
        let program = fake_installer(
            dir.path(),
            &format!("echo \"$@\" > '{}'", record.display()),
        );
        let agent = InstallerExecutionAgent::new(&program);
        agent.execute_upgrade().unwrap();

        let recorded = fs::read_to_string(&record).unwrap();
        assert_eq!(
            recorded.trim_end(),
            "install --upgrade xsdata typing_extensions"
        );
    }

    #[test]
    fn repeated_runs_pass_identical_arguments() {
        let dir = tempdir().unwrap();
        let record = dir.path().join("argv");
        let program = fake_installer(
            dir.path(),
            &format!("echo \"$@\" >> '{}'", record.display()),
        );
        let agent = InstallerExecutionAgent::new(&program);
        agent.execute_upgrade().unwrap();
        agent.execute_upgrade().unwrap();

        let recorded = fs::read_to_string(&record).unwrap();
        let lines: Vec<&str> = recorded.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], lines[1]);
    }
}
