use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipupError {
    #[error("Installer '{0}' not found on PATH")]
    CommandNotFound(String),

    #[error("Installer failed with exit code: {code}")]
    InstallerFailed { code: i32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PipupError {
    /// Exit status the wrapper process terminates with for this error.
    /// An installer failure mirrors the installer's own code; a missing
    /// installer uses the shell's command-not-found convention.
    pub fn exit_code(&self) -> i32 {
        match self {
            PipupError::CommandNotFound(_) => 127,
            PipupError::InstallerFailed { code } => *code,
            PipupError::Io(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, PipupError>;
