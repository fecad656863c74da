use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("report generator not found: {0}")]
    GeneratorMissing(PathBuf),

    #[error("no python interpreter found: install python3 or python")]
    NoInterpreter,

    #[error("failed to launch report generator: {0}")]
    GeneratorSpawn(String),

    #[error("report generator exited with code {code}")]
    GeneratorFailed { code: i32 },

    #[error("generated report not found: {0}")]
    ArtifactMissing(PathBuf),

    #[error("git add failed: {0}")]
    GitFailed(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PublishError {
    /// Process exit code to propagate for this error.
    /// The generator's own exit code passes through; everything else is 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            PublishError::GeneratorFailed { code } => *code,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, PublishError>;
