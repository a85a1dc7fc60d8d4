//! Defines custom error types for the application.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MemeError {
    #[error("Source meme not found: no file in {} starts with '{prefix}'", dir.display())]
    SourceNotFound { prefix: String, dir: PathBuf },

    #[error("Failed to launch image tool '{}': {source}. Meme generation failed.", program.display())]
    ToolLaunch {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Image tool '{}' exited with {status}. Meme generation failed.", program.display())]
    GenerationFailed { program: PathBuf, status: ExitStatus },

    #[error("Failed to run {purpose} command '{command}': {message}")]
    CommandFailed {
        purpose: &'static str,
        command: String,
        message: String,
    },

    #[error("Configuration file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Failed to parse configuration file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidConfig { key: &'static str, message: String },

    #[error(
        "Shared folder {} is not inside the shared root {}; set share.root in the configuration or pass --shared-root",
        dir.display(),
        root.display()
    )]
    SharedDirOutsideRoot { dir: PathBuf, root: PathBuf },
}

impl MemeError {
    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            MemeError::SourceNotFound { .. } => 2,
            MemeError::ToolLaunch { .. } | MemeError::GenerationFailed { .. } => 3,
            _ => 1,
        }
    }
}

/// Maps any error chain to the exit code the binary reports.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<MemeError>())
        .map_or(1, MemeError::exit_code)
}
