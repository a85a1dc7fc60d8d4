//! Post-generation actions: open the picture, share it, clean it up.

use crate::config::Config;
use crate::error::MemeError;
use anyhow::Context;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

/// Opens `file` with the configured viewer command.
pub fn open(config: &Config, file: &Path) -> anyhow::Result<()> {
    let mut command = external_command("open", &config.actions.open_command)?;
    command.arg(file);

    log::info!("Opening {}", file.display());
    let status = command
        .status()
        .map_err(|err| command_failed("open", &config.actions.open_command, err))?;

    if !status.success() {
        log::warn!("Open command exited with {status}");
    }
    Ok(())
}

/// Copies `file` into the shared folder and puts its public URL on the
/// clipboard. Returns the URL.
pub fn share(config: &Config, file: &Path) -> anyhow::Result<String> {
    let file_name = file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .with_context(|| format!("Output path has no file name: {}", file.display()))?;

    let target: PathBuf = config.share.dir.join(&file_name);
    fs::copy(file, &target).with_context(|| {
        format!(
            "Failed to copy {} to shared folder {}",
            file.display(),
            config.share.dir.display()
        )
    })?;
    log::info!("Copied {} to {}", file.display(), target.display());

    let url = config.public_url(&file_name)?;
    copy_to_clipboard(config, &url)?;
    Ok(url)
}

fn copy_to_clipboard(config: &Config, text: &str) -> anyhow::Result<()> {
    let argv = &config.actions.clipboard_command;
    let mut child = external_command("clipboard", argv)?
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|err| command_failed("clipboard", argv, err))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|err| command_failed("clipboard", argv, err))?;
    }

    let status = child
        .wait()
        .map_err(|err| command_failed("clipboard", argv, err))?;
    if !status.success() {
        return Err(command_failed("clipboard", argv, format!("exited with {status}")).into());
    }
    Ok(())
}

/// Waits `delay`, then deletes `file`.
pub fn remove_after(file: &Path, delay: Duration) -> anyhow::Result<()> {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
    fs::remove_file(file)
        .with_context(|| format!("Failed to delete output file: {}", file.display()))?;
    log::info!("Deleted {}", file.display());
    Ok(())
}

/// Creates the shared folder if it does not exist yet.
pub fn ensure_shared_dir(config: &Config) -> anyhow::Result<()> {
    let dir = &config.share.dir;
    if !dir.is_dir() {
        log::debug!("Creating shared folder {}", dir.display());
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create shared folder: {}", dir.display()))?;
    }
    Ok(())
}

fn external_command(purpose: &'static str, argv: &[String]) -> Result<Command, MemeError> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| command_failed(purpose, argv, "no program configured"))?;
    let mut command = Command::new(program);
    command.args(args);
    Ok(command)
}

fn command_failed(purpose: &'static str, argv: &[String], message: impl ToString) -> MemeError {
    MemeError::CommandFailed {
        purpose,
        command: argv.join(" "),
        message: message.to_string(),
    }
}
