//! Configuration for the generator.
//!
//! Values are layered: built-in defaults, then a TOML file, then environment
//! variables and command-line flags (both resolved by clap into [`Cli`]).

use crate::cli::Cli;
use crate::error::MemeError;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub share: ShareConfig,
    pub style: StyleConfig,
    pub actions: ActionsConfig,
}

/// Where the tool, the source images and the font live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// ImageMagick executable.
    pub convert: PathBuf,
    /// Directory holding the source images.
    pub images: PathBuf,
    /// Font file path or a font name ImageMagick can resolve.
    pub font: String,
    /// Extension of the images shown by `--list`.
    pub extension: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            convert: PathBuf::from("convert"),
            images: home_dir().join("memes"),
            font: "Impact".to_string(),
            extension: "jpg".to_string(),
        }
    }
}

/// Shared folder settings.
///
/// `root` is the synchronized folder served at `url_base[/account_id]`, and
/// `dir` is the folder inside it that receives the pictures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    pub root: PathBuf,
    pub dir: PathBuf,
    pub url_base: String,
    pub account_id: Option<String>,
}

impl Default for ShareConfig {
    fn default() -> Self {
        let root = home_dir().join("Dropbox").join("Public");
        Self {
            dir: root.join("memes"),
            root,
            url_base: "http://dl.dropbox.com/u".to_string(),
            account_id: None,
        }
    }
}

/// Caption styling defaults. Flags override the size, offset and kerning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub top_size: u32,
    pub bottom_size: u32,
    pub top_y: i32,
    pub bottom_y: i32,
    pub kerning: i32,
    pub fill: String,
    pub stroke: String,
    pub stroke_width: u32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            top_size: 40,
            bottom_size: 40,
            top_y: 10,
            bottom_y: 5,
            kerning: 1,
            fill: "white".to_string(),
            stroke: "black".to_string(),
            stroke_width: 4,
        }
    }
}

/// External commands run after generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionsConfig {
    /// Program and leading arguments; the output path is appended.
    pub open_command: Vec<String>,
    /// Program and arguments; the URL is written to its stdin.
    pub clipboard_command: Vec<String>,
    /// Pause before the output file is deleted, so the viewer can load it.
    pub delete_delay_ms: u64,
}

impl Default for ActionsConfig {
    fn default() -> Self {
        Self {
            open_command: default_open_command(),
            clipboard_command: default_clipboard_command(),
            delete_delay_ms: 1000,
        }
    }
}

impl ActionsConfig {
    pub fn delete_delay(&self) -> Duration {
        Duration::from_millis(self.delete_delay_ms)
    }
}

fn strings(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|part| part.to_string()).collect()
}

fn default_open_command() -> Vec<String> {
    if cfg!(target_os = "macos") {
        strings(&["open"])
    } else if cfg!(windows) {
        strings(&["cmd", "/C", "start", ""])
    } else {
        strings(&["xdg-open"])
    }
}

fn default_clipboard_command() -> Vec<String> {
    if cfg!(target_os = "macos") {
        strings(&["pbcopy"])
    } else if cfg!(windows) {
        strings(&["clip"])
    } else {
        strings(&["xclip", "-selection", "clipboard"])
    }
}

fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Config> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(MemeError::ConfigNotFound(path.to_path_buf()).into());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

        toml::from_str(&content).map_err(|source| {
            anyhow::Error::from(MemeError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })
        })
    }

    /// Loads the first configuration file found in the default locations,
    /// falling back to built-in defaults.
    pub fn load_default() -> anyhow::Result<Config> {
        for path in Self::default_paths() {
            if path.is_file() {
                log::debug!("Loading configuration from {}", path.display());
                return Self::load(&path);
            }
        }

        log::debug!("No configuration file found, using defaults");
        Ok(Config::default())
    }

    /// Default configuration file locations, in lookup order.
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("memegen").join("config.toml"));
        }
        paths.push(PathBuf::from("memegen.toml"));

        paths
    }

    /// Resolves the full configuration for a run: the file named on the command
    /// line (or the default one), with flag and environment overrides applied.
    pub fn resolve(cli: &Cli) -> anyhow::Result<Config> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::load_default()?,
        };
        config.apply_overrides(cli);
        Ok(config)
    }

    /// Applies path overrides given as flags or environment variables.
    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(images) = &cli.images_dir {
            self.paths.images = images.clone();
        }
        if let Some(convert) = &cli.convert {
            self.paths.convert = convert.clone();
        }
        if let Some(font) = &cli.font {
            self.paths.font = font.clone();
        }
        if let Some(dir) = &cli.shared_dir {
            self.share.dir = dir.clone();
        }
        if let Some(root) = &cli.shared_root {
            self.share.root = root.clone();
        }
    }

    /// Checks the values generation depends on. The share settings are only
    /// checked when the picture is going to be shared.
    pub fn validate(&self, sharing: bool) -> Result<(), MemeError> {
        if self.paths.convert.as_os_str().is_empty() {
            return Err(invalid("paths.convert", "must name an executable"));
        }
        if self.paths.font.trim().is_empty() {
            return Err(invalid("paths.font", "must not be empty"));
        }
        if self.style.stroke_width == 0 {
            return Err(invalid("style.stroke_width", "must be greater than 0"));
        }
        if self.actions.open_command.is_empty() {
            return Err(invalid("actions.open_command", "must name a program"));
        }
        if sharing {
            if self.actions.clipboard_command.is_empty() {
                return Err(invalid("actions.clipboard_command", "must name a program"));
            }
            self.base_url()?;
            self.shared_path()?;
        }
        Ok(())
    }

    /// The shared folder relative to the shared root, as URL path segments.
    pub fn shared_path(&self) -> Result<Vec<String>, MemeError> {
        let relative = self
            .share
            .dir
            .strip_prefix(&self.share.root)
            .map_err(|_| MemeError::SharedDirOutsideRoot {
                dir: self.share.dir.clone(),
                root: self.share.root.clone(),
            })?;

        Ok(relative
            .components()
            .map(|component| component.as_os_str().to_string_lossy().into_owned())
            .collect())
    }

    /// Public URL under which a file copied into the shared folder is served.
    /// Every path segment is percent-encoded.
    pub fn public_url(&self, file_name: &str) -> Result<String, MemeError> {
        let mut url = self.base_url()?;
        let shared_path = self.shared_path()?;

        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| invalid("share.url_base", "cannot hold a path"))?;
            segments.pop_if_empty();
            if let Some(account) = self.share.account_id.as_deref().filter(|id| !id.is_empty()) {
                segments.push(account);
            }
            segments.extend(&shared_path);
            segments.push(file_name);
        }

        Ok(url.into())
    }

    fn base_url(&self) -> Result<Url, MemeError> {
        let url = Url::parse(self.share.url_base.trim())
            .map_err(|err| invalid("share.url_base", &err.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(invalid("share.url_base", "cannot hold a path"));
        }
        Ok(url)
    }
}

fn invalid(key: &'static str, message: &str) -> MemeError {
    MemeError::InvalidConfig {
        key,
        message: message.to_string(),
    }
}
