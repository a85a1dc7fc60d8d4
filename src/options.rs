//! Per-run options, built once from the command line and the style defaults.

use crate::cli::Cli;
use crate::config::StyleConfig;
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::path::Path;

const OUTPUT_EXTENSION: &str = "jpg";
const DERIVED_SUFFIX: &str = "_";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub list: bool,
    pub output_name: Option<String>,
    pub random_length: Option<usize>,
    pub open: bool,
    pub share: bool,
    pub top_size: u32,
    pub bottom_size: u32,
    pub top_y: i32,
    pub bottom_y: i32,
    pub kerning: i32,
    pub dry_run: bool,
}

impl Options {
    pub fn new(cli: &Cli, style: &StyleConfig) -> Self {
        Self {
            list: cli.list,
            output_name: cli.name.clone(),
            random_length: cli.random.map(usize::from),
            open: cli.open,
            share: cli.dropbox,
            top_size: cli.top.unwrap_or(style.top_size),
            bottom_size: cli.bottom.unwrap_or(style.bottom_size),
            top_y: cli.top_y.unwrap_or(style.top_y),
            bottom_y: cli.bottom_y.unwrap_or(style.bottom_y),
            kerning: cli.kerning.unwrap_or(style.kerning),
            dry_run: cli.dry_run,
        }
    }

    /// Output file name: an explicit name wins over a random one, which wins
    /// over a name derived from the source file.
    pub fn output_file_name(&self, source: &Path) -> String {
        if let Some(name) = &self.output_name {
            format!("{name}.{OUTPUT_EXTENSION}")
        } else if let Some(length) = self.random_length {
            format!("{}.{OUTPUT_EXTENSION}", random_name(length))
        } else {
            let stem = source
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
            format!("{stem}{DERIVED_SUFFIX}.{OUTPUT_EXTENSION}")
        }
    }

    pub fn should_open(&self) -> bool {
        self.open || !self.share
    }

    pub fn should_delete(&self) -> bool {
        self.share || !self.open
    }
}

fn random_name(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
