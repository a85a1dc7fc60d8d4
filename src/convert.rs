//! Builds and runs the ImageMagick invocation that renders a meme.
//!
//! Every caption segment is drawn twice with the same geometry: first with a
//! black outline, then filled without a stroke on top of it.

use crate::caption::Caption;
use crate::config::Config;
use crate::error::MemeError;
use crate::options::Options;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gravity {
    North,
    South,
}

impl fmt::Display for Gravity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gravity::North => f.write_str("North"),
            Gravity::South => f.write_str("South"),
        }
    }
}

/// One caption segment placed on the picture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub text: String,
    pub gravity: Gravity,
    pub point_size: u32,
    pub offset_y: i32,
}

impl Annotation {
    /// Geometry argument for `-annotate`, e.g. `+0+10` or `+0-5`.
    fn geometry(&self) -> String {
        format!("+0{:+}", self.offset_y)
    }
}

/// Places the caption segments.
///
/// A lone segment goes at the top but uses the bottom size and offset.
pub fn annotations(caption: &Caption, options: &Options) -> Vec<Annotation> {
    match caption {
        Caption::Empty => Vec::new(),
        Caption::Single(text) => vec![Annotation {
            text: text.clone(),
            gravity: Gravity::North,
            point_size: options.bottom_size,
            offset_y: options.bottom_y,
        }],
        Caption::TopBottom { top, bottom } => vec![
            Annotation {
                text: top.clone(),
                gravity: Gravity::North,
                point_size: options.top_size,
                offset_y: options.top_y,
            },
            Annotation {
                text: bottom.clone(),
                gravity: Gravity::South,
                point_size: options.bottom_size,
                offset_y: options.bottom_y,
            },
        ],
    }
}

/// A program and its argument list, run without a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl Invocation {
    pub fn build(
        config: &Config,
        options: &Options,
        source: &Path,
        annotations: &[Annotation],
        output: &Path,
    ) -> Self {
        let style = &config.style;
        let mut args: Vec<OsString> = vec![
            source.into(),
            "-font".into(),
            config.paths.font.as_str().into(),
            "-fill".into(),
            style.fill.as_str().into(),
        ];

        for annotation in annotations {
            args.push("-pointsize".into());
            args.push(annotation.point_size.to_string().into());

            for stroke in [style.stroke.as_str(), "none"] {
                args.extend(
                    [
                        "-stroke".to_string(),
                        stroke.to_string(),
                        "-strokewidth".to_string(),
                        style.stroke_width.to_string(),
                        "-gravity".to_string(),
                        annotation.gravity.to_string(),
                        "-kerning".to_string(),
                        options.kerning.to_string(),
                        "-annotate".to_string(),
                        annotation.geometry(),
                        annotation.text.clone(),
                    ]
                    .map(OsString::from),
                );
            }
        }

        args.push(output.into());

        Self {
            program: config.paths.convert.clone(),
            args,
        }
    }

    /// Runs the tool and waits for it, failing on a non-zero exit status.
    pub fn run(&self) -> Result<(), MemeError> {
        log::debug!("Running {self}");

        let status = Command::new(&self.program)
            .args(&self.args)
            .status()
            .map_err(|source| MemeError::ToolLaunch {
                program: self.program.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(MemeError::GenerationFailed {
                program: self.program.clone(),
                status,
            })
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", quote(&self.program.to_string_lossy()))?;
        for arg in &self.args {
            write!(f, " {}", quote(&arg.to_string_lossy()))?;
        }
        Ok(())
    }
}

/// Quotes `arg` for a POSIX shell, so a printed invocation can be pasted back.
fn quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-+_./:=,@%".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', "'\\''"))
    }
}
