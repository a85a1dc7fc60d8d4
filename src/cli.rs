//! Defines the command-line interface for the application.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "memegen",
    version,
    about = "Compose captioned meme images with ImageMagick.",
    after_help = "Inside the caption, use \\\\ to insert a line break and // to separate top text from bottom text."
)]
pub struct Cli {
    /// The meme to use (file name prefix), followed by the caption words.
    #[arg(value_name = "MEME [TOP\\\\LINES // BOTTOM]")]
    pub words: Vec<String>,

    /// List available memes and exit.
    #[arg(short, long)]
    pub list: bool,

    /// Name of the output file, without the .jpg extension.
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Generate a random alphanumeric output name of this length.
    #[arg(short, long, value_name = "LENGTH", value_parser = clap::value_parser!(u16).range(1..))]
    pub random: Option<u16>,

    /// Open the picture after generation and keep it.
    #[arg(short, long)]
    pub open: bool,

    /// Copy the picture to the shared folder and its public URL to the clipboard.
    #[arg(short, long, visible_alias = "share")]
    pub dropbox: bool,

    /// Font size of the top text.
    #[arg(short, long, value_name = "SIZE")]
    pub top: Option<u32>,

    /// Font size of the bottom text.
    #[arg(short, long, value_name = "SIZE")]
    pub bottom: Option<u32>,

    /// Y position of the top text.
    #[arg(short = 'T', long, value_name = "POS", allow_negative_numbers = true)]
    pub top_y: Option<i32>,

    /// Y position of the bottom text.
    #[arg(short = 'B', long, value_name = "POS", allow_negative_numbers = true)]
    pub bottom_y: Option<i32>,

    /// Letter spacing applied to both captions.
    #[arg(short, long, value_name = "N", allow_negative_numbers = true)]
    pub kerning: Option<i32>,

    /// Configuration file. [default: ~/.config/memegen/config.toml]
    #[arg(short, long, env = "MEMEGEN_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding the source images.
    #[arg(long, env = "MEMEGEN_IMAGES_DIR", value_name = "DIR")]
    pub images_dir: Option<PathBuf>,

    /// ImageMagick executable used to render the picture.
    #[arg(long, env = "MEMEGEN_CONVERT", value_name = "PATH")]
    pub convert: Option<PathBuf>,

    /// Font file or font name for the captions.
    #[arg(long, env = "MEMEGEN_FONT", value_name = "FONT")]
    pub font: Option<String>,

    /// Shared folder the picture is copied into with --dropbox.
    #[arg(long, env = "MEMEGEN_SHARED_DIR", value_name = "DIR")]
    pub shared_dir: Option<PathBuf>,

    /// Synchronized folder served at the public URL; must contain the shared folder.
    #[arg(long, env = "MEMEGEN_SHARED_ROOT", value_name = "DIR")]
    pub shared_root: Option<PathBuf>,

    /// Print the image tool invocation without running anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}
