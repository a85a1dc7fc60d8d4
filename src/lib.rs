//! Core library for memegen: caption parsing, ImageMagick invocation and the
//! post-generation actions.
//!
//! A run resolves a source image by name prefix, renders the caption on it
//! with ImageMagick, and then opens, shares or deletes the result:
//!
//! ```text
//! memegen yuno y u no // have your own\\meme generator? --name yuno_generator --dropbox
//! ```

pub mod actions;
pub mod caption;
pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod library;
pub mod options;

use crate::caption::Caption;
use crate::cli::Cli;
use crate::config::Config;
use crate::convert::{annotations, Invocation};
use crate::library::ImageLibrary;
use crate::options::Options;
use clap::Parser;
use std::path::PathBuf;

pub use crate::error::exit_code;

pub const USAGE: &str = r#"> memegen <MEME> [TOP\\LINES // BOTTOM] [options]
    -l --list:     List available memes (only option)
    -n --name:     Name of output file (default: <meme>_)
    -r --random:   Generate a random name of the given length
    -o --open:     Open after generation (default)
    -d --dropbox:  Copy to the shared folder after generation
    -t --top:      Font size of top text
    -b --bottom:   Font size of bottom text
    -T --top-y:    Y position of top text
    -B --bottom-y: Y position of bottom text
"#;

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run_with(&cli)
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

/// Executes one invocation of the tool for already-parsed arguments.
pub fn run_with(cli: &Cli) -> anyhow::Result<()> {
    let config = Config::resolve(cli)?;
    let options = Options::new(cli, &config.style);
    let library = ImageLibrary::new(&config.paths.images, &config.paths.extension);

    if options.list {
        for name in library.list()? {
            println!("  - {name}");
        }
        return Ok(());
    }

    let Some((meme, words)) = cli.words.split_first() else {
        print!("{USAGE}");
        return Ok(());
    };

    config.validate(options.share)?;
    generate(&config, &options, &library, meme, words)
}

fn generate(
    config: &Config,
    options: &Options,
    library: &ImageLibrary,
    meme: &str,
    words: &[String],
) -> anyhow::Result<()> {
    if !options.dry_run {
        actions::ensure_shared_dir(config)?;
    }

    let source = library.find(meme)?;
    let output = PathBuf::from(options.output_file_name(&source));

    let caption = Caption::parse(words);
    log::debug!("Caption segments: {:?}", caption.segments());

    let invocation = Invocation::build(
        config,
        options,
        &source,
        &annotations(&caption, options),
        &output,
    );

    if options.dry_run {
        println!("{invocation}");
        return Ok(());
    }

    invocation.run()?;
    println!("Generated into {}", output.display());

    if options.should_open() {
        actions::open(config, &output)?;
    }

    if options.share {
        let url = actions::share(config, &output)?;
        println!("Shared URL copied to clipboard: {url}");
    }

    if options.should_delete() {
        actions::remove_after(&output, config.actions.delete_delay())?;
    }

    Ok(())
}
