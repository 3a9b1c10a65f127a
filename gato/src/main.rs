// ABOUTME: Main entry point for the gato application
// ABOUTME: Parses flags, loads configuration, and routes to the selected display mode

use anyhow::{Context, Result};
use clap::Parser;
use gato::cli::{Cli, Mode, TextSource};
use gato::cli_output::CliOutput;
use gato::commands;
use gato::config::Config;
use gato::constants::app::EMOJI_DIR_ENV;
use gato::emoji::{Emojifier, GlyphDirectory};
use gato::error::GatoError;
use gato::image_protocols::KittyProtocol;
use log::LevelFilter;
use std::env;
use std::io;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let use_color = !cli.no_color && env::var_os("NO_COLOR").is_none();
    let output = if use_color {
        CliOutput::new()
    } else {
        CliOutput::with_color(false)
    };

    if let Err(err) = run(cli, &output).await {
        output.error(&format!("{:#}", err));
        if let Some(help) = err.downcast_ref::<GatoError>().and_then(GatoError::help_text) {
            output.info(help);
        }
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

async fn run(cli: Cli, output: &CliOutput) -> Result<()> {
    let mode = cli.mode().context("No display mode selected")?;
    let protocol = KittyProtocol;
    let mut stdout = io::stdout().lock();

    match mode {
        Mode::Image(path) => commands::show_image(&mut stdout, &protocol, &path),
        Mode::Gif(path) => commands::play_gif(&mut stdout, &protocol, &path).await,
        Mode::Emojify(source) => {
            let config = match cli.config {
                Some(ref path) => Config::load_from_file(path)?,
                None => Config::load()?,
            };
            let emoji_dir = config.resolve_emoji_dir(cli.path, env::var_os(EMOJI_DIR_ENV))?;
            if !emoji_dir.is_dir() {
                output.warning(&format!(
                    "Emoji directory {} does not exist; tokens will be shown as text",
                    emoji_dir.display()
                ));
            }
            log::debug!("Using emoji directory {}", emoji_dir.display());

            let emojifier = Emojifier::new(
                GlyphDirectory::new(emoji_dir),
                protocol,
                config.emoji_placement(),
            );
            match source {
                TextSource::Stdin => {
                    commands::emojify_lines(&emojifier, io::stdin().lock(), &mut stdout)
                }
                TextSource::Text(text) => commands::emojify_text(&emojifier, &text, &mut stdout),
            }
        }
    }
}
