//! chipbox demo - entry point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use chipbox::state::{ChipEditor, EditorOptions};
use chipbox::surface::Surface;
use chipbox::view::{app, ChipStyles, ColorConfig};

/// Interactive terminal demo hosting the chip editor widget
#[derive(Parser, Debug)]
#[command(name = "chipbox")]
#[command(version)]
#[command(about = "Edit a list of email addresses as removable chips")]
pub struct Args {
    /// Seed the editor with these addresses
    pub emails: Vec<String>,

    /// Placeholder text for the empty input control
    #[arg(long)]
    pub placeholder: Option<String>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path to log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

fn main() -> Result<(), chipbox::model::AppError> {
    let args = Args::parse();

    // Resolve configuration: defaults → config file → env vars → CLI args
    let config = {
        let config_file = chipbox::config::load_config_with_precedence(args.config.clone())?;
        let merged = chipbox::config::merge_config(config_file);
        let with_env = chipbox::config::apply_env_overrides(merged);

        // --no-color only overrides when explicitly set
        let no_color_override = if args.no_color { Some(true) } else { None };
        chipbox::config::apply_cli_overrides(
            with_env,
            args.placeholder.clone(),
            no_color_override,
            args.log_file.clone(),
        )
    };

    chipbox::logging::init(&config.log_file_path)?;
    info!(config = ?config, "configuration loaded and resolved");

    let mut editor = ChipEditor::new(
        EditorOptions::new()
            .surface(Surface::new())
            .placeholder(&config.placeholder)
            .on_change(|values: &[String]| info!(?values, "email list changed")),
    )?;
    editor.replace_all(args.emails.iter().cloned());
    editor.focus();

    let styles = ChipStyles::with_color_config(ColorConfig::from_env_and_args(config.no_color));
    app::run(editor, styles)?;

    Ok(())
}
