//! PromptDesk - terminal console for tool definitions and industry scenario prompts
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;

use promptdesk_app::config::{init_config_dir, load_settings};
use promptdesk_app::AppState;

/// PromptDesk - manage tool definitions and industry scenario prompts
#[derive(Parser, Debug)]
#[command(name = "promptdesk")]
#[command(about = "Terminal console for tool definitions and industry scenario prompts", long_about = None)]
struct Args {
    /// Directory containing .promptdesk/config.toml
    #[arg(long, value_name = "PATH", default_value = ".")]
    config_dir: PathBuf,

    /// Start with empty tool and prompt lists
    #[arg(long)]
    no_seed: bool,

    /// Print the effective catalog as JSON and exit
    #[arg(long)]
    print_catalog: bool,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    promptdesk_core::logging::init()?;

    if args.init_config {
        let path = init_config_dir(&args.config_dir)?;
        println!("Config file: {}", path.display());
        return Ok(());
    }

    let mut settings = load_settings(&args.config_dir);
    if args.no_seed {
        settings.behavior.seed_examples = false;
    }
    tracing::info!(
        "Loaded settings: seed_examples={}",
        settings.behavior.seed_examples
    );

    if args.print_catalog {
        println!("{}", serde_json::to_string_pretty(&settings.catalog)?);
        return Ok(());
    }

    promptdesk_tui::run(AppState::new(settings)).await?;
    Ok(())
}
