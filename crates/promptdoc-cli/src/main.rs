mod logging;
mod render;
mod tui;

use clap::{Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use promptdoc_core::{Config, Mode};

use render::RenderArgs;

#[derive(Parser)]
#[command(name = "promptdoc")]
#[command(about = "Documentation prompt builder", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a prompt from flags and files
    Render(RenderArgs),
    /// List the sections available in a mode
    Sections {
        /// Catalog to list (domain or readme)
        #[arg(long, default_value = "domain")]
        mode: Mode,
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the default configuration as TOML
    Config,
    /// Open the interactive form
    Tui {
        /// Print the final prompt to stdout after closing the form
        #[arg(long)]
        print_on_exit: bool,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let interactive = matches!(cli.command, Commands::Tui { .. });
    let log = logging::init_logging(interactive);

    let config = Config::load().wrap_err("failed to load configuration")?;
    log.apply_config_level(config.log_level.as_str());

    match cli.command {
        Commands::Render(args) => render::run(args, &config)?,
        Commands::Sections { mode, json: true } => {
            let catalog = serde_json::to_string_pretty(mode.catalog())
                .wrap_err("failed to serialize catalog")?;
            println!("{catalog}");
        }
        Commands::Sections { mode, json: false } => {
            println!("{} sections:", mode.title());
            for section in mode.catalog() {
                let marker = if section.default_enabled { "x" } else { " " };
                println!("  [{}] {:<20} {}", marker, section.id, section.label);
            }
        }
        Commands::Config => {
            print!("{}", Config::default_config_string());
        }
        Commands::Tui { print_on_exit } => {
            let prompt = tui::run(config)
                .await
                .map_err(|e| color_eyre::eyre::eyre!("{e}"))?;
            if print_on_exit {
                println!("{prompt}");
            }
        }
    }

    Ok(())
}
