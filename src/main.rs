use clap::{Parser, Subcommand};
use moments::content::ContentStore;
use moments::shell::Page;
use moments::{config, generate, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "moments")]
#[command(about = "Single-page photo gallery with a lightbox viewer")]
#[command(long_about = "\
Single-page photo gallery with a lightbox viewer

Builds a one-page portfolio (hero, gallery grid, about, contact) from a list
of images. Selecting a thumbnail opens it full screen; the arrow keys, the
arrow buttons and horizontal swipes move through the images with wrap-around,
and Escape, the close button or a click outside the image closes the viewer.

Content structure:

  content/
  ├── gallery.toml     # Images in display order ([[image]] id, src, title,
  │                    #   category, description)
  ├── config.toml      # Site text, colors and thresholds (optional)
  └── assets/          # Static assets (favicon, fonts) → copied to output root

Run 'moments gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Produce the static site: index page plus one page per lightbox view
    Build,
    /// Validate config and gallery without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Drive the page in-process and print the state after each event
    ///
    /// Events: open:N, next, prev, close, backdrop, image, key:NAME,
    /// swipe:DX[,DY], scroll:Y
    Replay {
        /// Events in the order they happen
        #[arg(required = true, allow_hyphen_values = true)]
        events: Vec<String>,

        /// Print one JSON object per event
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            println!("==> Building {}", cli.source.display());
            let manifest = generate::generate(&cli.source, &cli.output)?;
            output::print_generate_output(&manifest);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            config::load_config(&cli.source)?;
            let store = ContentStore::load(&cli.source)?;
            output::print_check_output(store.get(), &cli.source);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Replay { events, json } => {
            let site_config = config::load_config(&cli.source)?;
            let store = ContentStore::load(&cli.source)?;
            let mut page = Page::new(store, site_config.behavior);
            let steps = page.replay(&events)?;
            output::print_replay_output(&steps, json)?;
        }
    }

    Ok(())
}
