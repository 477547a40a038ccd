use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vitrine::{config, content, generate, output};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(about = "Static site generator for confectionery storefronts")]
#[command(long_about = "\
Static site generator for confectionery storefronts

Builds a single self-contained page from two TOML files.

Content structure:

  content/
  ├── config.toml    # Brand, messaging/social links, palette (optional)
  ├── page.toml      # Ordered [[sections]]: hero, gallery, showcase,
  │                  # features, cta_band, steps
  └── assets/        # Copied verbatim to the output root

Gallery thumbnails open a full-screen preview; every call-to-action button
links to the messaging app configured in config.toml.

Run 'vitrine gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
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
    /// Render the page into the output directory
    Build,
    /// Validate content without building
    Check,
    /// Print the resolved page model as JSON
    Manifest,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            println!("==> Building {}", cli.source.display());
            let report = generate::generate(&cli.source, &cli.output)?;
            output::print_generate_output(&report);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site_config = config::load_config(&cli.source)?;
            let page = content::load_page(&cli.source)?;
            output::print_check_output(&page, &site_config, &cli.source);
            println!("==> Content is valid");
        }
        Command::Manifest => {
            let site_config = config::load_config(&cli.source)?;
            let page = content::load_page(&cli.source)?;
            let manifest = serde_json::json!({
                "config": site_config,
                "page": page,
            });
            println!("{}", serde_json::to_string_pretty(&manifest)?);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
