use anyhow::Result;
use clap::{Parser, Subcommand};
use navetta_content::{AppConfig, SiteContent};
use tracing::Level;

#[derive(Parser)]
#[command(name = "navetta", about = "Single-page terminal brochure with scroll-spy navigation")]
struct Cli {
    /// Theme override ("marine" or "ansi"); wins over the config file
    #[arg(long)]
    theme: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the page metadata as JSON
    Meta {
        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = AppConfig::load();

    let mut site = SiteContent::default();
    if let Some(phone) = &config.phone {
        site.meta.phone_display = phone.clone();
    }

    match cli.command {
        Some(Command::Meta { pretty }) => print_meta(&site, pretty),
        None => {
            let theme = cli.theme.as_deref().or(config.theme.as_deref());
            navetta_tui::run(site, theme).await
        }
    }
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .try_init();
}

fn print_meta(site: &SiteContent, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(&site.meta)?
    } else {
        serde_json::to_string(&site.meta)?
    };
    println!("{rendered}");
    Ok(())
}
