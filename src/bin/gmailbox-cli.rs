#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! CLI for viewing the Gmail inbox Atom feed in a terminal

use clap::Parser;
use gmailbox::{Credentials, FeedClient, FeedConfig, PanelPlacement, TerminalDisplay, refresh};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gmailbox-cli")]
#[command(about = "Render the Gmail inbox Atom feed as a fixed-width panel")]
struct Args {
    /// Panel width in characters (minimum 10)
    #[arg(long, default_value = "80", value_parser = parse_width)]
    width: usize,

    /// Prefer a vertical split for the panel
    #[arg(long)]
    vertical: bool,

    /// Output the parsed feed as JSON instead of rendering a panel
    #[arg(long)]
    json: bool,
}

fn parse_width(s: &str) -> Result<usize, String> {
    let width: usize = s.parse().map_err(|e| format!("Invalid width '{s}': {e}"))?;
    if width < 10 {
        return Err(format!("Width {width} is too narrow (minimum 10)"));
    }
    Ok(width)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = FeedConfig::from_env()?;
    let client = FeedClient::new(config)?;
    let mut display = TerminalDisplay::new(args.width);

    if args.json {
        let credentials = Credentials::obtain(&mut display)?;
        let summary = client.fetch_inbox(&credentials).await?;
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let placement = if args.vertical {
        PanelPlacement::Vertical
    } else {
        PanelPlacement::Horizontal
    };
    refresh(&client, &mut display, placement).await?;

    Ok(())
}
