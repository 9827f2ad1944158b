use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::handlers::walk::WalkStep;

#[derive(Parser)]
#[command(name = "wrapped")]
#[command(about = "Render a swipeable year-in-review slideshow", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true, value_name = "FILE", env = "WRAPPED_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a deck to a standalone HTML document
    Render(RenderArgs),
    /// Summarize the slides of a deck
    Inspect(DeckArgs),
    /// Run a headless session over a deck and report where it ends up
    Walk(WalkArgs),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct DeckArgs {
    /// Path to the deck JSON file (or set WRAPPED_DECK env var)
    #[arg(value_name = "DECK", env = "WRAPPED_DECK")]
    pub deck: Option<PathBuf>,
}

#[derive(Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub deck: DeckArgs,
    /// Output file; the document goes to stdout when omitted
    #[arg(long, short)]
    pub out: Option<PathBuf>,
    /// Document title
    #[arg(long)]
    pub title: Option<String>,
    /// Stylesheet to link, in order
    #[arg(long = "stylesheet")]
    pub stylesheets: Vec<String>,
    /// Script to include after the slides, in order
    #[arg(long = "script")]
    pub scripts: Vec<String>,
    /// Use sequential card ids instead of random ones
    #[arg(long)]
    pub stable_ids: bool,
}

#[derive(Args)]
pub struct WalkArgs {
    #[command(flatten)]
    pub deck: DeckArgs,
    /// Steps to replay: down, up, top, next@SLIDE, prev@SLIDE, wait:MS
    #[arg(long = "step", value_name = "STEP")]
    pub steps: Vec<WalkStep>,
}
