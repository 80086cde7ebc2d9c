use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "modtac")]
#[command(about = "Image field layout, scroll telemetry and gallery tooling for ModTac Media", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (or set MODTAC_CONFIG)
    #[arg(long, global = true, value_name = "FILE", env = "MODTAC_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the gallery listing over HTTP
    Serve(ServeArgs),
    /// Gallery operations
    Gallery(GalleryCommand),
    /// Print image field placements for a viewport
    Layout(LayoutArgs),
    /// Pick a column count for the gallery grid
    Columns(ColumnsArgs),
    /// Print scroll telemetry for one or more offsets
    Telemetry(TelemetryArgs),
    /// Print the rotating caption state at a point in time
    Caption(CaptionArgs),
    /// Print the intro overlay phase at a point in time
    Intro(IntroArgs),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct ServeArgs {
    /// Directory holding the gallery images
    #[arg(long)]
    pub dir: Option<PathBuf>,
    /// Address to listen on
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    /// URL prefix prepended to every file name
    #[arg(long)]
    pub prefix: Option<String>,
}

#[derive(Args)]
pub struct GalleryCommand {
    #[command(subcommand)]
    pub action: GalleryAction,
}

#[derive(Subcommand)]
pub enum GalleryAction {
    /// List image URLs in natural order
    List {
        #[arg(long)]
        dir: Option<PathBuf>,
        #[arg(long)]
        prefix: Option<String>,
    },
}

#[derive(Args)]
pub struct LayoutArgs {
    #[arg(long)]
    pub width: f64,
    #[arg(long)]
    pub height: f64,
    /// Overrides the configured seed
    #[arg(long)]
    pub seed: Option<u32>,
    /// Append the shifted copy used to hide the loop seam
    #[arg(long)]
    pub tiled: bool,
    /// JSON file with an array of `{source_ref, label}` items
    #[arg(long, conflicts_with = "dir")]
    pub items: Option<PathBuf>,
    /// Take items from an image directory
    #[arg(long)]
    pub dir: Option<PathBuf>,
    /// Number of placeholder items when no source is given
    #[arg(long, default_value_t = 8)]
    pub count: usize,
}

#[derive(Args)]
pub struct ColumnsArgs {
    /// Number of images in the grid
    #[arg(long)]
    pub count: usize,
    /// Grid width in pixels; derives the column cap from the minimum tile width
    #[arg(long, conflicts_with = "max_cols")]
    pub width: Option<f64>,
    #[arg(long)]
    pub min_cols: Option<usize>,
    #[arg(long)]
    pub max_cols: Option<usize>,
}

#[derive(Args)]
pub struct TelemetryArgs {
    #[arg(long)]
    pub width: f64,
    #[arg(long)]
    pub height: f64,
    /// Offset from the section top in pixels; repeatable
    #[arg(long = "offset", required = true, allow_hyphen_values = true)]
    pub offsets: Vec<f64>,
    /// Section height in percent of the viewport height
    #[arg(long)]
    pub runway_vh: Option<f64>,
}

#[derive(Args)]
pub struct CaptionArgs {
    /// Milliseconds since the caption started
    #[arg(long)]
    pub elapsed_ms: u64,
}

#[derive(Args)]
pub struct IntroArgs {
    /// Milliseconds since the overlay appeared
    #[arg(long)]
    pub at_ms: u64,
    /// When the video reported it could play
    #[arg(long)]
    pub ready_ms: Option<u64>,
    #[arg(long)]
    pub reduced_motion: bool,
}
