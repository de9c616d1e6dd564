// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "fly-cam")]
#[command(about = "Fly-style debug camera demo", long_about = None)]
pub struct Cli {
    /// Path to a JSON camera settings file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Invert the Y axis for mouse look
    #[arg(long, default_value = "false")]
    pub invert_y: bool,

    /// Initial exponential speed boost (each unit doubles speed)
    #[arg(long)]
    pub boost: Option<f32>,
}
