use std::path::PathBuf;

use clap::Parser;

/// Largest value allowed for any grid coordinate (bounds and placements)
pub const MAX_COORDINATE: i32 = 50;
/// Longest command line a robot accepts (characters)
pub const MAX_COMMAND_LENGTH: usize = 100;
/// Token that ends the session where a placement line is expected
pub const END_TOKEN: &str = "end";
/// Written once the session stops reading input
pub const CLOSING_MESSAGE: &str = "Closing Simulation.";
/// Log level used when neither RUST_LOG nor --verbose say otherwise
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Parser, Debug)]
#[command(name = "martian-robots")]
#[command(about = "Drive robots across a bounded Martian grid", version)]
pub struct Cli {
    /// Read the mission from a file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Log filter written to stderr (e.g. info, debug, martian_robots=trace)
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    /// Verbose output (same as --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn log_filter(&self) -> &str {
        if self.verbose {
            "debug"
        } else {
            &self.log_level
        }
    }
}
