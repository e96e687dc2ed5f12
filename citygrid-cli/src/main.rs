//! Command-line front end for the street grid generator.
//!
//! Parses the six positional grid parameters and streams the SQL script to
//! stdout. Diagnostics go to stderr, controlled by `RUST_LOG`.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use citygrid_core::grid::GridConfig;
use citygrid_core::sql::write_script;
use clap::Parser;
use geo::Point;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Emit a SQL script seeding a Manhattan-style street grid
///
/// Nodes are laid out on a rectangular lattice starting at the given
/// top-left corner and inserted into `streetnodes`; the street segments
/// joining them along both axes are inserted into `streets`. The whole
/// script is wrapped in a single transaction and written to stdout.
#[derive(Parser, Debug)]
#[command(name = "citygrid", version)]
struct Cli {
    /// X coordinate of the city's top-left corner
    #[arg(allow_negative_numbers = true)]
    x: f64,
    /// Y coordinate of the city's top-left corner
    #[arg(allow_negative_numbers = true)]
    y: f64,
    /// Number of blocks along the X axis
    #[arg(allow_negative_numbers = true)]
    num_x: i64,
    /// Number of blocks along the Y axis
    #[arg(allow_negative_numbers = true)]
    num_y: i64,
    /// Distance between blocks along the X axis
    #[arg(allow_negative_numbers = true)]
    dist_x: f64,
    /// Distance between blocks along the Y axis
    #[arg(allow_negative_numbers = true)]
    dist_y: f64,
}

impl Cli {
    fn into_config(self) -> GridConfig {
        GridConfig::new(
            Point::new(self.x, self.y),
            self.num_x,
            self.num_y,
            self.dist_x,
            self.dist_y,
        )
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = Cli::parse().into_config();

    let stdout = io::stdout().lock();
    let mut out = BufWriter::new(stdout);
    let result = write_script(&mut out, &config).and_then(|()| out.flush().map_err(Into::into));
    if let Err(e) = result {
        error!("failed to write grid script: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
