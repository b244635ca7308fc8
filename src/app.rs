//! Orchestration of one generation run: load, build, report and write.

use std::fs;

use color_eyre::eyre::{Result, WrapErr as _};

use crate::{builder::GridBuilder, cli::Cli, config::Config};

/// Fixed name of the output file the finished grid is written to.
///
/// This constant is carried over from the exercise this generator feeds; the consuming
/// maze solver looks the file up by exactly this name, so it is not configurable.
const OUTPUT_FILE: &str = "SalidaLaberinto.txt";

/// Runs one complete generation from a configuration file to the output map.
///
/// This function reads and parses the configuration, builds the grid from it with a
/// freshly seeded random source, prints every rejected placement to the diagnostic
/// output and writes the rendered character map to [`OUTPUT_FILE`]. An unreadable
/// configuration aborts before any grid exists, leaving no output file behind.
///
/// # Errors
///
/// This function may return errors if:
/// - the configuration file cannot be read
/// - the configuration is malformed
/// - the random obstacle count exceeds the free cells left by the fixed layout
/// - the output file cannot be written
pub fn run(cli: &Cli) -> Result<()> {
    let contents = fs::read_to_string(&cli.config)
        .wrap_err_with(|| format!("failed to load configuration file '{}'", cli.config.display()))?;
    let config = Config::parse(&contents)?;

    let mut builder = GridBuilder::new(config.dimension);
    builder.apply(&config, &mut rand::thread_rng())?;

    for rejection in builder.rejections() {
        eprintln!("{rejection}");
    }

    fs::write(OUTPUT_FILE, builder.grid().render())
        .wrap_err_with(|| format!("failed to write output file '{OUTPUT_FILE}'"))
}
