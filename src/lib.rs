//! Maze scenario generation from line-oriented text configurations.
//!
//! This crate reads a textual configuration describing a square maze grid, places its fixed
//! obstacles, start and goal cells, fills in the configured number of randomly sampled
//! obstacles while avoiding collisions, and writes the finished grid as a character map for
//! a maze-solving exercise to consume. There is no solving and no interactivity here; the
//! crate is purely a scenario generator.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
mod builder;
mod cli;
mod config;
mod grid;
mod types;

pub use app::run;
pub use cli::Cli;
