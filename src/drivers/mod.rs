//! Front-end drivers for the game engine.

mod console;
mod tui;

pub use console::ConsoleDriver;
pub use tui::TuiDriver;

use anyhow::Result;

/// Capability shared by the interchangeable front-ends.
///
/// The launcher constructs one driver and calls [`GameDriver::run`];
/// each driver owns its engine instance and any display-only state.
pub trait GameDriver {
    /// Drives the engine until the player quits.
    fn run(&mut self) -> Result<()>;
}
