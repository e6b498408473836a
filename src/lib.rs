//! Snake on a toroidal grid.
//!
//! The game itself lives in [`board`], [`food`], [`snake`] and [`sim`] and has
//! no I/O of its own; [`input`], [`render`] and [`pacing`] are the terminal
//! collaborators the simulation loop is driven with.

pub mod board;
pub mod config;
pub mod food;
pub mod input;
pub mod pacing;
pub mod render;
pub mod sim;
pub mod snake;

pub use board::{Board, Cell, Direction};
pub use config::{Cli, Config};
pub use sim::{Simulation, StepResult};
