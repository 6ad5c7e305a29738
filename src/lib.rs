//! # Connect Four
//!
//! A two-player Connect Four engine with a terminal front end built on
//! Ratatui. The engine owns the board, resolves column drops, detects
//! four-in-a-row along every axis and locks the game on a win or a draw.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, players, run detection, engine
//! - [`ui`]: Terminal UI that renders the board and forwards key presses
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
