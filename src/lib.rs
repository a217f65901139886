//! # Four In A Row
//!
//! Rules engine for Connect Four with a terminal front end built on Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player colours, engine state machine,
//!   win/draw evaluation
//! - [`ui`] — Terminal UI driving the engine from the keyboard
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — File-backed logger setup
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
