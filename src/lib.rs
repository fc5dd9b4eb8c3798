//! # Connect Four
//!
//! A two-player gravity-drop grid game with an adversarial search that
//! selects moves for an automated opponent. The core is a fully immutable
//! game-state model: every transition builds a new board, so states can be
//! shared freely between the search, the players and the renderer.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: checkers, board, state machine, scoring
//! - [`ai`] — Player strategies: random mover, alpha-beta minimax bot
//! - [`engine`] — Game loop tying two players and a renderer together
//! - [`console`] — Console renderer and stdin player
//! - [`config`] — TOML configuration loading and validation
//! - [`cli`] — Command-line argument parsing
//! - [`error`] — Structured error types

pub mod ai;
pub mod cli;
pub mod config;
pub mod console;
pub mod engine;
pub mod error;
pub mod game;
