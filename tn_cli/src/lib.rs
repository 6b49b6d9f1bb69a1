//! Command-line front end for the `tourney` schedule generators.
//!
//! Collects a field (from flags or interactively), generates the schedule and
//! prints it as text or JSON.

pub mod config;
pub mod input;
pub mod render;
