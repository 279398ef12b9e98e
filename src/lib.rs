// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod client;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod file;
pub mod progress;
pub mod runner;
pub mod specs;
pub mod table;

pub use client::ReachClient;
pub use error::{ReachError, Result};
pub use specs::{process, Cell, ResultRow, TargetingSpec};
pub use table::ReachTable;
