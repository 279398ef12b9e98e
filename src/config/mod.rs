// src/config/mod.rs

pub mod consts;
pub mod credentials;
pub mod options;

pub use credentials::{ConfigFile, Credentials};
pub use options::{ApiOptions, ApiOverrides, ExportFormat, ExportOptions, RateOptions, RunOptions};
