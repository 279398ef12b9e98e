//! # Reach “specs” module
//!
//! Everything that knows the **shape of the data** on both sides of the wire:
//! the targeting spec we send, and the estimate body we get back.
//!
//! ## What lives here
//! - **Targeting specs** (`targeting`): parse, minify, flatten into columns.
//! - **Reach wire shapes** (`reach`): the query pairs for one GET, and
//!   `process`, which joins a spec with its response into a `ResultRow`.
//!
//! ## What does **not** live here
//! - **Networking / throttling** – `core::net` and `core::throttle`, driven by
//!   `client::ReachClient`.
//! - **Table assembly / export** – `table`, `csv`, `file`.
//!
//! ## Typical call chain
//! ```text
//! runner → TargetingSpec::from_path → ReachClient::request → reach::process
//!                                                        ↘  ResultRow → ReachTable
//! ```
//!
//! Specs should be testable **offline**: nothing in here does I/O beyond
//! reading a spec file.
pub mod reach;
pub mod targeting;

pub use reach::{process, ReachQuery, ResultRow};
pub use targeting::{Cell, TargetingSpec};
