#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! User configuration for `dashlink`, stored as JSON under `~/dashlink/`.

mod error;
mod schema;

pub use error::{Error, Result};
pub use schema::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, Config};
