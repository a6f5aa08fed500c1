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

//! Shell command construction for documentation browsers.
//!
//! Given a search query and an optional list of docsets, [`CommandBuilder`]
//! produces the command line that opens Dash (macOS) or Zeal (Linux, Windows)
//! through the `dash-plugin://` URI scheme. Nothing here spawns a process;
//! callers decide how and whether to run the result.

pub mod builder;
pub mod platform;
pub mod shell;

pub use builder::{BuilderOptions, CommandBuilder, encode_uri_component};
pub use platform::Platform;
pub use shell::ShellInvocation;

/// URI scheme registered by Dash and Zeal for search requests.
pub const URI_SCHEME: &str = "dash-plugin://";
