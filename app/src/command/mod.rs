//! Static strategy pattern for CLI commands.
//!
//! Each subcommand is its own zero-sized strategy type with a typed input,
//! dispatched statically from `main`.

use std::path::Path;

use dashlink_config::Config;

mod info;
mod init;
mod search;
mod version;

pub use info::{InfoInput, InfoStrategy};
pub use init::InitStrategy;
pub use search::{SearchInput, SearchStrategy};
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// # Example
/// ```rust,ignore
/// struct MyStrategy;
///
/// impl CommandStrategy for MyStrategy {
///     type Input = MyInput;
///
///     fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
///         // Command logic here
///         Ok(())
///     }
/// }
/// ```
pub trait CommandStrategy {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Load the config at `path`, falling back to defaults when the file is absent.
fn load_config(path: &Path) -> anyhow::Result<Config> {
    Ok(Config::load_or_default(path)?)
}
