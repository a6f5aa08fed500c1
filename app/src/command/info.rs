use std::path::PathBuf;

use dashlink_core::{CommandBuilder, Platform};
use tracing::info;

/// Input parameters for the Info command strategy.
#[derive(Debug, Clone)]
pub struct InfoInput {
    pub config_path: PathBuf,
    /// Platform override; the host platform when `None`
    pub platform: Option<String>,
}

/// Strategy for displaying the resolved configuration.
///
/// Prints the config location, the platform the commands target, the handler
/// that will be invoked and the language to docset table.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = InfoInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let exists = input.config_path.exists();
        let config = super::load_config(&input.config_path)?;
        let platform = input
            .platform
            .as_deref()
            .map_or_else(Platform::current, Platform::from_id);
        info!("Showing configuration for platform {platform}");

        let builder = CommandBuilder::new(platform, config.builder_options());

        println!("=== dashlink Configuration ===\n");

        println!("Config File:");
        println!("  Path: {}", input.config_path.display());
        if exists {
            println!("  Status: Loaded");
        } else {
            println!("  Status: Not found (using defaults)");
        }
        println!();

        println!("Platform:");
        println!("  Id: {}", builder.platform());
        println!("  Handler: {}", builder.platform().handler_prefix());
        println!("  Example: {}", builder.build_command("query", &["docset"]));
        println!();

        println!("Search:");
        println!("  Exact Docset: {}", config.exact_docset);
        println!();

        println!("Languages:");
        if config.languages.is_empty() {
            println!("  (empty)");
        }
        for (language, docsets) in &config.languages {
            println!("  {language}: {}", docsets.join(", "));
        }

        Ok(())
    }
}
