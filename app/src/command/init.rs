use std::path::PathBuf;

use dashlink_config::Config;

/// Strategy for initializing the configuration.
///
/// Writes the default configuration to the given path, which is
/// `~/dashlink/config.json` unless `--config` overrides it.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = PathBuf;

    fn execute(&self, config_path: Self::Input) -> anyhow::Result<()> {
        Config::create_at(&config_path)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("🔧 Configuration options:");
        println!("   - exact_docset: search only the listed docsets, not related ones");
        println!("   - languages: language id -> docsets used by 'dashlink search --language'");
        println!();
        Ok(())
    }
}
