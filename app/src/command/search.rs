//! Build the documentation browser command for a query.
//!
//! The command is printed, not run: pipe it to a shell or use `--json` to
//! get the program and arguments for a process launcher.

use std::path::PathBuf;

use dashlink_config::Config;
use dashlink_core::{CommandBuilder, Platform, ShellInvocation};
use serde::Serialize;
use tracing::{debug, warn};

/// Input parameters for the Search command strategy.
#[derive(Debug, Clone, Default)]
pub struct SearchInput {
    pub query: String,
    /// Explicit docsets; take precedence over `language`
    pub docsets: Vec<String>,
    /// Language id looked up in the config's language table
    pub language: Option<String>,
    /// Search every docset, ignoring any filter
    pub all: bool,
    /// Force exact docset matching regardless of config
    pub exact: bool,
    /// Platform override; the host platform when `None`
    pub platform: Option<String>,
    pub json: bool,
    pub config_path: PathBuf,
}

#[derive(Debug, Serialize)]
struct SearchOutput<'a> {
    command: &'a str,
    platform: &'a str,
    #[serde(flatten)]
    invocation: ShellInvocation,
}

/// Strategy for building a search command.
#[derive(Debug, Clone, Copy)]
pub struct SearchStrategy;

impl super::CommandStrategy for SearchStrategy {
    type Input = SearchInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = super::load_config(&input.config_path)?;
        let builder = builder_for(&input, &config);
        let docsets = resolve_docsets(&input, &config);
        debug!(query = %input.query, ?docsets, "Resolved search");

        let command = builder.build_command(&input.query, &docsets);

        if input.json {
            let output = SearchOutput {
                command: &command,
                platform: builder.platform().id(),
                invocation: ShellInvocation::for_platform(builder.platform(), &command),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{command}");
        }

        Ok(())
    }
}

fn builder_for(input: &SearchInput, config: &Config) -> CommandBuilder {
    let platform = input
        .platform
        .as_deref()
        .map_or_else(Platform::current, Platform::from_id);

    let mut options = config.builder_options();
    options.exact_docset |= input.exact;

    CommandBuilder::new(platform, options)
}

fn resolve_docsets(input: &SearchInput, config: &Config) -> Vec<String> {
    if input.all {
        return Vec::new();
    }
    if !input.docsets.is_empty() {
        return input.docsets.clone();
    }

    let Some(language) = input.language.as_deref() else {
        return Vec::new();
    };

    config.docsets_for(language).map_or_else(
        || {
            warn!("No docsets configured for language '{language}', searching all docsets");
            Vec::new()
        },
        <[String]>::to_vec,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(query: &str) -> SearchInput {
        SearchInput {
            query: query.to_string(),
            platform: Some("linux".to_string()),
            ..SearchInput::default()
        }
    }

    #[test]
    fn explicit_docsets_win_over_language() {
        let search = SearchInput {
            docsets: vec!["less".to_string()],
            language: Some("css".to_string()),
            ..input("flex")
        };
        assert_eq!(resolve_docsets(&search, &Config::default()), ["less"]);
    }

    #[test]
    fn language_uses_config_table() {
        let config: Config =
            serde_json::from_str(r#"{"languages": {"css": ["css", "less"]}}"#).unwrap();
        let search = SearchInput {
            language: Some("CSS".to_string()),
            ..input("flex")
        };
        assert_eq!(resolve_docsets(&search, &config), ["css", "less"]);
    }

    #[test]
    fn unknown_language_searches_everything() {
        let search = SearchInput {
            language: Some("cobol".to_string()),
            ..input("move")
        };
        assert!(resolve_docsets(&search, &Config::default()).is_empty());
    }

    #[test]
    fn all_clears_docsets() {
        let search = SearchInput {
            docsets: vec!["css".to_string()],
            all: true,
            ..input("flex")
        };
        assert!(resolve_docsets(&search, &Config::default()).is_empty());
    }

    #[test]
    fn exact_flag_overrides_config() {
        let search = SearchInput {
            exact: true,
            ..input("flex")
        };
        let builder = builder_for(&search, &Config::default());
        assert!(builder.options().exact_docset);
        assert_eq!(
            builder.build_command(&search.query, &["css", "less"]),
            r#"zeal "dash-plugin://query=flex&keys=exact:css,exact:less""#
        );
    }

    #[test]
    fn config_exact_applies_without_flag() {
        let config = Config {
            exact_docset: true,
            ..Config::default()
        };
        assert!(builder_for(&input("x"), &config).options().exact_docset);
    }

    #[test]
    fn platform_override_is_used() {
        let search = SearchInput {
            platform: Some("win32".to_string()),
            ..input("grid")
        };
        let builder = builder_for(&search, &Config::default());
        assert_eq!(
            builder.build_command(&search.query, &["css"]),
            "start dash-plugin:// && start dash-plugin://query=grid^&keys=css"
        );
    }

    #[test]
    fn json_output_flattens_invocation() {
        let command = r#"open -g "dash-plugin://query=useState&keys=react""#;
        let output = SearchOutput {
            command,
            platform: "darwin",
            invocation: ShellInvocation::for_platform(&Platform::MacOs, command),
        };
        let value = serde_json::to_value(&output).unwrap();

        assert_eq!(value["command"], command);
        assert_eq!(value["platform"], "darwin");
        assert_eq!(value["program"], "/bin/sh");
        assert_eq!(value["args"][1], command);
    }
}
