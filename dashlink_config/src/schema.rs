use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use dashlink_core::BuilderOptions;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};

pub const CONFIG_DIR_NAME: &str = "dashlink";
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Restrict searches to exactly the listed docsets.
    #[serde(default)]
    pub exact_docset: bool,
    /// Editor language id to the docsets searched for it, in priority order.
    #[serde(default = "Config::default_languages")]
    pub languages: BTreeMap<String, Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exact_docset: false,
            languages: Self::default_languages(),
        }
    }
}

impl Config {
    fn default_languages() -> BTreeMap<String, Vec<String>> {
        const TABLE: &[(&str, &[&str])] = &[
            ("c", &["c", "glib", "gl2", "gl3", "gl4", "manpages"]),
            ("cpp", &["cpp", "net", "boost", "qt", "cvcpp", "cocos2dx", "c", "manpages"]),
            ("css", &["css", "bootstrap", "foundation", "less", "awesome", "cordova", "phonegap"]),
            ("go", &["go", "godoc"]),
            ("html", &["html", "svg", "css", "bootstrap", "foundation", "awesome", "javascript", "jquery"]),
            ("java", &["java", "javafx", "grails", "groovy", "playjava", "spring", "cvj", "processing"]),
            ("javascript", &["javascript", "jquery", "jqueryui", "backbone", "lodash", "underscore", "moment", "nodejs"]),
            ("javascriptreact", &["react", "javascript", "nodejs"]),
            ("json", &["json"]),
            ("less", &["less"]),
            ("markdown", &["markdown"]),
            ("php", &["php", "wordpress", "drupal", "zend", "laravel", "yii", "joomla", "symfony"]),
            ("python", &["python", "django", "twisted", "sphinx", "flask", "tornado", "sqlalchemy", "numpy"]),
            ("ruby", &["ruby", "rubygems", "rails"]),
            ("rust", &["rust"]),
            ("scss", &["sass", "compass", "bourbon", "neat", "susy", "css"]),
            ("shellscript", &["bash", "manpages"]),
            ("sql", &["mysql", "sqlite", "psql"]),
            ("typescript", &["typescript", "javascript", "nodejs"]),
            ("typescriptreact", &["typescript", "react", "javascript", "nodejs"]),
            ("vue", &["vue", "javascript", "typescript"]),
            ("yaml", &["chef", "ansible"]),
        ];

        TABLE
            .iter()
            .map(|(language, docsets)| {
                (
                    (*language).to_string(),
                    docsets.iter().map(ToString::to_string).collect(),
                )
            })
            .collect()
    }

    #[must_use]
    pub const fn builder_options(&self) -> BuilderOptions {
        BuilderOptions {
            exact_docset: self.exact_docset,
        }
    }

    /// Docsets configured for an editor language id. Lookup ignores ASCII case.
    #[must_use]
    pub fn docsets_for(&self, language: &str) -> Option<&[String]> {
        self.languages
            .get(&language.to_ascii_lowercase())
            .map(Vec::as_slice)
    }

    fn config_dir() -> Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or(Error::HomeDirUnavailable)?
            .join(CONFIG_DIR_NAME))
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Explicit `path` if given, otherwise `~/dashlink/config.json`.
    pub fn resolve_path(path: Option<&Path>) -> Result<PathBuf> {
        path.map_or_else(Self::default_path, |p| Ok(p.to_path_buf()))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Like [`load_from`](Self::load_from), but a missing file yields the
    /// defaults. A file that exists and fails to parse is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load_from(path) {
            Err(Error::NotFound(_)) => {
                debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Write the default config to `path`, creating parent directories.
    /// Never overwrites an existing file.
    pub fn create_at(path: &Path) -> Result<()> {
        if path.exists() {
            return Err(Error::AlreadyExists(path.to_path_buf()));
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&Self::default()).map_err(Error::Serialize)?;
        std::fs::write(path, content)?;

        info!("Created config file at {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_fuzzy_with_language_table() {
        let config = Config::default();
        assert!(!config.exact_docset);
        assert_eq!(
            config.docsets_for("typescript"),
            Some(&["typescript".to_string(), "javascript".into(), "nodejs".into()][..])
        );
    }

    #[test]
    fn language_lookup_ignores_case() {
        let config = Config::default();
        assert_eq!(config.docsets_for("Rust"), Some(&["rust".to_string()][..]));
        assert_eq!(config.docsets_for("brainfuck"), None);
    }

    #[test]
    fn empty_object_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn explicit_languages_replace_table() {
        let config: Config =
            serde_json::from_str(r#"{"exact_docset": true, "languages": {"css": ["less"]}}"#)
                .unwrap();
        assert!(config.builder_options().exact_docset);
        assert_eq!(config.languages.len(), 1);
        assert_eq!(config.docsets_for("css"), Some(&["less".to_string()][..]));
    }

    #[test]
    fn create_then_load_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        Config::create_at(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn create_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{"exact_docset": true}"#).unwrap();

        let err = Config::create_at(&path).unwrap_err();
        assert!(matches!(err, Error::AlreadyExists(p) if p == path));
        let kept = std::fs::read_to_string(&path).unwrap();
        assert_eq!(kept, r#"{"exact_docset": true}"#);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        assert!(matches!(Config::load_from(&path), Err(Error::NotFound(_))));
        assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());
    }

    #[test]
    fn malformed_file_is_an_error_even_with_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "{ not json").unwrap();

        let err = Config::load_or_default(&path).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
        assert!(err.to_string().starts_with("Invalid config file"));
    }

    #[test]
    fn resolve_path_prefers_explicit() {
        let explicit = Path::new("/tmp/custom.json");
        assert_eq!(
            Config::resolve_path(Some(explicit)).unwrap(),
            explicit.to_path_buf()
        );
    }
}
