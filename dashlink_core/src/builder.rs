use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::URI_SCHEME;
use crate::platform::Platform;
use crate::shell::ShellInvocation;

/// Characters left untouched by ECMAScript `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Prefix that stops Dash from widening a docset filter to related docsets
/// (searching `typescript` would otherwise also hit `vue`).
const EXACT_MARKER: &str = "exact:";

/// Percent-encode a URI component the way browsers' `encodeURIComponent` does.
#[must_use]
pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderOptions {
    /// Prefix every docset with `exact:` so only the named docsets are searched.
    #[serde(default)]
    pub exact_docset: bool,
}

/// Builds the shell command that opens the documentation browser.
///
/// The builder is immutable after construction and every method is a pure
/// function of its configuration and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandBuilder {
    platform: Platform,
    options: BuilderOptions,
}

impl CommandBuilder {
    #[must_use]
    pub const fn new(platform: Platform, options: BuilderOptions) -> Self {
        Self { platform, options }
    }

    #[must_use]
    pub const fn platform(&self) -> &Platform {
        &self.platform
    }

    #[must_use]
    pub const fn options(&self) -> BuilderOptions {
        self.options
    }

    /// Full command line searching `query`, restricted to `docsets` when any
    /// are given.
    ///
    /// The query is percent-encoded; docset names are embedded as-is.
    #[must_use]
    pub fn build_command<S: AsRef<str>>(&self, query: &str, docsets: &[S]) -> String {
        let mut uri = format!("{URI_SCHEME}query={}", encode_uri_component(query));
        let keys = self.docset_keys(docsets);

        if !keys.is_empty() {
            uri.push_str("&keys=");
            uri.push_str(&keys);
        }

        let command = format!(
            "{} {}",
            self.platform.handler_prefix(),
            self.os_specific_uri(&uri)
        );
        debug!(platform = %self.platform, %command, "Built documentation command");
        command
    }

    /// Same as [`build_command`](Self::build_command) with no docset filter.
    #[must_use]
    pub fn build_unfiltered(&self, query: &str) -> String {
        self.build_command::<&str>(query, &[])
    }

    /// Comma-joined docset filter, e.g. `ruby,css`, or an empty string when
    /// `docsets` is empty. Input order is preserved.
    #[must_use]
    pub fn docset_keys<S: AsRef<str>>(&self, docsets: &[S]) -> String {
        let marker = if self.options.exact_docset {
            EXACT_MARKER
        } else {
            ""
        };

        docsets
            .iter()
            .map(|docset| format!("{marker}{}", docset.as_ref()))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Prepare `uri` to be passed as a single shell argument.
    ///
    /// `start` on Windows cannot take the quoted URI, so only the first `&`
    /// is caret-escaped there. Later `&` characters stay literal. Every other
    /// platform gets the URI wrapped in double quotes.
    #[must_use]
    pub fn os_specific_uri(&self, uri: &str) -> String {
        if self.platform.is_windows() {
            uri.replacen('&', "^&", 1)
        } else {
            format!("\"{uri}\"")
        }
    }

    /// How a caller would hand the command for `query` to a shell.
    #[must_use]
    pub fn invocation<S: AsRef<str>>(&self, query: &str, docsets: &[S]) -> ShellInvocation {
        ShellInvocation::for_platform(&self.platform, &self.build_command(query, docsets))
    }
}
