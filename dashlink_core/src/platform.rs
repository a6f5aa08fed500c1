use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Operating system the generated command targets.
///
/// Identifiers follow the Node.js `process.platform` convention
/// (`darwin`, `linux`, `win32`). Any other identifier is kept verbatim in
/// [`Platform::Other`] and handled like Linux.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Platform {
    MacOs,
    Linux,
    Windows,
    Other(String),
}

impl Platform {
    pub const DARWIN_ID: &'static str = "darwin";
    pub const LINUX_ID: &'static str = "linux";
    pub const WINDOWS_ID: &'static str = "win32";

    /// Resolve a platform identifier. Never fails: unknown ids become `Other`.
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        match id {
            Self::DARWIN_ID => Self::MacOs,
            Self::LINUX_ID => Self::Linux,
            Self::WINDOWS_ID => Self::Windows,
            other => Self::Other(other.to_string()),
        }
    }

    /// Platform of the running host.
    #[must_use]
    pub fn current() -> Self {
        Self::from_host_os(std::env::consts::OS)
    }

    // `std::env::consts::OS` uses Rust target names, not Node ids.
    fn from_host_os(os: &str) -> Self {
        match os {
            "macos" => Self::MacOs,
            "linux" => Self::Linux,
            "windows" => Self::Windows,
            other => Self::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::MacOs => Self::DARWIN_ID,
            Self::Linux => Self::LINUX_ID,
            Self::Windows => Self::WINDOWS_ID,
            Self::Other(id) => id,
        }
    }

    /// Shell tokens placed before the URI argument.
    ///
    /// On Windows the handler is started once through its bare scheme so Zeal
    /// has a listener up before the real request arrives.
    #[must_use]
    pub const fn handler_prefix(&self) -> &'static str {
        match self {
            Self::MacOs => "open -g",
            Self::Windows => "start dash-plugin:// && start",
            Self::Linux | Self::Other(_) => "zeal",
        }
    }

    #[must_use]
    pub const fn is_windows(&self) -> bool {
        matches!(self, Self::Windows)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Platform {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_id(s))
    }
}
