// src/config/model.rs

use serde::Deserialize;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [examples]
/// search_roots = ["examples"]
/// command = ["ruby"]
/// timeout_secs = 30
///
/// [playground]
/// enabled = true
/// url = "https://try.ruby-lang.org/playground/#code="
/// engine = "cruby-3.2.0dev"
/// icon = "https://www.ruby-lang.org/favicon.ico"
///
/// [markup]
/// theme = "InspiredGitHub"
/// escape_html = false
/// ```
///
/// All sections are optional and have reasonable defaults. This is the
/// unchecked form; convert with `ConfigFile::try_from`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub examples: ExamplesSection,

    #[serde(default)]
    pub playground: PlaygroundSection,

    #[serde(default)]
    pub markup: MarkupSection,
}

/// Validated configuration. Only constructed through `TryFrom<RawConfigFile>`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub examples: ExamplesSection,
    pub playground: PlaygroundSection,
    pub markup: MarkupSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        examples: ExamplesSection,
        playground: PlaygroundSection,
        markup: MarkupSection,
    ) -> Self {
        Self {
            examples,
            playground,
            markup,
        }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self::new_unchecked(
            ExamplesSection::default(),
            PlaygroundSection::default(),
            MarkupSection::default(),
        )
    }
}

/// `[examples]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExamplesSection {
    /// Directories searched, in order, for `<root>/<name>/<name>.rb`.
    #[serde(default = "default_search_roots")]
    pub search_roots: Vec<String>,

    /// Interpreter argv prefix; the source path is appended as last argument.
    #[serde(default = "default_command")]
    pub command: Vec<String>,

    /// Upper bound on a single example run. `None` waits indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_search_roots() -> Vec<String> {
    vec!["examples".to_string()]
}

fn default_command() -> Vec<String> {
    vec!["ruby".to_string()]
}

impl Default for ExamplesSection {
    fn default() -> Self {
        Self {
            search_roots: default_search_roots(),
            command: default_command(),
            timeout_secs: None,
        }
    }
}

/// `[playground]` section: the "run it" link injected next to the first
/// code block of each source table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlaygroundSection {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Prefix the percent-encoded source is appended to.
    #[serde(default = "default_playground_url")]
    pub url: String,

    #[serde(default = "default_engine")]
    pub engine: String,

    #[serde(default = "default_icon")]
    pub icon: String,
}

fn default_enabled() -> bool {
    true
}

fn default_playground_url() -> String {
    "https://try.ruby-lang.org/playground/#code=".to_string()
}

fn default_engine() -> String {
    "cruby-3.2.0dev".to_string()
}

fn default_icon() -> String {
    "https://www.ruby-lang.org/favicon.ico".to_string()
}

impl Default for PlaygroundSection {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            url: default_playground_url(),
            engine: default_engine(),
            icon: default_icon(),
        }
    }
}

/// Themes bundled with the highlighter.
pub const HIGHLIGHT_THEMES: &[&str] = &[
    "InspiredGitHub",
    "Solarized (dark)",
    "Solarized (light)",
    "base16-eighties.dark",
    "base16-mocha.dark",
    "base16-ocean.dark",
    "base16-ocean.light",
];

/// `[markup]` section: how comment and code cells are turned into HTML.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarkupSection {
    /// Colour theme for code cells; one of [`HIGHLIGHT_THEMES`].
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Escape raw HTML in example comments instead of passing it through.
    #[serde(default)]
    pub escape_html: bool,
}

fn default_theme() -> String {
    "InspiredGitHub".to_string()
}

impl Default for MarkupSection {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            escape_html: false,
        }
    }
}
