// src/config/validate.rs

use crate::config::model::{
    ConfigFile, ExamplesSection, MarkupSection, PlaygroundSection, RawConfigFile, HIGHLIGHT_THEMES,
};
use crate::errors::{ByExampleError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = ByExampleError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_examples(&raw.examples)?;
        validate_playground(&raw.playground)?;
        validate_markup(&raw.markup)?;
        Ok(ConfigFile::new_unchecked(
            raw.examples,
            raw.playground,
            raw.markup,
        ))
    }
}

fn validate_examples(section: &ExamplesSection) -> Result<()> {
    if section.search_roots.is_empty() {
        return Err(ByExampleError::Config(
            "[examples].search_roots must list at least one directory".to_string(),
        ));
    }

    if let Some(idx) = section.search_roots.iter().position(|r| r.trim().is_empty()) {
        return Err(ByExampleError::Config(format!(
            "[examples].search_roots[{idx}] is blank"
        )));
    }

    if section.command.first().is_none_or(|c| c.trim().is_empty()) {
        return Err(ByExampleError::Config(
            "[examples].command must name an interpreter".to_string(),
        ));
    }

    if section.timeout_secs == Some(0) {
        return Err(ByExampleError::Config(
            "[examples].timeout_secs must be >= 1 (got 0)".to_string(),
        ));
    }

    Ok(())
}

fn validate_playground(section: &PlaygroundSection) -> Result<()> {
    if section.enabled && section.url.trim().is_empty() {
        return Err(ByExampleError::Config(
            "[playground].url must be set when the playground link is enabled".to_string(),
        ));
    }
    Ok(())
}

fn validate_markup(section: &MarkupSection) -> Result<()> {
    if !HIGHLIGHT_THEMES.contains(&section.theme.as_str()) {
        return Err(ByExampleError::Config(format!(
            "[markup].theme {:?} is not one of {HIGHLIGHT_THEMES:?}",
            section.theme
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> RawConfigFile {
        RawConfigFile::default()
    }

    fn config_err(raw: RawConfigFile) -> String {
        match ConfigFile::try_from(raw) {
            Err(ByExampleError::Config(msg)) => msg,
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn defaults_are_valid() {
        assert!(ConfigFile::try_from(raw()).is_ok());
    }

    #[test]
    fn rejects_empty_search_roots() {
        let mut cfg = raw();
        cfg.examples.search_roots.clear();
        assert!(config_err(cfg).contains("search_roots"));
    }

    #[test]
    fn rejects_blank_search_root_entry() {
        let mut cfg = raw();
        cfg.examples.search_roots.push("  ".to_string());
        assert!(config_err(cfg).contains("search_roots[1]"));
    }

    #[test]
    fn rejects_missing_interpreter() {
        let mut cfg = raw();
        cfg.examples.command = vec![];
        assert!(config_err(cfg).contains("command"));
    }

    #[test]
    fn rejects_zero_timeout() {
        let mut cfg = raw();
        cfg.examples.timeout_secs = Some(0);
        assert!(config_err(cfg).contains("timeout_secs"));
    }

    #[test]
    fn empty_playground_url_only_matters_when_enabled() {
        let mut cfg = raw();
        cfg.playground.url.clear();
        assert!(config_err(cfg.clone()).contains("[playground].url"));

        cfg.playground.enabled = false;
        assert!(ConfigFile::try_from(cfg).is_ok());
    }

    #[test]
    fn rejects_unknown_highlight_theme() {
        let mut cfg = raw();
        cfg.markup.theme = "monokai-ish".to_string();
        assert!(config_err(cfg).contains("[markup].theme"));
    }
}
