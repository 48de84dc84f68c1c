use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use lib::VerbalForm;
use serde::{Deserialize, Serialize};

use crate::dirs::Dirs;

/// A configuration used for the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Verbal forms printed unless `--form` is used.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub forms: Vec<VerbalForm>,
    /// Lexicon used to resolve queries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lexicon: Option<PathBuf>,
    /// Print romanized forms.
    pub romaji: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            forms: VerbalForm::ALL.to_vec(),
            lexicon: None,
            romaji: true,
        }
    }
}

impl Config {
    pub fn load(dirs: &Dirs) -> Result<Self> {
        let config_path = dirs.config_path();

        let config = if config_path.exists() {
            let data = fs::read_to_string(&config_path)
                .with_context(|| config_path.display().to_string())?;
            Self::parse(&data).with_context(|| config_path.display().to_string())?
        } else {
            tracing::debug!(path = %config_path.display(), "No configuration, using defaults");
            Self::default()
        };

        Ok(config)
    }

    fn parse(data: &str) -> Result<Self> {
        Ok(toml::from_str(data)?)
    }
}

#[cfg(test)]
mod tests {
    use lib::VerbalForm;

    use super::Config;

    #[test]
    fn defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.forms.len(), VerbalForm::COUNT);
        assert!(config.romaji);
    }

    #[test]
    fn partial() {
        let config = Config::parse(
            r#"
            forms = ["past", "te", "causative-passive"]
            romaji = false
            "#,
        )
        .unwrap();

        assert_eq!(
            config.forms,
            [VerbalForm::Past, VerbalForm::Te, VerbalForm::CausativePassive]
        );

        assert_eq!(config.lexicon, None);
        assert!(!config.romaji);
    }

    #[test]
    fn unknown_form() {
        assert!(Config::parse(r#"forms = ["pluperfect"]"#).is_err());
    }
}
