use std::env;
use std::path::PathBuf;

use medassist_core::Locale;
use thiserror::Error;

pub const DISEASE_DATA_ENV: &str = "MEDASSIST_DISEASE_DATA";
pub const LOCALE_ENV: &str = "MEDASSIST_LOCALE";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unsupported locale {0:?}, expected `ar` or `en`")]
    UnsupportedLocale(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub disease_data: Option<PathBuf>,
    pub locale: Locale,
}

impl GeneratorConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Blank values count as unset; a set but unsupported locale is an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let disease_data = non_blank(lookup(DISEASE_DATA_ENV)).map(PathBuf::from);
        let locale = match non_blank(lookup(LOCALE_ENV)) {
            Some(value) => parse_locale(&value)?,
            None => Locale::default(),
        };

        Ok(Self {
            disease_data,
            locale,
        })
    }

    pub fn with_disease_data(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.disease_data = path;
        }
        self
    }

    pub fn with_locale(mut self, value: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(value) = value {
            self.locale = parse_locale(value)?;
        }
        Ok(self)
    }
}

pub fn parse_locale(value: &str) -> Result<Locale, ConfigError> {
    Locale::parse(value).ok_or_else(|| ConfigError::UnsupportedLocale(value.to_string()))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
