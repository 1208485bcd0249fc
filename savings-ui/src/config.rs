//! Host configuration.
//!
//! The locale picks the built-in assumptions profile and message catalog;
//! an optional TOML file can replace either wholesale, so a deployment can
//! retune constants or wording without a rebuild.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use savings_core::{AssumptionsConfig, MessageCatalog};

/// Calculator locale; selects assumptions and wording together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    De,
}

impl Locale {
    pub fn assumptions(self) -> AssumptionsConfig {
        match self {
            Self::En => AssumptionsConfig::english_variant(),
            Self::De => AssumptionsConfig::german_variant(),
        }
    }

    pub fn messages(self) -> MessageCatalog {
        match self {
            Self::En => MessageCatalog::english(),
            Self::De => MessageCatalog::german(),
        }
    }
}

/// Host-level configuration, loadable from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostConfig {
    pub locale: Locale,

    /// Full replacement for the locale's assumptions profile.
    #[serde(default)]
    pub assumptions: Option<AssumptionsConfig>,

    /// Full replacement for the locale's message catalog.
    #[serde(default)]
    pub messages: Option<MessageCatalog>,
}

impl HostConfig {
    /// Built-in configuration for a locale, no overrides.
    pub fn for_locale(locale: Locale) -> Self {
        Self {
            locale,
            assumptions: None,
            messages: None,
        }
    }

    /// Resolves the effective configuration from an optional CLI locale and
    /// an optional config file.
    ///
    /// A locale given on the command line wins over the file's locale; with
    /// neither, German is the default. File-level assumptions and message
    /// overrides always apply.
    pub fn resolve(
        locale: Option<Locale>,
        path: Option<&Path>,
    ) -> Result<Self> {
        let mut host = match path {
            Some(path) => Self::load(path)?,
            None => Self::for_locale(locale.unwrap_or(Locale::De)),
        };
        if let Some(locale) = locale {
            host.locale = locale;
        }
        Ok(host)
    }

    /// Loads a TOML host config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("cannot read host config '{}'", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("invalid host config '{}'", path.display()))
    }

    /// Effective assumptions: the override if present, else the locale's
    /// built-in profile.
    pub fn assumptions(&self) -> AssumptionsConfig {
        self.assumptions
            .clone()
            .unwrap_or_else(|| self.locale.assumptions())
    }

    /// Effective message catalog.
    pub fn messages(&self) -> MessageCatalog {
        self.messages
            .clone()
            .unwrap_or_else(|| self.locale.messages())
    }
}
