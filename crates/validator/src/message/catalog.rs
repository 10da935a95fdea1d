//! Locale catalogs mapping message keys to translated templates.
//!
//! Message keys are the English templates themselves, so a lookup that
//! misses every table still yields a readable message.

use std::borrow::{Borrow, Cow};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, LazyLock};

use super::locales;

// ============================================================================
// LANGUAGE
// ============================================================================

/// A normalised language tag such as `en`, `ja` or `en-gb`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Language(Cow<'static, str>);

impl Language {
    pub const ENGLISH: Self = Self(Cow::Borrowed("en"));
    pub const JAPANESE: Self = Self(Cow::Borrowed("ja"));

    /// Parses a tag, lowercasing it and turning `_` into `-`.
    pub fn parse(tag: &str) -> Result<Self, CatalogError> {
        let tag = tag.trim();
        let valid = !tag.is_empty()
            && tag
                .split(['-', '_'])
                .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_alphanumeric()));
        if !valid {
            return Err(CatalogError::InvalidLanguage(tag.to_owned()));
        }
        Ok(Self(Cow::Owned(tag.to_ascii_lowercase().replace('_', "-"))))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The primary subtag, `en` for `en-gb`.
    #[must_use]
    pub fn primary(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }

    fn primary_language(&self) -> Option<Self> {
        let primary = self.primary();
        (primary.len() < self.0.len()).then(|| Self(Cow::Owned(primary.to_owned())))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Language {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Borrow<str> for Language {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::ENGLISH
    }
}

// ============================================================================
// ERRORS
// ============================================================================

/// Errors raised while assembling a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid language tag `{0}`")]
    InvalidLanguage(String),

    #[error("malformed catalog for language `{language}`: {source}")]
    Malformed {
        language: Language,
        #[source]
        source: serde_json::Error,
    },
}

// ============================================================================
// CATALOG
// ============================================================================

type Table = HashMap<Cow<'static, str>, Cow<'static, str>>;

/// Translated templates per language.
#[derive(Debug, Clone)]
pub struct Catalog {
    fallback: Language,
    entries: HashMap<Language, Table>,
}

static BUILTIN: LazyLock<Arc<Catalog>> = LazyLock::new(|| {
    let mut builder = Catalog::builder();
    builder = builder.extend(Language::ENGLISH, locales::EN.iter().copied());
    builder = builder.extend(Language::JAPANESE, locales::JA.iter().copied());
    Arc::new(builder.build())
});

impl Catalog {
    /// The catalog carrying the bundled English and Japanese tables.
    #[must_use]
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Starts a builder seeded with this catalog's tables.
    #[must_use]
    pub fn to_builder(&self) -> CatalogBuilder {
        CatalogBuilder {
            fallback: self.fallback.clone(),
            entries: self.entries.clone(),
        }
    }

    #[must_use]
    pub fn fallback(&self) -> &Language {
        &self.fallback
    }

    /// Languages with at least one entry.
    pub fn languages(&self) -> impl Iterator<Item = &Language> {
        self.entries.keys()
    }

    /// Exact entry for `language`, without fallback.
    #[must_use]
    pub fn get(&self, language: &Language, key: &str) -> Option<&str> {
        self.entries
            .get(language)
            .and_then(|table| table.get(key))
            .map(AsRef::as_ref)
    }

    /// Resolves `key` for `language`.
    ///
    /// Tries the exact tag, then its primary subtag, then the fallback
    /// language, and finally returns the key itself.
    #[must_use]
    pub fn lookup<'a>(&'a self, language: &Language, key: &'a str) -> Cow<'a, str> {
        if let Some(found) = self.get(language, key) {
            return Cow::Borrowed(found);
        }
        if let Some(primary) = language.primary_language()
            && let Some(found) = self.get(&primary, key)
        {
            return Cow::Borrowed(found);
        }
        if let Some(found) = self.get(&self.fallback, key) {
            tracing::trace!(%language, fallback = %self.fallback, key, "message falls back to default language");
            return Cow::Borrowed(found);
        }
        tracing::trace!(%language, key, "message has no catalog entry");
        Cow::Borrowed(key)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builder().build()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builder for [`Catalog`].
#[derive(Debug, Clone, Default)]
#[must_use = "builder methods must be chained or built"]
pub struct CatalogBuilder {
    fallback: Language,
    entries: HashMap<Language, Table>,
}

impl CatalogBuilder {
    pub fn fallback(mut self, language: Language) -> Self {
        self.fallback = language;
        self
    }

    pub fn set(
        mut self,
        language: Language,
        key: impl Into<Cow<'static, str>>,
        template: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.entries
            .entry(language)
            .or_default()
            .insert(key.into(), template.into());
        self
    }

    pub fn extend<K, V>(mut self, language: Language, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<Cow<'static, str>>,
        V: Into<Cow<'static, str>>,
    {
        let table = self.entries.entry(language).or_default();
        table.extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Merges a JSON object of `key: template` pairs into `language`.
    pub fn load_json(self, language: Language, json: &str) -> Result<Self, CatalogError> {
        let table: HashMap<String, String> = serde_json::from_str(json)
            .map_err(|source| CatalogError::Malformed {
                language: language.clone(),
                source,
            })?;
        tracing::debug!(%language, entries = table.len(), "loaded catalog entries");
        Ok(self.extend(language, table))
    }

    #[must_use]
    pub fn build(self) -> Catalog {
        Catalog {
            fallback: self.fallback,
            entries: self.entries,
        }
    }
}
