//! Localized messages surfaced to scenario reports.
//!
//! Messages are grouped per locale. A lookup tries the requested locale
//! first and then the catalog's fallback locale; a key missing from both is
//! an error rather than an empty string.

use std::collections::HashMap;

use crate::error::CatalogError;
use crate::traits::MessageCatalog;

/// Key of the message written when a step is skipped.
pub const SKIPPED_DUE_TO_CONDITIONS: &str = "SKIPPED_DUE_TO_CONDITIONS";

/// Locale used when nothing else is configured.
pub const DEFAULT_LOCALE: &str = "en";

type Bundle = HashMap<String, String>;

/// In-memory message catalog keyed by locale.
#[derive(Clone, Debug)]
pub struct BundleCatalog {
    bundles: HashMap<String, Bundle>,
    fallback_locale: String,
}

impl BundleCatalog {
    /// Empty catalog falling back to [`DEFAULT_LOCALE`].
    pub fn new() -> Self {
        Self {
            bundles: HashMap::new(),
            fallback_locale: DEFAULT_LOCALE.to_string(),
        }
    }

    /// Catalog with the messages the gate itself needs.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.insert("en", SKIPPED_DUE_TO_CONDITIONS, "Step skipped due to conditions");
        catalog.insert(
            "fr",
            SKIPPED_DUE_TO_CONDITIONS,
            "Étape ignorée en raison des conditions",
        );
        catalog
    }

    /// Parse a catalog from TOML, one table per locale.
    pub fn from_toml_str(source: &str) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        catalog.merge_toml_str(source)?;
        Ok(catalog)
    }

    /// Merge TOML bundles into this catalog; later entries override earlier ones.
    pub fn merge_toml_str(&mut self, source: &str) -> Result<(), CatalogError> {
        let parsed: HashMap<String, Bundle> =
            toml::from_str(source).map_err(|e| CatalogError::Parse(e.to_string()))?;
        for (locale, bundle) in parsed {
            self.bundles.entry(locale).or_default().extend(bundle);
        }
        Ok(())
    }

    pub fn with_fallback_locale(mut self, locale: impl Into<String>) -> Self {
        self.fallback_locale = locale.into();
        self
    }

    pub fn insert(
        &mut self,
        locale: impl Into<String>,
        key: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.bundles
            .entry(locale.into())
            .or_default()
            .insert(key.into(), message.into());
    }

    pub fn fallback_locale(&self) -> &str {
        &self.fallback_locale
    }

    fn lookup(&self, locale: &str, key: &str) -> Option<&String> {
        self.bundles.get(locale).and_then(|bundle| bundle.get(key))
    }
}

impl Default for BundleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl MessageCatalog for BundleCatalog {
    fn message(&self, key: &str, locale: &str) -> Result<String, CatalogError> {
        self.lookup(locale, key)
            .or_else(|| self.lookup(&self.fallback_locale, key))
            .cloned()
            .ok_or_else(|| CatalogError::MissingKey {
                key: key.to_string(),
                locale: locale.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_skip_message_in_english_and_french() {
        let catalog = BundleCatalog::builtin();
        assert_eq!(
            catalog.message(SKIPPED_DUE_TO_CONDITIONS, "en").unwrap(),
            "Step skipped due to conditions"
        );
        assert_eq!(
            catalog.message(SKIPPED_DUE_TO_CONDITIONS, "fr").unwrap(),
            "Étape ignorée en raison des conditions"
        );
    }

    #[test]
    fn unknown_locale_falls_back() {
        let catalog = BundleCatalog::builtin();
        assert_eq!(
            catalog.message(SKIPPED_DUE_TO_CONDITIONS, "de").unwrap(),
            "Step skipped due to conditions"
        );
    }

    #[test]
    fn missing_key_is_an_error() {
        let catalog = BundleCatalog::builtin();
        let err = catalog.message("NOPE", "en").unwrap_err();
        assert_eq!(
            err,
            CatalogError::MissingKey {
                key: "NOPE".into(),
                locale: "en".into()
            }
        );
    }

    #[test]
    fn toml_bundles_override_builtin() {
        let mut catalog = BundleCatalog::builtin();
        catalog
            .merge_toml_str(
                r#"
                [en]
                SKIPPED_DUE_TO_CONDITIONS = "Skipped: conditions not met"

                [es]
                SKIPPED_DUE_TO_CONDITIONS = "Paso omitido por condiciones"
                "#,
            )
            .unwrap();

        assert_eq!(
            catalog.message(SKIPPED_DUE_TO_CONDITIONS, "en").unwrap(),
            "Skipped: conditions not met"
        );
        assert_eq!(
            catalog.message(SKIPPED_DUE_TO_CONDITIONS, "es").unwrap(),
            "Paso omitido por condiciones"
        );
        // untouched locale survives the merge
        assert!(catalog.message(SKIPPED_DUE_TO_CONDITIONS, "fr").is_ok());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = BundleCatalog::from_toml_str("[en\nbroken").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn custom_fallback_locale() {
        let mut catalog = BundleCatalog::new().with_fallback_locale("fr");
        catalog.insert("fr", "GREETING", "Bonjour");
        assert_eq!(catalog.fallback_locale(), "fr");
        assert_eq!(catalog.message("GREETING", "en").unwrap(), "Bonjour");
    }
}
