//! Locale routing and JSON-backed translation bundles.
//!
//! Locale files live in `locales/` and are embedded into the binary (and the
//! wasm bundle) so lookups never touch the network. Parsed bundles are cached
//! per locale for the lifetime of the process.

use std::{fmt, str::FromStr, sync::Arc, sync::LazyLock};

use dashmap::DashMap;
use rust_embed::Embed;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

static GLOBAL_BUNDLE_CACHE: LazyLock<DashMap<Locale, Arc<Translations>>> =
    LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "locales"]
struct LocaleFiles;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum I18nError {
    #[error("unsupported locale '{0}'")]
    UnsupportedLocale(String),
    #[error("no translation file for locale '{0}'")]
    MissingFile(Locale),
    #[error("malformed translation file for locale '{locale}': {reason}")]
    Malformed { locale: Locale, reason: String },
    #[error("missing translation key '{0}'")]
    MissingKey(String),
    #[error("translation key '{key}' has an unexpected shape: {reason}")]
    Shape { key: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Fr,
}

/// Locale the bare root path redirects to.
pub const DEFAULT_LOCALE: Locale = Locale::En;

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Fr];

    /// Path segment and `lang` attribute value.
    pub const fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }

    /// Name of the language in that language.
    pub const fn label(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Fr => "Français",
        }
    }

    /// The other supported locale.
    pub const fn toggled(self) -> Locale {
        match self {
            Locale::En => Locale::Fr,
            Locale::Fr => Locale::En,
        }
    }

    pub fn home_route(self) -> String {
        format!("/{}", self.code())
    }

    /// Rewrite `path` so it lives under this locale, keeping everything after
    /// the locale segment. Paths without a recognised locale prefix map to
    /// this locale's home route.
    pub fn localize_path(self, path: &str) -> String {
        let trimmed = path.trim_start_matches('/');
        let (first, rest) = match trimmed.split_once('/') {
            Some((first, rest)) => (first, Some(rest)),
            None => (trimmed, None),
        };
        if first.parse::<Locale>().is_err() {
            return self.home_route();
        }
        match rest {
            Some(rest) => format!("/{}/{}", self.code(), rest),
            None => self.home_route(),
        }
    }

    fn file_name(self) -> String {
        format!("{}.json", self.code())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::ALL
            .into_iter()
            .find(|l| l.code() == s)
            .ok_or_else(|| I18nError::UnsupportedLocale(s.to_string()))
    }
}

/// Parsed translation tree for one locale.
#[derive(Debug, Clone)]
pub struct Translations {
    locale: Locale,
    tree: Value,
}

impl PartialEq for Translations {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
    }
}

impl Translations {
    /// Parse a bundle from raw JSON.
    pub fn from_json(locale: Locale, raw: &str) -> Result<Self, I18nError> {
        let tree = serde_json::from_str(raw).map_err(|e| I18nError::Malformed {
            locale,
            reason: e.to_string(),
        })?;
        Ok(Self { locale, tree })
    }

    /// Bundle with no keys; every lookup degrades to the key itself.
    pub fn empty(locale: Locale) -> Self {
        Self {
            locale,
            tree: Value::Null,
        }
    }

    /// Load the embedded bundle for `locale`, bypassing the cache.
    pub fn load(locale: Locale) -> Result<Self, I18nError> {
        let file = LocaleFiles::get(&locale.file_name()).ok_or(I18nError::MissingFile(locale))?;
        let raw = std::str::from_utf8(&file.data).map_err(|e| I18nError::Malformed {
            locale,
            reason: e.to_string(),
        })?;
        Self::from_json(locale, raw)
    }

    /// Cached bundle for `locale`. A bundle that fails to load is logged and
    /// replaced by an empty one so the page still renders.
    pub fn get(locale: Locale) -> Arc<Translations> {
        let cache = &*GLOBAL_BUNDLE_CACHE;
        if let Some(bundle) = cache.get(&locale) {
            return bundle.clone();
        }
        let bundle = match Self::load(locale) {
            Ok(bundle) => bundle,
            Err(e) => {
                log::error!("{e}");
                Self::empty(locale)
            }
        };
        cache
            .entry(locale)
            .or_insert_with(|| Arc::new(bundle))
            .clone()
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Look up a dotted key such as `nav.home`.
    pub fn lookup(&self, key: &str) -> Result<&str, I18nError> {
        resolve(&self.tree, key)
            .and_then(Value::as_str)
            .ok_or_else(|| I18nError::MissingKey(key.to_string()))
    }

    /// Like [`Translations::lookup`] but renders the key path when missing.
    pub fn text(&self, key: &str) -> String {
        match self.lookup(key) {
            Ok(s) => s.to_string(),
            Err(e) => {
                log::warn!("{} ({})", e, self.locale);
                key.to_string()
            }
        }
    }

    /// Deserialize the array or record stored at `key`.
    pub fn records<T: DeserializeOwned>(&self, key: &str) -> Result<T, I18nError> {
        let node = resolve(&self.tree, key).ok_or_else(|| I18nError::MissingKey(key.to_string()))?;
        T::deserialize(node).map_err(|e| I18nError::Shape {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }

    /// Records at `key`, or an empty list (logged) when missing or malformed.
    pub fn list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        self.records(key).unwrap_or_else(|e| {
            log::warn!("{} ({})", e, self.locale);
            Vec::new()
        })
    }
}

fn resolve<'a>(tree: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(tree, |node, segment| node.get(segment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[test]
    fn parses_supported_segments() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("fr".parse::<Locale>(), Ok(Locale::Fr));
        assert_eq!(
            "de".parse::<Locale>(),
            Err(I18nError::UnsupportedLocale("de".to_string()))
        );
        assert!("EN".parse::<Locale>().is_err());
        assert!("".parse::<Locale>().is_err());
    }

    #[test]
    fn toggle_round_trips_route() {
        let route = "/en";
        let there = Locale::En.toggled().localize_path(route);
        assert_eq!(there, "/fr");
        let back = Locale::Fr.toggled().localize_path(&there);
        assert_eq!(back, route);

        let nested = "/en/projects";
        let there = Locale::Fr.localize_path(nested);
        assert_eq!(there, "/fr/projects");
        assert_eq!(Locale::En.localize_path(&there), nested);
    }

    #[test]
    fn localize_without_prefix_goes_home() {
        assert_eq!(Locale::Fr.localize_path("/"), "/fr");
        assert_eq!(Locale::Fr.localize_path(""), "/fr");
        assert_eq!(Locale::En.localize_path("/de/about"), "/en");
    }

    #[test]
    fn missing_key_renders_key_path() {
        let bundle = Translations::from_json(Locale::En, r#"{"nav":{"home":"Home"}}"#).unwrap();
        assert_eq!(bundle.text("nav.home"), "Home");
        assert_eq!(bundle.text("nav.nope"), "nav.nope");
        assert_eq!(
            bundle.lookup("nav"),
            Err(I18nError::MissingKey("nav".to_string()))
        );
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = Translations::from_json(Locale::Fr, "{ nope").unwrap_err();
        assert!(matches!(err, I18nError::Malformed { locale: Locale::Fr, .. }));
        assert_eq!(Translations::empty(Locale::Fr).text("a.b"), "a.b");
    }

    #[test]
    fn records_deserialize_arrays() {
        #[derive(Deserialize, Debug, PartialEq)]
        struct Item {
            title: String,
        }
        let bundle = Translations::from_json(
            Locale::En,
            r#"{"projects":{"items":[{"title":"a"},{"title":"b"}],"bad":[1]}}"#,
        )
        .unwrap();
        let items: Vec<Item> = bundle.list("projects.items");
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].title, "b");
        assert!(bundle.list::<Item>("projects.bad").is_empty());
        assert!(bundle.list::<Item>("projects.none").is_empty());
        assert!(matches!(
            bundle.records::<Vec<Item>>("projects.bad"),
            Err(I18nError::Shape { .. })
        ));
    }

    #[test]
    fn embedded_bundles_load_for_every_locale() {
        for locale in Locale::ALL {
            let bundle = Translations::load(locale).expect("locale file should parse");
            assert_eq!(bundle.locale(), locale);
            assert!(bundle.lookup("nav.home").is_ok());
            let cached = Translations::get(locale);
            assert_eq!(cached.locale(), locale);
        }
    }

    fn leaf_paths(node: &Value, prefix: String, out: &mut Vec<String>) {
        match node {
            Value::Object(map) => {
                for (k, v) in map {
                    let path = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    leaf_paths(v, path, out);
                }
            }
            Value::Array(items) => {
                for (i, v) in items.iter().enumerate() {
                    leaf_paths(v, format!("{prefix}[{i}]"), out);
                }
            }
            _ => out.push(prefix),
        }
    }

    #[test]
    fn locale_files_share_the_same_keys() {
        let [en, fr] = Locale::ALL.map(|locale| {
            let bundle = Translations::load(locale).expect("locale file should parse");
            let mut out = Vec::new();
            leaf_paths(&bundle.tree, String::new(), &mut out);
            out.sort();
            out
        });
        assert_eq!(en, fr);
    }
}
