//! Locale profile loader
//!
//! Manages the embedded locale profiles and system default detection.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::{Error, Result};
use crate::locale::config::LocaleConfig;

/// Locale used when nothing else resolves
pub const FALLBACK_LOCALE: &str = "en";

macro_rules! embed_locale_config {
    ($code:expr, $path:expr) => {
        ($code, include_str!($path))
    };
}

const EMBEDDED_CONFIGS: &[(&str, &str)] = &[
    embed_locale_config!("en", "../../configs/locales/en.toml"),
    embed_locale_config!("de", "../../configs/locales/de.toml"),
    embed_locale_config!("de-CH", "../../configs/locales/de-CH.toml"),
    embed_locale_config!("fr", "../../configs/locales/fr.toml"),
    embed_locale_config!("es", "../../configs/locales/es.toml"),
    embed_locale_config!("sv", "../../configs/locales/sv.toml"),
    embed_locale_config!("ru", "../../configs/locales/ru.toml"),
    embed_locale_config!("ja", "../../configs/locales/ja.toml"),
    embed_locale_config!("hi", "../../configs/locales/hi.toml"),
    embed_locale_config!("ar", "../../configs/locales/ar.toml"),
];

/// Parsed embedded profiles, keyed by normalized code and alias
struct Registry {
    configs: Vec<LocaleConfig>,
    index: HashMap<String, usize>,
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

fn registry() -> &'static Registry {
    REGISTRY.get_or_init(load_embedded_configs)
}

fn load_embedded_configs() -> Registry {
    let mut configs = Vec::with_capacity(EMBEDDED_CONFIGS.len());
    let mut index = HashMap::new();

    for (code, toml_content) in EMBEDDED_CONFIGS {
        let config = match LocaleConfig::from_toml_str(toml_content) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load embedded {code} locale: {e}");
                continue;
            }
        };

        if config.metadata.code != *code {
            log::error!(
                "Embedded locale code mismatch: expected {code}, got {}",
                config.metadata.code
            );
            continue;
        }

        let slot = configs.len();
        index.insert(normalize_code(code), slot);
        for alias in &config.metadata.aliases {
            index.entry(normalize_code(alias)).or_insert(slot);
        }
        configs.push(config);
    }

    log::debug!("Loaded {} embedded locale profiles", configs.len());
    Registry { configs, index }
}

/// Lowercase a locale code and use `-` as the subtag separator
pub fn normalize_code(code: &str) -> String {
    code.trim().replace('_', "-").to_lowercase()
}

/// Look up an embedded locale profile by code or alias
///
/// A code with a region that is not registered (`de-AT`) falls back to its
/// language (`de`).
pub fn get_locale(code: &str) -> Result<&'static LocaleConfig> {
    let registry = registry();
    let key = normalize_code(code);

    let slot = registry.index.get(&key).or_else(|| {
        let (language, _) = key.split_once('-')?;
        registry.index.get(language)
    });

    slot.map(|&slot| &registry.configs[slot])
        .ok_or_else(|| Error::UnsupportedLocale(code.to_string()))
}

/// Codes of all embedded locales, sorted
pub fn list_available_locales() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = registry()
        .configs
        .iter()
        .map(|config| config.metadata.code.as_str())
        .collect();
    codes.sort_unstable();
    codes
}

/// All embedded locale profiles, sorted by code
pub fn available_locales() -> Vec<&'static LocaleConfig> {
    let mut configs: Vec<&'static LocaleConfig> = registry().configs.iter().collect();
    configs.sort_by(|a, b| a.metadata.code.cmp(&b.metadata.code));
    configs
}

/// Convert a POSIX locale value (`de_DE.UTF-8@euro`) into a locale code
///
/// Returns `None` for the `C` and `POSIX` locales and for empty values.
pub fn locale_code_from_posix(value: &str) -> Option<String> {
    let base = value
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();

    match base {
        "" | "C" | "POSIX" => None,
        code => Some(code.replace('_', "-")),
    }
}

/// Locale code of the running system
///
/// Consults `LC_ALL`, `LC_NUMERIC` and `LANG` in that order.
pub fn default_locale_code() -> String {
    ["LC_ALL", "LC_NUMERIC", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.trim().is_empty())
        .and_then(|value| locale_code_from_posix(&value))
        .unwrap_or_else(|| FALLBACK_LOCALE.to_string())
}

/// Profile for the system locale, or English when it is not embedded
pub fn default_locale() -> Result<&'static LocaleConfig> {
    let code = default_locale_code();
    get_locale(&code).or_else(|e| {
        log::warn!("{e}; falling back to '{FALLBACK_LOCALE}'");
        get_locale(FALLBACK_LOCALE)
    })
}
