// Message catalogs for the host side of the UI.
//
// Catalogs are flat `<locale>.json` files in the bundler's locale
// directory. Lookup falls back to the fallback locale, then to the key.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use super::bundler::I18nOptions;

pub struct Catalog {
    messages: HashMap<String, String>,
    fallback: HashMap<String, String>,
}

fn load_messages(path: &Path) -> io::Result<HashMap<String, String>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

impl Catalog {
    /// Load catalogs per the bundler's i18n options. A missing or
    /// unreadable file behaves as an empty catalog.
    pub fn load(root: &Path, options: &I18nOptions) -> Self {
        let dir = root.join(&options.locale_dir);
        let messages =
            load_messages(&dir.join(format!("{}.json", options.locale))).unwrap_or_default();
        let fallback = if options.fallback_locale == options.locale {
            HashMap::new()
        } else {
            load_messages(&dir.join(format!("{}.json", options.fallback_locale)))
                .unwrap_or_default()
        };
        if messages.is_empty() {
            log::warn!("No messages for locale {:?} in {:?}", options.locale, dir);
        }
        Self { messages, fallback }
    }

    /// Look up a message, falling back to the key itself
    pub fn message<'a>(&'a self, key: &'a str) -> &'a str {
        self.messages
            .get(key)
            .or_else(|| self.fallback.get(key))
            .map_or(key, String::as_str)
    }

    /// Look up a message with an explicit default for unshipped catalogs
    pub fn message_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.messages
            .get(key)
            .or_else(|| self.fallback.get(key))
            .map_or(default, String::as_str)
    }
}
