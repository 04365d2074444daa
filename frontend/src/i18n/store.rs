use std::cell::RefCell;
use std::collections::HashMap;

use web_sys::window;

/// Durable key-value storage for the language preference.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
}

/// Target of the direction and language side effects, normally `<html>`.
pub trait DocumentRoot {
    fn set_dir(&self, dir: &str);
    fn set_lang(&self, lang: &str);
}

/// `window.localStorage`. Private browsing modes can deny access; reads then yield
/// nothing and writes are dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

impl PreferenceStore for BrowserStorage {
    fn load(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    gloo_console::error!("Failed to persist preference", key.to_string());
                }
            }
            None => {
                gloo_console::log!("localStorage unavailable, preference not persisted");
            }
        }
    }
}

/// In-memory store, for tests and runtimes without `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.save(key, value);
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// The document element of the current page.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlRoot;

impl HtmlRoot {
    fn set_attribute(name: &str, value: &str) {
        let root = window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element());
        match root {
            Some(el) => {
                if el.set_attribute(name, value).is_err() {
                    gloo_console::error!("Failed to set document attribute", name.to_string());
                }
            }
            None => {
                gloo_console::log!("No document element, skipping", name.to_string());
            }
        }
    }
}

impl DocumentRoot for HtmlRoot {
    fn set_dir(&self, dir: &str) {
        Self::set_attribute("dir", dir);
    }

    fn set_lang(&self, lang: &str) {
        Self::set_attribute("lang", lang);
    }
}
