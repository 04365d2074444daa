use thiserror::Error;

use super::language::{Language, DEFAULT_LANGUAGE};
use super::store::{DocumentRoot, PreferenceStore};
use super::translations;
use crate::config::LANGUAGE_STORAGE_KEY;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    #[error("Unsupported language code: {0}")]
    UnsupportedLanguage(String),
}

/// The active language of the page session.
///
/// Created once from the persisted preference, changed only through
/// [`Locale::set_language`], and never torn down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    language: Language,
}

impl Locale {
    /// Adopts the persisted language if it is a supported code, otherwise the default.
    pub fn initialize(store: &impl PreferenceStore) -> Self {
        let language = store
            .load(LANGUAGE_STORAGE_KEY)
            .and_then(|code| Language::from_code(&code))
            .unwrap_or(DEFAULT_LANGUAGE);
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn is_rtl(&self) -> bool {
        self.language.is_rtl()
    }

    /// Switches language. Persistence and both document attributes are written
    /// before the state changes; an unsupported code touches nothing.
    pub fn set_language(
        &mut self,
        code: &str,
        store: &impl PreferenceStore,
        root: &impl DocumentRoot,
    ) -> Result<Language, LocaleError> {
        let language = Language::from_code(code)
            .ok_or_else(|| LocaleError::UnsupportedLanguage(code.to_string()))?;
        store.save(LANGUAGE_STORAGE_KEY, language.code());
        Self::reflect(language, root);
        self.language = language;
        Ok(language)
    }

    /// Reflects the current language onto the document without persisting it.
    pub fn apply(&self, root: &impl DocumentRoot) {
        Self::reflect(self.language, root);
    }

    fn reflect(language: Language, root: &impl DocumentRoot) {
        root.set_dir(language.dir());
        root.set_lang(language.code());
    }

    /// Missing keys come back verbatim.
    pub fn translate(&self, key: &str) -> String {
        translations::translate(self.language, key)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::i18n::store::MemoryStore;

    #[derive(Default)]
    struct RecordingRoot {
        dir: RefCell<Option<String>>,
        lang: RefCell<Option<String>>,
    }

    impl DocumentRoot for RecordingRoot {
        fn set_dir(&self, dir: &str) {
            *self.dir.borrow_mut() = Some(dir.to_string());
        }

        fn set_lang(&self, lang: &str) {
            *self.lang.borrow_mut() = Some(lang.to_string());
        }
    }

    #[test]
    fn initialize_defaults_to_english_without_preference() {
        let locale = Locale::initialize(&MemoryStore::new());
        assert_eq!(locale.language(), Language::En);
        assert!(!locale.is_rtl());
    }

    #[test]
    fn initialize_ignores_invalid_persisted_value() {
        let store = MemoryStore::with_entry(LANGUAGE_STORAGE_KEY, "klingon");
        assert_eq!(Locale::initialize(&store).language(), Language::En);
    }

    #[test]
    fn set_language_flips_direction_immediately() {
        let store = MemoryStore::new();
        let root = RecordingRoot::default();
        let mut locale = Locale::initialize(&store);

        locale.set_language("ar", &store, &root).unwrap();
        assert!(locale.is_rtl());
        assert_eq!(root.dir.borrow().as_deref(), Some("rtl"));
        assert_eq!(root.lang.borrow().as_deref(), Some("ar"));

        locale.set_language("en", &store, &root).unwrap();
        assert!(!locale.is_rtl());
        assert_eq!(root.dir.borrow().as_deref(), Some("ltr"));
        assert_eq!(root.lang.borrow().as_deref(), Some("en"));
    }

    #[test]
    fn preference_survives_reload() {
        let store = MemoryStore::new();
        let root = RecordingRoot::default();
        let mut locale = Locale::initialize(&store);
        locale.set_language("ar", &store, &root).unwrap();

        let reloaded = Locale::initialize(&store);
        assert_eq!(reloaded.language(), Language::Ar);
    }

    #[test]
    fn unsupported_code_is_rejected_without_side_effects() {
        let store = MemoryStore::with_entry(LANGUAGE_STORAGE_KEY, "ar");
        let root = RecordingRoot::default();
        let mut locale = Locale::initialize(&store);

        let err = locale.set_language("de", &store, &root).unwrap_err();
        assert_eq!(err, LocaleError::UnsupportedLanguage("de".to_string()));
        assert_eq!(locale.language(), Language::Ar);
        assert_eq!(store.load(LANGUAGE_STORAGE_KEY).as_deref(), Some("ar"));
        assert!(root.dir.borrow().is_none());
        assert!(root.lang.borrow().is_none());
    }

    #[test]
    fn setting_same_language_rewrites_same_values() {
        let store = MemoryStore::new();
        let root = RecordingRoot::default();
        let mut locale = Locale::initialize(&store);
        assert_eq!(locale.set_language("en", &store, &root), Ok(Language::En));
        assert_eq!(store.load(LANGUAGE_STORAGE_KEY).as_deref(), Some("en"));
        assert_eq!(root.dir.borrow().as_deref(), Some("ltr"));
    }

    #[test]
    fn apply_reflects_initial_language() {
        let store = MemoryStore::with_entry(LANGUAGE_STORAGE_KEY, "ar");
        let root = RecordingRoot::default();
        Locale::initialize(&store).apply(&root);
        assert_eq!(root.dir.borrow().as_deref(), Some("rtl"));
        assert_eq!(root.lang.borrow().as_deref(), Some("ar"));
    }

    #[test]
    fn translate_falls_back_to_key() {
        let locale = Locale::initialize(&MemoryStore::new());
        assert_eq!(locale.translate("no.such.key"), "no.such.key");
        assert_eq!(locale.translate("nav.home"), "Home");
    }
}
