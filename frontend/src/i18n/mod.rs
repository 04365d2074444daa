//! Language state, persisted preference, document direction and string lookup.

pub mod language;
pub mod locale;
pub mod provider;
pub mod store;
pub mod translations;

pub use language::{Language, DEFAULT_LANGUAGE, SUPPORTED_LANGUAGES};
pub use locale::{Locale, LocaleError};
pub use provider::{use_language, LanguageContext, LanguageProvider};
pub use store::{BrowserStorage, DocumentRoot, HtmlRoot, MemoryStore, PreferenceStore};
pub use translations::translate;
