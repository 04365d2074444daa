/// A language the site ships translations for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    En,
    Ar,
}

pub const SUPPORTED_LANGUAGES: &[Language] = &[Language::En, Language::Ar];

/// Used when nothing valid is persisted.
pub const DEFAULT_LANGUAGE: Language = Language::En;

impl Language {
    pub const fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    /// Exact match against the supported codes. `"AR"` or `"ar-SA"` are not accepted,
    /// since the persisted value is always written by [`Language::code`].
    pub fn from_code(code: &str) -> Option<Self> {
        SUPPORTED_LANGUAGES.iter().copied().find(|lang| lang.code() == code)
    }

    pub const fn is_rtl(self) -> bool {
        matches!(self, Language::Ar)
    }

    /// Value for the document's `dir` attribute.
    pub const fn dir(self) -> &'static str {
        if self.is_rtl() {
            "rtl"
        } else {
            "ltr"
        }
    }

    /// Label shown in the language switcher, written in the language itself.
    pub const fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ar => "العربية",
        }
    }

    /// The language the navbar toggle switches to.
    pub const fn other(self) -> Self {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        DEFAULT_LANGUAGE
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_arabic_is_rtl() {
        assert!(Language::Ar.is_rtl());
        assert!(!Language::En.is_rtl());
        assert_eq!(Language::Ar.dir(), "rtl");
        assert_eq!(Language::En.dir(), "ltr");
    }

    #[test]
    fn from_code_requires_exact_supported_code() {
        assert_eq!(Language::from_code("en"), Some(Language::En));
        assert_eq!(Language::from_code("ar"), Some(Language::Ar));
        assert_eq!(Language::from_code("AR"), None);
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn other_toggles_between_the_two_languages() {
        assert_eq!(Language::En.other(), Language::Ar);
        assert_eq!(Language::Ar.other().other(), Language::Ar);
    }
}
