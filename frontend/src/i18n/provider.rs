use gloo_console::{error, log};
use yew::prelude::*;

use super::language::{Language, DEFAULT_LANGUAGE};
use super::locale::Locale;
use super::store::{BrowserStorage, HtmlRoot};
use super::translations;

/// What every consumer sees: the active language and a way to change it.
#[derive(Clone, PartialEq)]
pub struct LanguageContext {
    pub language: Language,
    pub set_language: Callback<Language>,
}

impl LanguageContext {
    pub fn t(&self, key: &str) -> String {
        translations::translate(self.language, key)
    }

    /// Every mirrored layout decision in the UI keys off this.
    pub fn is_rtl(&self) -> bool {
        self.language.is_rtl()
    }

    pub fn dir(&self) -> &'static str {
        self.language.dir()
    }
}

#[derive(Properties, PartialEq)]
pub struct LanguageProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Owns the session's [`Locale`]. Mounted once at the application root.
#[function_component(LanguageProvider)]
pub fn language_provider(props: &LanguageProviderProps) -> Html {
    // Read the persisted preference before the first render of any child.
    let locale = use_state(|| Locale::initialize(&BrowserStorage));

    {
        let locale = *locale;
        use_effect_with_deps(
            move |_| {
                locale.apply(&HtmlRoot);
                || ()
            },
            (),
        );
    }

    let set_language = {
        let locale = locale.clone();
        Callback::from(move |language: Language| {
            let mut next = *locale;
            match next.set_language(language.code(), &BrowserStorage, &HtmlRoot) {
                Ok(language) => {
                    log!("Language switched to", language.code());
                    locale.set(next);
                }
                Err(e) => {
                    error!("Language switch rejected:", e.to_string());
                }
            }
        })
    };

    let context = LanguageContext {
        language: locale.language(),
        set_language,
    };

    html! {
        <ContextProvider<LanguageContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<LanguageContext>>
    }
}

/// Current language context. Outside a provider this is the default language
/// with a switcher that does nothing.
#[hook]
pub fn use_language() -> LanguageContext {
    use_context::<LanguageContext>().unwrap_or_else(|| LanguageContext {
        language: DEFAULT_LANGUAGE,
        set_language: Callback::noop(),
    })
}
