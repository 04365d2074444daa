use yew::prelude::*;
use yew_router::components::Link;

use crate::i18n::use_language;
use crate::Route;

const NAV_LINKS: [(&str, &str); 4] = [
    ("/#about", "nav.about"),
    ("/#services", "nav.services"),
    ("/#testimonials", "nav.testimonials"),
    ("/#contact", "nav.contact"),
];

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let lang = use_language();
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };
    let switch_language = {
        let set_language = lang.set_language.clone();
        let next = lang.language.other();
        Callback::from(move |_: MouseEvent| set_language.emit(next))
    };

    html! {
        <nav class={classes!("top-nav", lang.is_rtl().then_some("rtl"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <i class="fas fa-globe-africa"></i>
                    {" Meridian Freight"}
                </Link<Route>>
                <button class="burger-menu" onclick={toggle_menu} aria-label="menu">
                    <i class={if *menu_open { "fas fa-times" } else { "fas fa-bars" }}></i>
                </button>
                <div class={classes!("nav-links", (*menu_open).then_some("open"))}>
                    {
                        NAV_LINKS.iter().map(|(href, key)| html! {
                            <a href={*href} onclick={close_menu.clone()}>{lang.t(key)}</a>
                        }).collect::<Html>()
                    }
                    <button class="lang-toggle" onclick={switch_language}>
                        {lang.language.other().native_name()}
                    </button>
                    <a href="/#contact" class="nav-cta" onclick={close_menu}>{lang.t("nav.get_quote")}</a>
                </div>
            </div>
        </nav>
    }
}
