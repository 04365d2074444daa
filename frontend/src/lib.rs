use yew::prelude::*;
use yew_router::prelude::*;

pub mod config;
pub mod contact;
pub mod content;
pub mod i18n;
pub mod visibility;
pub mod components {
    pub mod contact_section;
    pub mod footer;
    pub mod navbar;
    pub mod stats;
}
pub mod pages {
    pub mod home;
    pub mod not_found;
    pub mod service_detail;
}

use components::footer::Footer;
use components::navbar::Navbar;
use i18n::{use_language, LanguageProvider};
use pages::home::Home;
use pages::not_found::NotFound;
use pages::service_detail::ServiceDetail;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services/:slug")]
    Service { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        // Keyed so moving between services remounts the page and rescans its sections.
        Route::Service { slug } => {
            let key = slug.clone();
            html! { <ServiceDetail key={key} slug={slug} /> }
        }
        Route::NotFound => html! { <NotFound /> },
    }
}

const BASE_CSS: &str = r#"
    * {
        box-sizing: border-box;
    }
    body {
        margin: 0;
        font-family: 'Inter', 'Cairo', sans-serif;
        color: #1c2b3a;
        background: #f9fbfd;
    }
    .rtl, [dir="rtl"] body {
        font-family: 'Cairo', 'Inter', sans-serif;
    }
    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 10;
        background: rgba(8, 28, 56, 0.95);
    }
    .nav-content {
        max-width: 1200px;
        margin: 0 auto;
        padding: 1rem 2rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .top-nav.rtl .nav-content, .top-nav.rtl .nav-links {
        flex-direction: row-reverse;
    }
    .nav-logo, .nav-links a {
        color: #fff;
        text-decoration: none;
    }
    .nav-links {
        display: flex;
        gap: 1.5rem;
        align-items: center;
    }
    .lang-toggle {
        background: transparent;
        border: 1px solid #f28c28;
        color: #f28c28;
        border-radius: 6px;
        padding: 0.4rem 0.9rem;
        cursor: pointer;
    }
    .nav-cta, .button.primary, .submit-button {
        background: #f28c28;
        color: #fff;
        border: none;
        border-radius: 6px;
        padding: 0.75rem 1.5rem;
        text-decoration: none;
        cursor: pointer;
    }
    .button.secondary {
        border: 1px solid #fff;
        color: #fff;
        border-radius: 6px;
        padding: 0.75rem 1.5rem;
        text-decoration: none;
    }
    .burger-menu {
        display: none;
        background: none;
        border: none;
        color: #fff;
        font-size: 1.5rem;
    }
    .page-section {
        padding: 5rem 2rem;
        text-align: center;
    }
    .page-section.alt {
        background: #eef3f9;
    }
    .section-subtitle {
        max-width: 700px;
        margin: 0 auto;
        color: #5a6b80;
    }
    .rtl .service-card, .rtl .testimonial-card, .rtl .about-card, .rtl .detail-body {
        text-align: right;
    }
    .reveal {
        opacity: 0;
        transform: translateY(40px);
        transition: opacity 0.8s ease, transform 0.8s ease;
    }
    .reveal.visible {
        opacity: 1;
        transform: none;
    }
    .contact-form {
        max-width: 700px;
        margin: 2rem auto 0;
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }
    .form-row {
        display: flex;
        gap: 1rem;
    }
    .contact-form input, .contact-form select, .contact-form textarea {
        flex: 1;
        padding: 0.8rem;
        border: 1px solid #cdd7e3;
        border-radius: 6px;
        font: inherit;
    }
    .form-status.success {
        color: #1f8a4c;
    }
    .form-status.error {
        color: #c0392b;
    }
    .site-footer {
        background: #081c38;
        color: #cfe0f5;
        padding: 3rem 2rem 1.5rem;
    }
    .footer-grid {
        max-width: 1200px;
        margin: 0 auto;
        display: flex;
        justify-content: space-between;
        flex-wrap: wrap;
        gap: 2rem;
    }
    .site-footer.rtl .footer-grid {
        flex-direction: row-reverse;
        text-align: right;
    }
    .site-footer a {
        color: #cfe0f5;
        text-decoration: none;
    }
    .footer-bottom {
        text-align: center;
        margin-top: 2rem;
        font-size: 0.85rem;
    }
    @media (max-width: 768px) {
        .burger-menu {
            display: block;
        }
        .nav-links {
            display: none;
        }
        .nav-links.open {
            display: flex;
            flex-direction: column;
            position: absolute;
            top: 100%;
            left: 0;
            right: 0;
            background: #081c38;
            padding: 1rem;
        }
        .form-row {
            flex-direction: column;
        }
    }
"#;

/// Layout shared by every route. Reads the language so `dir` on the wrapper
/// updates in the same render as the content.
#[function_component(Shell)]
fn shell() -> Html {
    let lang = use_language();
    html! {
        <div class={classes!("app", lang.is_rtl().then_some("rtl"))} dir={lang.dir()} lang={lang.language.code()}>
            <style>{BASE_CSS}</style>
            <Navbar />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </div>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <LanguageProvider>
            <BrowserRouter>
                <Shell />
            </BrowserRouter>
        </LanguageProvider>
    }
}

#[cfg(test)]
mod tests {
    use yew::virtual_dom::{Key, VNode};

    use super::*;

    #[test]
    fn service_route_renders_detail_page_keyed_by_slug() {
        let page = switch(Route::Service { slug: "air".to_string() });
        let VNode::VComp(_) = &page else {
            panic!("service route should render a component");
        };
        assert_eq!(page.key(), Some(&Key::from("air")));
    }
}
