use yew::prelude::*;
use yew_router::components::Link;

use crate::content::find_service;
use crate::i18n::use_language;
use crate::pages::not_found::NotFound;
use crate::visibility::{reveal_class, use_visibility, Threshold};
use crate::Route;

const DETAIL_CSS: &str = r#"
    .detail-hero {
        padding: 9rem 2rem 4rem;
        background: linear-gradient(135deg, #081c38, #0e4078);
        color: #fff;
        text-align: center;
    }
    .detail-hero i {
        font-size: 3rem;
        color: #f28c28;
    }
    .detail-body {
        max-width: 900px;
        margin: 0 auto;
        padding: 4rem 2rem;
    }
    .detail-features li {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        margin-bottom: 0.75rem;
    }
    .detail-features i {
        color: #f28c28;
    }
    .detail-cta {
        text-align: center;
        background: #f4f7fb;
        border-radius: 12px;
        padding: 3rem 2rem;
    }
    .back-link {
        display: inline-flex;
        gap: 0.5rem;
        align-items: center;
        color: #cfe0f5;
        margin-bottom: 2rem;
    }
"#;

#[derive(Properties, PartialEq)]
pub struct ServiceDetailProps {
    pub slug: String,
}

#[function_component(ServiceDetail)]
pub fn service_detail(props: &ServiceDetailProps) -> Html {
    let lang = use_language();
    let visible = use_visibility(Threshold::DETAIL);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let Some(service) = find_service(&props.slug) else {
        return html! { <NotFound /> };
    };
    let back_icon = if lang.is_rtl() { "fas fa-arrow-right" } else { "fas fa-arrow-left" };

    html! {
        <div class={classes!("service-detail", lang.is_rtl().then_some("rtl"))}>
            <style>{DETAIL_CSS}</style>
            <header id="detail-hero" data-observe="true" class={reveal_class(&visible, "detail-hero", "detail-hero")}>
                <Link<Route> to={Route::Home} classes="back-link">
                    <i class={back_icon}></i>{lang.t("detail.back")}
                </Link<Route>>
                <div><i class={service.icon}></i></div>
                <h1>{lang.t(&service.title_key())}</h1>
                <p>{lang.t(&service.summary_key())}</p>
            </header>
            <div class="detail-body">
                <section id="detail-description" data-observe="true" class={reveal_class(&visible, "detail-description", "")}>
                    <p>{lang.t(&service.description_key())}</p>
                </section>
                <section id="detail-features" data-observe="true" class={reveal_class(&visible, "detail-features", "detail-features")}>
                    <h2>{lang.t("detail.features")}</h2>
                    <ul>
                        {
                            service.feature_keys().iter().map(|key| html! {
                                <li><i class="fas fa-check-circle"></i>{lang.t(key)}</li>
                            }).collect::<Html>()
                        }
                    </ul>
                </section>
                <section id="detail-cta" data-observe="true" class={reveal_class(&visible, "detail-cta", "detail-cta")}>
                    <h2>{lang.t("detail.cta_title")}</h2>
                    <p>{lang.t("detail.cta_body")}</p>
                    <a href="/#contact" class="button primary">{lang.t("detail.cta_button")}</a>
                </section>
            </div>
        </div>
    }
}
