use yew::prelude::*;
use yew_router::components::Link;

use crate::components::contact_section::ContactSection;
use crate::components::stats::Stats;
use crate::content::{PARTNERS, SERVICES, TESTIMONIALS};
use crate::i18n::use_language;
use crate::visibility::{reveal_class, use_visibility, Threshold};
use crate::Route;

const HOME_CSS: &str = r#"
    .hero {
        min-height: 90vh;
        display: flex;
        align-items: center;
        justify-content: center;
        text-align: center;
        padding: 8rem 2rem 4rem;
        background: linear-gradient(135deg, rgba(8, 28, 56, 0.92), rgba(14, 64, 120, 0.85)),
            url('/assets/port.jpg') center / cover no-repeat;
        color: #fff;
    }
    .hero h1 {
        font-size: 3.2rem;
        max-width: 900px;
        margin: 0 auto 1.5rem;
    }
    .hero p {
        font-size: 1.25rem;
        color: #cfe0f5;
        max-width: 700px;
        margin: 0 auto 2.5rem;
    }
    .hero-cta-group {
        display: flex;
        gap: 1rem;
        justify-content: center;
        flex-wrap: wrap;
    }
    .rtl .hero-cta-group {
        flex-direction: row-reverse;
    }
    .about-grid, .services-grid, .testimonials-grid {
        display: grid;
        gap: 2rem;
        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
        max-width: 1200px;
        margin: 2.5rem auto 0;
    }
    .service-card, .testimonial-card, .about-card {
        background: #fff;
        border-radius: 12px;
        padding: 2rem;
        box-shadow: 0 10px 30px rgba(8, 28, 56, 0.08);
    }
    .service-card i {
        font-size: 2rem;
        color: #f28c28;
        margin-bottom: 1rem;
    }
    .service-card a {
        color: #0e4078;
        font-weight: 600;
        text-decoration: none;
    }
    .stats-section {
        background: #0e4078;
        color: #fff;
    }
    .stats-grid {
        display: flex;
        justify-content: space-around;
        flex-wrap: wrap;
        gap: 2rem;
        margin-top: 2rem;
    }
    .stat-value {
        display: block;
        font-size: 3rem;
        font-weight: 700;
        color: #f28c28;
    }
    .partners-row {
        display: flex;
        flex-wrap: wrap;
        gap: 2.5rem;
        justify-content: center;
        margin-top: 2rem;
        font-weight: 600;
        color: #5a6b80;
    }
    @media (max-width: 768px) {
        .hero h1 {
            font-size: 2.2rem;
        }
    }
"#;

#[function_component(Home)]
pub fn home() -> Html {
    let lang = use_language();
    let visible = use_visibility(Threshold::SECTION);

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

    let arrow = if lang.is_rtl() { "fas fa-arrow-left" } else { "fas fa-arrow-right" };

    html! {
        <div class={classes!("home-page", lang.is_rtl().then_some("rtl"))}>
            <style>{HOME_CSS}</style>
            <header id="hero" data-observe="true" class={reveal_class(&visible, "hero", "hero")}>
                <div class="hero-content">
                    <h1>{lang.t("hero.title")}</h1>
                    <p>{lang.t("hero.subtitle")}</p>
                    <div class="hero-cta-group">
                        <a href="#contact" class="button primary">{lang.t("hero.cta_quote")}</a>
                        <a href="#services" class="button secondary">{lang.t("hero.cta_services")}</a>
                    </div>
                </div>
            </header>

            <section id="about" data-observe="true" class={reveal_class(&visible, "about", "page-section")}>
                <h2>{lang.t("about.title")}</h2>
                <p class="section-subtitle">{lang.t("about.body")}</p>
                <div class="about-grid">
                    <div class="about-card">
                        <h3>{lang.t("about.mission_title")}</h3>
                        <p>{lang.t("about.mission_body")}</p>
                    </div>
                    <div class="about-card">
                        <h3>{lang.t("about.vision_title")}</h3>
                        <p>{lang.t("about.vision_body")}</p>
                    </div>
                </div>
            </section>

            <section id="services" data-observe="true" class={reveal_class(&visible, "services", "page-section alt")}>
                <h2>{lang.t("services.title")}</h2>
                <p class="section-subtitle">{lang.t("services.subtitle")}</p>
                <div class="services-grid">
                    {
                        SERVICES.iter().map(|service| html! {
                            <div class="service-card">
                                <i class={service.icon}></i>
                                <h3>{lang.t(&service.title_key())}</h3>
                                <p>{lang.t(&service.summary_key())}</p>
                                <Link<Route> to={Route::Service { slug: service.slug.to_string() }}>
                                    {lang.t("services.learn_more")}{" "}<i class={arrow}></i>
                                </Link<Route>>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section id="stats" data-observe="true" class={reveal_class(&visible, "stats", "page-section stats-section")}>
                <Stats active={visible.contains("stats")} />
            </section>

            <section id="testimonials" data-observe="true" class={reveal_class(&visible, "testimonials", "page-section")}>
                <h2>{lang.t("testimonials.title")}</h2>
                <div class="testimonials-grid">
                    {
                        TESTIMONIALS.iter().map(|prefix| html! {
                            <blockquote class="testimonial-card">
                                <p>{lang.t(&format!("{}.quote", prefix))}</p>
                                <footer>
                                    <strong>{lang.t(&format!("{}.author", prefix))}</strong>
                                    <span>{lang.t(&format!("{}.role", prefix))}</span>
                                </footer>
                            </blockquote>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section id="partners" data-observe="true" class={reveal_class(&visible, "partners", "page-section alt")}>
                <h2>{lang.t("partners.title")}</h2>
                <p class="section-subtitle">{lang.t("partners.subtitle")}</p>
                <div class="partners-row">
                    { PARTNERS.iter().map(|name| html! { <span>{*name}</span> }).collect::<Html>() }
                </div>
            </section>

            <section id="contact" data-observe="true" class={reveal_class(&visible, "contact", "page-section")}>
                <ContactSection />
            </section>
        </div>
    }
}
