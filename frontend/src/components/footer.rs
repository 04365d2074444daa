use yew::prelude::*;
use yew_router::components::Link;

use crate::content::SERVICES;
use crate::i18n::use_language;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let lang = use_language();
    html! {
        <footer class={classes!("site-footer", lang.is_rtl().then_some("rtl"))}>
            <div class="footer-grid">
                <div class="footer-brand">
                    <h3>{"Meridian Freight"}</h3>
                    <p>{lang.t("footer.tagline")}</p>
                </div>
                <div class="footer-links">
                    <h4>{lang.t("footer.quick_links")}</h4>
                    <ul>
                        {
                            SERVICES.iter().map(|service| html! {
                                <li>
                                    <Link<Route> to={Route::Service { slug: service.slug.to_string() }}>
                                        {lang.t(&service.title_key())}
                                    </Link<Route>>
                                </li>
                            }).collect::<Html>()
                        }
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                {format!("© 2026 Meridian Freight. {}", lang.t("footer.rights"))}
            </div>
        </footer>
    }
}
