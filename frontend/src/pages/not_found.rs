use yew::prelude::*;
use yew_router::components::Link;

use crate::i18n::use_language;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let lang = use_language();
    html! {
        <div class="not-found page-section">
            <h1>{"404"}</h1>
            <h2>{lang.t("not_found.title")}</h2>
            <p>{lang.t("not_found.body")}</p>
            <Link<Route> to={Route::Home} classes="button primary">
                {lang.t("not_found.home")}
            </Link<Route>>
        </div>
    }
}
