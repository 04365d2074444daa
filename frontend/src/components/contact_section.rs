use std::rc::Rc;

use gloo_console::{error, log};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::contact::{send_email, ContactError, ContactField, ContactState, Dispatch, FormStatus};
use crate::content::SERVICES;
use crate::i18n::use_language;

enum ContactAction {
    Update(ContactField, String),
    Replace(ContactState),
    Delivered,
    Failed(ContactError),
}

#[derive(Default, PartialEq)]
struct ContactReducer(ContactState);

impl Reducible for ContactReducer {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.0.clone();
        match action {
            ContactAction::Update(field, value) => state.update(field, value),
            ContactAction::Replace(next) => state = next,
            ContactAction::Delivered => state.delivered(),
            ContactAction::Failed(e) => state.delivery_failed(e),
        }
        Rc::new(Self(state))
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let lang = use_language();
    let state = use_reducer(ContactReducer::default);

    let on_field = |field: ContactField| {
        let dispatcher = state.dispatcher();
        Callback::from(move |value: String| dispatcher.dispatch(ContactAction::Update(field, value)))
    };
    let input_handler = |field: ContactField| {
        on_field(field).reform(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            input.value()
        })
    };
    let on_service = on_field(ContactField::Service).reform(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        select.value()
    });
    let on_message = on_field(ContactField::Message).reform(|e: InputEvent| {
        let area: HtmlTextAreaElement = e.target_unchecked_into();
        area.value()
    });

    let onsubmit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if state.0.is_sending() {
                return;
            }
            let mut attempt = state.0.clone();
            let delivery = config::email_delivery_config();
            let dispatch = attempt.submit(delivery.as_ref(), config::contact_email());
            state.dispatch(ContactAction::Replace(attempt));

            match dispatch {
                None => {}
                Some(Dispatch::Mailto(link)) => {
                    log!("EmailJS not configured, falling back to mailto");
                    let handoff = web_sys::window()
                        .ok_or_else(|| "no window".to_string())
                        .and_then(|window| {
                            window
                                .location()
                                .set_href(&link)
                                .map_err(|e| format!("{:?}", e))
                        });
                    match handoff {
                        Ok(()) => state.dispatch(ContactAction::Delivered),
                        Err(e) => {
                            error!("Failed to open mail client:", e.clone());
                            state.dispatch(ContactAction::Failed(ContactError::Delivery(e)));
                        }
                    }
                }
                Some(Dispatch::EmailJs(request)) => {
                    let dispatcher = state.dispatcher();
                    spawn_local(async move {
                        match send_email(&request).await {
                            Ok(()) => {
                                log!("Contact message sent");
                                dispatcher.dispatch(ContactAction::Delivered);
                            }
                            Err(e) => {
                                error!("Contact message failed:", e.to_string());
                                dispatcher.dispatch(ContactAction::Failed(e));
                            }
                        }
                    });
                }
            }
        })
    };

    let form = &state.0.form;
    let status = match &state.0.status {
        FormStatus::Idle | FormStatus::Sending => html! {},
        FormStatus::Sent => html! {
            <p class="form-status success">{lang.t("contact.success")}</p>
        },
        FormStatus::Failed(e) => html! {
            <p class="form-status error">{lang.t(e.message_key())}</p>
        },
    };
    let sending = state.0.is_sending();

    html! {
        <div class="contact-content">
            <h2>{lang.t("contact.title")}</h2>
            <p class="section-subtitle">{lang.t("contact.subtitle")}</p>
            <form class="contact-form" onsubmit={onsubmit}>
                <div class="form-row">
                    <input
                        type="text"
                        placeholder={lang.t("contact.name")}
                        value={form.name.clone()}
                        oninput={input_handler(ContactField::Name)}
                    />
                    <input
                        type="email"
                        placeholder={lang.t("contact.email")}
                        value={form.email.clone()}
                        oninput={input_handler(ContactField::Email)}
                    />
                </div>
                <div class="form-row">
                    <input
                        type="text"
                        placeholder={lang.t("contact.company")}
                        value={form.company.clone()}
                        oninput={input_handler(ContactField::Company)}
                    />
                    <input
                        type="tel"
                        placeholder={lang.t("contact.phone")}
                        value={form.phone.clone()}
                        oninput={input_handler(ContactField::Phone)}
                    />
                </div>
                <select onchange={on_service}>
                    <option value="" selected={form.service.is_empty()}>
                        {lang.t("contact.service_placeholder")}
                    </option>
                    {
                        SERVICES.iter().map(|service| html! {
                            <option value={service.slug} selected={form.service == service.slug}>
                                {lang.t(&service.title_key())}
                            </option>
                        }).collect::<Html>()
                    }
                </select>
                <textarea
                    rows="5"
                    placeholder={lang.t("contact.message")}
                    value={form.message.clone()}
                    oninput={on_message}
                />
                <button type="submit" class="submit-button" disabled={sending}>
                    {if sending { lang.t("contact.sending") } else { lang.t("contact.submit") }}
                </button>
                {status}
            </form>
        </div>
    }
}
