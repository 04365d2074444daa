//! Browser tests: `wasm-pack test --headless --firefox frontend`.
//! Locale side effects, the section tracker and the animated counter.
#![cfg(target_arch = "wasm32")]

use meridian_web::config::LANGUAGE_STORAGE_KEY;
use meridian_web::i18n::{BrowserStorage, HtmlRoot, Language, Locale, PreferenceStore};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn root_attribute(name: &str) -> Option<String> {
    web_sys::window()?
        .document()?
        .document_element()?
        .get_attribute(name)
}

#[wasm_bindgen_test]
fn switching_language_updates_document_and_storage() {
    let mut locale = Locale::initialize(&BrowserStorage);

    locale.set_language("ar", &BrowserStorage, &HtmlRoot).unwrap();
    assert_eq!(root_attribute("dir").as_deref(), Some("rtl"));
    assert_eq!(root_attribute("lang").as_deref(), Some("ar"));
    assert_eq!(BrowserStorage.load(LANGUAGE_STORAGE_KEY).as_deref(), Some("ar"));
    assert_eq!(Locale::initialize(&BrowserStorage).language(), Language::Ar);

    locale.set_language("en", &BrowserStorage, &HtmlRoot).unwrap();
    assert_eq!(root_attribute("dir").as_deref(), Some("ltr"));
    assert_eq!(root_attribute("lang").as_deref(), Some("en"));
}

#[wasm_bindgen_test]
fn rejected_code_leaves_document_untouched() {
    let mut locale = Locale::initialize(&BrowserStorage);
    locale.set_language("en", &BrowserStorage, &HtmlRoot).unwrap();

    assert!(locale.set_language("xx", &BrowserStorage, &HtmlRoot).is_err());
    assert_eq!(root_attribute("dir").as_deref(), Some("ltr"));
    assert_eq!(BrowserStorage.load(LANGUAGE_STORAGE_KEY).as_deref(), Some("en"));
}

mod hooks {
    use std::cell::RefCell;

    use gloo_timers::future::TimeoutFuture;
    use meridian_web::visibility::{use_animated_counter, use_visibility, Threshold};
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_test::*;
    use web_sys::{Document, Element, HtmlElement};
    use yew::prelude::*;

    thread_local! {
        static COUNTER_VALUES: RefCell<Vec<f64>> = RefCell::new(Vec::new());
    }

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn mount_point() -> Element {
        let root = document().create_element("div").unwrap();
        document().body().unwrap().append_child(&root).unwrap();
        root
    }

    fn click(id: &str) {
        document()
            .get_element_by_id(id)
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap()
            .click();
    }

    fn text(id: &str) -> String {
        document()
            .get_element_by_id(id)
            .and_then(|el| el.text_content())
            .unwrap_or_default()
    }

    #[function_component(Sections)]
    fn sections() -> Html {
        let visible = use_visibility(Threshold::new(0.5).unwrap());
        let late = use_state(|| false);
        let show_late = {
            let late = late.clone();
            Callback::from(move |_: MouseEvent| late.set(true))
        };
        let mut ids: Vec<&str> = visible.iter().collect();
        ids.sort_unstable();
        html! {
            <div>
                <p id="visible-ids">{ids.join(",")}</p>
                <button id="show-late" onclick={show_late}></button>
                if *late {
                    <section id="late" data-observe="true" style="height: 200px;"></section>
                }
                <section id="top" data-observe="true" style="height: 200px;"></section>
                <div style="height: 5000px;"></div>
                <section id="far" data-observe="true" style="height: 200px;"></section>
            </div>
        }
    }

    #[function_component(Counter)]
    fn counter() -> Html {
        let active = use_state(|| false);
        let value = use_animated_counter(*active, 25.0, 100);
        COUNTER_VALUES.with(|values| values.borrow_mut().push(value));
        let toggle = {
            let active = active.clone();
            Callback::from(move |_: MouseEvent| active.set(!*active))
        };
        html! {
            <div>
                <button id="counter-toggle" onclick={toggle}></button>
                <span id="counter-value">{value.to_string()}</span>
            </div>
        }
    }

    #[wasm_bindgen_test]
    async fn only_sections_present_at_mount_are_tracked() {
        let root = mount_point();
        let app = yew::Renderer::<Sections>::with_root(root.clone()).render();
        TimeoutFuture::new(300).await;
        assert_eq!(text("visible-ids"), "top");

        // Rendered after the scan, so never observed even though it is on screen.
        click("show-late");
        TimeoutFuture::new(300).await;
        assert!(document().get_element_by_id("late").is_some());
        assert_eq!(text("visible-ids"), "top");

        app.destroy();
        TimeoutFuture::new(50).await;
        assert!(document().get_element_by_id("top").is_none());
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn nothing_becomes_visible_without_intersection_observer() {
        let window = web_sys::window().unwrap();
        let key = JsValue::from_str("IntersectionObserver");
        let ctor = js_sys::Reflect::get(&window, &key).unwrap();
        assert!(js_sys::Reflect::delete_property(&window, &key).unwrap());

        let root = mount_point();
        let app = yew::Renderer::<Sections>::with_root(root.clone()).render();
        TimeoutFuture::new(300).await;
        assert!(document().get_element_by_id("top").is_some());
        assert_eq!(text("visible-ids"), "");

        app.destroy();
        root.remove();
        js_sys::Reflect::set(&window, &key, &ctor).unwrap();
    }

    #[wasm_bindgen_test]
    async fn counter_restarts_from_zero_with_a_single_run() {
        COUNTER_VALUES.with(|values| values.borrow_mut().clear());
        let root = mount_point();
        let app = yew::Renderer::<Counter>::with_root(root.clone()).render();
        TimeoutFuture::new(50).await;
        assert_eq!(text("counter-value"), "0");

        click("counter-toggle");
        TimeoutFuture::new(2500).await;
        assert_eq!(text("counter-value"), "25");

        // Leaving keeps the finished value.
        click("counter-toggle");
        TimeoutFuture::new(100).await;
        assert_eq!(text("counter-value"), "25");

        click("counter-toggle");
        TimeoutFuture::new(50).await;
        assert_eq!(text("counter-value"), "0");
        COUNTER_VALUES.with(|values| values.borrow_mut().clear());

        TimeoutFuture::new(2500).await;
        assert_eq!(text("counter-value"), "25");

        // Two live intervals would interleave their runs and step backwards.
        let values = COUNTER_VALUES.with(|values| values.borrow().clone());
        assert!(values.windows(2).all(|pair| pair[0] <= pair[1]), "{values:?}");
        assert!(values.iter().all(|v| *v <= 25.0));
        assert_eq!(values.last().copied(), Some(25.0));

        app.destroy();
        root.remove();
    }
}
