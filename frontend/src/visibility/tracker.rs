use std::rc::Rc;

use gloo_console::{error, log};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use super::set::{IntersectionSample, Threshold, VisibilitySet};

/// Elements carrying `data-observe` (and an `id`) are tracked.
const OBSERVE_SELECTOR: &str = "[data-observe]";

/// A batch of reports delivered by one observer callback.
pub struct ObservedBatch {
    samples: Vec<IntersectionSample>,
    threshold: Threshold,
}

impl Reducible for VisibilitySet {
    type Action = ObservedBatch;

    fn reduce(self: Rc<Self>, batch: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(&batch.samples, batch.threshold);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// A live observer over the sections found at mount. Dropping it disconnects
/// the observer before the JS callback is released.
struct ObservedSections {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl ObservedSections {
    fn start(threshold: Threshold, dispatcher: UseReducerDispatcher<VisibilitySet>) -> Option<Self> {
        let window = web_sys::window()?;
        if !intersection_observer_supported(&window) {
            log!("IntersectionObserver unavailable, sections stay in their hidden state");
            return None;
        }
        let document = window.document()?;

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let samples: Vec<IntersectionSample> = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| IntersectionSample {
                        id: entry.target().id(),
                        ratio: entry.intersection_ratio(),
                        is_intersecting: entry.is_intersecting(),
                    })
                    .collect();
                if !samples.is_empty() {
                    dispatcher.dispatch(ObservedBatch { samples, threshold });
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold.value()));
        let observer = match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => observer,
            Err(e) => {
                error!("Failed to create IntersectionObserver:", e);
                return None;
            }
        };

        // One scan at mount. Sections rendered later are not picked up.
        let marked = match document.query_selector_all(OBSERVE_SELECTOR) {
            Ok(list) => list,
            Err(e) => {
                error!("Failed to query observable sections:", e);
                observer.disconnect();
                return None;
            }
        };
        let mut observed = 0;
        for i in 0..marked.length() {
            if let Some(element) = marked.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                observer.observe(&element);
                observed += 1;
            }
        }
        log!(format!(
            "Observing {} sections at threshold {}",
            observed,
            threshold.value()
        ));

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ObservedSections {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn intersection_observer_supported(window: &web_sys::Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// Tracks which `data-observe` elements are at least `threshold` on screen.
///
/// The document is scanned once, after the first render of the calling
/// component; the observer is released when it unmounts. Without
/// `IntersectionObserver` the set simply stays empty.
#[hook]
pub fn use_visibility(threshold: Threshold) -> UseReducerHandle<VisibilitySet> {
    let visible = use_reducer(VisibilitySet::default);
    {
        let dispatcher = visible.dispatcher();
        use_effect_with_deps(
            move |_| {
                let observed = ObservedSections::start(threshold, dispatcher);
                move || drop(observed)
            },
            (),
        );
    }
    visible
}
