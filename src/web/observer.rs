use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use super::{js_error, query_all};
use crate::components::reveal::{IntersectionEntry, RevealOnScroll};
use crate::config::EnhanceConfig;
use crate::dom::Watcher;
use crate::error::SetupError;

impl Watcher<HtmlElement> for IntersectionObserver {
    fn watch(&self, element: &HtmlElement) {
        self.observe(element);
    }

    fn unwatch(&self, element: &HtmlElement) {
        self.unobserve(element);
    }
}

/// The live reveal observer. Dropping it stops all observation.
pub struct RevealBinding {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for RevealBinding {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn install(document: &Document, config: &EnhanceConfig) -> Result<RevealBinding, SetupError> {
    let reveal = RevealOnScroll::new(config.stagger_step);

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let entries = entries
                .iter()
                .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    let target = entry.target().dyn_into::<HtmlElement>().ok()?;
                    Some(IntersectionEntry {
                        target,
                        is_intersecting: entry.is_intersecting(),
                    })
                });
            reveal.handle_entries(&observer, entries);
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_root_margin(&config.reveal_root_margin);
    init.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|err| SetupError::Observer(js_error(&err)))?;
    let binding = RevealBinding {
        observer,
        _callback: callback,
    };

    let cards = query_all(document, &config.selectors.staggered)?;
    reveal.register_staggered(&binding.observer, &cards);
    for selector in &config.selectors.reveal {
        reveal.register(&binding.observer, &query_all(document, selector)?);
    }
    Ok(binding)
}
