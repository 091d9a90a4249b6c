use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::error::SiteError;

pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl RevealObserver {
    pub fn observe<F>(element: &Element, threshold: f64, mut on_visible: F) -> Result<Self, SiteError>
    where
        F: FnMut() + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
            let intersecting = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if intersecting {
                on_visible();
            }
        }) as Box<dyn FnMut(js_sys::Array)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[hook]
pub fn use_reveal(threshold: f64) -> (NodeRef, bool) {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.setter();
        use_effect_with_deps(
            move |_| {
                let fallback = visible.clone();
                let observer = node.cast::<Element>().and_then(|element| {
                    RevealObserver::observe(&element, threshold, move || visible.set(true))
                        .map_err(|e| log::warn!("reveal observer unavailable: {}", e))
                        .ok()
                });
                if observer.is_none() {
                    // Without an observer the section would stay hidden.
                    fallback.set(true);
                }
                move || drop(observer)
            },
            (),
        );
    }

    (node, *visible)
}

pub fn reveal_class(visible: bool) -> &'static str {
    if visible {
        "reveal shown"
    } else {
        "reveal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_class_toggles_shown() {
        assert_eq!(reveal_class(false), "reveal");
        assert_eq!(reveal_class(true), "reveal shown");
    }
}
