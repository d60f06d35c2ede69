use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::{self, ObserveOptions};
use crate::error::Result;
use crate::reveal::{crossed_threshold, AssetState, RevealState};

// Keeps the JS closure alive for as long as the observer may call it.
struct Observation {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Observation {
    fn start(target: &Element, options: ObserveOptions, on_enter: Callback<()>) -> Result<Self> {
        let threshold = options.threshold;
        let trigger_once = options.trigger_once;

        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let entered = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| crossed_threshold(entry.is_intersecting(), entry.intersection_ratio(), threshold));

            if entered {
                if trigger_once {
                    observer.disconnect();
                }
                on_enter.emit(());
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let mut init = IntersectionObserverInit::new();
        init.threshold(&JsValue::from_f64(threshold));

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Tracks whether the element behind `node` has entered the viewport.
///
/// The state only ever moves from `NotObserved` to `Revealed`. If the section
/// is never scrolled into view (or the observer cannot be created) it stays
/// hidden, unless a fallback timeout is configured.
#[hook]
pub fn use_reveal(node: &NodeRef) -> RevealState {
    let options = config::observe_options();
    let state = use_state_eq(RevealState::default);

    {
        let state = state.clone();
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                let reveal = Callback::from(move |_| state.set((*state).reveal()));

                let observation = match node.cast::<Element>() {
                    Some(target) => match Observation::start(&target, options, reveal.clone()) {
                        Ok(observation) => Some(observation),
                        Err(e) => {
                            warn!("Could not observe section: {}", e);
                            None
                        }
                    },
                    None => {
                        warn!("Reveal target is not mounted");
                        None
                    }
                };

                let fallback = options.fallback_ms.map(|ms| {
                    Timeout::new(ms, move || {
                        debug!("No observation within {} ms, revealing anyway", ms);
                        reveal.emit(());
                    })
                });

                move || {
                    drop(observation);
                    drop(fallback);
                }
            },
            (),
        );
    }

    *state
}

struct Preload {
    image: HtmlImageElement,
    _on_load: Closure<dyn FnMut()>,
    _on_error: Closure<dyn FnMut()>,
}

impl Preload {
    fn start(url: &str, on_ready: Callback<()>) -> Result<Self> {
        let image = HtmlImageElement::new()?;

        let loaded_url = url.to_string();
        let on_load = Closure::wrap(Box::new(move || {
            info!("Loaded {}", loaded_url);
            on_ready.emit(());
        }) as Box<dyn FnMut()>);

        let failed_url = url.to_string();
        let on_error = Closure::wrap(Box::new(move || {
            warn!("Failed to load {}", failed_url);
        }) as Box<dyn FnMut()>);

        image.set_onload(Some(on_load.as_ref().unchecked_ref()));
        image.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        image.set_src(url);

        Ok(Self {
            image,
            _on_load: on_load,
            _on_error: on_error,
        })
    }
}

impl Drop for Preload {
    fn drop(&mut self) {
        self.image.set_onload(None);
        self.image.set_onerror(None);
    }
}

/// Preloads `url` and reports `Ready` once the browser has it.
#[hook]
pub fn use_asset_ready(url: String) -> AssetState {
    let state = use_state_eq(AssetState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |url: &String| {
                let ready = Callback::from(move |_| state.set((*state).ready()));
                let preload = match Preload::start(url, ready) {
                    Ok(preload) => Some(preload),
                    Err(e) => {
                        warn!("Could not preload {}: {}", url, e);
                        None
                    }
                };
                move || drop(preload)
            },
            url,
        );
    }

    *state
}
