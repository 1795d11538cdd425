use gloo_timers::callback::Timeout;
use js_sys::Array;
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use super::dom::{monotonic_ms, scroll_metrics, section_bounds, EventListener};
use crate::content::NAV_SECTIONS;
use crate::scroll::{scroll_progress, NavHighlight, ScrollThrottle, Throttled};
use crate::visibility::{RevealLatch, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Becomes `true` the first time the referenced element scrolls into view
/// and stays `true`; the element is unobserved after that.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with(node, move |node| {
            let observation = node
                .cast::<Element>()
                .and_then(|element| match observe_once(&element, revealed.clone()) {
                    Some(observation) => Some(observation),
                    None => {
                        // No IntersectionObserver: show the element as-is.
                        revealed.set(true);
                        None
                    }
                });

            move || {
                if let Some((observer, _callback)) = observation {
                    observer.disconnect();
                }
            }
        });
    }

    *revealed
}

fn observe_once(
    element: &Element,
    revealed: UseStateHandle<bool>,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let latch = Rc::new(Cell::new(RevealLatch::default()));
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, source: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let mut state = latch.get();
                if state.observe(entry.is_intersecting()) {
                    latch.set(state);
                    source.unobserve(&entry.target());
                    revealed.set(true);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    observer.observe(element);
    Some((observer, callback))
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollSnapshot {
    pub highlight: NavHighlight,
    pub progress: f64,
    pub scroll_y: f64,
}

/// Tracks the active nav section, page progress and raw scroll offset.
/// Recomputation is throttled; a trailing pass catches the final position.
#[hook]
pub fn use_scroll_snapshot() -> ScrollSnapshot {
    let snapshot = use_state_eq(ScrollSnapshot::default);

    {
        let snapshot = snapshot.clone();
        use_effect_with((), move |_| {
            let highlight = RefCell::new(NavHighlight::default());
            let recompute: Rc<dyn Fn()> = Rc::new(move || {
                let Some(metrics) = scroll_metrics() else {
                    return;
                };

                let sections = section_bounds(NAV_SECTIONS.iter().map(|section| section.id));
                let mut highlight = highlight.borrow_mut();
                highlight.update(&sections, metrics.scroll_y);

                snapshot.set(ScrollSnapshot {
                    highlight: highlight.clone(),
                    progress: scroll_progress(
                        metrics.scroll_top,
                        metrics.scroll_height,
                        metrics.client_height,
                    ),
                    scroll_y: metrics.scroll_y,
                });
            });
            recompute();

            let throttle = RefCell::new(ScrollThrottle::default());
            let trailing: RefCell<Option<Timeout>> = RefCell::new(None);
            let listener = EventListener::on_window("scroll", move |_| {
                match throttle.borrow_mut().admit(monotonic_ms()) {
                    Throttled::Run => {
                        trailing.borrow_mut().take();
                        recompute();
                    }
                    Throttled::Defer { delay_ms } => {
                        let recompute = recompute.clone();
                        let delay = delay_ms.ceil() as u32;
                        *trailing.borrow_mut() = Some(Timeout::new(delay, move || recompute()));
                    }
                }
            });

            move || drop(listener)
        });
    }

    (*snapshot).clone()
}
