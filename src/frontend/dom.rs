use futures_util::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use js_sys::{Function, Reflect};
use log::Level;
use serde_json::json;
use url::Url;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{
    window, Document, ErrorEvent, Event, EventTarget, HtmlElement, ScrollBehavior,
    ScrollToOptions, Storage, Window,
};

use crate::contact::{ContactMessage, Delivery, FormError};
use crate::report::{LogReporter, Reporter};
use crate::scroll::{nav_scroll_target, SectionBounds};
use crate::storage::KeyValueStore;
use crate::theme::Theme;
use crate::view_counter::{decode_count, CounterClient, CounterError};

const SERVICE_WORKER_SCRIPT: &str = "/sw.js";

pub fn document() -> Option<Document> {
    window()?.document()
}

/// `performance.now()`; falls back to the wall clock without a `Performance`.
pub fn monotonic_ms() -> f64 {
    window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or_else(js_sys::Date::now)
}

#[derive(Clone, Copy)]
enum StorageArea {
    Local,
    Session,
}

impl StorageArea {
    fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Session => "session",
        }
    }
}

/// `localStorage` / `sessionStorage`, tolerant of browsers that deny access.
#[derive(Clone, Copy)]
pub struct BrowserStore {
    area: StorageArea,
    reporter: LogReporter,
}

impl BrowserStore {
    pub fn local(reporter: LogReporter) -> Self {
        Self {
            area: StorageArea::Local,
            reporter,
        }
    }

    pub fn session(reporter: LogReporter) -> Self {
        Self {
            area: StorageArea::Session,
            reporter,
        }
    }

    fn storage(&self) -> Option<Storage> {
        let window = window()?;
        let storage = match self.area {
            StorageArea::Local => window.local_storage(),
            StorageArea::Session => window.session_storage(),
        };
        storage.ok().flatten()
    }
}

impl KeyValueStore for BrowserStore {
    fn read(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        let written = self
            .storage()
            .is_some_and(|storage| storage.set_item(key, value).is_ok());

        if !written {
            self.reporter.report(
                Level::Debug,
                "storage_unavailable",
                json!({ "area": self.area.as_str(), "key": key }),
            );
        }
    }
}

/// Event listener removed from its target when dropped.
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        callback: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Event)>::new(callback);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;

        Some(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    pub fn on_window(event: &'static str, callback: impl FnMut(Event) + 'static) -> Option<Self> {
        let window = window()?;
        Self::new(window.as_ref(), event, callback)
    }

    pub fn on_document(event: &'static str, callback: impl FnMut(Event) + 'static) -> Option<Self> {
        let document = document()?;
        Self::new(document.as_ref(), event, callback)
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

pub fn apply_theme(theme: Theme) {
    if let Some(root) = document().and_then(|document| document.document_element()) {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

fn reduced_motion_requested(window: &Window) -> bool {
    matches!(
        window.match_media("(prefers-reduced-motion: reduce)"),
        Ok(Some(query)) if query.matches()
    )
}

/// Applies the theme inside a view transition where the browser has one.
pub fn apply_theme_with_transition(theme: Theme) {
    let transition = window()
        .filter(|window| !reduced_motion_requested(window))
        .and_then(|window| window.document())
        .map(JsValue::from)
        .and_then(|document| {
            let start = Reflect::get(&document, &JsValue::from_str("startViewTransition")).ok()?;
            Some((document, start.dyn_into::<Function>().ok()?))
        });

    let Some((document, start)) = transition else {
        apply_theme(theme);
        return;
    };

    if start
        .call1(&document, &Closure::once_into_js(move || apply_theme(theme)))
        .is_err()
    {
        apply_theme(theme);
    }
}

/// Adds a `<style id=…>` to the head unless one with that id exists.
pub fn inject_style_once(id: &str, css: &str) {
    let Some(document) = document() else {
        return;
    };

    if document.get_element_by_id(id).is_some() {
        return;
    }

    let (Some(head), Ok(style)) = (document.head(), document.create_element("style")) else {
        return;
    };

    style.set_id(id);
    style.set_text_content(Some(css));
    let _ = head.append_child(&style);
}

pub fn set_page_scroll_locked(locked: bool) {
    let Some(body) = document().and_then(|document| document.body()) else {
        return;
    };

    let overflow = if locked { "hidden" } else { "auto" };
    let _ = body.style().set_property("overflow", overflow);
}

#[derive(Clone, Copy)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

pub fn scroll_metrics() -> Option<ScrollMetrics> {
    let window = window()?;
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let root = window.document()?.document_element()?;

    let scroll_top = match root.scroll_top() {
        0 => scroll_y,
        top => f64::from(top),
    };

    Some(ScrollMetrics {
        scroll_y,
        scroll_top,
        scroll_height: f64::from(root.scroll_height()),
        client_height: f64::from(root.client_height()),
    })
}

fn section_element(id: &str) -> Option<HtmlElement> {
    document()?.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

/// Bounds of the sections that exist in the document, in the given order.
pub fn section_bounds<'a>(ids: impl IntoIterator<Item = &'a str>) -> Vec<SectionBounds> {
    ids.into_iter()
        .filter_map(|id| {
            let element = section_element(id)?;
            Some(SectionBounds::new(
                id,
                f64::from(element.offset_top()),
                f64::from(element.offset_height()),
            ))
        })
        .collect()
}

pub fn scroll_to_section(id: &str) {
    let (Some(window), Some(section)) = (window(), section_element(id)) else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(nav_scroll_target(f64::from(section.offset_top())));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn focus_element(element: &HtmlElement) {
    let _ = element.focus();
}

/// `fetch`-backed counter client with an explicit timeout.
pub struct BrowserCounterClient {
    timeout_ms: u32,
}

impl BrowserCounterClient {
    pub fn new(timeout_ms: u32) -> Self {
        Self { timeout_ms }
    }
}

impl CounterClient for BrowserCounterClient {
    async fn fetch_count(&self, url: &Url) -> Result<u64, CounterError> {
        let request = Box::pin(fetch_count_once(url.as_str()));
        let timeout = Box::pin(TimeoutFuture::new(self.timeout_ms));

        match select(request, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(CounterError::Timeout(self.timeout_ms)),
        }
    }
}

async fn fetch_count_once(url: &str) -> Result<u64, CounterError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|error| CounterError::Network(error.to_string()))?;

    if !response.ok() {
        return Err(CounterError::Status(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|error| CounterError::Network(error.to_string()))?;
    decode_count(&body)
}

pub async fn deliver_message(delivery: &Delivery, message: &ContactMessage) -> Result<(), FormError> {
    match delivery {
        Delivery::Simulated { delay_ms } => {
            TimeoutFuture::new(*delay_ms).await;
            Ok(())
        }
        Delivery::Endpoint(url) => {
            let response = Request::post(url.as_str())
                .header("Accept", "application/json")
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(message.to_form_body())
                .map_err(|error| FormError::Network(error.to_string()))?
                .send()
                .await
                .map_err(|error| FormError::Network(error.to_string()))?;

            if response.ok() {
                Ok(())
            } else {
                Err(FormError::Rejected(response.status()))
            }
        }
    }
}

/// Reports uncaught script errors for the lifetime of the page.
pub fn install_error_reporter(reporter: LogReporter) {
    let listener = EventListener::on_window("error", move |event| {
        let Some(event) = event.dyn_ref::<ErrorEvent>() else {
            return;
        };

        reporter.report(
            Level::Error,
            "window_error",
            json!({
                "message": event.message(),
                "source": event.filename(),
                "line": event.lineno(),
            }),
        );
    });

    std::mem::forget(listener);
}

pub fn register_service_worker(reporter: LogReporter) {
    let Some(window) = window() else {
        return;
    };

    let navigator = window.navigator();
    let supported = Reflect::has(&navigator, &JsValue::from_str("serviceWorker")).unwrap_or(false);
    if !supported {
        return;
    }

    let registration = navigator.service_worker().register(SERVICE_WORKER_SCRIPT);
    spawn_local(async move {
        match JsFuture::from(registration).await {
            Ok(_) => reporter.report(
                Level::Info,
                "service_worker_registered",
                json!({ "script": SERVICE_WORKER_SCRIPT }),
            ),
            Err(error) => reporter.report(
                Level::Warn,
                "service_worker_failed",
                json!({ "script": SERVICE_WORKER_SCRIPT, "error": format!("{error:?}") }),
            ),
        }
    });
}
