mod dom;
mod hooks;
mod overlays;
mod sections;
mod styles;

use gloo_timers::callback::Timeout;
use log::Level;
use serde_json::json;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{window, KeyboardEvent};
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::modal::ModalState;
use crate::notify::{NotificationCenter, Severity, NOTIFICATION_LIFETIME_MS};
use crate::report::{LogReporter, Reporter};
use crate::theme::{load_theme, persist_theme};
use dom::{
    apply_theme, apply_theme_with_transition, install_error_reporter, monotonic_ms,
    register_service_worker, BrowserStore, EventListener,
};
use hooks::use_scroll_snapshot;
use overlays::{NotificationStack, ProjectModal, ScrollIndicator};
use sections::{
    AboutSection, ContactSection, ExperienceSection, Hero, Nav, ProjectsSection, SkillsSection,
};

/// Build-time configuration and the event reporter, shared through context.
#[derive(PartialEq)]
pub struct Services {
    pub config: SiteConfig,
    pub reporter: LogReporter,
}

#[derive(PartialEq)]
struct ModalModel {
    state: ModalState,
    reporter: LogReporter,
}

enum ModalAction {
    Open(String),
    Close,
    Key(String),
}

impl Reducible for ModalModel {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.state;

        match action {
            ModalAction::Open(id) => {
                if state.open(&id).is_none() {
                    self.reporter.report(
                        Level::Warn,
                        "project_modal_unknown_id",
                        json!({ "id": id }),
                    );
                    return self;
                }
            }
            ModalAction::Close => state.close(),
            ModalAction::Key(key) => {
                if !state.handle_key(&key) {
                    return self;
                }
            }
        }

        Rc::new(Self {
            state,
            reporter: self.reporter,
        })
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub services: Rc<Services>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let reporter = props.services.reporter;
    let theme = use_state(|| load_theme(&BrowserStore::local(reporter)));
    let scroll = use_scroll_snapshot();
    let modal = use_reducer(|| ModalModel {
        state: ModalState::default(),
        reporter,
    });
    let notifications = use_mut_ref(NotificationCenter::default);
    let redraw = use_force_update();

    {
        let current = *theme;
        use_effect_with((), move |_| {
            apply_theme(current);
            || ()
        });
    }

    {
        let dispatcher = modal.dispatcher();
        use_effect_with((), move |_| {
            let listener = EventListener::on_document("keydown", move |event| {
                if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                    dispatcher.dispatch(ModalAction::Key(event.key()));
                }
            });
            move || drop(listener)
        });
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = (*theme).toggled();
            persist_theme(&BrowserStore::local(reporter), next);
            apply_theme_with_transition(next);
            theme.set(next);
        })
    };

    let on_open_project = {
        let dispatcher = modal.dispatcher();
        Callback::from(move |id: &'static str| dispatcher.dispatch(ModalAction::Open(id.to_string())))
    };

    let on_close_project = {
        let dispatcher = modal.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(ModalAction::Close))
    };

    // Toasts are removed by id, never by comparing clocks.
    let notify = {
        let notifications = notifications.clone();
        let redraw = redraw.clone();
        Callback::from(move |(message, severity): (String, Severity)| {
            let id = notifications
                .borrow_mut()
                .push(message, severity, monotonic_ms());
            redraw.force_update();

            let notifications = notifications.clone();
            let redraw = redraw.clone();
            Timeout::new(NOTIFICATION_LIFETIME_MS, move || {
                notifications.borrow_mut().dismiss(id);
                redraw.force_update();
            })
            .forget();
        })
    };

    let on_dismiss = {
        let notifications = notifications.clone();
        Callback::from(move |id: u64| {
            notifications.borrow_mut().dismiss(id);
            redraw.force_update();
        })
    };

    let toasts = notifications.borrow().clone();

    html! {
        <ContextProvider<Rc<Services>> context={props.services.clone()}>
            <ScrollIndicator progress={scroll.progress} />
            <Nav highlight={scroll.highlight.clone()} theme={*theme} {on_toggle_theme} />
            <main>
                <Hero scroll_y={scroll.scroll_y} />
                <AboutSection />
                <SkillsSection />
                <ProjectsSection on_open={on_open_project} />
                <ExperienceSection />
                <ContactSection {notify} />
            </main>
            <ProjectModal state={modal.state} on_close={on_close_project} />
            <NotificationStack center={toasts} {on_dismiss} />
        </ContextProvider<Rc<Services>>>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();

    let config = SiteConfig::from_build_env();
    if let Some(level) = config.log_level.to_level() {
        let _ = console_log::init_with_level(level);
    }

    let reporter = LogReporter::new(config.log_level);
    install_error_reporter(reporter);
    register_service_worker(reporter);

    let services = Rc::new(Services { config, reporter });
    yew::Renderer::<App>::with_root_and_props(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
        AppProps { services },
    )
    .render();
}
