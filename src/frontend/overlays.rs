use web_sys::HtmlElement;
use yew::prelude::*;

use super::dom::{focus_element, inject_style_once, set_page_scroll_locked};
use super::styles::{
    MODAL_CSS, MODAL_STYLE_ID, NOTIFICATION_CSS, NOTIFICATION_STYLE_ID, SCROLL_INDICATOR_CSS,
    SCROLL_INDICATOR_STYLE_ID,
};
use crate::modal::ModalState;
use crate::notify::NotificationCenter;
use crate::projects::ProjectRecord;

#[derive(Properties, PartialEq)]
pub struct ProjectModalProps {
    pub state: ModalState,
    pub on_close: Callback<()>,
}

#[function_component(ProjectModal)]
pub fn project_modal(props: &ProjectModalProps) -> Html {
    let overlay = use_node_ref();

    use_effect_with((), |_| {
        inject_style_once(MODAL_STYLE_ID, MODAL_CSS);
        || ()
    });

    {
        let overlay = overlay.clone();
        use_effect_with(props.state.is_open(), move |open| {
            set_page_scroll_locked(*open);
            if *open {
                if let Some(element) = overlay.cast::<HtmlElement>() {
                    focus_element(&element);
                }
            }
            || ()
        });
    }

    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let project = props.state.current();
    let title = project.map(|project| project.title).unwrap_or_default();

    html! {
        <div
            id="project-modal"
            ref={overlay}
            class={classes!("modal", props.state.is_open().then_some("active"))}
            tabindex="-1"
            role="dialog"
            aria-modal="true"
            aria-labelledby="modal-title"
            aria-hidden={(!props.state.is_open()).to_string()}
        >
            <div class="modal-overlay" onclick={on_backdrop}></div>
            <div class="modal-content">
                <button class="modal-close" type="button" aria-label="Close project details" onclick={on_close_click}>
                    {"×"}
                </button>
                <h2 id="modal-title">{title}</h2>
                <div id="modal-body">
                    { for project.map(project_details) }
                </div>
            </div>
        </div>
    }
}

fn project_details(project: &'static ProjectRecord) -> Html {
    html! {
        <div class="modal-project-content">
            <div class="project-hero">
                <div class="project-placeholder">
                    <svg width="100" height="100" fill="currentColor" viewBox="0 0 24 24">
                        <path d={project.icon_path} />
                    </svg>
                </div>
            </div>

            <h3>{"Challenge"}</h3>
            <p>{project.challenge}</p>

            { for project.sections.iter().map(|section| html! {
                <>
                    <h3>{section.heading}</h3>
                    <ul>
                        { for section.items.iter().map(|item| html! { <li>{*item}</li> }) }
                    </ul>
                </>
            }) }

            { for project.code_sample.map(|code| html! {
                <>
                    <h3>{"Technical Implementation"}</h3>
                    <pre><code>{code}</code></pre>
                </>
            }) }

            <div class="project-links">
                { for project.links.iter().map(|link| html! {
                    <a
                        href={link.href}
                        class={classes!("btn", if link.primary { "btn-primary" } else { "btn-secondary" })}
                    >
                        {link.label}
                    </a>
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationStackProps {
    pub center: NotificationCenter,
    pub on_dismiss: Callback<u64>,
}

#[function_component(NotificationStack)]
pub fn notification_stack(props: &NotificationStackProps) -> Html {
    use_effect_with((), |_| {
        inject_style_once(NOTIFICATION_STYLE_ID, NOTIFICATION_CSS);
        || ()
    });

    let items = props.center.items().iter().map(|item| {
        let onclick = {
            let on_dismiss = props.on_dismiss.clone();
            let id = item.id;
            Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
        };

        html! {
            <div key={item.id} class={item.severity.class_name()} role="status" {onclick}>
                {item.message.clone()}
            </div>
        }
    });

    html! { <>{ for items }</> }
}

#[derive(Properties, PartialEq)]
pub struct ScrollIndicatorProps {
    pub progress: f64,
}

#[function_component(ScrollIndicator)]
pub fn scroll_indicator(props: &ScrollIndicatorProps) -> Html {
    use_effect_with((), |_| {
        inject_style_once(SCROLL_INDICATOR_STYLE_ID, SCROLL_INDICATOR_CSS);
        || ()
    });

    html! {
        <div class="scroll-indicator">
            <div class="scroll-progress" style={format!("width: {:.2}%;", props.progress)}></div>
        </div>
    }
}
