use gloo_timers::callback::{Interval, Timeout};
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;

use super::dom::{deliver_message, scroll_to_section, BrowserCounterClient, BrowserStore};
use super::hooks::use_reveal;
use super::Services;
use crate::contact::{outcome_notice, ContactMessage, Delivery, SubmitButton};
use crate::content::{
    FilterOption, Skill, Stat, TimelineEntry, GRADIENT_ORBS, NAV_SECTIONS, PROJECT_FILTERS,
    SKILLS, SKILL_FILTERS, STATS, TIMELINE,
};
use crate::filter::{FilterGroup, ItemVisibility, MatchMode};
use crate::notify::Severity;
use crate::projects::{ProjectRecord, PROJECTS};
use crate::report::Reporter;
use crate::scroll::{parallax_offset, NavHighlight};
use crate::theme::Theme;
use crate::view_counter::{resolve_display, CounterEndpoints, FALLBACK_DISPLAY};
use crate::visibility::{
    card_stagger_delay, fill_width, parse_level, CountUp, COUNT_UP_FRAME_MS, REVEAL_CLASS,
    SKILL_FILL_DELAY_MS,
};

fn display_style(visible: bool) -> &'static str {
    if visible {
        "display: block;"
    } else {
        "display: none;"
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub highlight: NavHighlight,
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state_eq(|| false);

    let on_menu_toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let links = NAV_SECTIONS.iter().map(|section| {
        let onclick = {
            let menu_open = menu_open.clone();
            let id = section.id;
            Callback::from(move |event: MouseEvent| {
                event.prevent_default();
                scroll_to_section(id);
                menu_open.set(false);
            })
        };

        html! {
            <li>
                <a
                    class={classes!("nav-link", props.highlight.is_active(section.id).then_some("active"))}
                    href={format!("#{}", section.id)}
                    {onclick}
                >
                    {section.label}
                </a>
            </li>
        }
    });

    let on_theme_click = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    html! {
        <nav class="nav">
            <div class="nav-container">
                <a class="nav-logo" href="#home">{"Alex Chen"}</a>
                <ul class={classes!("nav-menu", (*menu_open).then_some("active"))}>
                    { for links }
                </ul>
                <button
                    class="theme-toggle"
                    type="button"
                    aria-label={props.theme.toggle_label()}
                    aria-pressed={props.theme.pressed().to_string()}
                    onclick={on_theme_click}
                >
                    <span class="theme-icon" aria-hidden="true">{props.theme.icon()}</span>
                </button>
                <button
                    class={classes!("mobile-menu-toggle", (*menu_open).then_some("active"))}
                    type="button"
                    aria-label="Toggle navigation menu"
                    aria-expanded={(*menu_open).to_string()}
                    onclick={on_menu_toggle}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub scroll_y: f64,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let stats_ref = use_node_ref();
    let stats_revealed = use_reveal(stats_ref.clone());

    let orbs = (0..GRADIENT_ORBS).map(|index| {
        let style = format!(
            "transform: translateY({:.2}px);",
            parallax_offset(props.scroll_y, index)
        );
        html! { <div class={format!("gradient-orb orb-{}", index + 1)} {style}></div> }
    });

    html! {
        <section id="home" class="hero">
            <div class="hero-background">{ for orbs }</div>
            <div class="hero-content">
                <h1 class="hero-title">{"Hi, I'm Alex Chen"}</h1>
                <p class="hero-subtitle">
                    {"Full-stack developer building fast, friendly products for the web and mobile."}
                </p>
                <div class="hero-actions">
                    <a class="btn btn-primary" href="#projects">{"View My Work"}</a>
                    <a class="btn btn-secondary" href="#contact">{"Get In Touch"}</a>
                </div>
                <div
                    ref={stats_ref}
                    class={classes!("hero-stats", stats_revealed.then_some(REVEAL_CLASS))}
                >
                    { for STATS.iter().map(|stat| html! { <StatItem {stat} run={stats_revealed} /> }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct StatItemProps {
    stat: &'static Stat,
    run: bool,
}

#[function_component(StatItem)]
fn stat_item(props: &StatItemProps) -> Html {
    let number = if props.stat.source.animates() {
        html! { <CountUpNumber id={props.stat.id} value={props.stat.value} run={props.run} /> }
    } else {
        html! { <ViewCounter id={props.stat.id} /> }
    };

    html! {
        <div class="stat">
            {number}
            <span class="stat-label">{props.stat.label}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CountUpNumberProps {
    id: Option<&'static str>,
    value: &'static str,
    run: bool,
}

#[function_component(CountUpNumber)]
fn count_up_number(props: &CountUpNumberProps) -> Html {
    let text = use_state(|| props.value.to_string());

    {
        let text = text.clone();
        let value = props.value;
        use_effect_with(props.run, move |run| {
            let ticker: Rc<RefCell<Option<Interval>>> = Rc::default();

            if let Some(mut counter) = CountUp::parse(value).filter(|_| *run) {
                let slot = ticker.clone();
                *ticker.borrow_mut() = Some(Interval::new(COUNT_UP_FRAME_MS, move || {
                    text.set(counter.tick());
                    if counter.is_finished() {
                        slot.borrow_mut().take();
                    }
                }));
            }

            move || {
                ticker.borrow_mut().take();
            }
        });
    }

    html! { <span class="stat-number" id={props.id}>{(*text).clone()}</span> }
}

#[derive(Properties, PartialEq)]
struct ViewCounterProps {
    id: Option<&'static str>,
}

/// `#view-counter`: filled once per page load from the counting service.
#[function_component(ViewCounter)]
fn view_counter(props: &ViewCounterProps) -> Html {
    let services = use_context::<Rc<Services>>();
    let text = use_state(|| "...".to_string());

    {
        let text = text.clone();
        use_effect_with((), move |_| {
            if let Some(services) = services {
                let reporter = services.reporter;
                let timeout_ms = services.config.counter_timeout_ms;

                match CounterEndpoints::from_config(&services.config) {
                    Some(endpoints) => spawn_local(async move {
                        let client = BrowserCounterClient::new(timeout_ms);
                        let session = BrowserStore::session(reporter);
                        text.set(resolve_display(&client, &endpoints, &session, &reporter).await);
                    }),
                    None => text.set(FALLBACK_DISPLAY.to_string()),
                }
            }
            || ()
        });
    }

    html! { <span class="stat-number" id={props.id}>{(*text).clone()}</span> }
}

#[derive(Properties, PartialEq)]
struct FilterBarProps {
    class: &'static str,
    attribute: &'static str,
    options: &'static [FilterOption],
    active: AttrValue,
    on_select: Callback<&'static str>,
}

#[function_component(FilterBar)]
fn filter_bar(props: &FilterBarProps) -> Html {
    let buttons = props.options.iter().map(|option| {
        let onclick = {
            let on_select = props.on_select.clone();
            let token = option.token;
            Callback::from(move |_: MouseEvent| on_select.emit(token))
        };
        let class = classes!("filter-btn", (props.active.as_str() == option.token).then_some("active"));

        // Skill buttons use `data-category`, project buttons `data-filter`.
        if props.attribute == "data-filter" {
            html! { <button {class} type="button" data-filter={option.token} {onclick}>{option.label}</button> }
        } else {
            html! { <button {class} type="button" data-category={option.token} {onclick}>{option.label}</button> }
        }
    });

    html! { <div class={props.class}>{ for buttons }</div> }
}

/// Filter selection plus a generation counter; bumping the generation
/// remounts the items so their entry animation replays.
#[hook]
fn use_filter(mode: MatchMode) -> (UseStateHandle<(FilterGroup, u32)>, Callback<&'static str>) {
    let state = use_state(|| (FilterGroup::new(mode), 0_u32));
    let on_select = {
        let state = state.clone();
        Callback::from(move |token: &'static str| {
            let (mut group, generation) = (*state).clone();
            group.select(token);
            state.set((group, generation.wrapping_add(1)));
        })
    };
    (state, on_select)
}

#[function_component(SkillsSection)]
pub fn skills_section() -> Html {
    let (state, on_select) = use_filter(MatchMode::Exact);
    let (group, generation) = &*state;
    let outcome = group.apply(SKILLS.iter().map(|skill| skill.category));

    let items = SKILLS.iter().zip(outcome).map(|(skill, visibility)| {
        html! { <SkillItem key={format!("{}-{generation}", skill.name)} {skill} {visibility} /> }
    });

    html! {
        <section id="skills" class="skills-section">
            <h2 class="section-title">{"Skills"}</h2>
            <FilterBar
                class="skills-filter"
                attribute="data-category"
                options={SKILL_FILTERS}
                active={AttrValue::from(group.active().to_string())}
                {on_select}
            />
            <div class="skills-grid">{ for items }</div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct SkillItemProps {
    skill: &'static Skill,
    visibility: ItemVisibility,
}

#[function_component(SkillItem)]
fn skill_item(props: &SkillItemProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());
    let fill = use_state_eq(|| None::<u8>);

    {
        let fill = fill.clone();
        let level = props.skill.level;
        use_effect_with(revealed, move |revealed| {
            let timeout = revealed
                .then(|| parse_level(level))
                .flatten()
                .map(|level| Timeout::new(SKILL_FILL_DELAY_MS, move || fill.set(Some(level))));
            move || drop(timeout)
        });
    }

    let visibility = props.visibility;
    let animated = revealed && visibility.visible;
    let style = format!(
        "{} animation-delay: {}ms;",
        display_style(visibility.visible),
        visibility.delay_ms
    );
    let bar_style = fill.map(|level| format!("width: {};", fill_width(level)));

    html! {
        <div
            ref={node}
            class={classes!("skill-item", animated.then_some(REVEAL_CLASS))}
            data-category={props.skill.category}
            {style}
        >
            <div class="skill-header">
                <span class="skill-name">{props.skill.name}</span>
                <span class="skill-level">{format!("{}%", props.skill.level)}</span>
            </div>
            <div class="skill-bar">
                <div class="skill-progress" data-level={props.skill.level} style={bar_style}></div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectsSectionProps {
    pub on_open: Callback<&'static str>,
}

#[function_component(ProjectsSection)]
pub fn projects_section(props: &ProjectsSectionProps) -> Html {
    let (state, on_select) = use_filter(MatchMode::Contains);
    let (group, generation) = &*state;
    let outcome = group.apply(PROJECTS.iter().map(|project| project.categories));

    let cards = PROJECTS
        .iter()
        .zip(outcome)
        .enumerate()
        .map(|(index, (project, visibility))| {
            html! {
                <ProjectCard
                    key={format!("{}-{generation}", project.id)}
                    {project}
                    {index}
                    {visibility}
                    on_open={props.on_open.clone()}
                />
            }
        });

    html! {
        <section id="projects" class="projects-section">
            <h2 class="section-title">{"Featured Projects"}</h2>
            <FilterBar
                class="projects-filter"
                attribute="data-filter"
                options={PROJECT_FILTERS}
                active={AttrValue::from(group.active().to_string())}
                {on_select}
            />
            <div class="projects-grid">{ for cards }</div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: &'static ProjectRecord,
    index: usize,
    visibility: ItemVisibility,
    on_open: Callback<&'static str>,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());
    let project = props.project;
    let visibility = props.visibility;

    let onclick = {
        let on_open = props.on_open.clone();
        let id = project.id;
        Callback::from(move |_: MouseEvent| on_open.emit(id))
    };

    let style = format!(
        "{} animation-delay: {}ms;",
        display_style(visibility.visible),
        card_stagger_delay(props.index)
    );

    html! {
        <article
            ref={node}
            class={classes!(
                "project-card",
                (revealed && visibility.visible).then_some(REVEAL_CLASS),
                visibility.visible.then_some("fade-in")
            )}
            data-category={project.categories}
            {style}
        >
            <div class="project-image">
                <svg width="64" height="64" fill="currentColor" viewBox="0 0 24 24">
                    <path d={project.icon_path} />
                </svg>
            </div>
            <div class="project-content">
                <h3 class="project-title">{project.title}</h3>
                <p class="project-description">{project.summary}</p>
                <div class="project-tags">
                    { for project.tags.iter().map(|tag| html! { <span class="tag">{*tag}</span> }) }
                </div>
                <button class="btn btn-secondary project-details" type="button" {onclick}>
                    {"View Details"}
                </button>
            </div>
        </article>
    }
}

#[function_component(ExperienceSection)]
pub fn experience_section() -> Html {
    html! {
        <section id="experience" class="experience-section">
            <h2 class="section-title">{"Experience"}</h2>
            <div class="timeline">
                { for TIMELINE.iter().map(|entry| html! { <TimelineItem {entry} /> }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct TimelineItemProps {
    entry: &'static TimelineEntry,
}

#[function_component(TimelineItem)]
fn timeline_item(props: &TimelineItemProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());
    let entry = props.entry;

    html! {
        <div ref={node} class={classes!("timeline-item", revealed.then_some(REVEAL_CLASS))}>
            <span class="timeline-date">{entry.period}</span>
            <h3>{entry.role}</h3>
            <p class="timeline-company">{entry.organisation}</p>
            <p>{entry.summary}</p>
        </div>
    }
}

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    html! {
        <section id="about" class="about-section">
            <h2 class="section-title">{"About Me"}</h2>
            <p>
                {"I'm a full-stack developer with five years of experience turning ideas into \
                  reliable products. I care about clean interfaces, fast pages and code that \
                  the next person can read."}
            </p>
        </section>
    }
}

const SUBMIT_LABEL: &str = "Send Message";

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    pub notify: Callback<(String, Severity)>,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactSectionProps) -> Html {
    let services = use_context::<Rc<Services>>();
    let form_ref = use_node_ref();
    let button = use_state(|| SubmitButton::new(SUBMIT_LABEL));

    let onsubmit = {
        let form_ref = form_ref.clone();
        let button = button.clone();
        let notify = props.notify.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let (Some(services), Some(form)) = (services.clone(), form_ref.cast::<HtmlFormElement>())
            else {
                return;
            };

            let mut sending = (*button).clone();
            if !sending.begin() {
                return;
            }
            button.set(sending.clone());

            let message = collect_message(&form);
            let delivery = Delivery::from_config(&services.config);
            let button = button.clone();
            let notify = notify.clone();

            spawn_local(async move {
                let outcome = deliver_message(&delivery, &message).await;
                match &outcome {
                    Ok(()) => {
                        services.reporter.report(
                            log::Level::Info,
                            "contact_form_sent",
                            serde_json::json!({ "simulated": matches!(delivery, Delivery::Simulated { .. }) }),
                        );
                        form.reset();
                    }
                    Err(error) => services.reporter.report(
                        log::Level::Error,
                        "contact_form_failed",
                        serde_json::json!({ "error": error.to_string() }),
                    ),
                }

                let (text, severity) = outcome_notice(&outcome);
                notify.emit((text.to_string(), severity));

                let mut restored = sending;
                restored.finish();
                button.set(restored);
            });
        })
    };

    html! {
        <section id="contact" class="contact-section">
            <h2 class="section-title">{"Get In Touch"}</h2>
            <form id="contact-form" ref={form_ref} {onsubmit}>
                <div class="form-group">
                    <label for="name">{"Name"}</label>
                    <input id="name" name="name" type="text" required=true />
                </div>
                <div class="form-group">
                    <label for="email">{"Email"}</label>
                    <input id="email" name="email" type="email" required=true />
                </div>
                <div class="form-group">
                    <label for="subject">{"Subject"}</label>
                    <input id="subject" name="subject" type="text" required=true />
                </div>
                <div class="form-group">
                    <label for="message">{"Message"}</label>
                    <textarea id="message" name="message" rows="5" required=true></textarea>
                </div>
                <button class="btn btn-primary" type="submit" disabled={button.disabled()}>
                    {button.label().to_string()}
                </button>
            </form>
        </section>
    }
}

fn collect_message(form: &HtmlFormElement) -> ContactMessage {
    let Ok(data) = FormData::new_with_form(form) else {
        return ContactMessage::default();
    };

    ContactMessage::from_fields(
        ContactMessage::FIELDS
            .iter()
            .map(|name| (*name, data.get(name).as_string().unwrap_or_default())),
    )
}
