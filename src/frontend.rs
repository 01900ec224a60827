use crate::avatar::AvatarImage;
use crate::config::SiteConfig;
use crate::content::{Certificate, Project, CERTIFICATES, NAV_ITEMS, PROFILE, PROJECTS, SKILLS};
use crate::debounce::Debouncer;
use crate::dom::{self, EventListener, WindowTimer};
use crate::error::{Result, SiteError};
use crate::menu::MobileMenu;
use crate::overlay::{ImagePreview, Thumbnail};
use crate::reveal::{stagger_delay, RevealLatch};
use crate::scroll::{ActiveSection, ScrollSnapshot};
use crate::telemetry::{log_event, LogLevel};
use js_sys::Array;
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Element, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, MouseEvent, Node,
};
use yew::prelude::*;

const REVEAL_SELECTOR: &str = ".section";
const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
const PROJECT_LINK_SELECTOR: &str = ".project-link";

fn log(config: &SiteConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    log_event(config.log_level, level, event, fields);
}

fn log_failure(config: &SiteConfig, behavior: &str, error: &SiteError) {
    log(
        config,
        LogLevel::Warn,
        "listener_failed",
        json!({ "behavior": behavior, "kind": error.kind(), "error": error.to_string() }),
    );
}

fn log_skipped(config: &SiteConfig, behavior: &str, missing: &str) {
    log(
        config,
        LogLevel::Warn,
        "behavior_skipped",
        json!({ "behavior": behavior, "missing": missing }),
    );
}

pub enum ScrollAction {
    Sync(ScrollSnapshot),
    Activate(ActiveSection),
}

impl Reducible for ScrollSnapshot {
    type Action = ScrollAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            ScrollAction::Sync(snapshot) => snapshot,
            ScrollAction::Activate(active) => self.with_active(active),
        };
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

impl Reducible for RevealLatch {
    type Action = String;

    fn reduce(self: Rc<Self>, id: Self::Action) -> Rc<Self> {
        if self.is_revealed(&id) {
            return self;
        }
        let mut next = (*self).clone();
        next.observe(&id, true);
        Rc::new(next)
    }
}

pub enum PreviewAction {
    Open(Thumbnail),
    Close,
    Key(String),
}

impl Reducible for ImagePreview {
    type Action = PreviewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            PreviewAction::Open(thumbnail) => next.open(&thumbnail),
            PreviewAction::Close => next.close(),
            PreviewAction::Key(key) => {
                if !next.handle_key(&key) {
                    return self;
                }
            }
        }
        Rc::new(next)
    }
}

pub enum MenuAction {
    Toggle,
    Close,
    DocumentClick { inside_toggle: bool, inside_menu: bool },
}

impl Reducible for MobileMenu {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            MenuAction::Toggle => next.toggle(),
            MenuAction::Close => next.close(),
            MenuAction::DocumentClick {
                inside_toggle,
                inside_menu,
            } => next.handle_document_click(inside_toggle, inside_menu),
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

pub enum AvatarAction {
    LoadError,
}

impl Reducible for AvatarImage {
    type Action = AvatarAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AvatarAction::LoadError => {
                let mut next = (*self).clone();
                if next.handle_load_error() {
                    Rc::new(next)
                } else {
                    self
                }
            }
        }
    }
}

fn sync_scroll_state(config: &SiteConfig, dispatcher: &UseReducerDispatcher<ScrollSnapshot>) {
    let Some(window) = window() else {
        return;
    };
    let offset = dom::scroll_offset(&window);
    let sections = window
        .document()
        .map(|document| dom::measure_sections(&document))
        .unwrap_or_default();
    let snapshot = ScrollSnapshot::evaluate(offset, &sections, config);

    log(
        config,
        LogLevel::Debug,
        "scroll_synced",
        json!({ "offset": offset, "sections": sections.len(), "snapshot": &snapshot }),
    );
    dispatcher.dispatch(ScrollAction::Sync(snapshot));
}

/// Single debounced scroll path feeding navbar, back-to-top and active link state.
struct ScrollSync {
    _debouncer: Rc<RefCell<Debouncer<WindowTimer>>>,
    _listener: EventListener,
}

impl ScrollSync {
    fn install(
        config: Rc<SiteConfig>,
        dispatcher: UseReducerDispatcher<ScrollSnapshot>,
    ) -> Result<Self> {
        let window = dom::browser_window()?;
        let debouncer = Rc::new(RefCell::new(Debouncer::new(
            WindowTimer::new(window.clone()),
            config.scroll_debounce_ms,
        )));

        let tick = {
            let weak = Rc::downgrade(&debouncer);
            let config = config.clone();
            let dispatcher = dispatcher.clone();
            Closure::wrap(Box::new(move || {
                let Some(debouncer) = weak.upgrade() else {
                    return;
                };
                let should_run = debouncer.borrow_mut().fire();
                if should_run {
                    sync_scroll_state(&config, &dispatcher);
                }
            }) as Box<dyn FnMut()>)
        };
        debouncer.borrow_mut().host_mut().set_tick(tick);

        let listener = {
            let debouncer = debouncer.clone();
            EventListener::new(&window, "scroll", move |_| {
                debouncer.borrow_mut().request();
            })?
        };

        sync_scroll_state(&config, &dispatcher);
        log(
            &config,
            LogLevel::Debug,
            "scroll_sync_installed",
            json!({ "debounce_ms": config.scroll_debounce_ms }),
        );

        Ok(Self {
            _debouncer: debouncer,
            _listener: listener,
        })
    }
}

/// Latches `.section` elements visible the first time they intersect.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    fn install(config: &SiteConfig, dispatcher: UseReducerDispatcher<RevealLatch>) -> Result<Self> {
        let document = dom::browser_document()?;

        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                dispatcher.dispatch(target.id());
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
        options.set_root_margin(&config.reveal_root_margin());
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        let sections = document.query_selector_all(REVEAL_SELECTOR)?;
        for index in 0..sections.length() {
            if let Some(section) = sections
                .get(index)
                .and_then(|node| node.dyn_into::<Element>().ok())
            {
                observer.observe(&section);
            }
        }

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

fn node_contains(container: &NodeRef, target: Option<&Node>) -> bool {
    container
        .get()
        .map(|node| node.contains(target))
        .unwrap_or(false)
}

fn install_outside_click(
    toggle_ref: NodeRef,
    menu_ref: NodeRef,
    dispatcher: UseReducerDispatcher<MobileMenu>,
) -> Result<EventListener> {
    let document = dom::browser_document()?;
    EventListener::new(&document, "click", move |event| {
        let target = event
            .target()
            .and_then(|target| target.dyn_into::<Node>().ok());
        dispatcher.dispatch(MenuAction::DocumentClick {
            inside_toggle: node_contains(&toggle_ref, target.as_ref()),
            inside_menu: node_contains(&menu_ref, target.as_ref()),
        });
    })
}

fn install_escape_listener(dispatcher: UseReducerDispatcher<ImagePreview>) -> Result<EventListener> {
    let document = dom::browser_document()?;
    EventListener::new(&document, "keydown", move |event| {
        if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
            dispatcher.dispatch(PreviewAction::Key(event.key()));
        }
    })
}

/// Covers every hash anchor on the page when the browser cannot smooth-scroll
/// natively. Nav links are also handled by their own click callback.
fn install_smooth_scroll_fallback(config: Rc<SiteConfig>) -> Result<EventListener> {
    let document = dom::browser_document()?;
    EventListener::new(&document, "click", move |event| {
        let Some(anchor) = dom::event_element(&event)
            .and_then(|element| element.closest(ANCHOR_SELECTOR).ok().flatten())
        else {
            return;
        };
        let Some(href) = anchor.get_attribute("href") else {
            return;
        };
        if href == "#" {
            return;
        }

        event.prevent_default();
        if let Err(error) = dom::scroll_to_fragment(&href, &config) {
            log_failure(&config, "smooth_scroll_fallback", &error);
        }
    })
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    index: usize,
    title: AttrValue,
    summary: AttrValue,
    tags: Vec<AttrValue>,
    link: AttrValue,
    config: Rc<SiteConfig>,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let onclick = {
        let title = props.title.clone();
        let config = props.config.clone();
        Callback::from(move |event: MouseEvent| {
            let on_link = dom::event_element(&event)
                .and_then(|element| element.closest(PROJECT_LINK_SELECTOR).ok().flatten())
                .is_some();
            if on_link {
                return;
            }
            log(
                &config,
                LogLevel::Info,
                "project_viewed",
                json!({ "title": title.as_str() }),
            );
        })
    };

    html! {
        <article
            class="project-item"
            style={format!("transition-delay: {}", stagger_delay(props.index))}
            onclick={onclick}
        >
            <h3 class="project-title">{props.title.clone()}</h3>
            <p class="project-summary">{props.summary.clone()}</p>
            <ul class="project-tags">
                { for props.tags.iter().map(|tag| html! { <li class="tag">{tag.clone()}</li> }) }
            </ul>
            <a class="project-link" href={props.link.clone()} target="_blank" rel="noopener noreferrer">
                {"View code"}
            </a>
        </article>
    }
}

fn project_props(index: usize, project: &Project, config: &Rc<SiteConfig>) -> ProjectCardProps {
    ProjectCardProps {
        index,
        title: AttrValue::from(project.title),
        summary: AttrValue::from(project.summary),
        tags: project.tags.iter().copied().map(AttrValue::from).collect(),
        link: AttrValue::from(project.link),
        config: config.clone(),
    }
}

fn certificate_thumbnail(certificate: &Certificate, onclick: Callback<MouseEvent>) -> Html {
    html! {
        <img
            class="certificate-thumbnail"
            src={certificate.thumbnail}
            data-full-image={certificate.full_image}
            alt={certificate.alt}
            loading="lazy"
            onclick={onclick}
        />
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| dom::load_config());
    let scroll = use_reducer(ScrollSnapshot::default);
    let revealed = use_reducer(RevealLatch::new);
    let preview = use_reducer(ImagePreview::closed);
    let menu = use_reducer(MobileMenu::default);
    let avatar = use_reducer(|| AvatarImage::new(PROFILE.avatar, PROFILE.name));
    let toggle_ref = use_node_ref();
    let menu_ref = use_node_ref();
    let modal_ref = use_node_ref();

    {
        let config = config.clone();
        use_effect_with((), move |_| {
            log(
                &config,
                LogLevel::Info,
                "site_started",
                json!({
                    "message": "Welcome to my portfolio! Suggestions and questions are always welcome.",
                    "config": &*config,
                }),
            );
            || ()
        });
    }

    {
        let config = config.clone();
        let dispatcher = scroll.dispatcher();
        use_effect_with((), move |_| {
            let sync = match ScrollSync::install(config.clone(), dispatcher) {
                Ok(sync) => Some(sync),
                Err(error) => {
                    log_failure(&config, "scroll_sync", &error);
                    None
                }
            };
            move || drop(sync)
        });
    }

    {
        let config = config.clone();
        let dispatcher = revealed.dispatcher();
        use_effect_with((), move |_| {
            let observer = match RevealObserver::install(&config, dispatcher) {
                Ok(observer) => Some(observer),
                Err(error) => {
                    log_failure(&config, "section_reveal", &error);
                    None
                }
            };
            move || drop(observer)
        });
    }

    {
        let config = config.clone();
        let dispatcher = menu.dispatcher();
        let toggle_ref = toggle_ref.clone();
        let menu_ref = menu_ref.clone();
        use_effect_with((), move |_| {
            let listener = if toggle_ref.get().is_none() {
                log_skipped(&config, "mobile_menu", "#navToggle");
                None
            } else if menu_ref.get().is_none() {
                log_skipped(&config, "mobile_menu", "#navMenu");
                None
            } else {
                match install_outside_click(toggle_ref, menu_ref, dispatcher) {
                    Ok(listener) => Some(listener),
                    Err(error) => {
                        log_failure(&config, "mobile_menu", &error);
                        None
                    }
                }
            };
            move || drop(listener)
        });
    }

    {
        let config = config.clone();
        let dispatcher = preview.dispatcher();
        let modal_ref = modal_ref.clone();
        use_effect_with((), move |_| {
            let listener = if modal_ref.get().is_none() {
                log_skipped(&config, "image_modal", "#imageModal");
                None
            } else {
                match install_escape_listener(dispatcher) {
                    Ok(listener) => Some(listener),
                    Err(error) => {
                        log_failure(&config, "image_modal", &error);
                        None
                    }
                }
            };
            move || drop(listener)
        });
    }

    {
        let config = config.clone();
        use_effect_with((), move |_| {
            let listener = if dom::supports_smooth_scroll() {
                None
            } else {
                match install_smooth_scroll_fallback(config.clone()) {
                    Ok(listener) => {
                        log(&config, LogLevel::Debug, "smooth_scroll_fallback_installed", json!({}));
                        Some(listener)
                    }
                    Err(error) => {
                        log_failure(&config, "smooth_scroll_fallback", &error);
                        None
                    }
                }
            };
            move || drop(listener)
        });
    }

    {
        let config = config.clone();
        let overflow = preview.body_overflow();
        use_effect_with(overflow, move |overflow| {
            if let Err(error) = dom::set_body_overflow(overflow) {
                log_failure(&config, "scroll_lock", &error);
            }
            || ()
        });
    }

    let on_nav_click = |href: &'static str| {
        let config = config.clone();
        let scroll = scroll.dispatcher();
        let menu = menu.dispatcher();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            match dom::scroll_to_fragment(href, &config) {
                Ok(true) => {
                    scroll.dispatch(ScrollAction::Activate(ActiveSection::from_href(href)));
                    menu.dispatch(MenuAction::Close);
                }
                Ok(false) => {}
                Err(error) => log_failure(&config, "smooth_scroll", &error),
            }
        })
    };

    let on_toggle = {
        let menu = menu.dispatcher();
        Callback::from(move |_: MouseEvent| menu.dispatch(MenuAction::Toggle))
    };

    let on_back_to_top = {
        let config = config.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(error) = dom::smooth_scroll_to(0.0) {
                log_failure(&config, "back_to_top", &error);
            }
        })
    };

    let on_thumbnail = {
        let preview = preview.dispatcher();
        Callback::from(move |event: MouseEvent| {
            if let Some(image) = event.target_dyn_into::<HtmlImageElement>() {
                preview.dispatch(PreviewAction::Open(dom::thumbnail_from_image(&image)));
            }
        })
    };

    let on_modal_click = {
        let preview = preview.dispatcher();
        let modal_ref = modal_ref.clone();
        Callback::from(move |event: MouseEvent| {
            let target = event
                .target()
                .and_then(|target| target.dyn_into::<Node>().ok());
            let on_backdrop = modal_ref
                .get()
                .map(|modal| modal.is_same_node(target.as_ref()))
                .unwrap_or(false);
            if on_backdrop {
                preview.dispatch(PreviewAction::Close);
            }
        })
    };

    let on_modal_close = {
        let preview = preview.dispatcher();
        Callback::from(move |_: MouseEvent| preview.dispatch(PreviewAction::Close))
    };

    let on_avatar_error = {
        let config = config.clone();
        let avatar_dispatcher = avatar.dispatcher();
        let already_fell_back = avatar.fell_back();
        Callback::from(move |_: Event| {
            if already_fell_back {
                return;
            }
            log(&config, LogLevel::Warn, "avatar_fallback_applied", json!({}));
            avatar_dispatcher.dispatch(AvatarAction::LoadError);
        })
    };

    let section_class = |id: &str| classes!("section", revealed.is_revealed(id).then_some("visible"));
    let modal_image = (!preview.image().is_empty()).then(|| AttrValue::from(preview.image().to_string()));

    html! {
        <>
            <nav class={classes!("navbar", scroll.navbar_scrolled.then_some("scrolled"))}>
                <div class="nav-container">
                    <a class="nav-logo" href="#header" onclick={on_nav_click("#header")}>{PROFILE.name}</a>
                    <ul id="navMenu" ref={menu_ref} class={classes!("nav-menu", menu.is_open().then_some("active"))}>
                        { for NAV_ITEMS.iter().map(|item| html! {
                            <li class="nav-item">
                                <a
                                    class={classes!("nav-link", scroll.link_is_active(item.href).then_some("active"))}
                                    href={item.href}
                                    onclick={on_nav_click(item.href)}
                                >
                                    {item.label}
                                </a>
                            </li>
                        }) }
                    </ul>
                    <button
                        id="navToggle"
                        ref={toggle_ref}
                        class={classes!("nav-toggle", menu.is_open().then_some("active"))}
                        type="button"
                        aria-label="Toggle navigation"
                        aria-expanded={menu.is_open().to_string()}
                        onclick={on_toggle}
                    >
                        <span class="bar"></span>
                        <span class="bar"></span>
                        <span class="bar"></span>
                    </button>
                </div>
            </nav>

            <header class="hero" id="header">
                <img
                    id="avatar"
                    class="avatar"
                    src={avatar.src().to_string()}
                    alt={avatar.alt().to_string()}
                    onerror={on_avatar_error}
                />
                <h1 class="hero-name">{PROFILE.name}</h1>
                <p class="hero-tagline">{PROFILE.tagline}</p>
            </header>

            <main>
                <section id="about" class={section_class("about")}>
                    <h2 class="section-title">{"About"}</h2>
                    { for PROFILE.about.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                </section>

                <section id="skills" class={section_class("skills")}>
                    <h2 class="section-title">{"Skills"}</h2>
                    <ul class="skills-grid">
                        { for SKILLS.iter().enumerate().map(|(index, skill)| html! {
                            <li class="skill-item" style={format!("transition-delay: {}", stagger_delay(index))}>
                                {*skill}
                            </li>
                        }) }
                    </ul>
                </section>

                <section id="projects" class={section_class("projects")}>
                    <h2 class="section-title">{"Projects"}</h2>
                    <div class="projects-grid">
                        { for PROJECTS.iter().enumerate().map(|(index, project)| {
                            let props = project_props(index, project, &config);
                            html! { <ProjectCard ..props /> }
                        }) }
                    </div>
                </section>

                <section id="certificates" class={section_class("certificates")}>
                    <h2 class="section-title">{"Certificates"}</h2>
                    <div class="certificates-grid">
                        { for CERTIFICATES.iter().map(|certificate| certificate_thumbnail(certificate, on_thumbnail.clone())) }
                    </div>
                </section>
            </main>

            <footer class="footer" id="contact">
                <p>
                    <a href={format!("mailto:{}", PROFILE.email)}>{PROFILE.email}</a>
                    {" · "}
                    <a href={PROFILE.github} target="_blank" rel="noopener noreferrer">{"GitHub"}</a>
                    {" · "}
                    <a href={PROFILE.linkedin} target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
                </p>
                <p class="copyright">
                    {"© "}<span id="currentYear">{dom::current_year().to_string()}</span>{" "}{PROFILE.name}
                </p>
            </footer>

            <button
                id="backToTop"
                class={classes!("back-to-top", scroll.back_to_top_visible.then_some("visible"))}
                type="button"
                aria-label="Back to top"
                onclick={on_back_to_top}
            >
                {"↑"}
            </button>

            <div
                id="imageModal"
                ref={modal_ref}
                class={classes!("modal", preview.is_open().then_some("active"))}
                onclick={on_modal_click}
            >
                <span class="modal-close" onclick={on_modal_close}>{"×"}</span>
                <img id="modalImage" class="modal-content" src={modal_image} alt={preview.caption().to_string()} />
                <div id="modalCaption" class="modal-caption">{preview.caption().to_string()}</div>
            </div>
        </>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();

    match window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
    {
        Some(root) => {
            yew::Renderer::<App>::with_root(root).render();
        }
        None => {
            yew::Renderer::<App>::new().render();
        }
    }
}
