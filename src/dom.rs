//! Thin wrappers over the browser APIs the page behavior needs.

use crate::config::SiteConfig;
use crate::debounce::TimerHost;
use crate::error::{Result, SiteError};
use crate::overlay::Thumbnail;
use crate::scroll::{anchor_scroll_target, fragment_target, SectionBoundary};
use js_sys::{Function, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Document, Element, Event, EventTarget, HtmlElement, HtmlImageElement, ScrollBehavior,
    ScrollToOptions, Window,
};

const SECTION_SELECTOR: &str = ".section, .hero, .footer";

pub fn browser_window() -> Result<Window> {
    window().ok_or(SiteError::MissingWindow)
}

pub fn browser_document() -> Result<Document> {
    browser_window()?.document().ok_or(SiteError::MissingDocument)
}

pub fn load_config() -> SiteConfig {
    let root = browser_document()
        .ok()
        .and_then(|document| document.document_element());

    SiteConfig::from_lookup(|name| {
        root.as_ref()
            .and_then(|element| element.get_attribute(&format!("data-{name}")))
    })
}

pub fn scroll_offset(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Measures every navigable block in document order from the live layout.
pub fn measure_sections(document: &Document) -> Vec<SectionBoundary> {
    let Ok(nodes) = document.query_selector_all(SECTION_SELECTOR) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|element| {
            SectionBoundary::new(
                element.id(),
                f64::from(element.offset_top()),
                f64::from(element.client_height()),
            )
        })
        .collect()
}

pub fn smooth_scroll_to(top: f64) -> Result<()> {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    browser_window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Smooth-scrolls so the fragment's element sits just below the navbar.
/// Returns false when the href has no in-page target.
pub fn scroll_to_fragment(href: &str, config: &SiteConfig) -> Result<bool> {
    let Some(fragment) = fragment_target(href) else {
        return Ok(false);
    };
    let Some(target) = browser_document()?
        .get_element_by_id(fragment)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(false);
    };

    smooth_scroll_to(anchor_scroll_target(f64::from(target.offset_top()), config))?;
    Ok(true)
}

pub fn supports_smooth_scroll() -> bool {
    let global: JsValue = js_sys::global().into();
    let Ok(css) = Reflect::get(&global, &JsValue::from_str("CSS")) else {
        return false;
    };
    let Ok(supports) = Reflect::get(&css, &JsValue::from_str("supports")) else {
        return false;
    };
    let Some(supports) = supports.dyn_ref::<Function>() else {
        return false;
    };

    supports
        .call2(
            &css,
            &JsValue::from_str("scroll-behavior"),
            &JsValue::from_str("smooth"),
        )
        .ok()
        .and_then(|value| value.as_bool())
        .unwrap_or(false)
}

pub fn set_body_overflow(value: &str) -> Result<()> {
    let body = browser_document()?
        .body()
        .ok_or_else(|| SiteError::MissingElement("body".to_string()))?;
    body.style().set_property("overflow", value)?;
    Ok(())
}

pub fn thumbnail_from_image(image: &HtmlImageElement) -> Thumbnail {
    Thumbnail {
        src: image.src(),
        full_image: image.get_attribute("data-full-image"),
        alt: image.get_attribute("alt"),
    }
}

pub fn event_element(event: &Event) -> Option<Element> {
    event.target().and_then(|target| target.dyn_into::<Element>().ok())
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

/// Listener that detaches itself when dropped.
pub struct EventListener {
    target: EventTarget,
    event_type: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new<F>(target: &EventTarget, event_type: &'static str, handler: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref())?;

        Ok(Self {
            target: target.clone(),
            event_type,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event_type, self.callback.as_ref().unchecked_ref());
    }
}

/// `setTimeout` host for the debouncer; every timer re-arms the same tick closure.
pub struct WindowTimer {
    window: Window,
    tick: Option<Closure<dyn FnMut()>>,
}

impl WindowTimer {
    pub fn new(window: Window) -> Self {
        Self { window, tick: None }
    }

    pub fn set_tick(&mut self, tick: Closure<dyn FnMut()>) {
        self.tick = Some(tick);
    }
}

impl TimerHost for WindowTimer {
    type Handle = i32;

    fn schedule(&mut self, delay_ms: u32) -> Option<i32> {
        let tick = self.tick.as_ref()?;
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(tick.as_ref().unchecked_ref(), delay)
            .ok()
    }

    fn cancel(&mut self, handle: i32) {
        self.window.clear_timeout_with_handle(handle);
    }
}
