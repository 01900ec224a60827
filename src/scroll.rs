//! Scroll-position driven UI state: navbar styling, back-to-top visibility and
//! the active navigation target.

use crate::config::SiteConfig;
use serde::Serialize;

pub const HEADER_SECTION_ID: &str = "header";

#[derive(Clone, Debug, PartialEq)]
pub struct SectionBoundary {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBoundary {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "id")]
pub enum ActiveSection {
    #[default]
    None,
    Header,
    Section(String),
}

impl ActiveSection {
    fn from_id(id: &str) -> Self {
        match id {
            "" => Self::None,
            HEADER_SECTION_ID => Self::Header,
            other => Self::Section(other.to_string()),
        }
    }

    /// Active target a navigation link points at, e.g. `#about`.
    pub fn from_href(href: &str) -> Self {
        href.strip_prefix('#').map(Self::from_id).unwrap_or_default()
    }

    pub fn matches_href(&self, href: &str) -> bool {
        match self {
            Self::None => false,
            Self::Header => href == "#header",
            Self::Section(id) => href.strip_prefix('#') == Some(id.as_str()),
        }
    }
}

/// Last section (in document order) whose top, less the lookahead, has been
/// reached. Near the top of the page the header always wins.
pub fn resolve_active_section(
    offset: f64,
    sections: &[SectionBoundary],
    config: &SiteConfig,
) -> ActiveSection {
    if offset < config.header_threshold {
        return ActiveSection::Header;
    }

    let mut current = ActiveSection::None;
    for section in sections {
        if offset >= section.top - config.section_lookahead {
            current = ActiveSection::from_id(&section.id);
        }
    }
    current
}

pub fn navbar_scrolled(offset: f64, config: &SiteConfig) -> bool {
    offset > config.navbar_scrolled_threshold
}

pub fn back_to_top_visible(offset: f64, config: &SiteConfig) -> bool {
    offset > config.back_to_top_threshold
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ScrollSnapshot {
    pub navbar_scrolled: bool,
    pub back_to_top_visible: bool,
    pub active: ActiveSection,
}

impl ScrollSnapshot {
    pub fn evaluate(offset: f64, sections: &[SectionBoundary], config: &SiteConfig) -> Self {
        Self {
            navbar_scrolled: navbar_scrolled(offset, config),
            back_to_top_visible: back_to_top_visible(offset, config),
            active: resolve_active_section(offset, sections, config),
        }
    }

    /// Highlight a link right away on click, ahead of the next scroll evaluation.
    pub fn with_active(&self, active: ActiveSection) -> Self {
        Self {
            active,
            ..self.clone()
        }
    }

    pub fn link_is_active(&self, href: &str) -> bool {
        self.active.matches_href(href)
    }
}

/// Document-top offset a smooth scroll should land on so the target clears the
/// fixed navbar.
pub fn anchor_scroll_target(element_top: f64, config: &SiteConfig) -> f64 {
    element_top - config.header_offset
}

/// In-page fragment an anchor points at; a bare `#` and external hrefs have none.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|fragment| !fragment.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<SectionBoundary> {
        vec![
            SectionBoundary::new("header", 0.0, 500.0),
            SectionBoundary::new("about", 500.0, 500.0),
            SectionBoundary::new("projects", 1000.0, 800.0),
        ]
    }

    #[test]
    fn back_to_top_follows_threshold_without_hysteresis() {
        let config = SiteConfig::default();

        for offset in [0.0, 120.0, 299.0, 300.0] {
            assert!(!back_to_top_visible(offset, &config), "offset {offset}");
        }
        for offset in [300.5, 301.0, 4_000.0] {
            assert!(back_to_top_visible(offset, &config), "offset {offset}");
        }
        assert!(!back_to_top_visible(120.0, &config));
    }

    #[test]
    fn navbar_scrolled_past_fifty() {
        let config = SiteConfig::default();

        assert!(!navbar_scrolled(50.0, &config));
        assert!(navbar_scrolled(51.0, &config));
    }

    #[test]
    fn header_wins_near_top_regardless_of_layout() {
        let config = SiteConfig::default();
        let sections = vec![SectionBoundary::new("about", -400.0, 200.0)];

        for offset in [0.0, 42.0, 99.9] {
            assert_eq!(
                resolve_active_section(offset, &sections, &config),
                ActiveSection::Header
            );
        }
    }

    #[test]
    fn last_reached_section_wins() {
        let config = SiteConfig::default();

        assert_eq!(
            resolve_active_section(550.0, &layout(), &config),
            ActiveSection::Section("about".to_string())
        );
        assert_eq!(
            resolve_active_section(900.0, &layout(), &config),
            ActiveSection::Section("projects".to_string())
        );
    }

    #[test]
    fn header_section_id_resolves_to_header() {
        let config = SiteConfig::default();

        assert_eq!(
            resolve_active_section(150.0, &layout(), &config),
            ActiveSection::Header
        );
    }

    #[test]
    fn absent_sections_highlight_nothing() {
        let config = SiteConfig::default();
        let snapshot = ScrollSnapshot::evaluate(800.0, &[], &config);

        assert_eq!(snapshot.active, ActiveSection::None);
        assert!(!snapshot.link_is_active("#about"));
        assert!(!snapshot.link_is_active("#header"));
    }

    #[test]
    fn link_matching_uses_fragment_href() {
        let config = SiteConfig::default();
        let top = ScrollSnapshot::evaluate(0.0, &layout(), &config);
        let about = ScrollSnapshot::evaluate(600.0, &layout(), &config);

        assert!(top.link_is_active("#header"));
        assert!(!top.link_is_active("#about"));
        assert!(about.link_is_active("#about"));
        assert!(!about.link_is_active("about"));
        assert!(about.navbar_scrolled);
        assert!(about.back_to_top_visible);
    }

    #[test]
    fn click_override_keeps_visibility_flags() {
        let config = SiteConfig::default();
        let snapshot = ScrollSnapshot::evaluate(600.0, &layout(), &config);
        let clicked = snapshot.with_active(ActiveSection::from_href("#projects"));

        assert!(clicked.link_is_active("#projects"));
        assert_eq!(clicked.back_to_top_visible, snapshot.back_to_top_visible);
        assert_eq!(ActiveSection::from_href("#header"), ActiveSection::Header);
        assert_eq!(ActiveSection::from_href("https://example.com"), ActiveSection::None);
    }

    #[test]
    fn snapshot_serializes_for_debug_logging() {
        let config = SiteConfig::default();
        let snapshot = ScrollSnapshot::evaluate(600.0, &layout(), &config);
        let value = serde_json::to_value(&snapshot).expect("snapshot serializes");

        assert_eq!(value["active"]["kind"], "section");
        assert_eq!(value["active"]["id"], "about");
        assert_eq!(value["back_to_top_visible"], true);
    }

    #[test]
    fn anchor_target_clears_navbar() {
        let config = SiteConfig::default();

        assert_eq!(anchor_scroll_target(1000.0, &config), 930.0);
        assert_eq!(fragment_target("#skills"), Some("skills"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target("/resume.pdf"), None);
    }
}
