use crate::telemetry::LogLevel;
use serde::Serialize;

const DEFAULT_NAVBAR_SCROLLED_THRESHOLD: f64 = 50.0;
const DEFAULT_HEADER_THRESHOLD: f64 = 100.0;
const DEFAULT_SECTION_LOOKAHEAD: f64 = 100.0;
const DEFAULT_BACK_TO_TOP_THRESHOLD: f64 = 300.0;
const DEFAULT_SCROLL_DEBOUNCE_MS: u32 = 10;
const DEFAULT_HEADER_OFFSET: f64 = 70.0;
const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
const DEFAULT_REVEAL_BOTTOM_MARGIN: u32 = 50;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const NAVBAR_SCROLLED_THRESHOLD_BOUNDS: (f64, f64) = (0.0, 10_000.0);
const HEADER_THRESHOLD_BOUNDS: (f64, f64) = (0.0, 10_000.0);
const SECTION_LOOKAHEAD_BOUNDS: (f64, f64) = (0.0, 10_000.0);
const BACK_TO_TOP_THRESHOLD_BOUNDS: (f64, f64) = (0.0, 100_000.0);
const SCROLL_DEBOUNCE_MS_BOUNDS: (u32, u32) = (0, 1_000);
const HEADER_OFFSET_BOUNDS: (f64, f64) = (0.0, 1_000.0);
const REVEAL_THRESHOLD_BOUNDS: (f64, f64) = (0.0, 1.0);
const REVEAL_BOTTOM_MARGIN_BOUNDS: (u32, u32) = (0, 1_000);

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SiteConfig {
    pub navbar_scrolled_threshold: f64,
    pub header_threshold: f64,
    pub section_lookahead: f64,
    pub back_to_top_threshold: f64,
    pub scroll_debounce_ms: u32,
    pub header_offset: f64,
    pub reveal_threshold: f64,
    pub reveal_bottom_margin: u32,
    pub log_level: LogLevel,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            navbar_scrolled_threshold: DEFAULT_NAVBAR_SCROLLED_THRESHOLD,
            header_threshold: DEFAULT_HEADER_THRESHOLD,
            section_lookahead: DEFAULT_SECTION_LOOKAHEAD,
            back_to_top_threshold: DEFAULT_BACK_TO_TOP_THRESHOLD,
            scroll_debounce_ms: DEFAULT_SCROLL_DEBOUNCE_MS,
            header_offset: DEFAULT_HEADER_OFFSET,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            reveal_bottom_margin: DEFAULT_REVEAL_BOTTOM_MARGIN,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl SiteConfig {
    /// Builds a config from named overrides (on the page these are `data-*`
    /// attributes of the root element). Anything missing, unparsable or out of
    /// bounds falls back to the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            navbar_scrolled_threshold: parse_f64_with_bounds(
                &lookup,
                "navbar-threshold",
                DEFAULT_NAVBAR_SCROLLED_THRESHOLD,
                NAVBAR_SCROLLED_THRESHOLD_BOUNDS,
            ),
            header_threshold: parse_f64_with_bounds(
                &lookup,
                "header-threshold",
                DEFAULT_HEADER_THRESHOLD,
                HEADER_THRESHOLD_BOUNDS,
            ),
            section_lookahead: parse_f64_with_bounds(
                &lookup,
                "section-lookahead",
                DEFAULT_SECTION_LOOKAHEAD,
                SECTION_LOOKAHEAD_BOUNDS,
            ),
            back_to_top_threshold: parse_f64_with_bounds(
                &lookup,
                "back-to-top-threshold",
                DEFAULT_BACK_TO_TOP_THRESHOLD,
                BACK_TO_TOP_THRESHOLD_BOUNDS,
            ),
            scroll_debounce_ms: parse_u32_with_bounds(
                &lookup,
                "debounce-ms",
                DEFAULT_SCROLL_DEBOUNCE_MS,
                SCROLL_DEBOUNCE_MS_BOUNDS,
            ),
            header_offset: parse_f64_with_bounds(
                &lookup,
                "header-offset",
                DEFAULT_HEADER_OFFSET,
                HEADER_OFFSET_BOUNDS,
            ),
            reveal_threshold: parse_f64_with_bounds(
                &lookup,
                "reveal-threshold",
                DEFAULT_REVEAL_THRESHOLD,
                REVEAL_THRESHOLD_BOUNDS,
            ),
            reveal_bottom_margin: parse_u32_with_bounds(
                &lookup,
                "reveal-bottom-margin",
                DEFAULT_REVEAL_BOTTOM_MARGIN,
                REVEAL_BOTTOM_MARGIN_BOUNDS,
            ),
            log_level: parse_log_level(&lookup, "log-level", DEFAULT_LOG_LEVEL),
        }
    }

    pub fn reveal_root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.reveal_bottom_margin)
    }
}

fn parse_non_empty_string<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_f64_with_bounds<F>(lookup: &F, name: &str, default: f64, bounds: (f64, f64)) -> f64
where
    F: Fn(&str) -> Option<String>,
{
    parse_non_empty_string(lookup, name)
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|value| value.is_finite() && (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_u32_with_bounds<F>(lookup: &F, name: &str, default: u32, bounds: (u32, u32)) -> u32
where
    F: Fn(&str) -> Option<String>,
{
    parse_non_empty_string(lookup, name)
        .and_then(|value| value.parse::<u32>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_log_level<F>(lookup: &F, name: &str, default: LogLevel) -> LogLevel
where
    F: Fn(&str) -> Option<String>,
{
    parse_non_empty_string(lookup, name)
        .and_then(|value| LogLevel::from_str(&value.to_ascii_lowercase()))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |name: &str| values.get(name).cloned()
    }

    #[test]
    fn empty_lookup_yields_defaults() {
        let config = SiteConfig::from_lookup(|_| None);

        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.scroll_debounce_ms, 10);
        assert_eq!(config.header_offset, 70.0);
    }

    #[test]
    fn in_bounds_overrides_are_applied() {
        let config = SiteConfig::from_lookup(lookup_from(&[
            ("debounce-ms", " 25 "),
            ("back-to-top-threshold", "450"),
            ("log-level", "DEBUG"),
        ]));

        assert_eq!(config.scroll_debounce_ms, 25);
        assert_eq!(config.back_to_top_threshold, 450.0);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn out_of_bounds_or_garbage_overrides_fall_back() {
        let config = SiteConfig::from_lookup(lookup_from(&[
            ("debounce-ms", "5000"),
            ("reveal-threshold", "1.5"),
            ("header-offset", "tall"),
            ("navbar-threshold", "NaN"),
            ("log-level", "verbose"),
        ]));

        assert_eq!(config.scroll_debounce_ms, DEFAULT_SCROLL_DEBOUNCE_MS);
        assert_eq!(config.reveal_threshold, DEFAULT_REVEAL_THRESHOLD);
        assert_eq!(config.header_offset, DEFAULT_HEADER_OFFSET);
        assert_eq!(config.navbar_scrolled_threshold, DEFAULT_NAVBAR_SCROLLED_THRESHOLD);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn reveal_root_margin_biases_bottom_edge() {
        let config = SiteConfig::default();

        assert_eq!(config.reveal_root_margin(), "0px 0px -50px 0px");
    }
}
