use log::Level;
use web_sys::ScrollBehavior;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Selectors and tuning values for the landing page behaviors.
#[derive(Clone, Debug, PartialEq)]
pub struct BehaviorConfig {
    pub menu_toggle_selector: String,
    pub nav_links_selector: String,
    pub anchor_selector: String,
    pub subtitle_selector: String,
    pub card_selectors: Vec<String>,
    /// Space kept free above a scrolled-to section for the fixed header.
    pub header_offset_px: f64,
    pub typing_interval_ms: u32,
    /// Cards reveal once their top is above `innerHeight / reveal_divisor`.
    pub reveal_divisor: f64,
    pub hidden_offset_px: f64,
    pub card_transition: String,
    pub scroll_behavior: ScrollBehavior,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            menu_toggle_selector: ".menu-toggle".to_string(),
            nav_links_selector: ".nav-links".to_string(),
            anchor_selector: "a[href^=\"#\"]".to_string(),
            subtitle_selector: ".subtitle".to_string(),
            card_selectors: vec![
                ".feature-card".to_string(),
                ".step-card".to_string(),
                ".team-member".to_string(),
            ],
            header_offset_px: 80.0,
            typing_interval_ms: 50,
            reveal_divisor: 1.3,
            hidden_offset_px: 20.0,
            card_transition: "all 0.6s ease".to_string(),
            scroll_behavior: ScrollBehavior::Smooth,
        }
    }
}

impl BehaviorConfig {
    pub fn with_card_selectors<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.card_selectors = selectors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_scroll_behavior(mut self, behavior: ScrollBehavior) -> Self {
        self.scroll_behavior = behavior;
        self
    }

    pub fn with_typing_interval(mut self, millis: u32) -> Self {
        self.typing_interval_ms = millis;
        self
    }

    /// All card categories joined into one selector list.
    pub fn card_selector(&self) -> String {
        self.card_selectors.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_landing_page_markup() {
        let config = BehaviorConfig::default();
        assert_eq!(config.card_selector(), ".feature-card, .step-card, .team-member");
        assert_eq!(config.header_offset_px, 80.0);
        assert_eq!(config.typing_interval_ms, 50);
        assert_eq!(config.reveal_divisor, 1.3);
        assert_eq!(config.card_transition, "all 0.6s ease");
        assert_eq!(config.scroll_behavior, ScrollBehavior::Smooth);
    }

    #[test]
    fn card_selectors_can_be_narrowed() {
        let config = BehaviorConfig::default().with_card_selectors([".pricing-card"]);
        assert_eq!(config.card_selector(), ".pricing-card");
        assert_eq!(config.menu_toggle_selector, ".menu-toggle");
    }
}
