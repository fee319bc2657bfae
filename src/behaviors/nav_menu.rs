use web_sys::{Document, Element};

use super::listener::Listener;
use super::query;
use crate::config::BehaviorConfig;
use crate::error::Result;

pub const ACTIVE_CLASS: &str = "active";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavMenuState {
    Closed,
    Open,
}

impl NavMenuState {
    pub fn toggled(self) -> Self {
        match self {
            NavMenuState::Closed => NavMenuState::Open,
            NavMenuState::Open => NavMenuState::Closed,
        }
    }

    fn from_marker(active: bool) -> Self {
        if active {
            NavMenuState::Open
        } else {
            NavMenuState::Closed
        }
    }
}

/// The mobile menu: a toggle button and the links panel it shows and hides.
/// Both carry the `active` class while the menu is open.
#[derive(Clone, Debug)]
pub struct NavMenu {
    toggle: Element,
    links: Element,
}

impl NavMenu {
    /// Returns `None` unless both the toggle and the links container exist.
    pub fn find(document: &Document, config: &BehaviorConfig) -> Result<Option<Self>> {
        let toggle = query(document, &config.menu_toggle_selector)?;
        let links = query(document, &config.nav_links_selector)?;

        Ok(match (toggle, links) {
            (Some(toggle), Some(links)) => Some(Self { toggle, links }),
            _ => None,
        })
    }

    pub fn state(&self) -> NavMenuState {
        NavMenuState::from_marker(self.toggle.class_list().contains(ACTIVE_CLASS))
    }

    pub fn set_state(&self, state: NavMenuState) {
        let open = state == NavMenuState::Open;
        for element in [&self.toggle, &self.links] {
            if let Err(e) = element.class_list().toggle_with_force(ACTIVE_CLASS, open) {
                log::warn!("Failed to update nav menu marker: {:?}", e);
            }
        }
    }

    pub fn toggle(&self) -> NavMenuState {
        let next = self.state().toggled();
        self.set_state(next);
        next
    }

    pub fn close(&self) {
        self.set_state(NavMenuState::Closed);
    }

    /// Flips the menu on every click of the toggle control.
    pub fn install(&self) -> Result<Listener> {
        let menu = self.clone();
        Listener::attach(&self.toggle, "click", move |_| {
            let state = menu.toggle();
            log::debug!("Nav menu now {:?}", state);
        })
    }
}
