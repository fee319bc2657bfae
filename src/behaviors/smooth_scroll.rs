use std::borrow::Cow;

use web_sys::{Document, Element, Event, ScrollBehavior, ScrollToOptions, Window};

use super::listener::Listener;
use super::nav_menu::NavMenu;
use super::query_all;
use crate::config::BehaviorConfig;
use crate::error::Result;

/// Where an in-page link points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FragmentTarget<'a> {
    /// A bare `#`, which goes nowhere.
    Empty,
    Id(Cow<'a, str>),
}

impl<'a> FragmentTarget<'a> {
    /// Parses an `href` attribute. Returns `None` for links that leave the page.
    pub fn parse(href: &'a str) -> Option<Self> {
        let fragment = href.strip_prefix('#')?;
        if fragment.is_empty() {
            return Some(FragmentTarget::Empty);
        }

        let id = urlencoding::decode(fragment).unwrap_or(Cow::Borrowed(fragment));
        Some(FragmentTarget::Id(id))
    }
}

/// Document-relative scroll position that puts `element_top` right below the
/// fixed header.
pub fn scroll_destination(element_top: f64, scroll_y: f64, header_offset: f64) -> f64 {
    (element_top + scroll_y - header_offset).max(0.0)
}

#[derive(Clone)]
struct AnchorScroller {
    window: Window,
    document: Document,
    menu: Option<NavMenu>,
    header_offset: f64,
    behavior: ScrollBehavior,
}

impl AnchorScroller {
    fn handle_click(&self, anchor: &Element, event: &Event) {
        event.prevent_default();

        let Some(href) = anchor.get_attribute("href") else {
            return;
        };
        let id = match FragmentTarget::parse(&href) {
            Some(FragmentTarget::Id(id)) => id,
            _ => return,
        };
        let Some(target) = self.document.get_element_by_id(&id) else {
            log::debug!("No element with id '{}', ignoring click", id);
            return;
        };

        let scroll_y = self.window.scroll_y().unwrap_or(0.0);
        let top = scroll_destination(
            target.get_bounding_client_rect().top(),
            scroll_y,
            self.header_offset,
        );

        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(self.behavior);
        self.window.scroll_to_with_scroll_to_options(&options);

        if let Some(menu) = &self.menu {
            menu.close();
        }
    }
}

/// Attaches a click handler to every in-page anchor present in the document.
pub fn install(
    window: &Window,
    document: &Document,
    menu: Option<NavMenu>,
    config: &BehaviorConfig,
) -> Result<Vec<Listener>> {
    let scroller = AnchorScroller {
        window: window.clone(),
        document: document.clone(),
        menu,
        header_offset: config.header_offset_px,
        behavior: config.scroll_behavior,
    };

    let anchors = query_all(document, &config.anchor_selector)?;
    log::debug!("Wiring smooth scroll for {} anchors", anchors.len());

    anchors
        .into_iter()
        .map(|anchor| {
            let scroller = scroller.clone();
            let element: Element = anchor.clone().into();
            Listener::attach(&anchor, "click", move |event| {
                scroller.handle_click(&element, &event);
            })
        })
        .collect()
}
