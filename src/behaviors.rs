//! Landing page behaviors wired straight onto the DOM.
//!
//! `PageBehaviors::install` attaches everything in one go and hands back an
//! owner; dropping the owner removes every listener and stops the typing
//! timer. Each behavior is independent, so a page missing the menu still
//! gets its subtitle typed and its cards revealed.

pub mod card_reveal;
pub mod listener;
pub mod nav_menu;
pub mod smooth_scroll;
pub mod typewriter;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::config::BehaviorConfig;
use crate::error::{BehaviorError, Result};
use card_reveal::CardReveal;
use listener::Listener;
use nav_menu::NavMenu;
use typewriter::TypingRun;

pub(crate) fn query(document: &Document, selector: &str) -> Result<Option<Element>> {
    document
        .query_selector(selector)
        .map_err(|e| BehaviorError::selector(selector, e))
}

pub(crate) fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|e| BehaviorError::selector(selector, e))?;

    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

fn wired<T>(behavior: &str, result: Result<T>) -> Option<T> {
    result
        .map_err(|e| log::warn!("Skipping {}: {}", behavior, e))
        .ok()
}

pub fn window_and_document() -> Result<(Window, Document)> {
    let window = web_sys::window().ok_or(BehaviorError::NoWindow)?;
    let document = window.document().ok_or(BehaviorError::NoDocument)?;
    Ok((window, document))
}

/// Owner of every listener and timer the landing page behaviors use.
pub struct PageBehaviors {
    menu: Option<NavMenu>,
    listeners: Vec<Listener>,
    typing: Option<TypingRun>,
}

impl PageBehaviors {
    /// Wires every behavior on its own. A behavior that fails to install is
    /// logged and left out; the others still run.
    pub fn install(window: &Window, document: &Document, config: &BehaviorConfig) -> Self {
        let mut listeners = Vec::new();

        let menu = wired("menu toggle", NavMenu::find(document, config)).flatten();
        match &menu {
            Some(menu) => listeners.extend(wired("menu toggle", menu.install())),
            None => log::debug!("Menu toggle or nav links missing, skipping menu toggle"),
        }

        if let Some(anchors) = wired(
            "smooth scroll",
            smooth_scroll::install(window, document, menu.clone(), config),
        ) {
            listeners.extend(anchors);
        }

        let typing = wired("typewriter", typewriter::install(document, config)).flatten();

        if let Some(cards) = wired("card reveal", CardReveal::prepare(window, document, config)) {
            listeners.extend(wired("card reveal", cards.install()));
        }

        log::info!("Page behaviors installed ({} listeners)", listeners.len());
        Self {
            menu,
            listeners,
            typing,
        }
    }

    /// Installs into the current browser window.
    pub fn install_global(config: &BehaviorConfig) -> Result<Self> {
        let (window, document) = window_and_document()?;
        Ok(Self::install(&window, &document, config))
    }

    /// Installs only the card reveal, for pages without the landing header.
    pub fn install_card_reveal(config: &BehaviorConfig) -> Result<Self> {
        let (window, document) = window_and_document()?;
        let listeners = vec![CardReveal::prepare(&window, &document, config)?.install()?];
        Ok(Self {
            menu: None,
            listeners,
            typing: None,
        })
    }

    pub fn menu(&self) -> Option<&NavMenu> {
        self.menu.as_ref()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_typing(&self) -> bool {
        self.typing.as_ref().map_or(false, TypingRun::is_running)
    }

    /// Keeps everything attached for the rest of the page's life.
    pub fn leak(self) {
        std::mem::forget(self);
    }
}

impl Drop for PageBehaviors {
    fn drop(&mut self) {
        if !self.listeners.is_empty() {
            log::debug!("Removing {} page behavior listeners", self.listeners.len());
        }
    }
}

fn is_loading(document: &Document) -> bool {
    document.ready_state() == "loading"
}

/// Entry point for server-rendered pages that load this module as their
/// only script. Waits for the document to finish parsing.
#[wasm_bindgen]
pub fn start_page_behaviors() -> std::result::Result<(), JsValue> {
    console_error_panic_hook::set_once();
    gloo_console::log!("Starting page behaviors");

    let (_, document) = window_and_document().map_err(|e| JsValue::from_str(&e.to_string()))?;

    let install = || match PageBehaviors::install_global(&BehaviorConfig::default()) {
        Ok(behaviors) => behaviors.leak(),
        Err(e) => gloo_console::error!(format!("Page behaviors not installed: {}", e)),
    };

    if is_loading(&document) {
        let on_ready = Closure::once_into_js(install);
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    } else {
        install();
    }

    Ok(())
}
