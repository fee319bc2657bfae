use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement, Window};

use super::listener::Listener;
use super::query_all;
use crate::config::BehaviorConfig;
use crate::error::{BehaviorError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardVisibility {
    Hidden,
    Revealed,
}

impl CardVisibility {
    /// Hidden cards become revealed; revealed cards stay revealed.
    pub fn reveal(self) -> Self {
        CardVisibility::Revealed
    }
}

/// The line a card's top edge has to cross to be revealed.
pub fn reveal_threshold(viewport_height: f64, divisor: f64) -> f64 {
    viewport_height / divisor
}

pub fn should_reveal(card_top: f64, viewport_height: f64, divisor: f64) -> bool {
    card_top < reveal_threshold(viewport_height, divisor)
}

struct Card {
    element: HtmlElement,
    visibility: CardVisibility,
}

/// Cards that fade in the first time they scroll into view.
///
/// The page is queried again on every check, so cards inserted after
/// install are hidden and revealed like the rest.
pub struct CardReveal {
    window: Window,
    document: Document,
    selector: String,
    hidden_transform: String,
    transition: String,
    cards: Vec<Card>,
    divisor: f64,
}

impl CardReveal {
    /// Collects every card and puts it in the hidden starting state.
    pub fn prepare(window: &Window, document: &Document, config: &BehaviorConfig) -> Result<Self> {
        let mut reveal = Self {
            window: window.clone(),
            document: document.clone(),
            selector: config.card_selector(),
            hidden_transform: format!("translateY({}px)", config.hidden_offset_px),
            transition: config.card_transition.clone(),
            cards: Vec::new(),
            divisor: config.reveal_divisor,
        };
        reveal.collect()?;

        log::debug!("Prepared {} cards for reveal", reveal.len());
        Ok(reveal)
    }

    /// Hides and tracks any card not seen before.
    fn collect(&mut self) -> Result<()> {
        for element in query_all(&self.document, &self.selector)? {
            if self.cards.iter().any(|card| same_element(&card.element, &element)) {
                continue;
            }
            set_style(&element, "opacity", "0")?;
            set_style(&element, "transform", &self.hidden_transform)?;
            set_style(&element, "transition", &self.transition)?;
            self.cards.push(Card {
                element,
                visibility: CardVisibility::Hidden,
            });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn revealed(&self) -> usize {
        self.cards
            .iter()
            .filter(|card| card.visibility == CardVisibility::Revealed)
            .count()
    }

    /// Reveals every hidden card whose top is above the threshold.
    pub fn check(&mut self) {
        if let Err(e) = self.collect() {
            log::warn!("Failed to collect new cards: {}", e);
        }

        let Some(viewport_height) = self.window.inner_height().ok().and_then(|h| h.as_f64()) else {
            log::warn!("Viewport height unavailable, skipping reveal check");
            return;
        };

        for card in self
            .cards
            .iter_mut()
            .filter(|card| card.visibility == CardVisibility::Hidden)
        {
            let top = card.element.get_bounding_client_rect().top();
            if !should_reveal(top, viewport_height, self.divisor) {
                continue;
            }
            let shown = set_style(&card.element, "opacity", "1")
                .and_then(|_| set_style(&card.element, "transform", "translateY(0)"));
            match shown {
                Ok(()) => card.visibility = card.visibility.reveal(),
                Err(e) => log::warn!("{}", e),
            }
        }
    }

    /// Runs the check now and again on every scroll of the window.
    pub fn install(mut self) -> Result<Listener> {
        self.check();
        log::debug!("{} of {} cards revealed at load", self.revealed(), self.len());

        let window = self.window.clone();
        let reveal = Rc::new(RefCell::new(self));
        Listener::attach(&window, "scroll", move |_| {
            reveal.borrow_mut().check();
        })
    }
}

fn same_element(a: &HtmlElement, b: &HtmlElement) -> bool {
    let a: &JsValue = a.as_ref();
    let b: &JsValue = b.as_ref();
    a == b
}

fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<()> {
    element
        .style()
        .set_property(property, value)
        .map_err(|e| BehaviorError::style(property, e))
}
