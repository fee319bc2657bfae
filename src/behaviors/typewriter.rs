use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use web_sys::{Document, Element};

use super::query;
use crate::config::BehaviorConfig;
use crate::error::Result;

/// Progress of a single character-by-character reveal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    text: Vec<char>,
    cursor: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tick {
    /// The visible prefix after this tick.
    Typed(String),
    Done,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.chars().collect(),
            cursor: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.text.len()
    }

    pub fn tick(&mut self) -> Tick {
        if self.is_complete() {
            return Tick::Done;
        }
        self.cursor += 1;
        Tick::Typed(self.text[..self.cursor].iter().collect())
    }
}

/// A running typewriter effect. Dropping it cancels the timer.
pub struct TypingRun {
    interval: Rc<RefCell<Option<Interval>>>,
}

impl TypingRun {
    pub fn is_running(&self) -> bool {
        self.interval.borrow().is_some()
    }
}

impl Drop for TypingRun {
    fn drop(&mut self) {
        if let Some(interval) = self.interval.borrow_mut().take() {
            drop(interval);
        }
    }
}

/// Clears the subtitle and types its text back in. Skipped when there is no
/// subtitle on the page.
pub fn install(document: &Document, config: &BehaviorConfig) -> Result<Option<TypingRun>> {
    let Some(subtitle) = query(document, &config.subtitle_selector)? else {
        log::debug!("No subtitle found, skipping typewriter effect");
        return Ok(None);
    };

    Ok(Some(start(subtitle, config.typing_interval_ms)))
}

fn start(subtitle: Element, interval_ms: u32) -> TypingRun {
    let text = subtitle.text_content().unwrap_or_default();
    subtitle.set_text_content(Some(""));

    let mut typewriter = Typewriter::new(&text);
    let interval_handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let interval_handle_clone = interval_handle.clone();

    let interval = Interval::new(interval_ms, move || match typewriter.tick() {
        Tick::Typed(prefix) => subtitle.set_text_content(Some(&prefix)),
        Tick::Done => {
            if let Some(interval) = interval_handle_clone.borrow_mut().take() {
                log::debug!("Subtitle typed, stopping timer");
                drop(interval);
            }
        }
    });

    *interval_handle.borrow_mut() = Some(interval);

    TypingRun {
        interval: interval_handle,
    }
}
