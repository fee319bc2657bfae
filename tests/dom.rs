//! Browser tests for the landing page behaviors.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use landing::behaviors::nav_menu::{NavMenuState, ACTIVE_CLASS};
use landing::behaviors::start_page_behaviors;
use landing::{BehaviorConfig, PageBehaviors};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, HtmlElement, ScrollBehavior, Window};

wasm_bindgen_test_configure!(run_in_browser);

/// Markup mounted into the body for one test, removed again on drop.
struct Fixture {
    window: Window,
    document: Document,
    root: Element,
}

impl Fixture {
    fn mount(markup: &str) -> Self {
        let window = web_sys::window().expect("No window object");
        let document = window.document().expect("No document object");
        let root = document.create_element("div").expect("Failed to create root");
        root.set_inner_html(markup);
        document
            .body()
            .expect("No body")
            .append_child(&root)
            .expect("Failed to mount fixture");
        window.scroll_to_with_x_and_y(0.0, 0.0);
        Self {
            window,
            document,
            root,
        }
    }

    fn install(&self, config: &BehaviorConfig) -> PageBehaviors {
        PageBehaviors::install(&self.window, &self.document, config)
    }

    fn html(&self, selector: &str) -> HtmlElement {
        self.document
            .query_selector(selector)
            .expect("Bad selector")
            .unwrap_or_else(|| panic!("Missing {}", selector))
            .dyn_into::<HtmlElement>()
            .expect("Not an HtmlElement")
    }

    fn is_active(&self, selector: &str) -> bool {
        self.html(selector).class_list().contains(ACTIVE_CLASS)
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().expect("No scrollY")
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .expect("No innerHeight")
    }

    fn scroll_to(&self, y: f64) {
        self.window.scroll_to_with_x_and_y(0.0, y);
        let event = Event::new("scroll").expect("Failed to create event");
        self.window.dispatch_event(&event).expect("Failed to dispatch");
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        self.root.remove();
        self.window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

const MENU: &str = r##"
    <button class="menu-toggle"></button>
    <div class="nav-links">
        <a id="empty-link" href="#">Top</a>
        <a id="features-link" href="#features">Features</a>
        <a id="missing-link" href="#nowhere">Nowhere</a>
    </div>
"##;

fn instant() -> BehaviorConfig {
    BehaviorConfig::default().with_scroll_behavior(ScrollBehavior::Instant)
}

#[wasm_bindgen_test]
fn menu_toggle_parity() {
    let fixture = Fixture::mount(MENU);
    let behaviors = fixture.install(&instant());
    let toggle = fixture.html(".menu-toggle");

    for clicks in 1..=4 {
        toggle.click();
        let open = clicks % 2 == 1;
        assert_eq!(fixture.is_active(".menu-toggle"), open, "toggle after {} clicks", clicks);
        assert_eq!(fixture.is_active(".nav-links"), open, "links after {} clicks", clicks);
    }

    let menu = behaviors.menu().expect("Menu should be wired");
    assert_eq!(menu.state(), NavMenuState::Closed);
}

#[wasm_bindgen_test]
fn missing_menu_is_skipped() {
    let fixture = Fixture::mount(r#"<p class="subtitle">Hi</p>"#);
    let behaviors = fixture.install(&instant());
    assert!(behaviors.menu().is_none());
}

#[wasm_bindgen_test]
fn empty_fragment_does_nothing() {
    let fixture = Fixture::mount(&format!(
        r#"{}<div style="height: 3000px"></div><section id="features">F</section>"#,
        MENU
    ));
    let _behaviors = fixture.install(&instant());

    fixture.html(".menu-toggle").click();
    assert!(fixture.is_active(".nav-links"));

    let before = fixture.scroll_y();
    fixture.html("#empty-link").click();

    assert_eq!(fixture.scroll_y(), before);
    assert!(fixture.is_active(".menu-toggle"));
    assert!(fixture.is_active(".nav-links"));
}

#[wasm_bindgen_test]
fn fragment_scrolls_below_header_and_closes_menu() {
    let fixture = Fixture::mount(&format!(
        r#"{}<div style="height: 3000px"></div>
        <section id="features" style="height: 50px">F</section>
        <div style="height: 3000px"></div>"#,
        MENU
    ));
    let _behaviors = fixture.install(&instant());

    fixture.html(".menu-toggle").click();
    fixture.html("#features-link").click();

    let top = fixture.html("#features").get_bounding_client_rect().top();
    assert!((top - 80.0).abs() < 1.0, "section top at {}", top);
    assert!(!fixture.is_active(".menu-toggle"));
    assert!(!fixture.is_active(".nav-links"));
}

#[wasm_bindgen_test]
fn missing_target_is_a_no_op() {
    let fixture = Fixture::mount(&format!(r#"{}<div style="height: 3000px"></div>"#, MENU));
    let _behaviors = fixture.install(&instant());

    fixture.html(".menu-toggle").click();
    fixture.html("#missing-link").click();

    assert_eq!(fixture.scroll_y(), 0.0);
    assert!(fixture.is_active(".nav-links"));
}

#[wasm_bindgen_test]
async fn subtitle_is_typed_then_stops() {
    let text = "Notes, done.";
    let fixture = Fixture::mount(&format!(r#"<p class="subtitle">{}</p>"#, text));
    let behaviors = fixture.install(&instant().with_typing_interval(10));
    let subtitle = fixture.html(".subtitle");

    assert_eq!(subtitle.text_content().unwrap_or_default(), "");
    assert!(behaviors.is_typing());

    TimeoutFuture::new(45).await;
    let partial = subtitle.text_content().unwrap_or_default();
    assert!(text.starts_with(&partial), "'{}' is not a prefix", partial);

    TimeoutFuture::new(400).await;
    assert_eq!(subtitle.text_content().unwrap_or_default(), text);
    assert!(!behaviors.is_typing());

    TimeoutFuture::new(50).await;
    assert_eq!(subtitle.text_content().unwrap_or_default(), text);
}

#[wasm_bindgen_test]
fn card_in_view_at_load_is_revealed() {
    let fixture = Fixture::mount(r#"<div class="feature-card">A</div>"#);
    let _behaviors = fixture.install(&instant());
    let card = fixture.html(".feature-card");
    let style = card.style();

    // in view at load, so the initial check already revealed it
    assert_eq!(style.get_property_value("opacity").unwrap_or_default(), "1");
    assert_eq!(style.get_property_value("transition-duration").unwrap_or_default(), "0.6s");
}

#[wasm_bindgen_test]
fn card_reveals_once_scrolled_into_view_and_stays() {
    let fixture = Fixture::mount(
        r#"<div id="spacer"></div>
        <div class="step-card" style="height: 40px">Step</div>
        <div style="height: 3000px"></div>"#,
    );
    let viewport = fixture.viewport_height();
    fixture
        .html("#spacer")
        .style()
        .set_property("height", &format!("{}px", viewport * 2.0))
        .expect("Failed to size spacer");

    let _behaviors = fixture.install(&instant());
    let card = fixture.html(".step-card");
    let opacity = || card.style().get_property_value("opacity").unwrap_or_default();
    let transform = || card.style().get_property_value("transform").unwrap_or_default();

    assert_eq!(opacity(), "0");
    assert_eq!(transform(), "translateY(20px)");

    fixture.scroll_to(viewport * 1.5);
    assert!(card.get_bounding_client_rect().top() < viewport / 1.3);
    assert_eq!(opacity(), "1");
    assert!(!transform().contains("20px"));

    fixture.scroll_to(0.0);
    assert_eq!(opacity(), "1");
}

#[wasm_bindgen_test]
fn dropping_behaviors_detaches_listeners() {
    let fixture = Fixture::mount(MENU);
    let behaviors = fixture.install(&instant());
    assert!(behaviors.listener_count() > 0);
    drop(behaviors);

    fixture.html(".menu-toggle").click();
    assert!(!fixture.is_active(".menu-toggle"));
    assert!(!fixture.is_active(".nav-links"));
}

#[wasm_bindgen_test]
async fn broken_card_selector_leaves_other_behaviors_running() {
    let text = "Still typed.";
    let fixture = Fixture::mount(&format!(r#"{}<p class="subtitle">{}</p>"#, MENU, text));
    let config = instant()
        .with_typing_interval(10)
        .with_card_selectors(["a[href"]);
    let behaviors = fixture.install(&config);

    fixture.html(".menu-toggle").click();
    assert!(fixture.is_active(".menu-toggle"));
    assert!(fixture.is_active(".nav-links"));
    assert!(behaviors.is_typing());

    TimeoutFuture::new(400).await;
    let subtitle = fixture.html(".subtitle");
    assert_eq!(subtitle.text_content().unwrap_or_default(), text);
}

#[wasm_bindgen_test]
fn card_added_after_install_is_revealed_on_scroll() {
    let fixture = Fixture::mount(
        r#"<div id="spacer"></div>
        <div id="late-slot"></div>
        <div style="height: 3000px"></div>"#,
    );
    let viewport = fixture.viewport_height();
    fixture
        .html("#spacer")
        .style()
        .set_property("height", &format!("{}px", viewport * 2.0))
        .expect("Failed to size spacer");

    let _behaviors = fixture.install(&instant());

    fixture
        .html("#late-slot")
        .set_inner_html(r#"<div class="team-member" style="height: 40px">Late</div>"#);
    let card = fixture.html(".team-member");
    let opacity = || card.style().get_property_value("opacity").unwrap_or_default();

    fixture.scroll_to(0.0);
    assert_eq!(opacity(), "0");

    fixture.scroll_to(viewport * 1.5);
    assert_eq!(opacity(), "1");
}

#[wasm_bindgen_test]
fn script_entry_installs_at_once_on_parsed_document() {
    let fixture = Fixture::mount(MENU);

    start_page_behaviors().expect("Script entry failed");

    fixture.html(".menu-toggle").click();
    assert!(fixture.is_active(".menu-toggle"));
    assert!(fixture.is_active(".nav-links"));
}
