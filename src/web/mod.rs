//! Browser bindings: finds the page elements, attaches listeners and owns
//! everything that has to stay alive while the page is enhanced.

mod element;
mod listener;
mod observer;
mod timers;

use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, Node, Window};

use crate::components::anchor::{target_selector, AnchorNavigator};
use crate::components::form_label::FloatingLabel;
use crate::components::menu::{ClickTarget, MenuController, Propagation};
use crate::components::navbar::NavbarController;
use crate::components::parallax::Parallax;
use crate::components::typewriter::{start_hero, HeroTiming, HeroTyping};
use crate::config::{EnhanceConfig, CONFIG_ELEMENT_ID};
use crate::dom::Viewport;
use crate::error::{ConfigError, SetupError};

use element::FieldElement;
use listener::Listener;
use observer::RevealBinding;
use timers::TimeoutScheduler;

type Menu = Rc<MenuController<HtmlElement>>;
type HeroSlot = Rc<RefCell<Option<HeroTyping<HtmlElement>>>>;

thread_local! {
    static PAGE: RefCell<Option<Page>> = RefCell::new(None);
}

pub(crate) fn js_error(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

fn query(document: &Document, selector: &str) -> Result<HtmlElement, SetupError> {
    document
        .query_selector(selector)
        .map_err(|_| SetupError::InvalidSelector(selector.to_string()))?
        .ok_or_else(|| SetupError::MissingElement(selector.to_string()))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| SetupError::WrongElementKind {
            selector: selector.to_string(),
            expected: "an HTML element",
        })
}

pub(crate) fn query_all(
    document: &Document,
    selector: &str,
) -> Result<Vec<HtmlElement>, SetupError> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|_| SetupError::InvalidSelector(selector.to_string()))?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

/// Everything attached to the current page. Dropping it removes every
/// listener, disconnects the observer and stops the typewriter, putting the
/// hero texts back.
#[derive(Default)]
struct Page {
    listeners: Vec<Listener>,
    _reveal: Option<RevealBinding>,
    typing: HeroSlot,
    active: Vec<&'static str>,
}

impl Page {
    fn adopt(&mut self, name: &'static str, result: Result<Vec<Listener>, SetupError>) {
        match result {
            Ok(listeners) => {
                self.listeners.extend(listeners);
                self.active.push(name);
            }
            Err(err) => warn!("{} disabled: {}", name, err),
        }
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        if let Some(hero) = self.typing.borrow().as_ref() {
            hero.restore();
        }
    }
}

fn install_menu(
    document: &Document,
    config: &EnhanceConfig,
) -> Result<(Menu, Vec<Listener>), SetupError> {
    let toggle = query(document, &config.selectors.menu_toggle)?;
    let panel = query(document, &config.selectors.menu_panel)?;
    let body = document.body().ok_or(SetupError::Unavailable("document.body"))?;
    let menu = Rc::new(MenuController::new(toggle.clone(), panel.clone(), body));

    let mut listeners = Vec::with_capacity(3);
    for (element, target) in [(&toggle, ClickTarget::Toggle), (&panel, ClickTarget::Panel)] {
        let menu = Rc::clone(&menu);
        listeners.push(Listener::new(element, "click", move |event: Event| {
            if menu.on_click(target) == Propagation::Stop {
                event.stop_propagation();
            }
        })?);
    }

    let outside = Rc::clone(&menu);
    listeners.push(Listener::new(document, "click", move |event: Event| {
        let node = event.target().and_then(|target| target.dyn_into::<Node>().ok());
        if !toggle.contains(node.as_ref()) && !panel.contains(node.as_ref()) {
            outside.on_click(ClickTarget::Elsewhere);
        }
    })?);

    Ok((menu, listeners))
}

fn install_anchors(
    window: &Window,
    document: &Document,
    config: &EnhanceConfig,
    menu: Option<Menu>,
) -> Result<Vec<Listener>, SetupError> {
    let navigator = AnchorNavigator::new(config.header_offset, config.mobile_breakpoint);
    let mut listeners = Vec::new();
    for anchor in query_all(document, &config.selectors.anchors)? {
        let link = anchor.clone();
        let window = window.clone();
        let document = document.clone();
        let menu = menu.clone();
        listeners.push(Listener::new(&anchor, "click", move |event: Event| {
            event.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            let target = target_selector(&href)
                .and_then(|selector| document.query_selector(selector).ok().flatten());
            let measure = target.map(|target| move || target.get_bounding_client_rect().top());
            navigator.navigate(&href, measure, &window, menu.as_deref());
        })?);
    }
    Ok(listeners)
}

fn install_form_labels(
    document: &Document,
    config: &EnhanceConfig,
) -> Result<Vec<Listener>, SetupError> {
    let selectors = &config.selectors;
    let mut listeners = Vec::new();
    for group in query_all(document, &selectors.form_group)? {
        let input = group
            .query_selector(&selectors.form_input)
            .ok()
            .flatten()
            .and_then(FieldElement::from_element);
        let label = group
            .query_selector(&selectors.form_label)
            .ok()
            .flatten()
            .and_then(|label| label.dyn_into::<HtmlElement>().ok());
        let (Some(input), Some(label)) = (input, label) else {
            warn!("skipping {} without a field and label", selectors.form_group);
            continue;
        };

        let field = Rc::new(FloatingLabel::new(group, input.clone(), label));
        field.sync_initial();

        let focused = Rc::clone(&field);
        listeners.push(Listener::new(input.event_target(), "focus", move |_| {
            focused.on_focus()
        })?);
        listeners.push(Listener::new(input.event_target(), "blur", move |_| {
            field.on_blur()
        })?);
    }
    Ok(listeners)
}

fn install_navbar(
    window: &Window,
    document: &Document,
    config: &EnhanceConfig,
) -> Result<Vec<Listener>, SetupError> {
    let navbar = NavbarController::new(
        query(document, &config.selectors.navbar)?,
        config.navbar_shadow.clone(),
    );
    let viewport = window.clone();
    let listener = Listener::new(window, "scroll", move |_| {
        navbar.on_scroll(viewport.scroll_offset());
    })?;
    Ok(vec![listener])
}

fn install_parallax(
    window: &Window,
    document: &Document,
    config: &EnhanceConfig,
) -> Result<Vec<Listener>, SetupError> {
    let parallax = Parallax::new(
        query(document, &config.selectors.hero)?,
        config.parallax_factor,
    );
    let viewport = window.clone();
    let listener = Listener::new(window, "scroll", move |_| {
        parallax.on_scroll(viewport.scroll_offset());
    })?;
    Ok(vec![listener])
}

fn install_typewriter(
    window: &Window,
    document: &Document,
    config: &EnhanceConfig,
    slot: HeroSlot,
) -> Result<Vec<Listener>, SetupError> {
    let title = query(document, &config.selectors.hero_title)?;
    let subtitle = query(document, &config.selectors.hero_subtitle)?;
    let timing = HeroTiming {
        title_interval_ms: config.title_interval_ms,
        subtitle_interval_ms: config.subtitle_interval_ms,
        subtitle_pause_ms: config.subtitle_pause_ms,
    };

    let mut run = Some(move || {
        let hero = start_hero(title, subtitle, timing, Rc::new(TimeoutScheduler));
        slot.replace(Some(hero));
    });

    // Loaded as a module the script may run after `load` has already fired.
    if document.ready_state() == "complete" {
        if let Some(run) = run.take() {
            run();
        }
        return Ok(Vec::new());
    }

    let listener = Listener::new(window, "load", move |_| {
        if let Some(run) = run.take() {
            run();
        }
    })?;
    Ok(vec![listener])
}

fn enhance(config: &EnhanceConfig) -> Result<(), SetupError> {
    teardown();

    let window = web_sys::window().ok_or(SetupError::Unavailable("window"))?;
    let document = window.document().ok_or(SetupError::Unavailable("document"))?;
    let mut page = Page::default();

    let menu = match install_menu(&document, config) {
        Ok((menu, listeners)) => {
            page.listeners.extend(listeners);
            page.active.push("menu");
            Some(menu)
        }
        Err(err) => {
            warn!("menu disabled: {}", err);
            None
        }
    };
    page.adopt("anchors", install_anchors(&window, &document, config, menu));

    match observer::install(&document, config) {
        Ok(binding) => {
            page._reveal = Some(binding);
            page.active.push("reveal");
        }
        Err(err) => warn!("reveal disabled: {}", err),
    }

    page.adopt("form labels", install_form_labels(&document, config));
    page.adopt("navbar", install_navbar(&window, &document, config));
    page.adopt("parallax", install_parallax(&window, &document, config));
    let slot = Rc::clone(&page.typing);
    page.adopt("typewriter", install_typewriter(&window, &document, config, slot));

    info!("page enhanced: {}", page.active.join(", "));
    PAGE.with(|current| current.replace(Some(page)));
    Ok(())
}

fn page_config(document: &Document) -> Result<EnhanceConfig, ConfigError> {
    match document.get_element_by_id(CONFIG_ELEMENT_ID) {
        Some(block) => EnhanceConfig::from_json(&block.text_content().unwrap_or_default()),
        None => Ok(EnhanceConfig::default()),
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let config = web_sys::window()
        .and_then(|window| window.document())
        .map(|document| page_config(&document))
        .unwrap_or_else(|| Ok(EnhanceConfig::default()));
    let level = config
        .as_ref()
        .map(EnhanceConfig::log_level)
        .unwrap_or_else(|_| crate::config::default_log_level());
    // A second init only happens when the module is instantiated twice.
    let _ = console_log::init_with_level(level);

    let config = config.unwrap_or_else(|err| {
        warn!("ignoring #{}: {}", CONFIG_ELEMENT_ID, err);
        EnhanceConfig::default()
    });
    info!("starting page enhancements");
    if let Err(err) = enhance(&config) {
        warn!("page enhancements unavailable: {}", err);
    }
}

/// Re-enhances the page with a config object from JavaScript. Unset fields
/// keep their defaults.
#[wasm_bindgen(js_name = enhanceWith)]
pub fn enhance_with(config: JsValue) -> Result<(), JsValue> {
    let config: EnhanceConfig = serde_wasm_bindgen::from_value(config)
        .map_err(|err| ConfigError::Value(err.to_string()))
        .and_then(|config: EnhanceConfig| config.validate().map(|_| config))
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    enhance(&config).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Removes every enhancement from the page.
#[wasm_bindgen]
pub fn teardown() {
    let page = PAGE.with(|current| current.borrow_mut().take());
    if page.is_some() {
        info!("page enhancements removed");
    }
    drop(page);
}
