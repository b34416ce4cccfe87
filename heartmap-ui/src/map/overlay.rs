//! Heart marker overlay
//!
//! Builds the DOM for one heart marker and wires its hover behavior to the
//! core `HoverState`.

use std::cell::RefCell;
use std::rc::Rc;

use heartmap::map::marker::{HEART_GLYPH, ICON_TRANSITION, LABEL_TRANSITION};
use heartmap::map::{HoverState, MarkerSpec, MarkerStyle};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

use super::sdk::KakaoCustomOverlay;

/// Class of every overlay root element
pub const OVERLAY_CLASS: &str = "custom-overlay";

const CONTAINER_STYLE: &str = "padding: 5px; font-size: 24px; cursor: pointer; \
     text-shadow: 2px 2px 4px rgba(0, 0, 0, 0.2); position: relative;";

const LABEL_STYLE: &str = "position: absolute; top: -30px; left: 50%; \
     transform: translateX(-50%); background-color: rgba(255, 107, 107, 0.9); \
     color: white; padding: 5px 10px; border-radius: 15px; font-size: 14px; \
     white-space: nowrap; pointer-events: none; z-index: 1;";

type Listener = Closure<dyn FnMut(MouseEvent)>;

/// DOM content of a heart marker before it is attached to the map
pub struct HeartContent {
    pub root: HtmlElement,
    listeners: Vec<(&'static str, Listener)>,
}

impl HeartContent {
    /// Build the marker DOM for `marker`
    pub fn build(document: &Document, marker: &MarkerSpec) -> Result<Self, JsValue> {
        let root = create_div(document, OVERLAY_CLASS)?;
        root.style().set_css_text(CONTAINER_STYLE);

        let heart = create_div(document, "heart-marker")?;
        heart.set_text_content(Some(HEART_GLYPH));
        heart.style().set_property("transition", ICON_TRANSITION)?;

        let label = create_div(document, "location-name")?;
        label.style().set_css_text(LABEL_STYLE);
        label.style().set_property("transition", LABEL_TRANSITION)?;
        // Text content, never markup
        label.set_text_content(Some(&marker.title));

        apply_style(&heart, &label, MarkerStyle::RESTING);

        root.append_child(&heart)?;
        root.append_child(&label)?;

        let hover = Rc::new(RefCell::new(HoverState::new()));
        let mut listeners = Vec::with_capacity(2);

        for (event, entering) in [("mouseenter", true), ("mouseleave", false)] {
            let hover = Rc::clone(&hover);
            let heart = heart.clone();
            let label = label.clone();

            let listener = Closure::wrap(Box::new(move |_: MouseEvent| {
                let style = if entering {
                    hover.borrow_mut().enter()
                } else {
                    hover.borrow_mut().leave()
                };
                apply_style(&heart, &label, style);
            }) as Box<dyn FnMut(MouseEvent)>);

            root.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())?;
            listeners.push((event, listener));
        }

        Ok(Self { root, listeners })
    }
}

/// A heart marker attached to a Kakao map
pub struct HeartOverlay {
    overlay: KakaoCustomOverlay,
    content: HeartContent,
}

impl HeartOverlay {
    pub(super) fn new(overlay: KakaoCustomOverlay, content: HeartContent) -> Self {
        Self { overlay, content }
    }

    /// Take the overlay off the map and detach its listeners
    pub fn remove(self) {
        self.overlay.set_map(&JsValue::NULL);

        let root = &self.content.root;
        for (event, listener) in &self.content.listeners {
            let _ = root.remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
        }
        root.remove();
    }
}

fn create_div(document: &Document, class: &str) -> Result<HtmlElement, JsValue> {
    let element = document.create_element("div")?;
    element.set_class_name(class);
    element.dyn_into::<HtmlElement>().map_err(JsValue::from)
}

fn apply_style(heart: &HtmlElement, label: &HtmlElement, style: MarkerStyle) {
    let _ = heart.style().set_property("transform", &style.icon_transform());
    let _ = label.style().set_property("opacity", &style.label_opacity_css());
}
