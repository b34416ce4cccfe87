//! Kakao Maps provider
//!
//! Loads the SDK by injecting a `<script>` tag with `autoload=false`, then
//! waits for `kakao.maps.load`. If the page already carries the SDK the
//! script is not injected again.

use async_trait::async_trait;
use heartmap::map::{LatLngBounds, MapError, MapOptions, MapProvider, MapResult, MarkerSpec};
use js_sys::{Object, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlElement, HtmlScriptElement};

use super::overlay::{HeartContent, HeartOverlay};
use super::sdk::{KakaoCustomOverlay, KakaoLatLng, KakaoLatLngBounds, KakaoMap};

/// Attribute marking the script tag this provider injected
const SCRIPT_MARKER: &str = "data-heartmap-sdk";

/// [`MapProvider`] over the Kakao Maps JavaScript SDK
#[derive(Debug, Clone)]
pub struct KakaoProvider {
    script_url: String,
}

impl KakaoProvider {
    pub fn new(script_url: impl Into<String>) -> Self {
        Self {
            script_url: script_url.into(),
        }
    }

    /// Remove the injected SDK script, if present
    pub fn remove_script() {
        let Some(document) = document() else {
            return;
        };

        if let Ok(Some(script)) = document.query_selector(&format!("script[{}]", SCRIPT_MARKER)) {
            script.remove();
        }
    }

    async fn inject_script(&self, document: &Document) -> MapResult<()> {
        let script = document
            .create_element("script")
            .and_then(|el| el.dyn_into::<HtmlScriptElement>().map_err(JsValue::from))
            .map_err(|e| MapError::LibraryLoad(describe(&e)))?;

        script.set_src(&self.script_url);
        script
            .set_attribute(SCRIPT_MARKER, "")
            .map_err(|e| MapError::LibraryLoad(describe(&e)))?;

        let loaded = Promise::new(&mut |resolve, reject| {
            script.set_onload(Some(&resolve));
            script.set_onerror(Some(&reject));
        });

        let head = document
            .head()
            .ok_or_else(|| MapError::LibraryLoad("document has no <head>".to_string()))?;
        head.append_child(&script)
            .map_err(|e| MapError::LibraryLoad(describe(&e)))?;

        let result = JsFuture::from(loaded).await;
        script.set_onload(None);
        script.set_onerror(None);

        result
            .map(|_| ())
            .map_err(|_| MapError::LibraryLoad(format!("failed to fetch {}", self.script_url)))
    }
}

#[async_trait(?Send)]
impl MapProvider for KakaoProvider {
    type Container = HtmlElement;
    type Map = KakaoMap;
    type Overlay = HeartOverlay;

    async fn load(&self) -> MapResult<()> {
        if sdk_ready() {
            return Ok(());
        }

        let document =
            document().ok_or_else(|| MapError::LibraryLoad("no document".to_string()))?;

        if !namespace_present() {
            self.inject_script(&document).await?;
        }

        if !namespace_present() {
            return Err(MapError::NamespaceMissing("kakao.maps".to_string()));
        }

        let finished = Promise::new(&mut |resolve, reject| {
            if let Err(e) = super::sdk::load(&resolve) {
                let _ = reject.call1(&JsValue::NULL, &e);
            }
        });
        JsFuture::from(finished)
            .await
            .map_err(|e| MapError::LibraryLoad(describe(&e)))?;

        if sdk_ready() {
            Ok(())
        } else {
            Err(MapError::NamespaceMissing("kakao.maps.Map".to_string()))
        }
    }

    fn create_map(&self, container: &HtmlElement, options: &MapOptions) -> MapResult<KakaoMap> {
        let center = KakaoLatLng::new(options.center.lat, options.center.lng)
            .map_err(|e| MapError::MapCreation(describe(&e)))?;

        let js_options = Object::new();
        set(&js_options, "center", &center).map_err(|e| MapError::MapCreation(describe(&e)))?;
        set(&js_options, "level", &JsValue::from(options.level))
            .map_err(|e| MapError::MapCreation(describe(&e)))?;

        KakaoMap::new(container, &js_options).map_err(|e| MapError::MapCreation(describe(&e)))
    }

    fn create_overlay(&self, map: &KakaoMap, marker: &MarkerSpec) -> MapResult<HeartOverlay> {
        let document =
            document().ok_or_else(|| MapError::OverlayCreation("no document".to_string()))?;
        let overlay_err = |e: JsValue| MapError::OverlayCreation(describe(&e));

        let content = HeartContent::build(&document, marker).map_err(overlay_err)?;
        let position =
            KakaoLatLng::new(marker.position.lat, marker.position.lng).map_err(overlay_err)?;

        let js_options = Object::new();
        set(&js_options, "position", &position).map_err(overlay_err)?;
        set(&js_options, "content", &content.root).map_err(overlay_err)?;
        set(&js_options, "map", map).map_err(overlay_err)?;
        set(&js_options, "yAnchor", &JsValue::from(marker.anchor.y_fraction()))
            .map_err(overlay_err)?;

        let overlay = KakaoCustomOverlay::new(&js_options).map_err(overlay_err)?;
        Ok(HeartOverlay::new(overlay, content))
    }

    fn remove_overlay(&self, overlay: HeartOverlay) {
        overlay.remove();
    }

    fn set_bounds(&self, map: &KakaoMap, bounds: &LatLngBounds) {
        let (Some(sw), Some(ne)) = (bounds.south_west(), bounds.north_east()) else {
            return;
        };

        let fitted = KakaoLatLngBounds::new().and_then(|kakao_bounds| {
            kakao_bounds.extend(&KakaoLatLng::new(sw.lat, sw.lng)?);
            kakao_bounds.extend(&KakaoLatLng::new(ne.lat, ne.lng)?);
            Ok(kakao_bounds)
        });

        match fitted {
            Ok(kakao_bounds) => map.set_bounds(&kakao_bounds),
            Err(e) => web_sys::console::error_1(&format!("Failed to fit map bounds: {}", describe(&e)).into()),
        }
    }

    fn release(&self) {
        Self::remove_script();
    }
}

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

fn lookup(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// `window.kakao.maps` exists
fn namespace_present() -> bool {
    web_sys::window()
        .and_then(|w| lookup(&w, "kakao"))
        .and_then(|kakao| lookup(&kakao, "maps"))
        .is_some()
}

/// `window.kakao.maps` is fully loaded and its classes are usable
fn sdk_ready() -> bool {
    web_sys::window()
        .and_then(|w| lookup(&w, "kakao"))
        .and_then(|kakao| lookup(&kakao, "maps"))
        .and_then(|maps| lookup(&maps, "Map"))
        .is_some()
}

fn set(target: &Object, key: &str, value: &JsValue) -> Result<(), JsValue> {
    Reflect::set(target, &JsValue::from_str(key), value).map(|_| ())
}

fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| value.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
        .unwrap_or_else(|| format!("{:?}", value))
}
