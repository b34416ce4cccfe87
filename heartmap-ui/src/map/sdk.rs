//! Raw bindings to the `kakao.maps` namespace

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["kakao", "maps"], js_name = "LatLng")]
    pub type KakaoLatLng;

    #[wasm_bindgen(catch, constructor, js_namespace = ["kakao", "maps"], js_class = "LatLng")]
    pub fn new(lat: f64, lng: f64) -> Result<KakaoLatLng, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["kakao", "maps"], js_name = "LatLngBounds")]
    pub type KakaoLatLngBounds;

    #[wasm_bindgen(catch, constructor, js_namespace = ["kakao", "maps"], js_class = "LatLngBounds")]
    pub fn new() -> Result<KakaoLatLngBounds, JsValue>;

    #[wasm_bindgen(method)]
    pub fn extend(this: &KakaoLatLngBounds, latlng: &KakaoLatLng);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["kakao", "maps"], js_name = "Map")]
    pub type KakaoMap;

    #[wasm_bindgen(catch, constructor, js_namespace = ["kakao", "maps"], js_class = "Map")]
    pub fn new(container: &HtmlElement, options: &JsValue) -> Result<KakaoMap, JsValue>;

    #[wasm_bindgen(method, js_name = setBounds)]
    pub fn set_bounds(this: &KakaoMap, bounds: &KakaoLatLngBounds);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["kakao", "maps"], js_name = "CustomOverlay")]
    pub type KakaoCustomOverlay;

    #[wasm_bindgen(catch, constructor, js_namespace = ["kakao", "maps"], js_class = "CustomOverlay")]
    pub fn new(options: &JsValue) -> Result<KakaoCustomOverlay, JsValue>;

    #[wasm_bindgen(method, js_name = setMap)]
    pub fn set_map(this: &KakaoCustomOverlay, map: &JsValue);
}

#[wasm_bindgen]
extern "C" {
    /// Finish loading the SDK when the script was added with `autoload=false`
    #[wasm_bindgen(catch, js_namespace = ["kakao", "maps"], js_name = "load")]
    pub fn load(callback: &js_sys::Function) -> Result<(), JsValue>;
}
