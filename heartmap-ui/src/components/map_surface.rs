//! Map Surface Component
//!
//! The map is created once the container is mounted; afterwards every change
//! to the location store triggers a redraw.

use heartmap::MapSettings;
use leptos::*;

use crate::map::{KakaoProvider, MapBinding};
use crate::state::PageState;

#[component]
pub fn MapSurface(settings: MapSettings) -> impl IntoView {
    let state = use_context::<PageState>().expect("PageState not found");
    let container = create_node_ref::<html::Div>();

    let binding = MapBinding::<KakaoProvider>::new(state.locations);

    // Create the map once the container exists
    let attaching = binding.clone();
    container.on_load(move |div| {
        let element: web_sys::HtmlElement = (*div).clone().into();
        let options = settings.options();
        let provider = KakaoProvider::new(settings.script_url);

        spawn_local(async move {
            attaching.attach(provider, element, options).await;
        });
    });

    on_cleanup(move || {
        if !binding.dispose() {
            KakaoProvider::remove_script();
        }
    });

    view! { <div class="map-container" node_ref=container /> }
}
