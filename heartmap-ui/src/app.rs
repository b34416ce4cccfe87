//! App Root Component
//!
//! Loads the page settings, then renders the header, map, form and list.

use heartmap::{LocationStore, PageSettings};
use leptos::*;

use crate::api;
use crate::components::{AddLocationForm, Header, Loading, LocationList, MapSurface};
use crate::state::provide_page_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let settings = create_local_resource(
        || (),
        |_| async move {
            api::fetch_page_settings().await.unwrap_or_else(|e| {
                web_sys::console::error_1(
                    &format!("Failed to load page settings, using defaults: {}", e).into(),
                );
                PageSettings::default()
            })
        },
    );

    view! {
        <div class="app">
            {move || match settings.get() {
                Some(settings) => view! { <Page settings=settings /> }.into_view(),
                None => view! { <Loading /> }.into_view(),
            }}
        </div>
    }
}

/// The page once settings are known
#[component]
fn Page(settings: PageSettings) -> impl IntoView {
    let subtitle: Vec<String> = settings.subtitle_lines().map(str::to_string).collect();
    provide_page_state(LocationStore::from_seed(settings.locations));

    view! {
        <Header title=settings.title subtitle=subtitle />
        <MapSurface settings=settings.map />
        <AddLocationForm />
        <LocationList />
    }
}
