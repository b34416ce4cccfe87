//! Location List Component
//!
//! Read-only tags, one per location, in store order.

use heartmap::map::marker::HEART_GLYPH;
use leptos::*;

use crate::state::PageState;

#[component]
pub fn LocationList() -> impl IntoView {
    let state = use_context::<PageState>().expect("PageState not found");

    view! {
        <div class="location-list">
            {move || {
                state.locations.with(|store| {
                    store
                        .iter()
                        .map(|location| {
                            view! {
                                <div class="location-tag">
                                    {format!("{} {}", HEART_GLYPH, location.title)}
                                </div>
                            }
                        })
                        .collect_view()
                })
            }}
        </div>
    }
}
