//! Add Location Form Component
//!
//! Three inputs and a submit button. A valid submission appends to the
//! location store and clears the form; an invalid one is ignored.

use heartmap::location::LocationDraft;
use leptos::*;

use crate::state::PageState;

#[component]
pub fn AddLocationForm() -> impl IntoView {
    let state = use_context::<PageState>().expect("PageState not found");

    let (title, set_title) = create_signal(String::new());
    let (lat, set_lat) = create_signal(String::new());
    let (lng, set_lng) = create_signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let draft = LocationDraft::new(title.get(), lat.get(), lng.get());
        if state.add(&draft) {
            set_title.set(String::new());
            set_lat.set(String::new());
            set_lng.set(String::new());
        }
    };

    view! {
        <form class="add-location-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="장소 이름"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <input
                type="number"
                step="any"
                placeholder="위도"
                prop:value=move || lat.get()
                on:input=move |ev| set_lat.set(event_target_value(&ev))
            />
            <input
                type="number"
                step="any"
                placeholder="경도"
                prop:value=move || lng.get()
                on:input=move |ev| set_lng.set(event_target_value(&ev))
            />
            <button type="submit">"추가하기 💝"</button>
        </form>
    }
}
