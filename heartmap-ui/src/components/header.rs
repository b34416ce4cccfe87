//! Header Component
//!
//! Page title and subtitle.

use leptos::*;

#[component]
pub fn Header(title: String, subtitle: Vec<String>) -> impl IntoView {
    let lines = subtitle;
    let last = lines.len().saturating_sub(1);

    view! {
        <h1 class="title">{title}</h1>
        <p class="subtitle">
            {lines
                .into_iter()
                .enumerate()
                .map(|(idx, line)| {
                    view! {
                        {line}
                        {(idx < last).then(|| view! { <br /> })}
                    }
                })
                .collect_view()}
        </p>
    }
}
