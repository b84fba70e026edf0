//! Titled card wrapper used by every workspace tab.

use leptos::prelude::*;

/// Card with an optional header (title + description) around its children.
#[component]
pub fn PanelCard(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    children: Children,
) -> impl IntoView {
    let header = title.map(|title| {
        view! {
            <div class="card__header">
                <h2 class="card__title">{title}</h2>
                {description.map(|d| view! { <p class="card__description">{d}</p> })}
            </div>
        }
    });

    view! {
        <section class="card">
            {header}
            <div class="card__content">{children()}</div>
        </section>
    }
}
