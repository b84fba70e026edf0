//! Plain-English query box shown above the grid and the rule list.

use leptos::prelude::*;

use crate::state::ui::PageType;

/// Free-text input whose prompt depends on the hosting page.
#[component]
pub fn NaturalLanguageInput(page_type: PageType) -> impl IntoView {
    let query = RwSignal::new(String::new());

    view! {
        <div class="nl-input">
            <input
                class="nl-input__field"
                type="text"
                placeholder=page_type.placeholder()
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
        </div>
    }
}
