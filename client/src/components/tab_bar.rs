//! Workspace tab triggers.
//!
//! ARCHITECTURE
//! ============
//! The bar only writes `UiState::active_tab`; the workspace page decides
//! which panel to render for it.

use leptos::prelude::*;

use crate::state::ui::{Tab, UiState};

/// Row of six tab buttons; the active one is highlighted.
#[component]
pub fn TabBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="tab-bar" role="tablist">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    let is_active = move || ui.get().active_tab == tab;
                    view! {
                        <button
                            class="tab-bar__trigger"
                            class=("tab-bar__trigger--active", is_active)
                            role="tab"
                            aria-selected=move || if is_active() { "true" } else { "false" }
                            data-value=tab.value()
                            on:click=move |_| ui.update(|u| u.select(tab))
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
