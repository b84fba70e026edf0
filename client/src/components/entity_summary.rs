//! Row counts and identifiers for the uploaded sheets.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stands in the upload, grid, validation, priority, and export slots so each
//! tab reflects the shared `DataState` it operates on.

use leptos::prelude::*;

use crate::net::types::EntityKind;
use crate::state::data::DataState;

const PREVIEW_IDS: usize = 8;

/// One line per sheet: label, row count, and the first few IDs.
#[component]
pub fn EntitySummary() -> impl IntoView {
    let data = expect_context::<RwSignal<DataState>>();

    view! {
        <div class="entity-summary">
            <Show
                when=move || !data.with(DataState::is_empty)
                fallback=|| view! { <p class="entity-summary__empty">"No data uploaded yet."</p> }
            >
                {[EntityKind::Client, EntityKind::Worker, EntityKind::Task]
                    .into_iter()
                    .map(|kind| {
                        let count = move || data.with(|d| d.rows(kind).len());
                        let ids = move || {
                            data.with(|d| {
                                d.rows(kind)
                                    .iter()
                                    .filter_map(|row| row.id(kind))
                                    .take(PREVIEW_IDS)
                                    .collect::<Vec<_>>()
                                    .join(", ")
                            })
                        };
                        view! {
                            <div class="entity-summary__row">
                                <span class="entity-summary__label">{kind.label()}</span>
                                <span class="entity-summary__count">{count}</span>
                                <span class="entity-summary__ids">{ids}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </Show>
        </div>
    }
}
