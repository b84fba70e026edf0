//! Accepted rules, newest last.

use leptos::prelude::*;

use crate::state::rules::RulesState;

/// Read-only listing of the rule store.
#[component]
pub fn RuleList() -> impl IntoView {
    let rules = expect_context::<RwSignal<RulesState>>();

    view! {
        <div class="rule-list">
            <Show
                when=move || !rules.with(RulesState::is_empty)
                fallback=|| view! { <p class="rule-list__empty">"No rules yet."</p> }
            >
                {move || {
                    rules
                        .get()
                        .rules
                        .into_iter()
                        .map(|rule| {
                            view! {
                                <div class="rule-list__item" data-id=rule.id>
                                    <span class="rule-list__name">{rule.name}</span>
                                    <span class="rule-list__kind">{rule.kind}</span>
                                    <span class="rule-list__description">{rule.description}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </Show>
        </div>
    }
}
