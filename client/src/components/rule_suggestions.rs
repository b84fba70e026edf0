//! AI rule suggestion intake: fetch button, spinner, and review cards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads a tasks/workers snapshot from `DataState`, stages results in
//! `SuggestionsState`, and moves accepted candidates into `RulesState`.
//! Card buttons capture the candidate's `SuggestionKey` at render time.

use leptos::prelude::*;

use crate::state::data::DataState;
use crate::state::rules::RulesState;
use crate::state::suggestions::{SuggestionKey, SuggestionsState};

/// Trigger button plus one review card per staged suggestion.
#[component]
pub fn RuleSuggestions() -> impl IntoView {
    let data = expect_context::<RwSignal<DataState>>();
    let rules = expect_context::<RwSignal<RulesState>>();
    let suggestions = expect_context::<RwSignal<SuggestionsState>>();

    let loading = move || suggestions.get().loading;

    let on_fetch = move |_| {
        let started = suggestions.try_update(SuggestionsState::begin_fetch).unwrap_or(false);
        if !started {
            return;
        }
        let request = data.with_untracked(DataState::suggestion_snapshot);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_rule_suggestions(&request).await;
            if let Err(e) = &result {
                log::warn!("rule suggestions: {e}");
            }
            let notice = suggestions
                .try_update(|s| s.finish_fetch(result))
                .flatten();
            if let Some(message) = notice {
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(message);
                }
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            suggestions.update(|s| {
                let _ = s.finish_fetch(Err(crate::net::api::FetchError::Network("not available on server".to_owned())));
            });
        }
    };

    // Both stores change inside one handler, with no await in between.
    let on_accept = move |key: SuggestionKey| {
        suggestions.update(|s| {
            rules.update(|r| {
                s.accept(key, r);
            });
        });
    };

    let on_dismiss = move |key: SuggestionKey| {
        suggestions.update(|s| {
            s.dismiss(key);
        });
    };

    view! {
        <div class="rule-suggestions">
            <div class="rule-suggestions__bar">
                <button class="btn btn--primary" on:click=on_fetch disabled=loading>
                    {move || if loading() { "Loading..." } else { "Get AI Rule Suggestions" }}
                </button>
                <Show when=loading>
                    <span class="rule-suggestions__spinner" aria-hidden="true"></span>
                </Show>
            </div>
            {move || {
                suggestions
                    .get()
                    .staged()
                    .iter()
                    .map(|staged| {
                        let key = staged.key;
                        let name = staged.rule.name.clone();
                        let description = staged.rule.description.clone();
                        let kind = staged.rule.kind.clone();
                        view! {
                            <div class="card suggestion-card">
                                <div class="suggestion-card__name">{name}</div>
                                <div class="suggestion-card__kind">{kind}</div>
                                <div class="suggestion-card__description">{description}</div>
                                <button class="btn btn--small" on:click=move |_| on_accept(key)>
                                    "Add to rules"
                                </button>
                                <button class="btn btn--ghost btn--small" on:click=move |_| on_dismiss(key)>
                                    "Dismiss"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
