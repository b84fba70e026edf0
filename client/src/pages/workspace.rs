//! Data validation workspace: header, tab bar, and one panel per tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It composes collaborator slots around the shared
//! stores and hosts the rule suggestion intake on the rules tab.

use leptos::prelude::*;

use crate::components::entity_summary::EntitySummary;
use crate::components::natural_language_input::NaturalLanguageInput;
use crate::components::panel_card::PanelCard;
use crate::components::rule_list::RuleList;
use crate::components::rule_suggestions::RuleSuggestions;
use crate::components::tab_bar::TabBar;
use crate::state::ui::{PageType, Tab, UiState};

/// Workspace page rendering the active tab's panels.
#[component]
pub fn WorkspacePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let active_tab = move || ui.get().active_tab;

    view! {
        <div class="workspace">
            <header class="workspace__header">
                <h1>"Data Validation & Processing App"</h1>
                <p class="workspace__subtitle">
                    "Upload, validate, and process your CSV/XLSX data with custom rules"
                </p>
            </header>
            <TabBar/>
            <div class="workspace__panel" data-tab=move || active_tab().value()>
                {move || tab_panel(active_tab())}
            </div>
        </div>
    }
}

fn tab_panel(tab: Tab) -> AnyView {
    match tab {
        Tab::Upload => view! {
            <PanelCard
                title="File Upload & Parser"
                description="Upload your CSV or XLSX files for clients, workers, and tasks"
            >
                <EntitySummary/>
            </PanelCard>
        }
        .into_any(),
        Tab::Grid => view! {
            <PanelCard>
                <NaturalLanguageInput page_type=PageType::Grid/>
            </PanelCard>
            <PanelCard title="Editable Data Grid" description="View and edit your data with inline validation">
                <EntitySummary/>
            </PanelCard>
        }
        .into_any(),
        Tab::Validation => view! {
            <PanelCard title="Validation Summary" description="Review all validation errors and issues">
                <EntitySummary/>
            </PanelCard>
        }
        .into_any(),
        Tab::Rules => view! {
            <PanelCard>
                <NaturalLanguageInput page_type=PageType::Rules/>
                <RuleSuggestions/>
            </PanelCard>
            <PanelCard
                title="Rule Builder"
                description="Create custom rules for co-run tasks, load limits, and slot restrictions"
            >
                <RuleList/>
            </PanelCard>
        }
        .into_any(),
        Tab::Priority => view! {
            <PanelCard title="Prioritization Panel" description="Set weights and priorities for task scheduling">
                <EntitySummary/>
            </PanelCard>
        }
        .into_any(),
        Tab::Export => view! {
            <PanelCard title="Export Data" description="Export cleaned data and rules configuration">
                <EntitySummary/>
                <RuleList/>
            </PanelCard>
        }
        .into_any(),
    }
}
