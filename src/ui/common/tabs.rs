use leptos::prelude::*;

/// Tab item definition
#[derive(Clone, PartialEq)]
pub struct TabItem {
    /// Unique identifier for the tab
    pub id: String,
    /// Display label for the tab
    pub label: String,
}

impl TabItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Tabs component for switching between content panels
#[component]
pub fn Tabs(
    /// List of tab items
    tabs: Vec<TabItem>,
    /// Currently active tab ID
    active_tab: ReadSignal<String>,
    /// Callback when tab is changed
    on_change: Callback<String>,
    /// Whether tabs should take full width
    #[prop(default = false)]
    full_width: bool,
) -> impl IntoView {
    let tabs_class = if full_width {
        "tabs-list tabs-full-width"
    } else {
        "tabs-list"
    };

    view! {
        <div class="tabs-container">
            <div class=tabs_class role="tablist">
                {tabs.into_iter().map(|tab| {
                    let tab_id = tab.id.clone();
                    let is_active = Signal::derive(move || active_tab.get() == tab_id);

                    let tab_class = move || {
                        if is_active.get() {
                            "tab-item tab-active"
                        } else {
                            "tab-item"
                        }
                    };

                    let tab_id_for_click = tab.id.clone();
                    view! {
                        <button
                            class=tab_class
                            on:click=move |_| on_change.run(tab_id_for_click.clone())
                            role="tab"
                            aria-selected=move || is_active.get().to_string()
                        >
                            <span class="tab-label">{tab.label}</span>
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
