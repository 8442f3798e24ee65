use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

/// Full-height centered spinner for initial page loads.
#[component]
pub fn PageLoading() -> impl IntoView {
    view! {
        <div class="loading-page" role="status" aria-live="polite">
            <Icon name=icons::LOADER class="w-8 h-8 icon-spin"/>
            <span class="sr-only">"Yuklanmoqda..."</span>
        </div>
    }
}

/// Compact spinner shown in place of a table body.
#[component]
pub fn TableLoading() -> impl IntoView {
    view! {
        <div class="loading-table" role="status" aria-live="polite">
            <Icon name=icons::LOADER class="w-6 h-6 icon-spin"/>
            <span class="sr-only">"Yuklanmoqda..."</span>
        </div>
    }
}

/// Inline spinner for buttons or text.
#[component]
pub fn InlineSpinner(
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let full_classes = if class.is_empty() {
        "icon-spin w-4 h-4".to_string()
    } else {
        format!("icon-spin w-4 h-4 {}", class)
    };

    view! {
        <span class="spinner-inline">
            <img src="/icons/loader.svg" class=full_classes alt="" draggable=false/>
        </span>
    }
}
