//! Reusable message components for inline errors, success notices, and the
//! page-level error state with a retry control.

use crate::ui::common::button::{Button, ButtonVariant};
use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Error message component
/// Displays an error message with an alert icon
#[component]
pub fn ErrorMessage(
    /// Error signal - shows message when Some, hidden when None
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="error-message">
                <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                <span>{move || error.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// Success message component
/// Displays a success message with a check icon
#[component]
pub fn SuccessMessage(
    /// Success message signal - shows when Some, hidden when None
    #[prop(into)]
    message: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="success-message">
                <Icon name=icons::CHECK class="icon-text"/>
                <span>{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// Centered error block used when a page-level fetch fails; offers a manual
/// retry.
#[component]
pub fn ErrorState(
    /// Error text to display
    #[prop(into)]
    message: Signal<String>,
    /// Retry handler
    on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="error-state">
            <div class="error-state-icon">
                <Icon name=icons::ALERT_CIRCLE class="w-6 h-6"/>
            </div>
            <div class="text-center">
                <h3 class="error-state-title">"Xatolik yuz berdi"</h3>
                <p class="error-state-message">{move || message.get()}</p>
            </div>
            <Button variant=ButtonVariant::Secondary on_click=on_retry>
                "Qayta urinish"
            </Button>
        </div>
    }
}
