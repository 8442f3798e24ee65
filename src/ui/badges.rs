//! Domain badges: application status and student gender.

use leptos::prelude::*;

use crate::core::api::alumni::Gender;
use crate::core::api::intake::ApplicationStatus;
use crate::ui::common::{Badge, BadgeVariant};

/// Review-status pill with the Uzbek label.
#[component]
pub fn StatusBadge(status: ApplicationStatus) -> impl IntoView {
    let variant = match status {
        ApplicationStatus::New => BadgeVariant::Default,
        ApplicationStatus::Submitted => BadgeVariant::Info,
        ApplicationStatus::InProgress => BadgeVariant::Warning,
        ApplicationStatus::Approved => BadgeVariant::Success,
        ApplicationStatus::Rejected => BadgeVariant::Danger,
    };

    view! {
        <Badge variant=variant>{status.label()}</Badge>
    }
}

#[component]
pub fn GenderBadge(gender: Gender) -> impl IntoView {
    let variant = match gender {
        Gender::Male => BadgeVariant::Info,
        Gender::Female => BadgeVariant::Primary,
        Gender::Other | Gender::Unspecified => BadgeVariant::Outline,
    };

    view! {
        <Badge variant=variant>{gender.label()}</Badge>
    }
}
