use leptos::prelude::*;

/// Badge variant types for labels and status indicators
#[derive(Clone, Copy, PartialEq)]
pub enum BadgeVariant {
    /// Default neutral badge
    Default,
    /// Primary color badge
    Primary,
    /// Success/positive badge (green)
    Success,
    /// Warning badge (yellow/orange)
    Warning,
    /// Danger/error badge (red)
    Danger,
    /// Info badge (blue)
    Info,
    /// Outline variant
    Outline,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge-default",
            BadgeVariant::Primary => "badge-primary",
            BadgeVariant::Success => "badge-success",
            BadgeVariant::Warning => "badge-warning",
            BadgeVariant::Danger => "badge-danger",
            BadgeVariant::Info => "badge-info",
            BadgeVariant::Outline => "badge-outline",
        }
    }
}

/// Small pill label.
#[component]
pub fn Badge(
    /// Badge content (text or number)
    children: Children,
    /// Visual variant
    #[prop(default = BadgeVariant::Default)]
    variant: BadgeVariant,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
    /// Optional title/tooltip
    #[prop(optional)]
    title: Option<String>,
) -> impl IntoView {
    let full_classes = if class.is_empty() {
        format!("badge {}", variant.class())
    } else {
        format!("badge {} {}", variant.class(), class)
    };

    view! {
        <span class=full_classes title=title>
            {children()}
        </span>
    }
}
