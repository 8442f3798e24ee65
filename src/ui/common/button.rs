use crate::ui::icon::Icon;
use leptos::prelude::*;

/// Button variant types
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Danger,
    Ghost,
}

/// Button size options
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonSize {
    Small,
    Medium,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Danger => "btn-danger",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "btn-sm",
            ButtonSize::Medium => "",
        }
    }
}

/// Type-safe button component with variants and sizes
#[component]
pub fn Button(
    /// Button variant style
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size
    #[prop(default = ButtonSize::Medium)]
    size: ButtonSize,
    /// Click handler
    on_click: Callback<()>,
    /// Whether button is disabled
    #[prop(default = false)]
    disabled: bool,
    /// Whether button is in loading state
    #[prop(default = false)]
    loading: bool,
    /// Button content (text or elements)
    children: Children,
    /// Optional icon name to show before text
    #[prop(optional)]
    icon: Option<&'static str>,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let base_classes = format!("btn-base {} {}", variant.class(), size.class());
    let full_classes = if class.is_empty() {
        base_classes
    } else {
        format!("{} {}", base_classes, class)
    };

    let is_disabled = disabled || loading;

    view! {
        <button
            class=full_classes
            on:click=move |_| {
                if !loading {
                    on_click.run(())
                }
            }
            disabled=is_disabled
        >
            {move || if loading {
                view! {
                    <span class="btn-spinner">
                        <Icon name="loader" class="icon-spin"/>
                    </span>
                }.into_any()
            } else if let Some(icon_name) = icon {
                view! {
                    <Icon name=icon_name class="icon-btn"/>
                }.into_any()
            } else {
                ().into_any()
            }}
            {children()}
        </button>
    }
}

/// Icon-only button component
#[component]
pub fn IconButton(
    /// Icon name to display
    icon: &'static str,
    /// Click handler
    on_click: Callback<()>,
    /// Whether button is disabled
    #[prop(default = false)]
    disabled: bool,
    /// Optional title/tooltip (recommended for accessibility)
    #[prop(optional)]
    title: Option<String>,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let full_classes = if class.is_empty() {
        "btn-icon".to_string()
    } else {
        format!("btn-icon {}", class)
    };

    let aria_label = title.clone();

    view! {
        <button
            class=full_classes
            on:click=move |_| on_click.run(())
            disabled=disabled
            title=title
            aria-label=aria_label
        >
            <Icon name=icon class="icon-standalone"/>
        </button>
    }
}
