use leptos::prelude::*;

/// Content card with border and padding, the basic page building block.
#[component]
pub fn Card(
    children: Children,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let full_classes = if class.is_empty() {
        "card".to_string()
    } else {
        format!("card {}", class)
    };

    view! {
        <div class=full_classes>
            {children()}
        </div>
    }
}

/// Card header row: title + description on the left, actions on the right.
#[component]
pub fn CardHeader(
    /// Card title
    #[prop(into)]
    title: String,
    /// Secondary line under the title
    #[prop(optional, into)]
    description: Option<Signal<String>>,
    /// Right-aligned slot (search box, buttons)
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="card-header">
            <div>
                <h3 class="title-lg">{title}</h3>
                {description.map(|text| view! {
                    <p class="subtitle">{move || text.get()}</p>
                })}
            </div>
            {children.map(|slot| view! {
                <div class="flex items-center gap-2">{slot()}</div>
            })}
        </div>
    }
}
