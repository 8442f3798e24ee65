use leptos::prelude::*;

/// Inline SVG icon loaded from the assets directory.
#[component]
pub fn Icon(
    /// Icon name (without the .svg extension)
    name: &'static str,
    /// CSS classes for sizing/coloring
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Icon names used across the dashboard.
#[allow(dead_code)]
pub mod icons {
    pub const SEARCH: &str = "search";
    pub const REFRESH: &str = "refresh";
    pub const PLUS: &str = "plus";
    pub const EDIT: &str = "edit";
    pub const TRASH: &str = "trash";
    pub const CHECK: &str = "check";
    pub const X: &str = "x";
    pub const EYE: &str = "eye";
    pub const EYE_CLOSED: &str = "eye-closed";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const LOADER: &str = "loader";
    pub const MENU: &str = "menu";
    pub const LOGOUT: &str = "logout";
    pub const LOCK: &str = "lock";
    pub const USER: &str = "user";
    pub const USERS: &str = "users";
    pub const HOME: &str = "home";
    pub const CLIPBOARD: &str = "clipboard";
    pub const GRADUATION: &str = "graduation";
    pub const BUILDING: &str = "building";
    pub const FLASK: &str = "flask";
    pub const BOOK: &str = "book";
    pub const CHART: &str = "chart";
    pub const FOLDER: &str = "folder";
    pub const SUN: &str = "sun";
    pub const MOON: &str = "moon";
}
