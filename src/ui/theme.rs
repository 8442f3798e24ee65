//! Light/dark theme context with localStorage persistence.

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

const THEME_STORAGE_KEY: &str = "ttpu-crm-theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    #[cfg(not(feature = "ssr"))]
    fn from_str(value: &str) -> Self {
        match value {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub mode: RwSignal<ThemeMode>,
}

impl ThemeContext {
    pub fn is_dark(&self) -> bool {
        self.mode.get() == ThemeMode::Dark
    }

    pub fn toggle(&self) {
        let next = match self.mode.get_untracked() {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        };
        self.mode.set(next);
        persist_theme(next);
        apply_theme_class(next);
    }
}

/// Stored preference, falling back to the system color scheme.
#[cfg(not(feature = "ssr"))]
fn initial_mode() -> ThemeMode {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(value)) = storage.get_item(THEME_STORAGE_KEY) {
                return ThemeMode::from_str(&value);
            }
        }
        if let Ok(Some(media_query)) = window.match_media("(prefers-color-scheme: dark)") {
            if media_query.matches() {
                return ThemeMode::Dark;
            }
        }
    }
    ThemeMode::Light
}

fn persist_theme(mode: ThemeMode) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(THEME_STORAGE_KEY, mode.as_str());
            }
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = mode;
    }
}

/// Tailwind's dark variant keys off a `dark` class on `<html>`.
fn apply_theme_class(mode: ThemeMode) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(html) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let class_list = html.class_list();
            if mode == ThemeMode::Dark {
                let _ = class_list.add_1("dark");
            } else {
                let _ = class_list.remove_1("dark");
            }
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = mode;
    }
}

pub fn provide_theme_context() -> ThemeContext {
    let ctx = ThemeContext {
        mode: RwSignal::new(ThemeMode::default()),
    };

    // Resolve the stored preference after hydration to avoid a server/client
    // markup mismatch.
    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        let mode = initial_mode();
        ctx.mode.set(mode);
        apply_theme_class(mode);
    });

    provide_context(ctx);
    ctx
}

pub fn use_theme_context() -> ThemeContext {
    expect_context::<ThemeContext>()
}
