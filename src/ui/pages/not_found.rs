//! 404 page.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center gap-4 bg-theme-primary">
            <h1 class="text-6xl font-bold text-theme-primary">"404"</h1>
            <p class="text-theme-secondary">"Sahifa topilmadi"</p>
            <A href="/dashboard" attr:class="btn-base btn-primary">
                "Bosh sahifaga qaytish"
            </A>
        </div>
    }
}
