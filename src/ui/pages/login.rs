//! Login page.
//!
//! Standalone card outside the dashboard shell; redirects to the dashboard
//! once a session exists.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::ui::common::{ErrorMessage, InlineSpinner};
use crate::ui::icon::{Icon, icons};
use crate::ui::session::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let submitting = RwSignal::new(false);
    let form_error = RwSignal::new(None::<String>);

    // Already signed in: straight to the dashboard.
    Effect::new(move |_| {
        if session.user.get().is_some() {
            let navigate = use_navigate();
            navigate("/dashboard", Default::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get().trim().to_string();
        let password_val = password.get();
        if email_val.is_empty() || password_val.trim().is_empty() {
            form_error.set(Some("Login va parolni kiriting".to_string()));
            return;
        }

        form_error.set(None);
        submitting.set(true);

        spawn_local(async move {
            match session.login(&email_val, &password_val).await {
                Ok(()) => {
                    let navigate = use_navigate();
                    navigate("/dashboard", Default::default());
                }
                Err(message) => {
                    form_error.set(Some(message));
                    password.set(String::new());
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="login-screen">
            <div class="login-card card">
                <div class="text-center space-y-2 pb-4">
                    <div class="login-logo">
                        <Icon name=icons::LOCK class="h-10 w-10"/>
                    </div>
                    <h1 class="title-xl">"TTPU CRM"</h1>
                    <p class="subtitle">
                        "Tizimga kirish uchun login va parolingizni kiriting"
                    </p>
                </div>

                <form on:submit=on_submit class="space-y-5">
                    <ErrorMessage error=form_error/>

                    <div class="space-y-1.5">
                        <label for="email" class="label">"Login"</label>
                        <div class="relative">
                            <input
                                type="email"
                                id="email"
                                name="email"
                                autocomplete="username"
                                placeholder="Loginingizni kiriting"
                                class="input-base"
                                prop:value=move || email.get()
                                on:input=move |ev| {
                                    email.set(event_target_value(&ev));
                                    form_error.set(None);
                                }
                                disabled=move || submitting.get()
                            />
                        </div>
                    </div>

                    <div class="space-y-1.5">
                        <label for="password" class="label">"Parol"</label>
                        <div class="relative">
                            <input
                                type=move || if show_password.get() { "text" } else { "password" }
                                id="password"
                                name="password"
                                autocomplete="current-password"
                                placeholder="Parolingizni kiriting"
                                class="input-base pr-10"
                                prop:value=move || password.get()
                                on:input=move |ev| {
                                    password.set(event_target_value(&ev));
                                    form_error.set(None);
                                }
                                disabled=move || submitting.get()
                            />
                            <button
                                type="button"
                                class="input-trailing-button"
                                tabindex=-1
                                on:click=move |_| show_password.update(|v| *v = !*v)
                            >
                                {move || {
                                    if show_password.get() {
                                        view! { <Icon name=icons::EYE_CLOSED class="h-5 w-5"/> }.into_any()
                                    } else {
                                        view! { <Icon name=icons::EYE class="h-5 w-5"/> }.into_any()
                                    }
                                }}
                            </button>
                        </div>
                    </div>

                    <button
                        type="submit"
                        class="btn-base btn-primary w-full"
                        disabled=move || submitting.get()
                    >
                        {move || {
                            if submitting.get() {
                                view! {
                                    <span class="flex items-center justify-center gap-2">
                                        <InlineSpinner/>
                                        "Tekshirilmoqda..."
                                    </span>
                                }.into_any()
                            } else {
                                view! { <span class="block">"Kirish"</span> }.into_any()
                            }
                        }}
                    </button>

                    <p class="text-center text-xs text-theme-tertiary">
                        <kbd class="kbd">"Enter"</kbd>
                        " tugmasini bosish orqali ham kirishingiz mumkin"
                    </p>
                </form>
            </div>
        </div>
    }
}
