//! Dashboard shell: sidebar navigation, header, and the signed-in user
//! block with logout. Rendered as the parent route of every dashboard page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{A, Outlet};
use leptos_router::hooks::use_location;

use crate::ui::icon::{Icon, icons};
use crate::ui::session::use_session;
use crate::ui::theme::use_theme_context;

struct NavItem {
    title: &'static str,
    href: &'static str,
    icon: &'static str,
}

const NAV_APPLICATIONS: &[NavItem] = &[
    NavItem {
        title: "Qabul 2026",
        href: "/dashboard/applications/admissions",
        icon: icons::GRADUATION,
    },
    NavItem {
        title: "Campus Tour",
        href: "/dashboard/applications/campus",
        icon: icons::BUILDING,
    },
    NavItem {
        title: "Polito Academy",
        href: "/dashboard/applications/academy",
        icon: icons::FLASK,
    },
    NavItem {
        title: "Foundation Year",
        href: "/dashboard/applications/foundation",
        icon: icons::BOOK,
    },
];

const NAV_SECTIONS: &[NavItem] = &[
    NavItem {
        title: "So'rovnomalar",
        href: "/dashboard/surveys",
        icon: icons::USERS,
    },
    NavItem {
        title: "Talabalar",
        href: "/dashboard/students",
        icon: icons::USER,
    },
    NavItem {
        title: "Talabalar soni",
        href: "/dashboard/enrollments",
        icon: icons::CLIPBOARD,
    },
    NavItem {
        title: "Analitika",
        href: "/dashboard/analytics",
        icon: icons::CHART,
    },
    NavItem {
        title: "Katalog",
        href: "/dashboard/catalog",
        icon: icons::FOLDER,
    },
];

/// Parent layout for every `/dashboard` route.
#[component]
pub fn DashboardShell() -> impl IntoView {
    let theme = use_theme_context();

    view! {
        <div class="flex min-h-screen bg-theme-primary">
            <aside class="sidebar hidden lg:flex flex-col w-64 shrink-0 border-r border-theme">
                <div class="flex h-16 items-center gap-3 border-b border-theme px-6">
                    <div class="flex h-9 w-9 items-center justify-center rounded-lg bg-accent-primary">
                        <Icon name=icons::HOME class="h-5 w-5"/>
                    </div>
                    <div>
                        <p class="text-xs font-medium text-theme-tertiary">"TTPU CRM"</p>
                        <p class="text-sm font-semibold text-theme-primary">"Dashboard"</p>
                    </div>
                </div>

                <nav class="flex-1 space-y-1 overflow-y-auto p-4">
                    <NavLink title="Bosh sahifa" href="/dashboard" icon=icons::HOME exact=true/>

                    <div class="nav-group">
                        <p class="nav-group-title">"Arizalar"</p>
                        {NAV_APPLICATIONS.iter().map(|item| view! {
                            <NavLink title=item.title href=item.href icon=item.icon/>
                        }).collect_view()}
                    </div>

                    {NAV_SECTIONS.iter().map(|item| view! {
                        <NavLink title=item.title href=item.href icon=item.icon/>
                    }).collect_view()}
                </nav>

                <UserBlock/>
            </aside>

            <div class="flex flex-1 flex-col">
                <header class="flex h-16 items-center justify-between gap-4 border-b border-theme px-4">
                    <div class="flex items-center gap-2 lg:hidden">
                        <Icon name=icons::HOME class="h-5 w-5"/>
                        <span class="font-semibold text-theme-primary">"TTPU CRM"</span>
                    </div>
                    <div class="flex flex-1 items-center justify-end gap-2">
                        <button
                            class="btn-icon"
                            on:click=move |_| theme.toggle()
                            title="Mavzuni almashtirish"
                        >
                            {move || {
                                if theme.is_dark() {
                                    view! { <Icon name=icons::SUN class="w-5 h-5"/> }
                                } else {
                                    view! { <Icon name=icons::MOON class="w-5 h-5"/> }
                                }
                            }}
                        </button>
                    </div>
                </header>

                <main class="flex-1 overflow-y-auto p-6">
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}

/// Sidebar link with active-route highlighting.
#[component]
fn NavLink(
    title: &'static str,
    href: &'static str,
    icon: &'static str,
    /// Match the path exactly instead of by prefix
    #[prop(default = false)]
    exact: bool,
) -> impl IntoView {
    let location = use_location();
    let is_active = Signal::derive(move || {
        let path = location.pathname.get();
        if exact {
            path == href
        } else {
            path == href || path.starts_with(&format!("{href}/"))
        }
    });

    view! {
        <A
            href=href
            attr:class=move || {
                if is_active.get() {
                    "nav-link nav-link-active"
                } else {
                    "nav-link"
                }
            }
        >
            <Icon name=icon class="h-4 w-4 shrink-0"/>
            <span>{title}</span>
        </A>
    }
}

/// Signed-in user summary with the logout action.
#[component]
fn UserBlock() -> impl IntoView {
    let session = use_session();
    let logging_out = RwSignal::new(false);
    let logout_error = RwSignal::new(None::<String>);

    let handle_logout = move |_| {
        if logging_out.get_untracked() {
            return;
        }
        logging_out.set(true);
        spawn_local(async move {
            let result = session.logout().await;
            if let Some(error) = result.error {
                logout_error.set(Some(error));
            }
            logging_out.set(false);
        });
    };

    view! {
        <div class="border-t border-theme p-4 space-y-2">
            {move || session.user.get().map(|user| {
                let initial = user
                    .email
                    .chars()
                    .next()
                    .unwrap_or('U')
                    .to_uppercase()
                    .to_string();
                view! {
                    <div class="flex items-center gap-3 px-2">
                        <div class="avatar">{initial}</div>
                        <div class="flex-1 min-w-0">
                            <p class="text-sm font-medium text-theme-primary truncate">
                                {user.display_name()}
                            </p>
                            <p class="text-xs text-theme-tertiary">{user.role.to_string()}</p>
                        </div>
                    </div>
                }
            })}

            {move || logout_error.get().map(|error| view! {
                <p class="text-xs text-theme-error px-2">{error}</p>
            })}

            <button
                class="nav-link w-full text-theme-error"
                on:click=handle_logout
                disabled=move || logging_out.get()
            >
                <Icon name=icons::LOGOUT class="h-4 w-4"/>
                <span>
                    {move || if logging_out.get() { "Chiqilmoqda..." } else { "Chiqish" }}
                </span>
            </button>
        </div>
    }
}
