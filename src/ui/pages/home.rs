//! Overview page: one card per intake channel with its application count.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::core::api::{alumni, intake};
use crate::ui::icon::{Icon, icons};

#[derive(Clone, Copy, Default)]
struct ChannelCounts {
    admissions: u64,
    campus: u64,
    academy: u64,
    foundation: u64,
    surveys: u64,
}

#[component]
pub fn HomePage() -> impl IntoView {
    let counts = RwSignal::new(ChannelCounts::default());
    let loading = RwSignal::new(true);

    Effect::new(move |_| {
        spawn_local(async move {
            loading.set(true);

            let (admissions, campus, academy, foundation, surveys) = futures::join!(
                intake::list_admissions(),
                intake::list_campus_tours(),
                intake::list_academy(),
                intake::list_foundation(),
                alumni::list_surveys(),
            );

            // Failed counters stay at zero; the per-channel pages surface
            // their own errors with a retry.
            counts.set(ChannelCounts {
                admissions: admissions.map(|p| p.count).unwrap_or(0),
                campus: campus.map(|p| p.count).unwrap_or(0),
                academy: academy.map(|p| p.count).unwrap_or(0),
                foundation: foundation.map(|p| p.count).unwrap_or(0),
                surveys: surveys.map(|p| p.count).unwrap_or(0),
            });
            loading.set(false);
        });
    });

    let cards = move || {
        let current = counts.get();
        vec![
            (
                "Qabul 2026",
                "Talabalar qabuli arizalari",
                current.admissions,
                icons::GRADUATION,
                "/dashboard/applications/admissions",
            ),
            (
                "Campus Tour",
                "Kampus sayohati so'rovlari",
                current.campus,
                icons::BUILDING,
                "/dashboard/applications/campus",
            ),
            (
                "Polito Academy",
                "Polito Academy arizalari",
                current.academy,
                icons::FLASK,
                "/dashboard/applications/academy",
            ),
            (
                "Foundation Year",
                "Tayyorlov yili arizalari",
                current.foundation,
                icons::BOOK,
                "/dashboard/applications/foundation",
            ),
            (
                "So'rovnomalar",
                "Alumni so'rovnomalari",
                current.surveys,
                icons::USERS,
                "/dashboard/surveys",
            ),
        ]
    };

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="title-xl">"Bosh sahifa"</h1>
                <p class="subtitle">"TTPU CRM tizimiga xush kelibsiz"</p>
            </div>

            <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3">
                {move || cards().into_iter().map(|(title, description, count, icon, href)| view! {
                    <A href=href attr:class="stat-card card">
                        <div class="flex items-center justify-between pb-2">
                            <span class="text-sm font-medium text-theme-primary">{title}</span>
                            <div class="stat-card-icon">
                                <Icon name=icon class="h-4 w-4"/>
                            </div>
                        </div>
                        <div class="text-2xl font-bold text-theme-primary">
                            {move || if loading.get() { "...".to_string() } else { count.to_string() }}
                        </div>
                        <p class="text-xs text-theme-tertiary">{description}</p>
                        <div class="mt-3 flex items-center gap-1 text-xs text-accent-primary">
                            "Batafsil"
                            <Icon name=icons::ARROW_RIGHT class="h-3 w-3"/>
                        </div>
                    </A>
                }).collect_view()}
            </div>
        </div>
    }
}
