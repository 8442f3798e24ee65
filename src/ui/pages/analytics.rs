//! Analytics hub: category cards linking to the reports.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let categories = [
        (
            "Qamrov hisoboti",
            "Talabalar soni va so'rovnoma qamrovi",
            icons::CHART,
            "/dashboard/analytics/coverage",
        ),
        (
            "So'rovnomalar",
            "Alumni so'rovnomalari javoblari",
            icons::USERS,
            "/dashboard/surveys",
        ),
        (
            "Talabalar soni",
            "Dasturlar bo'yicha jami talabalar",
            icons::CLIPBOARD,
            "/dashboard/enrollments",
        ),
    ];

    view! {
        <div class="space-y-6">
            <div class="flex items-center gap-3">
                <Icon name=icons::CHART class="h-8 w-8"/>
                <div>
                    <h1 class="title-xl">"Analitika"</h1>
                    <p class="subtitle">"Barcha bo'limlar bo'yicha statistika va tahlillar"</p>
                </div>
            </div>

            <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                {categories.into_iter().map(|(title, description, icon, href)| view! {
                    <A href=href attr:class="stat-card card">
                        <div class="flex items-start justify-between">
                            <div class="stat-card-icon">
                                <Icon name=icon class="h-6 w-6"/>
                            </div>
                            <Icon name=icons::ARROW_RIGHT class="h-5 w-5"/>
                        </div>
                        <h3 class="title-lg mt-4">{title}</h3>
                        <p class="subtitle">{description}</p>
                        <p class="text-sm text-theme-tertiary mt-3">
                            "Batafsil ma'lumot uchun bosing"
                        </p>
                    </A>
                }).collect_view()}
            </div>

            <div class="card">
                <div class="card-header">
                    <h3 class="title-lg">"Analitika haqida"</h3>
                </div>
                <div class="p-6 space-y-3">
                    <p class="text-sm text-theme-secondary">
                        "Ushbu bo'limda siz turli xil statistik ma'lumotlarni ko'rishingiz mumkin:"
                    </p>
                    <ul class="space-y-2 text-sm text-theme-secondary list-disc list-inside">
                        <li>"Arizalar soni va dinamikasi"</li>
                        <li>"Talabalar so'rovnomasi va bandlik ma'lumotlari"</li>
                        <li>"Qamrov va ishtirok foizlari"</li>
                    </ul>
                </div>
            </div>
        </div>
    }
}
