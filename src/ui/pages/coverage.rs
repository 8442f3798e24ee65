//! Survey coverage report: campaign totals plus per-course-year and
//! per-program breakdowns, filterable by academic year.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::api::analytics::{self, EnrollmentOverview};
use crate::core::format::{course_year_label, format_percent};
use crate::ui::common::{
    Button, ButtonSize, ButtonVariant, Card, CardHeader, ErrorState, PageLoading,
};
use crate::ui::icon::icons;

#[component]
pub fn CoveragePage() -> impl IntoView {
    let overview = RwSignal::new(None::<EnrollmentOverview>);
    let academic_years = RwSignal::new(Vec::<String>::new());
    let selected_year = RwSignal::new(String::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let reload = RwSignal::new(0u32);

    // The year list is fetched once; the overview refetches per selection.
    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(years) = analytics::academic_years().await {
                academic_years.set(years);
            }
        });
    });

    Effect::new(move |_| {
        reload.track();
        let year = selected_year.get();
        spawn_local(async move {
            loading.set(true);
            error.set(None);
            let filter = (!year.is_empty()).then_some(year.as_str());
            match analytics::enrollment_overview(filter).await {
                Ok(data) => overview.set(Some(data)),
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    });

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="title-xl">"Qamrov hisoboti"</h1>
                    <p class="subtitle">"Talabalar soni va so'rovnoma qamrovi"</p>
                </div>
                <div class="flex items-center gap-2">
                    <select
                        class="select-base"
                        prop:value=move || selected_year.get()
                        on:change=move |ev| selected_year.set(event_target_value(&ev))
                    >
                        <option value="">"Barcha o'quv yillari"</option>
                        {move || academic_years.get().into_iter().map(|year| view! {
                            <option value=year.clone()>{year.clone()}</option>
                        }).collect_view()}
                    </select>
                    <Button
                        variant=ButtonVariant::Secondary
                        size=ButtonSize::Small
                        icon=icons::REFRESH
                        on_click=Callback::new(move |_| reload.update(|n| *n += 1))
                    >
                        "Yangilash"
                    </Button>
                </div>
            </div>

            {move || {
                if loading.get() {
                    view! { <PageLoading/> }.into_any()
                } else if let Some(message) = error.get() {
                    view! {
                        <ErrorState
                            message=message
                            on_retry=Callback::new(move |_| reload.update(|n| *n += 1))
                        />
                    }.into_any()
                } else if let Some(data) = overview.get() {
                    view! { <CoverageReport overview=data/> }.into_any()
                } else {
                    ().into_any()
                }
            }}
        </div>
    }
}

#[component]
fn CoverageReport(overview: EnrollmentOverview) -> impl IntoView {
    let totals = [
        ("Jami talabalar", overview.total_students.to_string()),
        ("Javob berganlar", overview.total_responded.to_string()),
        ("Qamrov", format_percent(overview.coverage_percent)),
    ];
    let by_year = overview.by_year;
    let by_program = overview.by_program;

    view! {
        <div class="space-y-6">
            <div class="grid gap-4 md:grid-cols-3">
                {totals.into_iter().map(|(label, value)| view! {
                    <div class="stat-card card">
                        <p class="text-sm font-medium text-theme-tertiary">{label}</p>
                        <p class="text-2xl font-bold text-theme-primary">{value}</p>
                    </div>
                }).collect_view()}
            </div>

            <Card>
                <CardHeader title="Kurslar bo'yicha qamrov"/>
                <div class="p-6 pt-0">
                    <div class="table-wrapper">
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Kurs"</th>
                                    <th>"Jami"</th>
                                    <th>"Javob berganlar"</th>
                                    <th>"Qamrov"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {if by_year.is_empty() {
                                    view! {
                                        <tr>
                                            <td colspan="4" class="table-empty">"Ma'lumot topilmadi"</td>
                                        </tr>
                                    }.into_any()
                                } else {
                                    by_year.into_iter().map(|row| view! {
                                        <tr>
                                            <td class="font-medium">{course_year_label(row.course_year)}</td>
                                            <td>{row.total}</td>
                                            <td>{row.responded}</td>
                                            <td>{format_percent(row.coverage_percent)}</td>
                                        </tr>
                                    }).collect_view().into_any()
                                }}
                            </tbody>
                        </table>
                    </div>
                </div>
            </Card>

            <Card>
                <CardHeader title="Dasturlar bo'yicha qamrov"/>
                <div class="p-6 pt-0">
                    <div class="table-wrapper">
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Dastur"</th>
                                    <th>"Kurs"</th>
                                    <th>"Jami"</th>
                                    <th>"Javob berganlar"</th>
                                    <th>"Qamrov"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {if by_program.is_empty() {
                                    view! {
                                        <tr>
                                            <td colspan="5" class="table-empty">"Ma'lumot topilmadi"</td>
                                        </tr>
                                    }.into_any()
                                } else {
                                    by_program.into_iter().map(|row| view! {
                                        <tr>
                                            <td class="font-medium">{row.program_name.clone()}</td>
                                            <td>{course_year_label(row.course_year)}</td>
                                            <td>{row.total}</td>
                                            <td>{row.responded}</td>
                                            <td>{format_percent(row.coverage_percent)}</td>
                                        </tr>
                                    }).collect_view().into_any()
                                }}
                            </tbody>
                        </table>
                    </div>
                </div>
            </Card>
        </div>
    }
}
