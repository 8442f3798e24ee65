//! Alumni survey response list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::core::api::alumni::{self, SurveyResponse};
use crate::core::api::catalog::ref_name;
use crate::core::format::{course_year_label, format_date};
use crate::ui::common::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardHeader, ErrorState,
    TableLoading,
};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn SurveysPage() -> impl IntoView {
    let surveys = RwSignal::new(Vec::<SurveyResponse>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let search = RwSignal::new(String::new());
    let reload = RwSignal::new(0u32);

    Effect::new(move |_| {
        reload.track();
        spawn_local(async move {
            loading.set(true);
            error.set(None);
            match alumni::list_surveys().await {
                Ok(page) => surveys.set(page.items),
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    });

    let filtered = Memo::new(move |_| {
        let query = search.get().to_lowercase();
        surveys
            .get()
            .into_iter()
            .filter(|survey| {
                if query.is_empty() {
                    return true;
                }
                let student = survey.student_details.as_ref();
                student
                    .map(|s| {
                        s.first_name.to_lowercase().contains(&query)
                            || s.last_name.to_lowercase().contains(&query)
                            || s.phone.contains(&query)
                    })
                    .unwrap_or(false)
                    || ref_name(survey.program_details.as_ref())
                        .to_lowercase()
                        .contains(&query)
                    || survey.employment_status.to_lowercase().contains(&query)
            })
            .collect::<Vec<_>>()
    });

    let total_line = Signal::derive(move || format!("Jami: {} ta javob", surveys.get().len()));

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="title-xl">"So'rovnomalar"</h1>
                    <p class="subtitle">"Alumni so'rovnomalari javoblari"</p>
                </div>
                <Button
                    variant=ButtonVariant::Secondary
                    size=ButtonSize::Small
                    icon=icons::REFRESH
                    on_click=Callback::new(move |_| reload.update(|n| *n += 1))
                >
                    "Yangilash"
                </Button>
            </div>

            <Card>
                <CardHeader title="Javoblar ro'yxati" description=total_line>
                    <div class="search-box">
                        <Icon name=icons::SEARCH class="search-box-icon"/>
                        <input
                            class="input-base pl-8"
                            placeholder="Qidirish..."
                            prop:value=move || search.get()
                            on:input=move |ev| search.set(event_target_value(&ev))
                        />
                    </div>
                </CardHeader>

                <div class="p-6 pt-0">
                    {move || {
                        if loading.get() {
                            view! { <TableLoading/> }.into_any()
                        } else if let Some(message) = error.get() {
                            view! {
                                <ErrorState
                                    message=message
                                    on_retry=Callback::new(move |_| reload.update(|n| *n += 1))
                                />
                            }.into_any()
                        } else {
                            view! {
                                <div class="table-wrapper">
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th>"Talaba"</th>
                                                <th>"Dastur"</th>
                                                <th>"Kurs"</th>
                                                <th>"Bandlik"</th>
                                                <th>"Holat"</th>
                                                <th>"Yuborilgan"</th>
                                                <th class="w-20">"Amal"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {
                                                let rows = filtered.get();
                                                if rows.is_empty() {
                                                    view! {
                                                        <tr>
                                                            <td colspan="7" class="table-empty">"Ma'lumot topilmadi"</td>
                                                        </tr>
                                                    }.into_any()
                                                } else {
                                                    rows.into_iter().map(|survey| {
                                                        let student_name = survey
                                                            .student_details
                                                            .as_ref()
                                                            .map(|s| s.full_name())
                                                            .unwrap_or_else(|| "-".to_string());
                                                        let employment = if survey.employment_status.is_empty() {
                                                            "-".to_string()
                                                        } else {
                                                            survey.employment_status.clone()
                                                        };
                                                        view! {
                                                            <tr>
                                                                <td class="font-medium">{student_name}</td>
                                                                <td>{ref_name(survey.program_details.as_ref())}</td>
                                                                <td>{course_year_label(survey.course_year)}</td>
                                                                <td>{employment}</td>
                                                                <td>
                                                                    {if survey.is_complete {
                                                                        view! { <Badge variant=BadgeVariant::Success>"To'liq"</Badge> }.into_any()
                                                                    } else {
                                                                        view! { <Badge variant=BadgeVariant::Warning>"Chala"</Badge> }.into_any()
                                                                    }}
                                                                </td>
                                                                <td>{format_date(survey.submitted_at.as_deref(), false)}</td>
                                                                <td>
                                                                    <A
                                                                        href=format!("/dashboard/surveys/{}", survey.id)
                                                                        attr:class="btn-icon"
                                                                    >
                                                                        <Icon name=icons::EYE class="h-4 w-4"/>
                                                                    </A>
                                                                </td>
                                                            </tr>
                                                        }
                                                    }).collect_view().into_any()
                                                }
                                            }
                                        </tbody>
                                    </table>
                                </div>
                            }.into_any()
                        }
                    }}
                </div>
            </Card>
        </div>
    }
}
