//! Single survey response: student card, employment block, raw answers.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use serde_json::Value;

use crate::core::api::alumni::{self, SurveyResponse};
use crate::core::api::catalog::ref_name;
use crate::core::format::{course_year_label, format_date, format_uz_phone};
use crate::ui::badges::GenderBadge;
use crate::ui::common::{Badge, BadgeVariant, Card, CardHeader, ErrorState, PageLoading};

#[component]
pub fn SurveyDetailPage() -> impl IntoView {
    let params = use_params_map();
    let survey = RwSignal::new(None::<SurveyResponse>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let reload = RwSignal::new(0u32);

    Effect::new(move |_| {
        reload.track();
        let Some(id) = params.read().get("id") else {
            error.set(Some("So'rovnoma topilmadi".to_string()));
            loading.set(false);
            return;
        };

        spawn_local(async move {
            loading.set(true);
            error.set(None);
            match alumni::get_survey(&id).await {
                Ok(response) => survey.set(Some(response)),
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    });

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="title-xl">"So'rovnoma"</h1>
                <p class="subtitle">"Javob tafsilotlari"</p>
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
                } else if let Some(response) = survey.get() {
                    view! { <SurveyDetail survey=response/> }.into_any()
                } else {
                    ().into_any()
                }
            }}
        </div>
    }
}

#[component]
fn SurveyDetail(survey: SurveyResponse) -> impl IntoView {
    let student = survey.student_details.clone();
    let answers = survey.answers.clone();

    view! {
        <div class="grid gap-6 lg:grid-cols-2">
            <Card>
                <CardHeader title="Talaba"/>
                <div class="p-6 pt-0">
                    <dl class="detail-list">
                        <div class="detail-row">
                            <dt>"Ism Familiya"</dt>
                            <dd class="font-medium">
                                {student
                                    .as_ref()
                                    .map(|s| s.full_name())
                                    .unwrap_or_else(|| "-".to_string())}
                            </dd>
                        </div>
                        <div class="detail-row">
                            <dt>"Telefon"</dt>
                            <dd>{format_uz_phone(student.as_ref().map(|s| s.phone.as_str()))}</dd>
                        </div>
                        <div class="detail-row">
                            <dt>"Jins"</dt>
                            <dd>
                                {student
                                    .as_ref()
                                    .map(|s| view! { <GenderBadge gender=s.gender/> })}
                            </dd>
                        </div>
                        <div class="detail-row">
                            <dt>"Tug'ilgan sana"</dt>
                            <dd>
                                {format_date(
                                    student.as_ref().and_then(|s| s.birth_date.as_deref()),
                                    false,
                                )}
                            </dd>
                        </div>
                        <div class="detail-row">
                            <dt>"Hudud"</dt>
                            <dd>{ref_name(student.as_ref().and_then(|s| s.region_details.as_ref()))}</dd>
                        </div>
                    </dl>
                </div>
            </Card>

            <Card>
                <CardHeader title="So'rovnoma"/>
                <div class="p-6 pt-0">
                    <dl class="detail-list">
                        <div class="detail-row">
                            <dt>"Dastur"</dt>
                            <dd>{ref_name(survey.program_details.as_ref())}</dd>
                        </div>
                        <div class="detail-row">
                            <dt>"Kurs"</dt>
                            <dd>{course_year_label(survey.course_year)}</dd>
                        </div>
                        <div class="detail-row">
                            <dt>"Kampaniya"</dt>
                            <dd>
                                {if survey.survey_campaign.is_empty() {
                                    "-".to_string()
                                } else {
                                    survey.survey_campaign.clone()
                                }}
                            </dd>
                        </div>
                        <div class="detail-row">
                            <dt>"Holat"</dt>
                            <dd>
                                {if survey.is_complete {
                                    view! { <Badge variant=BadgeVariant::Success>"To'liq"</Badge> }.into_any()
                                } else {
                                    view! { <Badge variant=BadgeVariant::Warning>"Chala"</Badge> }.into_any()
                                }}
                            </dd>
                        </div>
                        <div class="detail-row">
                            <dt>"Yuborilgan"</dt>
                            <dd>{format_date(survey.submitted_at.as_deref(), true)}</dd>
                        </div>
                    </dl>
                </div>
            </Card>

            <Card>
                <CardHeader title="Bandlik"/>
                <div class="p-6 pt-0">
                    <dl class="detail-list">
                        <div class="detail-row">
                            <dt>"Holati"</dt>
                            <dd>{text_or_dash(&survey.employment_status)}</dd>
                        </div>
                        <div class="detail-row">
                            <dt>"Kompaniya"</dt>
                            <dd>{text_or_dash(&survey.employment_company)}</dd>
                        </div>
                        <div class="detail-row">
                            <dt>"Lavozim"</dt>
                            <dd>{text_or_dash(&survey.employment_role)}</dd>
                        </div>
                        <div class="detail-row">
                            <dt>"Takliflar"</dt>
                            <dd>{text_or_dash(&survey.suggestions)}</dd>
                        </div>
                    </dl>
                </div>
            </Card>

            <Card>
                <CardHeader title="Javoblar"/>
                <div class="p-6 pt-0">
                    {if answers.is_empty() {
                        view! { <p class="text-theme-tertiary text-sm">"Javoblar yo'q"</p> }.into_any()
                    } else {
                        view! {
                            <dl class="detail-list">
                                {answers.into_iter().map(|(question, answer)| view! {
                                    <div class="detail-row">
                                        <dt>{question}</dt>
                                        <dd>{answer_text(&answer)}</dd>
                                    </div>
                                }).collect_view()}
                            </dl>
                        }.into_any()
                    }}
                </div>
            </Card>
        </div>
    }
}

fn text_or_dash(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

fn answer_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "-".to_string(),
        Value::Array(items) => items
            .iter()
            .map(answer_text)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}
