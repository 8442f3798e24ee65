//! Shared detail view for all four application channels.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use serde_json::Value;

use crate::core::api::catalog::ref_name;
use crate::core::api::intake::{self, ApplicationKind, ApplicationRecord, applicant_name};
use crate::core::format::{format_date, format_uz_phone};
use crate::ui::badges::StatusBadge;
use crate::ui::common::{Card, CardHeader, ErrorState, PageLoading};

#[component]
pub fn ApplicationDetailPage() -> impl IntoView {
    let params = use_params_map();
    let record = RwSignal::new(None::<ApplicationRecord>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let reload = RwSignal::new(0u32);

    Effect::new(move |_| {
        reload.track();
        let kind = params
            .read()
            .get("kind")
            .and_then(|segment| ApplicationKind::from_segment(&segment));
        let id = params.read().get("id");

        let (Some(kind), Some(id)) = (kind, id) else {
            error.set(Some("Ariza topilmadi".to_string()));
            loading.set(false);
            return;
        };

        spawn_local(async move {
            loading.set(true);
            error.set(None);
            match intake::get_application(kind, &id).await {
                Ok(application) => record.set(Some(application)),
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    });

    let title = move || {
        params
            .read()
            .get("kind")
            .and_then(|segment| ApplicationKind::from_segment(&segment))
            .map(|kind| kind.title())
            .unwrap_or("Ariza")
    };

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="title-xl">{title}</h1>
                <p class="subtitle">"Ariza tafsilotlari"</p>
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
                } else if let Some(application) = record.get() {
                    view! { <ApplicationDetail application=application/> }.into_any()
                } else {
                    ().into_any()
                }
            }}
        </div>
    }
}

#[component]
fn ApplicationDetail(application: ApplicationRecord) -> impl IntoView {
    let applicant = application.applicant().cloned();
    let status = application.status();
    let submitted = format_date(application.submitted_at(), true);
    let created = format_date(Some(application.created_at()), true);
    let answers = application.answers().clone();

    let channel_rows: Vec<(&'static str, String)> = match &application {
        ApplicationRecord::Admission(a) => vec![
            ("Yo'nalish", ref_name(a.direction_details.as_ref())),
            ("Tarmoq", ref_name(a.track_details.as_ref())),
        ],
        ApplicationRecord::Campus(a) => vec![(
            "Tanlangan sana",
            format_date(a.preferred_date.as_deref(), false),
        )],
        ApplicationRecord::Foundation(_) => vec![],
        ApplicationRecord::Academy(a) => {
            vec![("Fan", ref_name(a.subject_details.as_ref()))]
        }
    };

    view! {
        <div class="grid gap-6 lg:grid-cols-2">
            <Card>
                <CardHeader title="Arizachi"/>
                <div class="p-6 pt-0">
                    <dl class="detail-list">
                        <div class="detail-row">
                            <dt>"Ism Familiya"</dt>
                            <dd class="font-medium">{applicant_name(applicant.as_ref())}</dd>
                        </div>
                        <div class="detail-row">
                            <dt>"Telefon"</dt>
                            <dd>{format_uz_phone(applicant.as_ref().map(|a| a.phone.as_str()))}</dd>
                        </div>
                        <div class="detail-row">
                            <dt>"Email"</dt>
                            <dd>
                                {applicant
                                    .as_ref()
                                    .map(|a| a.email.clone())
                                    .filter(|e| !e.is_empty())
                                    .unwrap_or_else(|| "-".to_string())}
                            </dd>
                        </div>
                        <div class="detail-row">
                            <dt>"Hudud"</dt>
                            <dd>{ref_name(applicant.as_ref().and_then(|a| a.region_details.as_ref()))}</dd>
                        </div>
                        <div class="detail-row">
                            <dt>"Telegram"</dt>
                            <dd>
                                {applicant
                                    .as_ref()
                                    .map(|a| {
                                        if a.username.is_empty() {
                                            format!("ID: {}", a.telegram_user_id)
                                        } else {
                                            format!("@{}", a.username)
                                        }
                                    })
                                    .unwrap_or_else(|| "-".to_string())}
                            </dd>
                        </div>
                    </dl>
                </div>
            </Card>

            <Card>
                <CardHeader title="Ariza"/>
                <div class="p-6 pt-0">
                    <dl class="detail-list">
                        <div class="detail-row">
                            <dt>"Status"</dt>
                            <dd><StatusBadge status=status/></dd>
                        </div>
                        {channel_rows.into_iter().map(|(label, value)| view! {
                            <div class="detail-row">
                                <dt>{label}</dt>
                                <dd>{value}</dd>
                            </div>
                        }).collect_view()}
                        <div class="detail-row">
                            <dt>"Yuborilgan"</dt>
                            <dd>{submitted}</dd>
                        </div>
                        <div class="detail-row">
                            <dt>"Yaratilgan"</dt>
                            <dd>{created}</dd>
                        </div>
                    </dl>
                </div>
            </Card>

            <Card class=String::from("lg:col-span-2")>
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

/// Render one answer value as display text.
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
