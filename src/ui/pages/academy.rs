//! Polito Academy request list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::core::api::catalog::ref_name;
use crate::core::api::intake::{self, AcademyRequest, applicant_name};
use crate::core::format::{format_date, format_uz_phone};
use crate::ui::badges::StatusBadge;
use crate::ui::common::{
    Button, ButtonSize, ButtonVariant, Card, CardHeader, ErrorState, TableLoading,
};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn AcademyPage() -> impl IntoView {
    let requests = RwSignal::new(Vec::<AcademyRequest>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let search = RwSignal::new(String::new());
    let reload = RwSignal::new(0u32);

    Effect::new(move |_| {
        reload.track();
        spawn_local(async move {
            loading.set(true);
            error.set(None);
            match intake::list_academy().await {
                Ok(page) => requests.set(page.items),
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    });

    let filtered = Memo::new(move |_| {
        let query = search.get().to_lowercase();
        requests
            .get()
            .into_iter()
            .filter(|request| {
                if query.is_empty() {
                    return true;
                }
                let applicant = request.applicant_details.as_ref();
                applicant
                    .map(|a| {
                        a.first_name.to_lowercase().contains(&query)
                            || a.last_name.to_lowercase().contains(&query)
                            || a.phone.contains(&query)
                    })
                    .unwrap_or(false)
                    || ref_name(request.subject_details.as_ref())
                        .to_lowercase()
                        .contains(&query)
                    || request.status.label().to_lowercase().contains(&query)
            })
            .collect::<Vec<_>>()
    });

    let total_line = Signal::derive(move || format!("Jami: {} ta ariza", requests.get().len()));

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="title-xl">"Polito Academy"</h1>
                    <p class="subtitle">"Polito Academy arizalari"</p>
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
                <CardHeader title="Arizalar ro'yxati" description=total_line>
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
                                                <th>"Ism Familiya"</th>
                                                <th>"Telefon"</th>
                                                <th>"Fan"</th>
                                                <th>"Hudud"</th>
                                                <th>"Status"</th>
                                                <th>"Sana"</th>
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
                                                    rows.into_iter().map(|request| {
                                                        let applicant = request.applicant_details.as_ref();
                                                        let region = applicant.and_then(|a| a.region_details.as_ref());
                                                        let date = request.submitted_at.as_deref().or(Some(request.created_at.as_str()));
                                                        view! {
                                                            <tr>
                                                                <td class="font-medium">{applicant_name(applicant)}</td>
                                                                <td>{format_uz_phone(applicant.map(|a| a.phone.as_str()))}</td>
                                                                <td>{ref_name(request.subject_details.as_ref())}</td>
                                                                <td>{ref_name(region)}</td>
                                                                <td><StatusBadge status=request.status/></td>
                                                                <td>{format_date(date, false)}</td>
                                                                <td>
                                                                    <A
                                                                        href=format!("/dashboard/applications/academy/{}", request.id)
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
