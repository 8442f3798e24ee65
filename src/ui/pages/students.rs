//! Student list from the alumni roster.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::api::alumni::{self, Student};
use crate::core::api::catalog::ref_name;
use crate::core::format::{format_date, format_uz_phone};
use crate::ui::badges::GenderBadge;
use crate::ui::common::{
    Button, ButtonSize, ButtonVariant, Card, CardHeader, ErrorState, TableLoading,
};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn StudentsPage() -> impl IntoView {
    let students = RwSignal::new(Vec::<Student>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let search = RwSignal::new(String::new());
    let reload = RwSignal::new(0u32);

    Effect::new(move |_| {
        reload.track();
        spawn_local(async move {
            loading.set(true);
            error.set(None);
            match alumni::list_students().await {
                Ok(page) => students.set(page.items),
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    });

    let filtered = Memo::new(move |_| {
        let query = search.get().to_lowercase();
        students
            .get()
            .into_iter()
            .filter(|student| {
                if query.is_empty() {
                    return true;
                }
                student.first_name.to_lowercase().contains(&query)
                    || student.last_name.to_lowercase().contains(&query)
                    || student.student_external_id.to_lowercase().contains(&query)
                    || student.phone.contains(&query)
            })
            .collect::<Vec<_>>()
    });

    let total_line = Signal::derive(move || format!("Jami: {} ta talaba", students.get().len()));

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="title-xl">"Talabalar"</h1>
                    <p class="subtitle">"Alumni bot bilan bog'langan talabalar"</p>
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
                <CardHeader title="Talabalar ro'yxati" description=total_line>
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
                                                <th>"Talaba ID"</th>
                                                <th>"Jins"</th>
                                                <th>"Telefon"</th>
                                                <th>"Hudud"</th>
                                                <th>"Ro'yxatga olingan"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {
                                                let rows = filtered.get();
                                                if rows.is_empty() {
                                                    view! {
                                                        <tr>
                                                            <td colspan="6" class="table-empty">"Ma'lumot topilmadi"</td>
                                                        </tr>
                                                    }.into_any()
                                                } else {
                                                    rows.into_iter().map(|student| {
                                                        let external_id = if student.student_external_id.is_empty() {
                                                            "-".to_string()
                                                        } else {
                                                            student.student_external_id.clone()
                                                        };
                                                        view! {
                                                            <tr>
                                                                <td class="font-medium">{student.full_name()}</td>
                                                                <td>{external_id}</td>
                                                                <td><GenderBadge gender=student.gender/></td>
                                                                <td>{format_uz_phone(Some(student.phone.as_str()))}</td>
                                                                <td>{ref_name(student.region_details.as_ref())}</td>
                                                                <td>{format_date(Some(student.created_at.as_str()), false)}</td>
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
