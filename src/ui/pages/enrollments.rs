//! Program enrollment totals with create/edit/delete dialogs. These rows
//! are the denominators of the survey coverage report.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::api::alumni::{self, EnrollmentDraft, ProgramEnrollment};
use crate::core::api::catalog::{self, CatalogType};
use crate::core::format::{course_year_label, format_percent};
use crate::ui::common::{
    Badge, BadgeVariant, BaseModal, Button, ButtonSize, ButtonVariant, Card, CardHeader,
    CheckboxField, ConfirmDialog, ErrorMessage, ErrorState, FormField, IconButton, SelectField,
    SuccessMessage, TableLoading,
};
use crate::ui::icon::icons;

#[component]
pub fn EnrollmentsPage() -> impl IntoView {
    let enrollments = RwSignal::new(Vec::<ProgramEnrollment>::new());
    let programs = RwSignal::new(Vec::<(String, String)>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let reload = RwSignal::new(0u32);
    let notice = RwSignal::new(None::<String>);

    // Editor dialog state; `editing` empty means "create".
    let show_editor = RwSignal::new(false);
    let editing = RwSignal::new(None::<ProgramEnrollment>);
    let form_program = RwSignal::new(String::new());
    let form_course_year = RwSignal::new("1".to_string());
    let form_student_count = RwSignal::new(String::new());
    let form_academic_year = RwSignal::new(String::new());
    let form_notes = RwSignal::new(String::new());
    let form_is_active = RwSignal::new(true);
    let form_error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let delete_target = RwSignal::new(None::<ProgramEnrollment>);

    Effect::new(move |_| {
        reload.track();
        spawn_local(async move {
            loading.set(true);
            error.set(None);

            let (rows, program_items) = futures::join!(
                alumni::list_enrollments(),
                catalog::list(Some(CatalogType::Program)),
            );

            match rows {
                Ok(page) => enrollments.set(page.items),
                Err(err) => error.set(Some(err.to_string())),
            }
            if let Ok(page) = program_items {
                programs.set(
                    page.items
                        .into_iter()
                        .map(|item| (item.id.clone(), item.display_name()))
                        .collect(),
                );
            }

            loading.set(false);
        });
    });

    let open_create = move |_| {
        editing.set(None);
        form_program.set(programs.get_untracked().first().map(|(id, _)| id.clone()).unwrap_or_default());
        form_course_year.set("1".to_string());
        form_student_count.set(String::new());
        form_academic_year.set(String::new());
        form_notes.set(String::new());
        form_is_active.set(true);
        form_error.set(None);
        show_editor.set(true);
    };

    let open_edit = move |row: ProgramEnrollment| {
        form_program.set(row.program.clone());
        form_course_year.set(row.course_year.to_string());
        form_student_count.set(row.student_count.to_string());
        form_academic_year.set(row.academic_year.clone());
        form_notes.set(row.notes.clone());
        form_is_active.set(row.is_active);
        form_error.set(None);
        editing.set(Some(row));
        show_editor.set(true);
    };

    let submit_editor = move |_| {
        let program = form_program.get();
        let academic_year = form_academic_year.get().trim().to_string();
        let Ok(course_year) = form_course_year.get().parse::<i64>() else {
            form_error.set(Some("Kurs noto'g'ri".to_string()));
            return;
        };
        let Ok(student_count) = form_student_count.get().trim().parse::<i64>() else {
            form_error.set(Some("Talabalar soni butun son bo'lishi kerak".to_string()));
            return;
        };
        if academic_year.is_empty() {
            form_error.set(Some("O'quv yili kiritilishi shart".to_string()));
            return;
        }
        if editing.get_untracked().is_none() && program.is_empty() {
            form_error.set(Some("Dastur tanlanishi shart".to_string()));
            return;
        }

        let draft = EnrollmentDraft {
            program: if program.is_empty() { None } else { Some(program) },
            course_year,
            student_count,
            academic_year,
            notes: form_notes.get(),
            is_active: form_is_active.get(),
        };

        let target = editing.get_untracked();
        submitting.set(true);

        spawn_local(async move {
            let outcome = match &target {
                Some(row) => alumni::update_enrollment(&row.id, &draft).await.map(|_| ()),
                None => alumni::create_enrollment(&draft).await.map(|_| ()),
            };

            match outcome {
                Ok(()) => {
                    show_editor.set(false);
                    flash(
                        notice,
                        if target.is_some() {
                            "Muvaffaqiyatli yangilandi"
                        } else {
                            "Muvaffaqiyatli yaratildi"
                        },
                    );
                    reload.update(|n| *n += 1);
                }
                Err(err) => form_error.set(Some(err.to_string())),
            }
            submitting.set(false);
        });
    };

    let confirm_delete = move |_| {
        let Some(row) = delete_target.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match alumni::delete_enrollment(&row.id).await {
                Ok(()) => {
                    flash(notice, "Muvaffaqiyatli o'chirildi");
                    reload.update(|n| *n += 1);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            delete_target.set(None);
        });
    };

    let total_line =
        Signal::derive(move || format!("Jami: {} ta yozuv", enrollments.get().len()));

    let course_year_options: Vec<(String, String)> = (1..=5)
        .map(|year| (year.to_string(), course_year_label(year)))
        .collect();

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="title-xl">"Talabalar soni"</h1>
                    <p class="subtitle">"Dasturlar bo'yicha talabalar soni va qamrov"</p>
                </div>
                <div class="flex items-center gap-2">
                    <Button
                        variant=ButtonVariant::Secondary
                        size=ButtonSize::Small
                        icon=icons::REFRESH
                        on_click=Callback::new(move |_| reload.update(|n| *n += 1))
                    >
                        "Yangilash"
                    </Button>
                    <Button
                        size=ButtonSize::Small
                        icon=icons::PLUS
                        on_click=Callback::new(open_create)
                    >
                        "Yangi qo'shish"
                    </Button>
                </div>
            </div>

            <SuccessMessage message=notice/>

            <Card>
                <CardHeader title="Yozuvlar ro'yxati" description=total_line/>

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
                                                <th>"Dastur"</th>
                                                <th>"Kurs"</th>
                                                <th>"O'quv yili"</th>
                                                <th>"Talabalar"</th>
                                                <th>"Javob berganlar"</th>
                                                <th>"Qamrov"</th>
                                                <th>"Holat"</th>
                                                <th class="w-24">"Amal"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {
                                                let rows = enrollments.get();
                                                if rows.is_empty() {
                                                    view! {
                                                        <tr>
                                                            <td colspan="8" class="table-empty">"Ma'lumot topilmadi"</td>
                                                        </tr>
                                                    }.into_any()
                                                } else {
                                                    rows.into_iter().map(|row| {
                                                        let program_name = row
                                                            .program_details
                                                            .as_ref()
                                                            .map(|p| p.name.clone())
                                                            .filter(|name| !name.is_empty())
                                                            .unwrap_or_else(|| row.program.clone());
                                                        let coverage = row
                                                            .coverage_percent
                                                            .map(format_percent)
                                                            .unwrap_or_else(|| "-".to_string());
                                                        let responded = row
                                                            .responded_count
                                                            .map(|n| n.to_string())
                                                            .unwrap_or_else(|| "-".to_string());
                                                        let row_for_edit = row.clone();
                                                        let row_for_delete = row.clone();
                                                        view! {
                                                            <tr>
                                                                <td class="font-medium">{program_name}</td>
                                                                <td>{course_year_label(row.course_year)}</td>
                                                                <td>{row.academic_year.clone()}</td>
                                                                <td>{row.student_count}</td>
                                                                <td>{responded}</td>
                                                                <td>{coverage}</td>
                                                                <td>
                                                                    {if row.is_active {
                                                                        view! { <Badge variant=BadgeVariant::Success>"Faol"</Badge> }.into_any()
                                                                    } else {
                                                                        view! { <Badge variant=BadgeVariant::Default>"Nofaol"</Badge> }.into_any()
                                                                    }}
                                                                </td>
                                                                <td>
                                                                    <div class="flex items-center gap-1">
                                                                        <IconButton
                                                                            icon=icons::EDIT
                                                                            title="Tahrirlash".to_string()
                                                                            on_click=Callback::new(move |_| open_edit(row_for_edit.clone()))
                                                                        />
                                                                        <IconButton
                                                                            icon=icons::TRASH
                                                                            title="O'chirish".to_string()
                                                                            on_click=Callback::new(move |_| delete_target.set(Some(row_for_delete.clone())))
                                                                        />
                                                                    </div>
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

            <BaseModal
                title="Talabalar soni"
                subtitle="Dastur va kurs bo'yicha jami talabalar sonini kiriting".to_string()
                is_open=Signal::derive(move || show_editor.get())
                on_close=Callback::new(move |_| show_editor.set(false))
            >
                <div class="space-y-4">
                    <ErrorMessage error=form_error/>

                    {move || {
                        view! {
                            <SelectField
                                label="Dastur".to_string()
                                value=Signal::derive(move || form_program.get())
                                on_change=Callback::new(move |value| form_program.set(value))
                                options=programs.get()
                                disabled=editing.get().is_some()
                            />
                        }
                    }}
                    <SelectField
                        label="Kurs".to_string()
                        value=Signal::derive(move || form_course_year.get())
                        on_change=Callback::new(move |value| form_course_year.set(value))
                        options=course_year_options.clone()
                    />
                    <FormField
                        label="Talabalar soni".to_string()
                        required=true
                        input_type="number"
                        placeholder="0".to_string()
                        value=Signal::derive(move || form_student_count.get())
                        on_input=Callback::new(move |value| form_student_count.set(value))
                    />
                    <FormField
                        label="O'quv yili".to_string()
                        required=true
                        placeholder="2025/2026".to_string()
                        value=Signal::derive(move || form_academic_year.get())
                        on_input=Callback::new(move |value| form_academic_year.set(value))
                    />
                    <FormField
                        label="Izoh".to_string()
                        placeholder="Ixtiyoriy izoh".to_string()
                        value=Signal::derive(move || form_notes.get())
                        on_input=Callback::new(move |value| form_notes.set(value))
                    />
                    <CheckboxField
                        label="Faol".to_string()
                        checked=Signal::derive(move || form_is_active.get())
                        on_change=Callback::new(move |value| form_is_active.set(value))
                        description="Nofaol yozuvlar qamrov hisobotiga kirmaydi".to_string()
                    />

                    <div class="flex items-center justify-end gap-2 divider-top pt-4">
                        <button
                            class="btn-base btn-secondary"
                            on:click=move |_| show_editor.set(false)
                        >
                            "Bekor qilish"
                        </button>
                        <button
                            class="btn-base btn-primary"
                            disabled=move || submitting.get()
                            on:click=submit_editor
                        >
                            {move || if submitting.get() { "Saqlanmoqda..." } else { "Saqlash" }}
                        </button>
                    </div>
                </div>
            </BaseModal>

            <ConfirmDialog
                title="O'chirishni tasdiqlang"
                message=Signal::derive(move || {
                    delete_target
                        .get()
                        .map(|row| {
                            format!(
                                "Siz haqiqatan ham \"{}\" yozuvini o'chirmoqchimisiz?",
                                row.academic_year
                            )
                        })
                        .unwrap_or_default()
                })
                is_open=Signal::derive(move || delete_target.get().is_some())
                on_confirm=Callback::new(confirm_delete)
                on_cancel=Callback::new(move |_| delete_target.set(None))
                confirm_text="O'chirish".to_string()
                is_destructive=true
            />
        </div>
    }
}

/// Show a success notice and clear it after a few seconds.
fn flash(notice: RwSignal<Option<String>>, message: &str) {
    notice.set(Some(message.to_string()));
    #[cfg(not(feature = "ssr"))]
    {
        let message = message.to_string();
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(4_000).await;
            notice.update(|current| {
                if current.as_deref() == Some(message.as_str()) {
                    *current = None;
                }
            });
        });
    }
}
