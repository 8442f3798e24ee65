//! Reference catalog editor: one tab per dictionary type with
//! create/edit/delete dialogs. Metadata is edited as raw JSON and validated
//! before submit.

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::{Map, Value};

use crate::core::api::catalog::{self, CatalogItem, CatalogItemDraft, CatalogType};
use crate::core::format::format_date;
use crate::ui::common::{
    Badge, BadgeVariant, BaseModal, Button, ButtonSize, ButtonVariant, Card, CardHeader,
    ConfirmDialog, ErrorMessage, ErrorState, FormField, IconButton, SuccessMessage, TabItem, Tabs,
    TableLoading, TextAreaField,
};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn CatalogPage() -> impl IntoView {
    let (active_tab, set_active_tab) = signal(CatalogType::Program.to_string());

    let items = RwSignal::new(Vec::<CatalogItem>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let search = RwSignal::new(String::new());
    let reload = RwSignal::new(0u32);
    let notice = RwSignal::new(None::<String>);

    // Editor dialog state; `editing` empty means "create".
    let show_editor = RwSignal::new(false);
    let editing = RwSignal::new(None::<CatalogItem>);
    let form_name = RwSignal::new(String::new());
    let form_description = RwSignal::new(String::new());
    let form_meta = RwSignal::new("{}".to_string());
    let form_error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    // Delete confirmation state.
    let delete_target = RwSignal::new(None::<CatalogItem>);

    let current_kind = Signal::derive(move || {
        let id = active_tab.get();
        CatalogType::ALL
            .into_iter()
            .find(|kind| kind.to_string() == id)
            .unwrap_or(CatalogType::Program)
    });

    Effect::new(move |_| {
        reload.track();
        let kind = current_kind.get();
        spawn_local(async move {
            loading.set(true);
            error.set(None);
            match catalog::list(Some(kind)).await {
                Ok(page) => items.set(page.items),
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    });

    let filtered = Memo::new(move |_| {
        let query = search.get().to_lowercase();
        items
            .get()
            .into_iter()
            .filter(|item| {
                if query.is_empty() {
                    return true;
                }
                item.display_name().to_lowercase().contains(&query)
                    || item
                        .description
                        .as_ref()
                        .map(|d| d.to_lowercase().contains(&query))
                        .unwrap_or(false)
            })
            .collect::<Vec<_>>()
    });

    let open_create = move |_| {
        editing.set(None);
        form_name.set(String::new());
        form_description.set(String::new());
        form_meta.set("{}".to_string());
        form_error.set(None);
        show_editor.set(true);
    };

    let open_edit = move |item: CatalogItem| {
        form_name.set(item.name.clone());
        form_description.set(item.description.clone().unwrap_or_default());
        form_meta.set(
            serde_json::to_string_pretty(&Value::Object(item.metadata.clone()))
                .unwrap_or_else(|_| "{}".to_string()),
        );
        form_error.set(None);
        editing.set(Some(item));
        show_editor.set(true);
    };

    let submit_editor = move |_| {
        let name = form_name.get().trim().to_string();
        if name.is_empty() {
            form_error.set(Some("Nom kiritilishi shart".to_string()));
            return;
        }

        let meta_text = form_meta.get();
        let metadata = match parse_metadata(&meta_text) {
            Ok(map) => map,
            Err(message) => {
                form_error.set(Some(message));
                return;
            }
        };

        let draft = CatalogItemDraft {
            name,
            description: Some(form_description.get()),
            metadata: Some(metadata),
            ..Default::default()
        };

        let kind = current_kind.get_untracked();
        let target = editing.get_untracked();
        submitting.set(true);

        spawn_local(async move {
            let outcome = match &target {
                Some(item) => catalog::update(&item.id, &draft).await.map(|_| ()),
                None => catalog::create(kind, &draft).await.map(|_| ()),
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
        let Some(item) = delete_target.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match catalog::delete(&item.id).await {
                Ok(()) => {
                    flash(notice, "Muvaffaqiyatli o'chirildi");
                    reload.update(|n| *n += 1);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            delete_target.set(None);
        });
    };

    let tabs: Vec<TabItem> = CatalogType::ALL
        .into_iter()
        .map(|kind| TabItem::new(kind.to_string(), kind.label()))
        .collect();

    // The card title stays fixed; the tab's own label and count live in the
    // reactive description line.
    let header_line = Signal::derive(move || {
        format!(
            "{} • Jami: {} ta",
            current_kind.get().description(),
            items.get().len()
        )
    });

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="title-xl">"Katalog"</h1>
                    <p class="subtitle">"Ma'lumotlar bazasi katalogi"</p>
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

            <Tabs
                tabs=tabs
                active_tab=active_tab
                on_change=Callback::new(move |id: String| {
                    set_active_tab.set(id);
                    search.set(String::new());
                    reload.update(|n| *n += 1);
                })
                full_width=true
            />

            <Card>
                <CardHeader title="Elementlar ro'yxati" description=header_line>
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
                                                <th>"Nomi"</th>
                                                <th>"Tavsif"</th>
                                                <th>"Meta"</th>
                                                <th>"Yaratilgan"</th>
                                                <th class="w-24">"Amal"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {
                                                let rows = filtered.get();
                                                if rows.is_empty() {
                                                    view! {
                                                        <tr>
                                                            <td colspan="5" class="table-empty">"Ma'lumot topilmadi"</td>
                                                        </tr>
                                                    }.into_any()
                                                } else {
                                                    rows.into_iter().map(|item| {
                                                        let meta_count = item.metadata.len();
                                                        let item_for_edit = item.clone();
                                                        let item_for_delete = item.clone();
                                                        let description = item
                                                            .description
                                                            .clone()
                                                            .filter(|d| !d.is_empty())
                                                            .unwrap_or_else(|| "-".to_string());
                                                        view! {
                                                            <tr>
                                                                <td class="font-medium">{item.display_name()}</td>
                                                                <td class="max-w-xs truncate">{description}</td>
                                                                <td>
                                                                    {if meta_count > 0 {
                                                                        view! {
                                                                            <Badge variant=BadgeVariant::Outline>
                                                                                {format!("{meta_count} ta maydon")}
                                                                            </Badge>
                                                                        }.into_any()
                                                                    } else {
                                                                        view! { <span>"-"</span> }.into_any()
                                                                    }}
                                                                </td>
                                                                <td>{format_date(Some(item.created_at.as_str()), false)}</td>
                                                                <td>
                                                                    <div class="flex items-center gap-1">
                                                                        <IconButton
                                                                            icon=icons::EDIT
                                                                            title="Tahrirlash".to_string()
                                                                            on_click=Callback::new(move |_| open_edit(item_for_edit.clone()))
                                                                        />
                                                                        <IconButton
                                                                            icon=icons::TRASH
                                                                            title="O'chirish".to_string()
                                                                            on_click=Callback::new(move |_| delete_target.set(Some(item_for_delete.clone())))
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
                title="Katalog elementi"
                subtitle="Element ma'lumotlarini kiriting".to_string()
                is_open=Signal::derive(move || show_editor.get())
                on_close=Callback::new(move |_| show_editor.set(false))
            >
                <div class="space-y-4">
                    <ErrorMessage error=form_error/>

                    <FormField
                        label="Nomi".to_string()
                        required=true
                        placeholder="Nomini kiriting".to_string()
                        value=Signal::derive(move || form_name.get())
                        on_input=Callback::new(move |value| form_name.set(value))
                    />
                    <TextAreaField
                        label="Tavsif".to_string()
                        placeholder="Tavsifni kiriting".to_string()
                        value=Signal::derive(move || form_description.get())
                        on_input=Callback::new(move |value| form_description.set(value))
                    />
                    <TextAreaField
                        label="Meta (JSON)".to_string()
                        placeholder="{\"key\": \"value\"}".to_string()
                        rows=4
                        monospace=true
                        value=Signal::derive(move || form_meta.get())
                        on_input=Callback::new(move |value| form_meta.set(value))
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
                        .map(|item| {
                            format!(
                                "Siz haqiqatan ham \"{}\" ni o'chirmoqchimisiz? Bu amalni qaytarib bo'lmaydi.",
                                item.display_name()
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

/// Parse the metadata textarea into a JSON object map.
fn parse_metadata(text: &str) -> Result<Map<String, Value>, String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Map::new());
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err("Meta JSON obyekt bo'lishi kerak".to_string()),
        Err(_) => Err("Meta noto'g'ri JSON formatida".to_string()),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_metadata_accepts_objects() {
        let map = parse_metadata(r#"{"color": "blue", "order": 2}"#).unwrap();
        assert_eq!(map.len(), 2);
        assert!(parse_metadata("").unwrap().is_empty());
        assert!(parse_metadata("  {}  ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_metadata_rejects_non_objects() {
        assert!(parse_metadata("[1, 2]").is_err());
        assert!(parse_metadata("not json").is_err());
    }
}
