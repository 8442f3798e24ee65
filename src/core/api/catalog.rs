//! Reference catalog endpoints and models.
//!
//! The catalog stores the dictionaries the intake bots and the dashboard
//! share: study programs, admission directions, regions, direction tracks,
//! and academy subjects. Items carry names in three languages plus a free
//! JSON metadata bag.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::client;
use super::error::{ApiError, ApiResult};
use super::page::{Page, fetch_page, with_query};

const ITEMS_PATH: &str = "/api/v1/catalog/items/";

/// Catalog dictionary types. `Display` renders the wire value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum CatalogType {
    #[display("program")]
    Program,
    #[display("direction")]
    Direction,
    #[display("region")]
    Region,
    #[display("track")]
    Track,
    #[display("subject")]
    Subject,
}

impl CatalogType {
    pub const ALL: [CatalogType; 5] = [
        CatalogType::Program,
        CatalogType::Direction,
        CatalogType::Region,
        CatalogType::Track,
        CatalogType::Subject,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CatalogType::Program => "Dasturlar",
            CatalogType::Direction => "Yo'nalishlar",
            CatalogType::Region => "Hududlar",
            CatalogType::Track => "Tarmoqlar",
            CatalogType::Subject => "Fanlar",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CatalogType::Program => "Ta'lim dasturlari",
            CatalogType::Direction => "Ta'lim yo'nalishlari",
            CatalogType::Region => "Viloyatlar va shaharlar",
            CatalogType::Track => "Yo'nalish tarmoqlari",
            CatalogType::Subject => "O'quv fanlari",
        }
    }
}

/// Full catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: CatalogType,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub name_uz: String,
    #[serde(default)]
    pub name_ru: String,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub sort_order: i64,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

fn default_true() -> bool {
    true
}

/// Slim catalog record nested inside other resources
/// (`direction_details`, `region_details`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRef {
    pub id: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub name_uz: String,
    #[serde(default)]
    pub name_ru: String,
    #[serde(default)]
    pub name_en: String,
}

/// Uzbek-first display name: `name_uz`, then `name`, then the other
/// languages, then the code.
fn pick_name<'a>(
    name: &'a str,
    name_uz: &'a str,
    name_ru: &'a str,
    name_en: &'a str,
    code: Option<&'a str>,
) -> &'a str {
    [name_uz, name, name_ru, name_en]
        .into_iter()
        .find(|candidate| !candidate.is_empty())
        .or(code)
        .unwrap_or("-")
}

impl CatalogItem {
    pub fn display_name(&self) -> String {
        pick_name(
            &self.name,
            &self.name_uz,
            &self.name_ru,
            &self.name_en,
            self.code.as_deref(),
        )
        .to_string()
    }
}

impl CatalogRef {
    pub fn display_name(&self) -> String {
        pick_name(
            &self.name,
            &self.name_uz,
            &self.name_ru,
            &self.name_en,
            self.code.as_deref(),
        )
        .to_string()
    }
}

/// Display name for an optional nested reference; "-" when absent.
pub fn ref_name(item: Option<&CatalogRef>) -> String {
    item.map(CatalogRef::display_name)
        .unwrap_or_else(|| "-".to_string())
}

/// Create/update payload. `None` fields are left untouched by PATCH.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CatalogItemDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_uz: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_ru: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

pub async fn list(kind: Option<CatalogType>) -> ApiResult<Page<CatalogItem>> {
    let path = match kind {
        Some(kind) => with_query(ITEMS_PATH, &[("type", &kind.to_string())]),
        None => ITEMS_PATH.to_string(),
    };
    fetch_page(&path).await
}

pub async fn create(kind: CatalogType, draft: &CatalogItemDraft) -> ApiResult<CatalogItem> {
    // The type discriminator travels in the same flat body as the draft.
    let mut body = serde_json::to_value(draft)
        .map_err(|e| ApiError::api("API_ERROR", format!("Unserializable request body: {e}")))?;
    if let Some(map) = body.as_object_mut() {
        map.insert("type".to_string(), Value::String(kind.to_string()));
    }
    client::post(ITEMS_PATH, &body).await
}

pub async fn update(id: &str, draft: &CatalogItemDraft) -> ApiResult<CatalogItem> {
    client::patch(&format!("{ITEMS_PATH}{id}/"), draft).await
}

pub async fn delete(id: &str) -> ApiResult<()> {
    client::delete(&format!("{ITEMS_PATH}{id}/")).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_catalog_type_wire_values() {
        assert_eq!(CatalogType::Program.to_string(), "program");
        assert_eq!(
            serde_json::to_value(CatalogType::Direction).unwrap(),
            json!("direction")
        );
        let kind: CatalogType = serde_json::from_value(json!("subject")).unwrap();
        assert_eq!(kind, CatalogType::Subject);
    }

    #[test]
    fn test_catalog_item_deserializes_sparse_record() {
        let item: CatalogItem = serde_json::from_value(json!({
            "id": "c1",
            "type": "region",
            "name": "Tashkent"
        }))
        .unwrap();
        assert!(item.is_active);
        assert!(item.metadata.is_empty());
        assert_eq!(item.display_name(), "Tashkent");
    }

    #[test]
    fn test_display_name_prefers_uzbek() {
        let item: CatalogItem = serde_json::from_value(json!({
            "id": "c2",
            "type": "region",
            "name": "Tashkent",
            "name_uz": "Toshkent",
            "name_ru": "Ташкент"
        }))
        .unwrap();
        assert_eq!(item.display_name(), "Toshkent");
    }

    #[test]
    fn test_display_name_falls_back_to_code() {
        let reference: CatalogRef = serde_json::from_value(json!({
            "id": "c3",
            "code": "REG-09"
        }))
        .unwrap();
        assert_eq!(reference.display_name(), "REG-09");
        assert_eq!(ref_name(None), "-");
    }

    #[test]
    fn test_draft_omits_unset_fields() {
        let draft = CatalogItemDraft {
            name: "Yangi".to_string(),
            ..Default::default()
        };
        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(body, json!({ "name": "Yangi" }));
    }
}
