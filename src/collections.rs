//! Rearrange Screens
//!
//! Raw record shapes of the five orderable collections and how each one
//! becomes an [`OrderableItem`]. Soft-deleted records and records without a
//! name never reach the list.

use order_sync::{by_rank, CollectionSource, OrderableItem};
use serde::Deserialize;

/// One rearrange screen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    SimTypes,
    StorageTypes,
    Units,
    VendorCategories,
    FooterWidgets,
}

impl Screen {
    pub const ALL: [Screen; 5] = [
        Screen::SimTypes,
        Screen::StorageTypes,
        Screen::Units,
        Screen::VendorCategories,
        Screen::FooterWidgets,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Screen::SimTypes => "SIM Types",
            Screen::StorageTypes => "Storage Types",
            Screen::Units => "Units",
            Screen::VendorCategories => "Vendor Categories",
            Screen::FooterWidgets => "Footer Widgets",
        }
    }

    /// URL segment under `/api`
    pub fn slug(&self) -> &'static str {
        match self {
            Screen::SimTypes => "sim-types",
            Screen::StorageTypes => "storage-types",
            Screen::Units => "units",
            Screen::VendorCategories => "vendor-categories",
            Screen::FooterWidgets => "footer-widgets",
        }
    }
}

fn source<R: serde::de::DeserializeOwned>(
    base: &str,
    screen: Screen,
    map_item: fn(R) -> Option<OrderableItem>,
) -> CollectionSource<R> {
    CollectionSource::new(
        screen.slug(),
        format!("{}/api/{}", base, screen.slug()),
        format!("{}/api/{}/rearrange", base, screen.slug()),
        map_item,
    )
}

/// Badge shown next to the label; inactive entries say so first
fn badge(is_active: bool, detail: Option<String>) -> Option<String> {
    if is_active {
        detail.filter(|d| !d.is_empty())
    } else {
        Some("inactive".to_string())
    }
}

fn base_item(id: String, name: String, is_deleted: bool) -> Option<OrderableItem> {
    let name = name.trim();
    if is_deleted || name.is_empty() {
        return None;
    }
    Some(OrderableItem::new(id, name))
}

fn default_true() -> bool {
    true
}

// ========================
// SIM types
// ========================

#[derive(Debug, Deserialize)]
pub struct SimType {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "isActive", default = "default_true")]
    pub is_active: bool,
    #[serde(rename = "isDeleted", default)]
    pub is_deleted: bool,
}

pub fn map_sim_type(raw: SimType) -> Option<OrderableItem> {
    let item = base_item(raw.id, raw.name, raw.is_deleted)?;
    Some(match badge(raw.is_active, None) {
        Some(extra) => item.with_extra(extra),
        None => item,
    })
}

pub fn sim_types(base: &str) -> CollectionSource<SimType> {
    source(base, Screen::SimTypes, map_sim_type)
}

// ========================
// Storage types
// ========================

#[derive(Debug, Deserialize)]
pub struct StorageType {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub capacity: Option<serde_json::Value>,
    #[serde(rename = "isActive", default = "default_true")]
    pub is_active: bool,
    #[serde(rename = "isDeleted", default)]
    pub is_deleted: bool,
}

pub fn map_storage_type(raw: StorageType) -> Option<OrderableItem> {
    let item = base_item(raw.id, raw.name, raw.is_deleted)?;
    // Capacity arrives as a number or a preformatted string
    let capacity = raw.capacity.and_then(|c| match c {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    });
    Some(match badge(raw.is_active, capacity) {
        Some(extra) => item.with_extra(extra),
        None => item,
    })
}

pub fn storage_types(base: &str) -> CollectionSource<StorageType> {
    source(base, Screen::StorageTypes, map_storage_type)
}

// ========================
// Units
// ========================

#[derive(Debug, Deserialize)]
pub struct Unit {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "shortName", default)]
    pub short_name: Option<String>,
    #[serde(rename = "isActive", default = "default_true")]
    pub is_active: bool,
    #[serde(rename = "isDeleted", default)]
    pub is_deleted: bool,
}

/// "Kilogram (kg)", or just the name without a short form
pub fn map_unit(raw: Unit) -> Option<OrderableItem> {
    let short = raw.short_name.as_deref().map(str::trim).filter(|s| !s.is_empty()).map(String::from);
    let mut item = base_item(raw.id, raw.name, raw.is_deleted)?;
    if let Some(short) = short {
        item.label = format!("{} ({})", item.label, short);
    }
    Some(match badge(raw.is_active, None) {
        Some(extra) => item.with_extra(extra),
        None => item,
    })
}

pub fn units(base: &str) -> CollectionSource<Unit> {
    source(base, Screen::Units, map_unit)
}

// ========================
// Vendor categories and footer widgets (ranked stores)
// ========================

#[derive(Debug, Deserialize)]
pub struct VendorCategory {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub position: Option<i64>,
    #[serde(rename = "isActive", default = "default_true")]
    pub is_active: bool,
    #[serde(rename = "isDeleted", default)]
    pub is_deleted: bool,
}

pub fn map_vendor_category(raw: VendorCategory) -> Option<OrderableItem> {
    let mut item = base_item(raw.id, raw.name, raw.is_deleted)?;
    if let Some(rank) = raw.position {
        item = item.with_rank(rank);
    }
    Some(match badge(raw.is_active, None) {
        Some(extra) => item.with_extra(extra),
        None => item,
    })
}

pub fn vendor_categories(base: &str) -> CollectionSource<VendorCategory> {
    source(base, Screen::VendorCategories, map_vendor_category).with_sort(by_rank)
}

#[derive(Debug, Deserialize)]
pub struct FooterWidget {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "widgetType", default)]
    pub widget_type: Option<String>,
    #[serde(default)]
    pub position: Option<i64>,
    #[serde(rename = "isActive", default = "default_true")]
    pub is_active: bool,
    #[serde(rename = "isDeleted", default)]
    pub is_deleted: bool,
}

pub fn map_footer_widget(raw: FooterWidget) -> Option<OrderableItem> {
    let mut item = base_item(raw.id, raw.name, raw.is_deleted)?;
    if let Some(rank) = raw.position {
        item = item.with_rank(rank);
    }
    Some(match badge(raw.is_active, raw.widget_type) {
        Some(extra) => item.with_extra(extra),
        None => item,
    })
}

pub fn footer_widgets(base: &str) -> CollectionSource<FooterWidget> {
    source(base, Screen::FooterWidgets, map_footer_widget).with_sort(by_rank)
}
