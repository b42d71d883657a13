use std::collections::BTreeMap;

use anyhow::{anyhow, bail, Context};
use contracts::enums::event_category::EventCategory;
use contracts::shared::catalog::Catalog;
use contracts::shared::tooltip::TooltipMap;
use serde::Deserialize;

use super::config::{self, Config};
use crate::domain::category_index::CategoryIndex;
use crate::domain::form_session::FormCatalogs;

/// Каталоги по умолчанию, встроенные в бинарник
const DEFAULT_CATALOGS: &str = include_str!("../../catalogs.toml");

#[derive(Debug, Deserialize)]
struct CatalogsFile {
    #[serde(default = "default_tooltip_prefix")]
    tooltip_prefix: String,
    stores: Vec<String>,
    pickup_types: Vec<String>,
    notifications: Vec<String>,
    event_categories: Vec<EventCategoryFile>,
    #[serde(default)]
    tooltips: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct EventCategoryFile {
    name: String,
    codes: Vec<String>,
}

fn default_tooltip_prefix() -> String {
    "Tooltip for".to_string()
}

/// Загрузка каталогов формы
///
/// Если в конфиге указан `[catalogs] path`, читается этот файл,
/// иначе используются встроенные каталоги.
pub fn load_catalogs(config: &Config) -> anyhow::Result<FormCatalogs> {
    match &config.catalogs.path {
        Some(path) => {
            let path = config::resolve_path(path);
            tracing::info!("Loading catalogs from: {}", path.display());
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Cannot read catalogs file {}", path.display()))?;
            parse_catalogs(&contents)
        }
        None => {
            tracing::info!("Using embedded catalogs");
            parse_catalogs(DEFAULT_CATALOGS)
        }
    }
}

/// Разбор и проверка файла каталогов
pub fn parse_catalogs(contents: &str) -> anyhow::Result<FormCatalogs> {
    let file: CatalogsFile = toml::from_str(contents)?;

    let mut named: Vec<(EventCategory, Catalog)> = Vec::with_capacity(file.event_categories.len());
    for entry in file.event_categories {
        let category = EventCategory::from_name(&entry.name)
            .ok_or_else(|| anyhow!("Unknown event type: {}", entry.name))?;
        if category == EventCategory::All {
            bail!("'{}' is synthesized and cannot be configured", entry.name);
        }
        if named.iter().any(|(c, _)| *c == category) {
            bail!("Event type configured twice: {}", entry.name);
        }
        named.push((category, catalog(&entry.name, entry.codes)?));
    }
    let event_codes = CategoryIndex::new(named);

    let mut event_code_tooltips =
        TooltipMap::for_labels(event_codes.all().iter(), &file.tooltip_prefix);
    for (label, text) in file.tooltips {
        if event_codes.all().contains(&label) {
            event_code_tooltips.insert(&label, text);
        } else {
            tracing::warn!("Tooltip for unknown event code '{}' skipped", label);
        }
    }

    let catalogs = FormCatalogs {
        event_codes,
        pickup_types: catalog("pickup_types", file.pickup_types)?,
        notifications: catalog("notifications", file.notifications)?,
        stores: catalog("stores", file.stores)?,
        event_code_tooltips,
    };

    tracing::info!(
        "Catalogs loaded: {} event codes, {} pickup types, {} notifications, {} stores",
        catalogs.event_codes.all().len(),
        catalogs.pickup_types.len(),
        catalogs.notifications.len(),
        catalogs.stores.len()
    );

    Ok(catalogs)
}

fn catalog(name: &str, labels: Vec<String>) -> anyhow::Result<Catalog> {
    Catalog::new(labels).map_err(|e| anyhow!("Invalid {} catalog: {}", name, e))
}
