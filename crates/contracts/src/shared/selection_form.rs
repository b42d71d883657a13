use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::catalog::Catalog;
use super::selection::SelectionState;
use super::tooltip::TooltipMap;
use crate::enums::event_category::EventCategory;

/// Ответ на создание сессии формы
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SessionCreatedResponse {
    pub session_id: Uuid,
}

/// Каталог вместе с текущей картой выбора и её строковым представлением
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CategorySnapshot {
    pub catalog: Catalog,
    pub selection: SelectionState,
    /// Значение скрытого поля формы
    pub encoded: String,
}

/// Всё, что нужно для отрисовки формы
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FormSnapshot {
    pub event_category: EventCategory,
    pub event_categories: Vec<EventCategory>,
    pub event_codes: CategorySnapshot,
    pub pickup_types: CategorySnapshot,
    pub notifications: CategorySnapshot,
    pub stores: CategorySnapshot,
    pub selected_notifications: Vec<String>,
    pub stores_display: String,
    pub chip_query: String,
    pub summary: String,
    pub event_code_tooltips: TooltipMap,
}

/// Отправка формы: строки скрытых полей
///
/// Отсутствующее поле не трогает соответствующую карту.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct SubmitSelectionsRequest {
    #[serde(default)]
    pub event_codes: Option<String>,
    #[serde(default)]
    pub pickup_types: Option<String>,
    #[serde(default)]
    pub notifications: Option<String>,
    #[serde(default)]
    pub stores: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SwitchCategoryRequest {
    pub category: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ToggleRequest {
    pub label: String,
    pub checked: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct SuggestionQuery {
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SummaryResponse {
    pub summary: String,
}
