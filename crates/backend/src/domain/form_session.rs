use contracts::enums::event_category::EventCategory;
use contracts::shared::catalog::Catalog;
use contracts::shared::selection::SelectionState;
use contracts::shared::selection_form::{CategorySnapshot, FormSnapshot};
use contracts::shared::tooltip::TooltipMap;
use serde::{Deserialize, Serialize};

use super::category_index::CategoryIndex;
use super::summary::{self, SummarySection};
use super::{json_encoder, rebinder, serializer, suggestions};

/// Текст отображения магазинов, когда ничего не выбрано
pub const NO_STORES_TEXT: &str = "None selected";

/// Набор каталогов, из которых строится каждая сессия формы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormCatalogs {
    pub event_codes: CategoryIndex,
    pub pickup_types: Catalog,
    pub notifications: Catalog,
    pub stores: Catalog,
    pub event_code_tooltips: TooltipMap,
}

/// Состояние формы выбора одной пользовательской сессии
///
/// Всё состояние хранится явно и сериализуется целиком; строки скрытых
/// полей и отображаемые значения вычисляются из карт выбора по запросу.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FormSessionData")]
pub struct FormSession {
    catalogs: FormCatalogs,
    event_category: EventCategory,
    event_codes: SelectionState,
    pickup_types: SelectionState,
    notifications: SelectionState,
    stores: SelectionState,
    chip_query: String,
    summary: String,
}

/// Сохранённое состояние до проверки ключей карт по каталогам
#[derive(Deserialize)]
struct FormSessionData {
    catalogs: FormCatalogs,
    event_category: EventCategory,
    event_codes: SelectionState,
    pickup_types: SelectionState,
    notifications: SelectionState,
    stores: SelectionState,
    chip_query: String,
    summary: String,
}

impl TryFrom<FormSessionData> for FormSession {
    type Error = String;

    fn try_from(data: FormSessionData) -> Result<Self, Self::Error> {
        let event_catalog = data
            .catalogs
            .event_codes
            .get(data.event_category)
            .ok_or_else(|| format!("No event code catalog for '{}'", data.event_category))?;
        check_keys("event_codes", &data.event_codes, event_catalog)?;
        check_keys("pickup_types", &data.pickup_types, &data.catalogs.pickup_types)?;
        check_keys("notifications", &data.notifications, &data.catalogs.notifications)?;
        check_keys("stores", &data.stores, &data.catalogs.stores)?;

        Ok(Self {
            catalogs: data.catalogs,
            event_category: data.event_category,
            event_codes: data.event_codes,
            pickup_types: data.pickup_types,
            notifications: data.notifications,
            stores: data.stores,
            chip_query: data.chip_query,
            summary: data.summary,
        })
    }
}

/// Ключи карты должны совпадать с каталогом, включая порядок
fn check_keys(name: &str, state: &SelectionState, catalog: &Catalog) -> Result<(), String> {
    if state.keys().eq(catalog.iter()) {
        Ok(())
    } else {
        Err(format!("{} selection does not match its catalog", name))
    }
}

impl FormSession {
    /// Новая сессия: тип «All Types», ничего не выбрано
    pub fn new(catalogs: FormCatalogs) -> Self {
        let event_category = EventCategory::All;
        Self {
            event_codes: SelectionState::unselected(catalogs.event_codes.all()),
            pickup_types: SelectionState::unselected(&catalogs.pickup_types),
            notifications: SelectionState::unselected(&catalogs.notifications),
            stores: SelectionState::unselected(&catalogs.stores),
            catalogs,
            event_category,
            chip_query: String::new(),
            summary: String::new(),
        }
    }

    pub fn event_category(&self) -> EventCategory {
        self.event_category
    }

    pub fn event_codes(&self) -> &SelectionState {
        &self.event_codes
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Смена типа события
    ///
    /// Каталог кодов заменяется, значения общих меток сохраняются.
    /// Для неизвестного ключа состояние не меняется, возвращается `false`.
    pub fn set_event_category(&mut self, key: &str) -> bool {
        match rebinder::rebind_to(&self.catalogs.event_codes, key, &self.event_codes) {
            Some((category, rebound)) => {
                tracing::debug!(
                    "Event type changed: {} -> {} ({} codes)",
                    self.event_category,
                    category,
                    rebound.len()
                );
                self.event_category = category;
                self.event_codes = rebound;
                true
            }
            None => {
                tracing::warn!("Unknown event type '{}', selection left unchanged", key);
                false
            }
        }
    }

    pub fn set_event_codes_string(&mut self, value: Option<&str>) {
        serializer::apply(&mut self.event_codes, value);
    }

    pub fn set_pickup_types_string(&mut self, value: Option<&str>) {
        serializer::apply(&mut self.pickup_types, value);
    }

    pub fn set_notifications_string(&mut self, value: Option<&str>) {
        serializer::apply(&mut self.notifications, value);
    }

    pub fn set_stores_string(&mut self, value: Option<&str>) {
        serializer::apply(&mut self.stores, value);
    }

    /// Переключить один чип уведомления
    ///
    /// Метки вне каталога уведомлений игнорируются.
    pub fn toggle_notification(&mut self, label: &str, checked: bool) -> bool {
        let applied = self.notifications.set(label, checked);
        if !applied {
            tracing::warn!("Toggle for unknown notification '{}' ignored", label);
        }
        applied
    }

    pub fn select_all_notifications(&mut self) {
        self.notifications.select_all();
    }

    pub fn clear_all_notifications(&mut self) {
        self.notifications.clear_all();
    }

    /// Выбранные уведомления (для отрисовки чипов)
    pub fn selected_notifications(&self) -> Vec<String> {
        self.notifications
            .selected_labels()
            .map(str::to_string)
            .collect()
    }

    pub fn stores_display(&self) -> String {
        summary::display_selected(&self.stores, NO_STORES_TEXT)
    }

    pub fn set_chip_query(&mut self, query: Option<&str>) {
        self.chip_query = query.unwrap_or_default().to_string();
    }

    /// JSON-массив подсказок для текущего запроса в редакторе чипов
    pub fn fetch_suggestions(&self) -> String {
        let matches = suggestions::filter(
            Some(self.chip_query.as_str()),
            &self.catalogs.notifications,
        );
        let payload = json_encoder::encode_array_or_empty(matches);
        tracing::debug!(
            "Suggestions for '{}': {} bytes",
            self.chip_query,
            payload.len()
        );
        payload
    }

    /// Итоговая сводка после отправки формы
    pub fn print_selections(&mut self) -> &str {
        self.summary = summary::render(&[
            SummarySection::Value {
                title: "Event Type",
                text: self.event_category.display_name(),
            },
            SummarySection::Selection {
                title: "Stores",
                state: &self.stores,
            },
            SummarySection::Selection {
                title: "Event Codes",
                state: &self.event_codes,
            },
            SummarySection::Selection {
                title: "Pickup Types",
                state: &self.pickup_types,
            },
            SummarySection::Selection {
                title: "Notifications",
                state: &self.notifications,
            },
        ]);
        &self.summary
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            event_category: self.event_category,
            event_categories: self.catalogs.event_codes.categories().collect(),
            event_codes: category_snapshot(&self.event_codes),
            pickup_types: category_snapshot(&self.pickup_types),
            notifications: category_snapshot(&self.notifications),
            stores: category_snapshot(&self.stores),
            selected_notifications: self.selected_notifications(),
            stores_display: self.stores_display(),
            chip_query: self.chip_query.clone(),
            summary: self.summary.clone(),
            event_code_tooltips: self.catalogs.event_code_tooltips.clone(),
        }
    }
}

fn category_snapshot(state: &SelectionState) -> CategorySnapshot {
    CategorySnapshot {
        catalog: state.catalog(),
        selection: state.clone(),
        encoded: serializer::encode(state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(labels: &[&str]) -> Catalog {
        Catalog::new(labels.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    fn catalogs() -> FormCatalogs {
        let event_codes = CategoryIndex::new(vec![
            (
                EventCategory::AccountManagement,
                catalog(&["EVT001 - Registration", "EVT004 - Activation"]),
            ),
            (
                EventCategory::TransactionProcessing,
                catalog(&["EVT002 - Payment", "EVT003 - Cancellation"]),
            ),
        ]);
        let event_code_tooltips = TooltipMap::for_labels(event_codes.all().iter(), "Tooltip for");
        FormCatalogs {
            event_codes,
            pickup_types: catalog(&["Home Delivery", "Store Pickup"]),
            notifications: catalog(&[
                "Prescription ready for pickup",
                "Medicine out of stock",
                "Refill reminder",
            ]),
            stores: catalog(&["Store #001 - Downtown", "Store #002 - Uptown"]),
            event_code_tooltips,
        }
    }

    #[test]
    fn test_new_session_starts_empty_on_all_types() {
        let session = FormSession::new(catalogs());

        assert_eq!(session.event_category(), EventCategory::All);
        assert_eq!(session.event_codes().len(), 4);
        assert_eq!(session.event_codes().selected_labels().count(), 0);
        assert_eq!(session.stores_display(), NO_STORES_TEXT);
        assert_eq!(session.summary(), "");
    }

    #[test]
    fn test_category_switch_rebinds_and_unknown_is_noop() {
        let mut session = FormSession::new(catalogs());
        session.set_event_codes_string(Some("EVT002 - Payment, EVT004 - Activation"));

        assert!(session.set_event_category("Transaction Processing"));
        assert_eq!(
            session.event_codes().iter().collect::<Vec<_>>(),
            vec![("EVT002 - Payment", true), ("EVT003 - Cancellation", false)]
        );

        let before = session.clone();
        assert!(!session.set_event_category("Bogus"));
        assert_eq!(session, before);

        // a known category without a catalog is also a no-op
        assert!(!session.set_event_category("Data Operations"));
        assert_eq!(session, before);
    }

    #[test]
    fn test_toggle_and_bulk_notification_controls() {
        let mut session = FormSession::new(catalogs());

        assert!(session.toggle_notification("Refill reminder", true));
        assert!(!session.toggle_notification("Not a message", true));
        assert_eq!(session.selected_notifications(), vec!["Refill reminder"]);

        session.select_all_notifications();
        assert_eq!(session.selected_notifications().len(), 3);
        session.clear_all_notifications();
        assert!(session.selected_notifications().is_empty());
    }

    #[test]
    fn test_print_selections_order() {
        let mut session = FormSession::new(catalogs());
        session.set_stores_string(Some("Store #002 - Uptown"));
        session.set_pickup_types_string(Some("Store Pickup , Home Delivery"));

        let summary = session.print_selections().to_string();
        assert_eq!(
            summary,
            "<b>Event Type:</b> All Types<br/>\
             <b>Stores:</b> Store #002 - Uptown<br/>\
             <b>Event Codes:</b> None<br/>\
             <b>Pickup Types:</b> Home Delivery, Store Pickup<br/>\
             <b>Notifications:</b> None"
        );
        assert_eq!(session.summary(), summary);
    }

    #[test]
    fn test_fetch_suggestions_is_idempotent() {
        let mut session = FormSession::new(catalogs());
        session.set_chip_query(Some("  PRESC "));

        let first = session.fetch_suggestions();
        assert_eq!(first, r#"["Prescription ready for pickup"]"#);
        assert_eq!(session.fetch_suggestions(), first);

        session.set_chip_query(None);
        let all: Vec<String> = serde_json::from_str(&session.fetch_suggestions()).unwrap();
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_snapshot_encodes_hidden_fields() {
        let mut session = FormSession::new(catalogs());
        session.set_pickup_types_string(Some("Store Pickup,Home Delivery,Drone"));

        let snapshot = session.snapshot();
        assert_eq!(snapshot.pickup_types.encoded, "Home Delivery, Store Pickup");
        assert_eq!(snapshot.event_categories.len(), 3);
        assert_eq!(
            snapshot.event_code_tooltips.get("EVT001 - Registration"),
            Some("Tooltip for EVT001 - Registration")
        );
    }

    #[test]
    fn test_session_survives_serialization() {
        let mut session = FormSession::new(catalogs());
        session.set_event_category("Account Management");
        session.toggle_notification("Medicine out of stock", true);

        let json = serde_json::to_string(&session).unwrap();
        let restored: FormSession = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, session);
    }

    #[test]
    fn test_deserialize_rejects_maps_out_of_sync_with_catalogs() {
        let mut session = FormSession::new(catalogs());
        session.set_event_category("Account Management");
        let saved = serde_json::to_value(&session).unwrap();

        let mut extra_store = saved.clone();
        extra_store["stores"] = serde_json::json!([
            {"label": "Store #001 - Downtown", "selected": false},
            {"label": "Store #002 - Uptown", "selected": false},
            {"label": "Store #999 - Ghost", "selected": true}
        ]);
        assert!(serde_json::from_value::<FormSession>(extra_store).is_err());

        let mut missing_pickup = saved.clone();
        missing_pickup["pickup_types"] =
            serde_json::json!([{"label": "Home Delivery", "selected": true}]);
        assert!(serde_json::from_value::<FormSession>(missing_pickup).is_err());

        // event codes still belong to "Account Management"
        let mut wrong_category = saved.clone();
        wrong_category["event_category"] = serde_json::json!("Transaction Processing");
        assert!(serde_json::from_value::<FormSession>(wrong_category).is_err());

        let mut no_catalog = saved.clone();
        no_catalog["event_category"] = serde_json::json!("Data Operations");
        assert!(serde_json::from_value::<FormSession>(no_catalog).is_err());

        let mut duplicate = saved.clone();
        duplicate["notifications"] = serde_json::json!([
            {"label": "Refill reminder", "selected": true},
            {"label": "Refill reminder", "selected": false}
        ]);
        assert!(serde_json::from_value::<FormSession>(duplicate).is_err());

        assert_eq!(serde_json::from_value::<FormSession>(saved).unwrap(), session);
    }
}
