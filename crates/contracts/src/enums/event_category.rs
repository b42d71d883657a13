use serde::{Deserialize, Serialize};

/// Типы событий, управляющие каталогом кодов событий
///
/// На проводе и в выпадающем списке используется `display_name`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum EventCategory {
    #[default]
    #[serde(rename = "All Types")]
    All,
    #[serde(rename = "Account Management")]
    AccountManagement,
    #[serde(rename = "Transaction Processing")]
    TransactionProcessing,
    #[serde(rename = "System Notifications")]
    SystemNotifications,
    #[serde(rename = "User Authentication")]
    UserAuthentication,
    #[serde(rename = "Data Operations")]
    DataOperations,
    #[serde(rename = "Delivery & Shipping")]
    DeliveryShipping,
    #[serde(rename = "Processing Status")]
    ProcessingStatus,
}

impl EventCategory {
    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            EventCategory::All => "All Types",
            EventCategory::AccountManagement => "Account Management",
            EventCategory::TransactionProcessing => "Transaction Processing",
            EventCategory::SystemNotifications => "System Notifications",
            EventCategory::UserAuthentication => "User Authentication",
            EventCategory::DataOperations => "Data Operations",
            EventCategory::DeliveryShipping => "Delivery & Shipping",
            EventCategory::ProcessingStatus => "Processing Status",
        }
    }

    /// Все типы в порядке выпадающего списка
    pub fn all() -> Vec<EventCategory> {
        let mut all = vec![EventCategory::All];
        all.extend(Self::named());
        all
    }

    /// Именованные типы (без синтетического «All Types»)
    pub fn named() -> Vec<EventCategory> {
        vec![
            EventCategory::AccountManagement,
            EventCategory::TransactionProcessing,
            EventCategory::SystemNotifications,
            EventCategory::UserAuthentication,
            EventCategory::DataOperations,
            EventCategory::DeliveryShipping,
            EventCategory::ProcessingStatus,
        ]
    }

    /// Парсинг из названия
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.display_name() == name)
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_round_trips_every_category() {
        for category in EventCategory::all() {
            assert_eq!(
                EventCategory::from_name(category.display_name()),
                Some(category)
            );
        }
        assert_eq!(EventCategory::from_name("all types"), None);
        assert_eq!(EventCategory::from_name(""), None);
    }

    #[test]
    fn test_serde_uses_display_name() {
        let json = serde_json::to_string(&EventCategory::DeliveryShipping).unwrap();
        assert_eq!(json, r#""Delivery & Shipping""#);
    }
}
