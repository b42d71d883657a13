use contracts::enums::event_category::EventCategory;
use contracts::shared::catalog::Catalog;
use serde::{Deserialize, Serialize};

/// Каталоги кодов событий по типу события
///
/// Каталог «All Types» синтезируется один раз при создании индекса как
/// отсортированное объединение всех именованных каталогов и при
/// переключении типа не пересчитывается.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryIndex {
    all: Catalog,
    named: Vec<CategoryCatalog>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct CategoryCatalog {
    category: EventCategory,
    catalog: Catalog,
}

impl CategoryIndex {
    /// Собрать индекс из именованных каталогов
    ///
    /// Переданный каталог для `EventCategory::All` игнорируется: он всегда
    /// вычисляется из остальных.
    pub fn new(named: Vec<(EventCategory, Catalog)>) -> Self {
        let named: Vec<CategoryCatalog> = named
            .into_iter()
            .filter(|(category, _)| *category != EventCategory::All)
            .map(|(category, catalog)| CategoryCatalog { category, catalog })
            .collect();
        let all = Catalog::union(named.iter().map(|e| &e.catalog));

        Self { all, named }
    }

    pub fn get(&self, category: EventCategory) -> Option<&Catalog> {
        if category == EventCategory::All {
            return Some(&self.all);
        }
        self.named
            .iter()
            .find(|e| e.category == category)
            .map(|e| &e.catalog)
    }

    /// Найти каталог по значению селектора типа
    pub fn resolve(&self, key: &str) -> Option<(EventCategory, &Catalog)> {
        let category = EventCategory::from_name(key)?;
        self.get(category).map(|catalog| (category, catalog))
    }

    /// Типы, для которых есть каталог, в порядке индекса
    pub fn categories(&self) -> impl Iterator<Item = EventCategory> + '_ {
        std::iter::once(EventCategory::All).chain(self.named.iter().map(|e| e.category))
    }

    /// Синтетический каталог «All Types»
    pub fn all(&self) -> &Catalog {
        &self.all
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(labels: &[&str]) -> Catalog {
        Catalog::new(labels.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    fn index() -> CategoryIndex {
        CategoryIndex::new(vec![
            (
                EventCategory::AccountManagement,
                catalog(&["EVT004 - Activation", "EVT001 - Registration"]),
            ),
            (
                EventCategory::TransactionProcessing,
                catalog(&["EVT002 - Payment", "EVT001 - Registration"]),
            ),
        ])
    }

    #[test]
    fn test_all_is_sorted_union() {
        let index = index();
        assert_eq!(
            index.all().labels(),
            &[
                "EVT001 - Registration",
                "EVT002 - Payment",
                "EVT004 - Activation"
            ]
        );
        assert_eq!(index.get(EventCategory::All), Some(index.all()));
    }

    #[test]
    fn test_explicit_all_catalog_is_replaced() {
        let index = CategoryIndex::new(vec![
            (EventCategory::All, catalog(&["bogus"])),
            (EventCategory::DataOperations, catalog(&["EVT033 - Data Export"])),
        ]);
        assert_eq!(index.all().labels(), &["EVT033 - Data Export"]);
        assert_eq!(index.categories().count(), 2);
    }

    #[test]
    fn test_resolve_unknown_keys() {
        let index = index();
        assert!(index.resolve("Account Management").is_some());
        // known category without a catalog
        assert!(index.resolve("Data Operations").is_none());
        assert!(index.resolve("No Such Type").is_none());
    }
}
