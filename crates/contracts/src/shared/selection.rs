use serde::{Deserialize, Serialize};

use super::catalog::Catalog;

/// Одна отметка в карте выбора
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionEntry {
    pub label: String,
    pub selected: bool,
}

/// Упорядоченная карта `метка -> выбрано`
///
/// Набор ключей и их порядок всегда совпадают с каталогом, из которого
/// карта построена. Посторонние ключи в карту не попадают: `set` для
/// метки вне каталога ничего не меняет.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SelectionEntry>", into = "Vec<SelectionEntry>")]
pub struct SelectionState {
    entries: Vec<SelectionEntry>,
}

impl SelectionState {
    /// Карта с теми же ключами, что и у каталога, все значения `false`
    pub fn unselected(catalog: &Catalog) -> Self {
        Self::from_fn(catalog, |_| false)
    }

    /// Построить карту, вычисляя значение для каждой метки каталога
    pub fn from_fn<F>(catalog: &Catalog, mut selected: F) -> Self
    where
        F: FnMut(&str) -> bool,
    {
        Self {
            entries: catalog
                .iter()
                .map(|label| SelectionEntry {
                    label: label.to_string(),
                    selected: selected(label),
                })
                .collect(),
        }
    }

    /// Каталог, которому соответствует карта
    pub fn catalog(&self) -> Catalog {
        Catalog::from_checked(self.keys().map(str::to_string).collect())
    }

    pub fn get(&self, label: &str) -> Option<bool> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.selected)
    }

    /// Установить значение для метки
    ///
    /// Возвращает `false`, если метки нет в каталоге.
    pub fn set(&mut self, label: &str, selected: bool) -> bool {
        match self.entries.iter_mut().find(|e| e.label == label) {
            Some(entry) => {
                entry.selected = selected;
                true
            }
            None => false,
        }
    }

    pub fn select_all(&mut self) {
        self.entries.iter_mut().for_each(|e| e.selected = true);
    }

    pub fn clear_all(&mut self) {
        self.entries.iter_mut().for_each(|e| e.selected = false);
    }

    /// Выбранные метки в порядке каталога
    pub fn selected_labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries
            .iter()
            .filter(|e| e.selected)
            .map(|e| e.label.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> + '_ {
        self.entries.iter().map(|e| (e.label.as_str(), e.selected))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Vec<SelectionEntry>> for SelectionState {
    type Error = String;

    /// Ключи проходят те же проверки, что и метки каталога
    fn try_from(entries: Vec<SelectionEntry>) -> Result<Self, Self::Error> {
        Catalog::new(entries.iter().map(|e| e.label.clone()).collect())?;
        Ok(Self { entries })
    }
}

impl From<SelectionState> for Vec<SelectionEntry> {
    fn from(state: SelectionState) -> Self {
        state.entries
    }
}
