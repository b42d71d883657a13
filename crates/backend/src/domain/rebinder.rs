use contracts::enums::event_category::EventCategory;
use contracts::shared::catalog::Catalog;
use contracts::shared::selection::SelectionState;

use super::category_index::CategoryIndex;

/// Перестраивает карту выбора под новый каталог
///
/// Для меток, общих со старой картой, переносится прежнее значение,
/// причём как `true`, так и `false`. Новые метки получают `false`.
pub fn rebind(previous: &SelectionState, catalog: &Catalog) -> SelectionState {
    SelectionState::from_fn(catalog, |label| previous.get(label).unwrap_or(false))
}

/// Переключение типа события по значению селектора
///
/// `None`, если для ключа нет каталога: вызывающий код оставляет
/// прежнюю карту без изменений.
pub fn rebind_to(
    index: &CategoryIndex,
    key: &str,
    previous: &SelectionState,
) -> Option<(EventCategory, SelectionState)> {
    let (category, catalog) = index.resolve(key)?;
    Some((category, rebind(previous, catalog)))
}
