use contracts::shared::catalog::Catalog;
use contracts::shared::selection::SelectionState;

/// Разделитель токенов во входящей строке
pub const DELIMITER: char = ',';

/// Разделитель при кодировании
pub const JOINER: &str = ", ";

/// Кодирует выбранные метки в строку скрытого поля
///
/// Метки идут в порядке каталога, пустой выбор даёт `""`.
/// Метка, содержащая запятую, обратно не раскодируется: экранирования нет.
pub fn encode(state: &SelectionState) -> String {
    state.selected_labels().collect::<Vec<_>>().join(JOINER)
}

/// Раскодирует строку скрытого поля в карту выбора по каталогу
///
/// Токены обрезаются по пробелам, пустые отбрасываются. Сравнение точное,
/// с учётом регистра. Неизвестные токены молча игнорируются.
pub fn decode(text: Option<&str>, catalog: &Catalog) -> SelectionState {
    let tokens: Vec<&str> = tokens(text).collect();
    SelectionState::from_fn(catalog, |label| tokens.contains(&label))
}

/// Сбрасывает карту и применяет к ней строку скрытого поля
pub fn apply(state: &mut SelectionState, text: Option<&str>) {
    state.clear_all();
    for token in tokens(text) {
        state.set(token, true);
    }
}

fn tokens<'a>(text: Option<&'a str>) -> impl Iterator<Item = &'a str> {
    text.unwrap_or_default()
        .split(DELIMITER)
        .map(str::trim)
        .filter(|t| !t.is_empty())
}
