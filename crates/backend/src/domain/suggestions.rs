use contracts::shared::catalog::Catalog;

/// Подсказки по подстроке для редактора чипов
///
/// Пустой (после обрезки) запрос возвращает весь каталог. Иначе — все
/// сообщения, содержащие запрос без учёта регистра, в порядке каталога.
/// Итератор ленивый и не хранит состояния между вызовами.
pub fn filter<'a>(query: Option<&str>, catalog: &'a Catalog) -> impl Iterator<Item = &'a str> + 'a {
    let needle = query.unwrap_or_default().trim().to_lowercase();
    catalog
        .iter()
        .filter(move |message| needle.is_empty() || message.to_lowercase().contains(&needle))
}
