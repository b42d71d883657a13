use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Неизменяемый упорядоченный список уникальных меток одной категории
///
/// Каталог никогда не меняется на месте: при смене категории он
/// заменяется целиком. На проводе сериализуется как обычный массив строк.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Catalog {
    labels: Vec<String>,
}

impl Catalog {
    /// Создать каталог с проверкой меток
    ///
    /// Пустые метки и дубликаты отклоняются.
    pub fn new(labels: Vec<String>) -> Result<Self, String> {
        {
            let mut seen = BTreeSet::new();
            for label in &labels {
                if label.trim().is_empty() {
                    return Err("Catalog label must not be empty".into());
                }
                // decode trims tokens, so padded labels could never be selected
                if label.trim() != label {
                    return Err(format!(
                        "Catalog label has surrounding whitespace: '{}'",
                        label
                    ));
                }
                if !seen.insert(label.as_str()) {
                    return Err(format!("Duplicate catalog label: {}", label));
                }
            }
        }
        Ok(Self { labels })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Отсортированное объединение каталогов без дубликатов
    ///
    /// Сортировка лексикографическая по тексту метки.
    pub fn union<'a, I>(catalogs: I) -> Self
    where
        I: IntoIterator<Item = &'a Catalog>,
    {
        let merged: BTreeSet<&str> = catalogs
            .into_iter()
            .flat_map(|c| c.labels.iter().map(String::as_str))
            .collect();
        Self {
            labels: merged.into_iter().map(str::to_string).collect(),
        }
    }

    /// Keys of a selection map already satisfy the catalog invariants.
    pub(crate) fn from_checked(labels: Vec<String>) -> Self {
        Self { labels }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }
}

impl TryFrom<Vec<String>> for Catalog {
    type Error = String;

    fn try_from(labels: Vec<String>) -> Result<Self, Self::Error> {
        Catalog::new(labels)
    }
}

impl From<Catalog> for Vec<String> {
    fn from(catalog: Catalog) -> Self {
        catalog.labels
    }
}
