use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipEntry {
    pub label: String,
    pub text: String,
}

/// Подсказки к меткам каталога
///
/// Отсутствие ключа означает «без подсказки», а не ошибку.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TooltipMap {
    entries: Vec<TooltipEntry>,
}

impl TooltipMap {
    /// Сгенерировать подсказку `"<prefix> <label>"` для каждой метки
    pub fn for_labels<'a, I>(labels: I, prefix: &str) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut map = Self::default();
        for label in labels {
            map.insert(label, format!("{} {}", prefix, label));
        }
        map
    }

    /// Вставить или заменить подсказку, сохраняя исходную позицию ключа
    pub fn insert(&mut self, label: &str, text: String) {
        match self.entries.iter_mut().find(|e| e.label == label) {
            Some(entry) => entry.text = text,
            None => self.entries.push(TooltipEntry {
                label: label.to_string(),
                text,
            }),
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.text.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
