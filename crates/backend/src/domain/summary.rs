use contracts::shared::selection::SelectionState;

use super::serializer::JOINER;

/// Текст для пустого выбора в сводке
pub const NONE_TEXT: &str = "None";

/// Разделитель строк сводки
pub const LINE_BREAK: &str = "<br/>";

/// Раздел итоговой сводки
pub enum SummarySection<'a> {
    /// Выбранные метки категории
    Selection {
        title: &'a str,
        state: &'a SelectionState,
    },
    /// Одиночное значение, например текущий тип события
    Value { title: &'a str, text: &'a str },
}

/// Собирает сводку формы в порядке переданных разделов
///
/// Каждая строка: `<b>Название:</b> значение`, строки разделены `<br/>`.
pub fn render(sections: &[SummarySection<'_>]) -> String {
    sections
        .iter()
        .map(|section| match section {
            SummarySection::Selection { title, state } => {
                format!("<b>{}:</b> {}", title, display_selected(state, NONE_TEXT))
            }
            SummarySection::Value { title, text } => format!("<b>{}:</b> {}", title, text),
        })
        .collect::<Vec<_>>()
        .join(LINE_BREAK)
}

/// Выбранные метки через `", "` или `empty_text`, если ничего не выбрано
pub fn display_selected(state: &SelectionState, empty_text: &str) -> String {
    let joined = state.selected_labels().collect::<Vec<_>>().join(JOINER);
    if joined.is_empty() {
        empty_text.to_string()
    } else {
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::catalog::Catalog;

    #[test]
    fn test_render_selection_and_empty_catalog() {
        let events = Catalog::new(vec!["A".into(), "B".into()]).unwrap();
        let events = SelectionState::from_fn(&events, |l| l == "A");
        let pickups = SelectionState::unselected(&Catalog::empty());

        let summary = render(&[
            SummarySection::Selection {
                title: "Events",
                state: &events,
            },
            SummarySection::Selection {
                title: "Pickups",
                state: &pickups,
            },
        ]);
        assert_eq!(summary, "<b>Events:</b> A<br/><b>Pickups:</b> None");
    }

    #[test]
    fn test_render_follows_caller_order() {
        let c = Catalog::new(vec!["X".into(), "Y".into(), "Z".into()]).unwrap();
        let state = SelectionState::from_fn(&c, |l| l != "Y");

        let summary = render(&[
            SummarySection::Value {
                title: "Event Type",
                text: "All Types",
            },
            SummarySection::Selection {
                title: "Stores",
                state: &state,
            },
        ]);
        assert_eq!(
            summary,
            "<b>Event Type:</b> All Types<br/><b>Stores:</b> X, Z"
        );
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn test_display_selected_fallback() {
        let c = Catalog::new(vec!["Store #001 - Downtown".into()]).unwrap();
        let state = SelectionState::unselected(&c);
        assert_eq!(display_selected(&state, "None selected"), "None selected");
    }
}
