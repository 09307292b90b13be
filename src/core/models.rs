// src/core/models.rs

use serde::Serialize;
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

/// Maximum number of characters accepted in the custom answer.
pub const CUSTOM_TEXT_LIMIT: usize = 250;

/// Above this length the character counter switches to the warning style.
pub const CUSTOM_TEXT_WARNING: usize = 240;

/// Stable identifier of a survey choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OptionId {
    Rest,
    Sport,
    Education,
    Food,
    Culture,
    Custom,
}

impl OptionId {
    /// The display label from the options table.
    pub fn label(self) -> &'static str {
        OPTIONS
            .iter()
            .find(|o| o.id == self)
            .map(|o| o.label)
            .unwrap_or_default()
    }

    /// Position of the option in the table, used for keyboard navigation.
    pub fn index(self) -> usize {
        OptionId::iter().position(|id| id == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        OptionId::iter().nth(index)
    }
}

/// One selectable survey choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurveyOption {
    pub id: OptionId,
    pub label: &'static str,
}

/// The fixed list of choices, in display order.
pub static OPTIONS: &[SurveyOption] = &[
    SurveyOption { id: OptionId::Rest, label: "Отдых и общение" },
    SurveyOption { id: OptionId::Sport, label: "Спорт и активности" },
    SurveyOption { id: OptionId::Education, label: "Образование и развитие" },
    SurveyOption { id: OptionId::Food, label: "Еда" },
    SurveyOption { id: OptionId::Culture, label: "Культурные и международные мероприятия" },
    SurveyOption { id: OptionId::Custom, label: "Свой вариант" },
];

/// The two views of the results-capable widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, Display)]
pub enum Tab {
    #[default]
    #[strum(to_string = "Голосование")]
    Vote,
    #[strum(to_string = "Результаты")]
    Results,
}

impl Tab {
    pub fn toggled(self) -> Self {
        match self {
            Tab::Vote => Tab::Results,
            Tab::Results => Tab::Vote,
        }
    }

    pub fn index(self) -> usize {
        Tab::iter().position(|t| t == self).unwrap_or(0)
    }
}

/// A finalized answer, as reported to the hosting page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub answer: OptionId,
    pub custom_text: Option<String>,
}

/// One row of the results snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub id: OptionId,
    pub label: &'static str,
    pub votes: u32,
    pub percentage: f64,
}

/// Aggregate votes and collected custom answers shown on the results tab.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsSnapshot {
    pub total_votes: u32,
    pub results: Vec<ResultRow>,
    pub custom_answers: Vec<&'static str>,
}
