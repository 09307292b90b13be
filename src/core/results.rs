//! Static sample data for the results tab.
//!
//! The figures are illustrative and never change with the user's own vote.
//! Percentages are derived from the vote counts, rounded to one decimal.

use crate::core::models::{OptionId, ResultRow, ResultsSnapshot};

/// Sample vote counts, in display order.
static SAMPLE_TALLY: &[(OptionId, u32)] = &[
    (OptionId::Rest, 42),
    (OptionId::Sport, 35),
    (OptionId::Education, 31),
    (OptionId::Food, 18),
    (OptionId::Culture, 12),
    (OptionId::Custom, 9),
];

static SAMPLE_CUSTOM_ANSWERS: &[&str] = &[
    "Игровая комната",
    "Мастер-классы по рисованию",
    "Шахматный клуб",
    "Кинопоказы по выходным",
    "Коворкинг с хорошим Wi-Fi",
    "Музыкальная студия",
    "Языковой клуб",
    "Настольные игры",
    "Кулинарные курсы",
];

/// Share of `votes` in `total`, in percent with one decimal.
pub fn percentage(votes: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (f64::from(votes) * 1000.0 / f64::from(total)).round() / 10.0
}

pub fn sample_snapshot() -> ResultsSnapshot {
    let total_votes: u32 = SAMPLE_TALLY.iter().map(|(_, votes)| votes).sum();
    let results = SAMPLE_TALLY
        .iter()
        .map(|&(id, votes)| ResultRow {
            id,
            label: id.label(),
            votes,
            percentage: percentage(votes, total_votes),
        })
        .collect();

    ResultsSnapshot {
        total_votes,
        results,
        custom_answers: SAMPLE_CUSTOM_ANSWERS.to_vec(),
    }
}
