// src/ui/widgets/results.rs

use crate::app::SurveyWidget;
use crate::core::models::ResultsSnapshot;
use ratatui::{
    prelude::*,
    widgets::{
        Block, BorderType, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
    },
};

const BAR_FILLED: &str = "█";
const BAR_EMPTY: &str = "░";

/// Renders the results snapshot: total, one bar per option and the
/// collected custom answers.
///
/// The data is static; nothing here depends on the user's own vote. When the
/// content is taller than the card it scrolls with ↑ ↓, and the stored offset
/// is clamped to what the current size allows.
pub fn render_results(frame: &mut Frame, survey: &mut SurveyWidget, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title("Результаты опроса");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = results_lines(&survey.snapshot, inner.width);
    let content_length = lines.len();
    let max_offset = (content_length as u16).saturating_sub(inner.height);
    survey.results_scroll = survey.results_scroll.min(max_offset);

    let paragraph = Paragraph::new(lines).scroll((survey.results_scroll, 0));
    frame.render_widget(paragraph, inner);

    if max_offset > 0 {
        let mut scroll_state =
            ScrollbarState::new(content_length).position(survey.results_scroll as usize);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area.inner(Margin::new(0, 1)),
            &mut scroll_state,
        );
    }
}

/// Builds every line of the results card for a given inner width.
///
/// Each option takes a single row: padded label, text bar, percentage and
/// votes. Custom answers go two per row when both fit side by side.
fn results_lines(snapshot: &ResultsSnapshot, width: u16) -> Vec<Line<'static>> {
    let width = width as usize;
    let mut lines = vec![Line::from(vec![
        Span::raw("Всего голосов: "),
        Span::styled(
            snapshot.total_votes.to_string(),
            Style::new().bold().fg(Color::Magenta),
        ),
    ])];

    let label_width = snapshot
        .results
        .iter()
        .map(|row| row.label.chars().count())
        .max()
        .unwrap_or(0);
    for row in &snapshot.results {
        let figures = format!(" {:>5.1}% {:>4} гол.", row.percentage, row.votes);
        let bar_width = width.saturating_sub(label_width + 1 + figures.chars().count());
        let filled = ((row.percentage / 100.0) * bar_width as f64).round() as usize;
        let filled = filled.min(bar_width);
        lines.push(Line::from(vec![
            Span::raw(format!("{:<label_width$} ", row.label)),
            Span::styled(BAR_FILLED.repeat(filled), Style::default().fg(Color::Magenta)),
            Span::styled(
                BAR_EMPTY.repeat(bar_width - filled),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(figures, Style::new().bold()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from("Свои варианты".bold()));

    let answer_width = snapshot
        .custom_answers
        .iter()
        .map(|answer| answer.chars().count() + 2)
        .max()
        .unwrap_or(0);
    let column_width = width / 2;
    if answer_width < column_width {
        for pair in snapshot.custom_answers.chunks(2) {
            let mut spans = vec![Span::raw(format!(
                "• {:<pad$}",
                pair[0],
                pad = column_width - 2
            ))];
            if let Some(right) = pair.get(1) {
                spans.push(Span::raw(format!("• {right}")));
            }
            lines.push(Line::from(spans));
        }
    } else {
        for answer in &snapshot.custom_answers {
            lines.push(Line::from(format!("• {answer}")));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::results::sample_snapshot;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn wide_card_pairs_custom_answers() {
        let lines = results_lines(&sample_snapshot(), 78);
        assert_eq!(lines.len(), 14);
        let last = plain(&lines[13]);
        assert!(last.starts_with("• Кулинарные курсы"));
        assert!(plain(&lines[9]).contains("• Мастер-классы по рисованию"));
    }

    #[test]
    fn narrow_card_lists_one_answer_per_row() {
        let lines = results_lines(&sample_snapshot(), 40);
        assert_eq!(lines.len(), 1 + 6 + 2 + 9);
        assert_eq!(plain(&lines[9]), "• Игровая комната");
    }

    #[test]
    fn bars_fill_in_proportion() {
        let lines = results_lines(&sample_snapshot(), 78);
        let first = plain(&lines[1]);
        let last = plain(&lines[6]);
        let filled = |s: &str| s.matches(BAR_FILLED).count();
        assert!(filled(&first) > filled(&last));
        assert!(first.ends_with("28.6%   42 гол."));
        assert_eq!(first.chars().count(), 78);
    }
}
