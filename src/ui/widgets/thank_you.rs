// src/ui/widgets/thank_you.rs

use crate::app::SurveyWidget;
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

/// Renders the acknowledgment shown once the answer has been submitted.
pub fn render_thank_you(frame: &mut Frame, survey: &SurveyWidget, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let mut lines = vec![
        Line::from(""),
        Line::from("🎉"),
        Line::from(""),
        Line::from("Спасибо за участие!".bold()),
        Line::from(""),
        Line::from("Ваш ответ учтён. Мы обязательно рассмотрим все предложения.".fg(Color::Gray)),
    ];
    if survey.show_results {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("Нажмите "),
            Span::styled("R", Style::new().bold().fg(Color::Yellow)),
            Span::raw(", чтобы посмотреть результаты"),
        ]));
    }

    let p = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);
    frame.render_widget(p, area);
}
