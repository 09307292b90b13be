// src/ui/widgets/footer.rs

use crate::app::{App, SurveyView};
use ratatui::{
    prelude::*,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

fn key(label: &'static str) -> Span<'static> {
    Span::styled(label, Style::new().bold().fg(Color::Yellow))
}

/// Renders the footer widget, which displays available actions.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let survey = &app.survey;
    let mut spans = match survey.view() {
        SurveyView::Voting => {
            let mut spans = vec![key("↑↓"), Span::raw(" выбор, ")];
            if survey.state.is_typing() {
                spans.extend([key("Backspace"), Span::raw(" стереть, ")]);
            } else {
                spans.extend([key("1-6"), Span::raw(" вариант, ")]);
            }
            spans.extend([key("Enter"), Span::raw(" отправить, ")]);
            if survey.show_results {
                spans.extend([key("Tab"), Span::raw(" результаты, ")]);
            }
            spans
        }
        SurveyView::Submitted if survey.show_results => {
            vec![key("R"), Span::raw(" результаты, ")]
        }
        SurveyView::Submitted => Vec::new(),
        SurveyView::Results => vec![
            key("↑↓"),
            Span::raw(" прокрутка, "),
            key("Tab"),
            Span::raw(" назад, "),
        ],
    };
    spans.extend([key("Esc"), Span::raw(" выход")]);

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
