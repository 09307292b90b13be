// src/ui/widgets/header.rs

use crate::app::App;
use ratatui::{prelude::*, widgets::Paragraph};

/// Renders the page title and subtitle above the survey.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let text = Text::from(vec![
        Line::from(app.title.bold()),
        Line::from(app.subtitle.fg(Color::Gray)),
    ]);
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}
