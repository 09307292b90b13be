// src/ui/widgets/tabs.rs

use crate::app::SurveyWidget;
use crate::core::models::Tab;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Tabs},
};
use strum::IntoEnumIterator;

/// Renders the vote/results tab bar of the results-capable widget.
pub fn render_tabs(frame: &mut Frame, survey: &SurveyWidget, area: Rect) {
    let titles = Tab::iter().map(|tab| tab.to_string());
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL))
        .select(survey.state.active_tab.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::new().bold().fg(Color::Magenta));
    frame.render_widget(tabs, area);
}
