// src/ui/mod.rs

use crate::app::{App, SurveyView};
use ratatui::prelude::*;

mod layout;
mod widgets;

pub fn render(app: &mut App, frame: &mut Frame) {
    let layout = layout::create_layout(frame.area(), app.survey.show_results);

    widgets::header::render_header(frame, app, layout.header);

    if app.survey.show_results {
        widgets::tabs::render_tabs(frame, &app.survey, layout.tabs);
    }

    // Exactly one of the three views occupies the card.
    let survey = &mut app.survey;
    match survey.view() {
        SurveyView::Voting => widgets::vote_form::render_vote_form(frame, survey, layout.card),
        SurveyView::Submitted => widgets::thank_you::render_thank_you(frame, survey, layout.card),
        SurveyView::Results => widgets::results::render_results(frame, survey, layout.card),
    }

    widgets::footer::render_footer(frame, app, layout.footer);
}
