// src/app.rs

use crate::config::SurveyConfig;
use crate::core::models::{OptionId, ResultsSnapshot, Tab};
use crate::core::results;
use crate::core::survey::SurveyState;
use tracing::{debug, info};

pub const PAGE_TITLE: &str = "Опрос о центре досуга";
pub const PAGE_SUBTITLE: &str = "Помогите нам создать идеальное место для отдыха и развития";

/// Receives `(answer, custom_text)` once per successful submission.
pub type SubmitCallback = Box<dyn FnMut(OptionId, Option<&str>)>;

/// Which of the three mutually exclusive views is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurveyView {
    Voting,
    Submitted,
    Results,
}

/// The survey component: interaction state, the results capability and
/// the reporting callback supplied by the host page.
pub struct SurveyWidget {
    pub state: SurveyState,
    pub show_results: bool,
    pub snapshot: ResultsSnapshot,
    /// First visible line of the results card.
    pub results_scroll: u16,
    on_submit: Option<SubmitCallback>,
}

impl SurveyWidget {
    pub fn new(show_results: bool) -> Self {
        Self {
            state: SurveyState::new(),
            show_results,
            snapshot: results::sample_snapshot(),
            results_scroll: 0,
            on_submit: None,
        }
    }

    pub fn with_on_submit(mut self, callback: SubmitCallback) -> Self {
        self.on_submit = Some(callback);
        self
    }

    pub fn view(&self) -> SurveyView {
        if self.show_results && self.state.active_tab == Tab::Results {
            SurveyView::Results
        } else if self.state.submitted {
            SurveyView::Submitted
        } else {
            SurveyView::Voting
        }
    }

    pub fn select_option(&mut self, id: OptionId) {
        self.state = self.state.select_option(id);
    }

    pub fn select_next(&mut self) {
        self.state = self.state.select_next();
    }

    pub fn select_previous(&mut self) {
        self.state = self.state.select_previous();
    }

    pub fn push_char(&mut self, c: char) {
        self.state = self.state.push_char(c);
    }

    pub fn pop_char(&mut self) {
        self.state = self.state.pop_char();
    }

    pub fn edit_custom_text(&mut self, text: &str) {
        self.state = self.state.edit_custom_text(text);
    }

    /// Finalizes the answer if allowed and reports it to the host page.
    /// Returns whether the submission went through.
    pub fn submit(&mut self) -> bool {
        let (next, submission) = self.state.submit();
        self.state = next;
        let Some(submission) = submission else {
            debug!("Submit ignored, answer incomplete.");
            return false;
        };
        let payload = serde_json::to_string(&submission).unwrap_or_default();
        info!(%payload, "Survey submitted.");
        if let Some(callback) = self.on_submit.as_mut() {
            callback(submission.answer, submission.custom_text.as_deref());
        }
        true
    }

    /// Switches tabs. Ignored when the results capability is off.
    pub fn switch_tab(&mut self, tab: Tab) {
        if self.show_results {
            self.state = self.state.switch_tab(tab);
        }
    }

    pub fn toggle_tab(&mut self) {
        self.switch_tab(self.state.active_tab.toggled());
    }

    pub fn scroll_results_up(&mut self) {
        self.results_scroll = self.results_scroll.saturating_sub(1);
    }

    /// The upper bound depends on the card height and is applied when rendering.
    pub fn scroll_results_down(&mut self) {
        self.results_scroll = self.results_scroll.saturating_add(1);
    }
}

/// The page shell: title, subtitle and the hosted survey widget.
pub struct App {
    pub should_quit: bool,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub survey: SurveyWidget,
}

impl App {
    pub fn new(config: &SurveyConfig) -> Self {
        let survey =
            SurveyWidget::new(config.show_results).with_on_submit(Box::new(report_submission));
        Self {
            should_quit: false,
            title: PAGE_TITLE,
            subtitle: PAGE_SUBTITLE,
            survey,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

/// Forwards the widget's answer to the diagnostic log sink, unchanged.
fn report_submission(answer: OptionId, custom_text: Option<&str>) {
    info!(answer = %answer, "Ответ");
    if let Some(text) = custom_text {
        info!(custom_text = text, "Свой вариант");
    }
}
