//! The survey's interaction state and its transitions.
//!
//! Every user action maps to one function that takes the current state by
//! reference and returns the next one. Nothing here renders or performs I/O,
//! so the whole voting flow can be exercised without a terminal.

use crate::core::models::{
    CUSTOM_TEXT_LIMIT, CUSTOM_TEXT_WARNING, OPTIONS, OptionId, Submission, Tab,
};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurveyState {
    pub selected: Option<OptionId>,
    pub custom_text: String,
    pub submitted: bool,
    pub active_tab: Tab,
}

impl SurveyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects an option. Free text already typed is kept even when the
    /// new choice is not `custom`.
    pub fn select_option(&self, id: OptionId) -> Self {
        if self.submitted {
            return self.clone();
        }
        debug!(option = %id, "Option selected.");
        Self { selected: Some(id), ..self.clone() }
    }

    /// Moves the selection down the list, wrapping at the end.
    /// With nothing selected, the first option is chosen.
    pub fn select_next(&self) -> Self {
        let next = match self.selected {
            Some(id) => (id.index() + 1) % OPTIONS.len(),
            None => 0,
        };
        self.select_index(next)
    }

    /// Moves the selection up the list, wrapping at the start.
    /// With nothing selected, the last option is chosen.
    pub fn select_previous(&self) -> Self {
        let previous = match self.selected {
            Some(id) => (id.index() + OPTIONS.len() - 1) % OPTIONS.len(),
            None => OPTIONS.len() - 1,
        };
        self.select_index(previous)
    }

    fn select_index(&self, index: usize) -> Self {
        match OptionId::from_index(index) {
            Some(id) => self.select_option(id),
            None => self.clone(),
        }
    }

    /// Replaces the free text. Input over the limit is rejected as a whole,
    /// the previous text stays in place.
    pub fn edit_custom_text(&self, text: &str) -> Self {
        if self.submitted {
            return self.clone();
        }
        let length = text.chars().count();
        if length > CUSTOM_TEXT_LIMIT {
            debug!(length, "Custom text rejected, over the limit.");
            return self.clone();
        }
        Self { custom_text: text.to_string(), ..self.clone() }
    }

    pub fn push_char(&self, c: char) -> Self {
        let mut candidate = self.custom_text.clone();
        candidate.push(c);
        self.edit_custom_text(&candidate)
    }

    pub fn pop_char(&self) -> Self {
        let mut candidate = self.custom_text.clone();
        candidate.pop();
        self.edit_custom_text(&candidate)
    }

    /// True once `custom` is selected; keystrokes then go to the text area.
    pub fn is_typing(&self) -> bool {
        !self.submitted && self.selected == Some(OptionId::Custom)
    }

    pub fn can_submit(&self) -> bool {
        if self.submitted {
            return false;
        }
        match self.selected {
            None => false,
            Some(OptionId::Custom) => !self.custom_text.trim().is_empty(),
            Some(_) => true,
        }
    }

    /// Finalizes the answer. Returns the unchanged state and `None` when the
    /// precondition does not hold.
    pub fn submit(&self) -> (Self, Option<Submission>) {
        let Some(answer) = self.selected.filter(|_| self.can_submit()) else {
            return (self.clone(), None);
        };
        let custom_text = (answer == OptionId::Custom).then(|| self.custom_text.clone());
        let next = Self { submitted: true, ..self.clone() };
        (next, Some(Submission { answer, custom_text }))
    }

    pub fn switch_tab(&self, tab: Tab) -> Self {
        Self { active_tab: tab, ..self.clone() }
    }

    pub fn text_length(&self) -> usize {
        self.custom_text.chars().count()
    }

    pub fn remaining_chars(&self) -> usize {
        CUSTOM_TEXT_LIMIT.saturating_sub(self.text_length())
    }

    pub fn counter_is_warning(&self) -> bool {
        self.text_length() > CUSTOM_TEXT_WARNING
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn custom_with(text: &str) -> SurveyState {
        SurveyState::new().select_option(OptionId::Custom).edit_custom_text(text)
    }

    #[test]
    fn nothing_selected_cannot_submit() {
        let state = SurveyState::new();
        assert!(!state.can_submit());
        let (next, submission) = state.submit();
        assert_eq!(next, state);
        assert!(submission.is_none());
    }

    #[test]
    fn regular_options_submit_without_text() {
        for id in OptionId::iter().filter(|id| *id != OptionId::Custom) {
            let state = SurveyState::new().select_option(id).edit_custom_text("leftover");
            let (next, submission) = state.submit();
            assert!(next.submitted);
            assert_eq!(submission, Some(Submission { answer: id, custom_text: None }));
        }
    }

    #[test]
    fn whitespace_custom_text_is_rejected() {
        let state = custom_with("   \t ");
        assert!(!state.can_submit());
        let (next, submission) = state.submit();
        assert!(!next.submitted);
        assert!(submission.is_none());
    }

    #[test]
    fn custom_text_is_reported_verbatim() {
        let (next, submission) = custom_with("Игровая комната").submit();
        assert!(next.submitted);
        assert_eq!(
            submission,
            Some(Submission {
                answer: OptionId::Custom,
                custom_text: Some("Игровая комната".to_string()),
            })
        );
    }

    #[test]
    fn text_over_limit_is_rejected_not_truncated() {
        let state = custom_with("abc");
        let too_long = "я".repeat(251);
        assert_eq!(state.edit_custom_text(&too_long).custom_text, "abc");

        let exact = "я".repeat(250);
        let accepted = state.edit_custom_text(&exact);
        assert_eq!(accepted.custom_text, exact);
        assert_eq!(accepted.remaining_chars(), 0);
        assert_eq!(accepted.push_char('x').custom_text, exact);
    }

    #[test]
    fn counter_warns_past_240_chars() {
        assert!(!custom_with(&"a".repeat(240)).counter_is_warning());
        let state = custom_with(&"a".repeat(241));
        assert!(state.counter_is_warning());
        assert_eq!(state.remaining_chars(), 9);
    }

    #[test]
    fn keystrokes_edit_the_text() {
        let state = custom_with("").push_char('Д').push_char('а').push_char('!');
        assert_eq!(state.custom_text, "Да!");
        assert_eq!(state.pop_char().custom_text, "Да");
        assert_eq!(SurveyState::new().pop_char().custom_text, "");
    }

    #[test]
    fn switching_away_from_custom_keeps_text() {
        let state = custom_with("Кино").select_option(OptionId::Food);
        assert_eq!(state.custom_text, "Кино");
        assert!(!state.is_typing());
        assert!(state.can_submit());
    }

    #[test]
    fn submitted_state_is_terminal() {
        let (done, _) = SurveyState::new().select_option(OptionId::Sport).submit();
        assert_eq!(done.select_option(OptionId::Food), done);
        assert_eq!(done.edit_custom_text("late"), done);
        assert_eq!(done.select_next(), done);
        assert!(!done.can_submit());
        let (again, submission) = done.submit();
        assert_eq!(again, done);
        assert!(submission.is_none());
    }

    #[test]
    fn tab_switch_leaves_answer_alone() {
        let state = custom_with("Шахматы");
        let on_results = state.switch_tab(Tab::Results);
        assert_eq!(on_results.selected, Some(OptionId::Custom));
        assert_eq!(on_results.custom_text, "Шахматы");
        assert_eq!(on_results.switch_tab(Tab::Vote), state);
    }

    #[test]
    fn arrow_navigation_wraps_around() {
        let state = SurveyState::new();
        assert_eq!(state.select_next().selected, Some(OptionId::Rest));
        assert_eq!(state.select_previous().selected, Some(OptionId::Custom));
        let last = state.select_option(OptionId::Custom);
        assert_eq!(last.select_next().selected, Some(OptionId::Rest));
        let first = state.select_option(OptionId::Rest);
        assert_eq!(first.select_previous().selected, Some(OptionId::Custom));
    }
}
