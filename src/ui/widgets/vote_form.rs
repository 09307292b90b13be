// src/ui/widgets/vote_form.rs

use crate::app::SurveyWidget;
use crate::core::models::{CUSTOM_TEXT_LIMIT, OPTIONS};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
};

pub const QUESTION: &str =
    "Если бы был образовательный центр досуга, что бы вас привлекло туда пойти?";
const PLACEHOLDER: &str = "Поделитесь своим вариантом...";
const HINT: &str = "Опишите свой вариант";
const SUBMIT_LABEL: &str = "[ Отправить ответ ]";

/// Visible rows of the custom text area; longer text scrolls.
const TEXT_AREA_ROWS: u16 = 3;

/// Renders the voting card: question, radio list, the custom text area
/// (only while `custom` is selected) and the submit button.
pub fn render_vote_form(frame: &mut Frame, survey: &SurveyWidget, area: Rect) {
    let card = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = card.inner(area);
    frame.render_widget(card, area);

    let typing = survey.state.is_typing();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(1)
        .constraints([
            // Question
            Constraint::Length(2),
            // Radio group
            Constraint::Length(OPTIONS.len() as u16),
            // Text area and counter
            Constraint::Length(if typing { TEXT_AREA_ROWS } else { 0 }),
            Constraint::Length(if typing { 1 } else { 0 }),
            Constraint::Length(1),
            // Submit button
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let question = Paragraph::new(QUESTION.bold()).wrap(Wrap { trim: true });
    frame.render_widget(question, chunks[0]);

    let options: Vec<Line> = OPTIONS
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let selected = survey.state.selected == Some(option.id);
            let (radio, style) = if selected {
                ("(•)", Style::default().fg(Color::Magenta).bold())
            } else {
                ("( )", Style::default())
            };
            Line::from(vec![
                Span::styled(format!("{} ", radio), style),
                Span::styled(format!("{}. ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(option.label, style),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(options), chunks[1]);

    if typing {
        render_custom_text(frame, survey, chunks[2]);
        render_counter(frame, survey, chunks[3]);
    }

    let button_style = if survey.state.can_submit() {
        Style::new().bold().fg(Color::White).bg(Color::Magenta)
    } else {
        Style::new().fg(Color::DarkGray)
    };
    let button =
        Paragraph::new(Span::styled(SUBMIT_LABEL, button_style)).alignment(Alignment::Center);
    frame.render_widget(button, chunks[5]);
}

/// Draws the text area, keeping the row with the cursor in view.
fn render_custom_text(frame: &mut Frame, survey: &SurveyWidget, area: Rect) {
    let block = Block::default()
        .borders(Borders::LEFT)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(Color::Magenta))
        .padding(Padding::left(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let text = &survey.state.custom_text;
    if text.is_empty() {
        frame.render_widget(Paragraph::new(PLACEHOLDER.fg(Color::DarkGray)), inner);
        frame.set_cursor_position((inner.x, inner.y));
        return;
    }

    let rows = wrap_chars(text, inner.width as usize);
    let first_visible = rows.len().saturating_sub(inner.height as usize);
    let visible: Vec<Line> = rows[first_visible..]
        .iter()
        .map(|row| Line::from(row.as_str()))
        .collect();
    let cursor_row = (rows.len() - 1 - first_visible) as u16;
    let cursor_column = rows
        .last()
        .map(|row| Line::from(row.as_str()).width())
        .unwrap_or(0) as u16;
    frame.render_widget(Paragraph::new(visible), inner);
    frame.set_cursor_position((inner.x + cursor_column, inner.y + cursor_row));
}

fn render_counter(frame: &mut Frame, survey: &SurveyWidget, area: Rect) {
    let counter_style = if survey.state.counter_is_warning() {
        Style::default().fg(Color::Red).bold()
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let counter = format!(
        "{}/{} (осталось {})",
        survey.state.text_length(),
        CUSTOM_TEXT_LIMIT,
        survey.state.remaining_chars()
    );
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    frame.render_widget(Paragraph::new(HINT.fg(Color::DarkGray)), halves[0]);
    frame.render_widget(
        Paragraph::new(Span::styled(counter, counter_style)).alignment(Alignment::Right),
        halves[1],
    );
}

/// Splits `text` into rows of at most `width` columns, breaking anywhere.
/// A full last row is followed by an empty one, where the cursor goes.
fn wrap_chars(text: &str, width: usize) -> Vec<String> {
    let mut rows = vec![String::new()];
    let mut used = 0;
    for c in text.chars() {
        let char_width = Span::raw(c.to_string()).width();
        if used > 0 && used + char_width > width {
            rows.push(String::new());
            used = 0;
        }
        if let Some(row) = rows.last_mut() {
            row.push(c);
        }
        used += char_width;
    }
    if used >= width {
        rows.push(String::new());
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_breaks_at_exact_width() {
        assert_eq!(wrap_chars("abcdefg", 3), vec!["abc", "def", "g"]);
        assert_eq!(wrap_chars("Клуб", 10), vec!["Клуб"]);
    }

    #[test]
    fn full_last_row_opens_a_new_one() {
        assert_eq!(wrap_chars("abcdef", 3), vec!["abc", "def", ""]);
    }

    #[test]
    fn spaces_are_kept_verbatim() {
        assert_eq!(wrap_chars("a  b", 2), vec!["a ", " b", ""]);
    }
}
