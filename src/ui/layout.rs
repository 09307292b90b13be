// src/ui/layout.rs

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Widest the survey card is allowed to grow.
const MAX_CARD_WIDTH: u16 = 80;

/// Screen areas of the survey page.
///
/// `tabs` is an empty `Rect` when the widget has no results capability.
pub struct AppLayout {
    pub header: Rect,
    pub tabs: Rect,
    pub card: Rect,
    pub footer: Rect,
}

/// Splits the frame into header, centered widget column and footer.
///
/// The middle column is capped at `MAX_CARD_WIDTH` and centered; when
/// `show_tabs` is set its top three rows hold the tab bar.
pub fn create_layout(frame_size: Rect, show_tabs: bool) -> AppLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame_size);

    let card_width = main_chunks[1].width.min(MAX_CARD_WIDTH);
    let column = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(card_width),
            Constraint::Fill(1),
        ])
        .split(main_chunks[1])[1];

    let (tabs, card) = if show_tabs {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(column);
        (chunks[0], chunks[1])
    } else {
        (Rect::default(), column)
    };

    AppLayout {
        header: main_chunks[0],
        tabs,
        card,
        footer: main_chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_is_centered_and_capped() {
        let layout = create_layout(Rect::new(0, 0, 120, 40), false);
        assert_eq!(layout.card.width, MAX_CARD_WIDTH);
        assert_eq!(layout.card.x, 20);
        assert_eq!(layout.tabs, Rect::default());
        assert_eq!(layout.footer.y, 39);
    }

    #[test]
    fn tabs_take_the_top_of_the_column() {
        let layout = create_layout(Rect::new(0, 0, 60, 30), true);
        assert_eq!(layout.tabs.height, 3);
        assert_eq!(layout.tabs.y, 3);
        assert_eq!(layout.card.y, 6);
        assert_eq!(layout.card.width, 60);
    }
}
