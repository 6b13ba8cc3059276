//! Floating controls drawn over the document.

use folio_core::contact::Notice;
use folio_core::utils::text::wrap_text;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use unicode_width::UnicodeWidthStr;

use super::styles;
use crate::layout::controls::NOTICE_MAX_WIDTH;

/// Toast for the current notice, anchored to the top-right corner.
pub struct NoticeToast;

impl NoticeToast {
    const TITLE: &'static str = " x to dismiss ";

    /// Short messages get a narrow toast; long ones wrap at the maximum width.
    fn width_for(message: &str, available: u16) -> u16 {
        let wanted = (message.width() as u16).saturating_add(4);
        let min = Self::TITLE.width() as u16 + 2;
        wanted.clamp(min, NOTICE_MAX_WIDTH).min(available)
    }

    pub fn render(frame: &mut Frame, area: Rect, notice: &Notice) {
        let width = Self::width_for(&notice.message, area.width);
        let text_width = width.saturating_sub(4) as usize;
        let lines: Vec<Line> = wrap_text(&notice.message, text_width)
            .into_iter()
            .map(Line::from)
            .collect();
        let height = (lines.len() as u16 + 2).min(area.height);

        let popup = Rect {
            x: area.x + area.width.saturating_sub(width + 1),
            y: area.y + 1,
            width,
            height,
        };
        let color = styles::notice_color(notice.severity);

        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(lines)
                .style(Style::default().fg(color))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(color))
                        .title(Self::TITLE),
                ),
            popup,
        );
    }
}

/// "Back to top" control in the bottom-right corner of the document.
pub struct BackToTop;

impl BackToTop {
    const LABEL: &'static str = " ↑ Top (t) ";

    pub fn render(frame: &mut Frame, area: Rect) {
        let width = (Self::LABEL.width() as u16).min(area.width);
        if area.height < 2 || width == 0 {
            return;
        }
        let button = Rect {
            x: area.x + area.width.saturating_sub(width + 1),
            y: area.y + area.height - 2,
            width,
            height: 1,
        };
        frame.render_widget(Clear, button);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                Self::LABEL,
                styles::active_item_style(),
            ))),
            button,
        );
    }
}
