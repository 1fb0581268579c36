use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Gauge, Paragraph, Widget},
};

use crate::fast::FASTING_DURATION_SECS;
use crate::session::SessionStore;
use crate::util::make_time_string;
use crate::App;

const HORIZONTAL_MARGIN: u16 = 5;

impl<S: SessionStore> Widget for &App<S> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let fast = &self.fast;

        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let italic_style = Style::default().add_modifier(Modifier::ITALIC);

        // 7 content rows, centered vertically
        let top_pad = area.height.saturating_sub(7) / 2;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .constraints(
                [
                    Constraint::Length(top_pad),
                    Constraint::Length(1), // title
                    Constraint::Length(1), // percentage line
                    Constraint::Length(1), // padding
                    Constraint::Length(3), // progress gauge
                    Constraint::Length(1), // padding
                    Constraint::Length(1), // legend
                    Constraint::Min(0),
                ]
                .as_ref(),
            )
            .split(area);

        let title = Paragraph::new("Intermittent Fasting")
            .style(bold_style.fg(Color::Cyan))
            .alignment(Alignment::Center);
        title.render(chunks[1], buf);

        let percentage = Paragraph::new(format!(
            "Fast {}% completed.",
            fast.percentage_completed()
        ))
        .alignment(Alignment::Center);
        percentage.render(chunks[2], buf);

        let ratio =
            (fast.elapsed_secs() as f64 / FASTING_DURATION_SECS as f64).clamp(0.0, 1.0);
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL))
            .gauge_style(Style::default().fg(Color::Blue).bg(Color::DarkGray))
            .ratio(ratio)
            .label(make_time_string(fast.elapsed_secs()));
        gauge.render(chunks[4], buf);

        let legend = Paragraph::new(if fast.is_counting() {
            "(space) stop / (r)eset / (esc)ape"
        } else {
            "(space) start / (r)eset / (esc)ape"
        })
        .style(italic_style)
        .alignment(Alignment::Center);
        legend.render(chunks[6], buf);
    }
}
