use super::state::DatePicker;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const TITLE: &str = " 💥 OOPS I FORGOT TO LOG MY HOURS 🤯 ";
const LABEL: &str = "From date: ";
const DATE_ROW: u16 = 14;

const HELP: [&str; 6] = [
    "  Up / Down          : move one day earlier/later",
    "  Shift + Up / Down  : move one week earlier/later",
    "  Type               : edit the date (YYYY-MM-DD)",
    "  Enter              : confirm",
    "  Esc                : reset to today",
    "  Ctrl+C             : cancel",
];

pub fn draw_picker(f: &mut Frame, picker: &DatePicker) {
    let area = f.size();
    let header = Style::default().fg(Color::Green).add_modifier(Modifier::BOLD);
    let text = Style::default().fg(Color::White);
    let border = "=".repeat(TITLE.chars().count());

    let mut lines = vec![
        Line::from(Span::styled(border.clone(), header)),
        Line::from(Span::styled(TITLE, header)),
        Line::from(Span::styled(border, header)),
        Line::default(),
        Line::from(Span::styled("Select start date (YYYY-MM-DD)", text)),
        Line::default(),
    ];
    lines.extend(HELP.iter().map(|h| Line::from(Span::styled(*h, text))));

    while lines.len() < DATE_ROW as usize - 1 {
        lines.push(Line::default());
    }
    lines.push(match picker.preview() {
        Some(preview) => Line::from(Span::styled(preview, Style::default().fg(Color::Yellow))),
        None => Line::default(),
    });
    lines.push(Line::from(vec![
        Span::styled(LABEL, text),
        Span::styled(picker.input().to_string(), header),
    ]));

    if let Some(message) = picker.message() {
        lines.push(Line::default());
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(message.to_string(), text)));
    }

    f.render_widget(Paragraph::new(lines), area);

    let cursor_x = (LABEL.len() + picker.input().chars().count()) as u16;
    if cursor_x < area.width && DATE_ROW < area.height {
        let Rect { x, y, .. } = area;
        f.set_cursor(x + cursor_x, y + DATE_ROW);
    }
}
