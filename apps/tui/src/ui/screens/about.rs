use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_about(f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("About Us")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    let text = vec![
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Welcome From Car Market Thailand",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from("No 1 Digital Car Market in Thailand"),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Thanks Everyone Customer For Trusting Us",
            Style::default().fg(Color::Yellow),
        )),
    ];

    let paragraph = Paragraph::new(Text::from(text))
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}
