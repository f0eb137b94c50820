use crate::app::App;
use crate::cli::CliArgs;
use car_market::{DashboardPane, Route};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line as TextLine, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame,
};

use super::widgets::popup::centered_rect;

const BRAND: &str = "Car Market Analytics";

pub fn render_nav(app: &App, f: &mut Frame<'_>, area: Rect) {
    let titles = Route::ALL
        .iter()
        .enumerate()
        .map(|(index, route)| TextLine::from(format!(" {} {} ", index + 1, route.label())))
        .collect::<Vec<_>>();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(BRAND)
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Gray)),
        )
        .select(app.route.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );

    f.render_widget(tabs, area);
}

fn key(label: &str) -> Span<'_> {
    Span::styled(
        label,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
}

fn page_shortcuts(app: &App) -> Vec<Span<'static>> {
    match app.route {
        Route::Home => vec![
            key("↑/↓"),
            Span::raw(" select model  "),
            key("Space"),
            Span::raw(" show/hide  "),
        ],
        Route::Dashboard if app.dashboard.search_active() => vec![
            key("Enter"),
            Span::raw(" done  "),
            key("Esc"),
            Span::raw(" clear search  "),
        ],
        Route::Dashboard => {
            let action = match app.dashboard.selected_car() {
                Some(car) if app.dashboard.is_highlighted(&car.id) => " remove highlight  ",
                Some(_) => " add highlight  ",
                None => " highlight  ",
            };
            vec![
                key("/"),
                Span::raw(" search  "),
                key("←/→"),
                Span::raw(" switch list  "),
                key("Enter"),
                Span::raw(action),
            ]
        }
        Route::About => vec![key("h"), Span::raw(" home  "), key("d"), Span::raw(" dashboard  ")],
    }
}

/// Status message (if any) above the key hints for the current page.
pub fn render_status(app: &App, f: &mut Frame<'_>, area: Rect) {
    let mut shortcuts = page_shortcuts(app);
    shortcuts.extend([
        key("Tab"),
        Span::raw(" next page  "),
        key("F1"),
        Span::raw(" help  "),
        key("q"),
        Span::raw(" quit"),
    ]);

    let status = if app.status_message.is_empty() {
        TextLine::from("")
    } else {
        TextLine::from(Span::styled(
            app.status_message.clone(),
            Style::default().fg(Color::Green),
        ))
    };

    let paragraph = Paragraph::new(Text::from(vec![status, TextLine::from(shortcuts)]))
        .alignment(Alignment::Left);
    f.render_widget(paragraph, area);
}

fn shortcut_line(keys: &'static str, description: &'static str) -> TextLine<'static> {
    TextLine::from(vec![
        Span::styled(
            format!("  {keys}"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" - {description}")),
    ])
}

fn section(title: &'static str) -> TextLine<'static> {
    TextLine::from(Span::styled(
        title,
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

pub fn render_help(app: &App, f: &mut Frame<'_>) {
    let area = centered_rect(70, 80, f.area());

    let help_block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let focus = match app.dashboard.pane() {
        DashboardPane::Highlights => "highlighted cars",
        DashboardPane::Listings => "listings",
    };

    let mut help_text = vec![
        TextLine::from(Span::styled(
            BRAND,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from("Browse used-car listings, see how they break down by model and company, and keep a list of highlighted cars."),
        TextLine::from(""),
        section("Everywhere:"),
        shortcut_line("Tab / Shift+Tab", "Next / previous page"),
        shortcut_line("1 2 3", "Home, Dashboard, About Us"),
        shortcut_line("F1 or ?", "Toggle this help screen"),
        shortcut_line("q", "Quit application"),
        TextLine::from(""),
        section("Home:"),
        shortcut_line("↑/↓", "Select a model in the legend"),
        shortcut_line("Space / Enter", "Show or hide the selected model"),
        TextLine::from(""),
        section("Dashboard:"),
        shortcut_line("/ or s", "Search by car name"),
        shortcut_line("c", "Clear the search"),
        shortcut_line("←/→", "Switch between listings and highlighted cars"),
        shortcut_line("Enter / Space", "Add to or remove from highlights"),
        shortcut_line("Esc", "Clear the search, then go back home"),
        TextLine::from(format!("  Focus: {focus}")),
        TextLine::from(""),
        section("CLI Options:"),
    ];

    for line in CliArgs::help_text().lines() {
        if line.starts_with("Usage") || line.starts_with("Options") || line.trim().is_empty() {
            continue;
        }
        help_text.push(TextLine::from(line.to_string()));
    }

    help_text.push(TextLine::from(""));
    help_text.push(TextLine::from(Span::styled(
        "Press Esc to close this help screen",
        Style::default().fg(Color::Yellow),
    )));

    let help_paragraph = Paragraph::new(Text::from(help_text))
        .block(help_block)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(help_paragraph, area);
}
