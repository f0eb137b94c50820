use crate::app::App;
use crate::ui::widgets::charts;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use throbber_widgets_tui::{Throbber, WhichUse, BRAILLE_SIX};

fn render_loading(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(20),
            Constraint::Min(0),
        ])
        .split(rows[1]);

    let throbber = Throbber::default()
        .label("Loading...")
        .style(Style::default().fg(Color::White))
        .throbber_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .throbber_set(BRAILLE_SIX)
        .use_type(WhichUse::Spin);

    let mut state = app.throbber.clone();
    f.render_stateful_widget(throbber, columns[1], &mut state);
}

pub fn render_home(app: &App, f: &mut Frame<'_>, area: Rect) {
    if app.home.is_loading() {
        render_loading(app, f, area);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Percentage(55),
            Constraint::Min(6),
        ])
        .split(area);

    let heading = Paragraph::new("Car Listings Overview")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(heading, rows[0]);

    let model_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(20)])
        .split(rows[1]);
    charts::render_model_legend(&app.home, f, model_row[0]);
    charts::render_model_barchart(&app.home, f, model_row[1]);

    let company_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[2]);
    charts::render_company_shares(&app.home, f, company_row[0]);
    charts::render_company_table(&app.home, f, company_row[1]);
}
