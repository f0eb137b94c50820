use crate::app::state::Dashboard;
use crate::app::App;
use crate::ui::widgets::tables::render_car_table;
use car_market::{CarRecord, DashboardPane};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused { Color::Yellow } else { Color::Gray };
    Block::default()
        .title(title)
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn render_search(dashboard: &Dashboard, f: &mut Frame<'_>, area: Rect) {
    let active = dashboard.search_active();
    let (text, style) = if dashboard.query().is_empty() && !active {
        (
            "Search by car name (press /)".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else if active {
        (format!("{}_", dashboard.query()), Style::default().fg(Color::White))
    } else {
        (dashboard.query().to_string(), Style::default().fg(Color::White))
    };

    let border = if active { Color::Cyan } else { Color::Gray };
    let search = Paragraph::new(text).style(style).block(
        Block::default()
            .title("Search")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    f.render_widget(search, area);
}

fn render_empty(f: &mut Frame<'_>, area: Rect, block: Block<'_>, message: &str) {
    let paragraph = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray))
        .block(block);
    f.render_widget(paragraph, area);
}

fn render_highlights(dashboard: &Dashboard, f: &mut Frame<'_>, area: Rect) {
    let focused = dashboard.pane() == DashboardPane::Highlights;
    let block = pane_block("Highlighted Cars", focused);

    let cars = dashboard.highlights().cars().iter().collect::<Vec<_>>();
    if cars.is_empty() {
        render_empty(f, area, block, "No cars highlighted yet.");
        return;
    }

    render_car_table(
        f,
        area,
        block,
        &cars,
        dashboard.selected_highlight(),
        focused,
        |_| true,
    );
}

fn render_listings(dashboard: &Dashboard, f: &mut Frame<'_>, area: Rect) {
    let focused = dashboard.pane() == DashboardPane::Listings;
    let cars = dashboard.visible_cars();
    let title = if dashboard.query().is_empty() {
        "Find Your Cars".to_string()
    } else {
        format!("Find Your Cars ({} of {})", cars.len(), dashboard.all_cars().len())
    };
    let block = pane_block(&title, focused);

    if dashboard.is_loading() {
        render_empty(f, area, block, "Loading listings...");
        return;
    }
    if cars.is_empty() {
        render_empty(f, area, block, "No cars found.");
        return;
    }

    render_car_table(
        f,
        area,
        block,
        &cars,
        dashboard.selected_listing(),
        focused,
        |car| dashboard.is_highlighted(&car.id),
    );
}

fn detail_line<'a>(label: &'a str, value: String) -> TextLine<'a> {
    TextLine::from(vec![
        Span::styled(
            format!("{label}: "),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(value),
    ])
}

fn details_text(car: &CarRecord, highlighted: bool) -> Text<'static> {
    let action = if highlighted {
        Span::styled(
            "[Enter] Remove from Highlight",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            "[Enter] Add to Highlight",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    };

    Text::from(vec![
        TextLine::from(Span::styled(
            car.display_name.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        detail_line("Company", car.company().to_string()),
        detail_line("Model", car.model.clone()),
        detail_line("Price", car.price_label()),
        detail_line("Status", car.status_label().to_string()),
        detail_line("Province", car.province_label().to_string()),
        detail_line(
            "Image",
            car.image_url.clone().unwrap_or_else(|| "N/A".to_string()),
        ),
        TextLine::from(""),
        TextLine::from(action),
    ])
}

fn render_details(dashboard: &Dashboard, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Details")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    let Some(car) = dashboard.selected_car() else {
        render_empty(f, area, block, "Select a car to see its details.");
        return;
    };

    let paragraph = Paragraph::new(details_text(car, dashboard.is_highlighted(&car.id)))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

pub fn render_dashboard(app: &App, f: &mut Frame<'_>, area: Rect) {
    let dashboard = &app.dashboard;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(6)])
        .split(area);
    render_search(dashboard, f, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
        .split(rows[1]);

    let lists = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(columns[0]);

    render_highlights(dashboard, f, lists[0]);
    render_listings(dashboard, f, lists[1]);
    render_details(dashboard, f, columns[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_offer_the_matching_action() {
        let car = CarRecord::new(1, "Toyota Camry", "Camry");

        let add = details_text(&car, false);
        let remove = details_text(&car, true);

        let last = |text: &Text<'_>| text.lines.last().map(ToString::to_string);
        assert_eq!(last(&add).as_deref(), Some("[Enter] Add to Highlight"));
        assert_eq!(last(&remove).as_deref(), Some("[Enter] Remove from Highlight"));
    }

    #[test]
    fn details_fill_missing_fields() {
        let car = CarRecord::new(1, "Toyota Camry", "Camry");
        let rendered = details_text(&car, false)
            .lines
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();

        assert!(rendered.contains(&"Status: N/A".to_string()));
        assert!(rendered.contains(&"Company: Toyota".to_string()));
    }
}
