use car_market::CarRecord;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Cell, Row, Table};
use ratatui::Frame;

/// First row to draw so that `selected_index` stays inside a window of
/// `max_visible_rows`.
pub const fn scroll_offset(
    total_rows: usize,
    max_visible_rows: usize,
    selected_index: usize,
) -> usize {
    if total_rows <= max_visible_rows || max_visible_rows == 0 {
        return 0;
    }

    if selected_index >= max_visible_rows {
        let offset = selected_index + 1 - max_visible_rows;
        let last_window = total_rows - max_visible_rows;
        return if offset > last_window { last_window } else { offset };
    }

    0
}

fn selected_style() -> Style {
    Style::default()
        .bg(Color::Rgb(0, 0, 238))
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

fn header_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Listing rows with name, price, status and province. `marked` decides which
/// rows get the highlight star; `selected` is only styled when `focused`.
pub fn render_car_table(
    f: &mut Frame<'_>,
    area: Rect,
    block: Block<'_>,
    cars: &[&CarRecord],
    selected: usize,
    focused: bool,
    marked: impl Fn(&CarRecord) -> bool,
) {
    // Borders plus the header row.
    let max_visible_rows = usize::from(area.height.saturating_sub(3));
    let offset = scroll_offset(cars.len(), max_visible_rows, selected);

    let header = Row::new(vec![
        Cell::from(" "),
        Cell::from("Name"),
        Cell::from("Price"),
        Cell::from("Status"),
        Cell::from("Province"),
    ])
    .style(header_style());

    let rows = cars
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .map(|(index, car)| {
            let star = if marked(car) { "★" } else { " " };
            let style = if focused && index == selected {
                selected_style()
            } else {
                Style::default().fg(Color::White)
            };

            Row::new(vec![
                Cell::from(star).style(Style::default().fg(Color::Yellow)),
                Cell::from(car.display_name.clone()),
                Cell::from(car.price_label()),
                Cell::from(car.status_label().to_string()),
                Cell::from(car.province_label().to_string()),
            ])
            .style(style)
        });

    let table = Table::new(
        rows,
        [
            Constraint::Length(1),
            Constraint::Percentage(40),
            Constraint::Percentage(20),
            Constraint::Percentage(15),
            Constraint::Percentage(25),
        ],
    )
    .header(header)
    .block(block)
    .column_spacing(1);

    f.render_widget(table, area);
}
