use car_market::aggregate::Rgb;
use car_market::{CarRecord, DashboardPane, KeyValueStore, Route, SeriesPoint};
use ratzilla::ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line as TextLine, Span, Text},
    widgets::{
        Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Scrollbar,
        ScrollbarOrientation, ScrollbarState, Table, Tabs, Wrap,
    },
    Frame,
};

use crate::app::WebApp;

const fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

fn point_color(point: &SeriesPoint) -> Color {
    point.color.map_or(Color::DarkGray, to_color)
}

fn render_message(f: &mut Frame<'_>, area: Rect, message: &str) {
    let paragraph = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    f.render_widget(paragraph, area);
}

fn titled(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray))
}

pub fn render_page<S: KeyValueStore>(app: &WebApp<S>, f: &mut Frame<'_>) {
    let area = f.area();
    let block = Block::default()
        .title("Car Market Analytics")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area).inner(Margin::new(1, 0));
    f.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(10),
            Constraint::Length(2),
        ])
        .split(inner);

    render_nav(app.route, f, layout[0]);

    match app.route {
        Route::Home => render_home(app, f, layout[2]),
        Route::Dashboard => render_dashboard(app, f, layout[2]),
        Route::About => render_about(f, layout[2]),
    }

    render_footer(app, f, layout[3]);
}

fn render_nav(route: Route, f: &mut Frame<'_>, area: Rect) {
    let titles = Route::ALL
        .iter()
        .map(|route| TextLine::from(route.label()))
        .collect::<Vec<_>>();

    let tabs = Tabs::new(titles)
        .select(route.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(0, 0, 238))
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"));
    f.render_widget(tabs, area);
}

fn render_footer<S: KeyValueStore>(app: &WebApp<S>, f: &mut Frame<'_>, area: Rect) {
    let hints = match app.route {
        Route::Home => "↑/↓ select model  Space show/hide",
        Route::Dashboard if app.dashboard.search_active() => "Enter done  Esc clear",
        Route::Dashboard => "/ search  ←/→ switch list  Enter highlight",
        Route::About => "h home  d dashboard",
    };

    let lines = vec![
        TextLine::from(Span::styled(
            app.status_message.clone(),
            Style::default().fg(Color::Green),
        )),
        TextLine::from(vec![
            Span::styled(hints, Style::default().fg(Color::Gray)),
            Span::raw("  "),
            Span::styled("Tab/1-3 pages", Style::default().fg(Color::Gray)),
        ]),
    ];
    f.render_widget(Paragraph::new(Text::from(lines)), area);
}

fn render_home<S: KeyValueStore>(app: &WebApp<S>, f: &mut Frame<'_>, area: Rect) {
    if app.home.is_loading() {
        render_message(f, area, "Loading...");
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let block = titled("Number of Cars by Model");
    let inner = block.inner(rows[0]);
    f.render_widget(block, rows[0]);

    let series = app.home.model_series();
    if series.is_empty() {
        render_message(f, inner, "No data available for models");
    } else {
        let split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(inner);

        let bars: Vec<Bar<'_>> = series
            .iter()
            .map(|point| {
                Bar::default()
                    .value(point.value)
                    .label(TextLine::from(point.label.clone()))
                    .style(Style::default().fg(point_color(point)))
                    .value_style(Style::default().fg(Color::White))
            })
            .collect();
        let max_value = series.iter().map(|point| point.value).max().unwrap_or(0).max(1);
        let chart = BarChart::default()
            .data(BarGroup::default().bars(&bars))
            .max(max_value)
            .bar_gap(1)
            .bar_width(6);
        f.render_widget(chart, split[0]);

        let legend = series
            .iter()
            .enumerate()
            .map(|(index, point)| {
                let hidden = app.home.is_hidden(index);
                let mut label_style = if hidden {
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT)
                } else {
                    Style::default().fg(Color::White)
                };
                if index == app.home.selected_series() {
                    label_style = label_style.add_modifier(Modifier::REVERSED);
                }
                let count = app.home.models().get(&point.label).unwrap_or(0);
                TextLine::from(vec![
                    Span::styled("■ ", Style::default().fg(point_color(point))),
                    Span::styled(point.label.clone(), label_style),
                    Span::styled(format!("  {count}"), Style::default().fg(Color::Gray)),
                ])
            })
            .collect::<Vec<_>>();
        f.render_widget(
            Paragraph::new(Text::from(legend)).wrap(Wrap { trim: true }),
            split[1],
        );
    }

    render_companies(app, f, rows[1]);
}

fn render_companies<S: KeyValueStore>(app: &WebApp<S>, f: &mut Frame<'_>, area: Rect) {
    let split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let block = titled("Share by Company");
    let inner = block.inner(split[0]);
    f.render_widget(block, split[0]);

    let companies = app.home.companies();
    if companies.is_empty() {
        render_message(f, inner, "No data available for companies");
        render_message(f, split[1], "No data available for companies");
        return;
    }

    let bar_width = usize::from(inner.width).saturating_sub(28).max(1);
    let lines = app
        .home
        .company_series()
        .iter()
        .map(|point| {
            let percent = companies.percent_of_total(point.value);
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                clippy::cast_precision_loss
            )]
            let fill = ((percent / 100.0 * bar_width as f64).round() as usize).min(bar_width);
            let color = point_color(point);
            TextLine::from(vec![
                Span::styled(format!("{:<14}", point.label), Style::default().fg(color)),
                Span::styled("█".repeat(fill), Style::default().fg(color)),
                Span::styled(
                    "░".repeat(bar_width - fill),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(format!(" {percent:>5.1}%")),
            ])
        })
        .collect::<Vec<_>>();
    f.render_widget(Paragraph::new(Text::from(lines)), inner);

    let header = Row::new(vec![Cell::from("Company"), Cell::from("Number of Cars")]).style(
        Style::default()
            .fg(Color::Rgb(0, 0, 238))
            .bg(Color::Rgb(200, 200, 200))
            .add_modifier(Modifier::BOLD),
    );
    let rows = companies.iter().map(|(company, count)| {
        Row::new(vec![Cell::from(company.to_string()), Cell::from(count.to_string())])
            .style(Style::default().fg(Color::White))
    });
    let table = Table::new(rows, [Constraint::Min(12), Constraint::Length(14)])
        .header(header)
        .block(titled("Cars by Company"))
        .column_spacing(1);
    f.render_widget(table, split[1]);
}

fn render_dashboard<S: KeyValueStore>(app: &WebApp<S>, f: &mut Frame<'_>, area: Rect) {
    let dashboard = &app.dashboard;
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Percentage(35),
            Constraint::Min(6),
        ])
        .split(area);

    let search_text = if dashboard.search_active() {
        format!("{}_", dashboard.query())
    } else if dashboard.query().is_empty() {
        "Search by car name (press /)".to_string()
    } else {
        dashboard.query().to_string()
    };
    let border = if dashboard.search_active() {
        Color::Cyan
    } else {
        Color::Gray
    };
    f.render_widget(
        Paragraph::new(search_text).block(
            Block::default()
                .title("Search")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        ),
        layout[0],
    );

    let highlights = dashboard.highlights().cars().iter().collect::<Vec<_>>();
    let focused_highlights = dashboard.pane() == DashboardPane::Highlights;
    render_cars(
        &CarList {
            title: "Highlighted Cars",
            empty: "No cars highlighted yet.",
            cars: &highlights,
            selected: dashboard.selected_highlight(),
            focused: focused_highlights,
        },
        |_| true,
        f,
        layout[1],
    );

    let empty = if dashboard.is_loading() {
        "Loading listings..."
    } else {
        "No cars found."
    };
    let visible = dashboard.visible_cars();
    render_cars(
        &CarList {
            title: "Find Your Cars",
            empty,
            cars: &visible,
            selected: dashboard.selected_listing(),
            focused: !focused_highlights,
        },
        |car| dashboard.is_highlighted(&car.id),
        f,
        layout[2],
    );
}

struct CarList<'a> {
    title: &'a str,
    empty: &'a str,
    cars: &'a [&'a CarRecord],
    selected: usize,
    focused: bool,
}

fn render_cars(
    list: &CarList<'_>,
    marked: impl Fn(&CarRecord) -> bool,
    f: &mut Frame<'_>,
    area: Rect,
) {
    let border = if list.focused { Color::Yellow } else { Color::Gray };
    let block = Block::default()
        .title(list.title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if list.cars.is_empty() {
        render_message(f, inner, list.empty);
        return;
    }

    let max_rows = usize::from(inner.height.saturating_sub(1)).max(1);
    let row_offset = (list.selected + 1).saturating_sub(max_rows);

    let header = Row::new(vec![
        Cell::from(" "),
        Cell::from("Name"),
        Cell::from("Price"),
        Cell::from("Status"),
        Cell::from("Province"),
        Cell::from("Action"),
    ])
    .style(
        Style::default()
            .fg(Color::Rgb(0, 0, 238))
            .bg(Color::Rgb(200, 200, 200))
            .add_modifier(Modifier::BOLD),
    );

    let rows = list
        .cars
        .iter()
        .enumerate()
        .skip(row_offset)
        .take(max_rows)
        .map(|(index, car)| {
            let highlighted = marked(car);
            let style = if list.focused && index == list.selected {
                Style::default()
                    .bg(Color::Rgb(0, 0, 238))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Row::new(vec![
                Cell::from(if highlighted { "★" } else { " " }),
                Cell::from(car.display_name.clone()),
                Cell::from(car.price_label()),
                Cell::from(car.status_label().to_string()),
                Cell::from(car.province_label().to_string()),
                Cell::from(if highlighted {
                    "Remove from Highlight"
                } else {
                    "Add to Highlight"
                }),
            ])
            .style(style)
        });

    let table = Table::new(
        rows,
        [
            Constraint::Length(1),
            Constraint::Percentage(32),
            Constraint::Percentage(16),
            Constraint::Percentage(10),
            Constraint::Percentage(16),
            Constraint::Percentage(22),
        ],
    )
    .header(header)
    .column_spacing(1);
    f.render_widget(table, inner);

    let mut scrollbar_state = ScrollbarState::new(list.cars.len())
        .position(row_offset)
        .viewport_content_length(max_rows);
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .thumb_style(Style::default().fg(Color::Rgb(0, 0, 238)));
    f.render_stateful_widget(scrollbar, inner, &mut scrollbar_state);
}

fn render_about(f: &mut Frame<'_>, area: Rect) {
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
        .block(titled("About Us"))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
