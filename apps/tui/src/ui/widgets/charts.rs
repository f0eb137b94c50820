use car_market::aggregate::Rgb;
use car_market::{HomeController, SeriesPoint};
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

pub const fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

fn series_color(point: &SeriesPoint) -> Color {
    point.color.map_or(Color::Reset, to_color)
}

fn no_data(f: &mut Frame<'_>, area: Rect, message: &str) {
    let paragraph = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    f.render_widget(paragraph, area);
}

pub fn render_model_barchart(home: &HomeController, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Number of Cars")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let series = home.model_series();
    if series.is_empty() {
        no_data(f, inner, "No data available for models");
        return;
    }

    let bars: Vec<Bar<'_>> = series
        .iter()
        .map(|point| {
            Bar::default()
                .value(point.value)
                .label(TextLine::from(point.label.clone()))
                .style(Style::default().fg(series_color(point)))
                .value_style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let max_value = series.iter().map(|point| point.value).max().unwrap_or(0).max(1);

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .max(max_value)
        .bar_gap(1)
        .bar_width(7);

    f.render_widget(chart, inner);
}

/// Clickable-legend equivalent: one line per model, hidden models dimmed
/// with a hollow swatch.
pub fn render_model_legend(home: &HomeController, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Car Models")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    let lines = home
        .models()
        .series()
        .into_iter()
        .enumerate()
        .map(|(index, point)| {
            let hidden = home.is_hidden(index);
            let (swatch, swatch_style, label_style) = if hidden {
                (
                    "□ ",
                    Style::default().fg(Color::DarkGray),
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::DIM),
                )
            } else {
                (
                    "■ ",
                    Style::default().fg(series_color(&point)),
                    Style::default().fg(Color::White),
                )
            };
            let label_style = if index == home.selected_series() {
                label_style.add_modifier(Modifier::REVERSED)
            } else {
                label_style
            };

            TextLine::from(vec![
                Span::styled(swatch, swatch_style),
                Span::styled(point.label, label_style),
                Span::styled(format!("  {}", point.value), Style::default().fg(Color::Gray)),
            ])
        })
        .collect::<Vec<_>>();

    let paragraph = Paragraph::new(Text::from(lines)).block(block);
    f.render_widget(paragraph, area);
}

/// Proportional breakdown of companies, one share bar per company.
pub fn render_company_shares(home: &HomeController, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Share by Company")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let series = home.company_series();
    if series.is_empty() {
        no_data(f, inner, "No data available for companies");
        return;
    }

    let companies = home.companies();
    let label_width = series
        .iter()
        .map(|point| point.label.chars().count())
        .max()
        .unwrap_or(0)
        .min(16);
    let bar_width = usize::from(inner.width)
        .saturating_sub(label_width + 12)
        .max(1);

    let lines = series
        .iter()
        .map(|point| {
            let percent = companies.percent_of_total(point.value);
            let fill = share_fill(percent, bar_width);
            let color = series_color(point);
            TextLine::from(vec![
                Span::styled(
                    format!("{:<label_width$} ", truncate(&point.label, label_width)),
                    Style::default().fg(color),
                ),
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
}

pub fn render_company_table(home: &HomeController, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Cars by Company")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    let companies = home.companies();
    if companies.is_empty() {
        let inner = block.inner(area);
        f.render_widget(block, area);
        no_data(f, inner, "No data available for companies");
        return;
    }

    let header = Row::new(vec![
        Cell::from("Company"),
        Cell::from("Number of Cars"),
    ])
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let rows = companies.iter().map(|(company, count)| {
        Row::new(vec![Cell::from(company.to_string()), Cell::from(count.to_string())])
            .style(Style::default().fg(Color::White))
    });

    let table = Table::new(rows, [Constraint::Min(12), Constraint::Length(14)])
        .header(header)
        .block(block)
        .column_spacing(1);

    f.render_widget(table, area);
}

/// Filled cells for a share bar of `width` cells. Non-zero shares always get
/// at least one cell.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn share_fill(percent: f64, width: usize) -> usize {
    if percent <= 0.0 || width == 0 {
        return 0;
    }
    let cells = (percent / 100.0 * width as f64).round() as usize;
    cells.clamp(1, width)
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_fill_scales_and_clamps() {
        assert_eq!(share_fill(0.0, 20), 0);
        assert_eq!(share_fill(50.0, 20), 10);
        assert_eq!(share_fill(100.0, 20), 20);
        assert_eq!(share_fill(0.1, 20), 1);
        assert_eq!(share_fill(50.0, 0), 0);
    }

    #[test]
    fn palette_maps_to_terminal_rgb() {
        assert_eq!(to_color(Rgb(0xFF, 0x63, 0x84)), Color::Rgb(255, 99, 132));
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("Mercedes-Benz", 4), "Merc");
        assert_eq!(truncate("ฮอนด้า", 3), "ฮอน");
    }
}
