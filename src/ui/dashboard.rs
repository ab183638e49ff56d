use crate::area::{resolve_floor_area, resolve_room_area, DisplayMode};
use crate::model::{Floor, House, Status};
use crate::report::format_price;
use crate::report::price::final_price;
use crate::ui::app::App;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Block, Borders, List, ListItem, Paragraph, Row, Scrollbar, ScrollbarOrientation,
        ScrollbarState, Table,
    },
    Frame,
};

// Brand colors
const BRAND_GREEN: Color = Color::Rgb(0x39, 0xB5, 0x4A); // #39b54a - logo green
const BRAND_DARK: Color = Color::Rgb(0x1A, 0x1A, 0x1A); // #1a1a1a
const BRAND_GRAY: Color = Color::Rgb(0x4B, 0x55, 0x63); // #4b5563
const BRAND_SELECT_BG: Color = Color::Rgb(0xD7, 0xF0, 0xDA); // light green
const BRAND_AMBER: Color = Color::Rgb(0xC2, 0x7C, 0x0E); // reserved
const BRAND_RED: Color = Color::Rgb(0xB9, 0x1C, 0x1C); // sold

// Styles
const HEADER_STYLE: Style = Style::new().fg(BRAND_DARK).add_modifier(Modifier::BOLD);
const SELECTED_STYLE: Style = Style::new()
    .bg(BRAND_SELECT_BG)
    .fg(BRAND_DARK)
    .add_modifier(Modifier::BOLD);
const TICKED_STYLE: Style = Style::new().fg(BRAND_GREEN).add_modifier(Modifier::BOLD);
const MUTED_STYLE: Style = Style::new().fg(BRAND_GRAY);

pub fn draw_dashboard(frame: &mut Frame, app: &App) {
    let (Some(house), Some(floor)) = (app.current_house(), app.current_floor()) else {
        draw_empty(frame, app);
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(10),   // Main content
        Constraint::Length(3), // Footer
    ])
    .split(frame.area());

    draw_header(frame, chunks[0], app, house);

    let columns = Layout::horizontal([
        Constraint::Percentage(24), // Houses
        Constraint::Percentage(41), // Rooms
        Constraint::Percentage(35), // Summary
    ])
    .split(chunks[1]);

    draw_houses(frame, columns[0], app);
    draw_rooms(frame, columns[1], app, floor);
    draw_summary(frame, columns[2], app, house, floor);

    draw_footer(
        frame,
        chunks[2],
        app,
        " ←→ House | Tab Floor | ↑↓ Room | Space Tick | a All | c Clear | m Mode | v VAT | Enter Plan | e Export | q Quit ",
    );
}

pub fn draw_plan(frame: &mut Frame, app: &App) {
    let (Some(house), Some(floor)) = (app.current_house(), app.current_floor()) else {
        draw_empty(frame, app);
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(10),   // Rooms + plan
        Constraint::Length(3), // Footer
    ])
    .split(frame.area());

    draw_header(frame, chunks[0], app, house);

    let columns = Layout::horizontal([
        Constraint::Percentage(35), // Rooms
        Constraint::Percentage(65), // Plan
    ])
    .split(chunks[1]);

    draw_rooms(frame, columns[0], app, floor);
    draw_markers(frame, columns[1], app, floor);

    draw_footer(
        frame,
        chunks[2],
        app,
        " Esc Back | ↑↓ Room | Space Tick | HJKL Move marker | s Save calibration | m Mode | q Quit ",
    );
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App, house: &House) {
    let vat = if app.session.include_vat() {
        "Con IVA"
    } else {
        "Sin IVA"
    };
    let title = format!(
        " {} | {} {} | {} | {} | {} ({vat}) | Sup. {} ",
        app.development.name,
        house.id,
        house.name,
        house.house_type,
        house.orientation.as_deref().unwrap_or("-"),
        format_price(final_price(house.price, app.session.include_vat())),
        app.session.display_mode(),
    );

    let header = Paragraph::new(title)
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn draw_houses(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .development
        .houses
        .iter()
        .enumerate()
        .map(|(i, house)| {
            let style = if i == app.selected_house {
                SELECTED_STYLE
            } else {
                Style::default()
            };
            let status_color = match house.status {
                Status::Available => BRAND_GREEN,
                Status::Reserved => BRAND_AMBER,
                Status::Sold => BRAND_RED,
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<4}", house.id), style),
                Span::styled(house.name.clone(), style),
                Span::raw(" "),
                Span::styled("●", Style::default().fg(status_color)),
            ]))
        })
        .collect();

    let title = format!(" Viviendas ({}) ", app.development.total_houses());
    let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));

    frame.render_widget(list, area);
}

fn draw_rooms(frame: &mut Frame, area: Rect, app: &App, floor: &Floor) {
    let mode = app.session.display_mode();
    let selection = app.session.selection();

    // Borders and header row
    let visible_rows = (area.height as usize).saturating_sub(3);
    let scroll_offset = if app.selected_room >= visible_rows {
        app.selected_room - visible_rows + 1
    } else {
        0
    };

    let header = Row::new(vec!["", "Estancia", "Superficie"])
        .style(HEADER_STYLE)
        .height(1);

    let rows: Vec<Row> = floor
        .rooms
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_rows)
        .map(|(i, room)| {
            let ticked = selection.contains(&room.name);
            let style = if i == app.selected_room {
                SELECTED_STYLE
            } else if ticked {
                TICKED_STYLE
            } else {
                Style::default()
            };

            Row::new(vec![
                if ticked { "[x]" } else { "[ ]" }.to_string(),
                room.name.clone(),
                format!("{:.2} m²", resolve_room_area(room, mode)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Percentage(60),
        Constraint::Percentage(30),
    ];

    let title = format!(
        " ◄ {} ► ({} estancias, {}) ",
        floor.name,
        floor.rooms.len(),
        mode_caption(mode)
    );
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BRAND_GREEN)),
    );

    frame.render_widget(table, area);

    // Needs room below the border and header row.
    if floor.rooms.len() > visible_rows && area.height > 3 && area.width > 0 {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"));
        let mut scrollbar_state = ScrollbarState::new(floor.rooms.len()).position(app.selected_room);

        let scrollbar_area = Rect {
            x: area.x + area.width.saturating_sub(1),
            y: area.y + 2,
            width: 1,
            height: area.height.saturating_sub(3),
        };
        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }
}

fn draw_summary(frame: &mut Frame, area: Rect, app: &App, house: &House, floor: &Floor) {
    let mode = app.session.display_mode();
    let selection = app.session.selection();

    let mut lines = vec![
        Line::from(Span::styled(floor.name.label().to_uppercase(), HEADER_STYLE)),
        value_line(
            &format!("Total {} planta", mode_caption(mode)),
            resolve_floor_area(floor, mode),
        ),
    ];
    if floor.has_outdoor() {
        lines.push(value_line("Total exterior", floor.outdoor()));
    }

    lines.push(Line::raw(""));
    let ticked = selection.count_on(floor);
    if ticked > 0 {
        lines.push(Line::from(Span::styled(
            format!("CALCULADORA ({} estancias)", ticked),
            TICKED_STYLE,
        )));
        lines.push(value_line("Suma seleccionada", app.selected_total()));
        lines.push(Line::raw(""));
    }

    lines.push(Line::from(Span::styled("VIVIENDA", HEADER_STYLE)));
    match app.session.report(house) {
        Ok(report) => {
            let totals = report.totals;
            lines.push(percent_line("Interior", totals.interior, totals.pct_interior));
            lines.push(percent_line("Exterior", totals.exterior, totals.pct_exterior));
            lines.push(value_line("Total", totals.total));
        }
        Err(e) => lines.push(Line::from(Span::styled(
            e.to_string(),
            Style::default().fg(BRAND_RED),
        ))),
    }
    lines.push(value_line("Declarada (Const+Ext)", house.total_constructed_area));
    lines.push(value_line("Parcela aprox.", house.parcel_area));
    lines.push(Line::from(vec![
        Span::styled("Estado: ", MUTED_STYLE),
        Span::raw(house.status.to_string()),
    ]));

    let summary = Paragraph::new(lines).block(
        Block::default()
            .title(" Superficies ")
            .borders(Borders::ALL),
    );
    frame.render_widget(summary, area);
}

fn draw_markers(frame: &mut Frame, area: Rect, app: &App, floor: &Floor) {
    let selection = app.session.selection();
    let cursor = floor.rooms.get(app.selected_room).map(|r| r.name.as_str());

    let placed = floor
        .rooms
        .iter()
        .filter(|r| r.marker_position.is_some())
        .count();
    let title = format!(
        " Plano {} ({placed}/{} marcadores) ",
        floor.name,
        floor.rooms.len()
    );

    let canvas = Canvas::default()
        .block(Block::default().title(title).borders(Borders::ALL))
        .x_bounds([0.0, 100.0])
        .y_bounds([0.0, 100.0])
        .paint(|ctx| {
            for room in &floor.rooms {
                let Some(position) = room.marker_position else {
                    continue;
                };
                // Plan percentages grow downwards, canvas y grows upwards.
                let (x, y) = (position.x, 100.0 - position.y);
                let color = if Some(room.name.as_str()) == cursor {
                    BRAND_AMBER
                } else if selection.contains(&room.name) {
                    BRAND_GREEN
                } else {
                    BRAND_GRAY
                };
                ctx.draw(&Points {
                    coords: &[(x, y)],
                    color,
                });
                ctx.print(
                    x,
                    y,
                    Line::styled(format!(" {}", room.name), Style::default().fg(color)),
                );
            }
        });

    frame.render_widget(canvas, area);
}

fn draw_empty(frame: &mut Frame, app: &App) {
    let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(3)]).split(frame.area());

    let message = Paragraph::new(format!(" {} has no houses ", app.development.name))
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(message, chunks[0]);

    draw_footer(frame, chunks[1], app, " q Quit ");
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App, help: &str) {
    let text = app.status.as_deref().unwrap_or(help);
    let footer = Paragraph::new(text.to_string())
        .style(MUTED_STYLE)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}

fn mode_caption(mode: DisplayMode) -> &'static str {
    match mode {
        DisplayMode::Useful => "útil",
        DisplayMode::Constructed => "construida",
    }
}

fn value_line(label: &str, area: f64) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), MUTED_STYLE),
        Span::styled(format!("{area:.2} m²"), Style::default().add_modifier(Modifier::BOLD)),
    ])
}

fn percent_line(label: &str, area: f64, percent: f64) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), MUTED_STYLE),
        Span::styled(format!("{area:.2} m²"), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(format!("  ({percent:.1} %)"), MUTED_STYLE),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin_development;
    use crate::model::Development;
    use crate::session::Session;
    use crossterm::event::KeyCode;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                if app.session.view().is_expanded() {
                    draw_plan(frame, app);
                } else {
                    draw_dashboard(frame, app);
                }
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_dashboard_shows_house_and_floor() {
        let app = App::new(builtin_development(), Session::new("V3"));
        let screen = render(&app, 160, 40);
        assert!(screen.contains("VILLA MARGARITA"));
        assert!(screen.contains("Planta Baja"));
        assert!(screen.contains("233.000 €"));
    }

    #[test]
    fn test_tiny_terminal_does_not_underflow() {
        let mut app = App::new(builtin_development(), Session::new("V3"));
        for (width, height) in [(1, 1), (12, 4), (30, 8), (40, 12)] {
            render(&app, width, height);
        }
        app.handle_key(KeyCode::Enter);
        for (width, height) in [(1, 1), (12, 4), (30, 8)] {
            render(&app, width, height);
        }
    }

    #[test]
    fn test_empty_development_draws_notice() {
        let mut app = App::new(
            Development::new("Vacío".to_string(), String::new(), Vec::new()),
            Session::new("V3"),
        );
        for code in [
            KeyCode::Right,
            KeyCode::Down,
            KeyCode::Char(' '),
            KeyCode::Char('a'),
            KeyCode::Char('e'),
            KeyCode::Enter,
            KeyCode::Char('L'),
        ] {
            app.handle_key(code);
        }

        let screen = render(&app, 60, 10);
        assert!(screen.contains("no houses"));
        assert_eq!(app.selected_total(), 0.0);
    }
}
