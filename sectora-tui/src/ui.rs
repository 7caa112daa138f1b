use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table, TableState, Wrap},
};
use sectora_core::geo::SERVICE_RADIUS_KM;

use crate::app::{App, Field, Screen};

pub(crate) fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();

    // Outer layout: title, main content, status line
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [header_area, content_area, status_area] = chunks else {
        return;
    };

    let header = Paragraph::new("sectora – delivery sector management")
        .block(Block::default().borders(Borders::ALL).title("Sectora"));
    frame.render_widget(header, *header_area);

    match app.screen {
        Screen::Sectors => draw_sector_table(frame, app, *content_area),
        Screen::Register => draw_register_form(frame, app, *content_area),
        Screen::Available => draw_available(frame, app, *content_area),
    }

    let nav_hint = match app.screen {
        Screen::Sectors => "↑/↓ move · n new sector · a available near me · r reload · q/Ctrl-C quit",
        Screen::Register => "Tab/↓ next field · Shift-Tab/↑ previous · Enter save · Esc back",
        Screen::Available => "Type `lat, lng` · Enter locate · Esc back · Ctrl-C quit",
    };

    let error = app.error_message.as_deref().or_else(|| app.store.error());
    let status_text = if app.is_loading {
        format!("Loading… · {nav_hint}")
    } else if let Some(msg) = error {
        format!("Error: {msg} · {nav_hint}")
    } else if let Some(msg) = &app.info_message {
        format!("{msg} · {nav_hint}")
    } else {
        nav_hint.to_owned()
    };

    let status_style = if error.is_some() {
        Style::default().fg(Color::Red)
    } else if app.is_loading {
        Style::default().fg(Color::Yellow)
    } else if app.info_message.is_some() {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(status_style)
        .wrap(Wrap { trim: true });

    frame.render_widget(status, *status_area);
}

fn draw_sector_table(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let title = "Registered sectors";
    let sectors = app.store.sectors();

    if sectors.is_empty() {
        let paragraph = Paragraph::new("No sectors registered.")
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    }

    let rows = sectors.iter().map(|sector| {
        Row::new(vec![
            Cell::from(sector.name.clone()),
            Cell::from(sector.address.clone()),
            Cell::from(sector.schedule().to_string()),
        ])
    });

    let column_widths = [
        Constraint::Percentage(30),
        Constraint::Percentage(50),
        Constraint::Min(13),
    ];

    let table = Table::new(rows, column_widths)
        .header(
            Row::new(vec!["Name", "Address", "Hours"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(Block::default().borders(Borders::ALL).title(title))
        .row_highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .column_spacing(1);

    let mut state = TableState::default();
    state.select(Some(app.sector_list_index.min(sectors.len().saturating_sub(1))));
    frame.render_stateful_widget(table, area, &mut state);
}

fn draw_register_form(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let constraints = Field::ALL.map(|_| Constraint::Length(3));
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (field, field_area) in Field::ALL.into_iter().zip(layout_chunks.iter()) {
        let focused = app.form.focused() == field;
        let title = match app.form.error(field) {
            Some(error) => format!("{} – {error}", field.label()),
            None => field.label().to_owned(),
        };

        let style = if app.form.error(field).is_some() {
            Style::default().fg(Color::Red)
        } else if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        let input = Paragraph::new(app.form.value(field))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(style)
                    .title(title),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(input, *field_area);
    }
}

fn draw_available(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // position input
            Constraint::Min(0),    // results
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [input_area, results_area] = chunks else {
        return;
    };

    let input = Paragraph::new(app.position_input.as_str())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Your location (lat, lng, Enter)"),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(input, *input_area);

    let title = match app.position {
        Some(position) => format!("Open within {SERVICE_RADIUS_KM} km of {position}"),
        None => "Open sectors near you".to_owned(),
    };

    let items = match app.position {
        None => vec![ListItem::new("Enter your location to see nearby sectors.")],
        Some(position) => {
            let available = app.available_now();
            if available.is_empty() {
                vec![ListItem::new(
                    "No services available in your area right now.",
                )]
            } else {
                available
                    .into_iter()
                    .map(|sector| {
                        ListItem::new(format!(
                            "{} – {} ({:.2} km, {})",
                            sector.name,
                            sector.address,
                            sector.distance_km(position),
                            sector.schedule()
                        ))
                    })
                    .collect()
            }
        }
    };

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(list, *results_area);
}
