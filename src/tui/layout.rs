use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::domain::{format_price, VehicleRecord};
use crate::tui::app::{ActivePane, Section, TuiApp};

const ACTIVE_BORDER: Color = Color::Cyan;
const INACTIVE_BORDER: Color = Color::DarkGray;

pub fn render(frame: &mut Frame, app: &mut TuiApp) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // Panes
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16),     // Sections pane
            Constraint::Percentage(45), // Entries pane
            Constraint::Min(20),        // Details pane
        ])
        .split(rows[0]);

    render_sections_pane(frame, app, panes[0]);
    render_entries_pane(frame, app, panes[1]);
    render_details_pane(frame, app, panes[2]);
    render_status_bar(frame, app, rows[1]);
}

fn border_style(active: bool) -> Style {
    if active {
        Style::default().fg(ACTIVE_BORDER)
    } else {
        Style::default().fg(INACTIVE_BORDER)
    }
}

fn highlight_style(active: bool) -> Style {
    if active {
        Style::default()
            .bg(Color::Cyan)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().bg(Color::DarkGray)
    }
}

fn render_sections_pane(frame: &mut Frame, app: &mut TuiApp, area: Rect) {
    let is_active = app.active_pane == ActivePane::Sections;

    let items: Vec<ListItem> = Section::ALL
        .iter()
        .map(|section| ListItem::new(section.title()))
        .collect();

    let block = Block::default()
        .title(" Sections ")
        .borders(Borders::ALL)
        .border_style(border_style(is_active));

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight_style(is_active))
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut app.section_list_state);
}

fn render_entries_pane(frame: &mut Frame, app: &mut TuiApp, area: Rect) {
    let is_active = app.active_pane == ActivePane::Entries;

    let items: Vec<ListItem> = app
        .entries
        .iter()
        .map(|entry| {
            let priced = entry
                .vehicle
                .as_ref()
                .and_then(|name| app.vehicles.get(name))
                .is_some();
            let style = if priced {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            ListItem::new(entry.display()).style(style)
        })
        .collect();

    let title = format!(
        " {} [{}/{}] ",
        app.selected_section().title(),
        if app.entries.is_empty() { 0 } else { app.entry_index + 1 },
        app.entries.len()
    );

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(is_active));

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight_style(is_active))
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut app.entry_list_state);
}

fn vehicle_lines(name: &str, record: &VehicleRecord) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::Yellow);
    let mut lines = vec![
        Line::from(Span::styled(
            name.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Category: ", label),
            Span::raw(record.category.clone()),
        ]),
        Line::from(vec![
            Span::styled("Price: ", label),
            Span::raw(record.display_original_price()),
        ]),
    ];

    if record.is_free {
        lines.push(Line::from(vec![
            Span::styled("Discounted: ", label),
            Span::styled("FREE", Style::default().fg(Color::Green)),
        ]));
    } else if record.discounted_price.is_some() {
        let pct = record
            .discount_percent
            .map(|p| format!(" ({}% off)", p))
            .unwrap_or_default();
        lines.push(Line::from(vec![
            Span::styled("Discounted: ", label),
            Span::styled(
                format!("{}{}", format_price(record.discounted_price), pct),
                Style::default().fg(Color::Green),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Catalog: {}", record.url),
        Style::default().fg(Color::Blue),
    )));
    lines.push(Line::from(Span::styled(
        format!("Image: {}", record.image_url),
        Style::default().fg(Color::Blue),
    )));
    lines
}

fn render_details_pane(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let is_active = app.active_pane == ActivePane::Details;

    let content = if app.update.is_none() {
        Text::from(vec![
            Line::from("No weekly update saved yet."),
            Line::from(""),
            Line::from("Press R to fetch the latest post."),
        ])
    } else if let Some((name, record)) = app.selected_vehicle() {
        Text::from(vehicle_lines(name, record))
    } else if let Some(entry) = app.selected_entry() {
        let mut lines = Vec::new();
        if !entry.label.is_empty() {
            lines.push(Line::from(Span::styled(
                entry.label.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
        }
        lines.push(Line::from(entry.value.clone()));
        if entry.vehicle.is_some() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "No catalog data. Run `weekly-track resolve`.",
                Style::default().fg(Color::DarkGray),
            )));
        }
        Text::from(lines)
    } else {
        Text::from("Nothing listed")
    };

    let block = Block::default()
        .title(" Details ")
        .borders(Borders::ALL)
        .border_style(border_style(is_active));

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0));

    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let status = if app.is_refreshing {
        "Fetching latest post...".to_string()
    } else if let Some(ref msg) = app.status_message {
        msg.clone()
    } else {
        "j/k:Navigate  n/p:Page  Tab:Pane  o:Open  R:Refresh  q:Quit".to_string()
    };

    let paragraph =
        Paragraph::new(status).style(Style::default().fg(Color::White).bg(Color::DarkGray));

    frame.render_widget(paragraph, area);
}
