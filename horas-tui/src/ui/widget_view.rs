use horas_widget::{BackgroundToken, HoursSection, ListSection};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, LineGauge, Padding, Paragraph},
    Frame,
};

use crate::app::WidgetInstance;

pub(super) fn render_instance(frame: &mut Frame, area: Rect, instance: &WidgetInstance) {
    let Some(template) = &instance.template else {
        let placeholder = Paragraph::new("No snapshot yet").block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", instance.id)),
        );
        frame.render_widget(placeholder, area);
        return;
    };

    let (bg, fg) = match template.background {
        BackgroundToken::Dark => (Color::Black, Color::White),
        BackgroundToken::Light => (Color::White, Color::Black),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", instance.id))
        .style(Style::default().bg(bg).fg(fg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Only visible sections get a chunk; hidden ones collapse entirely.
    let mut constraints = Vec::new();
    if template.hours.is_some() {
        constraints.push(Constraint::Length(5));
    }
    if template.notes.is_some() {
        constraints.push(Constraint::Length(5));
    }
    if template.events.is_some() {
        constraints.push(Constraint::Length(5));
    }
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let mut next = 0;
    if let Some(hours) = &template.hours {
        render_hours(frame, chunks[next], hours, fg);
        next += 1;
    }
    if let Some(notes) = &template.notes {
        render_list(frame, chunks[next], " Notas ", notes, fg);
        next += 1;
    }
    if let Some(events) = &template.events {
        render_list(frame, chunks[next], " Eventos ", events, fg);
    }
}

fn render_hours(frame: &mut Frame, area: Rect, hours: &HoursSection, fg: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Horas ")
        .border_style(Style::default().fg(fg))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(hours.week_label.as_str()).style(Style::default().fg(fg)),
        rows[0],
    );
    frame.render_widget(
        Paragraph::new(hours.month_label.as_str()).style(Style::default().fg(fg)),
        rows[1],
    );

    // The gauge drawing clamps its ratio, but the label keeps the raw
    // bounds so an over-goal month reads e.g. "40/20".
    let progress = hours.progress;
    let ratio = (progress.current as f64 / progress.max as f64).clamp(0.0, 1.0);
    let gauge = LineGauge::default()
        .ratio(ratio)
        .label(format!("{}/{}", progress.current, progress.max))
        .filled_symbol(ratatui::symbols::line::THICK_HORIZONTAL)
        .unfilled_symbol("╌")
        .filled_style(Style::default().fg(Color::Cyan))
        .unfilled_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(gauge, rows[2]);
}

fn render_list(frame: &mut Frame, area: Rect, title: &str, section: &ListSection, fg: Color) {
    let lines: Vec<Line> = section
        .slots
        .iter()
        .map(|slot| Line::from(slot.as_str()))
        .collect();

    let widget = Paragraph::new(lines).style(Style::default().fg(fg)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_string())
            .border_style(Style::default().fg(fg))
            .padding(Padding::horizontal(1)),
    );

    frame.render_widget(widget, area);
}
