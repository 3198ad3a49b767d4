use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::app::App;

mod widget_view;

pub fn render(frame: &mut Frame, app: &mut App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    // One pane per placed instance, committed independently.
    let count = app.instances.len().max(1) as u32;
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, count); count as usize])
        .split(root[0]);

    for (instance, pane) in app.instances.iter().zip(panes.iter()) {
        widget_view::render_instance(frame, *pane, instance);
    }

    render_status(frame, root[1], app);
    render_controls(frame, root[2]);
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let status_text = app
        .status_message
        .as_deref()
        .unwrap_or("Waiting for companion app updates");
    let is_error = status_text.to_lowercase().contains("error");

    let (border_style, text_color) = if is_error {
        (Style::default().fg(Color::Red), Color::Red)
    } else {
        (Style::default().fg(Color::White), Color::White)
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(text_color))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Status ")
                .border_style(border_style)
                .padding(Padding::horizontal(1)),
        );

    frame.render_widget(status, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = vec![
        Span::styled("1", Style::default().fg(Color::Yellow)),
        Span::raw(": +1h  "),
        Span::styled("3", Style::default().fg(Color::Yellow)),
        Span::raw(": +30min  "),
        Span::styled("N", Style::default().fg(Color::Yellow)),
        Span::raw(": Add note  "),
        Span::styled("R", Style::default().fg(Color::Yellow)),
        Span::raw(": Refresh  "),
        Span::styled("Q", Style::default().fg(Color::Yellow)),
        Span::raw(": Quit"),
    ];

    let controls = Paragraph::new(Line::from(line))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Line::from(vec![Span::styled(
                    " Controls ",
                    Style::default().fg(Color::DarkGray),
                )]))
                .border_style(Style::default().fg(Color::DarkGray))
                .padding(Padding::horizontal(1)),
        );

    frame.render_widget(controls, area);
}
