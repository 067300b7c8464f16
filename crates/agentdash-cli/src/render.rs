use agentdash_core::chart::{self, ChartViewport, LABELS, SERIES, Y_MAX};
use agentdash_core::export::STATS;
use agentdash_core::keymap::HELP;
use agentdash_core::overlay::{Modal, ModalKind, NotificationKind};
use agentdash_core::{AgentState, Dashboard, Page};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Axis, Block, Borders, Chart, Clear, Dataset, GraphType, Paragraph, Row, Table,
        TableState, Tabs, Wrap,
    },
    Frame,
};

use std::rc::Rc;

const SERIES_COLORS: [Color; 3] = [Color::Cyan, Color::Magenta, Color::Yellow];
const TOAST_WIDTH: u16 = 42;

fn screen_layout(size: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3), // Navigation
                Constraint::Length(4), // Page header
                Constraint::Min(0),    // Main
                Constraint::Length(3), // Controls
                Constraint::Length(1), // Help
            ]
            .as_ref(),
        )
        .split(size)
}

fn overview_layout(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)].as_ref())
        .split(area)
}

/// Area the overview chart occupies on a terminal of `size`
pub fn chart_area(size: Rect) -> Rect {
    overview_layout(screen_layout(size)[2])[1]
}

pub fn draw(f: &mut Frame, dash: &Dashboard) {
    let chunks = screen_layout(f.size());

    draw_navigation(f, dash, chunks[0]);
    draw_header(f, dash, chunks[1]);

    match dash.page() {
        Page::Dashboard => draw_overview(f, dash, chunks[2]),
        Page::Agents => draw_agents(f, dash, chunks[2]),
        page => draw_static_page(f, page, chunks[2]),
    }

    draw_controls(f, dash, chunks[3]);
    draw_help(f, chunks[4]);

    if let Some(modal) = dash.modal().current() {
        draw_modal(f, modal, false);
    } else if let Some(modal) = dash.modal().fading() {
        draw_modal(f, modal, true);
    }
    draw_notifications(f, dash);
}

fn draw_navigation(f: &mut Frame, dash: &Dashboard, area: Rect) {
    let badge = dash.counts().badge();
    let titles: Vec<Line<'_>> = Page::ALL
        .iter()
        .enumerate()
        .map(|(i, page)| {
            let label = if *page == Page::Agents {
                format!("{} {} ({})", i + 1, page.nav_label(), badge)
            } else {
                format!("{} {}", i + 1, page.nav_label())
            };
            Line::from(label)
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title("AgentDash"))
        .select(dash.page().index())
        .style(Style::default().fg(Color::Cyan))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, area);
}

fn draw_header(f: &mut Frame, dash: &Dashboard, area: Rect) {
    let header = dash.navigator().header();
    let text = vec![
        Line::from(Span::styled(
            header.title,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(header.subtitle, Style::default().fg(Color::Gray))),
    ];
    let block = Paragraph::new(text).block(Block::default().borders(Borders::ALL));
    f.render_widget(block, area);
}

fn draw_overview(f: &mut Frame, dash: &Dashboard, area: Rect) {
    let chunks = overview_layout(area);

    let counts = dash.counts();
    let stats = [
        ("MCP Servers", STATS.mcp_servers.to_string()),
        ("RAG Documents", STATS.rag_documents.to_string()),
        ("Active Agents", format!("{}/{}", counts.running, counts.total)),
        ("Security Score", STATS.security_score.to_string()),
    ];
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4].as_ref())
        .split(chunks[0]);
    for ((title, value), cell) in stats.iter().zip(cells.iter()) {
        let widget = Paragraph::new(value.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL).title(*title));
        f.render_widget(widget, *cell);
    }

    draw_chart(f, dash, chunks[1]);
}

fn draw_chart(f: &mut Frame, dash: &Dashboard, area: Rect) {
    let viewport = dash
        .chart_viewport()
        .unwrap_or_else(|| ChartViewport::new(area.width, area.height));

    let last = (LABELS.len() - 1) as f64;
    let gridlines: Vec<Vec<(f64, f64)>> = chart::gridline_values()
        .into_iter()
        .map(|v| vec![(0.0, v), (last, v)])
        .collect();
    let series: Vec<Vec<(f64, f64)>> = SERIES.iter().map(|s| s.points()).collect();

    let mut datasets: Vec<Dataset<'_>> = gridlines
        .iter()
        .map(|line| {
            Dataset::default()
                .marker(Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::DarkGray))
                .data(line)
        })
        .collect();
    for ((s, points), color) in SERIES.iter().zip(series.iter()).zip(SERIES_COLORS) {
        datasets.push(
            Dataset::default()
                .name(s.name)
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(color))
                .data(points),
        );
        datasets.push(
            Dataset::default()
                .marker(Marker::Block)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(color))
                .data(points),
        );
    }

    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL).title("Weekly Activity"))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, last])
                .labels(LABELS.iter().map(|l| Span::raw(*l)).collect()),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, Y_MAX])
                .labels(viewport.y_labels().into_iter().map(Span::raw).collect()),
        );
    f.render_widget(chart, area);
}

fn progress_bar(progress: u8, width: usize) -> String {
    let progress = progress.min(100);
    let filled = usize::from(progress) * width / 100;
    format!(
        "{}{} {:>3}%",
        "█".repeat(filled),
        "░".repeat(width - filled),
        progress
    )
}

fn state_color(state: AgentState) -> Color {
    match state {
        AgentState::Running => Color::Green,
        AgentState::Warning => Color::Yellow,
        AgentState::Paused => Color::Gray,
    }
}

fn draw_agents(f: &mut Frame, dash: &Dashboard, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)].as_ref())
        .split(area);

    let counts = dash.counts();
    let mut summary = vec![Span::raw(format!(
        " Total {}  Running {}  Warning {}  Paused {}",
        counts.total, counts.running, counts.warning, counts.paused
    ))];
    if dash.is_searching() {
        summary.push(Span::styled(
            format!("   Search: {}_", dash.search_query()),
            Style::default().fg(Color::Yellow),
        ));
    } else if !dash.search_query().is_empty() {
        summary.push(Span::styled(
            format!("   Filter: \"{}\"", dash.search_query()),
            Style::default().fg(Color::Cyan),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(summary)), chunks[0]);

    if counts.show_empty_state() {
        let empty = Paragraph::new("No agents running.\n\nPress 'n' to create a new agent.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL).title("Agents"));
        f.render_widget(empty, chunks[1]);
        return;
    }

    let rows = dash.visible_agents().into_iter().map(|agent| {
        let removing = dash.is_removing(agent.id);
        let style = if removing {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default()
        };
        let action = if removing {
            "removing...".to_string()
        } else {
            format!("{} {}", agent.state.toggle_icon(), agent.state.toggle_label())
        };
        Row::new(vec![
            Span::raw(agent.name.clone()),
            Span::raw(agent.status.clone()),
            Span::raw(progress_bar(agent.progress, 10)),
            Span::raw(agent.elapsed()),
            Span::styled(agent.state.as_str(), Style::default().fg(state_color(agent.state))),
            Span::raw(action),
        ])
        .style(style)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(20),
            Constraint::Percentage(28),
            Constraint::Length(16),
            Constraint::Length(7),
            Constraint::Length(8),
            Constraint::Min(10),
        ],
    )
    .header(
        Row::new(vec!["Name", "Status", "Progress", "Time", "State", "Action"]).style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    )
    .block(Block::default().borders(Borders::ALL).title("Agents"))
    .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol(">> ");

    let mut state = TableState::default();
    state.select(dash.selected_index());
    f.render_stateful_widget(table, chunks[1], &mut state);
}

fn draw_static_page(f: &mut Frame, page: Page, area: Rect) {
    let lines: Vec<Line<'_>> = page.description().iter().map(|l| Line::from(*l)).collect();
    let block = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(page.nav_label()))
        .wrap(Wrap { trim: true });
    f.render_widget(block, area);
}

fn draw_controls(f: &mut Frame, dash: &Dashboard, area: Rect) {
    let focused = dash.focused_control().map(|c| c.id);
    let mut spans = Vec::new();
    for control in dash.page_controls() {
        let style = if Some(control.id) == focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        spans.push(Span::styled(format!("[ {} ]", control.label), style));
        spans.push(Span::raw(" "));
    }
    let widget = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Actions"));
    f.render_widget(widget, area);
}

fn draw_help(f: &mut Frame, area: Rect) {
    let text = HELP
        .iter()
        .map(|(key, what)| format!("{key} {what}"))
        .collect::<Vec<_>>()
        .join(" | ");
    f.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::Gray)),
        area,
    );
}

fn draw_modal(f: &mut Frame, modal: &Modal, fading: bool) {
    let area = centered_rect(50, 30, f.size());
    let accent = match modal.kind {
        ModalKind::Confirm => Color::Cyan,
        ModalKind::Danger => Color::Red,
    };
    let mut style = Style::default().fg(Color::White);
    if fading {
        style = style.add_modifier(Modifier::DIM);
    }

    let text = vec![
        Line::from(modal.body.as_str()),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("[y] {}", modal.confirm_label),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::raw("   [n] Cancel"),
        ]),
    ];

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(text)
            .style(style)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(accent))
                    .title(modal.title.as_str()),
            ),
        area,
    );
}

fn draw_notifications(f: &mut Frame, dash: &Dashboard) {
    let screen = f.size();
    if screen.width < TOAST_WIDTH + 2 {
        return;
    }
    let x = screen.width - TOAST_WIDTH - 1;
    for (i, note) in dash.notifications().iter().enumerate() {
        let y = 1 + (i as u16) * 3;
        if y + 3 > screen.height {
            break;
        }
        let area = Rect::new(x, y, TOAST_WIDTH, 3);
        let (color, title) = match note.kind {
            NotificationKind::Info => (Color::Blue, "Info"),
            NotificationKind::Success => (Color::Green, "Success"),
            NotificationKind::Warning => (Color::Yellow, "Warning"),
        };
        f.render_widget(Clear, area);
        f.render_widget(
            Paragraph::new(note.message.as_str()).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .title(title),
            ),
            area,
        );
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100u16.saturating_sub(percent_y)) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100u16.saturating_sub(percent_y)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100u16.saturating_sub(percent_x)) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100u16.saturating_sub(percent_x)) / 2),
        ])
        .split(vertical[1])[1]
}
