use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, Gauge, GraphType, List, ListItem, Paragraph, Wrap},
};

use application::ports::in_::GameView;
use domain::{GameState, config};

use crate::app::App;
use crate::theme;

const CELL_WIDTH: usize = 5;

pub fn draw(
    frame: &mut Frame,
    app: &App,
) {
    let area = frame.area();
    let state = app.service.state();
    let view = app.service.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(5), // Market line
            Constraint::Length(6), // Progress + overview
            Constraint::Length(4), // Last round
            Constraint::Min(10),   // Event log + chart
            Constraint::Length(2), // Footer/Help
        ])
        .split(area);

    render_title(frame, chunks[0], &view);
    render_market_line(frame, chunks[1], state);

    let stats = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[2]);
    render_progress(frame, stats[0], state, &view);
    render_overview(frame, stats[1], state);

    render_summary(frame, chunks[3], &view);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[4]);
    render_event_log(frame, bottom[0], app);
    render_revenue_chart(frame, bottom[1], state, &view);

    render_footer(frame, chunks[5], &view);
}

fn render_title(
    frame: &mut Frame,
    area: Rect,
    view: &GameView,
) {
    let text = if view.is_game_over {
        "LOCATION & PRICING - GAME OVER"
    } else {
        "LOCATION & PRICING"
    };

    let title = Paragraph::new(text)
        .style(Style::default().fg(theme::ORANGE).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, area);
}

/// Marker shown at `km` on the market line.
pub(crate) fn marker_at(
    state: &GameState,
    km: i32,
) -> &'static str {
    let player = state.player().position_km == km;
    let competitor = state.competitor().position_km == km;
    let customer = state.customers().iter().any(|c| c.position_km == km);

    match (player, competitor, customer) {
        (true, true, _) => "P+R",
        (true, false, _) => "P",
        (false, true, _) => "R",
        (false, false, true) => "C",
        (false, false, false) => "·",
    }
}

fn render_market_line(
    frame: &mut Frame,
    area: Rect,
    state: &GameState,
) {
    let kms = config::LINE_START_KM..=config::LINE_END_KM;

    let markers: Vec<Span> = kms
        .clone()
        .map(|km| {
            let marker = marker_at(state, km);
            let color = match marker {
                "C" => theme::CUSTOMER,
                "R" => theme::COMPETITOR,
                "·" => theme::TEXT_DIM,
                _ => theme::PLAYER,
            };
            Span::styled(
                format!("{marker:^CELL_WIDTH$}"),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        })
        .collect();

    let scale: Vec<Span> = kms
        .map(|km| {
            Span::styled(
                format!("{:^CELL_WIDTH$}", format!("{km}km")),
                Style::default().fg(theme::TEXT_SECONDARY),
            )
        })
        .collect();

    let line = Paragraph::new(vec![Line::from(markers), Line::from(scale)])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Market Line (P you, R rival, C customer) ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::BORDER_INACTIVE)),
        );
    frame.render_widget(line, area);
}

fn render_progress(
    frame: &mut Frame,
    area: Rect,
    state: &GameState,
    view: &GameView,
) {
    let ratio = f64::from(state.round_index()) / f64::from(state.max_rounds().max(1));
    let label = if view.is_game_over {
        format!("{} / {} complete", state.round_index(), state.max_rounds())
    } else {
        format!("{} / {} - next: round {}", state.round_index(), state.max_rounds(), state.round_index() + 1)
    };
    let border = if view.is_game_over {
        theme::BORDER_INACTIVE
    } else {
        theme::BORDER_ACTIVE
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Game Progress ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
        .gauge_style(Style::default().fg(theme::ORANGE))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(label);
    frame.render_widget(gauge, area);
}

fn render_overview(
    frame: &mut Frame,
    area: Rect,
    state: &GameState,
) {
    let player = state.player();
    let competitor = state.competitor();

    let rows = vec![
        Line::from(vec![
            Span::styled("You   ", Style::default().fg(theme::PLAYER).add_modifier(Modifier::BOLD)),
            Span::raw(format!("{:>3} km   ${}", player.position_km, player.price)),
        ]),
        Line::from(vec![
            Span::styled("Rival ", Style::default().fg(theme::COMPETITOR).add_modifier(Modifier::BOLD)),
            Span::raw(format!("{:>3} km   ${}", competitor.position_km, competitor.price)),
        ]),
    ];

    let overview = Paragraph::new(rows).block(
        Block::default()
            .title(" Market Overview ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BORDER_INACTIVE)),
    );
    frame.render_widget(overview, area);
}

fn render_summary(
    frame: &mut Frame,
    area: Rect,
    view: &GameView,
) {
    let totals = format!(
        "Total revenue: you ${}, rival ${}",
        view.total_player_revenue, view.total_competitor_revenue
    );
    let summary = Paragraph::new(vec![
        Line::from(view.summary.clone()),
        Line::styled(totals, Style::default().fg(theme::AMBER)),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(" Last Round ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BORDER_INACTIVE)),
    );
    frame.render_widget(summary, area);
}

fn render_event_log(
    frame: &mut Frame,
    area: Rect,
    app: &App,
) {
    let visible = usize::from(area.height.saturating_sub(2));
    let skip = app.event_log.len().saturating_sub(visible);
    let events: Vec<ListItem> = app
        .event_log
        .iter()
        .skip(skip)
        .map(|event| {
            let style = if event.starts_with("Game over") {
                Style::default().fg(theme::AMBER)
            } else {
                Style::default().fg(theme::TEXT_SECONDARY)
            };
            ListItem::new(format!("> {}", event)).style(style)
        })
        .collect();

    let list = List::new(events).block(
        Block::default()
            .title(" Rounds ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BORDER_INACTIVE)),
    );
    frame.render_widget(list, area);
}

fn series(values: &[u32]) -> Vec<(f64, f64)> {
    std::iter::once((0.0, 0.0))
        .chain(
            values
                .iter()
                .enumerate()
                .map(|(i, &v)| ((i + 1) as f64, f64::from(v))),
        )
        .collect()
}

fn render_revenue_chart(
    frame: &mut Frame,
    area: Rect,
    state: &GameState,
    view: &GameView,
) {
    let player = series(&view.cumulative.player);
    let competitor = series(&view.cumulative.competitor);

    let x_max = f64::from(state.max_rounds().max(1));
    let y_max = f64::from(view.total_player_revenue.max(view.total_competitor_revenue).max(10)) * 1.1;

    let datasets = vec![
        Dataset::default()
            .name("You")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme::PLAYER))
            .data(&player),
        Dataset::default()
            .name("Rival")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme::COMPETITOR))
            .data(&competitor),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(" Cumulative Revenue ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::BORDER_INACTIVE)),
        )
        .x_axis(
            Axis::default()
                .title("Round")
                .style(Style::default().fg(theme::TEXT_SECONDARY))
                .bounds([0.0, x_max])
                .labels([format!("{:.0}", 0.0), format!("{:.0}", x_max)]),
        )
        .y_axis(
            Axis::default()
                .title("$")
                .style(Style::default().fg(theme::TEXT_SECONDARY))
                .bounds([0.0, y_max])
                .labels([
                    format!("{:.0}", 0.0),
                    format!("{:.0}", y_max / 2.0),
                    format!("{:.0}", y_max),
                ]),
        );

    frame.render_widget(chart, area);
}

fn render_footer(
    frame: &mut Frame,
    area: Rect,
    view: &GameView,
) {
    let text = if view.is_game_over {
        "R for a new game, Q to quit"
    } else {
        "Up/Down price +/-$1, Left/Right move 1km, R reset, Q quit"
    };

    let footer = Paragraph::new(text)
        .style(Style::default().fg(theme::TEXT_DIM))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
