use std::io::{self, Stdout, Write};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use adapters::{JsonLinesNotifier, TracingNotifier};
use application::ports::in_::{ActionOutcome, GameService};
use application::ports::out_::GameNotifier;
use domain::PlayerAction;

mod app;
mod events;
mod theme;
mod ui;

use app::App;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Parser)]
#[command(name = "hotelling", about = "Two vendors, one street, ten rounds")]
struct Args {
    /// Play these comma-separated actions without the terminal UI
    /// (price_up, price_down, move_left, move_right)
    #[arg(long, value_delimiter = ',')]
    play: Option<Vec<PlayerAction>>,

    /// Print the final game state as JSON after a scripted run
    #[arg(long, requires = "play")]
    json: bool,

    /// Print every game notification as a JSON line instead of round summaries
    #[arg(long, requires = "play")]
    events: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    match args.play {
        Some(actions) => run_scripted(&actions, args.json, args.events),
        None => run_interactive(),
    }
}

fn run_scripted(
    actions: &[PlayerAction],
    json: bool,
    events: bool,
) -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let notifier: Arc<dyn GameNotifier> = if events {
        Arc::new(JsonLinesNotifier::new(io::stdout()))
    } else {
        Arc::new(TracingNotifier::new())
    };
    let mut service = GameService::new(notifier);

    for &action in actions {
        let outcome = service.handle_action(action);
        if events {
            continue;
        }
        match outcome {
            ActionOutcome::RoundPlayed(_) => println!("{}", service.view().summary),
            ActionOutcome::Ignored => println!("Game complete, {action} ignored."),
            ActionOutcome::Reset => {}
        }
    }

    if json {
        let state = serde_json::to_string_pretty(service.state()).map_err(io::Error::other)?;
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{state}")?;
    }

    Ok(())
}

fn run_interactive() -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let result = event_loop(&mut terminal, &mut app);

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if !crossterm::event::poll(POLL_INTERVAL)? {
            continue;
        }
        if let Event::Key(key) = crossterm::event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(command) = events::command_for(key)
        {
            app.handle_command(command);
        }
    }

    Ok(())
}
