mod app;
mod events;
mod scroll;
mod tui;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io::stdout;
use std::time::{Duration, Instant};
use tokio::time::{interval, sleep_until, MissedTickBehavior};

use app::App;
use dialpick::config::{CliOverrides, Config};
use dialpick::log;
use events::EventHandler;

/// Frame pacing while the column is easing toward its target
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Parse CLI arguments (without the program name) into config overrides
fn parse_args(args: &[String]) -> CliOverrides {
    let mut cli = CliOverrides::default();

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        let value = args.get(i + 1);
        match (flag, value) {
            ("--no-bell", _) => {
                cli.no_bell = true;
                i += 1;
                continue;
            }
            ("--min" | "--max" | "--value", Some(v)) => match v.parse::<i64>() {
                Ok(n) => match flag {
                    "--min" => cli.min = Some(n),
                    "--max" => cli.max = Some(n),
                    _ => cli.value = Some(n),
                },
                Err(_) => eprintln!("Warning: {} expects an integer, got '{}'", flag, v),
            },
            ("--quiet-ms", Some(v)) => match v.parse::<u64>() {
                Ok(ms) => cli.quiet_period_ms = Some(ms),
                Err(_) => eprintln!("Warning: --quiet-ms expects milliseconds, got '{}'", v),
            },
            ("--label", Some(v)) => cli.label = Some(v.clone()),
            ("--unit", Some(v)) => cli.unit = Some(v.clone()),
            (
                "--min" | "--max" | "--value" | "--quiet-ms" | "--label" | "--unit",
                None,
            ) => {
                eprintln!("Warning: {} requires an argument", flag);
                i += 1;
                continue;
            }
            _ => {
                eprintln!("Warning: ignoring unknown argument '{}'", flag);
                i += 1;
                continue;
            }
        }
        i += 2;
    }

    cli
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
    }
    log::install_panic_hook(restore_terminal);

    // Load config with precedence: CLI > config file > default
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = Config::load().with_overrides(parse_args(&args));
    if let Err(e) = config.validate() {
        eprintln!("Warning: {}", e);
    }

    let (columns, _) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut app = App::new(&config, columns);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;

    let summary = app.finish();
    log::log(&format!("Exiting with {:?}", summary));
    println!("{}", serde_json::to_string(&summary)?);

    Ok(())
}

/// Resolve at `deadline`, or never when there is none
async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(due) => sleep_until(tokio::time::Instant::from_std(due)).await,
        None => std::future::pending().await,
    }
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Event stream for keyboard, mouse and resize
    let mut event_stream = EventStream::new();

    let mut frames = interval(FRAME_INTERVAL);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        // Render
        terminal.draw(|frame| tui::ui::render(frame, app))?;

        if app.should_exit() {
            return Ok(());
        }

        let snap_deadline = app.picker.deadline();
        let animating = app.is_animating();

        tokio::select! {
            // Terminal events (keyboard, mouse, resize)
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        let action = EventHandler::handle_event(app, &event);
                        app.dispatch(action, Instant::now());
                    }
                    Some(Err(e)) => log::log(&format!("Terminal event error: {}", e)),
                    None => return Ok(()),
                }
            }

            // Quiet period of a scroll gesture elapsed
            _ = wait_until(snap_deadline) => {
                let outcome = app.poll_snap(Instant::now());
                if let Some(value) = outcome.committed {
                    log::log(&format!("Snapped to {}", value));
                }
            }

            // Ease the column toward the committed value
            _ = frames.tick(), if animating => {
                app.step_animation();
            }
        }
    }
}
