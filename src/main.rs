use postpager::app::{App, AppMessage};
use postpager::cli::{parse_args, version_string, CliCommand, USAGE};
use postpager::logging::init_logging;
use postpager::startup::{create_app, AppConfig};
use postpager::terminal::{setup_panic_hook, TerminalManager};
use postpager::traits::Router;
use postpager::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::time::Duration;
use tokio::sync::mpsc;

/// Animation tick
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    // Handle CLI-only commands before any terminal setup
    let options = match parse_args(std::env::args()) {
        Ok(CliCommand::Version) => {
            println!("{}", version_string());
            return Ok(());
        }
        Ok(CliCommand::Help) => {
            print!("{}", USAGE);
            return Ok(());
        }
        Ok(CliCommand::Run(options)) => options,
        Err(e) => {
            eprintln!("error: {}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    color_eyre::install()?;

    let config = options.apply(AppConfig::from_env());
    if let Err(e) = init_logging(&config) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    // Restore the terminal on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let mut app = create_app(&config);
        let mut manager = TerminalManager::new()?;

        let result = run_app(manager.terminal(), &mut app).await;

        manager.restore();
        if let Err(e) = &result {
            tracing::error!("Exiting with error: {:#}", e);
        }
        result
    })
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();
    let mut route_rx = app.router.subscribe();

    let initial = app.router.current_params();
    app.load_route(initial);

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
            // Geometry is fresh now; fire visibility callbacks.
            app.evaluate_visibility();
        }

        tokio::select! {
            _ = tokio::time::sleep(TICK) => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Mouse(mouse))) => app.handle_mouse(mouse),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => tracing::warn!("Terminal event error: {}", e),
                    None => app.quit(),
                }
            }

            // Every navigation, back and reload lands here
            changed = route_rx.changed() => {
                if changed.is_ok() {
                    let route = *route_rx.borrow_and_update();
                    app.load_route(route);
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
