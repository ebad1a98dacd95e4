use anyhow::{Context, Result};
use clap::Parser;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{
            self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
            MouseEventKind,
        },
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::Arc;
use std::time::Duration;

mod actions;
mod background;
mod capabilities;
mod dispatcher;
mod logger;
mod middleware;
mod pointer;
mod reducers;
mod route;
mod state;
mod store;
mod thunks;
mod view_models;
mod views;

use actions::{Action, GlobalAction};
use market_client::HttpMarketClient;
use market_config::AppConfig;
use middleware::{
    form::FormMiddleware, keyboard::KeyboardMiddleware, logging::LoggingMiddleware,
    navigation::NavigationMiddleware, pointer::PointerMiddleware,
    profile_menu::ProfileMenuMiddleware, thunk::ThunkMiddleware, Middleware,
};
use pointer::PointerEvents;
use route::Route;
use state::{AppState, RequestIds};
use store::Store;
use thunks::Thunks;

/// Terminal client for the marketplace
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Route to open on start, e.g. `/items/7` or `/your-orders`
    route: Option<String>,

    /// Base URL of the marketplace API (overrides the config file)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = logger::init()?;
    log::info!("Starting marketplace-tui, logging to {}", log_file.display());

    let mut config = AppConfig::load();
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    let initial_route = match cli.route.as_deref() {
        Some(path) => Route::parse(path).with_context(|| format!("Unknown route: {path}"))?,
        None => Route::Home,
    };

    let client = HttpMarketClient::new(&config.api.base_url, config.api.timeout())
        .with_context(|| format!("Invalid API base url {}", config.api.base_url))?;
    log::info!("Using marketplace API at {}", client.base_url());
    let thunks = Thunks::new(Arc::new(client), RequestIds::new());

    // Middleware runs in this order
    let pointer = PointerEvents::new();
    let middleware: Vec<Box<dyn Middleware>> = vec![
        Box::new(LoggingMiddleware::new(config.log_actions)),
        Box::new(KeyboardMiddleware::new()),
        Box::new(PointerMiddleware::new(pointer.clone())),
        Box::new(ProfileMenuMiddleware::new(pointer)),
        Box::new(NavigationMiddleware::new()),
        Box::new(FormMiddleware::new()),
        Box::new(ThunkMiddleware::new(thunks)?),
    ];
    let store = Store::new(AppState::new(config), middleware);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    store.dispatch(Action::Global(GlobalAction::Resize {
        width: size.width,
        height: size.height,
    }));
    store.dispatch(Action::go_to(initial_route));

    let result = run_app(&mut terminal, &store);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    store.shutdown();
    log::info!("Exiting marketplace-tui");
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, store: &Store) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            views::render(&store.state(), area, frame);
        })?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                // Only process key press events (ignore key release)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    store.dispatch(Action::Global(GlobalAction::Click {
                        column: mouse.column,
                        row: mouse.row,
                    }));
                }
                Event::Resize(width, height) => {
                    store.dispatch(Action::Global(GlobalAction::Resize { width, height }));
                }
                _ => {}
            }
        }

        store.process_pending();
        if !store.state().running {
            break;
        }
    }

    Ok(())
}
