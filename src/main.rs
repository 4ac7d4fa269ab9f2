use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, sync::Arc, time::Duration};
use tokio::sync::mpsc;

use fetchdeck::{
    api::{ApiClient, ReqwestTransport},
    config::{find_config_path, Config},
    handlers,
    model::Model,
    services::{self, ApiRequest, ApiResponse},
    ui,
    utils::{self, log_debug},
};

/// Cat facts, name lookups and messages in your terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <tmp>/fetchdeck-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Do not load the message board on start-up
    #[arg(long)]
    no_messages: bool,
}

struct App {
    model: Model,
    api_tx: mpsc::UnboundedSender<ApiRequest>,
    api_rx: mpsc::UnboundedReceiver<ApiResponse>,
}

impl App {
    fn new(config: &Config) -> Result<Self> {
        let transport = ReqwestTransport::new(config.request_timeout())?;
        let client = ApiClient::new(Arc::new(transport), config.endpoints());
        log_debug(&format!("Endpoints: {:?}", client.endpoints()));

        let (api_tx, api_rx) = services::api::spawn_api_service(client);

        Ok(App {
            model: Model::new(config),
            api_tx,
            api_rx,
        })
    }

    /// Apply every response that has arrived since the last frame
    fn drain_responses(&mut self) {
        while let Ok(response) = self.api_rx.try_recv() {
            handlers::handle_api_response(&mut self.model, response);
        }
    }
}

fn load_config(cli_path: Option<&str>) -> Result<Config> {
    match find_config_path(cli_path)? {
        Some(path) => {
            log_debug(&format!("Loading config from: {:?}", path));
            Config::load(&path)
        }
        None => {
            log_debug("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    utils::set_debug_mode(args.debug);
    if args.debug {
        log_debug("Debug mode enabled");
    }

    let mut config = load_config(args.config.as_deref())?;
    if args.no_messages {
        config.load_messages_on_start = false;
    }

    let mut app = App::new(&config)?;
    if config.load_messages_on_start {
        handlers::trigger_messages(&mut app.model, &app.api_tx);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, &app.model);
        })?;

        if app.model.ui.should_dismiss_toast() {
            app.model.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Responses are applied in arrival order, on this thread only
        app.drain_responses();

        // Short poll keeps the fact highlight and toast timing smooth
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                handlers::handle_key(&mut app.model, key, &app.api_tx);
            }
        }
    }

    log_debug("Quit requested");
    Ok(())
}
