//! Application shell: terminal lifecycle, event loop and request dispatch

pub mod handler;
pub mod input;
pub mod state;

use std::io::{self, Stdout};
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;

use crate::api::QuizBackend;
use crate::config::Config;
use crate::session::{Completion, Request, perform};
use crate::ui;
use handler::Effect;
use state::AppState;

/// The main application
pub struct App {
    /// Application configuration
    config: Config,

    /// Current application state
    state: AppState,

    /// Backend shared with request tasks
    backend: Arc<dyn QuizBackend>,

    /// Completions posted by request tasks
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,

    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config, backend: Arc<dyn QuizBackend>) -> Result<Self> {
        let terminal = Self::setup_terminal()?;
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();

        Ok(Self {
            config,
            state: AppState::default(),
            backend,
            completions_tx,
            completions_rx,
            terminal,
        })
    }

    /// Set up the terminal for TUI rendering
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    /// Restore the terminal to its original state
    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> Result<()> {
        // Set up panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(panic_info);
        }));

        let theme = self.config.active_theme();
        tracing::info!("Using quiz API at {}", self.config.api_base_url);

        loop {
            // Draw UI
            self.terminal.draw(|frame| {
                ui::draw(frame, &mut self.state, &theme);
            })?;

            // Apply finished requests
            while let Ok(completion) = self.completions_rx.try_recv() {
                self.state.apply(completion);
            }

            // Handle events
            if event::poll(std::time::Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        match handler::handle_key(&mut self.state, key) {
                            Some(Effect::Quit) => break,
                            Some(Effect::Dispatch(request)) => self.dispatch(request),
                            None => {}
                        }
                    }
                }
            }
        }

        self.restore_terminal()?;
        Ok(())
    }

    /// Run a request on a background task; its completion is applied by the loop
    fn dispatch(&self, request: Request) {
        tracing::debug!("Dispatching {:?}", request);
        let backend = Arc::clone(&self.backend);
        let tx = self.completions_tx.clone();
        tokio::spawn(async move {
            let completion = perform(backend.as_ref(), request).await;
            // Receiver is gone only when the app is shutting down
            let _ = tx.send(completion);
        });
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}
