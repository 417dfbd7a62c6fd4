//! TUI shell: terminal lifecycle, event loop and key handling.
//!
//! The shell owns one processed result set and never touches the pipeline
//! again; the only asynchronous work is the assistant round trip, which is
//! spawned off the event loop and delivered back through a channel.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::debug;

use crate::assistant::{self, Assistant, AssistantClient};
use crate::models::{Config, ScreenerMode, ScreenerResult};

use super::state::{AssistantExchange, InputMode, SessionState, Tab};
use super::view;

/// One completed assistant round trip, delivered back to the event loop.
struct AssistantReply {
    question: String,
    answer: String,
}

pub struct ScreenerApp {
    pub session: SessionState,
    assistant: Option<Arc<Assistant<AssistantClient>>>,
    reply_tx: mpsc::Sender<AssistantReply>,
    reply_rx: mpsc::Receiver<AssistantReply>,
    pub should_quit: bool,
}

impl ScreenerApp {
    pub fn new(result: ScreenerResult, mode: ScreenerMode, config: &Config) -> Self {
        let assistant = match AssistantClient::new(config) {
            Ok(client) => Some(Arc::new(Assistant::new(client))),
            Err(err) => {
                debug!("assistant disabled: {err:#}");
                None
            }
        };
        let (reply_tx, reply_rx) = mpsc::channel::<AssistantReply>(8);

        Self {
            session: SessionState::new(result, mode),
            assistant,
            reply_tx,
            reply_rx,
            should_quit: false,
        }
    }

    pub fn assistant_busy(&self) -> bool {
        self.assistant.as_ref().is_some_and(|a| a.is_busy())
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        match self.session.input {
            InputMode::Filter => self.handle_filter_key(key),
            InputMode::Question => self.handle_question_key(key),
            InputMode::Normal => self.handle_normal_key(key),
        }
    }

    fn handle_filter_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                self.session.filter.clear();
                self.session.input = InputMode::Normal;
            }
            KeyCode::Enter => self.session.input = InputMode::Normal,
            KeyCode::Backspace => {
                self.session.filter.pop();
            }
            KeyCode::Char(c) => self.session.filter.push(c),
            _ => {}
        }
    }

    fn handle_question_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.session.input = InputMode::Normal,
            KeyCode::Enter => {
                self.session.input = InputMode::Normal;
                self.submit_question();
            }
            KeyCode::Backspace => {
                self.session.question.pop();
            }
            KeyCode::Char(c) => self.session.question.push(c),
            _ => {}
        }
    }

    fn handle_normal_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.session.tab = self.session.tab.next(),
            KeyCode::Char('1') => self.session.tab = Tab::Table,
            KeyCode::Char('2') => self.session.tab = Tab::Summary,
            KeyCode::Char('3') => self.session.tab = Tab::Assistant,
            KeyCode::Up => self.session.move_selection(-1),
            KeyCode::Down => self.session.move_selection(1),
            KeyCode::PageUp => self.session.move_selection(-10),
            KeyCode::PageDown => self.session.move_selection(10),
            KeyCode::Left => self.session.move_column(-1),
            KeyCode::Right => self.session.move_column(1),
            KeyCode::Char('/') => {
                self.session.tab = Tab::Table;
                self.session.input = InputMode::Filter;
            }
            KeyCode::Char('s') => self.session.toggle_sort(),
            KeyCode::Char('h') => self.session.hide_selected_column(),
            KeyCode::Char('H') => self.session.unhide_all_columns(),
            KeyCode::Char('i') => {
                self.session.tab = Tab::Assistant;
                self.session.input = InputMode::Question;
            }
            _ => {}
        }
    }

    /// Kick off one assistant round trip. Dropped (with a status note) when
    /// the assistant is disabled or still answering the previous question.
    fn submit_question(&mut self) {
        let question = self.session.question.trim().to_string();
        if question.is_empty() {
            return;
        }
        let Some(assistant) = &self.assistant else {
            self.session.status = "Assistant disabled: set ASSISTANT_API_KEY".to_string();
            return;
        };
        if assistant.is_busy() {
            self.session.status =
                "The assistant is still answering the previous question".to_string();
            return;
        }

        let context = assistant::build_context(
            &self.session.result.headers,
            &self.session.result.records,
        );
        let assistant = Arc::clone(assistant);
        let tx = self.reply_tx.clone();
        self.session.question.clear();
        self.session.status = "Asking the assistant...".to_string();

        tokio::spawn(async move {
            if let Some(answer) = assistant.ask(&question, &context).await {
                let _ = tx.send(AssistantReply { question, answer }).await;
            }
        });
    }

    fn drain_assistant_replies(&mut self) {
        while let Ok(reply) = self.reply_rx.try_recv() {
            self.session.transcript.push(AssistantExchange {
                question: reply.question,
                answer: reply.answer,
                at: Utc::now(),
            });
            self.session.status = "Assistant answered".to_string();
        }
    }
}

pub async fn run_app(result: ScreenerResult, mode: ScreenerMode, config: &Config) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = ScreenerApp::new(result, mode, config);

    // Main application loop
    let run_result = loop {
        app.drain_assistant_replies();

        if let Err(e) = terminal.draw(|f| view::draw(f, &app.session, app.assistant_busy())) {
            break Err(e.into());
        }

        if event::poll(Duration::from_millis(100)).unwrap_or(false) {
            if let Ok(Event::Key(key)) = event::read() {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }

        if app.should_quit {
            break Ok(());
        }
    };

    // Cleanup terminal
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    run_result
}
