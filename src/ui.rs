// src/ui.rs

pub mod chat;
pub mod footer;
pub mod header;
pub mod language_picker;
pub mod markup;

use crate::api::CoachingClient;
use crate::app::App;
use crate::constants::{CLOSED_ICON, WIDGET_TITLE};
use crate::conversation::{resolve_reply, PendingTurn};
use crate::errors::RaseedResult;
use crate::key_handlers::{handle_key, KeyAction};
use crate::translator::PhraseTranslator;
use crossterm::{
    event::{self, Event as CEvent, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, error};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::{io, sync::Arc, time::Duration};
use tokio::sync::mpsc;

const TICK_RATE: Duration = Duration::from_millis(100);

enum Event {
    Input(KeyEvent),
    Tick,
    Reply { seq: u64, text: String },
}

/// Runs the terminal UI until the user quits.
pub async fn run_ui(
    app: App,
    client: CoachingClient,
    translator: Arc<PhraseTranslator>,
) -> RaseedResult<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, client, translator).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref err) = res {
        error!("UI loop failed: {}", err);
    }
    res
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    client: CoachingClient,
    translator: Arc<PhraseTranslator>,
) -> RaseedResult<()> {
    let (tx, mut rx) = mpsc::channel::<Event>(100);
    spawn_input_reader(tx.clone());

    while !app.should_quit {
        terminal.draw(|f| draw(f, &app))?;

        let Some(event) = rx.recv().await else {
            break;
        };

        match event {
            Event::Input(key) => match handle_key(&mut app, key) {
                KeyAction::Dispatch(turn) => {
                    spawn_turn(turn, client.clone(), translator.clone(), tx.clone())
                }
                KeyAction::Quit => break,
                KeyAction::None => {}
            },
            Event::Tick => app.on_tick(),
            Event::Reply { seq, text } => app.on_reply(seq, text),
        }
    }

    Ok(())
}

/// Key events and ticks come from a blocking poll loop off the runtime.
fn spawn_input_reader(tx: mpsc::Sender<Event>) {
    tokio::task::spawn_blocking(move || loop {
        let event = match event::poll(TICK_RATE) {
            Ok(true) => match event::read() {
                Ok(CEvent::Key(key)) => Event::Input(key),
                Ok(_) => continue,
                Err(e) => {
                    error!("Failed to read terminal event: {}", e);
                    break;
                }
            },
            Ok(false) => Event::Tick,
            Err(e) => {
                error!("Failed to poll terminal events: {}", e);
                break;
            }
        };

        if tx.blocking_send(event).is_err() {
            break;
        }
    });
}

/// The UI stays live while the reply is fetched and translated.
fn spawn_turn(
    turn: PendingTurn,
    client: CoachingClient,
    translator: Arc<PhraseTranslator>,
    tx: mpsc::Sender<Event>,
) {
    tokio::spawn(async move {
        let text = resolve_reply(&client, &translator, &turn).await;
        let seq = turn.seq();
        if tx.send(Event::Reply { seq, text }).await.is_err() {
            debug!("UI closed before reply {} arrived", seq);
        }
    });
}

pub fn draw(f: &mut Frame<'_>, app: &App) {
    let size = f.area();

    if !app.conversation.is_open() {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3), Constraint::Length(1)])
            .split(size);

        let bubble = Paragraph::new(format!("{} {}", CLOSED_ICON, WIDGET_TITLE))
            .style(Style::default().fg(Color::LightGreen))
            .alignment(Alignment::Right)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(bubble, chunks[1]);
        footer::draw_footer(f, chunks[2], app);
        return;
    }

    let window = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightGreen));
    let inner = window.inner(size);
    f.render_widget(window, size);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(1),    // Messages
            Constraint::Length(1), // Language buttons
            Constraint::Length(1), // Status
            Constraint::Length(3), // Input
            Constraint::Length(1), // Footer
        ])
        .split(inner);

    header::draw_header(f, chunks[0], app);
    chat::draw_messages(f, chunks[1], app);
    language_picker::draw_language_row(f, chunks[2], app);
    app.status_indicator.render(f, chunks[3]);
    chat::draw_input(f, chunks[4], app);
    footer::draw_footer(f, chunks[5], app);
}
