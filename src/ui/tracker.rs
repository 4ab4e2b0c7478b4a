//! The single-window tracking form: username entry, task entry, live
//! elapsed readout and a recent-entries list. One cooperative event loop
//! drives both input handling and the periodic tick; the tick is simply
//! the poll timeout elapsing, after which the frame is redrawn with a
//! fresh elapsed value. No timer thread.

use crate::config::Config;
use crate::core::session::{Phase, Session};
use crate::core::suggestions;
use crate::db::{initialize, pool::DbPool, queries};
use crate::errors::AppResult;
use crate::models::TaskEntry;
use crate::utils::time::format_elapsed;
use crossterm::{
    ExecutableCommand, event,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{info, warn};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use std::io::stdout;
use std::path::Path;
use std::time::Duration;
use tui_textarea::{Input, Key, TextArea};

const RECENT_LIMIT: usize = 6;

/// Open the store, set up the terminal and run the form until the user
/// leaves. Terminal state is always restored before the result propagates.
pub fn run_tracker(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    initialize::init_db(&pool)?;
    initialize::list_tracked_tables(&pool);

    stdout().execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let res = event_loop(&mut terminal, &pool, cfg);

    stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;
    info!("Tracker window closed");
    res
}

fn entry_line(e: &TaskEntry) -> String {
    let finish = e.finish.as_deref().unwrap_or("(open)");
    let duration = e
        .duration_seconds()
        .map(|s| format_elapsed(s.max(0) as u64))
        .unwrap_or_else(|| "--:--:--".to_string());
    format!("#{} {}  {} -> {}  {}", e.id, e.task, e.start, finish, duration)
}

fn placeholder_from(names: &[String]) -> String {
    if names.is_empty() {
        "Type a name and press Enter".to_string()
    } else {
        format!("Known: {}", names.join(", "))
    }
}

fn event_loop<B>(term: &mut Terminal<B>, pool: &DbPool, cfg: &Config) -> AppResult<()>
where
    B: Backend,
{
    let suggestion_file = cfg.usernames_file.clone();
    let local_names = suggestions::load(Path::new(&suggestion_file));
    let mut user_names = suggestions::reconcile(local_names, &queries::list_usernames(pool));
    let mut task_names = queries::list_task_names(pool);

    let mut session = Session::new();
    let mut entries: Vec<TaskEntry> = Vec::new();
    let mut message = String::from("Enter a username to begin. Esc quits.");

    let mut username_editor = TextArea::default();
    username_editor.set_cursor_line_style(Style::default());
    username_editor.set_placeholder_text(placeholder_from(&user_names));

    let mut task_editor = TextArea::default();
    task_editor.set_cursor_line_style(Style::default());
    task_editor.set_placeholder_text(placeholder_from(&task_names));

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // username
            Constraint::Length(3), // task
            Constraint::Length(3), // elapsed readout
            Constraint::Min(3),    // recent entries
            Constraint::Length(1), // status line
        ]);

    loop {
        let phase = session.phase();

        let active = Style::default().fg(Color::White);
        let inactive = Style::default().fg(Color::DarkGray);
        username_editor.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title("Username")
                .style(if phase == Phase::NoUser { active } else { inactive }),
        );
        task_editor.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title("Task")
                .style(if phase == Phase::UserReady { active } else { inactive }),
        );

        let timer_title = match phase {
            Phase::NoUser => "Elapsed".to_string(),
            Phase::UserReady => format!(
                "Elapsed - {} ready",
                session.username().unwrap_or_default()
            ),
            Phase::TaskRunning => format!(
                "Elapsed - {} on '{}'",
                session.username().unwrap_or_default(),
                session.task_name().unwrap_or_default()
            ),
        };
        let timer = Paragraph::new(session.elapsed_display())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(timer_title));

        let items: Vec<ListItem> = entries
            .iter()
            .map(|e| ListItem::new(entry_line(e)))
            .collect();
        let recent = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Recent entries"))
            .style(Style::default().fg(Color::White));

        let status = Paragraph::new(message.as_str()).style(Style::default().fg(Color::Yellow));

        term.draw(|frame| {
            let chunks = layout.split(frame.size());
            frame.render_widget(username_editor.widget(), chunks[0]);
            frame.render_widget(task_editor.widget(), chunks[1]);
            frame.render_widget(timer, chunks[2]);
            frame.render_widget(recent, chunks[3]);
            frame.render_widget(status, chunks[4]);
        })?;

        // tick: no input within the poll window, redraw with fresh elapsed
        if !event::poll(Duration::from_millis(cfg.tick_millis))? {
            continue;
        }

        match event::read()?.into() {
            Input { key: Key::Esc, .. }
            | Input {
                key: Key::Char('q'),
                ctrl: true,
                ..
            } => break,
            Input {
                key: Key::Enter, ..
            } => match phase {
                Phase::NoUser => {
                    let input = username_editor.lines()[0].clone();
                    match session.submit_user(pool, &input) {
                        Ok(user_id) => {
                            let name = session.username().unwrap_or_default().to_string();
                            if !user_names.contains(&name) {
                                if let Err(e) =
                                    suggestions::append(Path::new(&suggestion_file), &name)
                                {
                                    warn!("Could not append to suggestion file: {e}");
                                }
                                user_names.push(name.clone());
                            }
                            entries = queries::list_entries_for_user(pool, user_id, RECENT_LIMIT)
                                .unwrap_or_default();
                            message =
                                format!("User '{name}' ready (id {user_id}). Enter a task name.");
                        }
                        Err(e) => message = e.to_string(),
                    }
                }
                Phase::UserReady => {
                    let input = task_editor.lines()[0].clone();
                    match session.start_task(pool, &input) {
                        Ok(()) => {
                            if let Some(user_id) = session.user_id() {
                                entries =
                                    queries::list_entries_for_user(pool, user_id, RECENT_LIMIT)
                                        .unwrap_or_default();
                            }
                            message = format!(
                                "Task '{}' started. Enter stops it.",
                                session.task_name().unwrap_or_default()
                            );
                        }
                        Err(e) => message = e.to_string(),
                    }
                }
                Phase::TaskRunning => match session.stop_task(pool) {
                    Ok(elapsed) => {
                        if let Some(user_id) = session.user_id() {
                            entries = queries::list_entries_for_user(pool, user_id, RECENT_LIMIT)
                                .unwrap_or_default();
                        }
                        task_names = queries::list_task_names(pool);
                        task_editor.set_placeholder_text(placeholder_from(&task_names));
                        task_editor.delete_line_by_head();
                        message = format!("Task completed in {}.", format_elapsed(elapsed));
                    }
                    Err(e) => message = e.to_string(),
                },
            },
            input => match phase {
                // username edits are locked once a user is ready,
                // task edits while the clock runs
                Phase::NoUser => {
                    username_editor.input(input);
                }
                Phase::UserReady => {
                    task_editor.input(input);
                }
                Phase::TaskRunning => {}
            },
        }
    }

    Ok(())
}
