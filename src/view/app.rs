//! Terminal lifecycle and event loop for the demo binary.
//!
//! Raw mode, alternate screen, mouse capture, bracketed paste, and focus
//! change reporting are enabled on entry and restored on the way out, even
//! when the loop errors.

use std::io::{self, Stdout};

use crossterm::event::{
    self, DisableBracketedPaste, DisableFocusChange, DisableMouseCapture, EnableBracketedPaste,
    EnableFocusChange, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    MouseButton, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Terminal;
use tracing::debug;

use crate::model::{AppError, InputEvent};
use crate::state::ChipEditor;
use crate::view::chips::{self, EditorLayout};
use crate::view::styles::ChipStyles;

type DemoTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Run the demo until Esc or Ctrl+C, restoring the terminal on the way out.
pub fn run(mut editor: ChipEditor, styles: ChipStyles) -> Result<(), AppError> {
    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, &mut editor, &styles);
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<DemoTerminal, AppError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste,
        EnableFocusChange
    )?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut DemoTerminal) -> Result<(), AppError> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn event_loop(
    terminal: &mut DemoTerminal,
    editor: &mut ChipEditor,
    styles: &ChipStyles,
) -> Result<(), AppError> {
    loop {
        let mut layout = EditorLayout::default();
        terminal.draw(|frame| {
            let [editor_area, help_area] =
                Layout::vertical([Constraint::Min(3), Constraint::Length(1)])
                    .areas(frame.area());

            let block = Block::default().borders(Borders::ALL).title(" chipbox ");
            let inner = block.inner(editor_area);
            frame.render_widget(block, editor_area);
            layout = chips::render_editor(frame, inner, editor, styles);

            let help =
                Paragraph::new("Enter/comma: add · Backspace: remove last · click ×: remove · Esc: quit");
            frame.render_widget(help, help_area);
        })?;
        editor.note_layout(layout);

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Esc => break,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                _ => editor.handle_event(InputEvent::Key(key)),
            },
            Event::Mouse(mouse) => {
                if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                    editor.handle_event(InputEvent::Click {
                        column: mouse.column,
                        row: mouse.row,
                    });
                }
            }
            Event::Paste(text) => {
                debug!(len = text.len(), "paste received");
                editor.handle_event(InputEvent::Paste(text));
            }
            Event::FocusLost => editor.handle_event(InputEvent::Blur),
            Event::FocusGained | Event::Resize(_, _) | Event::Key(_) => {}
        }
    }
    Ok(())
}
