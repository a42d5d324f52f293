//! Keyboard input handling and interactive loop.
//!
//! This module maps keyboard events to tree actions and runs the
//! interactive terminal loop.

use std::io::{self, Write};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::{cursor, execute, terminal};

use crate::ui::clipboard::{copy_to_clipboard, ClipboardOutcome};
use crate::ui::context::UiContext;

use super::menu::{ConceptMenu, MenuOutcome, TreeAction};

/// Convert a keyboard event to a TreeAction
pub fn key_to_action(key: KeyEvent) -> Option<TreeAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(TreeAction::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(TreeAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(TreeAction::Down),
        KeyCode::Char(' ') => Some(TreeAction::Toggle),
        KeyCode::Enter => Some(TreeAction::Activate),
        KeyCode::Right | KeyCode::Char('l') => Some(TreeAction::Expand),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => Some(TreeAction::Collapse),
        KeyCode::Char('c') | KeyCode::Char('y') => Some(TreeAction::Copy),
        KeyCode::Char('q') | KeyCode::Esc => Some(TreeAction::Quit),
        _ => None,
    }
}

/// Raw mode and alternate screen for the lifetime of the guard.
struct ScreenGuard;

impl ScreenGuard {
    fn enter(out: &mut impl Write) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        let mut out = io::stdout();
        let _ = execute!(out, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn draw(out: &mut impl Write, menu: &ConceptMenu<'_>, ctx: &UiContext) -> io::Result<()> {
    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    let mut ctx = *ctx;
    if let Ok((width, height)) = terminal::size() {
        ctx.caps.width = width;
        ctx.caps.height = height;
    }

    // Raw mode needs explicit carriage returns. No newline after the last
    // line, or the screen scrolls by one.
    let screen = menu.render(&ctx).replace('\n', "\r\n");
    out.write_all(screen.as_bytes())?;
    out.flush()
}

/// Run the concept menu until the user quits
pub fn run_interactive(menu: &mut ConceptMenu<'_>, ctx: &UiContext) -> io::Result<()> {
    use crossterm::event::{self, Event, KeyEventKind};

    let mut stdout = io::stdout();
    let _guard = ScreenGuard::enter(&mut stdout)?;

    draw(&mut stdout, menu, ctx)?;

    loop {
        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let Some(action) = key_to_action(key) else {
                    continue;
                };
                match menu.handle_action(action) {
                    MenuOutcome::Quit => break,
                    MenuOutcome::Copy(text) => {
                        let outcome = copy_to_clipboard(&mut stdout, &text, ctx.caps.is_tty);
                        let success = matches!(outcome, ClipboardOutcome::Copied);
                        menu.set_notice(outcome.message(), success);
                    }
                    MenuOutcome::Continue => {}
                }
            }
            Event::Resize(_, _) => {}
            _ => continue,
        }
        draw(&mut stdout, menu, ctx)?;
    }

    Ok(())
}
