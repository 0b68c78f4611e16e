//! Line-oriented control surface.
//!
//! Reads one command per line, forwards actions to the session and renders
//! the result. Command errors are reported and the loop carries on.

mod command;
mod render;

pub use command::*;
pub use render::*;

use std::io::{BufRead, Write};

use crate::config::OutputFormat;
use crate::errors::AppError;
use crate::session::{Action, Session};

/// Resolve person ids before they reach the session, which ignores
/// unknown ids silently.
fn check_known(session: &Session, action: &Action) -> Result<(), AppError> {
    match action {
        Action::Add(id) | Action::Remove(id) if session.roster().get(*id).is_none() => {
            Err(AppError::NotFound(format!("Person {} not found", id)))
        }
        _ => Ok(()),
    }
}

/// Strip the line terminator and decode. Undecodable input is a bad command,
/// not a failed stream.
fn decode_line(raw: &[u8]) -> Result<&str, AppError> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    std::str::from_utf8(raw)
        .map_err(|_| AppError::BadRequest("Input line is not valid UTF-8".to_string()))
}

/// Handle one line. Returns `false` when the operator asked to quit.
pub fn handle_line<W: Write>(
    line: &str,
    session: &mut Session,
    renderer: &Renderer,
    out: &mut W,
) -> Result<bool, AppError> {
    let command = match parse(line) {
        Ok(Some(command)) => command,
        Ok(None) => return Ok(true),
        Err(e) => {
            tracing::warn!("Rejected command {:?}: {}", line.trim(), e);
            renderer.error(out, &e, session.revision_id())?;
            return Ok(true);
        }
    };

    match command {
        Command::Act(action) => {
            if let Err(e) = check_known(session, &action) {
                tracing::warn!("Rejected command {:?}: {}", line.trim(), e);
                renderer.error(out, &e, session.revision_id())?;
                return Ok(true);
            }
            session.apply(action);
            renderer.view(out, &session.view(), session.revision_id())?;
        }
        Command::Show => renderer.view(out, &session.view(), session.revision_id())?,
        Command::Team => {
            let view = session.view();
            renderer.team(out, view.team.as_deref(), session.revision_id())?;
        }
        Command::Options => renderer.options(out, session.revision_id())?,
        Command::Help => renderer.help(out, HELP, session.revision_id())?,
        Command::Quit => return Ok(false),
    }

    Ok(true)
}

/// Run the console until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    out: &mut W,
    session: &mut Session,
    format: OutputFormat,
) -> Result<(), AppError> {
    let renderer = Renderer::new(format);
    let prompt = renderer.format() == OutputFormat::Text;

    renderer.view(out, &session.view(), session.revision_id())?;

    let mut buf = Vec::new();
    loop {
        if prompt {
            write!(out, "> ")?;
        }
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = match decode_line(&buf) {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!("Rejected input line: {}", e);
                renderer.error(out, &e, session.revision_id())?;
                continue;
            }
        };
        if !handle_line(line, session, &renderer, out)? {
            break;
        }
    }

    if prompt {
        writeln!(out)?;
    }
    tracing::info!(
        selected = session.team().selection().len(),
        actions = session.revision_id(),
        "Session ended"
    );
    Ok(())
}
