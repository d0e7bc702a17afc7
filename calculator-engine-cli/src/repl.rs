use crate::keys::{parse_keys, Key};
use anyhow::{Context, Result};
use calculator_engine::ExpressionSession;
use log::{debug, info};
use std::io::{BufRead, Write};

/// Feeds every line of `input` to a fresh session as key presses, writing what
/// a calculator display would show after each line.
pub fn run(input: impl BufRead, mut output: impl Write, show_preview: bool) -> Result<()> {
    let mut session = ExpressionSession::new();

    for line in input.lines() {
        let line = line.context("Failed to read keys")?;
        for key in parse_keys(&line) {
            match key {
                Key::Quit => return Ok(()),
                Key::Evaluate => evaluate(&mut session, &mut output)?,
                Key::History => write_history(&session, &mut output)?,
                _ => key.edit(&mut session),
            }
        }
        write_display(&session, &mut output, show_preview)?;
    }

    info!("input ended");
    Ok(())
}

fn evaluate(session: &mut ExpressionSession, output: &mut impl Write) -> Result<()> {
    match session.evaluate() {
        Ok(Some(entry)) => writeln!(output, "{}", entry)?,
        Ok(None) => {}
        Err(error) => {
            debug!("evaluation of '{}' failed: {}", session.current_buffer(), error);
            writeln!(output, "{}", error.user_message())?;
        }
    }
    Ok(())
}

fn write_display(
    session: &ExpressionSession,
    output: &mut impl Write,
    show_preview: bool,
) -> Result<()> {
    let buffer = match session.current_buffer() {
        "" => "0",
        buffer => buffer,
    };
    writeln!(output, "> {}", buffer)?;

    if show_preview && !session.is_showing_result() {
        let preview = session.live_preview();
        if !preview.is_empty() {
            writeln!(output, "  = {}", preview)?;
        }
    }
    Ok(())
}

fn write_history(session: &ExpressionSession, output: &mut impl Write) -> Result<()> {
    let history = session.history_snapshot();
    if history.is_empty() {
        writeln!(output, "No calculations yet")?;
    }
    for entry in history {
        writeln!(output, "  {}", entry)?;
    }
    Ok(())
}
