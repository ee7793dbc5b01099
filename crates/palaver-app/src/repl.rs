//! Line-oriented chat loop over an async reader and a blocking writer.

use std::future::Future;
use std::io::Write;

use palaver_chat::{ChatController, ExchangeError, FALLBACK_REPLY};
use palaver_config::schema::ChatConfig;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, warn};

use crate::render;

#[derive(Debug, PartialEq, Eq)]
pub enum Command<'a> {
    Blank,
    Help,
    Session,
    Forget,
    Quit,
    Say(&'a str),
}

impl<'a> Command<'a> {
    /// Whitespace-only lines are dropped here, before the controller sees
    /// them. Only exact command words are commands; anything else is sent.
    pub fn parse(line: &'a str) -> Self {
        let trimmed = line.trim();
        match trimmed {
            "" => Command::Blank,
            "/help" => Command::Help,
            "/session" => Command::Session,
            "/forget" => Command::Forget,
            "/quit" | "/exit" => Command::Quit,
            _ => Command::Say(line),
        }
    }
}

/// Whether the loop should keep reading after an exchange.
enum Flow {
    Continue,
    Stop,
}

/// Run the chat loop until EOF, `/quit`, or Ctrl-C.
pub async fn run<R, W>(
    chat: &mut ChatController,
    config: &ChatConfig,
    input: R,
    out: &mut W,
) -> palaver_common::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "{}", render::header(&config.title, chat.current_date()))?;
    writeln!(out, "Type a message, or /help for commands.")?;

    let mut lines = input.lines();
    loop {
        write!(out, "{}", config.prompt)?;
        out.flush()?;

        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => None,
        };
        let Some(line) = line else {
            writeln!(out)?;
            break;
        };

        match Command::parse(&line) {
            Command::Blank => continue,
            Command::Quit => break,
            Command::Help => writeln!(out, "{}", render::HELP)?,
            Command::Session => writeln!(out, "session: {}", chat.session().id())?,
            Command::Forget => match chat.forget_remote_history().await {
                Ok(confirmation) => writeln!(out, "{confirmation}")?,
                Err(e) => {
                    warn!("clear history failed: {e}");
                    writeln!(out, "{FALLBACK_REPLY}")?;
                }
            },
            Command::Say(text) => {
                let interrupt = tokio::signal::ctrl_c();
                if let Flow::Stop = exchange(chat, config, text, out, interrupt).await? {
                    break;
                }
            }
        }
    }

    info!(
        session = %chat.session().id(),
        messages = chat.transcript().len(),
        "chat loop finished"
    );
    Ok(())
}

/// Run one exchange. If `interrupt` resolves first the request is
/// abandoned, recorded as cancelled, and the loop is told to stop.
async fn exchange<W, I>(
    chat: &mut ChatController,
    config: &ChatConfig,
    text: &str,
    out: &mut W,
    interrupt: I,
) -> palaver_common::Result<Flow>
where
    W: Write,
    I: Future,
{
    let mark = chat.transcript().len();
    let date_before = chat.current_date().map(str::to_owned);

    let pending = match chat.begin_exchange(text) {
        Ok(pending) => pending,
        Err(e) => {
            debug!("input not sent: {e}");
            return Ok(Flow::Continue);
        }
    };
    print_since(chat, config, mark, out)?;
    if chat.is_busy() {
        writeln!(out, "{}", render::THINKING)?;
        out.flush()?;
    }

    let answered = tokio::select! {
        result = chat.dispatch(&pending) => Some(result),
        _ = interrupt => None,
    };
    let (result, flow) = match answered {
        Some(result) => (result, Flow::Continue),
        None => {
            writeln!(out)?;
            (Err(ExchangeError::Cancelled), Flow::Stop)
        }
    };

    let mark = chat.transcript().len();
    chat.complete_exchange(pending, result);
    print_since(chat, config, mark, out)?;

    if let Some(date) = chat.current_date() {
        if date_before.as_deref() != Some(date) {
            writeln!(out, "{}", render::current_date_line(date))?;
        }
    }
    Ok(flow)
}

fn print_since<W: Write>(
    chat: &ChatController,
    config: &ChatConfig,
    mark: usize,
    out: &mut W,
) -> std::io::Result<()> {
    for message in chat.transcript().since(mark) {
        writeln!(out, "{}", render::message(message, config.show_timestamps))?;
    }
    Ok(())
}
