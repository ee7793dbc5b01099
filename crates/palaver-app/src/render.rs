//! Plain-text rendering of the header and transcript entries.

use chrono::Local;
use palaver_chat::{Message, Role};

pub const THINKING: &str = "AI is thinking...";

pub const HELP: &str = "\
Commands:
  /help      show this list
  /session   print the session id
  /forget    ask the backend to forget this conversation
  /quit      exit";

pub fn header(title: &str, current_date: Option<&str>) -> String {
    let rule = "=".repeat(title.chars().count() + 4);
    let mut out = format!("{rule}\n  {title}\n{rule}");
    if let Some(date) = current_date {
        out.push('\n');
        out.push_str(&current_date_line(date));
    }
    out
}

pub fn current_date_line(date: &str) -> String {
    format!("Current date: {date}")
}

fn label(role: Role) -> &'static str {
    match role {
        Role::User => "you",
        Role::Assistant => "assistant",
    }
}

/// One transcript entry. Continuation lines are indented under the first.
pub fn message(message: &Message, show_timestamp: bool) -> String {
    let prefix = if show_timestamp {
        let local = message.timestamp.with_timezone(&Local);
        format!("[{}] {}: ", local.format("%H:%M:%S"), label(message.role))
    } else {
        format!("{}: ", label(message.role))
    };
    let indent = " ".repeat(prefix.chars().count());

    let mut out = String::with_capacity(prefix.len() + message.content.len());
    for (i, line) in message.content.lines().enumerate() {
        if i == 0 {
            out.push_str(&prefix);
        } else {
            out.push('\n');
            out.push_str(&indent);
        }
        out.push_str(line);
    }
    if out.is_empty() {
        out.push_str(prefix.trim_end());
    }
    out
}
