//! Terminal front-end for the chat widget.

use sol_ai::MessageExchange;
use sol_common::Language;
use sol_widget::{ChatMessage, ChatRole, ChatWidget};
use tokio::io::{AsyncBufReadExt, BufReader};

/// One line of user input, interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Open,
    Close,
    Toggle,
    Language(Language),
    Help,
    Quit,
    Message(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let Some(rest) = trimmed.strip_prefix('/') else {
            return Command::Message(line.to_string());
        };

        let mut parts = rest.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("open"), _) => Command::Open,
            (Some("close"), _) => Command::Close,
            (Some("toggle"), _) => Command::Toggle,
            (Some("lang"), Some(code)) => Command::Language(Language::from_code(code)),
            (Some("quit" | "exit"), _) => Command::Quit,
            _ => Command::Help,
        }
    }
}

const HELP: &str = "\
Commands:
  /open          open the chat panel
  /close         close the chat panel
  /toggle        open or close the chat panel
  /lang <code>   switch language (en, es)
  /quit          leave
Anything else is sent to Sol while the panel is open.";

pub fn render_message(message: &ChatMessage) -> String {
    let who = match message.role {
        ChatRole::User => "you",
        ChatRole::Assistant => "sol",
    };
    format!("[{}] {who}: {}", message.time_label(), message.content)
}

/// What is visible right now: launcher button or panel header.
pub fn render_header(widget: &ChatWidget) -> String {
    let strings = widget.strings();
    if widget.is_open() {
        format!(
            "== {} ==  ({})\n{}\n{}",
            strings.title, strings.close_label, strings.welcome_message, strings.input_placeholder
        )
    } else {
        format!("[ {} ]", strings.launcher_label)
    }
}

/// Run the interactive loop until `/quit` or end of input.
pub async fn run(
    widget: &mut ChatWidget,
    exchange: &dyn MessageExchange,
) -> sol_common::Result<()> {
    println!("{}", render_header(widget));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Command::Quit => break,
            Command::Help => println!("{HELP}"),
            Command::Open => {
                widget.open();
                println!("{}", render_header(widget));
            }
            Command::Close => {
                widget.close();
                println!("{}", render_header(widget));
            }
            Command::Toggle => {
                widget.toggle();
                println!("{}", render_header(widget));
            }
            Command::Language(language) => {
                widget.set_language(language);
                println!("{}", render_header(widget));
            }
            Command::Message(text) => {
                if !widget.is_open() {
                    println!("{}", render_header(widget));
                    continue;
                }
                widget.set_input(text);
                let Some(turn) = widget.begin_submit() else {
                    continue;
                };
                if let Some(last) = widget.messages().last() {
                    println!("{}", render_message(last));
                }
                println!("{}", widget.strings().waiting_label);
                let reply = exchange.send_message(turn.language, &turn.text).await;
                widget.finish_submit(reply);
                if let Some(last) = widget.messages().last() {
                    println!("{}", render_message(last));
                }
            }
        }
    }
    Ok(())
}
