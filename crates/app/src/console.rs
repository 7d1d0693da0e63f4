//! Console host
//!
//! Reads one line per turn from an input stream (stdin in the binary) and prints the bot's replies to
//! stdout. `/new` opens a fresh conversation; EOF or `/quit` ends the session.

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use uuid::Uuid;

use crate::bot_runtime::BotRuntime;
use crate::state::AppState;

/// Console command or message for one input line
#[derive(Debug, PartialEq, Eq)]
pub enum ConsoleInput<'a> {
    NewConversation,
    Quit,
    Blank,
    Message(&'a str),
}

impl<'a> ConsoleInput<'a> {
    pub fn parse(line: &'a str) -> Self {
        let text = line.trim_end_matches(['\r', '\n']);
        match text.trim() {
            "/new" => ConsoleInput::NewConversation,
            "/quit" => ConsoleInput::Quit,
            "" => ConsoleInput::Blank,
            _ => ConsoleInput::Message(text),
        }
    }
}

/// A console session: one user, one conversation at a time
pub struct ConsoleSession {
    runtime: BotRuntime,
    state: Arc<AppState>,
    user_id: String,
    conversation_id: String,
}

impl ConsoleSession {
    pub fn new(state: Arc<AppState>, runtime: BotRuntime, user_id: String) -> Self {
        Self {
            runtime,
            state,
            user_id,
            conversation_id: Uuid::new_v4().to_string(),
        }
    }

    pub fn conversation_id(&self) -> &str {
        &self.conversation_id
    }

    /// Start a new conversation id and tell the bots about it
    pub fn new_conversation(&mut self) {
        self.conversation_id = Uuid::new_v4().to_string();
        tracing::info!(conversation_id = %self.conversation_id, "Conversation started");
        self.runtime.on_conversation_started(&self.conversation_id);
    }

    /// Handle one user line and return the replies for the current conversation
    pub fn turn(&mut self, text: &str) -> Vec<String> {
        self.runtime
            .on_message(&self.conversation_id, &self.user_id, text);

        self.state
            .drain_outgoing()
            .into_iter()
            .filter(|m| m.conversation_id == self.conversation_id)
            .map(|m| m.content)
            .collect()
    }
}

/// Run the console loop until EOF or `/quit`
pub async fn run<R, W>(mut session: ConsoleSession, input: R, out: &mut W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    session.new_conversation();

    while let Some(line) = lines.next_line().await? {
        match ConsoleInput::parse(&line) {
            ConsoleInput::Quit => break,
            ConsoleInput::Blank => continue,
            ConsoleInput::NewConversation => {
                session.new_conversation();
                out.write_all(b"-- new conversation --\n").await?;
            }
            ConsoleInput::Message(text) => {
                for reply in session.turn(text) {
                    out.write_all(reply.as_bytes()).await?;
                    out.write_all(b"\n").await?;
                }
            }
        }
        out.flush().await?;
    }

    tracing::info!(conversation_id = %session.conversation_id(), "Console session ended");
    Ok(())
}
