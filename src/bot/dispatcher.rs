//! Bot command dispatch and conversation state.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::bot::backend::ShortenerBackend;
use crate::config::short_link;
use crate::error::AppError;

/// Identifier of a conversation.
pub type ChatId = i64;

const START_REPLY: &str = "Hi! Send /help to see what I can do.";
const HELP_REPLY: &str = "/start - start working with the bot\n\
/all - list every short link with its original\n\
/shorten - create a new short link";
const ASK_URL_REPLY: &str = "Send me the link to shorten:";
const EMPTY_MESSAGE_REPLY: &str = "Error: there is no text to shorten!";
const INVALID_URL_REPLY: &str =
    "Error: that is not a valid URL! Example of a URL: https://example.com";
const ALREADY_SHORTENED_REPLY: &str =
    "This link has already been shortened. Send /all to find its short link.";
const SERVER_ERROR_REPLY: &str = "Something went wrong on the server! Please try again later...";
const NO_PAIRS_REPLY: &str = "No short links yet. Create one with /shorten.";
const UNKNOWN_REPLY: &str = "I don't understand that. Send /help for the list of commands.";

/// Supported bot commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Shorten,
    All,
}

impl Command {
    /// Parses the leading command of a message.
    ///
    /// Accepts `/cmd`, `/cmd@botname` and trailing arguments, which are
    /// ignored. Returns `None` for plain text and unknown commands.
    pub fn parse(text: &str) -> Option<Self> {
        let word = text.split_whitespace().next()?;
        let name = word.strip_prefix('/')?;
        let name = name.split('@').next().unwrap_or_default();

        match name {
            "start" => Some(Self::Start),
            "help" => Some(Self::Help),
            "shorten" => Some(Self::Shorten),
            "all" => Some(Self::All),
            _ => None,
        }
    }
}

/// Conversation state of a single chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatState {
    #[default]
    Idle,
    AwaitingUrl,
}

/// Turns incoming messages into replies.
///
/// `/shorten` puts the chat into [`ChatState::AwaitingUrl`]; the next plain
/// message is taken as the URL and the state is cleared whatever the outcome.
/// Any other command also clears a pending `/shorten`.
pub struct BotDispatcher {
    backend: Arc<dyn ShortenerBackend>,
    public_base_url: String,
    states: Mutex<HashMap<ChatId, ChatState>>,
}

impl BotDispatcher {
    pub fn new(backend: Arc<dyn ShortenerBackend>, public_base_url: impl Into<String>) -> Self {
        Self {
            backend,
            public_base_url: public_base_url.into(),
            states: Mutex::new(HashMap::new()),
        }
    }

    /// Handles one message from `chat_id` and returns the reply text.
    pub async fn handle_message(&self, chat_id: ChatId, text: &str) -> String {
        match Command::parse(text) {
            Some(Command::Shorten) => {
                self.set_state(chat_id, ChatState::AwaitingUrl);
                ASK_URL_REPLY.to_string()
            }
            Some(Command::Start) => {
                self.take_state(chat_id);
                START_REPLY.to_string()
            }
            Some(Command::Help) => {
                self.take_state(chat_id);
                HELP_REPLY.to_string()
            }
            Some(Command::All) => {
                self.take_state(chat_id);
                self.list_reply().await
            }
            None => match self.take_state(chat_id) {
                ChatState::AwaitingUrl => self.shorten_reply(text).await,
                ChatState::Idle => UNKNOWN_REPLY.to_string(),
            },
        }
    }

    /// Current state of a chat.
    pub fn state(&self, chat_id: ChatId) -> ChatState {
        self.states
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&chat_id)
            .copied()
            .unwrap_or_default()
    }

    fn set_state(&self, chat_id: ChatId, state: ChatState) {
        self.states
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(chat_id, state);
    }

    fn take_state(&self, chat_id: ChatId) -> ChatState {
        self.states
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&chat_id)
            .unwrap_or_default()
    }

    async fn shorten_reply(&self, text: &str) -> String {
        let url = text.trim();
        if url.is_empty() {
            return EMPTY_MESSAGE_REPLY.to_string();
        }

        match self.backend.shorten(url).await {
            Ok(code) => format!(
                "Done! Your short link: {}",
                short_link(&self.public_base_url, &code)
            ),
            Err(AppError::InvalidInput { .. }) => INVALID_URL_REPLY.to_string(),
            Err(AppError::AlreadyExists { .. }) => ALREADY_SHORTENED_REPLY.to_string(),
            Err(e) => {
                tracing::error!("Bot failed to shorten URL: {}", e);
                SERVER_ERROR_REPLY.to_string()
            }
        }
    }

    async fn list_reply(&self) -> String {
        match self.backend.list_pairs().await {
            Ok(pairs) if pairs.is_empty() => NO_PAIRS_REPLY.to_string(),
            Ok(pairs) => pairs
                .iter()
                .map(|pair| {
                    format!(
                        "Original: {} -> {}",
                        pair.original_url,
                        short_link(&self.public_base_url, &pair.short_code)
                    )
                })
                .collect::<Vec<_>>()
                .join("\n"),
            Err(e) => {
                tracing::error!("Bot failed to list pairs: {}", e);
                SERVER_ERROR_REPLY.to_string()
            }
        }
    }
}
