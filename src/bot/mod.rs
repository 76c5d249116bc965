//! Chat bot front-end for the shortener.
//!
//! The bot is transport-agnostic: [`BotDispatcher`] turns one incoming text
//! message into one reply, and a transport only has to feed it lines. The
//! admin CLI ships a console transport (`admin chat`) built on
//! [`console::run_console`].
//!
//! # Modules
//!
//! - [`backend`] - Operations the bot needs from the core service
//! - [`dispatcher`] - Command parsing and per-chat conversation state
//! - [`console`] - Line-based stdin/stdout transport

pub mod backend;
pub mod console;
pub mod dispatcher;

pub use backend::ShortenerBackend;
pub use dispatcher::{BotDispatcher, ChatId, ChatState, Command};
