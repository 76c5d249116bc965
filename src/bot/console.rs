//! Line-based console transport for the bot.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::bot::dispatcher::{BotDispatcher, ChatId};

/// Chat id used for the single console conversation.
pub const CONSOLE_CHAT_ID: ChatId = 0;

/// Feeds each input line to the dispatcher and writes the reply followed by
/// a blank line. Returns when the input is exhausted.
///
/// # Errors
///
/// Returns an I/O error if reading or writing fails.
pub async fn run_console<R, W>(
    dispatcher: &BotDispatcher,
    input: R,
    mut output: W,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        let reply = dispatcher.handle_message(CONSOLE_CHAT_ID, &line).await;
        output.write_all(reply.as_bytes()).await?;
        output.write_all(b"\n\n").await?;
        output.flush().await?;
    }

    Ok(())
}
