use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::debug;

use super::super::Container;
use super::format_message;

const QUIT_COMMAND: &str = "/quit";

pub struct ChatController<'a> {
    container: &'a Container,
}

impl<'a> ChatController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Interactive session on stdin/stdout.
    pub async fn chat(&self) -> Result<String> {
        let stdin = BufReader::new(tokio::io::stdin());
        let mut stdout = tokio::io::stdout();
        self.run(stdin, &mut stdout).await
    }

    /// Reads one prompt per line until `/quit` or EOF, writing each reply as it arrives.
    pub async fn run<R, W>(&self, reader: R, writer: &mut W) -> Result<String>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let conversation = self.container.conversation();
        let mut lines = reader.lines();

        writer
            .write_all(
                format!(
                    "Chatting with {}. Type {} to leave.\n",
                    self.container.model(),
                    QUIT_COMMAND
                )
                .as_bytes(),
            )
            .await?;
        writer.flush().await?;

        while let Some(line) = lines.next_line().await? {
            if line.trim() == QUIT_COMMAND {
                debug!("Quit requested");
                break;
            }

            conversation.set_input(line);
            if let Some(reply) = conversation.submit().await {
                writer
                    .write_all(format!("{}\n", format_message(&reply)).as_bytes())
                    .await?;
                writer.flush().await?;
            }
        }

        let exchanges = conversation.history().len() / 2;
        Ok(format!("Conversation ended after {} exchange(s).", exchanges))
    }
}
