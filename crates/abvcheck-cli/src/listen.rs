//! Line-oriented stand-in for a chat transport: each stdin line is one
//! inbound message, each reply is written to stdout.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use abvcheck_scraper::ProductSource;
use abvcheck_search::{handle_message, Aggregator, Requester};

pub(crate) async fn run<A, B>(
    aggregator: &Aggregator<A, B>,
    requester: &Requester,
) -> anyhow::Result<()>
where
    A: ProductSource,
    B: ProductSource,
{
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    serve(aggregator, requester, stdin, stdout).await
}

/// Handles messages sequentially until `input` is exhausted. Non-command
/// lines and empty replies produce no output.
pub(crate) async fn serve<A, B, R, W>(
    aggregator: &Aggregator<A, B>,
    requester: &Requester,
    input: R,
    mut output: W,
) -> anyhow::Result<()>
where
    A: ProductSource,
    B: ProductSource,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        tracing::debug!(message = %line, "received message");

        let Some(reply) = handle_message(aggregator, &line, requester).await else {
            continue;
        };
        if reply.is_empty() {
            continue;
        }

        output.write_all(reply.trim_end().as_bytes()).await?;
        output.write_all(b"\n").await?;
        output.flush().await?;
    }
    Ok(())
}
