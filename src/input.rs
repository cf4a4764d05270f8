//! Input resolution
//!
//! Decides where the notification body comes from: the parsed flags when
//! stdin is an interactive terminal, or a drain of piped stdin otherwise,
//! optionally raced against a one-shot failsafe timer.

use crate::errors::Result;
use crate::options::NotifyOptions;
use std::io::IsTerminal;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Read buffer size for each stdin chunk
const READ_CHUNK: usize = 4096;

/// Resolve the final option set
///
/// Interactive terminals dispatch the flag options as-is. Piped input is
/// drained chunk by chunk; non-empty piped text overrides the flag message.
pub async fn resolve(options: NotifyOptions, failsafe: Option<Duration>) -> Result<NotifyOptions> {
    if std::io::stdin().is_terminal() {
        tracing::debug!("stdin is a terminal, using flag options");
        return Ok(options);
    }

    let piped = drain(tokio::io::stdin(), failsafe).await?;
    Ok(options.with_piped_message(piped))
}

/// Drain a byte stream until end-of-stream or until the failsafe elapses
///
/// Chunks are appended in arrival order and decoded once at the end, so
/// multi-byte sequences split across chunk boundaries survive. The race is
/// first-wins: whichever of timer and end-of-stream commits first ends the
/// loop, and exactly one dispatch follows.
async fn drain<R>(mut reader: R, failsafe: Option<Duration>) -> std::io::Result<String>
where
    R: AsyncRead + Unpin,
{
    let timer = async {
        match failsafe {
            Some(delay) => tokio::time::sleep(delay).await,
            None => std::future::pending().await,
        }
    };
    tokio::pin!(timer);

    let mut buffer = Vec::new();
    let mut chunk = [0u8; READ_CHUNK];

    loop {
        tokio::select! {
            () = &mut timer => {
                tracing::debug!(bytes = buffer.len(), "failsafe elapsed before end of stream");
                break;
            }
            read = reader.read(&mut chunk) => {
                match read? {
                    0 => break, // end of stream
                    n => buffer.extend_from_slice(&chunk[..n]),
                }
            }
        }
    }

    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncWriteExt;

    #[tokio::test]
    async fn drains_chunks_in_arrival_order() {
        let (mut tx, rx) = tokio::io::duplex(64);
        let writer = tokio::spawn(async move {
            tx.write_all(b"Hello ").await.unwrap();
            tx.write_all(b"world").await.unwrap();
            // dropping tx closes the stream
        });

        let text = drain(rx, None).await.unwrap();
        writer.await.unwrap();
        assert_eq!(text, "Hello world");
    }

    #[tokio::test]
    async fn empty_stream_yields_empty_string() {
        let (tx, rx) = tokio::io::duplex(16);
        drop(tx);

        let text = drain(rx, None).await.unwrap();
        assert!(text.is_empty());
    }

    #[tokio::test]
    async fn multibyte_sequences_survive_chunk_boundaries() {
        let (mut tx, rx) = tokio::io::duplex(64);
        let bytes = "héllo wörld".as_bytes().to_vec();
        let writer = tokio::spawn(async move {
            // split inside the two-byte sequence
            tx.write_all(&bytes[..2]).await.unwrap();
            tx.flush().await.unwrap();
            tokio::task::yield_now().await;
            tx.write_all(&bytes[2..]).await.unwrap();
        });

        let text = drain(rx, None).await.unwrap();
        writer.await.unwrap();
        assert_eq!(text, "héllo wörld");
    }

    #[tokio::test(start_paused = true)]
    async fn failsafe_commits_partial_buffer() {
        let (mut tx, rx) = tokio::io::duplex(64);
        tx.write_all(b"partial").await.unwrap();
        tx.flush().await.unwrap();

        // tx stays open, so the stream never ends; only the timer can win
        let text = drain(rx, Some(Duration::from_millis(500))).await.unwrap();
        assert_eq!(text, "partial");
        drop(tx);
    }

    #[tokio::test(start_paused = true)]
    async fn failsafe_with_no_input_yields_empty_string() {
        let (tx, rx) = tokio::io::duplex(16);

        let text = drain(rx, Some(Duration::from_millis(200))).await.unwrap();
        assert!(text.is_empty());
        drop(tx);
    }

    #[tokio::test]
    async fn end_of_stream_wins_when_no_failsafe_is_set() {
        let (mut tx, rx) = tokio::io::duplex(64);
        tx.write_all(b"Hi").await.unwrap();
        drop(tx);

        let text = drain(rx, None).await.unwrap();
        assert_eq!(text, "Hi");
    }
}
