//! Writer task for the JSON state stream.

use anyhow::Context;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::watch;

use crate::core::GameSnapshot;
use crate::protocol::StateMessage;

/// Line terminator for the state stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineEnding {
    /// Plain `\n`, for pipes and files
    #[default]
    Lf,
    /// `\r\n`, for a terminal in raw mode where `\n` does not return the
    /// cursor
    CrLf,
}

impl LineEnding {
    pub fn as_bytes(&self) -> &'static [u8] {
        match self {
            LineEnding::Lf => b"\n",
            LineEnding::CrLf => b"\r\n",
        }
    }
}

/// Write the current snapshot and every later one as JSON lines.
///
/// Intermediate snapshots may be skipped when the writer falls behind; the
/// latest state is always written. Returns once the publisher is gone.
pub async fn stream_states<W>(
    snapshots: watch::Receiver<GameSnapshot>,
    writer: W,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    stream_states_with(snapshots, writer, LineEnding::Lf).await
}

/// [`stream_states`] with a chosen line ending
pub async fn stream_states_with<W>(
    mut snapshots: watch::Receiver<GameSnapshot>,
    mut writer: W,
    line_ending: LineEnding,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut seq: u64 = 0;
    let mut buf = Vec::with_capacity(4096);

    loop {
        seq += 1;
        buf.clear();
        {
            let snapshot = snapshots.borrow_and_update();
            serde_json::to_writer(&mut buf, &StateMessage::from_snapshot(&snapshot, seq))
                .context("encode state")?;
        }
        buf.extend_from_slice(line_ending.as_bytes());
        writer.write_all(&buf).await.context("write state")?;
        writer.flush().await.context("flush state")?;

        if snapshots.changed().await.is_err() {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Session;
    use crate::types::Command;

    #[tokio::test]
    async fn test_writes_until_sender_dropped() {
        let session = Session::new(5);
        let (tx, rx) = watch::channel(session.snapshot());
        let (writer, mut reader) = tokio::io::duplex(1 << 20);

        let task = tokio::spawn(stream_states(rx, writer));
        tokio::task::yield_now().await;
        tx.send_replace(session.apply(Command::Start).snapshot());
        tokio::task::yield_now().await;
        drop(tx);
        task.await.unwrap().unwrap();

        let mut out = String::new();
        tokio::io::AsyncReadExt::read_to_string(&mut reader, &mut out)
            .await
            .unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert!(!lines.is_empty());

        let first: StateMessage = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first.seq, 1);
        let last: StateMessage = serde_json::from_str(lines[lines.len() - 1]).unwrap();
        assert_eq!(last.phase, "running");
    }

    #[tokio::test]
    async fn test_crlf_line_ending() {
        let (tx, rx) = watch::channel(Session::new(5).snapshot());
        drop(tx);

        let mut out: Vec<u8> = Vec::new();
        stream_states_with(rx, &mut out, LineEnding::CrLf)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("}\r\n"));
        assert_eq!(text.matches('\n').count(), 1);
        let message: StateMessage = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(message.seq, 1);
    }
}
