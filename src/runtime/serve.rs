use super::actor::VfsHandle;
use super::message::{Inbound, parse_inbound};
use crate::error::{VfsError, VfsResult};
use serde_json::{Value, json};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Feed JSON lines from `reader` into `handle` and write query replies.
///
/// Replies are one JSON object per line: `{"id", "result"}` on success or
/// `{"id", "error": {"message"}}` when the query failed. Malformed lines
/// are logged and skipped. Returns at end of input.
pub async fn serve<R, W>(handle: &VfsHandle, reader: R, mut writer: W) -> VfsResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_inbound(line) {
            Ok(Inbound::Event(event)) => {
                log::debug!(target: "vfsync::serve", "Event for {:?}", event.uri());
                handle.notify(event).await?;
            }
            Ok(Inbound::Query { id, query }) => {
                let reply = match handle.query(query).await {
                    Ok(result) => json!({ "id": id, "result": result }),
                    Err(VfsError::ChannelClosed) => return Err(VfsError::ChannelClosed),
                    Err(err) => json!({ "id": id, "error": { "message": err.to_string() } }),
                };
                write_line(&mut writer, &reply).await?;
            }
            Err(err) => {
                log::warn!(target: "vfsync::serve", "Skipping message: {}", err);
            }
        }
    }

    Ok(())
}

async fn write_line<W: AsyncWrite + Unpin>(writer: &mut W, value: &Value) -> VfsResult<()> {
    let mut buf = serde_json::to_vec(value)?;
    buf.push(b'\n');
    writer.write_all(&buf).await?;
    writer.flush().await?;
    Ok(())
}
