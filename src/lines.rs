//! Line source and sink around the validator
//!
//! The source streams a file into a bounded channel and closes it at EOF; the
//! sink replaces the output file with the produced lines.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tokio::fs::{self, File};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::error::Result;

/// Drop a trailing `\r` left by CRLF line endings
pub fn trim_line_ending(line: &mut Vec<u8>) {
    if line.last() == Some(&b'\r') {
        line.pop();
    }
}

/// Push every line of `reader` into `lines`, in order
///
/// Lines are sent as raw bytes; checking their encoding is up to the
/// consumer, so one bad line cannot end the stream. Returns the number of
/// lines delivered. Dropping `lines` on return is what signals end of stream
/// to the consumer. If the consumer has gone away the remaining input is left
/// unread.
pub async fn feed_lines<R>(reader: R, lines: mpsc::Sender<Vec<u8>>) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
{
    let mut source = reader.split(b'\n');
    let mut sent = 0;

    while let Some(mut line) = source.next_segment().await? {
        trim_line_ending(&mut line);
        if lines.send(line).await.is_err() {
            log::debug!("Line consumer closed after {} lines", sent);
            break;
        }
        sent += 1;
    }

    Ok(sent)
}

/// Open `path` and stream its lines on a background task
///
/// Read failures, including a missing file, come back through the join
/// handle; the receiver simply sees the stream end.
pub fn spawn_line_reader(
    path: PathBuf,
    capacity: usize,
) -> (mpsc::Receiver<Vec<u8>>, JoinHandle<Result<usize>>) {
    let (tx, rx) = mpsc::channel(capacity.max(1));

    let handle: JoinHandle<Result<usize>> = tokio::spawn(async move {
        let file = File::open(&path).await?;
        let sent = feed_lines(BufReader::new(file), tx).await?;
        log::debug!("Read {} lines from {}", sent, path.display());
        Ok(sent)
    });

    (rx, handle)
}

/// Replace `path` with one line per entry of `lines`
///
/// Content goes to a sibling temporary file first, which is then renamed over
/// the target so readers never see a half-written file.
pub async fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let staging = staging_path(path);

    let mut writer = BufWriter::new(File::create(&staging).await?);
    for line in lines {
        writer.write_all(line.as_bytes()).await?;
        writer.write_all(b"\n").await?;
    }
    writer.flush().await?;
    writer.into_inner().sync_all().await?;

    if let Err(err) = fs::rename(&staging, path).await {
        let _ = fs::remove_file(&staging).await;
        return Err(err.into());
    }

    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("output"));
    name.push(".partial");
    path.with_file_name(name)
}
