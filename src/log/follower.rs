//! Live tail of an append-only text log.
//!
//! [`LogFollower`] opens a file, seeks to its end and yields only lines
//! appended afterwards. It is a blocking iterator meant to be driven by a
//! worker thread; it stops once the shared stop flag is raised.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Delay between reads when no new data is available.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// An item produced by [`LogFollower`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TailEvent {
    /// A newly appended line, without its line terminator.
    Line(String),
    /// The log file did not exist when the follower started. Always the last item.
    Missing(PathBuf),
}

enum State {
    Pending,
    Open(BufReader<File>),
    Done,
}

/// Follows a log file, yielding lines as they are appended.
pub struct LogFollower {
    path: PathBuf,
    stop: Arc<AtomicBool>,
    poll_interval: Duration,
    state: State,
    position: u64,
    partial: Vec<u8>,
}

impl LogFollower {
    /// Creates a follower for `path`. The file is opened on the first call to `next`.
    pub fn new(path: impl Into<PathBuf>, stop: Arc<AtomicBool>) -> Self {
        Self {
            path: path.into(),
            stop,
            poll_interval: DEFAULT_POLL_INTERVAL,
            state: State::Pending,
            position: 0,
            partial: Vec::new(),
        }
    }

    /// Overrides the delay between reads when the file has no new data.
    #[must_use]
    pub const fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&mut self) -> io::Result<Option<TailEvent>> {
        match File::open(&self.path) {
            Ok(file) => {
                let mut reader = BufReader::new(file);
                self.position = reader.seek(SeekFrom::End(0))?;
                tracing::debug!(path = %self.path.display(), offset = self.position, "following log file");
                self.state = State::Open(reader);
                Ok(None)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                self.state = State::Done;
                Ok(Some(TailEvent::Missing(self.path.clone())))
            }
            Err(e) => {
                self.state = State::Done;
                Err(e)
            }
        }
    }

    /// Reads the next complete line, if one is available right now.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let State::Open(reader) = &mut self.state else {
            return Ok(None);
        };

        // Rewind when the file was truncated or replaced by a shorter one.
        let len = reader.get_ref().metadata()?.len();
        if len < self.position {
            tracing::info!(path = %self.path.display(), "log file truncated, rewinding");
            self.position = reader.seek(SeekFrom::Start(0))?;
            self.partial.clear();
        }

        let read = reader.read_until(b'\n', &mut self.partial)?;
        self.position += read as u64;

        if self.partial.last() != Some(&b'\n') {
            // Incomplete line; keep the fragment until its newline arrives.
            return Ok(None);
        }

        let line = decode_lossy(&self.partial);
        self.partial.clear();
        Ok(Some(line.trim().to_string()))
    }
}

impl Iterator for LogFollower {
    type Item = io::Result<TailEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.stop.load(Ordering::SeqCst) {
                return None;
            }

            match self.state {
                State::Done => return None,
                State::Pending => match self.open() {
                    Ok(Some(event)) => return Some(Ok(event)),
                    Ok(None) => continue,
                    Err(e) => return Some(Err(e)),
                },
                State::Open(_) => {}
            }

            match self.read_line() {
                Ok(Some(line)) => return Some(Ok(TailEvent::Line(line))),
                Ok(None) => std::thread::sleep(self.poll_interval),
                Err(e) => {
                    self.state = State::Done;
                    return Some(Err(e));
                }
            }
        }
    }
}

/// Decodes UTF-8, dropping invalid byte sequences instead of failing.
fn decode_lossy(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}
