//! Output destinations for log records.

use std::fmt;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Where formatted records are written.
///
/// The façade never closes a sink. Files it opens itself are held for as long
/// as the owning [`LogContext`](crate::LogContext) lives.
#[derive(Clone, Default)]
pub enum Sink {
    /// Process standard error
    #[default]
    Stderr,
    /// Process standard output
    Stdout,
    /// File opened in append mode; parent directories are created
    File(PathBuf),
    /// Caller-supplied writer
    Writer(SharedWriter),
}

impl Sink {
    /// Wrap any writer as a sink.
    pub fn writer<W: Write + Send + 'static>(writer: W) -> Self {
        Sink::Writer(SharedWriter::new(writer))
    }

    /// Whether colour output makes sense when the caller did not say.
    pub(crate) fn is_terminal(&self) -> bool {
        match self {
            Sink::Stderr => io::stderr().is_terminal(),
            Sink::Stdout => io::stdout().is_terminal(),
            Sink::File(_) | Sink::Writer(_) => false,
        }
    }

    /// Build the `tracing-subscriber` writer for this sink.
    pub(crate) fn make_writer(&self) -> io::Result<BoxMakeWriter> {
        Ok(match self {
            Sink::Stderr => BoxMakeWriter::new(io::stderr),
            Sink::Stdout => BoxMakeWriter::new(io::stdout),
            Sink::File(path) => BoxMakeWriter::new(open_file(path)?),
            Sink::Writer(shared) => {
                let shared = shared.clone();
                BoxMakeWriter::new(move || shared.clone())
            }
        })
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sink::Stderr => f.write_str("Stderr"),
            Sink::Stdout => f.write_str("Stdout"),
            Sink::File(path) => f.debug_tuple("File").field(path).finish(),
            Sink::Writer(_) => f.write_str("Writer(..)"),
        }
    }
}

impl From<MemorySink> for Sink {
    fn from(sink: MemorySink) -> Self {
        Sink::writer(sink)
    }
}

fn open_file(path: &Path) -> io::Result<RollingFileAppender> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let name = path
        .file_name()
        .ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "log file path has no file name")
        })?;

    // NEVER rotation keeps the file name exactly as given.
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name.to_string_lossy())
        .build(dir)
        .map_err(|e| io::Error::other(e.to_string()))
}

/// A writer shared between clones, serialised by a mutex.
#[derive(Clone)]
pub struct SharedWriter {
    inner: Arc<Mutex<dyn Write + Send>>,
}

impl SharedWriter {
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            inner: Arc::new(Mutex::new(writer)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, dyn Write + Send + 'static> {
        // A panic mid-write leaves nothing worth protecting.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().write(buf)
    }

    // fmt layers hand over one buffered record per call
    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.lock().write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock().flush()
    }
}

/// In-memory sink, mainly for tests.
///
/// Clones share one buffer, so keep a clone to read what a context wrote.
///
/// ```
/// use unitlog::{LogConfig, LogContext, MemorySink};
/// use unitlog::log::Logger;
///
/// let sink = MemorySink::new();
/// let context = LogContext::new(
///     LogConfig::default().with_sink(sink.clone()).with_timestamps(false),
/// );
/// context.logger("db").warn("slow query");
/// assert_eq!(sink.lines(), vec!["[WARN] db: slow query"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    fn buffer(&self) -> MutexGuard<'_, Vec<u8>> {
        self.buffer.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer()).into_owned()
    }

    /// Written lines without their terminators.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer().is_empty()
    }

    pub fn clear(&self) {
        self.buffer().clear();
    }
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
