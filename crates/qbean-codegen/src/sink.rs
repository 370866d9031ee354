//! Output sinks for generated artifacts
//!
//! An artifact is either written completely or not at all: [`OutputSink::open`]
//! hands out an [`ArtifactStream`] that only becomes visible once
//! [`ArtifactStream::commit`] succeeds. Dropping an uncommitted stream
//! discards everything written to it.

use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::NamedTempFile;

/// A scoped, writable artifact.
pub trait ArtifactStream: Write {
    /// Make the artifact visible. Consumes the stream.
    fn commit(self: Box<Self>) -> io::Result<()>;
}

/// Destination for generated artifacts.
pub trait OutputSink {
    /// Open the artifact `name.extension` in `namespace`.
    fn open(
        &self,
        namespace: &str,
        name: &str,
        extension: &str,
    ) -> io::Result<Box<dyn ArtifactStream>>;
}

/// Relative path of an artifact: `<namespace as dirs>/<name>.<extension>`.
///
/// # Examples
///
/// ```
/// use qbean_codegen::artifact_path;
/// use std::path::PathBuf;
///
/// assert_eq!(
///     artifact_path("app.query", "QCountry", "kt"),
///     PathBuf::from("app/query/QCountry.kt")
/// );
/// ```
pub fn artifact_path(namespace: &str, name: &str, extension: &str) -> PathBuf {
    let mut path: PathBuf = namespace
        .split('.')
        .filter(|segment| !segment.is_empty())
        .collect();
    path.push(format!("{name}.{extension}"));
    path
}

// ============================================================================
// File system
// ============================================================================

/// Writes artifacts below a root directory.
#[derive(Debug, Clone)]
pub struct FsSink {
    root: PathBuf,
}

impl FsSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl OutputSink for FsSink {
    fn open(
        &self,
        namespace: &str,
        name: &str,
        extension: &str,
    ) -> io::Result<Box<dyn ArtifactStream>> {
        let target = self.root.join(artifact_path(namespace, name, extension));
        let dir = target
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.root.clone());
        fs::create_dir_all(&dir)?;

        // Same directory as the target so the final rename never crosses filesystems
        let file = NamedTempFile::new_in(&dir)?;
        Ok(Box::new(FsArtifact {
            writer: BufWriter::new(file),
            target,
        }))
    }
}

struct FsArtifact {
    writer: BufWriter<NamedTempFile>,
    target: PathBuf,
}

impl Write for FsArtifact {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl ArtifactStream for FsArtifact {
    fn commit(self: Box<Self>) -> io::Result<()> {
        let FsArtifact { writer, target } = *self;
        let file = writer.into_inner().map_err(|e| e.into_error())?;
        file.persist(&target).map_err(|e| e.error)?;
        tracing::debug!(path = %target.display(), "artifact written");
        Ok(())
    }
}

// ============================================================================
// Memory
// ============================================================================

/// Keeps committed artifacts in memory, keyed by relative path.
///
/// Clones share the same store.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    artifacts: Arc<Mutex<BTreeMap<PathBuf, String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content of a committed artifact.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.artifacts.lock().get(path.as_ref()).cloned()
    }

    /// Paths of all committed artifacts, sorted.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.artifacts.lock().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.artifacts.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.lock().is_empty()
    }
}

impl OutputSink for MemorySink {
    fn open(
        &self,
        namespace: &str,
        name: &str,
        extension: &str,
    ) -> io::Result<Box<dyn ArtifactStream>> {
        Ok(Box::new(MemoryArtifact {
            buffer: Vec::new(),
            path: artifact_path(namespace, name, extension),
            store: Arc::clone(&self.artifacts),
        }))
    }
}

struct MemoryArtifact {
    buffer: Vec<u8>,
    path: PathBuf,
    store: Arc<Mutex<BTreeMap<PathBuf, String>>>,
}

impl Write for MemoryArtifact {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl ArtifactStream for MemoryArtifact {
    fn commit(self: Box<Self>) -> io::Result<()> {
        let MemoryArtifact {
            buffer,
            path,
            store,
        } = *self;
        let text =
            String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        store.lock().insert(path, text);
        Ok(())
    }
}
