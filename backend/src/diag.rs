use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Plain-text diagnostic log.
///
/// The file is truncated once, when the log is created. Every `append`
/// opens the file in append mode, writes and closes it again, so the file
/// is complete on disk at any point of the run.
pub struct DiagnosticLog {
    path: PathBuf,
}

impl DiagnosticLog {
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        File::create(&path)?;
        log::debug!("diagnostic log truncated: {}", path.display());
        Ok(DiagnosticLog { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, text: &str) -> io::Result<()> {
        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        file.write_all(text.as_bytes())
    }

    /// Like `append`, but a failed write is only reported.
    pub fn note(&self, text: &str) {
        if let Err(e) = self.append(text) {
            log::warn!("cannot append to {}: {e}", self.path.display());
        }
    }
}
