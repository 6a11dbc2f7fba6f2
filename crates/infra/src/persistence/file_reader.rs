// crates/infra/src/persistence/file_reader.rs
use std::{
    fs::File,
    io::BufReader,
    path::Path,
};

use count_values_shared_kernel::{InfraResult, InfrastructureError};

/// Convenience helpers for opening input files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`. Directories are rejected up front so the
    /// failure names the path instead of surfacing later as a read error.
    pub fn open(path: &Path) -> InfraResult<File> {
        let file = File::open(path).map_err(|source| file_open(path, source))?;
        let is_dir = file.metadata().map(|m| m.is_dir()).map_err(|source| file_open(path, source))?;
        if is_dir {
            return Err(file_open(path, std::io::Error::other("is a directory")));
        }
        Ok(file)
    }

    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> InfraResult<BufReader<File>> {
        Self::open(path).map(BufReader::new)
    }
}

fn file_open(path: &Path, source: std::io::Error) -> InfrastructureError {
    InfrastructureError::FileOpen { path: path.to_path_buf(), source }
}
