use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io;
use std::io::prelude::*;
use std::path::Path;

use bytes::{Bytes, BytesMut};
use memmap::{Mmap, MmapOptions};

/// Input acquisition failures, distinguished by phase so callers can report
/// them before any parsing starts.
#[derive(Debug)]
pub enum InputError {
    Open(io::Error),
    Map(io::Error),
    Read(io::Error),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            InputError::Open(ref err) => write!(f, "open error: {}", err),
            InputError::Map(ref err) => write!(f, "mmap error: {}", err),
            InputError::Read(ref err) => write!(f, "read error: {}", err),
        }
    }
}

impl Error for InputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            InputError::Open(ref err) => Some(err),
            InputError::Map(ref err) => Some(err),
            InputError::Read(ref err) => Some(err),
        }
    }
}

/// Read-only memory-mapped input file. A zero-length file is held unmapped
/// (mapping zero bytes is an OS error) and exposed as an empty slice.
pub struct MappedFile {
    map: Option<Mmap>,
}

impl MappedFile {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<MappedFile, InputError> {
        let file = File::open(path).map_err(InputError::Open)?;
        let size = file.metadata().map_err(InputError::Open)?.len();
        if size == 0 {
            return Ok(MappedFile { map: None });
        }
        let map = unsafe { MmapOptions::new().map(&file) }.map_err(InputError::Map)?;
        Ok(MappedFile { map: Some(map) })
    }

    pub fn bytes(&self) -> &[u8] {
        self.map.as_deref().unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Slurps all of standard input. Used when no input file is given.
pub fn read_stdin() -> Result<Bytes, InputError> {
    let stdin = io::stdin();
    let mut stdin = stdin.lock();
    let mut buffer = BytesMut::new();
    loop {
        let chunk = stdin.fill_buf().map_err(InputError::Read)?;
        let amount = chunk.len();
        if amount == 0 {
            break;
        }
        buffer.extend_from_slice(chunk);
        stdin.consume(amount);
    }
    Ok(buffer.freeze())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_path(name: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("wordfreq-input-{}-{}", std::process::id(), name));
        path
    }

    #[test]
    fn maps_file_contents() {
        let path = scratch_path("contents");
        fs::write(&path, b"the cat sat").unwrap();
        let mapped = MappedFile::open(&path).unwrap();
        assert_eq!(mapped.bytes(), b"the cat sat");
        assert_eq!(mapped.len(), 11);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn empty_file_is_an_empty_slice_not_an_error() {
        let path = scratch_path("empty");
        fs::write(&path, b"").unwrap();
        let mapped = MappedFile::open(&path).unwrap();
        assert!(mapped.is_empty());
        assert_eq!(mapped.bytes(), b"");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let path = scratch_path("missing");
        match MappedFile::open(&path) {
            Err(InputError::Open(_)) => {}
            other => panic!("expected open error, got {:?}", other.map(|m| m.len())),
        }
    }
}
