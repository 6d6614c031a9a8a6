//! In-memory codec fake shared by the unit tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::buffer::AudioBuffer;
use crate::codec::AudioCodec;
use crate::error::SynthResult;

/// Codec fake that serves buffers from a map and records every encode.
pub(crate) struct FakeCodec {
    files: HashMap<PathBuf, AudioBuffer>,
    decode_log: RefCell<Vec<PathBuf>>,
    written: RefCell<HashMap<PathBuf, AudioBuffer>>,
}

impl FakeCodec {
    pub(crate) fn new() -> Self {
        Self {
            files: HashMap::new(),
            decode_log: RefCell::new(Vec::new()),
            written: RefCell::new(HashMap::new()),
        }
    }

    /// Registers a decodable file.
    pub(crate) fn with_file(mut self, path: impl Into<PathBuf>, buffer: AudioBuffer) -> Self {
        self.files.insert(path.into(), buffer);
        self
    }

    /// Paths decoded so far, in order, repeats included.
    pub(crate) fn decoded(&self) -> Vec<PathBuf> {
        self.decode_log.borrow().clone()
    }

    /// Everything encoded so far, keyed by path.
    pub(crate) fn written(&self) -> HashMap<PathBuf, AudioBuffer> {
        self.written.borrow().clone()
    }
}

impl AudioCodec for FakeCodec {
    fn decode(&self, path: &Path) -> SynthResult<AudioBuffer> {
        self.decode_log.borrow_mut().push(path.to_path_buf());
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, path.display().to_string()).into())
    }

    fn encode(&self, path: &Path, buffer: &AudioBuffer) -> SynthResult<()> {
        self.written
            .borrow_mut()
            .insert(path.to_path_buf(), buffer.clone());
        Ok(())
    }
}
