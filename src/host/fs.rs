//! Default filesystem adapter reading resources from a root directory.

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::core::error::{EffectError, EffectResult};

use super::ResourceSource;

/// Reads resources from the local filesystem, resolved against a root
/// directory. Hosts with a virtual filesystem supply their own
/// [`ResourceSource`] instead.
pub struct DirResourceSource {
    root: PathBuf,
}

impl DirResourceSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ResourceSource for DirResourceSource {
    fn read(&self, name: &str) -> EffectResult<Vec<u8>> {
        let path = self.root.join(name);
        match std::fs::read(&path) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(EffectError::ResourceNotFound {
                path: name.to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }
}
