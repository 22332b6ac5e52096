//! Path-addressed read-only asset loading
//!
//! [`AssetSource`] abstracts the bundled-asset namespace the host supplies;
//! [`DirAssets`] serves one rooted at a filesystem directory. The load
//! helpers absorb open and read failures into logged `None` returns; a
//! missing asset is an environmental condition, not a caller error.

use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use encoding_rs::Encoding;
use tracing::warn;

use super::stream::to_byte_array;

/// A path-addressed, read-only, hierarchical byte-source namespace.
pub trait AssetSource {
    /// Open the asset named by `path` for reading.
    fn open(&self, path: &str) -> io::Result<Box<dyn Read>>;
}

/// Asset namespace rooted at a filesystem directory.
#[derive(Clone, Debug)]
pub struct DirAssets {
    root: PathBuf,
}

impl DirAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetSource for DirAssets {
    fn open(&self, path: &str) -> io::Result<Box<dyn Read>> {
        let file = File::open(self.root.join(path))?;
        Ok(Box::new(file))
    }
}

/// Load a bundled asset fully into memory.
///
/// Open or read failures are logged and surface as `None`. The underlying
/// stream is released on every exit path.
///
/// # Panics
///
/// Panics if `path` is empty; that is caller misuse, not an environmental
/// failure.
pub fn load_asset<S>(source: &S, path: &str) -> Option<Vec<u8>>
where
    S: AssetSource + ?Sized,
{
    assert!(!path.is_empty(), "path is empty");

    match source
        .open(path)
        .and_then(|mut stream| to_byte_array(&mut stream))
    {
        Ok(content) => Some(content),
        Err(err) => {
            warn!("failed to load asset {path:?}: {err}");
            None
        }
    }
}

/// Load a bundled asset and decode it with the given text encoding.
///
/// Returns `None` if the byte load failed. Undecodable sequences are
/// replaced, per the encoding's replacement rules.
pub fn load_asset_as_string<S>(
    source: &S,
    path: &str,
    encoding: &'static Encoding,
) -> Option<String>
where
    S: AssetSource + ?Sized,
{
    let buffer = load_asset(source, path)?;
    let (content, _, _) = encoding.decode(&buffer);
    Some(content.into_owned())
}
