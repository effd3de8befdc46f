//! Runtime binding through the platform dynamic loader
//!
//! Resolution is open, then look up, then hand back a [`DynamicRoll`] that owns the open
//! image next to the function pointer taken from it. Dropping the [`DynamicRoll`] (or the
//! image alone, when the lookup fails) releases the library, so every exit path after a
//! successful open closes it exactly once.

use std::fmt;
use std::path::{Path, PathBuf};

use libloading::{Library, Symbol};
use tracing::{debug, trace, warn};

use super::{Resolver, RollFn, RollFunction};
use crate::config::ResolverConfig;
use crate::error::{RollError, RollResult};

/// An opened library image that can bind the roll entry point by name
pub trait LibraryImage {
    /// Look up `symbol` and bind it to [`RollFn`]. Errors carry the loader's text.
    fn lookup(&self, symbol: &str) -> Result<RollFn, String>;
}

/// Opens library images
pub trait ImageLoader {
    type Image: LibraryImage;

    /// Open the image at `path`. Errors carry the loader's text.
    fn open(&self, path: &Path) -> Result<Self::Image, String>;
}

/// `dlopen`/`LoadLibrary` through `libloading`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLoader;

impl ImageLoader for SystemLoader {
    type Image = LoadedLibrary;

    fn open(&self, path: &Path) -> Result<LoadedLibrary, String> {
        // SAFETY: opening runs the library's initialisers. The path is fixed at build time
        // and names the roll library this binary was built against.
        let library = unsafe { Library::new(path) }.map_err(|err| err.to_string())?;
        debug!(path = %path.display(), "opened library");

        Ok(LoadedLibrary {
            library: Some(library),
            path: path.to_path_buf(),
        })
    }
}

/// A library opened by [`SystemLoader`], closed on drop
pub struct LoadedLibrary {
    library: Option<Library>,
    path: PathBuf,
}

impl LibraryImage for LoadedLibrary {
    fn lookup(&self, symbol: &str) -> Result<RollFn, String> {
        let library = self
            .library
            .as_ref()
            .ok_or_else(|| "library already closed".to_string())?;

        // SAFETY: the symbol table is untyped. This is the single place where the exported
        // `symbol` is asserted to be `uint16_t (*)(uint8_t, uint8_t)`; the library is trusted
        // to honour that. `Option` absorbs a symbol that resolves to null.
        let func: Symbol<Option<RollFn>> =
            unsafe { library.get(symbol.as_bytes()) }.map_err(|err| err.to_string())?;

        (*func).ok_or_else(|| format!("{symbol}: symbol resolved to a null address"))
    }
}

impl Drop for LoadedLibrary {
    fn drop(&mut self) {
        if let Some(library) = self.library.take() {
            match library.close() {
                Ok(()) => debug!(path = %self.path.display(), "released library"),
                Err(err) => warn!(
                    path = %self.path.display(),
                    error = %err,
                    "failed to release library"
                ),
            }
        }
    }
}

impl fmt::Debug for LoadedLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedLibrary")
            .field("path", &self.path)
            .field("open", &self.library.is_some())
            .finish()
    }
}

/// Resolves `roll` from a library image opened at runtime
#[derive(Debug, Clone)]
pub struct DynamicResolver<L = SystemLoader> {
    config: ResolverConfig,
    loader: L,
}

impl DynamicResolver<SystemLoader> {
    pub fn new(config: ResolverConfig) -> Self {
        Self::with_loader(config, SystemLoader)
    }
}

impl<L: ImageLoader> DynamicResolver<L> {
    pub fn with_loader(config: ResolverConfig, loader: L) -> Self {
        Self { config, loader }
    }
}

impl<L: ImageLoader> Resolver for DynamicResolver<L> {
    type Function = DynamicRoll<L::Image>;

    fn resolve(&self) -> RollResult<Self::Function> {
        self.config.validate()?;

        let path = &self.config.library_path;
        let symbol = &self.config.symbol;

        trace!(path = %path.display(), "opening library");
        let image = self.loader.open(path).map_err(|message| RollError::Load {
            path: path.clone(),
            message,
        })?;

        trace!(symbol = %symbol, "resolving symbol");
        // On failure `image` is dropped here, releasing the library
        let func = image.lookup(symbol).map_err(|message| RollError::Symbol {
            path: path.clone(),
            symbol: symbol.clone(),
            message,
        })?;

        debug!(path = %path.display(), symbol = %symbol, "bound roll function");
        Ok(DynamicRoll { func, image })
    }
}

/// A roll function bound from an open image. The image is released when this is dropped.
pub struct DynamicRoll<I> {
    func: RollFn,
    image: I,
}

impl<I> RollFunction for DynamicRoll<I> {
    fn roll(&self, count: u8, sides: u8) -> u16 {
        // SAFETY: `func` came from `image`, which is still open for as long as `self` lives,
        // and its signature was asserted in `LibraryImage::lookup`.
        unsafe { (self.func)(count, sides) }
    }
}

impl<I: fmt::Debug> fmt::Debug for DynamicRoll<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicRoll")
            .field("image", &self.image)
            .finish_non_exhaustive()
    }
}
