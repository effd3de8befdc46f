//! In-memory library loader
//!
//! Hands out images that export a chosen `extern "C"` stand-in for `roll`, and counts
//! every open, lookup and release so tests can check the handle lifecycle.

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use roll_cli::{ImageLoader, LibraryImage, RollFn};

/// Always returns 11
pub unsafe extern "C" fn roll_eleven(_count: u8, _sides: u8) -> u16 {
    11
}

/// Always returns the failure sentinel
pub unsafe extern "C" fn roll_sentinel(_count: u8, _sides: u8) -> u16 {
    0
}

/// Deterministic: every die shows its highest face
pub unsafe extern "C" fn roll_max(count: u8, sides: u8) -> u16 {
    u16::from(count) * u16::from(sides)
}

/// Shared counters for one loader and all images it opened
#[derive(Debug, Default)]
pub struct LoaderStats {
    pub opens: Cell<u32>,
    pub lookups: Cell<u32>,
    pub releases: Cell<u32>,
    pub last_path: RefCell<Option<PathBuf>>,
}

impl LoaderStats {
    fn bump(counter: &Cell<u32>) {
        counter.set(counter.get() + 1);
    }
}

#[derive(Debug, Clone, Copy)]
enum Behavior {
    Missing,
    NoSymbol,
    Exports(RollFn),
}

/// Loader whose images behave as configured
#[derive(Debug, Clone)]
pub struct MockLoader {
    behavior: Behavior,
    stats: Rc<LoaderStats>,
}

impl MockLoader {
    /// Opening fails as if the file did not exist
    pub fn missing() -> Self {
        Self::with(Behavior::Missing)
    }

    /// Opens, but exports nothing
    pub fn without_symbol() -> Self {
        Self::with(Behavior::NoSymbol)
    }

    /// Opens and exports `func` under any name
    pub fn exporting(func: RollFn) -> Self {
        Self::with(Behavior::Exports(func))
    }

    fn with(behavior: Behavior) -> Self {
        Self {
            behavior,
            stats: Rc::new(LoaderStats::default()),
        }
    }

    pub fn stats(&self) -> Rc<LoaderStats> {
        Rc::clone(&self.stats)
    }
}

impl ImageLoader for MockLoader {
    type Image = MockImage;

    fn open(&self, path: &Path) -> Result<MockImage, String> {
        *self.stats.last_path.borrow_mut() = Some(path.to_path_buf());

        if let Behavior::Missing = self.behavior {
            return Err(format!("{}: cannot open shared object file", path.display()));
        }

        LoaderStats::bump(&self.stats.opens);
        Ok(MockImage {
            behavior: self.behavior,
            stats: Rc::clone(&self.stats),
        })
    }
}

/// Image handed out by [`MockLoader`]
#[derive(Debug)]
pub struct MockImage {
    behavior: Behavior,
    stats: Rc<LoaderStats>,
}

impl LibraryImage for MockImage {
    fn lookup(&self, symbol: &str) -> Result<RollFn, String> {
        LoaderStats::bump(&self.stats.lookups);
        match self.behavior {
            Behavior::Exports(func) => Ok(func),
            _ => Err(format!("undefined symbol: {symbol}")),
        }
    }
}

impl Drop for MockImage {
    fn drop(&mut self) {
        LoaderStats::bump(&self.stats.releases);
    }
}
