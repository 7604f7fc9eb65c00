//! Directory-backed JSON route store.
//!
//! One pretty-printed `{key}.json` file per route.  Writes land in a
//! temporary sibling file first and are renamed into place, so a record is
//! visible only in full; a crash mid-write leaves no half-written fixture
//! under the final name.

use std::path::{Path, PathBuf};

use rg_synth::Route;

use crate::sink::RouteSink;
use crate::StoreResult;

/// File-per-record store rooted at one directory.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open the store, creating `dir` (and parents) if missing.
    pub fn new(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The file backing a given key.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Load a stored record back.
    pub fn read(&self, key: &str) -> StoreResult<Route> {
        let file = std::fs::File::open(self.path_for(key))?;
        let route = serde_json::from_reader(std::io::BufReader::new(file))?;
        Ok(route)
    }

    #[inline]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl RouteSink for JsonFileStore {
    fn contains(&self, key: &str) -> bool {
        self.path_for(key).exists()
    }

    fn write(&mut self, key: &str, route: &Route) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(route)?;

        let tmp = self.dir.join(format!("{key}.json.tmp"));
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, self.path_for(key))?;
        Ok(())
    }
}
