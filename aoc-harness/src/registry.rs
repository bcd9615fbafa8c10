//! Puzzle registry for looking up modules by year and day

use crate::error::{LoadError, RegistrationError};
use crate::ident::{DAYS_PER_YEAR, FIRST_YEAR};
use crate::module::PuzzleModule;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Plugin information for automatic puzzle registration
///
/// Submitted through `inventory` by [`register_puzzle!`](crate::register_puzzle).
pub struct PuzzlePlugin {
    /// The puzzle year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// The module's functions
    pub module: PuzzleModule,
}

// Enable plugin collection via inventory
inventory::collect!(PuzzlePlugin);

/// Builder for constructing a [`PuzzleRegistry`]
///
/// Rejects duplicate and out-of-range registrations; the registry is immutable
/// once built.
pub struct RegistryBuilder {
    modules: BTreeMap<(u16, u8), PuzzleModule>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder
    pub fn new() -> Self {
        Self {
            modules: BTreeMap::new(),
        }
    }

    /// Register a module for a specific year and day
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the module registered, ready for chaining
    /// * `Err(RegistrationError)` - Duplicate or invalid year-day combination
    pub fn register(
        mut self,
        year: u16,
        day: u8,
        module: PuzzleModule,
    ) -> Result<Self, RegistrationError> {
        if year < FIRST_YEAR || day == 0 || day > DAYS_PER_YEAR {
            return Err(RegistrationError::InvalidYearDay(year, day));
        }
        if self.modules.contains_key(&(year, day)) {
            return Err(RegistrationError::DuplicatePuzzle(year, day));
        }
        self.modules.insert((year, day), module);
        Ok(self)
    }

    /// Register every module submitted via `inventory::submit!`
    pub fn register_all_plugins(mut self) -> Result<Self, RegistrationError> {
        for plugin in inventory::iter::<PuzzlePlugin>() {
            self = self.register(plugin.year, plugin.day, plugin.module)?;
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> PuzzleRegistry {
        debug!(modules = self.modules.len(), "built puzzle registry");
        PuzzleRegistry {
            modules: self.modules,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry of puzzle modules
pub struct PuzzleRegistry {
    modules: BTreeMap<(u16, u8), PuzzleModule>,
}

impl PuzzleRegistry {
    /// Look up a registered module
    pub fn get(&self, year: u16, day: u8) -> Option<&PuzzleModule> {
        self.modules.get(&(year, day))
    }

    /// Resolve a module, distinguishing absence from a module that exists on
    /// disk but cannot be loaded.
    ///
    /// # Returns
    /// * `Ok(Some(module))` - The module is registered
    /// * `Ok(None)` - No module is registered and no module file exists
    /// * `Err(LoadError)` - A module file exists but is not compiled in, or the
    ///   path could not be inspected
    pub fn load(
        &self,
        year: u16,
        day: u8,
        module_path: &Path,
    ) -> Result<Option<&PuzzleModule>, LoadError> {
        if let Some(module) = self.get(year, day) {
            debug!(year, day, "module found in registry");
            return Ok(Some(module));
        }

        match module_path.try_exists() {
            Ok(false) => Ok(None),
            Ok(true) => Err(LoadError::NotCompiled(module_path.to_path_buf())),
            Err(source) => Err(LoadError::Io {
                path: module_path.to_path_buf(),
                source,
            }),
        }
    }

    /// Registered year-day pairs in ascending order
    pub fn iter_ids(&self) -> impl Iterator<Item = (u16, u8)> + '_ {
        self.modules.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
