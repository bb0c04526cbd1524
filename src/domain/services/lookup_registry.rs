//! Lookup registry
//!
//! Maps build names to their [`EntrypointLookup`]. Built once at startup;
//! the set of builds never changes afterwards.

use std::collections::BTreeMap;

use crate::domain::services::EntrypointLookup;
use crate::error::{EncoreError, EncoreResult};

#[derive(Debug, Default)]
pub struct LookupRegistry {
    lookups: BTreeMap<String, EntrypointLookup>,
    default_build: Option<String>,
}

impl LookupRegistry {
    pub fn new(lookups: BTreeMap<String, EntrypointLookup>, default_build: Option<String>) -> Self {
        Self {
            lookups,
            default_build,
        }
    }

    pub fn default_build(&self) -> Option<&str> {
        self.default_build.as_deref()
    }

    /// Registered build names, sorted.
    pub fn build_names(&self) -> Vec<String> {
        self.lookups.keys().cloned().collect()
    }

    pub fn get(&self, build: Option<&str>) -> EncoreResult<&EntrypointLookup> {
        let name = self.resolve(build)?;
        self.lookups
            .get(name)
            .ok_or_else(|| EncoreError::UnknownBuild {
                name: name.to_string(),
            })
    }

    pub fn get_mut(&mut self, build: Option<&str>) -> EncoreResult<&mut EntrypointLookup> {
        let name = self.resolve(build)?.to_string();
        self.lookups
            .get_mut(&name)
            .ok_or(EncoreError::UnknownBuild { name })
    }

    /// Reset the returned-files state of every build.
    pub fn reset_all(&mut self) {
        for lookup in self.lookups.values_mut() {
            lookup.reset();
        }
    }

    fn resolve<'a>(&'a self, build: Option<&'a str>) -> EncoreResult<&'a str> {
        build
            .or(self.default_build.as_deref())
            .ok_or(EncoreError::NoDefaultBuild)
    }
}
