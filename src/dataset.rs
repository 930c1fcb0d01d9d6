use std::{collections::HashMap, fs, path::Path};

use pokeday_core::{Entry, PokemonRecord};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("failed to read dataset file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("dataset is empty")]
    Empty,

    #[error("no entry for day {0}")]
    DayNotFound(u32),
}

/// In-memory day-of-year → record map, loaded once at provider startup.
///
/// The JSON file uses string-encoded day keys (`"1"` .. `"365"`). An empty
/// map is accepted at load time so the service can come up and report 503
/// per request, matching the provider's degraded-mode behavior.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: HashMap<u32, PokemonRecord>,
}

impl Dataset {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let display = path.as_ref().display().to_string();
        let raw = fs::read_to_string(path.as_ref()).map_err(|source| DatasetError::Io {
            path: display.clone(),
            source,
        })?;
        let records = serde_json::from_str(&raw).map_err(|source| DatasetError::Parse {
            path: display,
            source,
        })?;
        Ok(Self { records })
    }

    pub fn from_records(records: HashMap<u32, PokemonRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Resolves the record for `day_of_year`, echoing the ordinal into the
    /// returned entry.
    ///
    /// Leap-day fallback: the dataset covers 365 days, so day 366 without a
    /// dedicated record serves day 1 instead.
    pub fn entry_for_day(&self, day_of_year: u32) -> Result<Entry, DatasetError> {
        if self.records.is_empty() {
            return Err(DatasetError::Empty);
        }

        let day = if day_of_year == 366 && !self.records.contains_key(&366) {
            tracing::info!("leap day fallback: serving day 1");
            1
        } else {
            day_of_year
        };

        self.records
            .get(&day)
            .cloned()
            .map(|record| record.into_entry(day))
            .ok_or(DatasetError::DayNotFound(day))
    }
}
