use serde::{Deserialize, Serialize};

/// The entry selected for a single calendar day, as served over the wire.
///
/// Request-scoped and never mutated: each request cycle fetches a fresh copy
/// and discards it after rendering. `day_of_year` is echoed by the provider
/// and defaults to zero when an upstream omits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub day_of_year: u32,
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub types: Vec<String>,
    pub normal_url: String,
    pub shiny_url: String,
}

/// Dataset-side record: an [`Entry`] without the ordinal, which the provider
/// fills in at serve time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonRecord {
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub types: Vec<String>,
    pub normal_url: String,
    pub shiny_url: String,
}

impl PokemonRecord {
    pub fn into_entry(self, day_of_year: u32) -> Entry {
        Entry {
            day_of_year,
            name: self.name,
            color: self.color,
            types: self.types,
            normal_url: self.normal_url,
            shiny_url: self.shiny_url,
        }
    }
}
