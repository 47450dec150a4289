use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

mod tables;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Continent {
    Europe,
    Asia,
    Africa,
    #[serde(rename = "North America")]
    NorthAmerica,
    #[serde(rename = "South America")]
    SouthAmerica,
    Oceania,
    Unknown,
}

impl Continent {
    pub fn as_str(self) -> &'static str {
        match self {
            Continent::Europe => "Europe",
            Continent::Asia => "Asia",
            Continent::Africa => "Africa",
            Continent::NorthAmerica => "North America",
            Continent::SouthAmerica => "South America",
            Continent::Oceania => "Oceania",
            Continent::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static COUNTRY_NAMES: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| tables::COUNTRY_NAMES.iter().copied().collect());

static CONTINENTS: LazyLock<HashMap<&'static str, Continent>> = LazyLock::new(|| {
    [
        (Continent::Europe, tables::EUROPE),
        (Continent::Asia, tables::ASIA),
        (Continent::Africa, tables::AFRICA),
        (Continent::NorthAmerica, tables::NORTH_AMERICA),
        (Continent::SouthAmerica, tables::SOUTH_AMERICA),
        (Continent::Oceania, tables::OCEANIA),
    ]
    .into_iter()
    .flat_map(|(continent, codes)| codes.iter().map(move |code| (*code, continent)))
    .collect()
});

/// English country name for a two-letter code (case-insensitive).
///
/// Unknown codes come back unchanged; both "GB" and "UK" map to the United Kingdom.
pub fn country_name(code: &str) -> &str {
    match COUNTRY_NAMES.get(code.to_uppercase().as_str()) {
        Some(name) => *name,
        None => code,
    }
}

/// Continent bucket for a two-letter code (case-insensitive), [`Continent::Unknown`] if unlisted.
pub fn continent(code: &str) -> Continent {
    CONTINENTS
        .get(code.to_uppercase().as_str())
        .copied()
        .unwrap_or(Continent::Unknown)
}
