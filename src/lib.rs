use serde::{Deserialize, Deserializer, Serialize};

pub mod aggregate;
pub mod error;
pub mod geography;
pub mod input;
pub mod normalize;
pub mod profiles;
pub mod rank;
pub mod search;

pub use error::InputError;
pub use normalize::normalize_author_name;

/// Placeholder the export uses (and we substitute) for missing venue, topic and author names.
pub const UNKNOWN: &str = "Unknown";

/// Treats an explicit JSON `null` the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("openalex_authors=info")),
        )
        .try_init()
        .ok();
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamedEntity {
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrimaryLocation {
    #[serde(default)]
    pub source: Option<NamedEntity>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorInfo {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub orcid: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Authorship {
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: AuthorInfo,
    #[serde(default, deserialize_with = "null_as_default")]
    pub countries: Vec<Option<String>>,
}

impl Authorship {
    /// Raw display name as exported, before any normalization.
    pub fn author_name(&self) -> Option<&str> {
        self.author.display_name.as_deref()
    }

    /// Affiliation country codes, skipping empty and null entries.
    pub fn country_codes(&self) -> impl Iterator<Item = &str> {
        self.countries
            .iter()
            .filter_map(|code| code.as_deref())
            .filter(|code| !code.is_empty())
    }
}

/// One bibliographic record from an OpenAlex `works` export.
///
/// Only the fields the aggregation reads are modelled; everything else in the
/// export is ignored during deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub cited_by_count: u64,
    #[serde(default)]
    pub primary_location: Option<PrimaryLocation>,
    #[serde(default)]
    pub primary_topic: Option<NamedEntity>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub authorships: Vec<Authorship>,
}

impl WorkRecord {
    /// Venue of the primary location, or [`UNKNOWN`].
    pub fn venue_name(&self) -> &str {
        self.primary_location
            .as_ref()
            .and_then(|location| location.source.as_ref())
            .and_then(|source| source.display_name.as_deref())
            .unwrap_or(UNKNOWN)
    }

    /// Display name of the primary topic, or [`UNKNOWN`].
    pub fn topic_name(&self) -> &str {
        self.primary_topic
            .as_ref()
            .and_then(|topic| topic.display_name.as_deref())
            .unwrap_or(UNKNOWN)
    }
}
