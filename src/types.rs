use indexmap::IndexSet;
use serde::{Deserialize, Deserializer, Serialize};

use crate::extract;

/// A captured record of one command's help surface at a point in time.
///
/// Struct order is the wire order of the persisted JSON. `flags` keeps
/// first-seen order and is unique by construction; `subcommands` keeps
/// appearance order and may repeat when the source text does. On load,
/// unknown fields are ignored and absent or `null` fields come back empty
/// instead of failing; snapshot writers in the wild serialize empty
/// sequences as `null`. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default, deserialize_with = "null_to_default")]
    pub command: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub flags: IndexSet<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub subcommands: Vec<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub captured_at: String,
}

/// `null` deserializes as the empty value for the field's type.
fn null_to_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

impl Snapshot {
    /// Builds a snapshot of `command` from its captured help text. The
    /// timestamp is supplied by the caller so this stays a pure function
    /// of its inputs.
    pub fn from_help_text(command: &str, help_text: &str, captured_at: String) -> Self {
        Snapshot {
            command: command.to_string(),
            flags: extract::parse_flags(help_text),
            subcommands: extract::parse_subcommands(help_text),
            captured_at,
        }
    }
}
