//! Moves, the actions a creature can take in battle.
use crate::Resource;
use crate::locale::{self, Text};

use serde::Deserialize;

/// A move record, as served by `move/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Move {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Resource,
    /// Base power; status moves have none.
    pub power: Option<u32>,
    #[serde(default)]
    pub flavor_text_entries: Vec<Text>,
}

impl Move {
    pub fn power(&self) -> u32 {
        self.power.unwrap_or(0)
    }

    pub fn display_name(&self) -> String {
        display_name(&self.name)
    }

    /// The English flavor text, with the in-game line breaks removed.
    pub fn description(&self) -> Option<String> {
        locale::english(&self.flavor_text_entries).map(locale::normalize)
    }
}

/// Turns an API name like `razor-wind` into `razor wind`.
pub fn display_name(name: &str) -> String {
    name.replace('-', " ")
}
