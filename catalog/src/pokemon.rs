use crate::Resource;

use rand::Rng;
use serde::Deserialize;
use std::fmt;

/// A creature record, as served by `pokemon/{id}`.
///
/// Only the fields a card needs are kept; everything else in the payload is
/// ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    pub id: Id,
    pub name: String,
    pub stats: Vec<Stat>,
    pub sprites: Sprites,
    pub moves: Vec<Learnable>,
    pub types: Vec<Slot>,
}

impl Pokemon {
    pub fn hp(&self) -> Option<u32> {
        self.stats
            .iter()
            .find(|stat| stat.stat.name == "hp")
            .map(|stat| stat.base_stat)
    }

    /// The official artwork, or the default front sprite when there is none.
    pub fn sprite(&self) -> Option<&str> {
        self.sprites
            .other
            .official_artwork
            .front_default
            .as_deref()
            .or(self.sprites.front_default.as_deref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct Id(pub(crate) u32);

impl Id {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Draws an id uniformly from `1..=max`.
    pub fn random(rng: &mut impl Rng, max: u32) -> Self {
        Self(rng.random_range(1..=max.max(1)))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Stat {
    pub base_stat: u32,
    pub stat: Resource,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: OtherSprites,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Artwork,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Artwork {
    pub front_default: Option<String>,
}

/// A move the creature can learn.
#[derive(Debug, Clone, Deserialize)]
pub struct Learnable {
    #[serde(rename = "move")]
    pub reference: Resource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Slot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub ty: Resource,
}
