//! Elemental types and the way they are drawn.
use crate::Map;

use std::fmt;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Type {
    pub name: &'static str,
    /// Path of the type's icon, relative to the assets directory.
    pub icon: &'static str,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_rgb(hex: u32) -> Self {
        Self {
            r: (hex >> 16) as u8,
            g: (hex >> 8) as u8,
            b: hex as u8,
            a: u8::MAX,
        }
    }

    pub fn scale_alpha(self, factor: f32) -> Self {
        Self {
            a: (self.a as f32 * factor.clamp(0.0, 1.0)).round() as u8,
            ..self
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;

        if self.a != u8::MAX {
            write!(f, "{:02X}", self.a)?;
        }

        Ok(())
    }
}

macro_rules! types {
    ($($name:literal => $color:literal),* $(,)?) => {
        [$(Type {
            name: $name,
            icon: concat!("img/", $name, ".svg"),
            color: Color::from_rgb($color),
        }),*]
    };
}

const TYPES: [Type; 18] = types! {
    "normal" => 0xA8A77A,
    "fire" => 0xEE8130,
    "water" => 0x6390F0,
    "electric" => 0xF7D02C,
    "grass" => 0x7AC74C,
    "ice" => 0x96D9D6,
    "fighting" => 0xC22E28,
    "poison" => 0xA33EA1,
    "ground" => 0xE2BF65,
    "flying" => 0xA98FF3,
    "psychic" => 0xF95587,
    "bug" => 0xA6B91A,
    "rock" => 0xB6A136,
    "ghost" => 0x735797,
    "dragon" => 0x6F35FC,
    "dark" => 0x705746,
    "steel" => 0xB7B7CE,
    "fairy" => 0xD685AD,
};

static CATALOG: LazyLock<Map<&'static str, Type>> =
    LazyLock::new(|| Map::new(TYPES.to_vec(), |ty| ty.name));

pub fn lookup(name: &str) -> Option<&'static Type> {
    CATALOG.get(name)
}

pub fn all() -> &'static [Type] {
    CATALOG.values()
}
