//! The flat, render-ready projection of a creature and one of its moves.
use crate::error::Shape;
use crate::pokemon;
use crate::resolver::Description;
use crate::ty::{self, Type};
use crate::{Error, Move, Pokemon};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub id: pokemon::Id,
    pub name: String,
    pub hp: u32,
    pub sprite: String,
    pub attack: Attack,
    pub types: Vec<&'static Type>,
}

/// The move summary shown at the bottom of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attack {
    /// Display name, with hyphens turned into spaces.
    pub name: String,
    pub ty: &'static Type,
    pub power: u32,
    pub description: Option<String>,
}

impl ViewModel {
    pub fn new(pokemon: &Pokemon, attack: &Move, description: Description) -> Result<Self, Error> {
        let hp = pokemon.hp().ok_or_else(|| Shape::NoHp {
            pokemon: pokemon.name.clone(),
        })?;

        let sprite = pokemon
            .sprite()
            .ok_or_else(|| Shape::NoSprite {
                pokemon: pokemon.name.clone(),
            })?
            .to_owned();

        if pokemon.types.is_empty() {
            return Err(Shape::NoTypes {
                pokemon: pokemon.name.clone(),
            }
            .into());
        }

        let types = pokemon
            .types
            .iter()
            .map(|slot| lookup(&slot.ty.name))
            .collect::<Result<Vec<_>, _>>()?;

        let description = match description {
            Description::Flavor => Some(attack.description().ok_or_else(|| {
                Shape::NoEnglishText {
                    name: attack.name.clone(),
                }
            })?),
            Description::Plain => None,
        };

        Ok(Self {
            id: pokemon.id,
            name: pokemon.name.clone(),
            hp,
            sprite,
            attack: Attack {
                name: attack.display_name(),
                ty: lookup(&attack.ty.name)?,
                power: attack.power(),
                description,
            },
            types,
        })
    }
}

fn lookup(name: &str) -> Result<&'static Type, Error> {
    ty::lookup(name).ok_or_else(|| Shape::UnknownType(name.to_owned()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Kind;

    use pretty_assertions::assert_eq;

    fn pokemon(types: &[&str]) -> Pokemon {
        let types: Vec<_> = types
            .iter()
            .enumerate()
            .map(|(i, name)| {
                serde_json::json!({
                    "slot": i + 1,
                    "type": { "name": name, "url": "" }
                })
            })
            .collect();

        serde_json::from_value(serde_json::json!({
            "id": 6,
            "name": "charizard",
            "stats": [{ "base_stat": 78, "stat": { "name": "hp", "url": "" } }],
            "sprites": { "front_default": "https://example.com/6.png" },
            "moves": [],
            "types": types,
        }))
        .unwrap()
    }

    fn attack(ty: &str, english: bool) -> Move {
        let language = if english { "en" } else { "ja" };

        serde_json::from_value(serde_json::json!({
            "name": "fire-spin",
            "power": 35,
            "type": { "name": ty, "url": "" },
            "flavor_text_entries": [
                {
                    "flavor_text": "Traps the foe\nin fire.",
                    "language": { "name": language, "url": "" },
                }
            ],
        }))
        .unwrap()
    }

    #[test]
    fn builds_a_flat_model() {
        let model = ViewModel::new(
            &pokemon(&["fire", "flying"]),
            &attack("fire", true),
            Description::Flavor,
        )
        .unwrap();

        assert_eq!(
            model,
            ViewModel {
                id: pokemon::Id::new(6),
                name: "charizard".to_owned(),
                hp: 78,
                sprite: "https://example.com/6.png".to_owned(),
                attack: Attack {
                    name: "fire spin".to_owned(),
                    ty: ty::lookup("fire").unwrap(),
                    power: 35,
                    description: Some("Traps the foe in fire.".to_owned()),
                },
                types: vec![ty::lookup("fire").unwrap(), ty::lookup("flying").unwrap()],
            }
        );
    }

    #[test]
    fn flavor_requires_english_text() {
        let error = ViewModel::new(&pokemon(&["fire"]), &attack("fire", false), Description::Flavor)
            .unwrap_err();

        assert_eq!(error.kind(), Kind::UnexpectedShape);
        assert!(matches!(
            error,
            Error::UnexpectedShape(Shape::NoEnglishText { ref name }) if name == "fire-spin"
        ));
    }

    #[test]
    fn plain_descriptions_skip_flavor_text() {
        let model = ViewModel::new(&pokemon(&["fire"]), &attack("fire", false), Description::Plain)
            .unwrap();

        assert_eq!(model.attack.description, None);
    }

    #[test]
    fn unknown_types_are_rejected() {
        let error = ViewModel::new(
            &pokemon(&["shadow"]),
            &attack("fire", true),
            Description::Flavor,
        )
        .unwrap_err();

        assert!(matches!(
            error,
            Error::UnexpectedShape(Shape::UnknownType(ref name)) if name == "shadow"
        ));

        let error = ViewModel::new(&pokemon(&["fire"]), &attack("???", true), Description::Flavor)
            .unwrap_err();

        assert!(matches!(error, Error::UnexpectedShape(Shape::UnknownType(_))));
    }

    #[test]
    fn creatures_need_a_type() {
        let error = ViewModel::new(&pokemon(&[]), &attack("fire", true), Description::Flavor)
            .unwrap_err();

        assert!(matches!(error, Error::UnexpectedShape(Shape::NoTypes { .. })));
    }
}
