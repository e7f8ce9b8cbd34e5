//! The two-step pipeline from a creature id to a [`ViewModel`].
use crate::error::Shape;
use crate::pokemon;
use crate::{Endpoint, Error, Move, Pokemon, Resource, Session, ViewModel};

use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Where creature and move records come from.
pub trait Source {
    /// The base URL move references are expected to live under.
    fn base_url(&self) -> &str;

    fn fetch_creature(&self, id: pokemon::Id)
    -> impl Future<Output = Result<Pokemon, Error>> + Send;

    fn fetch_move(&self, endpoint: &Endpoint) -> impl Future<Output = Result<Move, Error>> + Send;
}

/// Which of a creature's moves ends up on its card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    First,
    #[default]
    Random,
}

/// How much of the move is described on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Description {
    /// The English flavor text, which must exist.
    #[default]
    Flavor,
    /// No description at all.
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Policy {
    pub selection: Selection,
    pub description: Description,
}

#[derive(Debug, Clone)]
pub struct Resolver<S = Session> {
    source: S,
    policy: Policy,
}

impl<S: Source> Resolver<S> {
    pub fn new(source: S, policy: Policy) -> Self {
        Self { source, policy }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn fetch_creature(&self, id: pokemon::Id) -> Result<Pokemon, Error> {
        self.source.fetch_creature(id).await
    }

    pub async fn fetch_move(&self, endpoint: &Endpoint) -> Result<Move, Error> {
        self.source.fetch_move(endpoint).await
    }

    /// Picks one of the moves of `pokemon`, fetches it and builds the card model.
    pub async fn resolve<R: Rng>(
        &self,
        pokemon: &Pokemon,
        rng: &mut R,
    ) -> Result<ViewModel, Error> {
        let reference = select(pokemon, self.policy.selection, rng)?;
        let endpoint = Endpoint::from_url(&reference.url, self.source.base_url())?;

        log::debug!("{} uses {}", pokemon.name, reference.name);

        let attack = self.fetch_move(&endpoint).await?;

        ViewModel::new(pokemon, &attack, self.policy.description)
    }

    /// Fetches the creature with the given id, then resolves it.
    pub async fn card<R: Rng>(&self, id: pokemon::Id, rng: &mut R) -> Result<ViewModel, Error> {
        let pokemon = self.fetch_creature(id).await?;

        self.resolve(&pokemon, rng).await
    }
}

fn select<'a>(
    pokemon: &'a Pokemon,
    selection: Selection,
    rng: &mut impl Rng,
) -> Result<&'a Resource, Error> {
    if pokemon.moves.is_empty() {
        return Err(Shape::NoMoves {
            pokemon: pokemon.name.clone(),
        }
        .into());
    }

    let index = match selection {
        Selection::First => 0,
        Selection::Random => rng.random_range(0..pokemon.moves.len()),
    };

    Ok(&pokemon.moves[index].reference)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {setting}: {value}")]
pub struct ParseError {
    setting: &'static str,
    value: String,
}

impl FromStr for Selection {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(Self::First),
            "random" => Ok(Self::Random),
            _ => Err(ParseError {
                setting: "move selection",
                value: value.to_owned(),
            }),
        }
    }
}

impl FromStr for Description {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "flavor" => Ok(Self::Flavor),
            "plain" => Ok(Self::Plain),
            _ => Err(ParseError {
                setting: "description",
                value: value.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::First => "first",
            Self::Random => "random",
        })
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Flavor => "flavor",
            Self::Plain => "plain",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_parse_loosely() {
        assert_eq!(" First ".parse::<Selection>(), Ok(Selection::First));
        assert_eq!("random".parse::<Selection>(), Ok(Selection::Random));
        assert_eq!("PLAIN".parse::<Description>(), Ok(Description::Plain));
        assert!("sometimes".parse::<Selection>().is_err());
        assert_eq!(
            "rich".parse::<Description>().unwrap_err().to_string(),
            "unknown description: rich"
        );
    }

    #[test]
    fn defaults_are_random_and_flavored() {
        let policy = Policy::default();

        assert_eq!(policy.selection, Selection::Random);
        assert_eq!(policy.description, Description::Flavor);
    }
}
