use crate::catalog::Policy;
use crate::catalog::session::POKEAPI_URL;

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

const API_URL: &str = "POKECARD_API_URL";
const MAX_ID: &str = "POKECARD_MAX_ID";
const MOVE_SELECTION: &str = "POKECARD_MOVE_SELECTION";
const DESCRIPTION: &str = "POKECARD_DESCRIPTION";
const SEED: &str = "POKECARD_SEED";
const ASSETS: &str = "POKECARD_ASSETS";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    /// Cards are drawn from ids `1..=max_id`.
    pub max_id: u32,
    pub policy: Policy,
    pub seed: Option<u64>,
    /// Where the `img/<type>.svg` icons live.
    pub assets: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();

        Self {
            api_url: var(API_URL)
                .filter(|url| !url.trim().is_empty())
                .unwrap_or(default.api_url),
            max_id: parse(&var, MAX_ID)
                .filter(|max_id| *max_id > 0)
                .unwrap_or(default.max_id),
            policy: Policy {
                selection: parse(&var, MOVE_SELECTION).unwrap_or(default.policy.selection),
                description: parse(&var, DESCRIPTION).unwrap_or(default.policy.description),
            },
            seed: parse(&var, SEED),
            assets: var(ASSETS).map(PathBuf::from).unwrap_or(default.assets),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: POKEAPI_URL.to_owned(),
            max_id: 151,
            policy: Policy::default(),
            seed: None,
            assets: PathBuf::from("assets"),
        }
    }
}

fn parse<T>(var: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let value = var(key)?;

    match value.trim().parse() {
        Ok(value) => Some(value),
        Err(error) => {
            log::warn!("Ignoring {key}={value:?}: {error}");

            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::resolver::{Description, Selection};

    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<_, _> = vars.iter().copied().collect();

        Config::from_vars(|key| vars.get(key).map(|value| value.to_string()))
    }

    #[test]
    fn defaults_match_the_first_generation() {
        let config = config(&[]);

        assert_eq!(config, Config::default());
        assert_eq!(config.api_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.max_id, 151);
        assert_eq!(config.policy.selection, Selection::Random);
        assert_eq!(config.policy.description, Description::Flavor);
    }

    #[test]
    fn variables_override_defaults() {
        let config = config(&[
            (API_URL, "http://localhost:8000/api/v2"),
            (MAX_ID, "386"),
            (MOVE_SELECTION, "first"),
            (DESCRIPTION, "plain"),
            (SEED, "42"),
            (ASSETS, "/usr/share/pokecard"),
        ]);

        assert_eq!(
            config,
            Config {
                api_url: "http://localhost:8000/api/v2".to_owned(),
                max_id: 386,
                policy: Policy {
                    selection: Selection::First,
                    description: Description::Plain,
                },
                seed: Some(42),
                assets: PathBuf::from("/usr/share/pokecard"),
            }
        );
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = config(&[
            (API_URL, " "),
            (MAX_ID, "0"),
            (MOVE_SELECTION, "best"),
            (SEED, "-1"),
        ]);

        assert_eq!(config, Config::default());
    }
}
