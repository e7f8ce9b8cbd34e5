use serde::Deserialize;

/// A named link to another PokéAPI object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Resource {
    pub name: String,
    pub url: String,
}
