use crate::error::Shape;
use crate::pokemon;
use crate::resolver::Source;
use crate::{Error, Move, Pokemon};

use bytes::Bytes;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::{Arc, LazyLock};

pub const POKEAPI_URL: &str = "https://pokeapi.co/api/v2";

static CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::ClientBuilder::new()
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()
        .expect("Build reqwest client")
});

/// A read-only session against a PokéAPI instance.
#[derive(Debug, Clone)]
pub struct Session {
    client: reqwest::Client,
    base_url: String,
}

impl Session {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();

        log::info!("PokéAPI session started ({base_url})");

        Self {
            client: CLIENT.clone(),
            base_url,
        }
    }

    /// Downloads an arbitrary asset, like a sprite, that lives outside the API.
    pub async fn download(&self, url: &str) -> Result<Bytes, Error> {
        log::info!("Downloading: {url}");

        let response = self.client.get(url).send().await?;

        Ok(response.error_for_status()?.bytes().await?)
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, Error> {
        let url = format!("{}/{endpoint}", self.base_url);

        log::info!("Fetching: {url}");

        let response = self.client.get(&url).send().await?;
        let bytes = response.error_for_status()?.bytes().await?;

        decode(endpoint.as_str(), &bytes)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(POKEAPI_URL)
    }
}

impl Source for Session {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn fetch_creature(
        &self,
        id: pokemon::Id,
    ) -> impl Future<Output = Result<Pokemon, Error>> + Send {
        self.get(Endpoint::creature(id))
    }

    fn fetch_move(&self, endpoint: &Endpoint) -> impl Future<Output = Result<Move, Error>> + Send {
        self.get(endpoint.clone())
    }
}

/// Decodes a payload, turning schema violations into [`Shape::Malformed`].
pub fn decode<T: DeserializeOwned>(resource: &str, bytes: &[u8]) -> Result<T, Error> {
    serde_json::from_slice(bytes).map_err(|error| {
        Error::from(Shape::Malformed {
            resource: resource.to_owned(),
            error: Arc::new(error),
        })
    })
}

/// A resource path below the API base URL, like `move/13/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint(String);

impl Endpoint {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into().trim_start_matches('/').to_owned())
    }

    pub fn creature(id: pokemon::Id) -> Self {
        Self(format!("pokemon/{id}"))
    }

    /// Strips `base_url` off an absolute resource URL.
    pub fn from_url(url: &str, base_url: &str) -> Result<Self, Error> {
        url.strip_prefix(base_url.trim_end_matches('/'))
            .and_then(|path| path.strip_prefix('/'))
            .map(Self::new)
            .ok_or_else(|| Error::ApiMismatch {
                expected_base: base_url.to_owned(),
                actual_url: url.to_owned(),
            })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
