use pokecard_catalog as catalog;

mod card;
mod config;
mod icon;
mod sprite;
mod widget;

use crate::card::Node;
use crate::catalog::pokemon;
use crate::catalog::{Resolver, Session, ViewModel};
use crate::config::Config;
use crate::sprite::Sprite;
use crate::widget::Portrait;

use iced::widget::{center, column, image};
use iced::{Element, Task};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// The container every card is attached to.
const MOUNT: &str = "card-container";

pub fn main() -> iced::Result {
    tracing_subscriber::fmt::init();

    iced::application(Pokecard::new, Pokecard::update, Pokecard::view)
        .window_size((420.0, 680.0))
        .run()
}

struct Pokecard {
    config: Config,
    session: Session,
    state: State,
}

enum State {
    Loading,
    Ready { card: Node, portrait: Portrait },
    Failed,
}

#[derive(Debug, Clone)]
enum Message {
    Resolved(Result<ViewModel, catalog::Error>),
    SpriteFetched(Result<Sprite, anywho::Error>),
}

impl Pokecard {
    fn new() -> (Self, Task<Message>) {
        let config = Config::from_env();
        let session = Session::new(config.api_url.as_str());
        let resolver = Resolver::new(session.clone(), config.policy);

        let mut rng = config
            .seed
            .map(StdRng::seed_from_u64)
            .unwrap_or_else(StdRng::from_os_rng);

        let id = pokemon::Id::random(&mut rng, config.max_id);

        log::info!(
            "Drawing #{id} ({selection} move, {description} description)",
            selection = config.policy.selection,
            description = config.policy.description,
        );

        (
            Self {
                config,
                session,
                state: State::Loading,
            },
            Task::perform(
                async move { resolver.card(id, &mut rng).await },
                Message::Resolved,
            ),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Resolved(Ok(model)) => {
                log::info!(
                    "Resolved #{id} {name} with {attack}",
                    id = model.id,
                    name = model.name,
                    attack = model.attack.name
                );

                self.state = State::Ready {
                    card: card::render(&model, card::current_year()),
                    portrait: Portrait::Loading,
                };

                Task::perform(
                    Sprite::fetch(&model.sprite, &self.session),
                    Message::SpriteFetched,
                )
            }
            Message::Resolved(Err(error)) => {
                log::error!("{error}");

                self.state = State::Failed;

                Task::none()
            }
            Message::SpriteFetched(result) => {
                let State::Ready { portrait, .. } = &mut self.state else {
                    return Task::none();
                };

                *portrait = match result {
                    Ok(sprite) => Portrait::Loaded(image::Handle::from_rgba(
                        sprite.width,
                        sprite.height,
                        sprite.rgba,
                    )),
                    Err(error) => {
                        log::error!("{error}");

                        Portrait::Errored
                    }
                };

                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        // Nothing is attached until a card resolves; failures leave it empty.
        let card = match &self.state {
            State::Loading | State::Failed => None,
            State::Ready { card, portrait } => {
                Some(widget::card(card, portrait, &self.config.assets))
            }
        };

        center(column(card)).id(MOUNT).into()
    }
}
