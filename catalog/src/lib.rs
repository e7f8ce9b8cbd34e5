pub mod error;
pub mod locale;
pub mod mov;
pub mod pokemon;
pub mod resolver;
pub mod resource;
pub mod session;
pub mod ty;
pub mod view;

mod map;

pub use error::Error;
pub use locale::Locale;
pub use map::Map;
pub use mov::Move;
pub use pokemon::Pokemon;
pub use resolver::{Policy, Resolver, Source};
pub use resource::Resource;
pub use session::{Endpoint, Session};
pub use ty::Type;
pub use view::ViewModel;
