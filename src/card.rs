//! The display tree of a card.
//!
//! A card is laid out as a column of four regions: a header with the name, hp
//! and types; a portrait; the summary of one move; and a credits line. The tree
//! is plain data, so it can be inspected without any display surface.
use crate::catalog::ViewModel;
use crate::catalog::ty::{Color, Type};

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// How much of the card background shows behind the portrait.
const PORTRAIT_FADE: f32 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub class: Class,
    pub background: Option<Background>,
    pub content: Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    Card,
    Header,
    Name,
    Hp,
    Types,
    TypeIcon,
    Portrait,
    Sprite,
    Move,
    MoveType,
    Summary,
    MoveName,
    Description,
    Power,
    Credits,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Row(Vec<Node>),
    Column(Vec<Node>),
    Text(String),
    /// An image, by URL.
    Image(String),
    Icon(&'static Type),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Background {
    Solid(Color),
    /// A left-to-right gradient across the colors, in order.
    Gradient(Vec<Color>),
}

impl Background {
    /// Solid for a single type, a gradient for more. `None` without types.
    pub fn of(types: &[&Type]) -> Option<Self> {
        match types {
            [] => None,
            [ty] => Some(Self::Solid(ty.color)),
            types => Some(Self::Gradient(types.iter().map(|ty| ty.color).collect())),
        }
    }

    #[cfg(test)]
    pub fn colors(&self) -> &[Color] {
        match self {
            Self::Solid(color) => std::slice::from_ref(color),
            Self::Gradient(colors) => colors,
        }
    }

    pub fn faded(&self, factor: f32) -> Self {
        match self {
            Self::Solid(color) => Self::Solid(color.scale_alpha(factor)),
            Self::Gradient(colors) => Self::Gradient(
                colors
                    .iter()
                    .map(|color| color.scale_alpha(factor))
                    .collect(),
            ),
        }
    }
}

/// CSS notation, e.g. `linear-gradient(to right, #7AC74C, #A33EA1)`.
impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solid(color) => write!(f, "{color}"),
            Self::Gradient(colors) => {
                f.write_str("linear-gradient(to right")?;

                for color in colors {
                    write!(f, ", {color}")?;
                }

                f.write_str(")")
            }
        }
    }
}

impl Node {
    fn new(class: Class, content: Content) -> Self {
        Self {
            class,
            background: None,
            content,
        }
    }

    fn row(class: Class, children: Vec<Node>) -> Self {
        Self::new(class, Content::Row(children))
    }

    fn column(class: Class, children: Vec<Node>) -> Self {
        Self::new(class, Content::Column(children))
    }

    fn text(class: Class, text: impl Into<String>) -> Self {
        Self::new(class, Content::Text(text.into()))
    }

    fn icon(class: Class, ty: &'static Type) -> Self {
        Self::new(class, Content::Icon(ty)).background(Some(Background::Solid(ty.color)))
    }

    fn background(self, background: Option<Background>) -> Self {
        Self { background, ..self }
    }

    pub fn children(&self) -> &[Node] {
        match &self.content {
            Content::Row(children) | Content::Column(children) => children,
            Content::Text(_) | Content::Image(_) | Content::Icon(_) => &[],
        }
    }

    /// The first node of the given class, searching depth-first.
    #[cfg(test)]
    pub fn find(&self, class: Class) -> Option<&Node> {
        if self.class == class {
            return Some(self);
        }

        self.children().iter().find_map(|child| child.find(class))
    }
}

pub fn render(model: &ViewModel, year: i32) -> Node {
    let background = Background::of(&model.types);

    let header = Node::row(
        Class::Header,
        vec![
            Node::text(
                Class::Name,
                format!("#{id} {name}", id = model.id, name = capitalize(&model.name)),
            ),
            Node::text(Class::Hp, format!("HP {}", model.hp)),
            Node::row(
                Class::Types,
                model
                    .types
                    .iter()
                    .map(|ty| Node::icon(Class::TypeIcon, *ty))
                    .collect(),
            ),
        ],
    );

    let portrait = Node::column(
        Class::Portrait,
        vec![Node::new(Class::Sprite, Content::Image(model.sprite.clone()))],
    )
    .background(
        background
            .as_ref()
            .map(|background| background.faded(PORTRAIT_FADE)),
    );

    let summary = {
        let mut lines = vec![Node::text(Class::MoveName, capitalize(&model.attack.name))];

        if let Some(description) = &model.attack.description {
            lines.push(Node::text(Class::Description, description.as_str()));
        }

        Node::column(Class::Summary, lines)
    };

    let attack = Node::row(
        Class::Move,
        vec![
            Node::icon(Class::MoveType, model.attack.ty),
            summary,
            Node::text(Class::Power, model.attack.power.to_string()),
        ],
    );

    Node::column(
        Class::Card,
        vec![
            header,
            portrait,
            attack,
            Node::text(Class::Credits, credits(year)),
        ],
    )
    .background(background)
}

pub fn credits(year: i32) -> String {
    format!("Data provided by PokéAPI © {year}")
}

/// Uppercases the first letter of every word.
pub fn capitalize(text: &str) -> String {
    let mut capitalized = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.chars() {
        if at_word_start {
            capitalized.extend(c.to_uppercase());
        } else {
            capitalized.push(c);
        }

        at_word_start = c.is_whitespace();
    }

    capitalized
}

pub fn current_year() -> i32 {
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() as i64)
        .unwrap_or_default();

    year_of(seconds.div_euclid(86_400))
}

/// The proleptic Gregorian year of a day counted from 1970-01-01.
///
/// Inverse of the days-from-civil algorithm: days are split into 400-year
/// eras, then into years of an era that starts on March 1st.
fn year_of(days: i64) -> i32 {
    let days = days + 719_468;
    let era = days.div_euclid(146_097);
    let day_of_era = days.rem_euclid(146_097);
    let year_of_era =
        (day_of_era - day_of_era / 1_460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let month = (5 * day_of_year + 2) / 153;

    // Years start in March here; January and February belong to the next one.
    (year_of_era + era * 400 + i64::from(month >= 10)) as i32
}
