//! Turns a card's display tree into widgets.
use crate::card::{Background, Class, Content, Node};
use crate::catalog::ty;
use crate::icon;

use iced::font;
use iced::gradient;
use iced::widget::{canvas, center, column, container, image, row, text};
use iced::{Center, Color, ContentFit, Degrees, Element, Fill, Font, Length, Pixels, border};
use std::path::Path;

/// The portrait slot of a card, filled once its sprite is downloaded.
pub enum Portrait {
    Loading,
    Loaded(image::Handle),
    Errored,
}

pub fn card<'a, Message: 'a>(
    node: &'a Node,
    portrait: &'a Portrait,
    assets: &'a Path,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = match &node.content {
        Content::Row(_) => {
            row(node.children().iter().map(|child| card(child, portrait, assets)))
                .spacing(10)
                .align_y(Center)
                .into()
        }
        Content::Column(_) => {
            column(node.children().iter().map(|child| card(child, portrait, assets)))
                .spacing(if node.class == Class::Summary { 4 } else { 12 })
                .into()
        }
        Content::Text(content) => label(node.class, content),
        Content::Image(_url) => match portrait {
            Portrait::Loaded(handle) => image(handle)
                .width(Fill)
                .height(Fill)
                .content_fit(ContentFit::Contain)
                .into(),
            Portrait::Loading => center(pokeball(64)).into(),
            Portrait::Errored => center(text("?").size(48)).into(),
        },
        Content::Icon(ty) => icon::ty(ty, assets, 16),
    };

    let content = match node.class {
        Class::Card => container(content).padding(16).width(360),
        Class::Name | Class::Summary => container(content).width(Length::FillPortion(2)),
        Class::Hp | Class::Types => container(content).align_right(Length::FillPortion(1)),
        Class::Portrait => container(content).width(Fill).height(240).padding(10),
        Class::TypeIcon | Class::MoveType => container(content).padding(4),
        Class::Power => container(content).padding([0, 6]),
        Class::Credits => container(content).center_x(Fill),
        Class::Header | Class::Move | Class::Sprite | Class::MoveName | Class::Description => {
            container(content)
        }
    };

    let radius = if node.class == Class::Portrait { 8.0 } else { 12.0 };

    match node.background.as_ref().map(background) {
        Some(background) => content
            .style(move |_theme| container::Style {
                background: Some(background),
                text_color: Some(Color::BLACK),
                border: border::rounded(radius),
                ..container::Style::default()
            })
            .into(),
        None => content.into(),
    }
}

fn label<'a, Message: 'a>(class: Class, content: &'a str) -> Element<'a, Message> {
    let semibold = Font {
        weight: font::Weight::Semibold,
        ..Font::DEFAULT
    };

    match class {
        Class::Name => text(content).size(18).font(semibold).into(),
        Class::Hp => text(content).size(12).into(),
        Class::MoveName => text(content).size(14).font(semibold).into(),
        Class::Description => text(content).size(11).into(),
        Class::Power => text(content).size(20).font(semibold).into(),
        Class::Credits => text(content).size(10).into(),
        _ => text(content).into(),
    }
}

fn background(background: &Background) -> iced::Background {
    match background {
        Background::Solid(solid) => iced::Background::Color(color(*solid)),
        Background::Gradient(colors) => {
            let last = colors.len().saturating_sub(1).max(1) as f32;

            let linear = colors.iter().enumerate().fold(
                gradient::Linear::new(Degrees(90.0)),
                |linear, (i, stop)| linear.add_stop(i as f32 / last, color(*stop)),
            );

            iced::Background::Gradient(linear.into())
        }
    }
}

fn color(color: ty::Color) -> Color {
    Color::from_rgba8(color.r, color.g, color.b, f32::from(color.a) / 255.0)
}

pub fn pokeball<'a, Message: 'a>(size: impl Into<Pixels>) -> Element<'a, Message> {
    use iced::mouse;
    use iced::{Point, Rectangle, Renderer, Size, Theme};

    struct Pokeball;

    impl<Message> canvas::Program<Message> for Pokeball {
        type State = canvas::Cache;

        fn draw(
            &self,
            cache: &Self::State,
            renderer: &Renderer,
            _theme: &Theme,
            bounds: Rectangle,
            _cursor: mouse::Cursor,
        ) -> Vec<canvas::Geometry> {
            let pokeball = cache.draw(renderer, bounds.size(), |frame| {
                const RADIUS: f32 = 100.0;
                const LINE: f32 = 30.0;

                let ink = Color::BLACK.scale_alpha(0.6);
                let paper = Color::WHITE.scale_alpha(0.6);

                let center = Point::new(RADIUS, RADIUS);
                let outer_circle = canvas::Path::circle(center, RADIUS);
                let inner_circle = canvas::Path::circle(center, RADIUS / 2.0);
                let button = canvas::Path::circle(center, RADIUS / 4.0);

                let line = Rectangle::new(
                    Point::new(0.0, RADIUS - LINE / 2.0),
                    Size::new(2.0 * RADIUS, LINE),
                );

                let scale = (bounds.width - 0.5) / (2.0 * RADIUS);

                frame.scale(scale);

                frame.fill(&outer_circle, ink);
                frame.fill(&inner_circle, paper);
                frame.fill_rectangle(line.position(), line.size(), paper);
                frame.fill(&button, ink);
            });

            vec![pokeball]
        }
    }

    let size = size.into();

    canvas(Pokeball).width(size).height(size).into()
}
