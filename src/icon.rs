use crate::catalog::Type;

use iced::widget::{svg, text};
use iced::{Element, Pixels};
use std::path::Path;

/// The icon of a type, looked up in the assets directory.
///
/// Falls back to the type's initial when the icon is not installed.
pub fn ty<'a, Message: 'a>(
    ty: &Type,
    assets: &Path,
    size: impl Into<Pixels>,
) -> Element<'a, Message> {
    let size = size.into();
    let path = assets.join(ty.icon);

    if path.is_file() {
        svg(svg::Handle::from_path(path))
            .width(size)
            .height(size)
            .into()
    } else {
        let initial: String = ty.name.chars().take(1).flat_map(char::to_uppercase).collect();

        text(initial)
            .size(size.0 * 0.75)
            .width(size)
            .height(size)
            .center()
            .into()
    }
}
