use crate::catalog::Session;

use bytes::Bytes;
use std::fmt;
use std::io;
use tokio::task;

/// A decoded portrait, ready to be displayed.
#[derive(Clone)]
pub struct Sprite {
    pub width: u32,
    pub height: u32,
    pub rgba: Bytes,
}

impl Sprite {
    pub fn fetch(
        url: &str,
        session: &Session,
    ) -> impl Future<Output = Result<Sprite, anywho::Error>> + use<> {
        let url = url.to_owned();
        let session = session.clone();

        async move {
            let bytes = session.download(&url).await?;

            task::spawn_blocking(move || {
                let image = image::ImageReader::new(io::Cursor::new(bytes))
                    .with_guessed_format()?
                    .decode()?
                    .to_rgba8();

                Ok::<_, anywho::Error>(Sprite {
                    width: image.width(),
                    height: image.height(),
                    rgba: Bytes::from(image.into_raw()),
                })
            })
            .await?
        }
    }
}

impl fmt::Debug for Sprite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sprite")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("rgba", &self.rgba.len())
            .finish()
    }
}
