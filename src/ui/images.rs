//! Background loading of card images.
//!
//! Each URL is fetched once on a worker thread, decoded and downscaled there,
//! and handed back to the UI thread over a channel where it is uploaded as an
//! egui texture. Failures are remembered so broken images are not retried.

use crate::constants::{MAX_IMAGE_BYTES, MAX_TEXTURE_EDGE};
use eframe::egui;
use std::collections::HashMap;
use std::io::Read;
use std::sync::mpsc::{channel, Receiver, Sender};

/// Reasons an image could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ImageLoadError {
    /// The HTTP request failed or returned an error status
    #[error("request failed: {0}")]
    Http(#[from] Box<ureq::Error>),
    /// Reading the response body failed
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
    /// The bytes are not a supported image
    #[error("decode failed: {0}")]
    Decode(#[from] image::ImageError),
}

/// Load state of one image URL.
pub enum ImageSlot {
    /// Fetch in flight
    Pending,
    /// Uploaded and ready to draw
    Ready(egui::TextureHandle),
    /// Fetch or decode failed; drawn as a placeholder
    Failed,
}

type LoadResult = (String, Result<egui::ColorImage, ImageLoadError>);

/// Texture cache keyed by image URL.
pub struct ImageCache {
    slots: HashMap<String, ImageSlot>,
    sender: Sender<LoadResult>,
    receiver: Receiver<LoadResult>,
}

impl Default for ImageCache {
    fn default() -> Self {
        let (sender, receiver) = channel();
        Self {
            slots: HashMap::new(),
            sender,
            receiver,
        }
    }
}

impl ImageCache {
    /// Returns the texture for `url` if it is ready, starting a fetch on first use.
    pub fn texture(&mut self, ctx: &egui::Context, url: &str) -> Option<&egui::TextureHandle> {
        if !self.slots.contains_key(url) {
            let slot = self.spawn_fetch(ctx, url);
            self.slots.insert(url.to_owned(), slot);
        }
        match self.slots.get(url) {
            Some(ImageSlot::Ready(texture)) => Some(texture),
            _ => None,
        }
    }

    /// Current state of `url`, if it was ever requested.
    pub fn slot(&self, url: &str) -> Option<&ImageSlot> {
        self.slots.get(url)
    }

    /// Uploads finished images and records failures. Call once per frame.
    pub fn poll(&mut self, ctx: &egui::Context) {
        while let Ok((url, result)) = self.receiver.try_recv() {
            let slot = match result {
                Ok(image) => {
                    log::debug!("Loaded image {url} ({}x{})", image.size[0], image.size[1]);
                    ImageSlot::Ready(ctx.load_texture(&url, image, egui::TextureOptions::LINEAR))
                }
                Err(err) => {
                    log::warn!("Failed to load image {url}: {err}");
                    ImageSlot::Failed
                }
            };
            self.slots.insert(url, slot);
        }
    }

    fn spawn_fetch(&self, ctx: &egui::Context, url: &str) -> ImageSlot {
        let sender = self.sender.clone();
        let ctx = ctx.clone();
        let owned_url = url.to_owned();
        let spawned = std::thread::Builder::new()
            .name("image-fetch".into())
            .spawn(move || {
                let result = fetch_image(&owned_url);
                // The receiver is gone once the app shut down; nothing to do then.
                if sender.send((owned_url, result)).is_ok() {
                    ctx.request_repaint();
                }
            });
        match spawned {
            Ok(_) => ImageSlot::Pending,
            Err(err) => {
                log::warn!("Could not start image fetch for {url}: {err}");
                ImageSlot::Failed
            }
        }
    }
}

/// Downloads and decodes the image at `url`.
pub fn fetch_image(url: &str) -> Result<egui::ColorImage, ImageLoadError> {
    let response = ureq::get(url)
        .set("User-Agent", "infinite-gallery")
        .call()
        .map_err(Box::new)?;
    let mut bytes = Vec::new();
    response
        .into_reader()
        .take(MAX_IMAGE_BYTES)
        .read_to_end(&mut bytes)?;
    decode_image(&bytes)
}

/// Decodes encoded image bytes, shrinking large images to [`MAX_TEXTURE_EDGE`].
pub fn decode_image(bytes: &[u8]) -> Result<egui::ColorImage, ImageLoadError> {
    let mut decoded = image::load_from_memory(bytes)?;
    if decoded.width() > MAX_TEXTURE_EDGE || decoded.height() > MAX_TEXTURE_EDGE {
        decoded = decoded.thumbnail(MAX_TEXTURE_EDGE, MAX_TEXTURE_EDGE);
    }
    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

/// Largest rectangle with the aspect ratio of `image_size` that fits in `bounds`, centered.
pub fn contain_rect(bounds: egui::Rect, image_size: egui::Vec2) -> egui::Rect {
    if image_size.x <= 0.0 || image_size.y <= 0.0 {
        return bounds;
    }
    let scale = (bounds.width() / image_size.x).min(bounds.height() / image_size.y);
    egui::Rect::from_center_size(bounds.center(), image_size * scale)
}
