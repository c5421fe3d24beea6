/// Gallery grid for uploaded photos
///
/// One cell per photo, in the exact order the server returned the list.
/// A cell shows the downloaded image once it is cached, and a named
/// placeholder until then (or forever, if the download failed).

use iced::widget::{container, image, text};
use iced::{ContentFit, Element};
use iced_aw::Wrap;
use std::collections::HashMap;

use crate::state::data::Photo;
use crate::Message;

/// Width of a grid cell in logical pixels
const CELL_WIDTH: f32 = 180.0;
/// Height of a grid cell in logical pixels
const CELL_HEIGHT: f32 = 140.0;

/// Build the photo grid
///
/// `thumbnails` is keyed by photo id; photos without a cached image get a
/// placeholder cell, so the grid shape always matches the list.
pub fn photo_grid<'a>(
    photos: &'a [Photo],
    thumbnails: &HashMap<String, image::Handle>,
) -> Element<'a, Message> {
    let cells: Vec<Element<'a, Message>> = photos
        .iter()
        .map(|photo| match thumbnails.get(&photo.id) {
            Some(handle) => image(handle.clone())
                .width(CELL_WIDTH)
                .height(CELL_HEIGHT)
                .content_fit(ContentFit::Cover)
                .into(),
            None => container(text(photo.name.as_str()).size(14))
                .center_x(CELL_WIDTH)
                .center_y(CELL_HEIGHT)
                .into(),
        })
        .collect();

    Wrap::with_elements(cells)
        .spacing(10.0)
        .line_spacing(10.0)
        .into()
}
