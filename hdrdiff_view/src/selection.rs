// Copyright 2025 the hdrdiff Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Which image is on screen, and whether a single channel is isolated.
//!
//! The viewer shows one of the left image, the right image, or their
//! difference. Any of them can be narrowed to one channel, displayed as
//! grayscale. Pressing the key of the channel already shown goes back to the
//! full-color view.
//!
//! ```
//! use hdrdiff_view::{Channel, ImageSelection, ImageSlot};
//!
//! let mut selection = ImageSelection::new(true);
//! assert_eq!(selection.view_channel(Channel::Green), Some(Channel::Green));
//! assert_eq!(selection.view_channel(Channel::Green), None);
//! assert!(selection.select_image(ImageSlot::Diff));
//! ```

use crate::command::ViewCommand;

/// One channel of an RGBA image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red.
    Red,
    /// Green.
    Green,
    /// Blue.
    Blue,
    /// Alpha.
    Alpha,
}

impl Channel {
    /// Every channel, in shortcut order.
    pub const ALL: [Self; 4] = [Self::Red, Self::Green, Self::Blue, Self::Alpha];

    /// Index of the channel in a BGRA-packed pixel, the layout image decoders
    /// usually hand back.
    #[must_use]
    pub fn bgra_index(self) -> usize {
        match self {
            Self::Blue => 0,
            Self::Green => 1,
            Self::Red => 2,
            Self::Alpha => 3,
        }
    }

    /// Single-letter name, also the default shortcut key.
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::Alpha => 'A',
        }
    }
}

/// An image the viewer can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ImageSlot {
    /// The first input image.
    #[default]
    Left,
    /// The second input image.
    Right,
    /// The difference of the two inputs.
    Diff,
}

/// Displayed image and isolated channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSelection {
    has_pair: bool,
    image: ImageSlot,
    channel: Option<Channel>,
}

impl ImageSelection {
    /// Starts on the left image in full color.
    ///
    /// `has_pair` is `false` when the viewer was opened on a single image;
    /// the right image and the diff are then unavailable.
    #[must_use]
    pub fn new(has_pair: bool) -> Self {
        Self {
            has_pair,
            image: ImageSlot::Left,
            channel: None,
        }
    }

    /// Whether a second image was loaded.
    #[must_use]
    pub fn has_pair(&self) -> bool {
        self.has_pair
    }

    /// The image on screen.
    #[must_use]
    pub fn image(&self) -> ImageSlot {
        self.image
    }

    /// The isolated channel, or `None` for full color.
    #[must_use]
    pub fn channel(&self) -> Option<Channel> {
        self.channel
    }

    /// Toggles single-channel display of `channel`.
    ///
    /// Selecting the channel already shown returns to full color. Returns the
    /// channel now shown.
    pub fn view_channel(&mut self, channel: Channel) -> Option<Channel> {
        self.channel = if self.channel == Some(channel) {
            None
        } else {
            Some(channel)
        };
        self.channel
    }

    /// Shows `image`, keeping the channel selection.
    ///
    /// Returns `false` and changes nothing if `image` needs a second input
    /// that was not loaded.
    pub fn select_image(&mut self, image: ImageSlot) -> bool {
        if image != ImageSlot::Left && !self.has_pair {
            return false;
        }
        self.image = image;
        true
    }

    /// Runs the channel and image commands.
    ///
    /// Returns `true` if the selection changed. Other commands are left to
    /// [`crate::ImageView::apply`] or the host.
    pub fn apply(&mut self, command: ViewCommand) -> bool {
        match command {
            ViewCommand::ViewChannel(channel) => {
                self.view_channel(channel);
                true
            }
            ViewCommand::ShowImage(image) => {
                let before = self.image;
                self.select_image(image) && before != image
            }
            ViewCommand::ZoomIn
            | ViewCommand::ZoomOut
            | ViewCommand::Reset
            | ViewCommand::NormalizeDiff => false,
        }
    }
}

impl Default for ImageSelection {
    fn default() -> Self {
        Self::new(false)
    }
}
