// Copyright 2025 the hdrdiff Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::selection::{Channel, ImageSlot};

/// A viewer action a host binds to a keyboard shortcut or toolbar button.
///
/// Zoom commands go to [`crate::ImageView::apply`], channel and image
/// commands to [`crate::ImageSelection::apply`]. [`ViewCommand::NormalizeDiff`]
/// needs the pixel data and is carried out by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewCommand {
    /// Zoom in one step about the viewport center.
    ZoomIn,
    /// Zoom out one step about the viewport center.
    ZoomOut,
    /// Fit the image back into the viewport.
    Reset,
    /// Show only this channel, or go back to full color if it is already shown.
    ViewChannel(Channel),
    /// Show the left image, the right image or the diff.
    ShowImage(ImageSlot),
    /// Pick a diff scale that spans the full display range.
    NormalizeDiff,
}

impl ViewCommand {
    /// Every command, in the order hosts usually list them.
    pub const ALL: [Self; 11] = [
        Self::ZoomIn,
        Self::ZoomOut,
        Self::Reset,
        Self::ViewChannel(Channel::Red),
        Self::ViewChannel(Channel::Green),
        Self::ViewChannel(Channel::Blue),
        Self::ViewChannel(Channel::Alpha),
        Self::ShowImage(ImageSlot::Left),
        Self::ShowImage(ImageSlot::Right),
        Self::ShowImage(ImageSlot::Diff),
        Self::NormalizeDiff,
    ];

    /// Short human-readable label, suitable for shortcut help text.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::ZoomIn => "Zoom In",
            Self::ZoomOut => "Zoom Out",
            Self::Reset => "Reset Zoom",
            Self::ViewChannel(_) => "Toggle Single-Channel View",
            Self::ShowImage(ImageSlot::Left) => "View Left Image",
            Self::ShowImage(ImageSlot::Right) => "View Right Image",
            Self::ShowImage(ImageSlot::Diff) => "View Diff",
            Self::NormalizeDiff => "Normalize Diff",
        }
    }

    /// Default key sequences, in the portable text form toolkits parse.
    #[must_use]
    pub fn default_keys(self) -> &'static [&'static str] {
        match self {
            Self::ZoomIn => &["Ctrl+=", "Ctrl++"],
            Self::ZoomOut => &["Ctrl+-"],
            Self::Reset => &["Ctrl+0"],
            Self::ViewChannel(Channel::Red) => &["R"],
            Self::ViewChannel(Channel::Green) => &["G"],
            Self::ViewChannel(Channel::Blue) => &["B"],
            Self::ViewChannel(Channel::Alpha) => &["A"],
            Self::ShowImage(ImageSlot::Left) => &["1"],
            Self::ShowImage(ImageSlot::Right) => &["2"],
            Self::ShowImage(ImageSlot::Diff) => &["3"],
            Self::NormalizeDiff => &["N"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ViewCommand;
    use crate::Channel;

    #[test]
    fn channel_keys_match_letters() {
        for channel in Channel::ALL {
            let keys = ViewCommand::ViewChannel(channel).default_keys();
            assert_eq!(keys.len(), 1);
            assert!(keys[0].starts_with(channel.letter()));
        }
    }

    #[test]
    fn every_command_has_a_key() {
        for command in ViewCommand::ALL {
            assert!(!command.default_keys().is_empty(), "{command:?}");
        }
    }
}
