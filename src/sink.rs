//! Presentation sink: the one-way command surface toward the UI.
//!
//! The engine never touches a display directly. It emits commands through
//! this trait and the host renders them — a DOM, a terminal, a test recorder.
//! Commands are fire-and-forget; the sink reports nothing back.

use crate::catalog::{AssetRef, CategoryId};

/// One-way commands from the engine to the display layer.
pub trait PresentationSink {
    /// Display an asset on the image surface.
    fn show_image(&mut self, asset: &AssetRef);

    /// Set the message line. Empty string clears it.
    fn set_message(&mut self, text: &str);

    /// Show the option controls (one per category).
    fn show_options(&mut self);

    /// Hide the option controls.
    fn hide_options(&mut self);

    /// Enable or disable a single option control.
    fn set_option_enabled(&mut self, option: CategoryId, enabled: bool);

    /// Offer the start control with the given label.
    fn show_start_control(&mut self, label: &str);

    /// Hide the start control.
    fn hide_start_control(&mut self);

    /// Fire the celebration effect (confetti, sound — host's choice).
    fn celebrate(&mut self);
}

/// Sink that drops every command. For dry runs and benchmarks.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl PresentationSink for NullSink {
    fn show_image(&mut self, _asset: &AssetRef) {}
    fn set_message(&mut self, _text: &str) {}
    fn show_options(&mut self) {}
    fn hide_options(&mut self) {}
    fn set_option_enabled(&mut self, _option: CategoryId, _enabled: bool) {}
    fn show_start_control(&mut self, _label: &str) {}
    fn hide_start_control(&mut self) {}
    fn celebrate(&mut self) {}
}

/// A recorded sink command, for inspection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SinkCommand {
    ShowImage(String),
    SetMessage(String),
    ShowOptions,
    HideOptions,
    SetOptionEnabled(CategoryId, bool),
    ShowStartControl(String),
    HideStartControl,
    Celebrate,
}

/// Sink that records every command in order. Backs the test suites and is
/// handy for host-side debugging.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    /// Every command received, oldest first.
    pub commands: Vec<SinkCommand>,
}

impl RecordingSink {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths of every `ShowImage` command, in order.
    #[must_use]
    pub fn shown_images(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                SinkCommand::ShowImage(path) => Some(path.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of `Celebrate` commands received.
    #[must_use]
    pub fn celebrations(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, SinkCommand::Celebrate))
            .count()
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl PresentationSink for RecordingSink {
    fn show_image(&mut self, asset: &AssetRef) {
        self.commands.push(SinkCommand::ShowImage(asset.path.clone()));
    }

    fn set_message(&mut self, text: &str) {
        self.commands.push(SinkCommand::SetMessage(text.to_string()));
    }

    fn show_options(&mut self) {
        self.commands.push(SinkCommand::ShowOptions);
    }

    fn hide_options(&mut self) {
        self.commands.push(SinkCommand::HideOptions);
    }

    fn set_option_enabled(&mut self, option: CategoryId, enabled: bool) {
        self.commands.push(SinkCommand::SetOptionEnabled(option, enabled));
    }

    fn show_start_control(&mut self, label: &str) {
        self.commands.push(SinkCommand::ShowStartControl(label.to_string()));
    }

    fn hide_start_control(&mut self) {
        self.commands.push(SinkCommand::HideStartControl);
    }

    fn celebrate(&mut self) {
        self.commands.push(SinkCommand::Celebrate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_orders_commands() {
        let mut sink = RecordingSink::new();
        sink.set_message("hello");
        sink.celebrate();
        sink.hide_options();

        assert_eq!(
            sink.commands,
            vec![
                SinkCommand::SetMessage("hello".to_string()),
                SinkCommand::Celebrate,
                SinkCommand::HideOptions,
            ]
        );
        assert_eq!(sink.celebrations(), 1);
    }

    #[test]
    fn test_shown_images() {
        let mut sink = RecordingSink::new();
        let asset = AssetRef {
            category: CategoryId::new(0),
            file: "1.png".to_string(),
            path: "images/a/1.png".to_string(),
        };
        sink.show_image(&asset);
        sink.set_message("between");
        sink.show_image(&asset);

        assert_eq!(sink.shown_images(), vec!["images/a/1.png", "images/a/1.png"]);
    }

    #[test]
    fn test_null_sink_accepts_everything() {
        let mut sink = NullSink;
        sink.set_message("ignored");
        sink.celebrate();
    }
}
