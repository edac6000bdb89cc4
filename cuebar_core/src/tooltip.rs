// Copyright 2026 the Cuebar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover tooltip state.
//!
//! One [`TooltipState`] exists per trigger element, created when the page is
//! bound. Hover cycles only flip visibility; they never create another node.

use alloc::string::String;

use crate::trace::{ActionEvent, ActionKind, ComponentId, Tracer};

/// Text and visibility of a single tooltip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TooltipState {
    id: ComponentId,
    text: String,
    visible: bool,
}

impl TooltipState {
    /// Creates a hidden tooltip showing `text`.
    pub fn new(id: ComponentId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            visible: false,
        }
    }

    /// Returns the instance id used in trace events.
    #[must_use]
    pub fn id(&self) -> ComponentId {
        self.id
    }

    /// Tooltip text, taken from the trigger's attribute.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns `true` between a pointer enter and the next leave.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Pointer entered the trigger. Returns the new visibility.
    pub fn enter(&mut self, tracer: &mut Tracer<'_>) -> bool {
        self.set_visible(true, tracer)
    }

    /// Pointer left the trigger. Returns the new visibility.
    pub fn leave(&mut self, tracer: &mut Tracer<'_>) -> bool {
        self.set_visible(false, tracer)
    }

    fn set_visible(&mut self, visible: bool, tracer: &mut Tracer<'_>) -> bool {
        if self.visible != visible {
            self.visible = visible;
            tracer.action(&ActionEvent {
                component: self.id,
                action: if visible {
                    ActionKind::ShowTooltip
                } else {
                    ActionKind::HideTooltip
                },
                media_time: 0.0,
                playback_rate: 0.0,
            });
        }
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::ComponentKind;

    #[test]
    fn visible_only_while_hovered() {
        let mut tip = TooltipState::new(
            ComponentId::new(ComponentKind::Tooltip, 0),
            "Frames per second",
        );
        let mut tracer = Tracer::none();
        assert!(!tip.is_visible());
        for _ in 0..3 {
            assert!(tip.enter(&mut tracer));
            assert!(tip.is_visible());
            assert!(!tip.leave(&mut tracer));
            assert!(!tip.is_visible());
        }
        assert_eq!(tip.text(), "Frames per second");
    }

    #[test]
    fn leave_without_enter_stays_hidden() {
        let mut tip = TooltipState::new(ComponentId::new(ComponentKind::Tooltip, 1), "");
        let mut tracer = Tracer::none();
        assert!(!tip.leave(&mut tracer));
    }
}
