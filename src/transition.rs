//! Open/close transition of the detail view.
//!
//! The detail card grows out of the clicked tile and shrinks back into it.
//! Timed phase changes are polled with the frame clock through [`DetailTransition::tick`]
//! rather than fired from detached timers, so cancelling is just a state change.

use crate::constants::*;
use crate::easing::CARD_EASING;
use crate::types::*;

/// Named phases of the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailPhase {
    /// Nothing selected
    Closed,
    /// Card rendered at its start transform, waiting to animate in
    Opening,
    /// Card animating to (or resting at) the centered identity transform
    Open,
    /// Card animating back toward its start transform before disposal
    Closing,
}

/// Transform of the detail card relative to its centered, full-size layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    /// Horizontal offset from the viewport center
    pub x: f32,
    /// Vertical offset from the viewport center
    pub y: f32,
    /// Uniform scale
    pub scale: f32,
    /// Opacity in `0..=1`
    pub opacity: f32,
}

impl CardTransform {
    /// Centered at full size and fully opaque.
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        opacity: 1.0,
    };

    /// The collapsed transform at the clicked tile.
    pub fn collapsed(styles: &InitialStyles) -> Self {
        Self {
            x: styles.x,
            y: styles.y,
            scale: styles.scale,
            opacity: 0.0,
        }
    }

    /// Interpolates between the collapsed transform (`amount = 0`) and identity (`amount = 1`).
    pub fn between(styles: &InitialStyles, amount: f32) -> Self {
        if amount >= 1.0 {
            return Self::IDENTITY;
        }
        let collapsed = Self::collapsed(styles);
        let lerp = |a: f32, b: f32| a + (b - a) * amount;
        Self {
            x: lerp(collapsed.x, Self::IDENTITY.x),
            y: lerp(collapsed.y, Self::IDENTITY.y),
            scale: lerp(collapsed.scale, Self::IDENTITY.scale),
            opacity: lerp(collapsed.opacity, Self::IDENTITY.opacity),
        }
    }
}

/// Something the UI may want to react to after a [`DetailTransition::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionEvent {
    /// The card started animating in
    Opened,
    /// The close animation finished and the selection was dropped
    Disposed,
}

#[derive(Debug, Clone, Default)]
enum State {
    #[default]
    Closed,
    Opening {
        work: SelectedWork,
        since: f64,
    },
    Open {
        work: SelectedWork,
        since: f64,
        /// Open amount when the phase began
        from: f32,
    },
    Closing {
        work: SelectedWork,
        since: f64,
        from: f32,
    },
}

/// State machine for the detail view: `Closed → Opening → Open → Closing → Closed`.
#[derive(Debug, Clone, Default)]
pub struct DetailTransition {
    state: State,
}

/// Computes where the card starts from when opened from `origin`.
pub fn initial_styles_for(origin: Bounds, viewport_center: Position) -> InitialStyles {
    let center = origin.center();
    InitialStyles {
        x: (center.x - viewport_center.x) as f32,
        y: (center.y - viewport_center.y) as f32,
        scale: DETAIL_START_SCALE,
    }
}

impl DetailTransition {
    /// Creates a closed transition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    pub fn phase(&self) -> DetailPhase {
        match self.state {
            State::Closed => DetailPhase::Closed,
            State::Opening { .. } => DetailPhase::Opening,
            State::Open { .. } => DetailPhase::Open,
            State::Closing { .. } => DetailPhase::Closing,
        }
    }

    /// Whether a card is on screen in any phase.
    pub fn is_showing(&self) -> bool {
        !matches!(self.state, State::Closed)
    }

    /// The selected work, if any.
    pub fn selected(&self) -> Option<&SelectedWork> {
        match &self.state {
            State::Closed => None,
            State::Opening { work, .. } | State::Open { work, .. } | State::Closing { work, .. } => {
                Some(work)
            }
        }
    }

    /// Opens the detail view for `work`, growing from `origin` (screen space).
    ///
    /// If a card is already showing it is replaced without a close animation
    /// and the new one starts over from its own tile.
    pub fn open_with(
        &mut self,
        work: WorkItem,
        origin: Bounds,
        viewport_center: Position,
        now: f64,
    ) {
        if let Some(previous) = self.selected() {
            log::debug!(
                "Replacing detail view of work {} with work {}",
                previous.data.id,
                work.id
            );
        }
        let selected = SelectedWork {
            data: work,
            initial_styles: initial_styles_for(origin, viewport_center),
        };
        log::debug!(
            "Opening work {} from offset ({:.1}, {:.1})",
            selected.data.id,
            selected.initial_styles.x,
            selected.initial_styles.y
        );
        self.state = State::Opening {
            work: selected,
            since: now,
        };
    }

    /// Starts closing. Has no effect unless the card is opening or open.
    pub fn close(&mut self, now: f64) {
        let amount = self.open_amount(now);
        self.state = match std::mem::take(&mut self.state) {
            State::Opening { work, .. } | State::Open { work, .. } => {
                log::debug!("Closing work {}", work.data.id);
                State::Closing {
                    work,
                    since: now,
                    from: amount,
                }
            }
            other => other,
        };
    }

    /// Drops the selection immediately, abandoning any pending phase change.
    pub fn cancel(&mut self) {
        self.state = State::Closed;
    }

    /// Advances timed phase changes. Call once per frame, after the previous
    /// frame has been rendered.
    pub fn tick(&mut self, now: f64) -> Option<TransitionEvent> {
        match std::mem::take(&mut self.state) {
            State::Opening { work, since } if now - since >= OPEN_DELAY => {
                self.state = State::Open {
                    work,
                    since: now,
                    from: 0.0,
                };
                Some(TransitionEvent::Opened)
            }
            State::Closing { work, since, .. } if now - since >= CLOSE_DELAY => {
                log::debug!("Disposed detail view of work {}", work.data.id);
                Some(TransitionEvent::Disposed)
            }
            other => {
                self.state = other;
                None
            }
        }
    }

    /// Transform the card is heading toward in the current phase.
    #[cfg(test)]
    fn target(&self) -> Option<CardTransform> {
        match &self.state {
            State::Closed => None,
            State::Opening { work, .. } | State::Closing { work, .. } => {
                Some(CardTransform::collapsed(&work.initial_styles))
            }
            State::Open { .. } => Some(CardTransform::IDENTITY),
        }
    }

    /// Transform to draw the card with at `now`, including animation progress.
    pub fn presented(&self, now: f64) -> Option<CardTransform> {
        let styles = &self.selected()?.initial_styles;
        Some(CardTransform::between(styles, self.open_amount(now)))
    }

    /// Whether the card is still moving at `now`.
    pub fn is_animating(&self, now: f64) -> bool {
        match &self.state {
            State::Closed => false,
            State::Opening { .. } | State::Closing { .. } => true,
            State::Open { since, .. } => now - since < CARD_TRANSITION_SECONDS,
        }
    }

    /// How far the card is toward identity, in `0..=1`.
    fn open_amount(&self, now: f64) -> f32 {
        let progress = |since: f64| CARD_EASING.ease((now - since) / CARD_TRANSITION_SECONDS) as f32;
        match &self.state {
            State::Closed | State::Opening { .. } => 0.0,
            State::Open { since, from, .. } => from + (1.0 - from) * progress(*since),
            State::Closing { since, from, .. } => from * (1.0 - progress(*since)),
        }
    }
}
