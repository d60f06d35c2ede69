//! Viewport-triggered staggered reveal.
//!
//! Every section owns one [`RevealState`]. When the section scrolls into view
//! the state flips to `Revealed` for good, and each of its content blocks is
//! shown with its own delay so the cards cascade in order.

use crate::error::{Result, SiteError};

/// One repeated item of a section, in display order.
#[derive(Clone, Debug, PartialEq)]
pub struct ContentBlock<P> {
    pub order_index: usize,
    pub reveal_delay: f64,
    pub payload: P,
}

impl<P> ContentBlock<P> {
    pub fn new(order_index: usize, reveal_delay: f64, payload: P) -> Self {
        Self {
            order_index,
            reveal_delay,
            payload,
        }
    }
}

/// Builds blocks from payloads in order, asking `delay` for each block's offset.
pub fn staggered<P, I, F>(payloads: I, delay: F) -> Vec<ContentBlock<P>>
where
    I: IntoIterator<Item = P>,
    F: Fn(usize, &P) -> f64,
{
    payloads
        .into_iter()
        .enumerate()
        .map(|(index, payload)| {
            let reveal_delay = delay(index, &payload);
            ContentBlock::new(index, reveal_delay, payload)
        })
        .collect()
}

/// Linear delay ladder: `base + step * index` seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stagger {
    pub base: f64,
    pub step: f64,
}

impl Stagger {
    pub const fn new(base: f64, step: f64) -> Self {
        Self { base, step }
    }

    pub fn delay_for(&self, index: usize) -> f64 {
        self.base + self.step * index as f64
    }

    pub fn blocks<P, I>(&self, payloads: I) -> Vec<ContentBlock<P>>
    where
        I: IntoIterator<Item = P>,
    {
        staggered(payloads, |index, _| self.delay_for(index))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    NotObserved,
    Revealed,
}

impl RevealState {
    /// `Revealed` is terminal, so this is safe to call on every signal.
    pub fn reveal(self) -> Self {
        RevealState::Revealed
    }

    pub fn is_revealed(self) -> bool {
        matches!(self, RevealState::Revealed)
    }
}

/// Whether an observer entry counts as the section entering the viewport.
pub fn crossed_threshold(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio >= threshold
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealInstruction {
    pub visible: bool,
    pub applied_delay: f64,
}

impl RevealInstruction {
    pub const HIDDEN: RevealInstruction = RevealInstruction {
        visible: false,
        applied_delay: 0.0,
    };

    pub fn for_state(state: RevealState, delay: f64) -> Self {
        if state.is_revealed() {
            RevealInstruction {
                visible: true,
                applied_delay: delay,
            }
        } else {
            Self::HIDDEN
        }
    }

    /// Inline transition timing for this block, empty while hidden.
    pub fn transition_style(&self, duration: f64) -> String {
        if !self.visible {
            return String::new();
        }
        format!(
            "transition-duration: {}s; transition-delay: {}s;",
            millis_precision(duration),
            millis_precision(self.applied_delay)
        )
    }
}

// Keeps ladder arithmetic like 0.2 + 0.1 from leaking float noise into CSS.
fn millis_precision(seconds: f64) -> f64 {
    (seconds * 1000.0).round() / 1000.0
}

/// One instruction per block, in block order.
pub fn sequence<P>(blocks: &[ContentBlock<P>], state: RevealState) -> Vec<RevealInstruction> {
    blocks
        .iter()
        .map(|block| RevealInstruction::for_state(state, block.reveal_delay))
        .collect()
}

/// Checks that every delay is finite, non-negative and that the ladder never
/// steps backwards.
pub fn validate_stagger<P>(section: &'static str, blocks: &[ContentBlock<P>]) -> Result<()> {
    let mut previous: Option<f64> = None;
    for block in blocks {
        let delay = block.reveal_delay;
        if !delay.is_finite() || delay < 0.0 {
            return Err(SiteError::InvalidDelay {
                section,
                index: block.order_index,
                delay,
            });
        }
        if let Some(previous) = previous {
            if delay < previous {
                return Err(SiteError::DecreasingDelay {
                    section,
                    index: block.order_index,
                    previous,
                    delay,
                });
            }
        }
        previous = Some(delay);
    }
    Ok(())
}

/// Readiness of a preloaded asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AssetState {
    #[default]
    Loading,
    Ready,
}

impl AssetState {
    pub fn ready(self) -> Self {
        AssetState::Ready
    }

    pub fn opacity_class(self) -> &'static str {
        match self {
            AssetState::Loading => "opacity-0",
            AssetState::Ready => "opacity-100",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery() -> Vec<ContentBlock<&'static str>> {
        staggered(["a", "b", "c", "d", "e", "f"], |index, _| 0.2 + 0.1 * index as f64)
    }

    #[test]
    fn nothing_is_visible_before_the_trigger() {
        let instructions = sequence(&gallery(), RevealState::NotObserved);
        assert_eq!(instructions.len(), 6);
        assert!(instructions.iter().all(|i| !i.visible));
    }

    #[test]
    fn everything_shows_with_its_own_delay_after_the_trigger() {
        let blocks = gallery();
        let state = RevealState::NotObserved.reveal();
        let instructions = sequence(&blocks, state);

        assert_eq!(instructions.len(), blocks.len());
        for (block, instruction) in blocks.iter().zip(&instructions) {
            assert!(instruction.visible);
            assert_eq!(instruction.applied_delay, block.reveal_delay);
        }
    }

    #[test]
    fn second_trigger_changes_nothing() {
        let blocks = gallery();
        let once = RevealState::NotObserved.reveal();
        let twice = once.reveal();

        assert_eq!(once, twice);
        assert_eq!(sequence(&blocks, once), sequence(&blocks, twice));
    }

    #[test]
    fn empty_section_yields_no_instructions() {
        let blocks: Vec<ContentBlock<()>> = Vec::new();
        assert!(sequence(&blocks, RevealState::Revealed).is_empty());
        assert!(validate_stagger("empty", &blocks).is_ok());
    }

    #[test]
    fn order_is_preserved() {
        let blocks = vec![
            ContentBlock::new(0, 0.0, "header"),
            ContentBlock::new(1, 0.5, "slow"),
            ContentBlock::new(2, 0.5, "same"),
        ];
        let delays: Vec<f64> = sequence(&blocks, RevealState::Revealed)
            .iter()
            .map(|i| i.applied_delay)
            .collect();
        assert_eq!(delays, vec![0.0, 0.5, 0.5]);
    }

    #[test]
    fn threshold_requires_intersection_and_ratio() {
        assert!(crossed_threshold(true, 0.1, 0.1));
        assert!(crossed_threshold(true, 0.75, 0.1));
        assert!(!crossed_threshold(true, 0.05, 0.1));
        assert!(!crossed_threshold(false, 0.5, 0.1));
    }

    #[test]
    fn stagger_ladder() {
        let testimonials = Stagger::new(0.0, 0.1);
        assert_eq!(testimonials.delay_for(0), 0.0);
        assert!((testimonials.delay_for(3) - 0.3).abs() < 1e-9);

        let blocks = Stagger::new(0.2, 0.15).blocks(["x", "y"]);
        assert_eq!(blocks[1].order_index, 1);
        assert!((blocks[1].reveal_delay - 0.35).abs() < 1e-9);
    }

    #[test]
    fn validation_rejects_bad_delays() {
        let negative = vec![ContentBlock::new(0, -0.1, ())];
        assert!(matches!(
            validate_stagger("hero", &negative),
            Err(SiteError::InvalidDelay { index: 0, .. })
        ));

        let nan = vec![ContentBlock::new(0, 0.0, ()), ContentBlock::new(1, f64::NAN, ())];
        assert!(matches!(
            validate_stagger("hero", &nan),
            Err(SiteError::InvalidDelay { index: 1, .. })
        ));

        let backwards = vec![ContentBlock::new(0, 0.4, ()), ContentBlock::new(1, 0.3, ())];
        assert!(matches!(
            validate_stagger("portfolio", &backwards),
            Err(SiteError::DecreasingDelay { section: "portfolio", index: 1, .. })
        ));
    }

    #[test]
    fn hidden_blocks_carry_no_transition() {
        assert_eq!(RevealInstruction::HIDDEN.transition_style(0.6), "");
        let shown = RevealInstruction::for_state(RevealState::Revealed, 0.3);
        assert_eq!(
            shown.transition_style(0.6),
            "transition-duration: 0.6s; transition-delay: 0.3s;"
        );

        let laddered = RevealInstruction::for_state(RevealState::Revealed, Stagger::new(0.2, 0.1).delay_for(1));
        assert_eq!(
            laddered.transition_style(0.5),
            "transition-duration: 0.5s; transition-delay: 0.3s;"
        );
    }

    #[test]
    fn background_stays_dark_until_loaded() {
        let state = AssetState::default();
        assert_eq!(state.opacity_class(), "opacity-0");
        assert_eq!(state.ready().opacity_class(), "opacity-100");
        assert_eq!(state.ready().ready(), AssetState::Ready);
    }
}
