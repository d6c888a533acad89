//! Directional reveal of ring and dot decorations
//!
//! A single phase in [0, 1) drives three visibility curves:
//! - rings: stepped, always growing inner to outer
//! - inner dots: stepped count, direction sensitive
//! - orbital dots: continuous angle threshold, direction sensitive
//!
//! Rings ignore the direction on purpose; the dot sweeps follow it.

use super::state::Direction;

/// Whether an element at normalized position `t` is visible
///
/// Forward: `t <= phase`. Backward: `t >= 1 - phase`.
#[inline]
pub fn is_revealed(t: f32, phase: f32, direction: Direction) -> bool {
    match direction {
        Direction::Forward => t <= phase,
        Direction::Backward => t >= 1.0 - phase,
    }
}

/// Highest visible ring index, clamped to [0, ring_count - 1]
pub fn ring_limit(phase: f32, ring_count: usize) -> usize {
    if ring_count == 0 {
        return 0;
    }
    let step = (phase * ring_count as f32).floor().max(0.0) as usize;
    step.min(ring_count - 1)
}

/// Number of inner dots shown at this phase (at least one)
pub fn inner_dot_count(phase: f32, total: usize) -> usize {
    let step = (phase * total as f32).floor().max(0.0) as usize;
    (step + 1).min(total)
}

/// Reveal state of one wheel for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealFrame {
    pub phase: f32,
    pub direction: Direction,
}

impl RevealFrame {
    pub fn new(phase: f32, direction: Direction) -> Self {
        Self { phase, direction }
    }

    /// Ring `index` of `ring_count`, counted from the innermost
    pub fn ring_visible(&self, index: usize, ring_count: usize) -> bool {
        ring_count > 0 && index <= ring_limit(self.phase, ring_count)
    }

    /// Inner dot `index` of `total`
    pub fn inner_dot_visible(&self, index: usize, total: usize) -> bool {
        let count = inner_dot_count(self.phase, total);
        match self.direction {
            Direction::Forward => index < count,
            Direction::Backward => index >= total - count,
        }
    }

    /// Orbital element `index` of `total`, evenly spaced around the ring
    pub fn orbital_visible(&self, index: usize, total: usize) -> bool {
        if total == 0 {
            return false;
        }
        is_revealed(index as f32 / total as f32, self.phase, self.direction)
    }

    /// Visible orbital indices, in order
    pub fn visible_orbital(&self, total: usize) -> Vec<usize> {
        (0..total).filter(|&i| self.orbital_visible(i, total)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ring_limit_steps() {
        assert_eq!(ring_limit(0.0, 6), 0);
        assert_eq!(ring_limit(0.5, 6), 3);
        assert_eq!(ring_limit(0.99, 6), 5);
        // Clamped even if the phase is out of range
        assert_eq!(ring_limit(1.0, 6), 5);
        assert_eq!(ring_limit(0.5, 0), 0);
    }

    #[test]
    fn test_rings_ignore_direction() {
        let fwd = RevealFrame::new(0.4, Direction::Forward);
        let back = RevealFrame::new(0.4, Direction::Backward);
        for i in 0..6 {
            assert_eq!(fwd.ring_visible(i, 6), back.ring_visible(i, 6));
        }
    }

    #[test]
    fn test_inner_dot_count() {
        assert_eq!(inner_dot_count(0.0, 16), 1);
        assert_eq!(inner_dot_count(0.5, 16), 9);
        assert_eq!(inner_dot_count(0.999, 16), 16);
        assert_eq!(inner_dot_count(0.5, 0), 0);
    }

    #[test]
    fn test_half_phase_backward_scenario() {
        // Spin +1 means reveal -1
        let frame = RevealFrame::new(0.5, Direction::Forward.opposite());

        let rings: Vec<usize> = (0..6).filter(|&i| frame.ring_visible(i, 6)).collect();
        assert_eq!(rings, vec![0, 1, 2, 3]);

        let dots: Vec<usize> = (0..16).filter(|&i| frame.inner_dot_visible(i, 16)).collect();
        assert_eq!(dots, (7..16).collect::<Vec<_>>());
    }

    #[test]
    fn test_forward_inner_dots() {
        let frame = RevealFrame::new(0.25, Direction::Forward);
        let dots: Vec<usize> = (0..16).filter(|&i| frame.inner_dot_visible(i, 16)).collect();
        assert_eq!(dots, (0..5).collect::<Vec<_>>());
    }

    #[test]
    fn test_orbital_at_zero_phase() {
        // Forward shows only the t = 0 element, backward shows nothing
        let fwd = RevealFrame::new(0.0, Direction::Forward);
        assert_eq!(fwd.visible_orbital(10), vec![0]);
        let back = RevealFrame::new(0.0, Direction::Backward);
        assert!(back.visible_orbital(10).is_empty());
    }

    #[test]
    fn test_orbital_sweeps_from_opposite_ends() {
        let fwd = RevealFrame::new(0.35, Direction::Forward);
        assert_eq!(fwd.visible_orbital(10), vec![0, 1, 2, 3]);
        let back = RevealFrame::new(0.35, Direction::Backward);
        assert_eq!(back.visible_orbital(10), vec![7, 8, 9]);
    }

    #[test]
    fn test_wraparound_resets_visible_set() {
        use crate::consts::REVEAL_INCREMENT;
        use crate::sim::advance_phase;

        let before = RevealFrame::new(0.999, Direction::Forward).visible_orbital(40);
        assert_eq!(before.len(), 40);

        let phase = advance_phase(0.999, REVEAL_INCREMENT);
        assert!(phase < REVEAL_INCREMENT);
        let after = RevealFrame::new(phase, Direction::Forward).visible_orbital(40);
        assert_eq!(after, vec![0]);
    }

    proptest! {
        #[test]
        fn prop_orbital_reveal_is_monotonic(
            p1 in 0.0f32..1.0,
            p2 in 0.0f32..1.0,
            total in 1usize..120,
            forward in any::<bool>(),
        ) {
            let (lo, hi) = if p1 <= p2 { (p1, p2) } else { (p2, p1) };
            let direction = if forward { Direction::Forward } else { Direction::Backward };
            let early = RevealFrame::new(lo, direction);
            let late = RevealFrame::new(hi, direction);
            for i in 0..total {
                if early.orbital_visible(i, total) {
                    prop_assert!(late.orbital_visible(i, total));
                }
                if early.inner_dot_visible(i, total) {
                    prop_assert!(late.inner_dot_visible(i, total));
                }
                if early.ring_visible(i, total) {
                    prop_assert!(late.ring_visible(i, total));
                }
            }
        }
    }
}
