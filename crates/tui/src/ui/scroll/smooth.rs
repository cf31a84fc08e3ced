//! Smooth-scroll animator: a retained target offset the render loop eases
//! toward, with cancel-by-overwrite semantics.
//!
//! Fire-and-forget from the caller's point of view: nothing awaits animation
//! completion, and a retarget issued mid-flight simply redirects the easing.

/// Fraction of the remaining distance covered per tick.
const EASE_FACTOR: f32 = 0.35;

/// Distance below which the position snaps to the target, ending the
/// animation instead of approaching it forever.
const SNAP_DISTANCE: f32 = 0.5;

#[derive(Debug, Clone, Copy, Default)]
pub struct SmoothScroll {
    position: f32,
    target: Option<u16>,
}

impl SmoothScroll {
    /// Starts (or redirects) an animation toward the given offset.
    pub fn retarget(&mut self, target: u16) {
        self.target = Some(target);
    }

    /// Aligns the animator with an offset the user moved to directly,
    /// cancelling any in-flight animation.
    pub fn sync(&mut self, offset: u16) {
        self.position = f32::from(offset);
        self.target = None;
    }

    /// True while an animation is in flight; drives the runtime's fast tick.
    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// Advances one frame. Returns the new offset while animating, `None`
    /// once settled.
    pub fn tick(&mut self) -> Option<u16> {
        let goal = f32::from(self.target?);
        self.position += (goal - self.position) * EASE_FACTOR;
        if (goal - self.position).abs() < SNAP_DISTANCE {
            self.position = goal;
            self.target = None;
        }
        Some(self.position.round() as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converges_and_settles_on_the_target() {
        let mut scroll = SmoothScroll::default();
        scroll.sync(0);
        scroll.retarget(120);

        let mut last = 0;
        for _ in 0..64 {
            match scroll.tick() {
                Some(offset) => last = offset,
                None => break,
            }
        }
        assert_eq!(last, 120);
        assert!(!scroll.is_animating());
        assert_eq!(scroll.tick(), None);
    }

    #[test]
    fn retarget_supersedes_in_flight_animation() {
        let mut scroll = SmoothScroll::default();
        scroll.sync(0);
        scroll.retarget(400);
        scroll.tick();
        scroll.tick();

        scroll.retarget(10);
        let mut last = 0;
        while let Some(offset) = scroll.tick() {
            last = offset;
            if !scroll.is_animating() {
                break;
            }
        }
        assert_eq!(last, 10);
    }

    #[test]
    fn user_scroll_cancels_animation() {
        let mut scroll = SmoothScroll::default();
        scroll.retarget(300);
        assert!(scroll.is_animating());
        scroll.sync(42);
        assert!(!scroll.is_animating());
        assert_eq!(scroll.tick(), None);
    }

    #[test]
    fn animates_upward_too() {
        let mut scroll = SmoothScroll::default();
        scroll.sync(500);
        scroll.retarget(100);
        let mut last = 500;
        while let Some(offset) = scroll.tick() {
            last = offset;
            if !scroll.is_animating() {
                break;
            }
        }
        assert_eq!(last, 100);
    }
}
