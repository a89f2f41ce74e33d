// SPDX-License-Identifier: MPL-2.0
//! Index state machine for a carousel.
//!
//! Navigation is split into *planning* (which transition, if any, an input
//! asks for) and *committing* (snapping the index once the animation has
//! finished). User navigation never wraps around; only autoplay does.

use crate::domain::gesture::SwipeDirection;

/// Direction a slide animates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    Forward,
    Backward,
}

/// A planned index change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub direction: SlideDirection,
}

/// Current position over `item_count` items.
///
/// Invariant: `current_index < item_count` whenever `item_count > 0`;
/// an empty carousel reports index 0 and ignores navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselNavigator {
    item_count: usize,
    current_index: usize,
}

impl CarouselNavigator {
    #[must_use]
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            current_index: 0,
        }
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    #[must_use]
    pub fn at_first(&self) -> bool {
        self.current_index == 0
    }

    #[must_use]
    pub fn at_last(&self) -> bool {
        self.item_count == 0 || self.current_index + 1 >= self.item_count
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        !self.at_last()
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        !self.is_empty() && !self.at_first()
    }

    /// Replaces the item count, pulling the index back into range.
    ///
    /// Returns the new index when it had to move.
    pub fn set_item_count(&mut self, item_count: usize) -> Option<usize> {
        self.item_count = item_count;
        let clamped = self.current_index.min(item_count.saturating_sub(1));
        if clamped != self.current_index {
            self.current_index = clamped;
            Some(clamped)
        } else {
            None
        }
    }

    /// Transition requested by a horizontal swipe.
    ///
    /// A left swipe pages forward, a right swipe pages backward. Vertical
    /// swipes and swipes against a boundary plan nothing.
    #[must_use]
    pub fn plan_swipe(&self, direction: SwipeDirection) -> Option<Transition> {
        match direction {
            SwipeDirection::Left => self.plan_next(),
            SwipeDirection::Right => self.plan_previous(),
            SwipeDirection::Up | SwipeDirection::Down => None,
        }
    }

    #[must_use]
    pub fn plan_next(&self) -> Option<Transition> {
        self.has_next().then(|| Transition {
            from: self.current_index,
            to: self.current_index + 1,
            direction: SlideDirection::Forward,
        })
    }

    #[must_use]
    pub fn plan_previous(&self) -> Option<Transition> {
        self.has_previous().then(|| Transition {
            from: self.current_index,
            to: self.current_index - 1,
            direction: SlideDirection::Backward,
        })
    }

    /// Autoplay advance: forward, wrapping from the last item to the first.
    #[must_use]
    pub fn plan_autoplay(&self) -> Option<Transition> {
        if self.item_count < 2 {
            return None;
        }
        let to = (self.current_index + 1) % self.item_count;
        Some(Transition {
            from: self.current_index,
            to,
            direction: SlideDirection::Forward,
        })
    }

    /// Direct selection (e.g. a pagination dot). Out-of-range or
    /// same-index selections plan nothing.
    #[must_use]
    pub fn plan_select(&self, index: usize) -> Option<Transition> {
        if index >= self.item_count || index == self.current_index {
            return None;
        }
        let direction = if index > self.current_index {
            SlideDirection::Forward
        } else {
            SlideDirection::Backward
        };
        Some(Transition {
            from: self.current_index,
            to: index,
            direction,
        })
    }

    /// Snaps the index to the transition target. Returns the new index.
    pub fn commit(&mut self, transition: Transition) -> usize {
        if transition.to < self.item_count {
            self.current_index = transition.to;
        }
        self.current_index
    }
}
