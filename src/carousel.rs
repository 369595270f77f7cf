//! Skills carousel selection controller.
//!
//! Owns which category is showing, which skill (if any) is expanded in the
//! detail panel, pointer presence, the live dismiss ticket, and an in-flight
//! swipe gesture. Pure state: no clocks, no threads, no terminal. The
//! effects layer arms a real timer for [`Carousel::pending_dismiss`] and
//! feeds the ticket back through [`Carousel::fire_dismiss`].
//!
//! Invariant: the selected skill always belongs to the current category.
//! Every index change clears the selection in the same call.

use std::time::Duration;

use tracing::debug;

use crate::types::{Category, Skill};

// ============================================================================
// TUNING
// ============================================================================

/// Grace period between the pointer leaving and the detail panel closing.
pub const DEFAULT_DISMISS_DELAY: Duration = Duration::from_millis(90);

/// Minimum horizontal travel, in input units, that counts as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: i32 = 50;

/// Presentation constants. Overridable from config and CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselTuning {
    pub dismiss_delay: Duration,
    pub swipe_threshold: i32,
}

impl Default for CarouselTuning {
    fn default() -> Self {
        Self {
            dismiss_delay: DEFAULT_DISMISS_DELAY,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

// ============================================================================
// VOCABULARY
// ============================================================================

/// Direction of a category step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    fn step(self) -> isize {
        match self {
            Direction::Next => 1,
            Direction::Previous => -1,
        }
    }
}

/// Position of a skill: category index plus index within that category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SkillRef {
    pub category: usize,
    pub item: usize,
}

impl SkillRef {
    pub fn new(category: usize, item: usize) -> Self {
        Self { category, item }
    }
}

/// Identity of one scheduled dismiss. Only the most recent ticket is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DismissTicket(u64);

// ============================================================================
// SWIPE
// ============================================================================

/// Horizontal gesture tracking over an optional coordinate pair.
///
/// The threshold decision happens only in [`SwipeTracker::end`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SwipeTracker {
    start: Option<i32>,
    current: Option<i32>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: i32) {
        self.start = Some(x);
        self.current = None;
    }

    pub fn track(&mut self, x: i32) {
        self.current = Some(x);
    }

    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }

    /// Finish the gesture. Coordinates are cleared whatever the outcome.
    ///
    /// Travel to the left (start > current) means "next", mirroring a
    /// finger pushing content away.
    pub fn end(&mut self, threshold: i32) -> Option<Direction> {
        let (start, current) = (self.start.take(), self.current.take());
        let distance = match (start, current) {
            (Some(s), Some(c)) => s - c,
            _ => return None,
        };

        if distance > threshold {
            Some(Direction::Next)
        } else if distance < -threshold {
            Some(Direction::Previous)
        } else {
            None
        }
    }
}

// ============================================================================
// CONTROLLER
// ============================================================================

/// Carousel selection state over a fixed category table.
#[derive(Debug, Clone)]
pub struct Carousel<'a> {
    categories: &'a [Category],
    index: usize,
    selected: Option<usize>,
    pointer_inside: bool,
    pending_dismiss: Option<DismissTicket>,
    next_ticket: u64,
    swipe: SwipeTracker,
    tuning: CarouselTuning,
}

impl<'a> Carousel<'a> {
    /// Index 0, nothing selected, pointer outside, no timer.
    pub fn new(categories: &'a [Category]) -> Self {
        Self::with_tuning(categories, CarouselTuning::default())
    }

    pub fn with_tuning(categories: &'a [Category], tuning: CarouselTuning) -> Self {
        Self {
            categories,
            index: 0,
            selected: None,
            pointer_inside: false,
            pending_dismiss: None,
            next_ticket: 0,
            swipe: SwipeTracker::default(),
            tuning,
        }
    }

    // ------------------------------------------------------------------
    // Projection
    // ------------------------------------------------------------------

    pub fn categories(&self) -> &'a [Category] {
        self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current_category(&self) -> Option<&'a Category> {
        self.categories.get(self.index)
    }

    /// Detail panel payload.
    pub fn selected_skill(&self) -> Option<&'a Skill> {
        let item = self.selected?;
        self.current_category()?.skills.get(item)
    }

    pub fn selected_ref(&self) -> Option<SkillRef> {
        self.selected.map(|item| SkillRef::new(self.index, item))
    }

    /// One-based position and total, for "i of N" indicators.
    pub fn position(&self) -> (usize, usize) {
        (self.index + 1, self.categories.len())
    }

    pub fn pointer_inside(&self) -> bool {
        self.pointer_inside
    }

    pub fn pending_dismiss(&self) -> Option<DismissTicket> {
        self.pending_dismiss
    }

    pub fn is_swiping(&self) -> bool {
        self.swipe.is_active()
    }

    pub fn tuning(&self) -> CarouselTuning {
        self.tuning
    }

    // ------------------------------------------------------------------
    // Category navigation
    // ------------------------------------------------------------------

    /// Jump to `index`, wrapping in both directions. Clears the selection.
    pub fn select_category(&mut self, index: isize) {
        if self.categories.is_empty() {
            return;
        }
        let len = self.categories.len() as isize;
        self.index = index.rem_euclid(len) as usize;
        self.selected = None;
        debug!(index = self.index, "carousel category selected");
    }

    pub fn advance(&mut self, direction: Direction) {
        self.select_category(self.index as isize + direction.step());
    }

    // ------------------------------------------------------------------
    // Hover / focus
    // ------------------------------------------------------------------

    /// Pointer entered (or keyboard focus landed on) a skill tile.
    ///
    /// Returns false and changes nothing when `skill` is not part of the
    /// current category.
    pub fn hover_item(&mut self, skill: SkillRef) -> bool {
        let in_range = self
            .current_category()
            .is_some_and(|c| skill.item < c.skills.len());
        if skill.category != self.index || !in_range {
            debug!(?skill, current = self.index, "ignoring hover outside current category");
            return false;
        }

        if self.selected != Some(skill.item) {
            self.selected = Some(skill.item);
        }
        self.pointer_inside = true;
        self.pending_dismiss = None;
        true
    }

    /// Pointer left (or focus moved off) a skill tile.
    pub fn leave_item(&mut self) -> DismissTicket {
        self.pointer_inside = false;
        self.schedule_dismiss()
    }

    pub fn enter_detail_panel(&mut self) {
        self.pointer_inside = true;
        self.pending_dismiss = None;
    }

    pub fn leave_detail_panel(&mut self) -> DismissTicket {
        self.pointer_inside = false;
        self.schedule_dismiss()
    }

    // ------------------------------------------------------------------
    // Debounced dismiss
    // ------------------------------------------------------------------

    /// Issue a new dismiss ticket, superseding any earlier one.
    pub fn schedule_dismiss(&mut self) -> DismissTicket {
        self.next_ticket += 1;
        let ticket = DismissTicket(self.next_ticket);
        self.pending_dismiss = Some(ticket);
        ticket
    }

    /// Timer for `ticket` elapsed. Returns true if the selection was cleared.
    ///
    /// Stale tickets are ignored. Pointer presence is read now, not at
    /// schedule time.
    pub fn fire_dismiss(&mut self, ticket: DismissTicket) -> bool {
        if self.pending_dismiss != Some(ticket) {
            debug!(?ticket, "stale dismiss ignored");
            return false;
        }
        self.pending_dismiss = None;

        if self.pointer_inside {
            return false;
        }
        let cleared = self.selected.take().is_some();
        if cleared {
            debug!("detail panel dismissed");
        }
        cleared
    }

    /// Drop any outstanding ticket so a late timer cannot touch state.
    pub fn teardown(&mut self) {
        self.pending_dismiss = None;
        self.pointer_inside = false;
        self.swipe = SwipeTracker::default();
    }

    // ------------------------------------------------------------------
    // Swipe
    // ------------------------------------------------------------------

    pub fn begin_swipe(&mut self, x: i32) {
        self.swipe.begin(x);
    }

    pub fn track_swipe(&mut self, x: i32) {
        self.swipe.track(x);
    }

    /// Abandon a gesture without evaluating it.
    pub fn cancel_swipe(&mut self) {
        self.swipe = SwipeTracker::default();
    }

    /// Finish a gesture, advancing at most once.
    pub fn end_swipe(&mut self) -> Option<Direction> {
        let direction = self.swipe.end(self.tuning.swipe_threshold);
        if let Some(direction) = direction {
            debug!(?direction, "swipe");
            self.advance(direction);
        }
        direction
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::CATEGORIES;

    fn carousel() -> Carousel<'static> {
        Carousel::new(CATEGORIES)
    }

    fn swipe(c: &mut Carousel<'_>, from: i32, to: i32) -> Option<Direction> {
        c.begin_swipe(from);
        c.track_swipe(to);
        c.end_swipe()
    }

    #[test]
    fn starts_at_first_category_with_nothing_selected() {
        let c = carousel();
        assert_eq!(c.index(), 0);
        assert!(c.selected_skill().is_none());
        assert!(!c.pointer_inside());
        assert!(c.pending_dismiss().is_none());
        assert!(!c.is_swiping());
        assert_eq!(c.position(), (1, 5));
    }

    #[test]
    fn n_advances_return_to_start() {
        let mut c = carousel();
        c.select_category(2);
        for _ in 0..c.len() {
            c.advance(Direction::Next);
        }
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn previous_from_zero_wraps_to_last() {
        let mut c = carousel();
        c.advance(Direction::Previous);
        assert_eq!(c.index(), c.len() - 1);
    }

    #[test]
    fn advance_sequence_wraps_both_ways() {
        let mut c = carousel();
        for _ in 0..3 {
            c.advance(Direction::Next);
        }
        assert_eq!(c.index(), 3);

        let mut seen = Vec::new();
        for _ in 0..5 {
            c.advance(Direction::Previous);
            seen.push(c.index());
        }
        assert_eq!(seen, vec![2, 1, 0, 4, 3]);
    }

    #[test]
    fn select_category_wraps_negative_and_large_indices() {
        let mut c = carousel();
        c.select_category(-1);
        assert_eq!(c.index(), 4);
        c.select_category(7);
        assert_eq!(c.index(), 2);
        c.select_category(-6);
        assert_eq!(c.index(), 4);
    }

    #[test]
    fn hover_selects_skill_for_detail_panel() {
        let mut c = carousel();
        assert!(c.hover_item(SkillRef::new(0, 0)));
        let skill = c.selected_skill().unwrap();
        assert_eq!(skill.name, "Java");
        assert_eq!(skill.level, crate::types::Level::Expert);
        assert!(c.pointer_inside());
    }

    #[test]
    fn category_change_clears_selection() {
        let mut c = carousel();
        c.hover_item(SkillRef::new(0, 0));
        c.select_category(1);
        assert_eq!(c.index(), 1);
        assert!(c.selected_skill().is_none());
        assert!(c.selected_ref().is_none());
    }

    #[test]
    fn advance_also_clears_selection() {
        let mut c = carousel();
        c.hover_item(SkillRef::new(0, 3));
        c.advance(Direction::Next);
        assert!(c.selected_skill().is_none());
    }

    #[test]
    fn hover_from_another_category_is_ignored() {
        let mut c = carousel();
        c.hover_item(SkillRef::new(0, 1));
        assert!(!c.hover_item(SkillRef::new(2, 0)));
        assert_eq!(c.selected_skill().unwrap().name, "Spring Boot");
    }

    #[test]
    fn hover_out_of_range_item_is_ignored() {
        let mut c = carousel();
        c.select_category(1); // Databases has two skills
        assert!(!c.hover_item(SkillRef::new(1, 2)));
        assert!(c.selected_skill().is_none());
        assert!(!c.pointer_inside());
    }

    #[test]
    fn leave_then_fire_clears_selection() {
        let mut c = carousel();
        c.hover_item(SkillRef::new(0, 0));
        let ticket = c.leave_item();
        assert_eq!(c.pending_dismiss(), Some(ticket));
        assert!(c.fire_dismiss(ticket));
        assert!(c.selected_skill().is_none());
        assert!(c.pending_dismiss().is_none());
    }

    #[test]
    fn reentry_within_window_suppresses_dismiss() {
        let mut c = carousel();
        c.hover_item(SkillRef::new(0, 0));
        let ticket = c.leave_item();
        c.hover_item(SkillRef::new(0, 2));
        assert!(c.pending_dismiss().is_none());
        assert!(!c.fire_dismiss(ticket));
        assert_eq!(c.selected_skill().unwrap().name, "Microservices");
    }

    #[test]
    fn reentering_same_item_keeps_it_selected() {
        let mut c = carousel();
        c.hover_item(SkillRef::new(0, 0));
        let ticket = c.leave_item();
        c.hover_item(SkillRef::new(0, 0));
        assert!(!c.fire_dismiss(ticket));
        assert_eq!(c.selected_skill().unwrap().name, "Java");
    }

    #[test]
    fn moving_into_detail_panel_keeps_selection() {
        let mut c = carousel();
        c.hover_item(SkillRef::new(0, 1));
        let ticket = c.leave_item();
        c.enter_detail_panel();
        assert!(!c.fire_dismiss(ticket));
        assert!(c.selected_skill().is_some());

        let ticket = c.leave_detail_panel();
        assert!(c.fire_dismiss(ticket));
        assert!(c.selected_skill().is_none());
    }

    #[test]
    fn rescheduling_invalidates_previous_ticket() {
        let mut c = carousel();
        c.hover_item(SkillRef::new(0, 0));
        let first = c.leave_item();
        let second = c.schedule_dismiss();
        assert_ne!(first, second);
        assert!(!c.fire_dismiss(first));
        assert!(c.selected_skill().is_some());
        assert!(c.fire_dismiss(second));
        assert!(c.selected_skill().is_none());
    }

    #[test]
    fn fire_rechecks_pointer_at_fire_time() {
        let mut c = carousel();
        c.hover_item(SkillRef::new(0, 0));
        let ticket = c.schedule_dismiss();
        // Pointer still inside: the live ticket fires but must not clear.
        assert!(!c.fire_dismiss(ticket));
        assert!(c.selected_skill().is_some());
        assert!(c.pending_dismiss().is_none());
    }

    #[test]
    fn teardown_disarms_pending_dismiss() {
        let mut c = carousel();
        c.hover_item(SkillRef::new(0, 0));
        let ticket = c.leave_item();
        c.teardown();
        assert!(c.pending_dismiss().is_none());
        assert!(!c.fire_dismiss(ticket));
        assert!(c.selected_skill().is_some());
    }

    #[test]
    fn swipe_past_threshold_advances_once() {
        let mut c = carousel();
        assert_eq!(swipe(&mut c, 100, 40), Some(Direction::Next));
        assert_eq!(c.index(), 1);
        assert!(!c.is_swiping());
    }

    #[test]
    fn swipe_right_goes_back() {
        let mut c = carousel();
        assert_eq!(swipe(&mut c, 40, 100), Some(Direction::Previous));
        assert_eq!(c.index(), 4);
    }

    #[test]
    fn short_swipe_does_nothing() {
        let mut c = carousel();
        assert_eq!(swipe(&mut c, 100, 60), None);
        assert_eq!(c.index(), 0);
        assert!(!c.is_swiping());
    }

    #[test]
    fn swipe_exactly_at_threshold_does_nothing() {
        let mut c = carousel();
        assert_eq!(swipe(&mut c, 100, 50), None);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn tap_without_movement_is_not_a_swipe() {
        let mut c = carousel();
        c.begin_swipe(10);
        assert_eq!(c.end_swipe(), None);
        assert!(!c.is_swiping());
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn begin_resets_previous_tracking() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(0);
        tracker.track(200);
        tracker.begin(50);
        assert_eq!(tracker.end(DEFAULT_SWIPE_THRESHOLD), None);
    }

    #[test]
    fn custom_threshold_is_honoured() {
        let tuning = CarouselTuning {
            swipe_threshold: 5,
            ..CarouselTuning::default()
        };
        let mut c = Carousel::with_tuning(CATEGORIES, tuning);
        assert_eq!(swipe(&mut c, 20, 12), Some(Direction::Next));
    }

    #[test]
    fn swipe_clears_selection_via_category_change() {
        let mut c = carousel();
        c.hover_item(SkillRef::new(0, 0));
        swipe(&mut c, 200, 100);
        assert!(c.selected_skill().is_none());
    }

    #[test]
    fn cancelled_swipe_never_advances() {
        let mut c = carousel();
        c.begin_swipe(200);
        c.track_swipe(20);
        c.cancel_swipe();
        assert!(!c.is_swiping());
        assert_eq!(c.end_swipe(), None);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn empty_table_is_inert() {
        let mut c = Carousel::new(&[]);
        c.advance(Direction::Next);
        c.select_category(-3);
        assert_eq!(c.index(), 0);
        assert!(c.current_category().is_none());
        assert!(!c.hover_item(SkillRef::new(0, 0)));
    }
}
