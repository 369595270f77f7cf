//! TUI state algebra: pure types, zero effects.
//!
//! These types define the whole TUI state space. The transition function
//! (`update`), the layout/hit-testing layer and the renderer all program
//! against them.
//!
//! Design principle: static content lives in `Profile` and is only
//! borrowed. `App` holds the small amount of session state: which section
//! is showing, the carousel controller, and pointer/focus bookkeeping.
//! Geometry is derived in `layout`, never stored here.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;

use crate::carousel::{Carousel, CarouselTuning, DismissTicket};
use crate::contact::Link;
use crate::types::Profile;

use super::theme::ThemeVariant;

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
///
/// Producers feeding a single mpsc channel:
/// - The terminal reader thread sends `Key`, `Mouse` and `Resize`
/// - The dismiss timer sends `DismissDue` when a ticket elapses
/// - The role ticker sends `RoleTick`
///
/// Input events go through `map_key`/`map_mouse → update`; the rest go
/// through `handle_background_event`.
#[derive(Debug)]
pub enum AppEvent {
    /// A terminal key event.
    Key(KeyEvent),
    /// A terminal mouse event.
    Mouse(MouseEvent),
    /// The terminal was resized; only a redraw is needed.
    Resize,
    /// A scheduled carousel dismiss elapsed.
    DismissDue(DismissTicket),
    /// Time to show the next hero role.
    RoleTick,
}

// ============================================================================
// SECTIONS
// ============================================================================

/// Page sections, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Skills,
    Experience,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Experience,
        Section::Contact,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Experience => "Experience",
            Section::Contact => "Contact",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn next(self) -> Section {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Section {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

// ============================================================================
// POINTER TARGETS
// ============================================================================

/// An interactive region under the pointer, as resolved by `layout`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// Navigation tab.
    Tab(Section),
    /// Dark/light switch in the title bar.
    ThemeToggle,
    /// Carousel position dot for a category.
    Dot(usize),
    /// Skill tile in the current category.
    Tile(usize),
    /// Expanded skill detail.
    DetailPanel,
    /// Carousel "previous" button.
    Prev,
    /// Carousel "next" button.
    Next,
    /// Row in the skill summary list.
    SummaryRow(usize),
    /// "Hire Me" button.
    HireMe,
    /// "Resume" button.
    Resume,
    /// Row in the contact list.
    ContactRow(usize),
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    /// Section currently showing.
    pub section: Section,

    /// Static content, borrowed for the session.
    pub profile: &'static Profile,

    /// Skills carousel controller.
    pub carousel: Carousel<'static>,

    /// Active colour scheme.
    pub theme: ThemeVariant,

    /// Index into `profile.roles` shown on the hero.
    pub role_index: usize,

    /// Vertical scroll for text sections. Reset on section change.
    pub scroll: u16,

    /// Terminal area of the last drawn frame. Scroll limits derive from it.
    pub viewport: Rect,

    /// Focused row on the contact section.
    pub contact_cursor: usize,

    /// Keyboard focus on a skill tile (index in current category).
    pub focus: Option<usize>,

    /// Region the pointer was last seen over.
    pub hover: Option<Target>,

    /// Region a pointer press started on; activation fires on release.
    pub pressed: Option<Target>,

    /// Transient message for the help line (e.g. a link failed to open).
    pub status: Option<String>,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw terminal events.
///
/// The effects layer maps keys and mouse events to Actions.
/// The transition function decides what each Action means per section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Next section tab.
    NextSection,
    /// Previous section tab.
    PrevSection,
    /// Left: previous category on Skills.
    MoveLeft,
    /// Right: next category on Skills.
    MoveRight,
    /// Up: previous tile / row, or scroll.
    MoveUp,
    /// Down: next tile / row, or scroll.
    MoveDown,
    /// Select category by number (1-based).
    NumberKey(u8),
    /// Activate the focused thing.
    Enter,
    /// Drop keyboard focus.
    Back,
    /// Open the pre-filled hiring email.
    HireMe,
    /// Open the resume.
    Resume,
    /// Flip dark/light.
    ToggleTheme,
    /// Quit the application.
    Quit,
    /// Pointer moved; None means over nothing interactive.
    PointerOver(Option<Target>),
    /// Primary button pressed.
    PointerDown {
        target: Option<Target>,
        x: i32,
        in_swipe_area: bool,
    },
    /// Pointer dragged with the button held.
    PointerDrag { x: i32 },
    /// Primary button released.
    PointerUp { target: Option<Target> },
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a state transition.
///
/// State changes are applied in place; the effects boundary inspects
/// the returned value to decide whether to quit or run a side effect.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Keep running; redraw.
    Stay,
    /// Quit the application.
    Quit,
    /// Execute a side effect.
    Effect(Effect),
}

/// Side effect requested by a transition. Pure code only describes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Hand a URL to the system opener.
    OpenLink(Link),
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App {
    /// Fresh session on the hero section.
    pub fn new(profile: &'static Profile, tuning: CarouselTuning, theme: ThemeVariant) -> Self {
        App {
            section: Section::Home,
            profile,
            carousel: Carousel::with_tuning(profile.categories, tuning),
            theme,
            role_index: 0,
            scroll: 0,
            viewport: Rect::default(),
            contact_cursor: 0,
            focus: None,
            hover: None,
            pressed: None,
            status: None,
            should_quit: false,
        }
    }

    /// Role currently shown on the hero.
    pub fn current_role(&self) -> &'static str {
        self.profile
            .roles
            .get(self.role_index)
            .copied()
            .unwrap_or_default()
    }
}

// ============================================================================
// TESTS
// ============================================================================
