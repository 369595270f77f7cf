//! Screen geometry and hit testing.
//!
//! One pure function, [`compute`], turns (terminal area, App) into the
//! rectangles of every interactive region. The renderer draws into these
//! rectangles and the mouse mapper resolves pointer positions against the
//! same ones, so what you see is what you hit.

use ratatui::layout::{Constraint, Layout, Position, Rect};

use super::state::{App, Section, Target};

/// Tile height: border, name, level, border.
pub const TILE_HEIGHT: u16 = 4;

/// Detail panel height: border, name/level, description, border.
pub const DETAIL_HEIGHT: u16 = 4;

/// Below this width the summary column is dropped.
pub const SUMMARY_MIN_WIDTH: u16 = 90;

const DOT_WIDTH: u16 = 2;
const PREV_LABEL_WIDTH: u16 = 12;
const NEXT_LABEL_WIDTH: u16 = 8;
const BUTTON_HEIGHT: u16 = 3;

// ============================================================================
// REGIONS
// ============================================================================

/// Every rectangle the UI cares about, for the current frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Regions {
    pub title: Rect,
    pub theme_toggle: Rect,
    pub tabs: Vec<(Section, Rect)>,
    pub content: Rect,
    pub help: Rect,
    /// Present on the Skills section.
    pub skills: Option<SkillsRegions>,
    /// Hire-me button (Home and Contact).
    pub hire_me: Option<Rect>,
    /// Resume button (About).
    pub resume: Option<Rect>,
    /// Text body for scrollable sections.
    pub body: Rect,
    /// One rect per contact method (Contact).
    pub contact_rows: Vec<Rect>,
}

/// Geometry of the carousel card and the summary column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillsRegions {
    /// Whole bordered card; also the swipe surface.
    pub card: Rect,
    pub header: Rect,
    pub dots: Vec<Rect>,
    pub detail: Option<Rect>,
    pub grid: Rect,
    pub tiles: Vec<Rect>,
    pub prev: Rect,
    pub position: Rect,
    pub next: Rect,
    pub summary: Option<Rect>,
    pub summary_rows: Vec<Rect>,
}

impl Regions {
    /// Most specific interactive target at a cell.
    pub fn target_at(&self, x: u16, y: u16) -> Option<Target> {
        let p = Position { x, y };

        if self.theme_toggle.contains(p) {
            return Some(Target::ThemeToggle);
        }
        if let Some((section, _)) = self.tabs.iter().find(|(_, r)| r.contains(p)) {
            return Some(Target::Tab(*section));
        }
        if self.hire_me.is_some_and(|r| r.contains(p)) {
            return Some(Target::HireMe);
        }
        if self.resume.is_some_and(|r| r.contains(p)) {
            return Some(Target::Resume);
        }
        if let Some(i) = self.contact_rows.iter().position(|r| r.contains(p)) {
            return Some(Target::ContactRow(i));
        }

        let skills = self.skills.as_ref()?;
        if let Some(i) = skills.dots.iter().position(|r| r.contains(p)) {
            return Some(Target::Dot(i));
        }
        if skills.detail.is_some_and(|r| r.contains(p)) {
            return Some(Target::DetailPanel);
        }
        if let Some(i) = skills.tiles.iter().position(|r| r.contains(p)) {
            return Some(Target::Tile(i));
        }
        if skills.prev.contains(p) {
            return Some(Target::Prev);
        }
        if skills.next.contains(p) {
            return Some(Target::Next);
        }
        if let Some(i) = skills.summary_rows.iter().position(|r| r.contains(p)) {
            return Some(Target::SummaryRow(i));
        }
        None
    }

    /// Whether a press here may start a swipe.
    pub fn in_swipe_area(&self, x: u16, y: u16) -> bool {
        self.skills
            .as_ref()
            .is_some_and(|s| s.card.contains(Position { x, y }))
    }
}

// ============================================================================
// COMPUTE
// ============================================================================

/// Lay out the frame for the current state.
pub fn compute(area: Rect, app: &App) -> Regions {
    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Length(1), // tabs
        Constraint::Min(0),    // content
        Constraint::Length(1), // help
    ])
    .split(area);

    let title = chunks[0];
    let toggle_width = (app.theme.label().chars().count() as u16).min(title.width);
    let theme_toggle = Rect::new(
        title.right().saturating_sub(toggle_width),
        title.y,
        toggle_width,
        title.height,
    );

    let mut regions = Regions {
        title,
        theme_toggle,
        tabs: tab_rects(chunks[1]),
        content: chunks[2],
        help: chunks[3],
        ..Regions::default()
    };

    let content = chunks[2];
    match app.section {
        Section::Home => {
            let [body, button] = split_bottom(content, BUTTON_HEIGHT);
            regions.body = body;
            regions.hire_me = Some(centered_width(button, 16));
        }
        Section::About => {
            let [body, button] = split_bottom(content, BUTTON_HEIGHT);
            regions.body = body;
            regions.resume = Some(centered_width(button, 14));
        }
        Section::Experience => {
            regions.body = content;
        }
        Section::Contact => {
            let [body, button] = split_bottom(content, BUTTON_HEIGHT);
            regions.body = body;
            regions.hire_me = Some(centered_width(button, 16));
            // Heading line, blank line, then one row per method.
            regions.contact_rows = (0..app.profile.contacts.len() as u16)
                .map(|i| Rect::new(body.x, body.y + 2 + i, body.width, 1))
                .filter(|r| r.bottom() <= body.bottom())
                .collect();
        }
        Section::Skills => {
            regions.skills = Some(skills_regions(content, app));
        }
    }

    regions
}

fn tab_rects(row: Rect) -> Vec<(Section, Rect)> {
    let mut x = row.x + 1;
    let mut out = Vec::new();
    for section in Section::ALL {
        let width = section.title().chars().count() as u16 + 2;
        if x + width > row.right() {
            break;
        }
        out.push((section, Rect::new(x, row.y, width, 1)));
        x += width + 1;
    }
    out
}

fn skills_regions(content: Rect, app: &App) -> SkillsRegions {
    let (card, summary) = if content.width >= SUMMARY_MIN_WIDTH {
        let cols = Layout::horizontal([Constraint::Percentage(66), Constraint::Percentage(34)])
            .split(content);
        (cols[0], Some(cols[1]))
    } else {
        (content, None)
    };

    let inner = inset(card);
    let detail_height = if app.carousel.selected_skill().is_some() {
        DETAIL_HEIGHT
    } else {
        0
    };

    let rows = Layout::vertical([
        Constraint::Length(2),             // header
        Constraint::Length(detail_height), // detail panel
        Constraint::Min(0),                // tiles
        Constraint::Length(1),             // prev / position / next
    ])
    .split(inner);

    let header = rows[0];
    let count = app.carousel.len() as u16;
    let dots_width = count * DOT_WIDTH;
    let dots_x = header.right().saturating_sub(dots_width);
    let dots = (0..count)
        .map(|i| Rect::new(dots_x + i * DOT_WIDTH, header.y, DOT_WIDTH, 1))
        .filter(|r| r.x >= header.x)
        .collect();

    let detail = (detail_height > 0).then_some(rows[1]);

    let grid = rows[2];
    let item_count = app
        .carousel
        .current_category()
        .map_or(0, |c| c.skills.len());
    let tiles = tile_rects(grid, item_count);

    let footer = rows[3];
    let prev = Rect::new(footer.x, footer.y, PREV_LABEL_WIDTH.min(footer.width), footer.height);
    let next_width = NEXT_LABEL_WIDTH.min(footer.width);
    let next = Rect::new(
        footer.right().saturating_sub(next_width),
        footer.y,
        next_width,
        footer.height,
    );
    let position = Rect::new(
        prev.right(),
        footer.y,
        next.x.saturating_sub(prev.right()),
        footer.height,
    );

    let summary_rows = summary
        .map(|s| {
            let inner = inset(s);
            (0..count)
                .map(|i| Rect::new(inner.x, inner.y + i, inner.width, 1))
                .filter(|r| r.bottom() <= inner.bottom())
                .collect()
        })
        .unwrap_or_default();

    SkillsRegions {
        card,
        header,
        dots,
        detail,
        grid,
        tiles,
        prev,
        position,
        next,
        summary,
        summary_rows,
    }
}

/// Grid columns for a given width: three when there is room, else two.
pub fn grid_columns(width: u16) -> u16 {
    if width >= 60 { 3 } else { 2 }
}

/// Tiles in reading order, clipped to the grid. Tiles that do not fit are
/// omitted, so the returned length may be shorter than `count`.
fn tile_rects(grid: Rect, count: usize) -> Vec<Rect> {
    if grid.width == 0 || grid.height == 0 {
        return Vec::new();
    }
    let cols = grid_columns(grid.width);
    let tile_width = grid.width / cols;

    (0..count as u16)
        .map(|i| {
            let col = i % cols;
            let row = i / cols;
            Rect::new(
                grid.x + col * tile_width,
                grid.y + row * TILE_HEIGHT,
                tile_width,
                TILE_HEIGHT,
            )
        })
        .take_while(|r| r.bottom() <= grid.bottom())
        .collect()
}

/// Area inside a one-cell border.
fn inset(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(1),
        area.y.saturating_add(1),
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}

fn split_bottom(area: Rect, height: u16) -> [Rect; 2] {
    let chunks = Layout::vertical([Constraint::Min(0), Constraint::Length(height)]).split(area);
    [chunks[0], chunks[1]]
}

fn centered_width(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::{CarouselTuning, SkillRef};
    use crate::profile::PROFILE;
    use crate::tui::theme::ThemeVariant;

    fn app_on(section: Section) -> App {
        let mut app = App::new(&PROFILE, CarouselTuning::default(), ThemeVariant::Dark);
        app.section = section;
        app
    }

    fn full() -> Rect {
        Rect::new(0, 0, 120, 40)
    }

    fn center(r: Rect) -> (u16, u16) {
        (r.x + r.width / 2, r.y + r.height / 2)
    }

    #[test]
    fn frame_has_title_tabs_content_help() {
        let regions = compute(full(), &app_on(Section::Home));
        assert_eq!(regions.title.y, 0);
        assert_eq!(regions.tabs.len(), 5);
        assert_eq!(regions.help.y, 39);
        assert_eq!(regions.content.height, 37);
    }

    #[test]
    fn tabs_resolve_to_their_section() {
        let regions = compute(full(), &app_on(Section::Home));
        for (section, rect) in &regions.tabs {
            let (x, y) = center(*rect);
            assert_eq!(regions.target_at(x, y), Some(Target::Tab(*section)));
        }
    }

    #[test]
    fn theme_toggle_sits_at_right_of_title() {
        let regions = compute(full(), &app_on(Section::Home));
        assert_eq!(regions.theme_toggle.right(), 120);
        let (x, y) = center(regions.theme_toggle);
        assert_eq!(regions.target_at(x, y), Some(Target::ThemeToggle));
    }

    #[test]
    fn skills_layout_has_one_tile_per_skill() {
        let regions = compute(full(), &app_on(Section::Skills));
        let skills = regions.skills.unwrap();
        assert_eq!(skills.tiles.len(), 6);
        assert_eq!(skills.dots.len(), 5);
        assert_eq!(skills.summary_rows.len(), 5);
        assert!(skills.detail.is_none());
    }

    #[test]
    fn tiles_resolve_to_their_index() {
        let regions = compute(full(), &app_on(Section::Skills));
        let skills = regions.skills.as_ref().unwrap();
        for (i, tile) in skills.tiles.iter().enumerate() {
            let (x, y) = center(*tile);
            assert_eq!(regions.target_at(x, y), Some(Target::Tile(i)));
        }
    }

    #[test]
    fn detail_panel_appears_with_selection() {
        let mut app = app_on(Section::Skills);
        app.carousel.hover_item(SkillRef::new(0, 0));
        let regions = compute(full(), &app);
        let skills = regions.skills.as_ref().unwrap();
        let detail = skills.detail.unwrap();
        assert_eq!(detail.height, DETAIL_HEIGHT);
        let (x, y) = center(detail);
        assert_eq!(regions.target_at(x, y), Some(Target::DetailPanel));
        // Grid moves down to make room.
        assert!(skills.tiles[0].y >= detail.bottom());
    }

    #[test]
    fn dots_prev_next_and_summary_are_hittable() {
        let regions = compute(full(), &app_on(Section::Skills));
        let skills = regions.skills.as_ref().unwrap();

        let (x, y) = (skills.dots[3].x, skills.dots[3].y);
        assert_eq!(regions.target_at(x, y), Some(Target::Dot(3)));

        let (x, y) = center(skills.prev);
        assert_eq!(regions.target_at(x, y), Some(Target::Prev));
        let (x, y) = center(skills.next);
        assert_eq!(regions.target_at(x, y), Some(Target::Next));

        let (x, y) = center(skills.summary_rows[4]);
        assert_eq!(regions.target_at(x, y), Some(Target::SummaryRow(4)));
    }

    #[test]
    fn narrow_terminal_drops_summary_and_uses_two_columns() {
        let regions = compute(Rect::new(0, 0, 50, 40), &app_on(Section::Skills));
        let skills = regions.skills.unwrap();
        assert!(skills.summary.is_none());
        assert!(skills.summary_rows.is_empty());
        assert_eq!(grid_columns(skills.grid.width), 2);
    }

    #[test]
    fn short_terminal_clips_tiles() {
        let regions = compute(Rect::new(0, 0, 120, 12), &app_on(Section::Skills));
        let skills = regions.skills.unwrap();
        assert!(skills.tiles.len() < 6);
        assert!(skills.tiles.iter().all(|t| t.bottom() <= skills.grid.bottom()));
    }

    #[test]
    fn swipe_area_is_the_card_only() {
        let regions = compute(full(), &app_on(Section::Skills));
        let card = regions.skills.as_ref().unwrap().card;
        let (x, y) = center(card);
        assert!(regions.in_swipe_area(x, y));
        assert!(!regions.in_swipe_area(0, 0));

        let home = compute(full(), &app_on(Section::Home));
        assert!(!home.in_swipe_area(x, y));
    }

    #[test]
    fn contact_rows_and_hire_me() {
        let regions = compute(full(), &app_on(Section::Contact));
        assert_eq!(regions.contact_rows.len(), 4);
        let (x, y) = center(regions.contact_rows[2]);
        assert_eq!(regions.target_at(x, y), Some(Target::ContactRow(2)));
        let (x, y) = center(regions.hire_me.unwrap());
        assert_eq!(regions.target_at(x, y), Some(Target::HireMe));
    }

    #[test]
    fn tiny_area_does_not_panic() {
        for section in Section::ALL {
            let _ = compute(Rect::new(0, 0, 4, 3), &app_on(section));
            let _ = compute(Rect::new(0, 0, 0, 0), &app_on(section));
        }
    }
}
