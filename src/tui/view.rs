//! Pure rendering: map App state to ratatui widget trees.
//!
//! Each section has a dedicated render function. The main `render()`
//! computes the frame geometry once via `layout::compute` and dispatches
//! on the current section. The only effect is Frame::render_widget().

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

use crate::types::{Category, Skill};

use super::layout::{self, Regions, SkillsRegions};
use super::state::{App, Section, Target};
use super::theme::{accent_strong, accent_style, Theme};

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the whole frame.
pub fn render(app: &App, frame: &mut Frame) {
    let regions = layout::compute(frame.area(), app);
    let theme = app.theme.theme();

    render_title(app, &theme, &regions, frame);
    render_tabs(app, &theme, &regions, frame);
    frame.render_widget(render_help(app, &theme), regions.help);

    match app.section {
        Section::Home => render_home(app, &theme, &regions, frame),
        Section::About => render_about(app, &theme, &regions, frame),
        Section::Skills => {
            if let Some(skills) = &regions.skills {
                render_skills(app, &theme, skills, frame);
            }
        }
        Section::Experience => {
            if let Some(text) = scroll_text(app, &theme) {
                frame.render_widget(text.scroll((app.scroll, 0)), regions.body);
            }
        }
        Section::Contact => render_contact(app, &theme, &regions, frame),
    }
}

/// Largest useful `App::scroll` for the current section.
///
/// Counts rows after wrapping at the body width of `App::viewport`, minus
/// the rows the body shows at once. Zero for sections that do not scroll.
pub fn max_scroll(app: &App) -> u16 {
    let Some(text) = scroll_text(app, &app.theme.theme()) else {
        return 0;
    };
    let body = layout::compute(app.viewport, app).body;
    let rows = text.line_count(body.width);
    u16::try_from(rows.saturating_sub(usize::from(body.height))).unwrap_or(u16::MAX)
}

/// Wrapped body text of the scrollable sections, shared by rendering and
/// the scroll bound so the two cannot disagree.
fn scroll_text(app: &App, theme: &Theme) -> Option<Paragraph<'static>> {
    let lines = match app.section {
        Section::About => about_lines(app, theme),
        Section::Experience => experience_lines(app, theme),
        Section::Home | Section::Skills | Section::Contact => return None,
    };
    Some(Paragraph::new(lines).wrap(Wrap { trim: false }))
}

// ============================================================================
// CHROME
// ============================================================================

fn render_title(app: &App, theme: &Theme, regions: &Regions, frame: &mut Frame) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(format!(" {}", app.profile.name), theme.title()),
        Span::styled("  portfolio", theme.dim()),
    ]));
    frame.render_widget(title, regions.title);

    let toggle_style = hover_style(app, Target::ThemeToggle, theme.interactive(), theme);
    frame.render_widget(
        Paragraph::new(Span::styled(app.theme.label(), toggle_style)),
        regions.theme_toggle,
    );
}

fn render_tabs(app: &App, theme: &Theme, regions: &Regions, frame: &mut Frame) {
    for (section, rect) in &regions.tabs {
        let style = if *section == app.section {
            theme.selected()
        } else {
            hover_style(app, Target::Tab(*section), theme.dim(), theme)
        };
        frame.render_widget(
            Paragraph::new(Span::styled(format!(" {} ", section.title()), style)),
            *rect,
        );
    }
}

/// Help line showing available keybindings for the current section.
fn render_help(app: &App, theme: &Theme) -> Paragraph<'static> {
    if let Some(status) = &app.status {
        let style = Style::new().fg(theme.warning);
        return Paragraph::new(Span::styled(format!(" {}", status), style));
    }

    let help_text = match app.section {
        Section::Home => {
            "[Tab] sections  [Enter/m] hire me  [r] resume  [t] theme  [q] quit".to_string()
        }
        Section::About => {
            "[j/k] scroll  [Enter/r] resume  [m] hire me  [Tab] sections  [q] quit".to_string()
        }
        // Swipe distance is in columns; name the flag that tunes it
        Section::Skills => format!(
            "[←/→] category  [1-9] jump  [j/k] focus  [Esc] blur  \
             drag {} cols: swipe (--swipe-threshold)  [q] quit",
            app.carousel.tuning().swipe_threshold
        ),
        Section::Experience => "[j/k] scroll  [Tab] sections  [t] theme  [q] quit".to_string(),
        Section::Contact => {
            "[j/k] move  [Enter] open  [m] hire me  [Tab] sections  [q] quit".to_string()
        }
    };

    Paragraph::new(Span::styled(format!(" {}", help_text), theme.help()))
}

/// `base`, or the interactive highlight while the pointer is over `target`.
fn hover_style(app: &App, target: Target, base: Style, theme: &Theme) -> Style {
    if app.hover == Some(target) {
        theme.interactive().add_modifier(Modifier::UNDERLINED)
    } else {
        base
    }
}

fn render_button(
    app: &App,
    theme: &Theme,
    target: Target,
    label: &str,
    area: Rect,
    frame: &mut Frame,
) {
    let style = if app.hover == Some(target) {
        theme.selected()
    } else {
        theme.button()
    };
    let button = Paragraph::new(Span::styled(label.to_string(), style))
        .alignment(Alignment::Center)
        .block(Block::bordered().border_style(style));
    frame.render_widget(button, area);
}

// ============================================================================
// SECTION: HOME
// ============================================================================

fn render_home(app: &App, theme: &Theme, regions: &Regions, frame: &mut Frame) {
    let profile = app.profile;

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("Hi, I'm", theme.dim())),
        Line::from(Span::styled(profile.name, theme.title())),
        Line::from(""),
    ];
    for part in profile.headline {
        lines.push(Line::from(Span::styled(*part, theme.important())));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("> ", theme.dim()),
        Span::styled(app.current_role(), theme.interactive()),
        Span::styled("▌", theme.dim()),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(profile.tech_line, theme.dim())));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, regions.body);

    if let Some(rect) = regions.hire_me {
        render_button(app, theme, Target::HireMe, "Hire Me", rect, frame);
    }
}

// ============================================================================
// SECTION: ABOUT
// ============================================================================

fn about_lines(app: &App, theme: &Theme) -> Vec<Line<'static>> {
    let profile = app.profile;

    let mut lines = vec![
        Line::from(Span::styled("  About Me", theme.title())),
        Line::from(Span::styled("  ════════", theme.dim())),
        Line::from(""),
    ];

    for paragraph in profile.summary {
        lines.push(Line::from(Span::styled(format!("  {}", paragraph), theme.text())));
        lines.push(Line::from(""));
    }

    for highlight in profile.highlights {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}  ", highlight.icon), theme.interactive()),
            Span::styled(format!("{:<14}", highlight.label), theme.dim()),
            Span::styled(highlight.value, theme.important()),
        ]));
    }

    lines.push(Line::from(""));
    for method in profile.contacts {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<10}", method.label), theme.dim()),
            Span::styled(method.value, theme.text()),
        ]));
    }

    lines
}

fn render_about(app: &App, theme: &Theme, regions: &Regions, frame: &mut Frame) {
    if let Some(text) = scroll_text(app, theme) {
        frame.render_widget(text.scroll((app.scroll, 0)), regions.body);
    }

    if let Some(rect) = regions.resume {
        render_button(app, theme, Target::Resume, "Resume", rect, frame);
    }
}

// ============================================================================
// SECTION: SKILLS
// ============================================================================

fn render_skills(app: &App, theme: &Theme, regions: &SkillsRegions, frame: &mut Frame) {
    let Some(category) = app.carousel.current_category() else {
        let empty = Paragraph::new(Span::styled("  (no skills)", theme.dim()))
            .block(Block::bordered().border_style(theme.dim()));
        frame.render_widget(empty, regions.card);
        return;
    };

    frame.render_widget(
        Block::bordered().border_style(accent_style(category.accent)),
        regions.card,
    );

    render_card_header(app, theme, category, regions, frame);

    if let (Some(rect), Some(skill)) = (regions.detail, app.carousel.selected_skill()) {
        render_detail(theme, category, skill, rect, frame);
    }

    let selected = app.carousel.selected_ref().map(|r| r.item);
    for (i, (rect, skill)) in regions.tiles.iter().zip(category.skills).enumerate() {
        render_tile(app, theme, category, skill, i, selected == Some(i), *rect, frame);
    }

    let (position, total) = app.carousel.position();
    frame.render_widget(
        Paragraph::new(Span::styled(
            "‹ Previous",
            hover_style(app, Target::Prev, theme.interactive(), theme),
        )),
        regions.prev,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(format!("{} of {}", position, total), theme.dim()))
            .alignment(Alignment::Center),
        regions.position,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Next ›",
            hover_style(app, Target::Next, theme.interactive(), theme),
        ))
        .alignment(Alignment::Right),
        regions.next,
    );

    if let Some(summary) = regions.summary {
        render_summary(app, theme, regions, summary, frame);
    }
}

fn render_card_header(
    app: &App,
    theme: &Theme,
    category: &Category,
    regions: &SkillsRegions,
    frame: &mut Frame,
) {
    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                format!("{} {}", category.icon, category.name),
                accent_strong(category.accent),
            ),
            Span::styled(format!("  {} skills", category.skills.len()), theme.dim()),
        ]),
        Line::from(Span::styled("hover or focus a skill for details", theme.dim())),
    ]);
    frame.render_widget(header, regions.header);

    // Dots draw over the right end of the header row
    for (i, rect) in regions.dots.iter().enumerate() {
        let (symbol, style) = if i == app.carousel.index() {
            ("●", accent_strong(category.accent))
        } else {
            ("○", hover_style(app, Target::Dot(i), theme.dim(), theme))
        };
        frame.render_widget(Paragraph::new(Span::styled(symbol, style)), *rect);
    }
}

fn render_detail(theme: &Theme, category: &Category, skill: &Skill, area: Rect, frame: &mut Frame) {
    let panel = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(skill.name, theme.important()),
            Span::raw("  "),
            Span::styled(format!("[{}]", skill.level), theme.level(skill.level)),
        ]),
        Line::from(Span::styled(skill.description, theme.text())),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::bordered().border_style(accent_strong(category.accent)));
    frame.render_widget(panel, area);
}

#[allow(clippy::too_many_arguments)]
fn render_tile(
    app: &App,
    theme: &Theme,
    category: &Category,
    skill: &Skill,
    index: usize,
    is_selected: bool,
    area: Rect,
    frame: &mut Frame,
) {
    let border = if is_selected {
        accent_strong(category.accent)
    } else if app.focus == Some(index) || app.hover == Some(Target::Tile(index)) {
        theme.interactive()
    } else {
        theme.dim()
    };

    let tile = Paragraph::new(vec![
        Line::from(Span::styled(skill.name, theme.important())),
        Line::from(Span::styled(skill.level.as_str(), theme.level(skill.level))),
    ])
    .block(Block::bordered().border_style(border));
    frame.render_widget(tile, area);
}

fn render_summary(
    app: &App,
    theme: &Theme,
    regions: &SkillsRegions,
    area: Rect,
    frame: &mut Frame,
) {
    frame.render_widget(
        Block::bordered()
            .title(" Categories ")
            .border_style(theme.dim()),
        area,
    );

    let categories = app.carousel.categories();
    for (i, (rect, category)) in regions.summary_rows.iter().zip(categories).enumerate() {
        let style = if i == app.carousel.index() {
            theme.selected()
        } else {
            hover_style(app, Target::SummaryRow(i), theme.text(), theme)
        };
        let row = Line::from(vec![
            Span::styled(format!(" {} {}", category.icon, category.name), style),
            Span::styled(format!("  {}", category.skills.len()), theme.dim()),
        ]);
        frame.render_widget(Paragraph::new(row), *rect);
    }
}

// ============================================================================
// SECTION: EXPERIENCE
// ============================================================================

fn experience_lines(app: &App, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled("  Professional Experience", theme.title())),
        Line::from(""),
    ];

    for entry in app.profile.experience {
        let mut heading = vec![
            Span::styled(format!("  {}", entry.title), theme.important()),
            Span::styled(format!(" · {}", entry.company), theme.interactive()),
        ];
        if let Some(impact) = entry.impact {
            heading.push(Span::styled(format!("  [{} Impact]", impact), theme.impact(impact)));
        }
        lines.push(Line::from(heading));
        lines.push(Line::from(Span::styled(
            format!("  {}  |  {}", entry.period, entry.location),
            theme.dim(),
        )));
        if let Some(project) = entry.project {
            lines.push(Line::from(vec![
                Span::styled("  Project: ", theme.dim()),
                Span::styled(project, theme.text()),
            ]));
        }
        for achievement in entry.achievements {
            lines.push(Line::from(Span::styled(format!("    • {}", achievement), theme.text())));
        }
        lines.push(Line::from(Span::styled(
            format!("    {}", entry.technologies.join(" · ")),
            theme.dim(),
        )));
        lines.push(Line::from(""));
    }

    lines
}

// ============================================================================
// SECTION: CONTACT
// ============================================================================

fn render_contact(app: &App, theme: &Theme, regions: &Regions, frame: &mut Frame) {
    frame.render_widget(
        Paragraph::new(Span::styled("  Get In Touch", theme.title())),
        regions.body,
    );

    for (i, (rect, method)) in regions
        .contact_rows
        .iter()
        .zip(app.profile.contacts)
        .enumerate()
    {
        let is_cursor = i == app.contact_cursor;
        let marker = if is_cursor { "  > " } else { "    " };
        let action = method.action.map(|a| format!("  [{}]", a)).unwrap_or_default();
        let line = Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("{:<10}", method.label), theme.dim()),
            Span::styled(method.value, theme.text()),
            Span::styled(action, theme.interactive()),
        ]);
        let line = if is_cursor {
            line.style(theme.cursor())
        } else if app.hover == Some(Target::ContactRow(i)) {
            line.style(Style::new().add_modifier(Modifier::UNDERLINED))
        } else {
            line
        };
        frame.render_widget(Paragraph::new(line), *rect);
    }

    if let Some(rect) = regions.hire_me {
        render_button(app, theme, Target::HireMe, "Hire Me", rect, frame);
    }
}

// ============================================================================
// TESTS
// ============================================================================
