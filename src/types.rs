//! Domain types for folio.
//!
//! Everything here is immutable, compile-time data. The static tables in
//! `profile` are built from these types; the carousel and the renderers
//! only ever borrow them.

use std::fmt;

use serde::{Serialize, Serializer};

// ============================================================================
// PRIMITIVES
// ============================================================================

/// A 24-bit sRGB colour, serialized as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Returns the colour as an uppercase `#RRGGBB` string.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Two-stop gradient identifying a category visually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Accent {
    pub from: Rgb,
    pub to: Rgb,
}

// ============================================================================
// ENUMS
// ============================================================================

/// Proficiency level of a skill. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Level {
    Expert,
    Advanced,
    Intermediate,
    Beginner,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Expert => "Expert",
            Level::Advanced => "Advanced",
            Level::Intermediate => "Intermediate",
            Level::Beginner => "Beginner",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much a role moved the needle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Impact::High => "High",
            Impact::Medium => "Medium",
            Impact::Low => "Low",
        };
        f.write_str(s)
    }
}

/// Kind of contact channel. Determines how the value becomes a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContactKind {
    Email,
    Phone,
    LinkedIn,
    Location,
}

// ============================================================================
// STRUCTS
// ============================================================================

/// A single skill entry. Name is unique within its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub level: Level,
    pub description: &'static str,
}

/// A named group of skills with display metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Unique display key.
    pub name: &'static str,
    pub accent: Accent,
    pub icon: &'static str,
    pub skills: &'static [Skill],
}

/// One position in the employment history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Experience {
    pub period: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub project: Option<&'static str>,
    pub achievements: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub impact: Option<Impact>,
}

/// A way to reach the portfolio owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactMethod {
    pub kind: ContactKind,
    pub label: &'static str,
    pub value: &'static str,
    /// Call-to-action text; None when the entry is informational only.
    pub action: Option<&'static str>,
}

/// A headline number on the about section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
}

/// Everything the portfolio renders, in one borrowable bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static [&'static str],
    pub tech_line: &'static str,
    pub roles: &'static [&'static str],
    pub summary: &'static [&'static str],
    pub highlights: &'static [Highlight],
    pub email: &'static str,
    pub resume_url: &'static str,
    pub site_url: &'static str,
    pub contacts: &'static [ContactMethod],
    pub experience: &'static [Experience],
    pub categories: &'static [Category],
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for non-interactive reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

// ============================================================================
// TESTS
// ============================================================================
