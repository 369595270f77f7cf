//! Report formatting for the non-interactive commands.
//!
//! Pure functions: (data, OutputFormat) → String. No I/O.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::contact::contact_link;
use crate::types::{Category, Experience, OutputFormat, Profile};

/// Format skill categories.
pub fn format_skills(categories: &[Category], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(skills_human(categories)),
        OutputFormat::Json => to_json(&categories),
    }
}

/// Format the employment history.
pub fn format_experience(entries: &[Experience], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(experience_human(entries)),
        OutputFormat::Json => to_json(&entries),
    }
}

/// Format contact methods together with their resolved links.
pub fn format_contact(profile: &Profile, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(contact_human(profile)),
        OutputFormat::Json => to_json(&contact_rows(profile)),
    }
}

/// Case-insensitive category lookup by name.
pub fn find_category<'a>(categories: &'a [Category], name: &str) -> Option<&'a Category> {
    categories
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn skills_human(categories: &[Category]) -> String {
    let mut out = String::new();

    for category in categories {
        out.push_str(&format!(
            "=== {} {} ({} skills) ===\n",
            category.icon,
            category.name,
            category.skills.len()
        ));
        for skill in category.skills {
            out.push_str(&format!(
                "  {:<16} {:<13} {}\n",
                skill.name, skill.level, skill.description
            ));
        }
        out.push('\n');
    }

    let total: usize = categories.iter().map(|c| c.skills.len()).sum();
    out.push_str(&format!(
        "{} categories, {} skills\n",
        categories.len(),
        total
    ));
    out
}

fn experience_human(entries: &[Experience]) -> String {
    let mut out = String::new();

    for entry in entries {
        out.push_str(&format!("=== {} · {} ===\n", entry.title, entry.company));
        out.push_str(&format!("{}  |  {}\n", entry.period, entry.location));
        if let Some(project) = entry.project {
            out.push_str(&format!("Project: {}\n", project));
        }
        if let Some(impact) = entry.impact {
            out.push_str(&format!("Impact:  {}\n", impact));
        }
        for achievement in entry.achievements {
            out.push_str(&format!("  • {}\n", achievement));
        }
        out.push_str(&format!("  [{}]\n\n", entry.technologies.join(", ")));
    }

    out
}

fn contact_human(profile: &Profile) -> String {
    let mut out = format!("=== Contact {} ===\n", profile.name);
    for row in contact_rows(profile) {
        match row.link {
            Some(link) => out.push_str(&format!("  {:<9} {}  <{}>\n", row.label, row.value, link)),
            None => out.push_str(&format!("  {:<9} {}\n", row.label, row.value)),
        }
    }
    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

#[derive(Debug, Serialize)]
struct ContactRow {
    label: &'static str,
    value: &'static str,
    link: Option<String>,
}

fn contact_rows(profile: &Profile) -> Vec<ContactRow> {
    profile
        .contacts
        .iter()
        .map(|m| ContactRow {
            label: m.label,
            value: m.value,
            link: contact_link(m).map(|l| l.url),
        })
        .collect()
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize report to JSON")
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{CATEGORIES, EXPERIENCE, PROFILE};

    // --- Human format tests ---

    #[test]
    fn human_skills_lists_every_category() {
        let output = format_skills(CATEGORIES, OutputFormat::Human).unwrap();
        for category in CATEGORIES {
            assert!(output.contains(category.name), "missing {}", category.name);
        }
        assert!(output.contains("=== ⚙ Backend (6 skills) ==="));
        assert!(output.contains("Java"));
        assert!(output.contains("5 categories, 18 skills"));
    }

    #[test]
    fn human_skills_single_category() {
        let backend = find_category(CATEGORIES, "backend").unwrap();
        let output = format_skills(std::slice::from_ref(backend), OutputFormat::Human).unwrap();
        assert!(output.contains("Spring Boot"));
        assert!(!output.contains("PostgreSQL"));
        assert!(output.contains("1 categories, 6 skills"));
    }

    #[test]
    fn find_category_is_case_insensitive_and_trims() {
        assert_eq!(find_category(CATEGORIES, " DATABASES ").unwrap().name, "Databases");
        assert!(find_category(CATEGORIES, "Cooking").is_none());
    }

    #[test]
    fn human_experience_includes_project_and_impact() {
        let output = format_experience(EXPERIENCE, OutputFormat::Human).unwrap();
        assert!(output.contains("=== Associate Consultant · Infosys ==="));
        assert!(output.contains("Project: Danske Bank"));
        assert!(output.contains("Impact:  High"));
        assert!(output.contains("Impact:  Medium"));
        assert!(output.contains("  • Led migration to Java 21"));
    }

    #[test]
    fn human_contact_shows_links_except_location() {
        let output = format_contact(&PROFILE, OutputFormat::Human).unwrap();
        assert!(output.contains("<tel:+917036546590>"));
        assert!(output.contains("Bangalore, India\n"));
    }

    // --- JSON format tests ---

    #[test]
    fn json_skills_is_array_of_categories() {
        let output = format_skills(CATEGORIES, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 5);
        assert_eq!(parsed[0]["name"], "Backend");
        assert_eq!(parsed[0]["accent"]["from"], "#3B82F6");
        assert_eq!(parsed[0]["skills"][0]["level"], "Expert");
    }

    #[test]
    fn json_experience_has_nullable_project() {
        let output = format_experience(EXPERIENCE, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["company"], "Infosys");
        assert_eq!(parsed[0]["impact"], "High");
        assert!(parsed[2]["technologies"].is_array());
    }

    #[test]
    fn json_contact_location_link_is_null() {
        let output = format_contact(&PROFILE, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 4);
        assert!(rows[3]["link"].is_null());
        assert_eq!(rows[0]["link"], "mailto:yadanaparthivineethreddy@gmail.com");
    }
}
