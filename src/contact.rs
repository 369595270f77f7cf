//! Contact link composition.
//!
//! Pure string building: mailto/tel/https targets for the contact methods,
//! the pre-filled "Hire Me" email, and the resume link. Opening a link is
//! an effect and lives in the TUI run loop and the CLI.

use crate::types::{ContactKind, ContactMethod, Profile};

/// Subject line of the hire-me email.
pub const HIRE_ME_SUBJECT: &str = "Hiring Inquiry - VINEETH REDDY YADANAPARTHI";

/// Body template of the hire-me email. Placeholders are for the sender.
pub const HIRE_ME_BODY: &str = "Hi Vineeth,

I came across your portfolio and I'd like to discuss potential opportunities.

Best regards,
[Your Name]
[Company]
[Role]";

/// A resolved, openable link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Short human label for status messages.
    pub label: String,
    pub url: String,
}

/// Build a `mailto:` URL with percent-encoded subject and body.
pub fn mailto(address: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        address,
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

/// The pre-filled hiring inquiry.
pub fn hire_me(profile: &Profile) -> Link {
    Link {
        label: "Hire Me".to_string(),
        url: mailto(profile.email, HIRE_ME_SUBJECT, HIRE_ME_BODY),
    }
}

pub fn resume(profile: &Profile) -> Link {
    Link {
        label: "Resume".to_string(),
        url: profile.resume_url.to_string(),
    }
}

/// Link target for a contact method. None for informational entries.
pub fn contact_link(method: &ContactMethod) -> Option<Link> {
    let url = match method.kind {
        ContactKind::Email => format!("mailto:{}", method.value),
        ContactKind::Phone => {
            let digits: String = method
                .value
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '+')
                .collect();
            format!("tel:{}", digits)
        }
        ContactKind::LinkedIn => format!("https://{}", method.value),
        ContactKind::Location => return None,
    };

    Some(Link {
        label: method.label.to_string(),
        url,
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{CONTACTS, PROFILE};

    fn contact(kind: ContactKind) -> &'static ContactMethod {
        CONTACTS.iter().find(|c| c.kind == kind).unwrap()
    }

    #[test]
    fn mailto_percent_encodes_subject_and_body() {
        let url = mailto("a@b.c", "Hi there", "line1\nline2, ok");
        assert_eq!(url, "mailto:a@b.c?subject=Hi%20there&body=line1%0Aline2%2C%20ok");
    }

    #[test]
    fn hire_me_targets_profile_email() {
        let link = hire_me(&PROFILE);
        assert!(link.url.starts_with("mailto:yadanaparthivineethreddy@gmail.com?subject="));
        assert!(link.url.contains("subject=Hiring%20Inquiry%20-%20VINEETH%20REDDY%20YADANAPARTHI"));
        assert!(link.url.contains("&body=Hi%20Vineeth%2C%0A%0A"));
        assert!(!link.url.contains(' '));
        assert!(!link.url.contains('\n'));
    }

    #[test]
    fn phone_link_strips_spaces() {
        let link = contact_link(contact(ContactKind::Phone)).unwrap();
        assert_eq!(link.url, "tel:+917036546590");
    }

    #[test]
    fn email_and_linkedin_links() {
        let email = contact_link(contact(ContactKind::Email)).unwrap();
        assert_eq!(email.url, "mailto:yadanaparthivineethreddy@gmail.com");

        let linkedin = contact_link(contact(ContactKind::LinkedIn)).unwrap();
        assert_eq!(linkedin.url, "https://linkedin.com/in/vineeth-reddy-y");
        assert_eq!(linkedin.label, "LinkedIn");
    }

    #[test]
    fn location_has_no_link() {
        assert!(contact_link(contact(ContactKind::Location)).is_none());
    }

    #[test]
    fn resume_points_at_pdf() {
        assert!(resume(&PROFILE).url.ends_with(".pdf"));
    }
}
