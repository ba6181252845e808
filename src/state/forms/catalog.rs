//! The site's lead-capture forms

use super::field::FormField;
use super::form_state::FormValues;
use super::rules::{email, min_chars, not_blank, required, RuleSet};

pub const PROJECT_TYPES: &[&str] = &[
    "Website",
    "Web Application",
    "Mobile App",
    "AI/ML System",
    "SaaS Platform",
    "Admin Dashboard",
    "API Integration",
    "Other",
];

pub const BUDGETS: &[&str] = &[
    "< ₹50K",
    "₹50K–₹2L",
    "₹2L–₹5L",
    "₹5L–₹10L",
    "₹10L+",
    "Let's Discuss",
];

pub const TIMELINES: &[&str] = &[
    "< 1 Month",
    "1–2 Months",
    "2–3 Months",
    "3–6 Months",
    "6+ Months",
    "Flexible",
];

pub const ROLES: &[&str] = &[
    "Frontend Developer",
    "Backend Developer",
    "Full Stack Developer",
    "Mobile Developer",
    "AI/ML Engineer",
    "UI/UX Designer",
    "DevOps Engineer",
    "Cybersecurity Analyst",
];

pub const PARTNER_TYPES: &[&str] = &[
    "Referral Partners",
    "Internship Providers",
    "Technology Collaborators",
];

const CONTACT_FIELDS: &[FormField] = &[
    FormField::text("name", "Name"),
    FormField::text("company", "Company"),
    FormField::text("email", "Email"),
    FormField::choice("projectType", "Project Type", PROJECT_TYPES),
    FormField::choice("budget", "Budget Range", BUDGETS),
    FormField::choice("timeline", "Timeline", TIMELINES),
    FormField::multiline("message", "Message"),
];

const JOIN_FIELDS: &[FormField] = &[
    FormField::text("name", "Full Name"),
    FormField::text("email", "Email"),
    FormField::text("college", "College / University"),
    FormField::choice("role", "Specialization", ROLES),
    FormField::text("skills", "Primary Skills"),
    FormField::text("github", "GitHub"),
    FormField::text("linkedin", "LinkedIn"),
    FormField::multiline("message", "About You"),
];

const PARTNER_FIELDS: &[FormField] = &[
    FormField::text("company", "Company"),
    FormField::text("name", "Your Name"),
    FormField::text("email", "Business Email"),
    FormField::choice("type", "Partnership Type", PARTNER_TYPES),
    FormField::text("website", "Website"),
    FormField::multiline("details", "Opportunity Details"),
];

/// Which lead-capture form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    /// Project inquiry from a prospective client
    Contact,
    /// Developer network application
    Join,
    /// Partnership request
    Partner,
}

impl FormKind {
    pub fn fields(&self) -> &'static [FormField] {
        match self {
            Self::Contact => CONTACT_FIELDS,
            Self::Join => JOIN_FIELDS,
            Self::Partner => PARTNER_FIELDS,
        }
    }

    /// Every field, blank
    pub fn initial_values(&self) -> FormValues {
        self.fields()
            .iter()
            .map(|f| (f.name.to_string(), String::new()))
            .collect()
    }

    pub fn rules(&self) -> RuleSet {
        match self {
            Self::Contact => RuleSet::new()
                .rule("name", min_chars(2, "Your name is required."))
                .rule("email", email("Enter a valid email address."))
                .rule(
                    "message",
                    min_chars(20, "Please describe your project (min 20 chars)."),
                ),
            Self::Join => RuleSet::new()
                .rule("name", min_chars(2, "Full name is required."))
                .rule("email", email("Enter a valid email address."))
                .rule("role", required("Please select your specialization."))
                .rule("skills", not_blank("List your primary skills."))
                .rule(
                    "message",
                    min_chars(30, "Tell us more about yourself (min 30 chars)."),
                ),
            Self::Partner => RuleSet::new()
                .rule("company", not_blank("Company name is required."))
                .rule("name", min_chars(2, "Your name is required."))
                .rule("email", email("Enter a valid business email."))
                .rule("type", required("Please select a partnership type."))
                .rule(
                    "details",
                    min_chars(20, "Please describe the opportunity (min 20 chars)."),
                ),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Contact => "Start a Project",
            Self::Join => "Join the Network",
            Self::Partner => "Partner With Us",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Contact => "Send Inquiry",
            Self::Join => "Submit Application",
            Self::Partner => "Request Partnership",
        }
    }

    pub fn success_title(&self) -> &'static str {
        match self {
            Self::Contact => "Inquiry Received",
            Self::Join => "Application Submitted",
            Self::Partner => "Request Received",
        }
    }

    /// Follow-up text for the confirmation screen, addressed to `name`
    pub fn success_message(&self, name: &str) -> String {
        match self {
            Self::Contact => format!(
                "Thank you, {name}. We'll review your project and respond within 24 hours with a structured approach and proposal."
            ),
            Self::Join => format!(
                "Thanks, {name}. Our team reviews every application personally and will reach out about next steps."
            ),
            Self::Partner => format!(
                "Thank you, {name}. Our partnerships team will get back to you shortly."
            ),
        }
    }

    /// Label for the confirmation identifier
    pub fn receipt_label(&self) -> &'static str {
        match self {
            Self::Contact => "Ticket",
            Self::Join => "Application ID",
            Self::Partner => "Reference",
        }
    }
}
