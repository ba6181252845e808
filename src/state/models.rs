//! Site content and submission records exchanged with the data provider

use serde::{Deserialize, Serialize};

/// Headline figure shown on the home page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// Service offering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub title: String,
    pub short_desc: String,
    pub full_desc: String,
    /// Technology stack, `" · "` separated
    pub stack: String,
    pub features: Vec<String>,
}

impl Service {
    /// First `n` entries of the technology stack
    pub fn stack_head(&self, n: usize) -> String {
        self.stack
            .split(" · ")
            .take(n)
            .collect::<Vec<_>>()
            .join(" · ")
    }
}

/// Delivered project in the portfolio
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: String,
    pub year: String,
    pub status: String,
    pub description: String,
    pub impact: String,
    pub tags: Vec<String>,
    pub client: String,
    pub duration: String,
    pub team: u32,
}

/// Core team member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub avatar: String,
    pub skills: Vec<String>,
}

/// Client testimonial
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub company: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub quote: String,
    pub initials: String,
}

/// Receipt for an accepted submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    /// Opaque provider-generated identifier (`TKT-…`, `APP-…`, `PTR-…`)
    #[serde(alias = "ticketId")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_service_uses_camel_case_keys() {
        let json = r#"{
            "id": "web",
            "title": "Website Development",
            "shortDesc": "Responsive sites",
            "fullDesc": "Responsive, high-performance websites",
            "stack": "React · Next.js · Node.js · PostgreSQL",
            "features": ["UI/UX Design"]
        }"#;
        let service: Service = serde_json::from_str(json).unwrap();
        assert_eq!(service.short_desc, "Responsive sites");
        assert_eq!(service.features, vec!["UI/UX Design".to_string()]);
    }

    #[test]
    fn test_stack_head_truncates() {
        let service = Service {
            id: "web".to_string(),
            title: "Web".to_string(),
            short_desc: String::new(),
            full_desc: String::new(),
            stack: "React · Next.js · Node.js · PostgreSQL".to_string(),
            features: vec![],
        };
        assert_eq!(service.stack_head(3), "React · Next.js · Node.js");
        assert_eq!(service.stack_head(10), service.stack);
    }

    #[test]
    fn test_testimonial_type_key() {
        let json = r#"{"name":"A","company":"B","type":"FinTech Platform","quote":"Q","initials":"AB"}"#;
        let testimonial: Testimonial = serde_json::from_str(json).unwrap();
        assert_eq!(testimonial.kind, "FinTech Platform");
    }

    #[test]
    fn test_confirmation_accepts_ticket_id() {
        let parsed: Confirmation = serde_json::from_str(r#"{"ticketId":"TKT-AB12CD"}"#).unwrap();
        assert_eq!(parsed.id, "TKT-AB12CD");
        assert!(parsed.status.is_none());
    }

    #[test]
    fn test_confirmation_with_status() {
        let parsed: Confirmation =
            serde_json::from_str(r#"{"id":"APP-AB12CD","status":"pending"}"#).unwrap();
        assert_eq!(
            parsed,
            Confirmation {
                id: "APP-AB12CD".to_string(),
                status: Some("pending".to_string()),
            }
        );
    }
}
