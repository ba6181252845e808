//! Application state definitions

use super::forms::FormKind;
use super::models::Project;

/// Page of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    About,
    Services,
    Projects,
    Join,
    Partner,
    Contact,
}

impl Page {
    /// Pages in navigation order
    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::About,
        Page::Services,
        Page::Projects,
        Page::Join,
        Page::Partner,
        Page::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Services => "Services",
            Self::Projects => "Projects",
            Self::Join => "Join",
            Self::Partner => "Partner",
            Self::Contact => "Contact",
        }
    }

    /// Position in [`Page::ALL`]
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|p| p == self).unwrap_or(0)
    }

    /// Page at `index`, falling back to Home
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_default()
    }

    /// Page named `name` (case-insensitive), falling back to Home
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(name.trim()))
            .unwrap_or_default()
    }

    pub fn next(&self) -> Self {
        Self::from_index((self.index() + 1) % Self::ALL.len())
    }

    pub fn prev(&self) -> Self {
        Self::from_index((self.index() + Self::ALL.len() - 1) % Self::ALL.len())
    }

    /// Lead form hosted on this page, if any
    pub fn form_kind(&self) -> Option<FormKind> {
        match self {
            Self::Join => Some(FormKind::Join),
            Self::Partner => Some(FormKind::Partner),
            Self::Contact => Some(FormKind::Contact),
            _ => None,
        }
    }
}

/// Category filter choices on the projects page; the first shows everything
pub const PROJECT_CATEGORIES: &[&str] = &[
    "All",
    "FinTech",
    "HealthTech",
    "EdTech",
    "E-Commerce",
    "SaaS",
    "AI/ML",
];

/// Projects matching `category` ("All" keeps every project)
pub fn filter_projects<'a>(projects: &'a [Project], category: &str) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|p| category == PROJECT_CATEGORIES[0] || p.category == category)
        .collect()
}

/// Navigation and view state shared by every page
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub current_page: Page,
    /// Index into [`PROJECT_CATEGORIES`]
    pub project_filter: usize,
    pub scroll_offset: usize,
    /// One-line notice shown in the status bar
    pub status_message: Option<String>,
}

impl AppState {
    /// Switch page, resetting per-page view state
    pub fn navigate(&mut self, page: Page) {
        if self.current_page != page {
            self.current_page = page;
            self.scroll_offset = 0;
        }
    }

    pub fn project_category(&self) -> &'static str {
        PROJECT_CATEGORIES
            .get(self.project_filter)
            .copied()
            .unwrap_or(PROJECT_CATEGORIES[0])
    }

    pub fn next_project_filter(&mut self) {
        self.project_filter = (self.project_filter + 1) % PROJECT_CATEGORIES.len();
        self.scroll_offset = 0;
    }

    pub fn prev_project_filter(&mut self) {
        self.project_filter =
            (self.project_filter + PROJECT_CATEGORIES.len() - 1) % PROJECT_CATEGORIES.len();
        self.scroll_offset = 0;
    }

    /// Scroll down
    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    /// Scroll up
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, category: &str) -> Project {
        Project {
            id: id.to_string(),
            title: id.to_string(),
            category: category.to_string(),
            year: "2024".to_string(),
            status: "Live".to_string(),
            description: String::new(),
            impact: String::new(),
            tags: vec![],
            client: String::new(),
            duration: String::new(),
            team: 3,
        }
    }

    #[test]
    fn test_default_page_is_home() {
        assert_eq!(AppState::default().current_page, Page::Home);
    }

    #[test]
    fn test_page_from_name_falls_back_to_home() {
        assert_eq!(Page::from_name("projects"), Page::Projects);
        assert_eq!(Page::from_name(" Contact "), Page::Contact);
        assert_eq!(Page::from_name("pricing"), Page::Home);
        assert_eq!(Page::from_name(""), Page::Home);
    }

    #[test]
    fn test_page_from_index_out_of_range() {
        assert_eq!(Page::from_index(3), Page::Projects);
        assert_eq!(Page::from_index(42), Page::Home);
    }

    #[test]
    fn test_page_cycling_wraps() {
        assert_eq!(Page::Home.next(), Page::About);
        assert_eq!(Page::Contact.next(), Page::Home);
        assert_eq!(Page::Home.prev(), Page::Contact);
    }

    #[test]
    fn test_index_matches_all() {
        for (i, page) in Page::ALL.iter().enumerate() {
            assert_eq!(page.index(), i);
        }
    }

    #[test]
    fn test_form_pages() {
        assert_eq!(Page::Join.form_kind(), Some(FormKind::Join));
        assert_eq!(Page::Partner.form_kind(), Some(FormKind::Partner));
        assert_eq!(Page::Contact.form_kind(), Some(FormKind::Contact));
        assert!(Page::Home.form_kind().is_none());
        assert!(Page::Projects.form_kind().is_none());
    }

    #[test]
    fn test_filter_all_keeps_everything() {
        let projects = vec![project("a", "FinTech"), project("b", "SaaS")];
        assert_eq!(filter_projects(&projects, "All").len(), 2);
    }

    #[test]
    fn test_filter_by_category() {
        let projects = vec![
            project("a", "FinTech"),
            project("b", "SaaS"),
            project("c", "FinTech"),
        ];
        let ids: Vec<_> = filter_projects(&projects, "FinTech")
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert!(filter_projects(&projects, "EdTech").is_empty());
    }

    #[test]
    fn test_project_filter_cycles() {
        let mut state = AppState::default();
        assert_eq!(state.project_category(), "All");
        state.prev_project_filter();
        assert_eq!(state.project_category(), "AI/ML");
        state.next_project_filter();
        state.next_project_filter();
        assert_eq!(state.project_category(), "FinTech");
    }

    #[test]
    fn test_navigate_resets_scroll() {
        let mut state = AppState::default();
        state.scroll_down();
        state.scroll_down();
        state.navigate(Page::Home);
        assert_eq!(state.scroll_offset, 2);
        state.navigate(Page::About);
        assert_eq!(state.scroll_offset, 0);
        state.scroll_up();
        assert_eq!(state.scroll_offset, 0);
    }
}
