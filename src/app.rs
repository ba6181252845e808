//! Application state and core logic

use crate::config::SiteConfig;
use crate::state::site;
use crate::state::{
    AppState, FetchController, FormKind, FormState, Page, Project, Service, SharedProvider, Stat,
    Submission, TeamMember, Testimonial,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Controllers owned by the page on screen.
///
/// Replacing the view drops its controllers, so results of calls still in
/// flight for the previous page are discarded.
pub enum PageView {
    Home {
        stats: FetchController<Vec<Stat>>,
        services: FetchController<Vec<Service>>,
        projects: FetchController<Vec<Project>>,
    },
    About {
        team: FetchController<Vec<TeamMember>>,
        testimonials: FetchController<Vec<Testimonial>>,
    },
    Services(FetchController<Vec<Service>>),
    Projects(FetchController<Vec<Project>>),
    Form(FormPage),
}

/// A lead form together with its submission
pub struct FormPage {
    pub form: FormState,
    pub submission: Submission,
}

impl FormPage {
    fn new(kind: FormKind, provider: &SharedProvider) -> Self {
        Self {
            form: FormState::new(kind),
            submission: site::submission(kind, provider),
        }
    }

    /// Confirmation id once the submission succeeded
    pub fn confirmation_id(&self) -> Option<String> {
        self.submission
            .response()
            .and_then(|response| response.data)
            .map(|confirmation| confirmation.id)
    }

    /// Validate and, when valid and idle, submit the current values
    fn submit(&mut self) -> Option<String> {
        if self.submission.is_pending() {
            return None;
        }
        if !self.form.validate() {
            return Some("Please fix the highlighted fields.".to_string());
        }
        tracing::info!(form = ?self.form.kind, "submitting form");
        drop(self.submission.submit(self.form.payload()));
        None
    }

    /// Clear the form and the submission outcome
    fn reset(&mut self) {
        self.form.reset();
        self.submission.reset();
    }
}

impl PageView {
    /// Build the controllers for `page`; fetches start immediately
    pub fn mount(page: Page, provider: &SharedProvider) -> Self {
        if let Some(kind) = page.form_kind() {
            return Self::Form(FormPage::new(kind, provider));
        }
        match page {
            Page::About => Self::About {
                team: site::team(provider),
                testimonials: site::testimonials(provider),
            },
            Page::Services => Self::Services(site::services(provider)),
            Page::Projects => Self::Projects(site::projects(provider)),
            _ => Self::Home {
                stats: site::stats(provider),
                services: site::services(provider),
                projects: site::projects(provider),
            },
        }
    }

    /// Re-run every fetch on this page that failed; returns how many were retried
    pub fn retry_failed(&self) -> usize {
        fn retry<T: Send + 'static>(controller: &FetchController<T>) -> usize {
            if controller.error().is_some() {
                drop(controller.refetch());
                1
            } else {
                0
            }
        }

        match self {
            Self::Home {
                stats,
                services,
                projects,
            } => retry(stats) + retry(services) + retry(projects),
            Self::About { team, testimonials } => retry(team) + retry(testimonials),
            Self::Services(services) => retry(services),
            Self::Projects(projects) => retry(projects),
            Self::Form(_) => 0,
        }
    }

    pub fn form(&self) -> Option<&FormPage> {
        match self {
            Self::Form(page) => Some(page),
            _ => None,
        }
    }

    fn form_mut(&mut self) -> Option<&mut FormPage> {
        match self {
            Self::Form(page) => Some(page),
            _ => None,
        }
    }
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    pub config: SiteConfig,
    /// Controllers of the page on screen
    pub view: PageView,
    provider: SharedProvider,
    /// Whether the app should quit
    quit: bool,
    /// Copy feedback message
    pub copy_message: Option<String>,
}

impl App {
    /// Create a new App using the provider the configuration selects
    pub fn new(config: SiteConfig) -> Result<Self> {
        let provider = config.build_provider()?;
        Ok(Self::with_provider(config, provider))
    }

    pub fn with_provider(config: SiteConfig, provider: SharedProvider) -> Self {
        let mut state = AppState::default();
        if let Some(name) = &config.start_page {
            state.navigate(Page::from_name(name));
        }
        let view = PageView::mount(state.current_page, &provider);
        Self {
            state,
            config,
            view,
            provider,
            quit: false,
            copy_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Switch to `page`, mounting fresh controllers
    pub fn navigate(&mut self, page: Page) {
        if self.state.current_page == page {
            return;
        }
        tracing::debug!(from = ?self.state.current_page, to = ?page, "navigate");
        self.state.navigate(page);
        self.view = PageView::mount(page, &self.provider);
    }

    /// True when keystrokes go into a form field rather than to shortcuts
    fn is_typing(&self) -> bool {
        self.view.form().is_some_and(|page| {
            !page.submission.is_success()
                && page
                    .form
                    .active_field()
                    .is_some_and(|field| !field.is_choice())
        })
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Clear any status messages on key press
        self.copy_message = None;
        self.state.status_message = None;

        match key.code {
            KeyCode::Tab if self.view.form().is_none() => {
                self.navigate(self.state.current_page.next());
                return Ok(());
            }
            KeyCode::BackTab if self.view.form().is_none() => {
                self.navigate(self.state.current_page.prev());
                return Ok(());
            }
            KeyCode::Char(c @ '1'..='7') if !self.is_typing() => {
                let index = c as usize - '1' as usize;
                self.navigate(Page::from_index(index));
                return Ok(());
            }
            _ => {}
        }

        if self.view.form().is_some() {
            self.handle_form_key(key)
        } else {
            self.handle_content_key(key);
            Ok(())
        }
    }

    fn handle_content_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Char('r') => {
                if self.view.retry_failed() > 0 {
                    self.state.status_message = Some("Retrying...".to_string());
                }
            }
            KeyCode::Down | KeyCode::Char('j') => self.state.scroll_down(),
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_up(),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('f')
                if self.state.current_page == Page::Projects =>
            {
                self.state.next_project_filter();
            }
            KeyCode::Left | KeyCode::Char('h') if self.state.current_page == Page::Projects => {
                self.state.prev_project_filter();
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let Some(page) = self.view.form_mut() else {
            return Ok(());
        };

        // Confirmation screen
        if page.submission.is_success() {
            match key.code {
                KeyCode::Char('y') => {
                    if let Some(id) = page.confirmation_id() {
                        self.copy_confirmation(&id);
                    }
                }
                KeyCode::Char('n') | KeyCode::Enter => page.reset(),
                KeyCode::Esc => self.navigate(Page::Home),
                _ => {}
            }
            return Ok(());
        }

        // Failure banner
        if page.submission.error().is_some() && key.code == KeyCode::Esc {
            page.submission.reset();
            return Ok(());
        }

        let on_submit_row = page.form.is_submit_row_active();
        let on_choice = page.form.active_field().is_some_and(|f| f.is_choice());
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Tab | KeyCode::Down => page.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => page.form.prev_field(),
            KeyCode::Char('s') if ctrl => {
                self.state.status_message = page.submit();
            }
            KeyCode::Enter if on_submit_row => {
                self.state.status_message = page.submit();
            }
            KeyCode::Enter if page.form.is_active_field_multiline() => page.form.push_newline(),
            KeyCode::Enter => page.form.next_field(),
            KeyCode::Left if on_choice => page.form.cycle_choice(false),
            KeyCode::Right | KeyCode::Char(' ') if on_choice => page.form.cycle_choice(true),
            KeyCode::Backspace => page.form.pop_char(),
            KeyCode::Esc => self.navigate(Page::Home),
            KeyCode::Char(c) if !ctrl => page.form.push_char(c),
            _ => {}
        }
        Ok(())
    }

    fn copy_confirmation(&mut self, id: &str) {
        match self.copy_to_clipboard(id) {
            Ok(()) => self.copy_message = Some(format!("Copied {id}")),
            Err(err) => {
                tracing::warn!(error = %err, "clipboard unavailable");
                self.copy_message = Some(format!("Could not copy: {err}"));
            }
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{ApiResponse, FixtureProvider, MockDataProvider};
    use crate::state::{Confirmation, FetchState, MutationState};
    use std::sync::Arc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn fixture_app() -> App {
        App::with_provider(
            SiteConfig::default(),
            Arc::new(FixtureProvider::instant()),
        )
    }

    async fn until(mut done: impl FnMut() -> bool) {
        for _ in 0..100 {
            if done() {
                return;
            }
            tokio::task::yield_now().await;
        }
    }

    fn fill_contact(app: &mut App) {
        let page = app.view.form_mut().unwrap();
        for (field, value) in [
            ("name", "Asha"),
            ("email", "asha@finflow.in"),
            ("message", "We need a payments dashboard built."),
        ] {
            page.form.controller.handle_change(field, value);
        }
        let submit_row = page.form.fields().len();
        page.form.set_active_field(submit_row);
    }

    #[tokio::test]
    async fn test_starts_on_home_with_fetches_running() {
        let app = fixture_app();
        assert_eq!(app.state.current_page, Page::Home);
        assert!(matches!(app.view, PageView::Home { .. }));
        assert!(!app.should_quit());
    }

    #[tokio::test]
    async fn test_start_page_from_config() {
        let open = |name: &str| {
            let config = SiteConfig {
                start_page: Some(name.to_string()),
                ..Default::default()
            };
            App::with_provider(config, Arc::new(FixtureProvider::instant()))
        };

        let app = open("Contact");
        assert_eq!(app.state.current_page, Page::Contact);
        assert!(app.view.form().is_some());

        let app = open("pricing");
        assert_eq!(app.state.current_page, Page::Home);
        assert!(matches!(app.view, PageView::Home { .. }));
    }

    #[tokio::test]
    async fn test_number_keys_navigate() {
        let mut app = fixture_app();
        app.handle_key(key(KeyCode::Char('4'))).unwrap();
        assert_eq!(app.state.current_page, Page::Projects);
        assert!(matches!(app.view, PageView::Projects(_)));

        app.handle_key(key(KeyCode::Char('2'))).unwrap();
        assert!(matches!(app.view, PageView::About { .. }));
    }

    #[tokio::test]
    async fn test_tab_cycles_pages() {
        let mut app = fixture_app();
        app.handle_key(key(KeyCode::Tab)).unwrap();
        assert_eq!(app.state.current_page, Page::About);
        app.handle_key(key(KeyCode::BackTab)).unwrap();
        app.handle_key(key(KeyCode::BackTab)).unwrap();
        assert_eq!(app.state.current_page, Page::Contact);
        assert!(app.view.form().is_some());

        // inside a form Tab moves between fields and Esc leaves the page
        app.handle_key(key(KeyCode::Tab)).unwrap();
        assert_eq!(app.state.current_page, Page::Contact);
        assert_eq!(app.view.form().unwrap().form.active_field_index, 1);
        app.handle_key(key(KeyCode::Esc)).unwrap();
        assert_eq!(app.state.current_page, Page::Home);
        assert!(!app.should_quit());
    }

    #[tokio::test]
    async fn test_digits_type_into_focused_field() {
        let mut app = fixture_app();
        app.navigate(Page::Contact);
        app.handle_key(key(KeyCode::Char('3'))).unwrap();
        assert_eq!(app.state.current_page, Page::Contact);
        let page = app.view.form().unwrap();
        assert_eq!(page.form.controller.value("name"), "3");
    }

    #[tokio::test]
    async fn test_project_filter_keys() {
        let mut app = fixture_app();
        app.navigate(Page::Projects);
        app.handle_key(key(KeyCode::Right)).unwrap();
        assert_eq!(app.state.project_category(), "FinTech");
        app.handle_key(key(KeyCode::Left)).unwrap();
        assert_eq!(app.state.project_category(), "All");
    }

    #[tokio::test]
    async fn test_retry_refetches_failed_page() {
        let mut mock = MockDataProvider::new();
        let mut calls = 0;
        // home and the services page each fetch once before the retry
        mock.expect_get_services().times(3).returning(move || {
            calls += 1;
            if calls <= 2 {
                Ok(ApiResponse::failure("Service catalogue unavailable."))
            } else {
                Ok(ApiResponse::ok(vec![]))
            }
        });
        mock.expect_get_stats().returning(|| Ok(ApiResponse::ok(vec![])));
        mock.expect_get_projects().returning(|| Ok(ApiResponse::ok(vec![])));

        let mut app = App::with_provider(SiteConfig::default(), Arc::new(mock));
        app.navigate(Page::Services);
        let PageView::Services(services) = &app.view else {
            panic!("services page not mounted");
        };
        until(|| !services.is_loading()).await;
        assert_eq!(
            services.error().as_deref(),
            Some("Service catalogue unavailable.")
        );

        app.handle_key(key(KeyCode::Char('r'))).unwrap();
        assert_eq!(app.state.status_message.as_deref(), Some("Retrying..."));
        let PageView::Services(services) = &app.view else {
            panic!("services page not mounted");
        };
        until(|| !services.is_loading()).await;
        assert_eq!(services.state(), FetchState::Success(vec![]));
    }

    #[tokio::test]
    async fn test_invalid_form_is_not_submitted() {
        let mut mock = MockDataProvider::new();
        mock.expect_get_stats().returning(|| Ok(ApiResponse::ok(vec![])));
        mock.expect_get_services().returning(|| Ok(ApiResponse::ok(vec![])));
        mock.expect_get_projects().returning(|| Ok(ApiResponse::ok(vec![])));
        mock.expect_submit_contact_inquiry().never();

        let mut app = App::with_provider(SiteConfig::default(), Arc::new(mock));
        app.navigate(Page::Contact);
        let submit_row = FormKind::Contact.fields().len();
        app.view.form_mut().unwrap().form.set_active_field(submit_row);

        app.handle_key(key(KeyCode::Enter)).unwrap();
        let page = app.view.form().unwrap();
        assert_eq!(page.submission.state(), MutationState::Idle);
        assert_eq!(page.form.active_field_index, 0);
        assert_eq!(
            page.form.controller.error("name"),
            Some("Your name is required.")
        );
        assert!(app.state.status_message.is_some());
    }

    #[tokio::test]
    async fn test_submit_then_start_over() {
        let mut app = fixture_app();
        app.navigate(Page::Contact);
        fill_contact(&mut app);

        app.handle_key(key(KeyCode::Enter)).unwrap();
        let page = app.view.form().unwrap();
        assert!(page.submission.is_pending());
        until(|| !page.submission.is_pending()).await;

        let id = page.confirmation_id().unwrap();
        assert!(id.starts_with("TKT-"));

        app.handle_key(key(KeyCode::Char('n'))).unwrap();
        let page = app.view.form().unwrap();
        assert_eq!(page.submission.state(), MutationState::Idle);
        assert_eq!(page.form.controller.value("name"), "");
    }

    #[tokio::test]
    async fn test_failure_banner_is_dismissible() {
        let mut mock = MockDataProvider::new();
        mock.expect_get_stats().returning(|| Ok(ApiResponse::ok(vec![])));
        mock.expect_get_services().returning(|| Ok(ApiResponse::ok(vec![])));
        mock.expect_get_projects().returning(|| Ok(ApiResponse::ok(vec![])));
        mock.expect_submit_contact_inquiry()
            .times(1)
            .returning(|_| Ok(ApiResponse::<Confirmation>::failure("Inbox full.")));

        let mut app = App::with_provider(SiteConfig::default(), Arc::new(mock));
        app.navigate(Page::Contact);
        fill_contact(&mut app);
        app.handle_key(key(KeyCode::Enter)).unwrap();
        let page = app.view.form().unwrap();
        until(|| !page.submission.is_pending()).await;
        assert_eq!(page.submission.error().as_deref(), Some("Inbox full."));

        app.handle_key(key(KeyCode::Esc)).unwrap();
        let page = app.view.form().unwrap();
        assert!(page.submission.error().is_none());
        assert!(!app.should_quit());
        // values survive the dismissal
        assert_eq!(page.form.controller.value("name"), "Asha");
    }

    #[tokio::test]
    async fn test_choice_field_cycles_with_arrows() {
        let mut app = fixture_app();
        app.navigate(Page::Join);
        let role = FormKind::Join
            .fields()
            .iter()
            .position(|f| f.name == "role")
            .unwrap();
        app.view.form_mut().unwrap().form.set_active_field(role);

        app.handle_key(key(KeyCode::Right)).unwrap();
        let page = app.view.form().unwrap();
        assert_eq!(page.form.controller.value("role"), "Frontend Developer");
    }

    #[tokio::test]
    async fn test_q_quits_from_content_pages() {
        let mut app = fixture_app();
        app.handle_key(key(KeyCode::Char('q'))).unwrap();
        assert!(app.should_quit());
    }
}
