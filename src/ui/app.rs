use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tokio::time::sleep;

use crate::api::{ApiError, LoginSession, RecipeDetail, RecipeService};
use crate::config::ConfigStore;
use crate::session::{SecureToken, SessionFlags, SessionStore};
use crate::ui::dashboard::{
    spawn_load, DashboardData, DashboardIntent, DashboardLoadState, DashboardReducer,
};
use crate::ui::detail::{DetailIntent, DetailReducer, DetailState};
use crate::ui::events::AppEvent;
use crate::ui::login::{LoginFormState, LoginIntent, LoginReducer};
use crate::ui::mvi::Reducer;
use crate::ui::onboard::{OnboardIntent, OnboardReducer, OnboardState};
use crate::ui::search::SearchCoordinator;

/// Which screen owns the terminal right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Splash,
    Onboarding,
    Login,
    Dashboard,
    Detail { id: i64 },
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    screen: Screen,
    config: ConfigStore,
    session: Arc<dyn SessionStore>,
    service: Arc<dyn RecipeService>,
    events: UnboundedSender<AppEvent>,
    /// Session flags as loaded at startup and updated on login/logout.
    flags: SessionFlags,
    onboard: OnboardState,
    login: LoginFormState,
    dashboard: DashboardLoadState,
    search: SearchCoordinator,
    detail: DetailState,
    /// Index into whichever recipe list is currently visible (search
    /// results, or the popular list while search is idle).
    selection: usize,
}

impl App {
    pub fn new(
        config: ConfigStore,
        session: Arc<dyn SessionStore>,
        service: Arc<dyn RecipeService>,
        events: UnboundedSender<AppEvent>,
    ) -> Self {
        let flags = session.load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "failed to load session flags, starting fresh");
            SessionFlags::default()
        });
        let search_cfg = config.get().search;

        Self {
            should_quit: false,
            screen: Screen::Splash,
            session,
            service: Arc::clone(&service),
            events: events.clone(),
            flags,
            onboard: OnboardState::default(),
            login: LoginFormState::default(),
            dashboard: DashboardLoadState::default(),
            search: SearchCoordinator::new(search_cfg, service, events),
            detail: DetailState::default(),
            selection: 0,
            config,
        }
    }

    /// Kick off the splash timer. Called once, before the first event.
    pub fn start(&mut self) {
        let duration = self.config.get().splash.duration();
        let events = self.events.clone();
        tokio::spawn(async move {
            sleep(duration).await;
            let _ = events.send(AppEvent::SplashElapsed);
        });
    }

    // ========================================================================
    // Read-only snapshots for views and tests
    // ========================================================================

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn flags(&self) -> &SessionFlags {
        &self.flags
    }

    pub fn onboard(&self) -> &OnboardState {
        &self.onboard
    }

    pub fn login(&self) -> &LoginFormState {
        &self.login
    }

    pub fn dashboard(&self) -> &DashboardLoadState {
        &self.dashboard
    }

    pub fn search(&self) -> &SearchCoordinator {
        &self.search
    }

    pub fn detail(&self) -> &DetailState {
        &self.detail
    }

    /// Greeting name for the dashboard header.
    pub fn username(&self) -> &str {
        self.flags.username.as_deref().unwrap_or("there")
    }

    pub fn tag_row_limit(&self) -> usize {
        self.config.get().dashboard.tag_row_limit
    }

    // ========================================================================
    // Event handling
    // ========================================================================

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Completions and timers. Key events are routed separately through
    /// `ui::input`.
    pub fn on_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::SplashElapsed => self.on_splash_elapsed(),
            AppEvent::SearchDebounce { epoch } => self.search.on_debounce_elapsed(epoch),
            AppEvent::SearchResolved { generation, result } => {
                self.search.on_resolved(generation, result);
                self.selection = 0;
            }
            AppEvent::DashboardLoaded { result } => self.on_dashboard_loaded(result),
            AppEvent::DetailLoaded { id, result } => self.on_detail_loaded(id, result),
            AppEvent::LoginResolved { result } => self.on_login_resolved(result),
            // Redraw happens every loop iteration; nothing to update here.
            AppEvent::Tick | AppEvent::Resize(_, _) => {}
            AppEvent::Key(_) | AppEvent::Paste(_) => {}
        }
    }

    pub fn on_paste(&mut self, text: &str) {
        match self.screen {
            Screen::Dashboard => {
                self.search.on_paste(text);
                self.selection = 0;
            }
            Screen::Login => {
                for c in text.chars().filter(|c| !c.is_control()) {
                    self.dispatch_login(LoginIntent::TypeChar(c));
                }
            }
            _ => {}
        }
    }

    // ========================================================================
    // Splash & onboarding
    // ========================================================================

    fn on_splash_elapsed(&mut self) {
        if self.screen != Screen::Splash {
            return;
        }
        if self.flags.logged_in {
            self.enter_dashboard();
        } else if !self.flags.onboarding_seen {
            self.screen = Screen::Onboarding;
        } else {
            self.screen = Screen::Login;
        }
    }

    pub fn dispatch_onboard(&mut self, intent: OnboardIntent) {
        dispatch_mvi!(self, onboard, OnboardReducer, intent);
    }

    /// Advance the walkthrough; the last slide's "Get Started" marks it
    /// seen and moves on to login.
    pub fn onboard_continue(&mut self) {
        if self.onboard.is_last() {
            self.finish_onboarding();
        } else {
            self.dispatch_onboard(OnboardIntent::Next);
        }
    }

    fn finish_onboarding(&mut self) {
        self.flags.onboarding_seen = true;
        self.persist_flags();
        self.screen = Screen::Login;
    }

    // ========================================================================
    // Login
    // ========================================================================

    pub fn dispatch_login(&mut self, intent: LoginIntent) {
        dispatch_mvi!(self, login, LoginReducer, intent);
    }

    /// Validate and submit the login form.
    pub fn submit_login(&mut self) {
        if self.login.submitting || !self.login.is_valid() {
            return;
        }
        self.dispatch_login(LoginIntent::SubmitStarted);

        let username = self.login.username.trim().to_string();
        let password = self.login.password.clone();
        let expires_in_mins = self.config.get().login.expires_in_mins;
        let service = Arc::clone(&self.service);
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = service.login(&username, &password, expires_in_mins).await;
            let _ = events.send(AppEvent::LoginResolved { result });
        });
    }

    fn on_login_resolved(&mut self, result: Result<LoginSession, ApiError>) {
        match result {
            Ok(session) => {
                self.flags.logged_in = true;
                self.flags.username = Some(session.username);
                self.flags.token = session.token.map(SecureToken::new);
                self.persist_flags();
                self.dispatch_login(LoginIntent::Succeeded);
                self.enter_dashboard();
            }
            Err(err) => {
                self.dispatch_login(LoginIntent::Failed {
                    message: err.user_message(),
                });
            }
        }
    }

    /// Drop credentials (the onboarding marker survives) and return to the
    /// login screen.
    pub fn logout(&mut self) {
        self.flags = self.flags.logged_out();
        self.persist_flags();
        self.search.clear();
        self.dashboard = DashboardLoadState::default();
        self.selection = 0;
        self.screen = Screen::Login;
        tracing::info!("logged out");
    }

    // ========================================================================
    // Dashboard
    // ========================================================================

    fn enter_dashboard(&mut self) {
        self.screen = Screen::Dashboard;
        self.selection = 0;
        self.reload_dashboard();
    }

    /// Kick off (or re-run) the one-shot aggregate load.
    pub fn reload_dashboard(&mut self) {
        self.dispatch_dashboard(DashboardIntent::Reload);
        spawn_load(
            Arc::clone(&self.service),
            self.config.get().dashboard,
            self.events.clone(),
        );
    }

    pub fn dispatch_dashboard(&mut self, intent: DashboardIntent) {
        dispatch_mvi!(self, dashboard, DashboardReducer, intent);
    }

    fn on_dashboard_loaded(&mut self, result: Result<DashboardData, ApiError>) {
        match result {
            Ok(data) => self.dispatch_dashboard(DashboardIntent::Loaded { data }),
            Err(err) => self.dispatch_dashboard(DashboardIntent::LoadFailed {
                message: err.user_message(),
            }),
        }
    }

    // ========================================================================
    // Search box plumbing
    // ========================================================================

    pub fn search_input_char(&mut self, c: char) {
        self.search.on_input_char(c);
        self.selection = 0;
    }

    pub fn search_backspace(&mut self) {
        self.search.on_backspace();
        self.selection = 0;
    }

    pub fn search_submit(&mut self) {
        self.search.submit_now();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
        self.selection = 0;
    }

    // ========================================================================
    // Recipe selection & detail
    // ========================================================================

    /// The list Up/Down/Enter operate on: search results when search has
    /// settled, the popular list while search is idle.
    pub fn visible_recipes(&self) -> &[crate::api::Recipe] {
        if let Some(results) = self.search.state().results() {
            return results;
        }
        if self.search.state().is_idle() {
            return self.dashboard.popular().unwrap_or(&[]);
        }
        &[]
    }

    pub fn selection(&self) -> usize {
        self.selection.min(self.visible_recipes().len().saturating_sub(1))
    }

    pub fn move_selection(&mut self, delta: i32) {
        let len = self.visible_recipes().len();
        if len == 0 {
            self.selection = 0;
            return;
        }
        let current = self.selection.min(len - 1);
        self.selection = if delta.is_negative() {
            current.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            (current + delta as usize).min(len - 1)
        };
    }

    /// Open the detail view for the selected recipe, if any.
    pub fn open_selected_recipe(&mut self) {
        let Some(id) = self
            .visible_recipes()
            .get(self.selection())
            .map(|recipe| recipe.id)
        else {
            return;
        };
        self.open_detail(id);
    }

    pub fn open_detail(&mut self, id: i64) {
        self.screen = Screen::Detail { id };
        self.dispatch_detail(DetailIntent::Opened);

        let service = Arc::clone(&self.service);
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = service.fetch_detail(id).await;
            let _ = events.send(AppEvent::DetailLoaded { id, result });
        });
    }

    pub fn dispatch_detail(&mut self, intent: DetailIntent) {
        dispatch_mvi!(self, detail, DetailReducer, intent);
    }

    fn on_detail_loaded(&mut self, id: i64, result: Result<RecipeDetail, ApiError>) {
        // Completion for a detail view the user already left.
        if self.screen != (Screen::Detail { id }) {
            tracing::debug!(id, "stale detail completion dropped");
            return;
        }
        match result {
            Ok(recipe) => self.dispatch_detail(DetailIntent::Loaded { recipe }),
            Err(err) => self.dispatch_detail(DetailIntent::LoadFailed {
                message: err.user_message(),
            }),
        }
    }

    /// Leave the detail view.
    pub fn close_detail(&mut self) {
        if matches!(self.screen, Screen::Detail { .. }) {
            self.screen = Screen::Dashboard;
            self.detail = DetailState::default();
        }
    }

    fn persist_flags(&self) {
        if let Err(err) = self.session.save(&self.flags) {
            tracing::warn!(error = %err, "failed to persist session flags");
        }
    }
}
