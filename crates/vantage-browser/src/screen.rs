//! The browser screen controller.
//!
//! [`BrowserScreen`] mediates between user input, rendering-engine
//! notifications and transient UI state. Apart from URL normalization and
//! the scroll-direction heuristic it owns no navigation logic: every
//! command is forwarded to the engine.

use std::collections::VecDeque;

use url::Url;
use vantage_types::error::{Result, VantageError};
use vantage_types::input::{ScreenEvent, ToolbarAction};
use vantage_ui::{Alert, NavigationChrome, ProgressBar, SearchField, browser_toolbar_items};

use crate::config::BrowserConfig;
use crate::delegate::{NavigationDelegate, ScrollDelegate, SearchBarDelegate};
use crate::engine::{EngineEvent, ObservedProperty, ObserverId, RenderingEngine};
use crate::failure::{ErrorDisposition, NavigationError};
use crate::request::NavigationRequest;
use crate::scroll::ScrollTracker;

/// One browser screen: an engine plus the search field, progress bar,
/// navigation chrome and alert slot around it.
///
/// All methods run on the UI thread, one event at a time. Observer
/// registrations made in [`on_screen_ready`](Self::on_screen_ready) are
/// released when the screen is dropped.
pub struct BrowserScreen<E: RenderingEngine> {
    config: BrowserConfig,
    engine: E,

    search_field: SearchField,
    progress_bar: ProgressBar,
    chrome: NavigationChrome,
    scroll: ScrollTracker,

    /// Front entry is the alert on screen; the rest wait behind it.
    alerts: VecDeque<Alert>,
    alerts_presented: usize,

    /// Last non-null title reported by the engine.
    title: Option<String>,

    observers: Vec<ObserverId>,
    ready: bool,
    appeared: bool,
}

impl<E: RenderingEngine> BrowserScreen<E> {
    /// Build the screen and its child views. Nothing is loaded until
    /// [`on_screen_ready`](Self::on_screen_ready).
    pub fn new(config: BrowserConfig, engine: E) -> Self {
        let search_field = SearchField::new(&config.strings.search_placeholder);
        let chrome = NavigationChrome::new(config.bar_slide_ms);
        Self {
            config,
            engine,
            search_field,
            progress_bar: ProgressBar::new(),
            chrome,
            scroll: ScrollTracker::new(),
            alerts: VecDeque::new(),
            alerts_presented: 0,
            title: None,
            observers: Vec::new(),
            ready: false,
            appeared: false,
        }
    }

    // ---------------------------------------------------------------
    // Lifecycle
    // ---------------------------------------------------------------

    /// Register progress and title observation and start loading the
    /// starting page. Runs once; later calls are ignored.
    pub fn on_screen_ready(&mut self) {
        if self.ready {
            return;
        }
        self.ready = true;

        self.observers
            .push(self.engine.observe(ObservedProperty::EstimatedProgress));
        self.observers
            .push(self.engine.observe(ObservedProperty::Title));

        match Url::parse(&self.config.starting_url) {
            Ok(url) => {
                log::info!("Loading starting page {url}");
                self.engine.load(&url);
            },
            Err(e) => {
                log::warn!(
                    "Starting page '{}' is not a valid URL: {e}",
                    self.config.starting_url
                );
            },
        }
    }

    /// Install the toolbar and search field into the navigation chrome
    /// and show the toolbar. Idempotent.
    pub fn on_screen_appeared(&mut self) {
        if !self.appeared {
            self.appeared = true;
            self.chrome.toolbar_items = browser_toolbar_items();
            self.chrome.search_field_installed = true;
            self.chrome.hides_search_bar_when_scrolling = false;
        }
        self.chrome.toolbar.set_hidden(false, false, 0);
    }

    /// Load `raw` on behalf of the host. Unlike a search submission, input
    /// that does not name a URL is an error here.
    pub fn open(&mut self, raw: &str) -> Result<()> {
        let url = NavigationRequest::from_input(raw)
            .and_then(|request| request.url)
            .ok_or_else(|| VantageError::Navigation(format!("'{}' is not a URL", raw.trim())))?;
        log::info!("Opening {url}");
        self.engine.load(&url);
        Ok(())
    }

    // ---------------------------------------------------------------
    // Toolbar commands
    // ---------------------------------------------------------------

    pub fn go_back(&mut self) {
        if self.engine.can_go_back() {
            self.engine.go_back();
        }
    }

    pub fn go_forward(&mut self) {
        if self.engine.can_go_forward() {
            self.engine.go_forward();
        }
    }

    pub fn reload(&mut self) {
        self.engine.reload();
    }

    pub fn stop_loading(&mut self) {
        if self.engine.is_loading() {
            self.engine.stop_loading();
        }
    }

    /// Dispatch a toolbar tap.
    pub fn handle_action(&mut self, action: ToolbarAction) {
        log::debug!("toolbar: {action:?}");
        match action {
            ToolbarAction::Back => self.go_back(),
            ToolbarAction::Forward => self.go_forward(),
            ToolbarAction::Reload => self.reload(),
            ToolbarAction::Stop => self.stop_loading(),
        }
    }

    // ---------------------------------------------------------------
    // Observed engine properties
    // ---------------------------------------------------------------

    /// Show the engine's estimated progress. No clamping.
    pub fn on_progress_changed(&mut self, fraction: f64) {
        self.progress_bar.set_value(fraction as f32);
    }

    /// Show a new page title in the search field, centered.
    pub fn on_title_changed(&mut self, title: Option<&str>) {
        if let Some(title) = title {
            self.search_field.show_title(title);
            self.title = Some(title.to_string());
        }
    }

    // ---------------------------------------------------------------
    // Event loop entry points
    // ---------------------------------------------------------------

    /// Handle one user or scroll-surface event.
    pub fn handle_event(&mut self, event: &ScreenEvent) {
        match event {
            ScreenEvent::ScreenReady => self.on_screen_ready(),
            ScreenEvent::ScreenAppeared => self.on_screen_appeared(),
            ScreenEvent::SearchEditingBegan => self.on_search_editing_began(),
            ScreenEvent::SearchSubmitted(text) => self.submit_search(text),
            ScreenEvent::ToolbarTap(action) => self.handle_action(*action),
            ScreenEvent::ScrollDragBegan { offset_y } => self.on_scroll_drag_began(*offset_y),
            ScreenEvent::ScrollDecelerationBegan { offset_y } => {
                self.on_scroll_deceleration_began(*offset_y)
            },
            ScreenEvent::AlertAcknowledged => {
                self.acknowledge_alert();
            },
        }
    }

    /// Drain the engine's queued notifications and react to each in
    /// order. Returns how many were handled.
    pub fn pump_engine(&mut self) -> usize {
        let events = self.engine.poll_events();
        let count = events.len();
        for event in events {
            self.handle_engine_event(event);
        }
        count
    }

    /// React to a single engine notification.
    pub fn handle_engine_event(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::ProgressChanged(fraction) => self.on_progress_changed(fraction),
            EngineEvent::TitleChanged(title) => self.on_title_changed(title.as_deref()),
            EngineEvent::NavigationStarted => self.on_navigation_started(),
            EngineEvent::NavigationFinished => self.on_navigation_finished(),
            EngineEvent::NavigationFailed(error) => self.on_navigation_failed(&error),
            EngineEvent::ProvisionalNavigationFailed(error) => {
                self.on_provisional_navigation_failed(&error)
            },
        }
    }

    /// Advance every running animation by `dt_ms`. Returns true while any
    /// animation is still running.
    pub fn tick(&mut self, dt_ms: u32) -> bool {
        let progress = self.progress_bar.tick(dt_ms);
        let chrome = self.chrome.tick(dt_ms);
        progress || chrome
    }

    // ---------------------------------------------------------------
    // Alerts
    // ---------------------------------------------------------------

    /// Dismiss the alert on screen, revealing the next queued one.
    /// Returns the dismissed alert.
    pub fn acknowledge_alert(&mut self) -> Option<Alert> {
        self.alerts.pop_front()
    }

    /// Apply the error reporting policy to a failed navigation.
    fn report_failure(&mut self, error: &NavigationError) {
        match ErrorDisposition::classify(error) {
            ErrorDisposition::Suppressed => {
                log::debug!("suppressing cancelled navigation: {error}");
            },
            ErrorDisposition::UserVisible => {
                log::warn!("Navigation failed: {error}");
                if !self.alerts.is_empty() {
                    log::warn!("Alert already on screen; queueing ({} waiting)", self.alerts.len());
                }
                let strings = &self.config.strings;
                self.alerts.push_back(Alert::new(
                    &strings.general_error_title,
                    &error.message,
                    &strings.acknowledge,
                ));
                self.alerts_presented += 1;
            },
        }
    }

    fn hide_progress_bar(&mut self) {
        self.progress_bar.fade_out(
            self.config.progress_fade_out_delay_ms,
            self.config.progress_fade_out_ms,
        );
    }

    // ---------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------

    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn search_field(&self) -> &SearchField {
        &self.search_field
    }

    pub fn progress_bar(&self) -> &ProgressBar {
        &self.progress_bar
    }

    pub fn chrome(&self) -> &NavigationChrome {
        &self.chrome
    }

    /// The alert currently on screen.
    pub fn presented_alert(&self) -> Option<&Alert> {
        self.alerts.front()
    }

    /// Alerts on screen or waiting behind it.
    pub fn pending_alerts(&self) -> usize {
        self.alerts.len()
    }

    /// Total alerts raised over the screen's lifetime.
    pub fn alerts_presented(&self) -> usize {
        self.alerts_presented
    }

    /// Last page title reported by the engine.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Offset recorded when the last drag began.
    pub fn scroll_reference_y(&self) -> f64 {
        self.scroll.reference_y()
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }
}

impl<E: RenderingEngine> NavigationDelegate for BrowserScreen<E> {
    fn on_navigation_started(&mut self) {
        // A pending hide counts as hidden: without this, a load started
        // during the fade-out delay would end with the bar hidden.
        if self.progress_bar.is_hidden() || self.progress_bar.is_hiding() {
            self.progress_bar.fade_in(self.config.progress_fade_in_ms);
        }
    }

    fn on_navigation_finished(&mut self) {
        log::debug!("navigation finished");
        self.hide_progress_bar();
    }

    fn on_navigation_failed(&mut self, error: &NavigationError) {
        self.report_failure(error);
        self.hide_progress_bar();
    }

    fn on_provisional_navigation_failed(&mut self, error: &NavigationError) {
        self.report_failure(error);
        self.hide_progress_bar();
    }
}

impl<E: RenderingEngine> SearchBarDelegate for BrowserScreen<E> {
    fn submit_search(&mut self, raw_text: &str) {
        let Some(request) = NavigationRequest::from_input(raw_text) else {
            log::debug!("ignoring empty search");
            return;
        };
        self.search_field.end_editing();

        let already_loaded = self
            .engine
            .current_url()
            .is_some_and(|current| request.targets(&current));
        if already_loaded {
            log::debug!("{} already loaded", request.normalized);
            return;
        }

        let Some(url) = request.url else {
            log::debug!("dropping unparseable search '{}'", request.normalized);
            return;
        };
        log::info!("Loading {url}");
        self.engine.load(&url);
    }

    fn on_search_editing_began(&mut self) {
        self.search_field.begin_editing();
    }
}

impl<E: RenderingEngine> ScrollDelegate for BrowserScreen<E> {
    fn on_scroll_drag_began(&mut self, offset_y: f64) {
        self.scroll.begin_drag(offset_y);
    }

    fn on_scroll_deceleration_began(&mut self, offset_y: f64) {
        let direction = self.scroll.begin_deceleration(offset_y);
        self.chrome.set_bars_hidden(direction.hides_chrome(), true);
    }
}

impl<E: RenderingEngine> Drop for BrowserScreen<E> {
    fn drop(&mut self) {
        for id in self.observers.drain(..) {
            self.engine.unobserve(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failure::CANNOT_FIND_HOST_CODE;
    use crate::test_utils::{EngineCommand, MockEngine};

    fn make_screen() -> (BrowserScreen<MockEngine>, MockEngine) {
        let engine = MockEngine::new();
        let screen = BrowserScreen::new(BrowserConfig::default(), engine.clone());
        (screen, engine)
    }

    fn ready_screen() -> (BrowserScreen<MockEngine>, MockEngine) {
        let (mut screen, engine) = make_screen();
        screen.on_screen_ready();
        engine.clear_commands();
        (screen, engine)
    }

    // -- Lifecycle --

    #[test]
    fn screen_ready_loads_starting_page() {
        let (mut screen, engine) = make_screen();
        assert!(engine.commands().is_empty());

        screen.on_screen_ready();
        assert!(screen.is_ready());
        assert_eq!(
            engine.commands(),
            vec![EngineCommand::Load("https://www.google.com/".into())]
        );
    }

    #[test]
    fn screen_ready_registers_observers_once() {
        let (mut screen, engine) = make_screen();
        screen.on_screen_ready();
        screen.on_screen_ready();

        let mut observed = engine.observed();
        observed.sort_by_key(|p| *p == ObservedProperty::Title);
        assert_eq!(
            observed,
            vec![ObservedProperty::EstimatedProgress, ObservedProperty::Title]
        );
        assert_eq!(engine.command_count(), 1);
    }

    #[test]
    fn drop_removes_observers() {
        let (mut screen, engine) = make_screen();
        screen.on_screen_ready();
        assert_eq!(engine.observed().len(), 2);

        drop(screen);
        assert!(engine.observed().is_empty());
    }

    #[test]
    fn invalid_starting_url_loads_nothing() {
        let engine = MockEngine::new();
        let config = BrowserConfig {
            starting_url: "not a url".into(),
            ..BrowserConfig::default()
        };
        let mut screen = BrowserScreen::new(config, engine.clone());
        screen.on_screen_ready();
        assert!(engine.commands().is_empty());
        assert_eq!(engine.observed().len(), 2);
    }

    #[test]
    fn screen_appeared_installs_chrome() {
        let (mut screen, _engine) = make_screen();
        assert!(screen.chrome().toolbar.is_hidden());

        screen.on_screen_appeared();
        let chrome = screen.chrome();
        assert!(!chrome.toolbar.is_hidden());
        assert!(chrome.search_field_installed);
        assert!(!chrome.hides_search_bar_when_scrolling);
        assert_eq!(chrome.toolbar_items, browser_toolbar_items());
    }

    // -- Search --

    #[test]
    fn search_loads_normalized_url() {
        let (mut screen, engine) = ready_screen();
        screen.submit_search("Example.com ");
        assert_eq!(
            engine.commands(),
            vec![EngineCommand::Load("https://example.com/".into())]
        );
    }

    #[test]
    fn empty_search_is_noop() {
        let (mut screen, engine) = ready_screen();
        screen.submit_search("");
        screen.submit_search("   ");
        assert_eq!(engine.command_count(), 0);
    }

    #[test]
    fn search_for_current_url_is_noop() {
        let (mut screen, engine) = ready_screen();
        engine.set_current_url("https://example.com");
        screen.submit_search("EXAMPLE.com");
        assert_eq!(engine.command_count(), 0);

        engine.set_current_url("https://example.com/");
        screen.submit_search("example.com");
        assert_eq!(engine.command_count(), 0);
    }

    #[test]
    fn unparseable_search_is_dropped_silently() {
        let (mut screen, engine) = ready_screen();
        screen.submit_search("exa mple.com");
        assert_eq!(engine.command_count(), 0);
        assert_eq!(screen.pending_alerts(), 0);
    }

    #[test]
    fn search_keeps_explicit_scheme() {
        let (mut screen, engine) = ready_screen();
        screen.submit_search("http://foo.com");
        assert_eq!(
            engine.commands(),
            vec![EngineCommand::Load("http://foo.com/".into())]
        );
    }

    #[test]
    fn editing_switches_alignment_until_title_arrives() {
        use vantage_ui::TextAlignment;

        let (mut screen, _engine) = ready_screen();
        assert_eq!(screen.search_field().alignment, TextAlignment::Center);

        screen.on_search_editing_began();
        assert_eq!(screen.search_field().alignment, TextAlignment::Natural);
        assert!(screen.search_field().editing);

        screen.on_title_changed(Some("Example Domain"));
        assert_eq!(screen.search_field().text, "Example Domain");
        assert_eq!(screen.search_field().alignment, TextAlignment::Center);
        assert_eq!(screen.title(), Some("Example Domain"));
    }

    #[test]
    fn null_title_leaves_field_untouched() {
        let (mut screen, _engine) = ready_screen();
        screen.on_title_changed(Some("First"));
        screen.on_title_changed(None);
        assert_eq!(screen.search_field().text, "First");
        assert_eq!(screen.title(), Some("First"));
    }

    #[test]
    fn open_loads_even_when_current() {
        let (mut screen, engine) = ready_screen();
        engine.set_current_url("https://example.com/");
        screen.open("example.com").unwrap();
        assert_eq!(
            engine.commands(),
            vec![EngineCommand::Load("https://example.com/".into())]
        );
    }

    #[test]
    fn open_rejects_non_urls() {
        let (mut screen, engine) = ready_screen();
        assert!(matches!(screen.open("  "), Err(VantageError::Navigation(_))));
        assert!(matches!(screen.open("exa mple.com"), Err(VantageError::Navigation(_))));
        assert_eq!(engine.command_count(), 0);
    }

    // -- Toolbar --

    #[test]
    fn back_forward_stop_need_capability() {
        let (mut screen, engine) = ready_screen();
        screen.go_back();
        screen.go_forward();
        screen.stop_loading();
        assert_eq!(engine.command_count(), 0);

        engine.set_can_go_back(true);
        engine.set_can_go_forward(true);
        engine.set_loading(true);
        screen.go_back();
        screen.go_forward();
        screen.stop_loading();
        assert_eq!(
            engine.commands(),
            vec![
                EngineCommand::GoBack,
                EngineCommand::GoForward,
                EngineCommand::StopLoading,
            ]
        );
    }

    #[test]
    fn reload_is_unconditional() {
        let (mut screen, engine) = ready_screen();
        screen.reload();
        assert_eq!(engine.commands(), vec![EngineCommand::Reload]);
    }

    #[test]
    fn toolbar_taps_dispatch_through_events() {
        let (mut screen, engine) = ready_screen();
        engine.set_can_go_back(true);
        screen.handle_event(&ScreenEvent::ToolbarTap(ToolbarAction::Back));
        screen.handle_event(&ScreenEvent::ToolbarTap(ToolbarAction::Reload));
        screen.handle_event(&ScreenEvent::ToolbarTap(ToolbarAction::Stop));
        assert_eq!(
            engine.commands(),
            vec![EngineCommand::GoBack, EngineCommand::Reload]
        );
    }

    // -- Progress bar --

    #[test]
    fn progress_updates_bar_value() {
        let (mut screen, engine) = ready_screen();
        engine.push_event(EngineEvent::ProgressChanged(0.25));
        assert_eq!(screen.pump_engine(), 1);
        assert!((screen.progress_bar().value() - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn finished_navigation_hides_bar_after_delay_and_fade() {
        let (mut screen, _engine) = ready_screen();
        screen.on_progress_changed(1.0);
        screen.on_navigation_finished();

        screen.tick(699);
        assert!(!screen.progress_bar().is_hidden());
        assert_eq!(screen.progress_bar().alpha(), 1.0);

        screen.tick(301);
        assert!(screen.progress_bar().is_hidden());
        assert_eq!(screen.progress_bar().value(), 0.0);
        assert_eq!(screen.progress_bar().alpha(), 0.0);
    }

    #[test]
    fn started_navigation_reveals_hidden_bar_immediately() {
        let (mut screen, _engine) = ready_screen();
        screen.on_navigation_finished();
        screen.tick(1_000);
        assert!(screen.progress_bar().is_hidden());

        screen.on_navigation_started();
        assert!(!screen.progress_bar().is_hidden());
        assert!(screen.progress_bar().is_animating());

        screen.tick(50);
        let alpha = screen.progress_bar().alpha();
        assert!(alpha > 0.0 && alpha < 1.0);
        screen.tick(50);
        assert_eq!(screen.progress_bar().alpha(), 1.0);
    }

    #[test]
    fn started_navigation_on_visible_bar_does_nothing() {
        let (mut screen, _engine) = ready_screen();
        screen.on_navigation_started();
        assert!(!screen.progress_bar().is_animating());
        assert_eq!(screen.progress_bar().alpha(), 1.0);
    }

    #[test]
    fn new_navigation_during_fade_out_ends_visible() {
        let (mut screen, _engine) = ready_screen();
        screen.on_navigation_finished();
        screen.tick(850);

        screen.on_navigation_started();
        screen.on_progress_changed(0.1);
        screen.tick(2_000);

        assert!(!screen.progress_bar().is_hidden());
        assert_eq!(screen.progress_bar().alpha(), 1.0);
        assert!((screen.progress_bar().value() - 0.1).abs() < f32::EPSILON);
    }

    // -- Errors --

    #[test]
    fn cancelled_navigation_shows_no_alert() {
        let (mut screen, _engine) = ready_screen();
        screen.on_navigation_failed(&NavigationError::cancelled());
        screen.on_provisional_navigation_failed(&NavigationError::cancelled());
        assert_eq!(screen.alerts_presented(), 0);
        assert!(screen.presented_alert().is_none());
        assert!(screen.progress_bar().is_hiding());
    }

    #[test]
    fn other_failure_shows_one_alert() {
        let (mut screen, _engine) = ready_screen();
        let error = NavigationError::new(
            CANNOT_FIND_HOST_CODE,
            "A server with the specified hostname could not be found.",
        );
        screen.on_provisional_navigation_failed(&error);

        assert_eq!(screen.alerts_presented(), 1);
        let alert = screen.presented_alert().unwrap();
        assert_eq!(alert.title, "Error");
        assert_eq!(alert.message, error.message);
        assert_eq!(alert.action_label, "OK");
        assert!(screen.progress_bar().is_hiding());
    }

    #[test]
    fn alerts_queue_and_acknowledge_in_order() {
        let (mut screen, engine) = ready_screen();
        engine.push_event(EngineEvent::NavigationFailed(NavigationError::new(-1, "first")));
        engine.push_event(EngineEvent::NavigationFailed(NavigationError::new(-2, "second")));
        screen.pump_engine();

        assert_eq!(screen.pending_alerts(), 2);
        assert_eq!(screen.presented_alert().unwrap().message, "first");

        screen.handle_event(&ScreenEvent::AlertAcknowledged);
        assert_eq!(screen.presented_alert().unwrap().message, "second");
        assert_eq!(screen.acknowledge_alert().unwrap().message, "second");
        assert!(screen.acknowledge_alert().is_none());
        assert_eq!(screen.alerts_presented(), 2);
    }

    #[test]
    fn failure_leaves_screen_usable() {
        let (mut screen, engine) = ready_screen();
        screen.on_navigation_failed(&NavigationError::new(-1009, "offline"));
        screen.acknowledge_alert();
        screen.submit_search("example.org");
        assert_eq!(
            engine.commands(),
            vec![EngineCommand::Load("https://example.org/".into())]
        );
    }

    // -- Scroll --

    #[test]
    fn scrolling_down_hides_bars() {
        let (mut screen, _engine) = ready_screen();
        screen.on_screen_appeared();
        screen.on_scroll_drag_began(100.0);
        screen.on_scroll_deceleration_began(150.0);
        assert!(screen.chrome().navigation_bar.is_hidden());
        assert!(screen.chrome().toolbar.is_hidden());
        assert!(screen.chrome().navigation_bar.is_animating());
    }

    #[test]
    fn scrolling_up_reveals_bars() {
        let (mut screen, _engine) = ready_screen();
        screen.on_screen_appeared();
        screen.on_scroll_drag_began(100.0);
        screen.on_scroll_deceleration_began(150.0);
        screen.tick(1_000);

        screen.handle_event(&ScreenEvent::ScrollDragBegan { offset_y: 100.0 });
        screen.handle_event(&ScreenEvent::ScrollDecelerationBegan { offset_y: 80.0 });
        assert!(!screen.chrome().navigation_bar.is_hidden());
        assert!(!screen.chrome().toolbar.is_hidden());
        assert_eq!(screen.scroll_reference_y(), 100.0);
    }

    // -- Engine pump --

    #[test]
    fn pump_dispatches_in_order() {
        let (mut screen, engine) = ready_screen();
        engine.push_event(EngineEvent::NavigationStarted);
        engine.push_event(EngineEvent::ProgressChanged(0.5));
        engine.push_event(EngineEvent::TitleChanged(Some("Rust".into())));
        engine.push_event(EngineEvent::NavigationFinished);

        assert_eq!(screen.pump_engine(), 4);
        assert_eq!(screen.search_field().text, "Rust");
        assert!(screen.progress_bar().is_hiding());
        assert_eq!(screen.pump_engine(), 0);
    }
}
