//! A scripted, in-memory rendering engine.
//!
//! [`HeadlessEngine`] serves pages from a site table instead of the
//! network. Each call to [`advance`](HeadlessEngine::advance) moves the load
//! in flight one step forward. Notifications come out in the same order a
//! real engine would deliver them: started, progress, title, finished.
//! Failures are reported too: cancellations (`-999`), unknown hosts
//! (`-1003`) and unsupported schemes (`-1002`).

use std::collections::HashMap;

use url::Url;

use crate::engine::{EngineEvent, ObservedProperty, ObserverId, RenderingEngine};
use crate::failure::{CANNOT_FIND_HOST_CODE, NavigationError, UNSUPPORTED_URL_CODE};
use crate::nav::History;

/// Progress reported as soon as a load starts.
const INITIAL_PROGRESS: f64 = 0.1;

/// A page the engine can serve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    /// Number of `advance` calls the load takes once committed.
    pub load_steps: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadKind {
    New,
    Back,
    Forward,
    Reload,
}

#[derive(Debug, Clone)]
struct PendingLoad {
    url: String,
    kind: LoadKind,
    page: Option<Page>,
    step: u32,
}

impl PendingLoad {
    fn committed(&self) -> bool {
        self.page.is_some()
    }
}

/// Rendering engine that serves pages from memory.
#[derive(Debug, Default)]
pub struct HeadlessEngine {
    /// Pages keyed by host name.
    sites: HashMap<String, Page>,
    history: History,
    pending: Option<PendingLoad>,
    observers: HashMap<ObserverId, ObservedProperty>,
    next_observer: u64,
    queued: Vec<EngineEvent>,
    progress: f64,
    title: Option<String>,
}

impl HeadlessEngine {
    /// An engine with no sites; every load fails with an unknown host.
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine serving a handful of well-known hosts.
    pub fn with_demo_sites() -> Self {
        Self::new()
            .with_site("www.google.com", "Google", 4)
            .with_site("example.com", "Example Domain", 2)
            .with_site("www.rust-lang.org", "Rust Programming Language", 5)
            .with_site("docs.rs", "Docs.rs", 3)
    }

    /// Serve `title` for every path on `host`, loading in `load_steps`
    /// steps.
    pub fn with_site(mut self, host: &str, title: &str, load_steps: u32) -> Self {
        self.sites.insert(
            host.to_string(),
            Page {
                title: title.to_string(),
                load_steps: load_steps.max(1),
            },
        );
        self
    }

    /// Move the load in flight forward by one step. Returns true while a
    /// load is still in flight afterwards.
    pub fn advance(&mut self) -> bool {
        let Some(mut pending) = self.pending.take() else {
            return false;
        };

        if !pending.committed() {
            match self.resolve(&pending.url) {
                Ok(page) => {
                    self.commit(&pending);
                    pending.page = Some(page);
                },
                Err(error) => {
                    log::debug!("headless: {} failed: {error}", pending.url);
                    self.queued
                        .push(EngineEvent::ProvisionalNavigationFailed(error));
                    self.set_progress(0.0);
                    return false;
                },
            }
        }

        pending.step += 1;
        let Some(page) = pending.page.clone() else {
            return false;
        };
        if pending.step >= page.load_steps {
            self.set_progress(1.0);
            self.history.update_title(&page.title);
            self.set_title(Some(page.title));
            self.queued.push(EngineEvent::NavigationFinished);
            return false;
        }

        let fraction = f64::from(pending.step) / f64::from(page.load_steps);
        self.set_progress(INITIAL_PROGRESS + (1.0 - INITIAL_PROGRESS) * fraction);
        self.pending = Some(pending);
        true
    }

    /// Advance until the load in flight settles. Returns the number of
    /// steps taken.
    pub fn finish_loading(&mut self) -> usize {
        let mut steps = 0;
        while self.pending.is_some() {
            self.advance();
            steps += 1;
        }
        steps
    }

    pub fn estimated_progress(&self) -> f64 {
        self.progress
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    fn resolve(&self, raw: &str) -> Result<Page, NavigationError> {
        let url = Url::parse(raw)
            .map_err(|e| NavigationError::new(UNSUPPORTED_URL_CODE, &e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(NavigationError::new(UNSUPPORTED_URL_CODE, "unsupported URL"));
        }
        url.host_str()
            .and_then(|host| self.sites.get(host))
            .cloned()
            .ok_or_else(|| {
                NavigationError::new(
                    CANNOT_FIND_HOST_CODE,
                    "A server with the specified hostname could not be found.",
                )
            })
    }

    fn commit(&mut self, pending: &PendingLoad) {
        match pending.kind {
            LoadKind::New => self.history.navigate(&pending.url),
            LoadKind::Back => {
                self.history.go_back();
            },
            LoadKind::Forward => {
                self.history.go_forward();
            },
            LoadKind::Reload => {},
        }
    }

    fn begin(&mut self, url: String, kind: LoadKind) {
        self.cancel_pending();
        log::debug!("headless: start {kind:?} load of {url}");
        self.queued.push(EngineEvent::NavigationStarted);
        self.pending = Some(PendingLoad {
            url,
            kind,
            page: None,
            step: 0,
        });
        self.set_progress(INITIAL_PROGRESS);
    }

    fn cancel_pending(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        log::debug!("headless: cancel load of {}", pending.url);
        let error = NavigationError::cancelled();
        if pending.committed() {
            self.queued.push(EngineEvent::NavigationFailed(error));
        } else {
            self.queued
                .push(EngineEvent::ProvisionalNavigationFailed(error));
        }
        self.set_progress(0.0);
    }

    fn observing(&self, property: ObservedProperty) -> bool {
        self.observers.values().any(|p| *p == property)
    }

    fn set_progress(&mut self, progress: f64) {
        if self.progress == progress {
            return;
        }
        self.progress = progress;
        if self.observing(ObservedProperty::EstimatedProgress) {
            self.queued.push(EngineEvent::ProgressChanged(progress));
        }
    }

    fn set_title(&mut self, title: Option<String>) {
        if self.title == title {
            return;
        }
        self.title = title.clone();
        if self.observing(ObservedProperty::Title) {
            self.queued.push(EngineEvent::TitleChanged(title));
        }
    }
}

impl RenderingEngine for HeadlessEngine {
    fn load(&mut self, url: &Url) {
        self.begin(url.to_string(), LoadKind::New);
    }

    fn go_back(&mut self) {
        if let Some(url) = self.history.back_url().map(String::from) {
            self.begin(url, LoadKind::Back);
        }
    }

    fn go_forward(&mut self) {
        if let Some(url) = self.history.forward_url().map(String::from) {
            self.begin(url, LoadKind::Forward);
        }
    }

    fn reload(&mut self) {
        if let Some(url) = self.history.current_url().map(String::from) {
            self.begin(url, LoadKind::Reload);
        }
    }

    fn stop_loading(&mut self) {
        self.cancel_pending();
    }

    fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    fn current_url(&self) -> Option<String> {
        self.history.current_url().map(String::from)
    }

    fn observe(&mut self, property: ObservedProperty) -> ObserverId {
        self.next_observer += 1;
        let id = ObserverId(self.next_observer);
        self.observers.insert(id, property);
        id
    }

    fn unobserve(&mut self, id: ObserverId) {
        self.observers.remove(&id);
    }

    fn poll_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.queued)
    }
}
