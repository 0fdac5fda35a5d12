//! Shared test utilities for the browser screen.
//!
//! Provides a [`MockEngine`] that records every command it receives and
//! replays scripted notifications. Clones share state, so a test keeps one
//! clone for assertions after handing the other to a screen.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use url::Url;

use crate::engine::{EngineEvent, ObservedProperty, ObserverId, RenderingEngine};

/// A recorded engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    Load(String),
    GoBack,
    GoForward,
    Reload,
    StopLoading,
}

#[derive(Debug, Default)]
struct MockState {
    commands: Vec<EngineCommand>,
    can_go_back: bool,
    can_go_forward: bool,
    is_loading: bool,
    current_url: Option<String>,
    observers: HashMap<ObserverId, ObservedProperty>,
    next_observer: u64,
    queued: Vec<EngineEvent>,
}

/// A scripted engine that records commands for test assertions.
#[derive(Debug, Clone, Default)]
pub struct MockEngine {
    state: Rc<RefCell<MockState>>,
}

impl MockEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every command received so far.
    pub fn commands(&self) -> Vec<EngineCommand> {
        self.state.borrow().commands.clone()
    }

    pub fn command_count(&self) -> usize {
        self.state.borrow().commands.len()
    }

    pub fn clear_commands(&self) {
        self.state.borrow_mut().commands.clear();
    }

    pub fn set_can_go_back(&self, value: bool) {
        self.state.borrow_mut().can_go_back = value;
    }

    pub fn set_can_go_forward(&self, value: bool) {
        self.state.borrow_mut().can_go_forward = value;
    }

    pub fn set_loading(&self, value: bool) {
        self.state.borrow_mut().is_loading = value;
    }

    pub fn set_current_url(&self, url: &str) {
        self.state.borrow_mut().current_url = Some(url.to_string());
    }

    /// Queue a notification for the next `poll_events`.
    pub fn push_event(&self, event: EngineEvent) {
        self.state.borrow_mut().queued.push(event);
    }

    /// Properties with a live observer registration.
    pub fn observed(&self) -> Vec<ObservedProperty> {
        self.state.borrow().observers.values().copied().collect()
    }
}

impl RenderingEngine for MockEngine {
    fn load(&mut self, url: &Url) {
        self.state
            .borrow_mut()
            .commands
            .push(EngineCommand::Load(url.to_string()));
    }

    fn go_back(&mut self) {
        self.state.borrow_mut().commands.push(EngineCommand::GoBack);
    }

    fn go_forward(&mut self) {
        self.state.borrow_mut().commands.push(EngineCommand::GoForward);
    }

    fn reload(&mut self) {
        self.state.borrow_mut().commands.push(EngineCommand::Reload);
    }

    fn stop_loading(&mut self) {
        self.state
            .borrow_mut()
            .commands
            .push(EngineCommand::StopLoading);
    }

    fn can_go_back(&self) -> bool {
        self.state.borrow().can_go_back
    }

    fn can_go_forward(&self) -> bool {
        self.state.borrow().can_go_forward
    }

    fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    fn current_url(&self) -> Option<String> {
        self.state.borrow().current_url.clone()
    }

    fn observe(&mut self, property: ObservedProperty) -> ObserverId {
        let mut state = self.state.borrow_mut();
        state.next_observer += 1;
        let id = ObserverId(state.next_observer);
        state.observers.insert(id, property);
        id
    }

    fn unobserve(&mut self, id: ObserverId) {
        self.state.borrow_mut().observers.remove(&id);
    }

    fn poll_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.state.borrow_mut().queued)
    }
}
