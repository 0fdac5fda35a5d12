//! Vantage desktop entry point.
//!
//! Builds a browser screen over the headless engine and plays a short
//! scripted session through it: launch, a few searches, toolbar taps, a
//! failing load and some scrolling. Every step is logged.
//! Set `VANTAGE_CONFIG` to a TOML file to override the default settings.

use std::path::Path;

use anyhow::{Context, Result};

use vantage_browser::{BrowserConfig, BrowserScreen, HeadlessEngine, RenderingEngine};
use vantage_types::input::{ScreenEvent, ToolbarAction};

/// Simulated frame time.
const FRAME_MS: u32 = 16;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut screen = match std::env::var("VANTAGE_CONFIG") {
        Ok(path) => {
            let config = BrowserConfig::load(Path::new(&path))
                .with_context(|| format!("loading config {path}"))?;
            BrowserScreen::new(config, HeadlessEngine::with_demo_sites())
        },
        Err(_) => vantage_browser::new_browser_screen(),
    };
    log::info!("Starting Vantage at {}", screen.config().starting_url);

    let script = [
        ScreenEvent::ScreenReady,
        ScreenEvent::ScreenAppeared,
        ScreenEvent::SearchEditingBegan,
        ScreenEvent::SearchSubmitted("  Example.com".into()),
        ScreenEvent::SearchSubmitted("example.com".into()),
        ScreenEvent::ToolbarTap(ToolbarAction::Back),
        ScreenEvent::ToolbarTap(ToolbarAction::Forward),
        ScreenEvent::ToolbarTap(ToolbarAction::Reload),
        ScreenEvent::SearchSubmitted("nowhere.invalid".into()),
        ScreenEvent::AlertAcknowledged,
        ScreenEvent::ScrollDragBegan { offset_y: 0.0 },
        ScreenEvent::ScrollDecelerationBegan { offset_y: 320.0 },
        ScreenEvent::ScrollDragBegan { offset_y: 320.0 },
        ScreenEvent::ScrollDecelerationBegan { offset_y: 120.0 },
    ];

    for event in &script {
        log::info!("> {event:?}");
        screen.handle_event(event);
        run_until_idle(&mut screen);
        report(&screen);
    }

    // Hosts can also load directly, bypassing the search field.
    screen.open("www.rust-lang.org")?;
    run_until_idle(&mut screen);
    report(&screen);

    log::info!(
        "Session over: {} alert(s) raised, {} history entries",
        screen.alerts_presented(),
        screen.engine().history().len()
    );
    Ok(())
}

/// Step the engine and the animations, one frame at a time, until both
/// settle.
fn run_until_idle(screen: &mut BrowserScreen<HeadlessEngine>) {
    loop {
        let loading = screen.engine_mut().advance();
        screen.pump_engine();
        let animating = screen.tick(FRAME_MS);
        if !loading && !animating {
            break;
        }
    }
}

fn report(screen: &BrowserScreen<HeadlessEngine>) {
    let engine = screen.engine();
    log::info!(
        "  url={} title={:?} field={:?} back={} forward={}",
        engine.current_url().as_deref().unwrap_or("-"),
        screen.title(),
        screen.search_field().display_text(),
        engine.can_go_back(),
        engine.can_go_forward(),
    );
    let bar = screen.progress_bar();
    log::info!(
        "  progress={:.2} hidden={} bars_hidden={}",
        bar.value(),
        bar.is_hidden(),
        screen.chrome().bars_hidden(),
    );
    if let Some(alert) = screen.presented_alert() {
        log::warn!("  alert: {}: {} [{}]", alert.title, alert.message, alert.action_label);
    }
}
