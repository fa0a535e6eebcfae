//! External URL intake for DriftBrowser.
//!
//! URLs arriving from outside the browser (widgets, other applications)
//! come in as resolved events carrying a destination and an acceptance
//! signal. The router loads the URL into the session or reports a handoff,
//! and fires the acceptance signal exactly once on every path, including
//! events that carry no URL at all.

use std::sync::Arc;

use super::session::{BrowsingSession, BrowsingSessionTrait};

/// Where a resolved URL should open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    ThisBrowser,
    /// Another handler, named by its identifier.
    External(String),
}

/// One-shot acknowledgement the event's sender is waiting on.
pub struct AcceptanceSignal {
    notify: Option<Box<dyn FnOnce() + Send>>,
}

impl AcceptanceSignal {
    pub fn new<F>(notify: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            notify: Some(Box::new(notify)),
        }
    }

    /// Fires the acknowledgement. Later calls are no-ops.
    pub fn signal(&mut self) {
        if let Some(notify) = self.notify.take() {
            notify();
        }
    }

    pub fn is_signaled(&self) -> bool {
        self.notify.is_none()
    }
}

/// A URL resolved by the platform, ready for routing.
pub struct ResolvedUrlEvent {
    pub url: Option<String>,
    pub destination: Destination,
    pub acceptance: AcceptanceSignal,
}

impl ResolvedUrlEvent {
    pub fn new(url: Option<String>, destination: Destination, acceptance: AcceptanceSignal) -> Self {
        Self {
            url,
            destination,
            acceptance,
        }
    }
}

/// How an event was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    LoadedInSession,
    /// The URL that was passed to the external handler.
    HandedOff(String),
    Ignored,
}

/// Routes resolved URL events into the browsing session.
pub struct IntentRouter {
    session: Arc<BrowsingSession>,
}

impl IntentRouter {
    pub fn new(session: Arc<BrowsingSession>) -> Self {
        Self { session }
    }

    /// Routes one event and fires its acceptance signal.
    pub fn handle(&self, mut event: ResolvedUrlEvent) -> RouteOutcome {
        let outcome = match (event.url.take(), event.destination.clone()) {
            (Some(url), Destination::ThisBrowser) => {
                self.session.load_url(&url);
                RouteOutcome::LoadedInSession
            }
            (Some(url), Destination::External(handler)) => {
                log::info!("Handing '{}' to external handler {}", url, handler);
                RouteOutcome::HandedOff(url)
            }
            (None, _) => {
                log::warn!("Resolved URL event carried no URL; ignoring");
                RouteOutcome::Ignored
            }
        };
        event.acceptance.signal();
        outcome
    }
}
