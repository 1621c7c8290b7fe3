//! Session gate
//!
//! Routing is a pure function of the session record: no token routes to
//! login, a manager routes to the manager root regardless of location, and a
//! customer needs a home location before reaching the customer root. The
//! gate owns the only mutation paths (login, location-confirmed, logout) and
//! re-resolves the route after each one; an unchanged route produces no
//! transition, so re-evaluating never duplicates navigation.

use shared::models::{RoleFlag, Session, UserProfile};
use shared::types::NamedLocation;

/// Root screen set reachable for the current session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    Login,
    SetLocation,
    CustomerHome,
    ManagerHome,
}

/// Resolve which root the session may reach
pub fn resolve_route(session: Option<&Session>) -> RouteTarget {
    let Some(session) = session else {
        return RouteTarget::Login;
    };
    if !session.is_authenticated() {
        return RouteTarget::Login;
    }

    match session.effective_role() {
        RoleFlag::Manager => RouteTarget::ManagerHome,
        RoleFlag::Customer => {
            if session.home_location.is_some() {
                RouteTarget::CustomerHome
            } else {
                RouteTarget::SetLocation
            }
        }
    }
}

/// Owns the session and the last routed target
#[derive(Debug, Default)]
pub struct SessionGate {
    session: Option<Session>,
    last_route: Option<RouteTarget>,
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// The route the current session resolves to
    pub fn current_route(&self) -> RouteTarget {
        resolve_route(self.session.as_ref())
    }

    /// Login succeeded: install the session and report the transition, if
    /// the route changed
    pub fn login_succeeded(
        &mut self,
        user: UserProfile,
        token: impl Into<String>,
    ) -> Option<RouteTarget> {
        self.session = Some(Session::from_login(user, token));
        self.take_transition()
    }

    /// The user confirmed a home location. Ignored when no customer session
    /// is active.
    pub fn location_confirmed(&mut self, location: NamedLocation) -> Option<RouteTarget> {
        match self.session.as_mut() {
            Some(session) => {
                session.home_location = Some(location);
            }
            None => {
                tracing::warn!("location confirmed with no active session");
                return None;
            }
        }
        self.take_transition()
    }

    /// Destroy the session. Reminder bookkeeping must be discarded by the
    /// caller (client-side only, no OS-side cancellation) via
    /// `ReminderScheduler::discard_all`.
    pub fn logout(&mut self) -> Option<RouteTarget> {
        if self.session.take().is_some() {
            tracing::info!("session destroyed");
        }
        self.take_transition()
    }

    /// Emit the new target only when it differs from the last routed one.
    /// Re-entering the same state is a no-op.
    fn take_transition(&mut self) -> Option<RouteTarget> {
        let target = self.current_route();
        if self.last_route == Some(target) {
            return None;
        }
        self.last_route = Some(target);
        tracing::debug!(?target, "route transition");
        Some(target)
    }
}
