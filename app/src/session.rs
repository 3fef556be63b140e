//! Admin session gate.
//!
//! The operator is prompted exactly once per page load. The credential is
//! captured into `AdminSession` on successful verification and never
//! changes afterwards; every privileged call reads it from there. Rejection
//! and connectivity failure are terminal states; the gate never re-prompts
//! within a session.

use dioxus::prelude::*;

/// Gate lifecycle. `Denied` and `ConnectionError` are terminal; the only
/// way out is a page reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// Waiting for the operator to enter a credential.
    Prompt,
    /// Verification request in flight.
    Verifying,
    /// Credential accepted; the dashboard is revealed.
    Ready,
    /// Missing or rejected credential.
    Denied,
    /// Could not reach the verification endpoint.
    ConnectionError,
}

/// Credential holder shared through context. Written once by the gate,
/// read by every privileged call.
#[derive(Clone, Copy)]
pub struct AdminSession {
    password: Signal<String>,
    state: Signal<GateState>,
}

impl AdminSession {
    pub fn new() -> Self {
        Self {
            password: Signal::new(String::new()),
            state: Signal::new(GateState::Prompt),
        }
    }

    pub fn state(&self) -> GateState {
        *self.state.read()
    }

    /// The verified credential. Empty until the gate reaches `Ready`.
    pub fn credential(&self) -> String {
        self.password.peek().clone()
    }

    pub(crate) fn set_state(&mut self, state: GateState) {
        self.state.set(state);
    }

    /// Capture the verified credential and open the gate. Called exactly
    /// once, by the session gate component.
    pub(crate) fn unlock(&mut self, credential: String) {
        self.password.set(credential);
        self.state.set(GateState::Ready);
    }
}

impl Default for AdminSession {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_session_provider() -> AdminSession {
    use_context_provider(AdminSession::new)
}

pub fn use_session() -> AdminSession {
    use_context::<AdminSession>()
}
