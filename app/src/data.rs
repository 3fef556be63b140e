//! Admin collection state: resource loaders, command dispatch, refresh
//! orchestration, and the optimistic status toggles.
//!
//! Each of the five collections is loaded independently and replaced
//! wholesale; no loader waits on another. Loaders terminate their own
//! failures in `LoadState::Failed`, which is what lets `refresh_all` treat
//! the joint await as infallible.

use std::future::Future;
use std::pin::Pin;

use dioxus::prelude::*;
use futures::future::join_all;
use tracing::{error, info};

use uniscape_types::models::{RefundRequest, Transaction, TransportRoute, Trip, TripStatus, User};
use uniscape_types::{AdminCommand, Collection, LoadState};

use crate::api;
use crate::components::toast::{ToastManager, ToastSeverity};
use crate::session::AdminSession;

/// Shared admin dashboard state: one signal per collection plus the batch
/// refresh flag. Copyable; hand it to any component via context.
#[derive(Clone, Copy)]
pub struct AdminData {
    session: AdminSession,
    pub trips: Signal<LoadState<Trip>>,
    pub users: Signal<LoadState<User>>,
    pub transactions: Signal<LoadState<Transaction>>,
    pub refunds: Signal<LoadState<RefundRequest>>,
    pub routes: Signal<LoadState<TransportRoute>>,
    pub refreshing: Signal<bool>,
}

pub fn use_admin_data_provider(session: AdminSession) -> AdminData {
    use_context_provider(|| AdminData::new(session))
}

pub fn use_admin_data() -> AdminData {
    use_context::<AdminData>()
}

impl AdminData {
    pub fn new(session: AdminSession) -> Self {
        Self {
            session,
            trips: Signal::new(LoadState::Loading),
            users: Signal::new(LoadState::Loading),
            transactions: Signal::new(LoadState::Loading),
            refunds: Signal::new(LoadState::Loading),
            routes: Signal::new(LoadState::Loading),
            refreshing: Signal::new(false),
        }
    }

    pub fn credential(&self) -> String {
        self.session.credential()
    }

    // ── Resource loaders ────────────────────────────────────────────────

    pub async fn reload_trips(mut self) {
        self.trips.set(LoadState::Loading);
        let result = api::fetch_trips().await;
        if let Err(err) = &result {
            error!("trips load failed: {err}");
        }
        self.trips.set(LoadState::from_result(result));
    }

    pub async fn reload_users(mut self) {
        self.users.set(LoadState::Loading);
        let password = self.credential();
        let result = api::fetch_users(&password).await;
        if let Err(err) = &result {
            error!("users load failed: {err}");
        }
        self.users.set(LoadState::from_result(result));
    }

    pub async fn reload_transactions(mut self) {
        self.transactions.set(LoadState::Loading);
        let password = self.credential();
        let result = api::fetch_pending_transactions(&password).await;
        if let Err(err) = &result {
            error!("pending transactions load failed: {err}");
        }
        self.transactions.set(LoadState::from_result(result));
    }

    pub async fn reload_refunds(mut self) {
        self.refunds.set(LoadState::Loading);
        let password = self.credential();
        let result = api::fetch_refunds(&password).await;
        if let Err(err) = &result {
            error!("refunds load failed: {err}");
        }
        self.refunds.set(LoadState::from_result(result));
    }

    pub async fn reload_routes(mut self) {
        self.routes.set(LoadState::Loading);
        let password = self.credential();
        let result = api::fetch_routes(&password).await;
        if let Err(err) = &result {
            error!("transport routes load failed: {err}");
        }
        self.routes.set(LoadState::from_result(result));
    }

    /// Fire one loader in the background.
    pub fn load(self, collection: Collection) {
        match collection {
            Collection::Trips => {
                spawn(self.reload_trips());
            }
            Collection::Users => {
                spawn(self.reload_users());
            }
            Collection::Transactions => {
                spawn(self.reload_transactions());
            }
            Collection::Refunds => {
                spawn(self.reload_refunds());
            }
            Collection::Transport => {
                spawn(self.reload_routes());
            }
        }
    }

    /// Initial batch load once the gate opens: five independent fetches,
    /// no ordering between them.
    pub fn load_all(self) {
        info!("admin gate open, loading all collections");
        for collection in [
            Collection::Trips,
            Collection::Users,
            Collection::Transactions,
            Collection::Refunds,
            Collection::Transport,
        ] {
            self.load(collection);
        }
    }

    // ── Refresh orchestrator ────────────────────────────────────────────

    /// Batch refresh: busy flag up, all loaders in flight together, busy
    /// flag restored after the joint await. Loaders swallow their own
    /// errors, so the restore is unconditional.
    pub fn refresh_all(mut self) {
        if *self.refreshing.peek() {
            return;
        }
        spawn(async move {
            self.refreshing.set(true);
            let jobs: Vec<Pin<Box<dyn Future<Output = ()>>>> = vec![
                Box::pin(self.reload_trips()),
                Box::pin(self.reload_users()),
                Box::pin(self.reload_transactions()),
                Box::pin(self.reload_refunds()),
                Box::pin(self.reload_routes()),
            ];
            join_all(jobs).await;
            self.refreshing.set(false);
        });
    }

    // ── Command dispatch ────────────────────────────────────────────────

    /// Execute a typed admin command and reload whatever it invalidated.
    /// Confirmation (for destructive commands) happens before this point;
    /// by the time a command reaches dispatch it is cleared to fire.
    pub fn dispatch(self, command: AdminCommand, mut toast: ToastManager) {
        let password = self.credential();
        spawn(async move {
            match api::run_command(&command, &password).await {
                Ok(()) => {
                    toast.show(command.success_notice(), ToastSeverity::Success);
                    for collection in command.reloads() {
                        self.load(*collection);
                    }
                }
                Err(err) => {
                    error!("admin command {command:?} failed: {err}");
                    toast.show(err.notice(), ToastSeverity::Error);
                }
            }
        });
    }

    // ── Optimistic status toggles ───────────────────────────────────────

    /// Flip a trip's status switch: reflect the new state immediately,
    /// then confirm with the backend. Any failure reverts the switch to
    /// its pre-click state and surfaces the message.
    pub fn toggle_trip_status(self, toast: ToastManager, trip_id: String, current: TripStatus) {
        let next = current.toggled();
        self.set_trip_status_local(&trip_id, next);
        let password = self.credential();
        spawn(async move {
            match api::set_trip_status(&trip_id, next, &password).await {
                Ok(()) => self.load(Collection::Trips),
                Err(err) => {
                    error!("trip status toggle failed: {err}");
                    self.set_trip_status_local(&trip_id, current);
                    let mut toast = toast;
                    toast.show(err.notice(), ToastSeverity::Error);
                }
            }
        });
    }

    /// Same contract as [`Self::toggle_trip_status`] for transport routes.
    pub fn toggle_route_status(self, toast: ToastManager, route_id: String, current: TripStatus) {
        let next = current.toggled();
        self.set_route_status_local(&route_id, next);
        let password = self.credential();
        spawn(async move {
            match api::set_route_status(&route_id, next, &password).await {
                Ok(()) => self.load(Collection::Transport),
                Err(err) => {
                    error!("route status toggle failed: {err}");
                    self.set_route_status_local(&route_id, current);
                    let mut toast = toast;
                    toast.show(err.notice(), ToastSeverity::Error);
                }
            }
        });
    }

    fn set_trip_status_local(mut self, trip_id: &str, status: TripStatus) {
        if let LoadState::Loaded(trips) = &mut *self.trips.write() {
            if let Some(trip) = trips.iter_mut().find(|t| t.id == trip_id) {
                trip.status = status;
            }
        }
    }

    fn set_route_status_local(mut self, route_id: &str, status: TripStatus) {
        if let LoadState::Loaded(routes) = &mut *self.routes.write() {
            if let Some(route) = routes.iter_mut().find(|r| r.id == route_id) {
                route.status = status;
            }
        }
    }
}
