//! Admin dashboard shell: context providers, header, panels, overlays.

use dioxus::prelude::*;

use crate::components::background_panel::BackgroundPanel;
use crate::components::bookings_modal::{BookingsModal, use_bookings_provider};
use crate::components::confirm::{ConfirmDialog, use_confirm_provider};
use crate::components::refunds_panel::RefundsPanel;
use crate::components::session_gate::SessionGate;
use crate::components::theme::ThemeToggle;
use crate::components::toast::{ToastFrame, use_toast_provider};
use crate::components::transactions_panel::TransactionsPanel;
use crate::components::transport_editor::{RouteEditorModal, use_route_editor_provider};
use crate::components::transport_panel::TransportPanel;
use crate::components::trip_editor::{TripEditorModal, use_trip_editor_provider};
use crate::components::trips_panel::TripsPanel;
use crate::components::users_panel::UsersPanel;
use crate::data::use_admin_data_provider;
use crate::session::{GateState, use_session_provider};

#[component]
pub fn AdminPage() -> Element {
    // Context order matters: everything below the gate reads these.
    use_toast_provider();
    let session = use_session_provider();
    let data = use_admin_data_provider(session);
    use_confirm_provider();
    use_trip_editor_provider();
    use_route_editor_provider();
    use_bookings_provider();

    let ready = session.state() == GateState::Ready;
    let refreshing = *data.refreshing.read();

    rsx! {
        div { class: "admin-page",
            header { class: "admin-header",
                h1 { "UniScape Admin" }
                div { class: "header-actions",
                    if ready {
                        button {
                            class: "btn btn-outline",
                            disabled: refreshing,
                            onclick: move |_| data.refresh_all(),
                            if refreshing {
                                i { class: "fa-solid fa-spinner fa-spin" }
                                " Refreshing..."
                            } else {
                                i { class: "fa-solid fa-rotate" }
                                " Refresh All"
                            }
                        }
                    }
                    ThemeToggle {}
                }
            }

            if ready {
                main { class: "admin-panels",
                    TripsPanel {}
                    TransportPanel {}
                    UsersPanel {}
                    TransactionsPanel {}
                    RefundsPanel {}
                    BackgroundPanel {}
                }
                TripEditorModal {}
                RouteEditorModal {}
                BookingsModal {}
                ConfirmDialog {}
            } else {
                SessionGate {}
            }

            ToastFrame {}
        }
    }
}
