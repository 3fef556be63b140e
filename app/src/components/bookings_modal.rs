//! Per-trip bookings viewer.

use dioxus::prelude::*;
use tracing::error;

use uniscape_types::models::Booking;
use uniscape_types::LoadState;

use crate::api;
use crate::data::AdminData;

/// Modal state shared through context. `trip` holds the id and
/// destination of the trip whose bookings are on display.
#[derive(Clone, Copy)]
pub struct BookingsViewer {
    trip: Signal<Option<(String, String)>>,
    state: Signal<LoadState<Booking>>,
}

impl BookingsViewer {
    pub fn new() -> Self {
        Self {
            trip: Signal::new(None),
            state: Signal::new(LoadState::Loading),
        }
    }

    pub fn open(&mut self, trip_id: String, destination: String, data: AdminData) {
        self.trip.set(Some((trip_id.clone(), destination)));
        self.state.set(LoadState::Loading);
        let mut state = self.state;
        spawn(async move {
            let result = api::fetch_bookings(&trip_id, &data.credential()).await;
            if let Err(err) = &result {
                error!("loading bookings for trip {trip_id} failed: {err}");
            }
            state.set(LoadState::from_result(result));
        });
    }

    pub fn close(&mut self) {
        self.trip.set(None);
    }
}

impl Default for BookingsViewer {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_bookings_provider() -> BookingsViewer {
    use_context_provider(BookingsViewer::new)
}

pub fn use_bookings() -> BookingsViewer {
    use_context::<BookingsViewer>()
}

#[component]
pub fn BookingsModal() -> Element {
    let mut viewer = use_bookings();

    let trip = viewer.trip.read();
    let Some((_, destination)) = trip.as_ref() else {
        return rsx! {};
    };
    let destination = destination.clone();
    drop(trip);

    let state = viewer.state.read();

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| viewer.close(),
            div {
                class: "modal bookings-modal",
                onclick: move |e| e.stop_propagation(),

                div { class: "modal-header",
                    h3 { "Bookings for {destination}" }
                    button { class: "modal-close", onclick: move |_| viewer.close(), "\u{00D7}" }
                }

                table { class: "data-table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Email" }
                            th { "Phone" }
                            th { "SAP ID" }
                        }
                    }
                    tbody {
                        match &*state {
                            LoadState::Loading => rsx! {
                                tr { td { colspan: 4, class: "row-info", "Loading bookings..." } }
                            },
                            LoadState::Empty => rsx! {
                                tr { td { colspan: 4, class: "row-info", "No one has booked this trip yet." } }
                            },
                            LoadState::Failed(message) => rsx! {
                                tr { td { colspan: 4, class: "row-error", "{message}" } }
                            },
                            LoadState::Loaded(bookings) => rsx! {
                                for (index, booking) in bookings.iter().enumerate() {
                                    {
                                        let user = booking.user.clone().unwrap_or_default();
                                        rsx! {
                                            tr { key: "{index}",
                                                td { if user.name.is_empty() { "N/A" } else { "{user.name}" } }
                                                td { "{user.email}" }
                                                td { "{user.phone}" }
                                                td { "{user.sap_id}" }
                                            }
                                        }
                                    }
                                }
                            },
                        }
                    }
                }
            }
        }
    }
}
