pub mod admin_page;
pub mod background_panel;
pub mod bookings_modal;
pub mod confirm;
pub mod login_form;
pub mod refunds_panel;
pub mod session_gate;
pub mod signup_form;
pub mod theme;
pub mod toast;
pub mod transactions_panel;
pub mod transport_editor;
pub mod transport_panel;
pub mod trip_editor;
pub mod trips_panel;
pub mod users_panel;

pub use admin_page::AdminPage;
pub use login_form::LoginPage;
pub use signup_form::SignupPage;
