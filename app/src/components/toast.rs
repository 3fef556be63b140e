//! Non-blocking toast notices.
//!
//! All operator feedback (success confirmations, server-reported failures,
//! connectivity errors) flows through this manager instead of blocking
//! alert dialogs. Access it from any component via `use_toast()`.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

/// Kind of notice; controls styling and how long it stays up.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastSeverity {
    Success,
    Error,
}

impl ToastSeverity {
    fn duration_ms(self) -> u32 {
        match self {
            ToastSeverity::Success => 4000,
            ToastSeverity::Error => 6000,
        }
    }
}

#[derive(Clone)]
struct Toast {
    id: u32,
    message: String,
    severity: ToastSeverity,
}

/// Toast queue shared through context. At most four notices are visible;
/// the oldest is dropped when a fifth arrives.
#[derive(Clone, Copy)]
pub struct ToastManager {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u32>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self {
            toasts: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    /// Queue a notice; it dismisses itself after the severity's duration.
    pub fn show(&mut self, message: impl Into<String>, severity: ToastSeverity) {
        let id = *self.next_id.peek();
        *self.next_id.write() += 1;

        {
            let mut toasts = self.toasts.write();
            if toasts.len() >= 4 {
                toasts.remove(0);
            }
            toasts.push(Toast {
                id,
                message: message.into(),
                severity,
            });
        }

        let mut toasts = self.toasts;
        let duration = severity.duration_ms();
        spawn(async move {
            TimeoutFuture::new(duration).await;
            toasts.write().retain(|t| t.id != id);
        });
    }

    pub fn dismiss(&mut self, id: u32) {
        self.toasts.write().retain(|t| t.id != id);
    }
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Install the toast context at a page root, before any child that notifies.
pub fn use_toast_provider() -> ToastManager {
    use_context_provider(ToastManager::new)
}

pub fn use_toast() -> ToastManager {
    use_context::<ToastManager>()
}

/// Renders the active notices; place once at the end of a page layout.
#[component]
pub fn ToastFrame() -> Element {
    let mut manager = use_toast();
    let toasts = manager.toasts.read();

    rsx! {
        div { class: "toast-stack",
            for toast in toasts.iter() {
                div {
                    key: "{toast.id}",
                    class: match toast.severity {
                        ToastSeverity::Success => "toast toast-success",
                        ToastSeverity::Error => "toast toast-error",
                    },
                    span { class: "toast-icon",
                        match toast.severity {
                            ToastSeverity::Success => rsx! { i { class: "fa-solid fa-circle-check" } },
                            ToastSeverity::Error => rsx! { i { class: "fa-solid fa-circle-exclamation" } },
                        }
                    }
                    span { class: "toast-message", "{toast.message}" }
                    button {
                        class: "toast-close",
                        onclick: {
                            let id = toast.id;
                            move |_| manager.dismiss(id)
                        },
                        "\u{00D7}"
                    }
                }
            }
        }
    }
}
