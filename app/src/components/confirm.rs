//! Confirmation dialog for destructive admin commands.
//!
//! `ConfirmManager::run` is the single entry point panels use to fire a
//! command: commands with a confirmation prompt park in the dialog first,
//! the rest dispatch immediately. Declining clears the pending command
//! without any network call.

use dioxus::prelude::*;

use uniscape_types::AdminCommand;

use crate::components::toast::{ToastManager, use_toast};
use crate::data::{AdminData, use_admin_data};

#[derive(Clone, PartialEq)]
struct PendingCommand {
    prompt: &'static str,
    command: AdminCommand,
}

#[derive(Clone, Copy)]
pub struct ConfirmManager {
    pending: Signal<Option<PendingCommand>>,
}

impl ConfirmManager {
    pub fn new() -> Self {
        Self {
            pending: Signal::new(None),
        }
    }

    /// Route a command: destructive ones wait on the dialog, the rest
    /// dispatch right away.
    pub fn run(&mut self, command: AdminCommand, data: AdminData, toast: ToastManager) {
        match command.confirm_prompt() {
            Some(prompt) => self.pending.set(Some(PendingCommand { prompt, command })),
            None => data.dispatch(command, toast),
        }
    }

    fn decline(&mut self) {
        self.pending.set(None);
    }
}

impl Default for ConfirmManager {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_confirm_provider() -> ConfirmManager {
    use_context_provider(ConfirmManager::new)
}

pub fn use_confirm() -> ConfirmManager {
    use_context::<ConfirmManager>()
}

#[component]
pub fn ConfirmDialog() -> Element {
    let mut manager = use_confirm();
    let data = use_admin_data();
    let toast = use_toast();

    let pending = manager.pending.read();
    let Some(request) = pending.as_ref() else {
        return rsx! {};
    };
    let prompt = request.prompt;
    let command = request.command.clone();
    drop(pending);

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| manager.decline(),
            div {
                class: "confirm-dialog",
                onclick: move |e| e.stop_propagation(),

                p { class: "confirm-message", "{prompt}" }

                div { class: "modal-footer",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| manager.decline(),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| {
                            manager.decline();
                            data.dispatch(command.clone(), toast);
                        },
                        "Confirm"
                    }
                }
            }
        }
    }
}
