//! Typed admin command table.
//!
//! Every row-level admin action is one `AdminCommand` value carrying its
//! HTTP verb, endpoint path, confirmation prompt (destructive commands
//! only), success notice, and the set of collections to reload afterwards.
//! The UI dispatches commands through a single function instead of wiring
//! per-row handlers, so routing stays in one testable place.

/// The five admin collections, used to target reloads after a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Trips,
    Users,
    Transactions,
    Refunds,
    Transport,
}

/// HTTP verb a command is dispatched with. All command bodies carry the
/// admin credential; there is nothing else to serialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandVerb {
    Post,
    Delete,
}

/// One user-initiated admin mutation, keyed by entity id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminCommand {
    ApproveTransaction(String),
    DenyTransaction(String),
    ApproveRefund(String),
    DenyRefund(String),
    DeleteTrip(String),
    DeleteUser(String),
    DeleteRoute(String),
}

impl AdminCommand {
    pub fn verb(&self) -> CommandVerb {
        match self {
            AdminCommand::ApproveTransaction(_)
            | AdminCommand::ApproveRefund(_)
            | AdminCommand::DenyRefund(_) => CommandVerb::Post,
            AdminCommand::DenyTransaction(_)
            | AdminCommand::DeleteTrip(_)
            | AdminCommand::DeleteUser(_)
            | AdminCommand::DeleteRoute(_) => CommandVerb::Delete,
        }
    }

    pub fn path(&self) -> String {
        match self {
            AdminCommand::ApproveTransaction(id) => {
                format!("/api/wallet/confirm-transaction/{id}")
            }
            AdminCommand::DenyTransaction(id) => format!("/api/admin/transactions/{id}"),
            AdminCommand::ApproveRefund(id) => format!("/api/admin/refunds/{id}/approve"),
            AdminCommand::DenyRefund(id) => format!("/api/admin/refunds/{id}/deny"),
            AdminCommand::DeleteTrip(id) => format!("/api/admin/trips/{id}"),
            AdminCommand::DeleteUser(id) => format!("/api/admin/users/{id}"),
            AdminCommand::DeleteRoute(id) => format!("/api/admin/transport/{id}"),
        }
    }

    /// Confirmation prompt for commands that must not fire on a stray
    /// click. `None` means the command dispatches immediately.
    pub fn confirm_prompt(&self) -> Option<&'static str> {
        match self {
            AdminCommand::ApproveTransaction(_) => None,
            AdminCommand::DenyTransaction(_) => {
                Some("Deny and delete this pending transaction? This cannot be undone.")
            }
            AdminCommand::ApproveRefund(_) => {
                Some("Approve this refund? The amount will be added to the user's wallet.")
            }
            AdminCommand::DenyRefund(_) => Some("Deny this refund request?"),
            AdminCommand::DeleteTrip(_) => {
                Some("Delete this trip? This cannot be undone.")
            }
            AdminCommand::DeleteUser(_) => {
                Some("Permanently delete this user and all their data?")
            }
            AdminCommand::DeleteRoute(_) => {
                Some("Delete this transport route? This cannot be undone.")
            }
        }
    }

    pub fn success_notice(&self) -> &'static str {
        match self {
            AdminCommand::ApproveTransaction(_) => "Payment approved",
            AdminCommand::DenyTransaction(_) => "Transaction denied and deleted",
            AdminCommand::ApproveRefund(_) => "Refund approved",
            AdminCommand::DenyRefund(_) => "Refund denied",
            AdminCommand::DeleteTrip(_) => "Trip deleted",
            AdminCommand::DeleteUser(_) => "User deleted",
            AdminCommand::DeleteRoute(_) => "Transport route deleted",
        }
    }

    /// Collections invalidated by a successful dispatch. Approving a
    /// transaction or settling a refund changes wallet balances, so those
    /// reload Users as well.
    pub fn reloads(&self) -> &'static [Collection] {
        match self {
            AdminCommand::ApproveTransaction(_) => &[Collection::Transactions, Collection::Users],
            AdminCommand::DenyTransaction(_) => &[Collection::Transactions],
            AdminCommand::ApproveRefund(_) => &[Collection::Refunds, Collection::Users],
            AdminCommand::DenyRefund(_) => &[Collection::Refunds],
            AdminCommand::DeleteTrip(_) => &[Collection::Trips],
            AdminCommand::DeleteUser(_) => &[Collection::Users],
            AdminCommand::DeleteRoute(_) => &[Collection::Transport],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_carry_the_entity_id() {
        let cmd = AdminCommand::DeleteUser("u42".into());
        assert_eq!(cmd.path(), "/api/admin/users/u42");
        assert_eq!(cmd.verb(), CommandVerb::Delete);

        let cmd = AdminCommand::ApproveTransaction("tx9".into());
        assert_eq!(cmd.path(), "/api/wallet/confirm-transaction/tx9");
        assert_eq!(cmd.verb(), CommandVerb::Post);

        let cmd = AdminCommand::ApproveRefund("r1".into());
        assert_eq!(cmd.path(), "/api/admin/refunds/r1/approve");
    }

    #[test]
    fn destructive_commands_require_confirmation() {
        for cmd in [
            AdminCommand::DenyTransaction("a".into()),
            AdminCommand::DeleteTrip("a".into()),
            AdminCommand::DeleteUser("a".into()),
            AdminCommand::DeleteRoute("a".into()),
        ] {
            assert!(cmd.confirm_prompt().is_some(), "{cmd:?} must confirm");
        }
        assert!(AdminCommand::ApproveTransaction("a".into())
            .confirm_prompt()
            .is_none());
    }

    #[test]
    fn wallet_mutations_reload_users_too() {
        assert!(AdminCommand::ApproveTransaction("a".into())
            .reloads()
            .contains(&Collection::Users));
        assert!(AdminCommand::ApproveRefund("a".into())
            .reloads()
            .contains(&Collection::Users));
        assert_eq!(
            AdminCommand::DenyTransaction("a".into()).reloads(),
            &[Collection::Transactions]
        );
    }
}
