//! Two-step confirmation for destructive actions
//!
//! Deleting an employee and clearing a department's week cannot be undone.
//! Asking for either returns a token; the action runs only when the token is
//! confirmed. Cancelling, or never answering, leaves the roster untouched.
//! Tokens are single use. At most one action of each kind is pending: a new
//! request replaces the older one and its token stops working.

use super::store::{self, StoreOutcome};
use shared::models::{Department, Roster};
use std::collections::HashMap;
use std::fmt;

/// A destructive action waiting for an answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    RemoveEmployee { department: Department, id: String },
    ClearAll { department: Department },
}

impl PendingAction {
    /// Question shown to the user
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::RemoveEmployee { .. } => {
                "Êtes-vous sûr de vouloir supprimer cet employé définitivement?"
            }
            Self::ClearAll { .. } => "Êtes-vous sûr de vouloir vider toutes les cases?",
        }
    }

    pub fn department(&self) -> Department {
        match self {
            Self::RemoveEmployee { department, .. } | Self::ClearAll { department } => *department,
        }
    }

    /// Run the action against a snapshot
    pub fn apply(&self, roster: &Roster) -> StoreOutcome {
        match self {
            Self::RemoveEmployee { department, id } => store::remove(roster, *department, id),
            Self::ClearAll { department } => store::clear_all(roster, *department),
        }
    }
}

/// Opaque handle for a pending action
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfirmationToken(String);

impl ConfirmationToken {
    fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ConfirmationToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ConfirmationToken {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ConfirmationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pending destructive actions by token
#[derive(Debug, Default)]
pub struct Confirmations {
    pending: HashMap<ConfirmationToken, PendingAction>,
}

impl Confirmations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an action and hand out its token
    pub fn request(&mut self, action: PendingAction) -> ConfirmationToken {
        let kind = std::mem::discriminant(&action);
        self.pending.retain(|previous, pending| {
            let keep = std::mem::discriminant(pending) != kind;
            if !keep {
                tracing::debug!(token = %previous, "Pending confirmation replaced");
            }
            keep
        });

        let token = ConfirmationToken::generate();
        tracing::debug!(token = %token, action = ?action, "Confirmation requested");
        self.pending.insert(token.clone(), action);
        token
    }

    /// Look at a pending action without consuming it
    pub fn get(&self, token: &ConfirmationToken) -> Option<&PendingAction> {
        self.pending.get(token)
    }

    /// Consume the token and return the action to run
    pub fn confirm(&mut self, token: &ConfirmationToken) -> Option<PendingAction> {
        self.pending.remove(token)
    }

    /// Consume the token without running anything. Returns whether it existed.
    pub fn cancel(&mut self, token: &ConfirmationToken) -> bool {
        let existed = self.pending.remove(token).is_some();
        if existed {
            tracing::debug!(token = %token, "Confirmation cancelled");
        }
        existed
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
