//! Application lifecycle states.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle state of an [`super::application::Application`].
///
/// The enumeration is closed: document generation dispatches with an
/// exhaustive `match`, and only the three documented states have an
/// associated view-model builder. The remaining states are observed in
/// stored records but produce no document — the generator degrades to an
/// absent result for them.
///
/// The core never transitions an application between states; it only renders
/// based on the state observed at fetch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationState {
    /// Submitted, awaiting activation.
    Pending,
    /// Active; portfolio figures are reported in the document.
    Activated,
    /// Held back pending verification; the review reason is surfaced.
    InReview,
    /// Terminal: closed by the applicant. No document defined.
    Closed,
    /// Terminal: rejected during vetting. No document defined.
    Rejected,
}

impl ApplicationState {
    /// Human-readable label used inside rendered documents.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Activated => "Activated",
            Self::InReview => "In Review",
            Self::Closed => "Closed",
            Self::Rejected => "Rejected",
        }
    }

    /// `true` for states that have a document template.
    pub fn has_document(self) -> bool {
        matches!(self, Self::Pending | Self::Activated | Self::InReview)
    }
}

impl fmt::Display for ApplicationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
