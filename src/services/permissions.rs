//! Storage permission gating for DriftBrowser.
//!
//! Snapshot writes and downloads need storage access the platform may
//! withhold. The gate turns the platform's answer into one of three
//! directives: proceed, explain once why the permission is needed and ask
//! again, or tell the user the feature is unavailable.

/// Platform answer for a permission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionState {
    Granted,
    Denied { can_ask_again: bool },
}

/// What the caller should do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionDirective {
    Proceed,
    /// Explain why the permission is needed, then re-request it.
    ShowRationale,
    /// Permission is not coming; surface that the feature is unavailable.
    NotifyDenied,
}

/// Remembers whether the rationale was already shown for the current
/// denial streak. A grant rearms it.
#[derive(Debug, Default)]
pub struct PermissionGate {
    rationale_shown: bool,
}

impl PermissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn evaluate(&mut self, state: PermissionState) -> PermissionDirective {
        match state {
            PermissionState::Granted => {
                self.rationale_shown = false;
                PermissionDirective::Proceed
            }
            PermissionState::Denied {
                can_ask_again: true,
            } => {
                if self.rationale_shown {
                    PermissionDirective::NotifyDenied
                } else {
                    self.rationale_shown = true;
                    PermissionDirective::ShowRationale
                }
            }
            PermissionState::Denied {
                can_ask_again: false,
            } => PermissionDirective::NotifyDenied,
        }
    }

    pub fn reset(&mut self) {
        self.rationale_shown = false;
    }
}
