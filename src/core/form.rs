use super::constants::{FORM_SENDING_MS, FORM_SUCCESS_MS};

pub const SENDING_LABEL: &str = "<i class=\"fas fa-spinner fa-spin\"></i> Sending...";
pub const SENT_LABEL: &str = "<i class=\"fas fa-check\"></i> Sent Successfully!";
pub const SENT_BACKGROUND: &str = "linear-gradient(135deg, #4CAF50, #2E7D32)";

/// Stages of the mocked contact-form submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
    Sent,
}

/// Submission state for one form. The submit button's original label is
/// kept so it can be restored when the flow returns to idle.
#[derive(Clone, Debug, Default)]
pub struct Submission {
    phase: SubmitPhase,
    original_label: String,
}

impl Submission {
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn original_label(&self) -> &str {
        &self.original_label
    }

    /// Start sending. Returns the delay until `sent` should be called, or
    /// `None` when a submission is already in flight.
    pub fn submit(&mut self, button_label: &str) -> Option<u32> {
        if self.phase != SubmitPhase::Idle {
            return None;
        }
        self.original_label = button_label.to_string();
        self.phase = SubmitPhase::Sending;
        Some(FORM_SENDING_MS)
    }

    /// Mark the mocked request as successful. Returns the delay until
    /// `finish` should be called.
    pub fn sent(&mut self) -> Option<u32> {
        if self.phase != SubmitPhase::Sending {
            return None;
        }
        self.phase = SubmitPhase::Sent;
        Some(FORM_SUCCESS_MS)
    }

    /// Return to idle, yielding the label to restore.
    pub fn finish(&mut self) -> Option<String> {
        if self.phase != SubmitPhase::Sent {
            return None;
        }
        self.phase = SubmitPhase::Idle;
        Some(std::mem::take(&mut self.original_label))
    }
}
