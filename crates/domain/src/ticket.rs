//! Support tickets — complaints filed against an appliance, triaged by
//! severity before they reach a technician.

use serde::{Deserialize, Serialize};

use crate::error::{HearthError, ValidationError};
use crate::id::TicketId;
use crate::time::{Timestamp, now};

/// Lifecycle state of a support ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TicketStatus {
    #[default]
    Received,
    InProgress,
    Completed,
}

/// Severity assigned by triage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketPriority {
    Mild,
    Medium,
    Severe,
}

/// Follow-up the triage recommends for the support team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuggestedAction {
    /// Send a self-help video tutorial.
    VideoLink,
    /// Book a technician visit.
    ScheduleTechnician,
    /// Issue a compensation voucher and escalate immediately.
    UrgentVoucher,
}

/// A filed support ticket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    /// Display name of the affected appliance.
    pub device: String,
    /// Short summary of the problem.
    pub issue: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub created_at: Timestamp,
    /// Response shown to the customer, if one has been issued.
    pub response: Option<String>,
}

/// A customer complaint, before triage.
#[derive(Debug, Clone, Deserialize)]
pub struct Complaint {
    /// Display name of the affected appliance.
    pub device: String,
    /// Pre-selected issue categories.
    pub issues: Vec<String>,
    /// Free-text description.
    pub description: String,
}

impl Complaint {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::Validation`] when the device name is empty, or
    /// when neither an issue category nor a description was provided.
    pub fn validate(&self) -> Result<(), HearthError> {
        if self.device.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.issues.is_empty() && self.description.trim().is_empty() {
            return Err(ValidationError::EmptyComplaint.into());
        }
        Ok(())
    }

    /// The issue summary stored on the resulting ticket: the selected
    /// categories, or the description when none were selected.
    #[must_use]
    pub fn summary(&self) -> String {
        if self.issues.is_empty() {
            self.description.clone()
        } else {
            self.issues.join(", ")
        }
    }
}

/// Result of triaging a complaint.
#[derive(Debug, Clone, Serialize)]
pub struct TriageOutcome {
    pub priority: TicketPriority,
    pub response_message: String,
    pub suggested_action: SuggestedAction,
}

/// Keywords that indicate a safety hazard or complete breakdown of an
/// essential appliance. Checked before the mild set — severity wins ties.
/// Degraded-but-running symptoms ("not cooling well", error codes) are not
/// severe; they take the medium default below.
const SEVERE_KEYWORDS: &[&str] = &[
    "spark", "smoke", "fire", "leak", "burn", "shock", "flood", "broken down", "dead",
];

/// Keywords that indicate a general usage question with a self-help answer.
const MILD_KEYWORDS: &[&str] = &["how to", "usage", "filter", "clean", "batter", "manual", "remote"];

/// Classify a complaint by severity and recommend a follow-up.
///
/// Pure keyword matching over the issue categories and description: safety
/// hazards and essential-appliance breakdowns are severe, self-help usage
/// questions are mild, and everything else lands in the middle with a
/// technician visit.
#[must_use]
pub fn triage(complaint: &Complaint) -> TriageOutcome {
    let text = format!(
        "{} {}",
        complaint.issues.join(" "),
        complaint.description
    )
    .to_lowercase();

    if SEVERE_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        return TriageOutcome {
            priority: TicketPriority::Severe,
            response_message: format!(
                "We're so sorry about the trouble with your {}. This has been \
                 marked urgent and a voucher is on its way while we arrange \
                 immediate help.",
                complaint.device
            ),
            suggested_action: SuggestedAction::UrgentVoucher,
        };
    }

    if MILD_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        return TriageOutcome {
            priority: TicketPriority::Mild,
            response_message: format!(
                "Good news — this looks like something you can fix in a few \
                 minutes. We've sent a short video guide for your {}.",
                complaint.device
            ),
            suggested_action: SuggestedAction::VideoLink,
        };
    }

    TriageOutcome {
        priority: TicketPriority::Medium,
        response_message: "We have received your request and a technician will review it shortly."
            .to_string(),
        suggested_action: SuggestedAction::ScheduleTechnician,
    }
}

impl Ticket {
    /// File a ticket for a validated complaint using the given triage outcome.
    #[must_use]
    pub fn file(complaint: &Complaint, outcome: &TriageOutcome) -> Self {
        Self {
            id: TicketId::new(),
            device: complaint.device.clone(),
            issue: complaint.summary(),
            status: TicketStatus::Received,
            priority: outcome.priority,
            created_at: now(),
            response: Some(outcome.response_message.clone()),
        }
    }

    /// Mark the ticket completed with a closing response.
    pub fn complete(&mut self, response: impl Into<String>) {
        self.status = TicketStatus::Completed;
        self.response = Some(response.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complaint(issues: &[&str], description: &str) -> Complaint {
        Complaint {
            device: "Smart Washer".to_string(),
            issues: issues.iter().map(ToString::to_string).collect(),
            description: description.to_string(),
        }
    }

    #[test]
    fn should_classify_safety_hazards_as_severe() {
        let outcome = triage(&complaint(&["Sparking near the plug"], ""));
        assert_eq!(outcome.priority, TicketPriority::Severe);
        assert_eq!(outcome.suggested_action, SuggestedAction::UrgentVoucher);
    }

    #[test]
    fn should_classify_leaks_as_severe() {
        let outcome = triage(&complaint(&[], "Water is leaking onto the floor"));
        assert_eq!(outcome.priority, TicketPriority::Severe);
    }

    #[test]
    fn should_classify_usage_questions_as_mild() {
        let outcome = triage(&complaint(&[], "How to clean the filter?"));
        assert_eq!(outcome.priority, TicketPriority::Mild);
        assert_eq!(outcome.suggested_action, SuggestedAction::VideoLink);
    }

    #[test]
    fn should_classify_degraded_cooling_as_medium() {
        let outcome = triage(&complaint(&[], "The AC is not cooling well"));
        assert_eq!(outcome.priority, TicketPriority::Medium);
        assert_eq!(outcome.suggested_action, SuggestedAction::ScheduleTechnician);
    }

    #[test]
    fn should_classify_complete_breakdown_as_severe() {
        let outcome = triage(&complaint(&[], "The fridge has broken down completely"));
        assert_eq!(outcome.priority, TicketPriority::Severe);
    }

    #[test]
    fn should_default_to_medium_with_technician_visit() {
        let outcome = triage(&complaint(&["Error code E21 on display"], ""));
        assert_eq!(outcome.priority, TicketPriority::Medium);
        assert_eq!(outcome.suggested_action, SuggestedAction::ScheduleTechnician);
        assert_eq!(
            outcome.response_message,
            "We have received your request and a technician will review it shortly."
        );
    }

    #[test]
    fn should_prefer_severe_over_mild_when_both_match() {
        let outcome = triage(&complaint(&[], "Smoke came out while I was cleaning the filter"));
        assert_eq!(outcome.priority, TicketPriority::Severe);
    }

    #[test]
    fn should_reject_complaint_without_device_name() {
        let mut c = complaint(&["Loud noise"], "");
        c.device = String::new();
        assert!(matches!(
            c.validate(),
            Err(HearthError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_reject_complaint_without_any_content() {
        let c = complaint(&[], "   ");
        assert!(matches!(
            c.validate(),
            Err(HearthError::Validation(ValidationError::EmptyComplaint))
        ));
    }

    #[test]
    fn should_summarize_selected_issues() {
        let c = complaint(&["Loud noise", "Vibrates"], "ignored");
        assert_eq!(c.summary(), "Loud noise, Vibrates");
    }

    #[test]
    fn should_fall_back_to_description_when_no_issues_selected() {
        let c = complaint(&[], "Loud noise during spin");
        assert_eq!(c.summary(), "Loud noise during spin");
    }

    #[test]
    fn should_file_ticket_as_received_with_triage_response() {
        let c = complaint(&["Loud noise during spin"], "");
        let outcome = triage(&c);
        let ticket = Ticket::file(&c, &outcome);

        assert_eq!(ticket.status, TicketStatus::Received);
        assert_eq!(ticket.priority, TicketPriority::Medium);
        assert_eq!(ticket.device, "Smart Washer");
        assert_eq!(ticket.issue, "Loud noise during spin");
        assert_eq!(ticket.response.as_deref(), Some(outcome.response_message.as_str()));
    }

    #[test]
    fn should_complete_ticket_with_closing_response() {
        let c = complaint(&["Loud noise"], "");
        let mut ticket = Ticket::file(&c, &triage(&c));

        ticket.complete("Drum bearing replaced under warranty.");
        assert_eq!(ticket.status, TicketStatus::Completed);
        assert_eq!(
            ticket.response.as_deref(),
            Some("Drum bearing replaced under warranty.")
        );
    }

    #[test]
    fn should_roundtrip_ticket_through_serde_json() {
        let c = complaint(&["Loud noise"], "");
        let ticket = Ticket::file(&c, &triage(&c));
        let json = serde_json::to_string(&ticket).unwrap();
        let parsed: Ticket = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, ticket.id);
        assert_eq!(parsed.priority, ticket.priority);
    }
}
