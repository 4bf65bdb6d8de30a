use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::time::Instant;
use uuid::Uuid;

const ENABLE_LOGS: bool = true;

/// How long the "report submitted" acknowledgment stays up.
pub const REPORT_ACK_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ReportCategory {
    #[serde(rename = "Permanently Closed")]
    PermanentlyClosed,
    #[serde(rename = "Wrong Location")]
    WrongLocation,
    #[serde(rename = "Incorrect Hours")]
    IncorrectHours,
    #[serde(rename = "Incorrect Facilities")]
    IncorrectFacilities,
    #[serde(rename = "Poor Cleanliness")]
    PoorCleanliness,
    Other,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueReport {
    pub id: String,
    pub facility_id: String,
    pub category: ReportCategory,
    pub details: String,
    pub submitted_at: DateTime<Utc>,
}

/// The in-place "Report Issue" form.
#[derive(Debug, Clone, Default)]
pub struct ReportPanel {
    pub is_open: bool,
    pub category: Option<ReportCategory>,
    pub details: String,
    acknowledged_at: Option<Instant>,
}

impl ReportPanel {
    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn is_acknowledged(&self) -> bool {
        self.acknowledged_at.is_some()
    }

    /// Submit the report. Nothing happens without a category or while a
    /// previous acknowledgment is still showing.
    pub fn submit(&mut self, facility_id: &str, now: Instant) -> Option<IssueReport> {
        if self.acknowledged_at.is_some() {
            return None;
        }
        let category = self.category?;

        let report = IssueReport {
            id: Uuid::new_v4().to_string(),
            facility_id: facility_id.to_string(),
            category,
            details: self.details.clone(),
            submitted_at: Utc::now(),
        };
        crate::log_info!(
            "[report] facility {} flagged {:?}: {:?}",
            report.facility_id,
            report.category,
            report.details
        );

        self.is_open = true;
        self.acknowledged_at = Some(now);
        Some(report)
    }

    /// Close and clear the form once the acknowledgment has been up for
    /// `REPORT_ACK_DURATION`. Returns true when it dismissed.
    pub fn poll_dismiss(&mut self, now: Instant) -> bool {
        match self.acknowledged_at {
            Some(at) if now.saturating_duration_since(at) >= REPORT_ACK_DURATION => {
                *self = Self::default();
                true
            }
            _ => false,
        }
    }
}
