use tokio::time::Instant;

use crate::models::{Facility, Review};

use super::{
    report::{IssueReport, ReportPanel},
    review_form::ReviewDraft,
};

/// Overlay state for one opened facility. Nothing here is shared with the
/// list view or survives closing the overlay.
#[derive(Debug, Clone)]
pub struct DetailSession {
    facility: Facility,
    local_reviews: Vec<Review>,
    pub draft: ReviewDraft,
    pub report: ReportPanel,
}

impl DetailSession {
    pub fn open(facility: Facility) -> Self {
        let local_reviews = facility.reviews().to_vec();
        Self {
            facility,
            local_reviews,
            draft: ReviewDraft::default(),
            report: ReportPanel::default(),
        }
    }

    pub fn facility(&self) -> &Facility {
        &self.facility
    }

    /// Newest first.
    pub fn reviews(&self) -> &[Review] {
        &self.local_reviews
    }

    /// Post the current draft. Returns the new review, or `None` when the draft
    /// is incomplete.
    pub fn post_review(&mut self) -> Option<Review> {
        let review = self.draft.take_review()?;
        self.local_reviews.insert(0, review.clone());
        Some(review)
    }

    pub fn submit_report(&mut self, now: Instant) -> Option<IssueReport> {
        self.report.submit(&self.facility.id, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mock_facilities;

    #[test]
    fn starts_with_facility_reviews() {
        let facility = mock_facilities().remove(0);
        let session = DetailSession::open(facility.clone());
        assert_eq!(session.reviews(), facility.reviews());
    }

    #[test]
    fn posted_review_is_prepended() {
        let mut session = DetailSession::open(mock_facilities().remove(0));
        let before = session.reviews().len();

        session.draft.set_rating(3).unwrap();
        session.draft.text = "Queue was long".into();
        let posted = session.post_review().unwrap();

        assert_eq!(session.reviews().len(), before + 1);
        assert_eq!(session.reviews()[0], posted);
        assert_eq!(session.draft.rating(), 0);
        assert!(session.draft.text.is_empty());
    }

    #[test]
    fn zero_rating_post_is_a_no_op() {
        let mut session = DetailSession::open(mock_facilities().remove(0));
        let before = session.reviews().to_vec();
        session.draft.text = "Nice".into();

        assert!(session.post_review().is_none());
        assert_eq!(session.reviews(), before.as_slice());
        assert_eq!(session.draft.text, "Nice");
    }
}
