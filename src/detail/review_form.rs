use anyhow::{bail, Result};
use uuid::Uuid;

use crate::models::Review;

pub const LOCAL_AUTHOR: &str = "You";
pub const LOCAL_DATE: &str = "Just now";

/// Star rating and text being composed in the detail overlay. A rating of 0
/// means no star has been picked yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewDraft {
    rating: u8,
    pub text: String,
}

impl ReviewDraft {
    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn set_rating(&mut self, rating: u8) -> Result<()> {
        if rating > 5 {
            bail!("rating must be between 0 and 5, got {rating}");
        }
        self.rating = rating;
        Ok(())
    }

    pub fn is_postable(&self) -> bool {
        self.rating > 0 && !self.text.trim().is_empty()
    }

    /// Turn the draft into a review and reset it, or leave it untouched when
    /// incomplete.
    pub fn take_review(&mut self) -> Option<Review> {
        if !self.is_postable() {
            return None;
        }
        let draft = std::mem::take(self);
        Some(Review::new(
            format!("lr-{}", Uuid::new_v4()),
            LOCAL_AUTHOR,
            draft.rating,
            draft.text,
            LOCAL_DATE,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_ratings_above_five() {
        let mut draft = ReviewDraft::default();
        assert!(draft.set_rating(6).is_err());
        assert_eq!(draft.rating(), 0);
    }

    #[test]
    fn incomplete_drafts_are_kept() {
        let mut draft = ReviewDraft::default();
        draft.text = "Clean".into();
        assert!(draft.take_review().is_none());
        assert_eq!(draft.text, "Clean");

        draft.set_rating(4).unwrap();
        draft.text = "   ".into();
        assert!(draft.take_review().is_none());
        assert_eq!(draft.rating(), 4);
    }

    #[test]
    fn complete_draft_becomes_review_and_resets() {
        let mut draft = ReviewDraft::default();
        draft.set_rating(5).unwrap();
        draft.text = "Spotless".into();

        let review = draft.take_review().unwrap();
        assert!(review.id.starts_with("lr-"));
        assert_eq!(review.user_name, "You");
        assert_eq!(review.comment, "Spotless");
        assert_eq!(review.date, "Just now");
        assert_eq!(draft, ReviewDraft::default());
    }
}
