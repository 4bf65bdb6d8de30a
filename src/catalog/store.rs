use anyhow::{bail, Result};
use std::{
    collections::HashSet,
    sync::{Arc, RwLock, RwLockReadGuard},
};

use crate::models::Facility;

use super::mock::mock_facilities;

/// In-memory facility list shared between the browse view and the enrichment
/// controller. Only ever replaced wholesale.
#[derive(Clone)]
pub struct FacilityStore {
    data: Arc<RwLock<Vec<Facility>>>,
}

impl FacilityStore {
    pub fn new(facilities: Vec<Facility>) -> Result<Self> {
        validate_list(&facilities)?;
        Ok(Self {
            data: Arc::new(RwLock::new(facilities)),
        })
    }

    pub fn with_mock_data() -> Self {
        Self {
            data: Arc::new(RwLock::new(mock_facilities())),
        }
    }

    /// Borrow the current list. Hold the guard only for the duration of a
    /// single pipeline run.
    pub fn read(&self) -> RwLockReadGuard<'_, Vec<Facility>> {
        self.data.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn snapshot(&self) -> Vec<Facility> {
        self.read().clone()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn find(&self, id: &str) -> Option<Facility> {
        self.read().iter().find(|f| f.id == id).cloned()
    }

    /// Swap in a new list. An invalid list leaves the current one untouched.
    pub fn replace_all(&self, facilities: Vec<Facility>) -> Result<()> {
        validate_list(&facilities)?;
        let mut guard = self.data.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = facilities;
        Ok(())
    }
}

fn validate_list(facilities: &[Facility]) -> Result<()> {
    let mut seen = HashSet::with_capacity(facilities.len());
    for facility in facilities {
        facility.validate()?;
        if !seen.insert(facility.id.as_str()) {
            bail!("duplicate facility id {}", facility.id);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_all_swaps_the_list() {
        let store = FacilityStore::with_mock_data();
        let mut replacement = mock_facilities();
        replacement.truncate(3);

        store.replace_all(replacement).unwrap();
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn replace_all_rejects_duplicate_ids_and_keeps_previous_list() {
        let store = FacilityStore::with_mock_data();
        let before = store.snapshot();

        let mut replacement = mock_facilities();
        replacement[1].id = replacement[0].id.clone();

        assert!(store.replace_all(replacement).is_err());
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn new_rejects_out_of_range_ratings() {
        let mut facilities = mock_facilities();
        facilities[0].cleanliness_rating = 7.0;
        assert!(FacilityStore::new(facilities).is_err());
    }

    #[test]
    fn replace_all_rejects_unrated_reviews() {
        let store = FacilityStore::with_mock_data();
        let before = store.snapshot();

        let mut replacement = mock_facilities();
        let reviewed = replacement
            .iter_mut()
            .find(|f| !f.reviews().is_empty())
            .unwrap();
        reviewed.reviews.as_mut().unwrap()[0].rating = 0;

        assert!(store.replace_all(replacement).is_err());
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn clones_share_the_same_list() {
        let store = FacilityStore::with_mock_data();
        let other = store.clone();
        other.replace_all(Vec::new()).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn find_by_id() {
        let store = FacilityStore::with_mock_data();
        assert_eq!(store.find("2").map(|f| f.id), Some("2".to_string()));
        assert!(store.find("missing").is_none());
    }
}
