pub mod mock;
pub mod store;

pub use mock::mock_facilities;
pub use store::FacilityStore;
