pub mod facility;
pub mod modes;
pub mod review;

pub use facility::{Coordinate, Facility, FacilityType, RouteInsight, ToiletStyle};
pub use modes::{AppMode, SortOption, TravelMode, ViewMode};
pub use review::Review;
