pub mod config;
pub mod filter;
pub mod pipeline;
pub mod scoring;

pub use config::RankingConfig;
pub use filter::Category;
pub use pipeline::{rank_facilities, FilterQuery};
pub use scoring::smart_score;
