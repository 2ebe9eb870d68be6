pub mod chart;
pub mod range_filter;
pub mod stats;
pub mod streak;
