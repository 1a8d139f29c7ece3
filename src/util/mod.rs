//! Small pure helpers shared by request handling and reporting code.

pub mod query;
pub mod rounding;
pub mod slices;

pub use query::append_query_params;
pub use rounding::round_to_magnitude;
pub use slices::{diff, intersection, remove_duplicates, remove_one};
