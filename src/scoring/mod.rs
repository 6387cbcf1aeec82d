pub mod aggregate;
pub mod record;
pub mod rules;

pub use aggregate::apply_match_record;
pub use record::{build_match_record, create_match_record, validate_match_record};
pub use rules::{cumulative_points, match_points};
