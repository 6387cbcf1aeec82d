pub mod collection;
pub mod models;
pub mod progress;

pub use collection::PlayerStatCollection;
pub use models::*;
pub use progress::ImportProgress;
