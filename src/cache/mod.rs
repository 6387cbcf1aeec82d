pub mod structs;

pub use structs::{FileIdentity, SheetCache};
