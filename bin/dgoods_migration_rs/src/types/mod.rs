mod common_types;

pub use common_types::*;
