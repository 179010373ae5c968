pub(crate) mod core;

pub use self::core::*;
