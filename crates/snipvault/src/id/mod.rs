mod path;
mod public;
mod raw;

pub use path::*;
pub use public::*;
pub use raw::*;
