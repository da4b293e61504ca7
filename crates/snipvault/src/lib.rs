#![doc = include_str!("../README.md")]

mod codec;
mod error;
mod id;
mod rand;
#[cfg(feature = "serde")]
mod serde;
mod time;

pub use crate::codec::{decode_digits, encode_digits};
pub use crate::error::{Error, Result};
pub use crate::id::{BlobPath, PublicSnippetId, RawSnippetId};
pub use crate::rand::{RandSource, ThreadRandom};
pub use crate::time::{SystemClock, TimeSource};
