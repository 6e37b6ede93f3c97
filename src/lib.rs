mod counter;
mod error;
mod layout;
mod parts;
mod radix;
mod snowflake;

pub use crate::counter::*;
pub use crate::error::*;
pub use crate::layout::*;
pub use crate::parts::*;
pub use crate::snowflake::*;
