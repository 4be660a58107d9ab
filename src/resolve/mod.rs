//! On-demand resolution of an element's owner and idShort path.
//!
//! Both resolvers climb parent handles and never mutate the snapshot.

mod owner;
mod path;

pub use owner::{Owner, resolve_owner};
pub use path::resolve_path;
