//! Structural subset of the AAS meta-model.
//!
//! Only what traversal needs is modelled: local names, semantic keys, the
//! ownership tree and the structural [`Role`] of each node.
//!
//! ```text
//! Snapshot
//! └── Submodel (Role::Identifiable)
//!     ├── Property
//!     └── SubmodelElementList "items" (Role::OrderedList)
//!         ├── [0] Property
//!         └── [1] Property
//! ```

mod element;
mod snapshot;

pub use element::{Element, ElementKind, Role};
pub use snapshot::{Snapshot, Walk};
