//! Aggregate roots - domain objects that own their related data
//!
//! | Concern | Rustic Equivalent |
//! |---------|-------------------|
//! | Invariants | Value objects valid by construction |
//! | Immutability | Read accessors only, no `&mut` after construction |
//! | Factory | `::new()` plus allocation helpers |

pub mod build_profile;

pub use build_profile::BuildProfile;
