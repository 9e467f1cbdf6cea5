//! Loadout Engine library.
//!
//! Application layer of the build advisor: loads a catalog and a character
//! build, clusters the weapons into a graph and ranks weapons and armor.
//!
//! ## Structure
//!
//! - `use_cases/` - Advisor use cases orchestrating the domain rules
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::{AdvisorReport, App};
