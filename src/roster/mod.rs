//! Roster data structures and roster loading

mod data;
pub mod loader;

pub use data::{IndividualInput, Rank, SubPopulation};
pub use loader::{load_roster, load_roster_from_reader};
