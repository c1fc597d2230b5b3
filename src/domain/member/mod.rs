// Member domain module
// Contains the member and team entities and the derived team roster

#![allow(clippy::module_inception)]

pub mod member;
pub mod roster;
pub mod team;

pub use member::Member;
pub use roster::TeamRoster;
pub use team::Team;
