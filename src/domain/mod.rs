//! Core domain records for streakboard

mod challenge;
mod invite;
mod participant;

pub use challenge::Challenge;
pub use invite::Invite;
pub use participant::Participant;
