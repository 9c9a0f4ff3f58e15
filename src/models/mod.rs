//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod collaborator;
pub mod competition;
pub mod competition_sponsor;
pub mod participant;
pub mod problem;
pub mod registration;
pub mod sponsor;
pub mod statistic;
pub mod submission;
pub mod team;
pub mod user;

pub use collaborator::*;
pub use competition::*;
pub use competition_sponsor::*;
pub use participant::*;
pub use problem::*;
pub use registration::*;
pub use sponsor::*;
pub use statistic::*;
pub use submission::*;
pub use team::*;
pub use user::*;
