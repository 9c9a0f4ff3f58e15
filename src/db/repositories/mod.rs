//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod collaborator_repo;
pub mod competition_repo;
pub mod competition_sponsor_repo;
pub mod participant_repo;
pub mod problem_repo;
pub mod registration_repo;
pub mod sponsor_repo;
pub mod statistic_repo;
pub mod submission_repo;
pub mod team_repo;
pub mod user_repo;

pub use collaborator_repo::CollaboratorRepository;
pub use competition_repo::{CompetitionChanges, CompetitionRepository, NewCompetition};
pub use competition_sponsor_repo::CompetitionSponsorRepository;
pub use participant_repo::ParticipantRepository;
pub use problem_repo::ProblemRepository;
pub use registration_repo::RegistrationRepository;
pub use sponsor_repo::SponsorRepository;
pub use statistic_repo::StatisticRepository;
pub use submission_repo::SubmissionRepository;
pub use team_repo::TeamRepository;
pub use user_repo::UserRepository;
