//! Business logic services

pub mod auth_service;
pub mod collaborator_service;
pub mod competition_service;
pub mod competition_sponsor_service;
pub mod participant_service;
pub mod problem_service;
pub mod registration_service;
pub mod sponsor_service;
pub mod statistic_service;
pub mod submission_service;
pub mod team_service;
pub mod user_service;

pub use auth_service::AuthService;
pub use collaborator_service::CollaboratorService;
pub use competition_service::CompetitionService;
pub use competition_sponsor_service::CompetitionSponsorService;
pub use participant_service::ParticipantService;
pub use problem_service::ProblemService;
pub use registration_service::RegistrationService;
pub use sponsor_service::SponsorService;
pub use statistic_service::StatisticService;
pub use submission_service::SubmissionService;
pub use team_service::TeamService;
pub use user_service::UserService;
