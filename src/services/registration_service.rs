//! Registration service

use sqlx::{PgConnection, PgPool};

use crate::{
    constants::GENERATED_SECRET_LENGTH,
    db::{
        in_transaction,
        repositories::{
            CompetitionRepository, ParticipantRepository, RegistrationRepository, UserRepository,
        },
    },
    error::{AppError, AppResult},
    handlers::{
        registrations::{
            request::{CreateRegistrationRequest, SelfRegistrationForm, UpdateRegistrationRequest},
            response::{RegistrationResponse, SelfRegistrationResponse},
        },
        users::response::UserResponse,
    },
    models::UserRole,
    utils::{generate_secure_token, hash_password},
};

/// Registration service for business logic
pub struct RegistrationService;

impl RegistrationService {
    /// List registrations
    pub async fn list_registrations(
        pool: &PgPool,
        offset: i64,
        limit: i64,
    ) -> AppResult<Vec<RegistrationResponse>> {
        let registrations = RegistrationRepository::list(pool, offset, limit).await?;
        Ok(registrations.into_iter().map(Into::into).collect())
    }

    /// Registrations of one competition
    pub async fn list_competition_registrations(
        pool: &PgPool,
        competition_id: i32,
    ) -> AppResult<Vec<RegistrationResponse>> {
        CompetitionRepository::find_by_id(pool, competition_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Competition not found".to_string()))?;

        let registrations = RegistrationRepository::list_by_competition(pool, competition_id).await?;
        Ok(registrations.into_iter().map(Into::into).collect())
    }

    /// Register an existing participant, respecting the competition capacity
    pub async fn create_registration(
        pool: &PgPool,
        payload: CreateRegistrationRequest,
    ) -> AppResult<RegistrationResponse> {
        let CreateRegistrationRequest {
            participant_user_id,
            competition_id,
            category,
        } = payload;

        let registration = in_transaction(pool, move |conn| {
            Box::pin(async move {
                Self::ensure_capacity(conn, competition_id).await?;
                RegistrationRepository::create(
                    &mut *conn,
                    participant_user_id,
                    competition_id,
                    category.as_deref(),
                )
                .await
            })
        })
        .await?;

        tracing::info!(
            registration_id = registration.registration_id,
            participant_user_id,
            competition_id,
            "Participant registered"
        );
        Ok(registration.into())
    }

    /// Public sign-up: user, participant record and registration in one transaction.
    ///
    /// Any failure (duplicate email, full competition, ...) leaves no rows behind.
    pub async fn self_register(
        pool: &PgPool,
        competition_id: i32,
        form: SelfRegistrationForm,
    ) -> AppResult<SelfRegistrationResponse> {
        // Without a password the account gets an unusable random secret
        let secret = form
            .password
            .clone()
            .unwrap_or_else(|| generate_secure_token(GENERATED_SECRET_LENGTH));
        let password_hash = hash_password(&secret)?;

        let (user, registration) = in_transaction(pool, move |conn| {
            Box::pin(async move {
                Self::ensure_capacity(conn, competition_id).await?;

                let user = UserRepository::create(
                    &mut *conn,
                    &form.name,
                    &form.email,
                    &password_hash,
                    UserRole::Participant,
                    form.photo.as_deref(),
                )
                .await?;

                ParticipantRepository::create(&mut *conn, user.user_id, form.university.as_deref())
                    .await?;

                let registration = RegistrationRepository::create(
                    &mut *conn,
                    user.user_id,
                    competition_id,
                    form.category.as_deref(),
                )
                .await?;

                Ok((user, registration))
            })
        })
        .await
        .inspect_err(|e| {
            tracing::warn!(competition_id, error = %e, "Self-registration rolled back");
        })?;

        tracing::info!(
            user_id = user.user_id,
            registration_id = registration.registration_id,
            competition_id,
            "Self-registration completed"
        );

        Ok(SelfRegistrationResponse {
            user: UserResponse::from(user),
            registration: registration.into(),
        })
    }

    /// Get registration by ID
    pub async fn get_registration(pool: &PgPool, id: i32) -> AppResult<RegistrationResponse> {
        RegistrationRepository::find_by_id(pool, id)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound("Registration not found".to_string()))
    }

    /// Update registration; moving it to another competition respects that
    /// competition's capacity
    pub async fn update_registration(
        pool: &PgPool,
        id: i32,
        payload: UpdateRegistrationRequest,
    ) -> AppResult<RegistrationResponse> {
        let UpdateRegistrationRequest {
            category,
            participant_user_id,
            competition_id,
        } = payload;

        let registration = in_transaction(pool, move |conn| {
            Box::pin(async move {
                let current = RegistrationRepository::find_by_id(&mut *conn, id)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Registration not found".to_string()))?;

                if let Some(target) = competition_id.filter(|&c| c != current.competition_id) {
                    Self::ensure_capacity(conn, target).await?;
                }

                RegistrationRepository::update(
                    &mut *conn,
                    id,
                    category.as_ref().map(|c| c.as_deref()),
                    participant_user_id,
                    competition_id,
                )
                .await?
                .ok_or_else(|| AppError::NotFound("Registration not found".to_string()))
            })
        })
        .await?;

        Ok(registration.into())
    }

    /// Delete registration
    pub async fn delete_registration(pool: &PgPool, id: i32) -> AppResult<()> {
        if !RegistrationRepository::delete(pool, id).await? {
            return Err(AppError::NotFound("Registration not found".to_string()));
        }

        Ok(())
    }

    /// Lock the competition row and fail when it is already at capacity
    async fn ensure_capacity(conn: &mut PgConnection, competition_id: i32) -> AppResult<()> {
        let competition = CompetitionRepository::find_for_update(&mut *conn, competition_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Competition not found".to_string()))?;

        let registered = RegistrationRepository::count_by_competition(&mut *conn, competition_id).await?;
        if competition.is_full(registered) {
            return Err(AppError::Conflict(format!(
                "Competition {} is full",
                competition.competition_id
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        test_utils::{fixtures, test_app::fresh_pool},
        utils::today,
    };

    fn form(email: &str) -> SelfRegistrationForm {
        SelfRegistrationForm {
            name: "Grace".to_string(),
            email: email.to_string(),
            university: Some("Universidade de Brasília (UnB)".to_string()),
            category: Some("undergrad".to_string()),
            password: None,
            photo: Some(b"jpeg".to_vec()),
        }
    }

    async fn count(pool: &PgPool, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon"]
    async fn test_self_registration_creates_all_rows() {
        let pool = fresh_pool().await;
        let team = fixtures::team(&pool, "Alpha").await;
        let competition = fixtures::competition(&pool, team.team_id, today(), None).await;

        let response = RegistrationService::self_register(
            &pool,
            competition.competition_id,
            form("grace@example.com"),
        )
        .await
        .unwrap();

        assert_eq!(response.user.role, UserRole::Participant);
        assert_eq!(response.user.photo.as_deref(), Some("anBlZw=="));
        assert_eq!(response.registration.participant_user_id, response.user.user_id);

        let participant = ParticipantRepository::find_by_id(&pool, response.user.user_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            participant.institution.as_deref(),
            Some("Universidade de Brasília (UnB)")
        );
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon"]
    async fn test_failed_self_registration_leaves_no_rows() {
        let pool = fresh_pool().await;
        let team = fixtures::team(&pool, "Alpha").await;
        let competition = fixtures::competition(&pool, team.team_id, today(), None).await;
        fixtures::user(&pool, "taken@example.com", UserRole::Sponsor).await;

        let err = RegistrationService::self_register(
            &pool,
            competition.competition_id,
            form("taken@example.com"),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::AlreadyExists(_)));
        assert_eq!(count(&pool, "users").await, 1);
        assert_eq!(count(&pool, "participants").await, 0);
        assert_eq!(count(&pool, "registrations").await, 0);
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon"]
    async fn test_self_registration_for_unknown_competition() {
        let pool = fresh_pool().await;

        let err = RegistrationService::self_register(&pool, 999, form("grace@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(ref m) if m == "Competition not found"));
        assert_eq!(count(&pool, "users").await, 0);
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon"]
    async fn test_capacity_is_enforced() {
        let pool = fresh_pool().await;
        let team = fixtures::team(&pool, "Alpha").await;
        let competition = fixtures::competition(&pool, team.team_id, today(), Some(1)).await;
        let first = fixtures::participant(&pool, "first@example.com").await;
        let second = fixtures::participant(&pool, "second@example.com").await;

        let register = |user_id| CreateRegistrationRequest {
            participant_user_id: user_id,
            competition_id: competition.competition_id,
            category: None,
        };

        RegistrationService::create_registration(&pool, register(first.user_id))
            .await
            .unwrap();
        let err = RegistrationService::create_registration(&pool, register(second.user_id))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon"]
    async fn test_duplicate_registration_is_rejected() {
        let pool = fresh_pool().await;
        let team = fixtures::team(&pool, "Alpha").await;
        let competition = fixtures::competition(&pool, team.team_id, today(), None).await;
        let participant = fixtures::participant(&pool, "p@example.com").await;

        let request = || CreateRegistrationRequest {
            participant_user_id: participant.user_id,
            competition_id: competition.competition_id,
            category: Some("open".to_string()),
        };

        RegistrationService::create_registration(&pool, request())
            .await
            .unwrap();
        let err = RegistrationService::create_registration(&pool, request())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::AlreadyExists(ref m) if m == "Participant is already registered for this competition"
        ));
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon"]
    async fn test_unknown_participant_is_invalid_reference() {
        let pool = fresh_pool().await;
        let team = fixtures::team(&pool, "Alpha").await;
        let competition = fixtures::competition(&pool, team.team_id, today(), None).await;

        let err = RegistrationService::create_registration(
            &pool,
            CreateRegistrationRequest {
                participant_user_id: 4242,
                competition_id: competition.competition_id,
                category: None,
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::InvalidReference(_)));
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon"]
    async fn test_move_into_full_competition_is_rejected() {
        let pool = fresh_pool().await;
        let team = fixtures::team(&pool, "Alpha").await;
        let full = fixtures::competition(&pool, team.team_id, today(), Some(1)).await;
        let open = fixtures::competition(&pool, team.team_id, today(), None).await;
        let first = fixtures::participant(&pool, "first@example.com").await;
        let second = fixtures::participant(&pool, "second@example.com").await;

        RegistrationRepository::create(&pool, first.user_id, full.competition_id, None)
            .await
            .unwrap();
        let elsewhere =
            RegistrationRepository::create(&pool, second.user_id, open.competition_id, Some("open"))
                .await
                .unwrap();

        let err = RegistrationService::update_registration(
            &pool,
            elsewhere.registration_id,
            UpdateRegistrationRequest {
                competition_id: Some(full.competition_id),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        let count = RegistrationRepository::count_by_competition(&pool, full.competition_id)
            .await
            .unwrap();
        assert_eq!(count, 1);
        let unchanged = RegistrationService::get_registration(&pool, elsewhere.registration_id)
            .await
            .unwrap();
        assert_eq!(unchanged.competition_id, open.competition_id);
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon"]
    async fn test_update_within_full_competition_and_clear_category() {
        let pool = fresh_pool().await;
        let team = fixtures::team(&pool, "Alpha").await;
        let full = fixtures::competition(&pool, team.team_id, today(), Some(1)).await;
        let participant = fixtures::participant(&pool, "p@example.com").await;
        let registration =
            RegistrationRepository::create(&pool, participant.user_id, full.competition_id, Some("open"))
                .await
                .unwrap();

        let updated = RegistrationService::update_registration(
            &pool,
            registration.registration_id,
            UpdateRegistrationRequest {
                category: Some(None),
                competition_id: Some(full.competition_id),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.category, None);
        assert_eq!(updated.competition_id, full.competition_id);

        assert!(matches!(
            RegistrationService::update_registration(&pool, 4242, UpdateRegistrationRequest::default()).await,
            Err(AppError::NotFound(ref m)) if m == "Registration not found"
        ));
    }
}

