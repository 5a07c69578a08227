//! User data access layer
//!
//! `UserDal` borrows a caller-owned session (usually a `DatabaseTransaction`)
//! for the duration of each call. It never begins, commits or rolls back;
//! that is the caller's job.

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set};
use tracing::debug;
use uuid::Uuid;

use crate::domain::{CreateUserDto, DomainResult, User};
use crate::infrastructure::database::entities::user;

pub struct UserDal<'s, C: ConnectionTrait> {
    session: &'s C,
}

impl<'s, C: ConnectionTrait> UserDal<'s, C> {
    pub fn new(session: &'s C) -> Self {
        Self { session }
    }

    /// Stage a new active user in the bound session and flush it.
    ///
    /// Input is expected to be validated already. The row becomes visible to
    /// later reads through the same session but is durable only once the
    /// caller commits.
    pub async fn create_user(&self, name: &str, surname: &str, email: &str) -> DomainResult<User> {
        let new_user = User::new(name, surname, email);

        let model = user::ActiveModel {
            user_id: Set(new_user.user_id),
            name: Set(new_user.name),
            surname: Set(new_user.surname),
            email: Set(new_user.email),
            is_active: Set(new_user.is_active),
        }
        .insert(self.session)
        .await?;

        debug!(user_id = %model.user_id, "User flushed");
        Ok(model.into())
    }

    pub async fn create(&self, dto: &CreateUserDto) -> DomainResult<User> {
        self.create_user(&dto.name, &dto.surname, &dto.email).await
    }

    pub async fn get_user_by_id(&self, user_id: Uuid) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(user_id)
            .one(self.session)
            .await?;

        Ok(model.map(User::from))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use sea_orm::{ColumnTrait, PaginatorTrait, QueryFilter, TransactionTrait};

    use super::*;
    use crate::domain::DomainError;
    use crate::infrastructure::database::test_database;

    #[tokio::test]
    async fn create_user_returns_active_user_with_generated_id() {
        let db = test_database().await;
        let txn = db.begin().await.unwrap();

        let created = UserDal::new(&txn)
            .create_user("Anna", "Ivanova", "anna@example.com")
            .await
            .unwrap();
        txn.commit().await.unwrap();

        assert!(!created.user_id.is_nil());
        assert!(created.is_active);
        assert_eq!(created.name, "Anna");
        assert_eq!(created.surname, "Ivanova");
        assert_eq!(created.email, "anna@example.com");

        let stored = user::Entity::find_by_id(created.user_id)
            .one(&db)
            .await
            .unwrap()
            .expect("row committed");
        assert_eq!(User::from(stored), created);
    }

    #[tokio::test]
    async fn flushed_user_is_visible_inside_the_same_transaction() {
        let db = test_database().await;
        let txn = db.begin().await.unwrap();
        let dal = UserDal::new(&txn);

        let created = dal
            .create_user("Ivan", "Petrov", "ivan@example.com")
            .await
            .unwrap();
        let found = dal.get_user_by_id(created.user_id).await.unwrap();
        assert_eq!(found, Some(created));

        txn.rollback().await.unwrap();
        assert_eq!(user::Entity::find().count(&db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn duplicate_email_is_a_constraint_violation() {
        let db = test_database().await;

        let txn = db.begin().await.unwrap();
        UserDal::new(&txn)
            .create_user("Anna", "Ivanova", "anna@example.com")
            .await
            .unwrap();
        txn.commit().await.unwrap();

        let txn = db.begin().await.unwrap();
        let err = UserDal::new(&txn)
            .create_user("Anya", "Smirnova", "anna@example.com")
            .await
            .unwrap_err();
        txn.rollback().await.unwrap();

        match err {
            DomainError::ConstraintViolation(msg) => assert_eq!(msg, "Email already exists"),
            other => panic!("unexpected error: {other:?}"),
        }
        let rows = user::Entity::find()
            .filter(user::Column::Email.eq("anna@example.com"))
            .count(&db)
            .await
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[tokio::test]
    async fn generated_ids_are_distinct() {
        let db = test_database().await;
        let txn = db.begin().await.unwrap();
        let dal = UserDal::new(&txn);

        let mut ids = HashSet::new();
        for i in 0..20 {
            let dto = CreateUserDto {
                name: "Anna".into(),
                surname: "Ivanova".into(),
                email: format!("anna{}@example.com", i),
            };
            ids.insert(dal.create(&dto).await.unwrap().user_id);
        }
        txn.commit().await.unwrap();

        assert_eq!(ids.len(), 20);
        assert_eq!(user::Entity::find().count(&db).await.unwrap(), 20);
    }

    #[tokio::test]
    async fn unknown_id_is_none() {
        let db = test_database().await;
        let found = UserDal::new(&db).get_user_by_id(Uuid::new_v4()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn closed_pool_is_a_session_error() {
        let db = test_database().await;
        let handle = db.clone();
        db.close().await.unwrap();

        let err = UserDal::new(&handle)
            .create_user("Anna", "Ivanova", "anna@example.com")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Session(_)), "unexpected error: {err:?}");
    }
}
