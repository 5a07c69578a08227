//! User service — application-layer orchestration
//!
//! Owns the session lifecycle: every use case opens one transaction from the
//! pool, runs the DAL against it and commits. Any early return drops the
//! transaction, which rolls it back and returns the connection to the pool.

use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{CreateUserDto, DomainError, DomainResult, User};
use crate::infrastructure::database::repositories::UserDal;

#[derive(Clone)]
pub struct UserService {
    db: DatabaseConnection,
}

impl UserService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a user from already-validated input and commit it.
    pub async fn create_user(&self, dto: CreateUserDto) -> DomainResult<User> {
        let txn = self.db.begin().await?;

        let user = match UserDal::new(&txn).create(&dto).await {
            Ok(user) => user,
            Err(e) => {
                if let DomainError::ConstraintViolation(_) = e {
                    warn!(email = %dto.email, "Rejected duplicate email");
                }
                return Err(e);
            }
        };

        txn.commit().await?;
        info!(user_id = %user.user_id, "User created");
        Ok(user)
    }

    pub async fn get_user(&self, user_id: Uuid) -> DomainResult<User> {
        let txn = self.db.begin().await?;
        let user = UserDal::new(&txn).get_user_by_id(user_id).await?;
        txn.commit().await?;

        user.ok_or_else(|| DomainError::NotFound {
            entity: "User",
            field: "user_id",
            value: user_id.to_string(),
        })
    }
}
