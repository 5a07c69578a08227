use uuid::Uuid;

/// User model
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub user_id: Uuid,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub is_active: bool,
}

impl User {
    /// Build a fresh user: new random id, active.
    pub fn new(name: impl Into<String>, surname: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            user_id: Uuid::new_v4(),
            name: name.into(),
            surname: surname.into(),
            email: email.into(),
            is_active: true,
        }
    }
}
