/// Already-validated input for creating a user.
#[derive(Debug, Clone)]
pub struct CreateUserDto {
    pub name: String,
    pub surname: String,
    pub email: String,
}
