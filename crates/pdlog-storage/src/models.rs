/// A user row to insert; columns mirror the `users` table
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub ssn: Option<String>,
    pub password: Option<String>,
    pub ip: Option<String>,
    pub last_login: Option<String>,
    pub user_agent: Option<String>,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Default::default()
        }
    }
}
