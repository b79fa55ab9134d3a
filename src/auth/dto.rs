use serde::Deserialize;

/// Form body for `POST /register`.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub repeat_password: String,
}

/// Form body for `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    pub success_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WelcomeQuery {
    pub name: Option<String>,
}
