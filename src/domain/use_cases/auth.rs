use crate::{
    entities::auth::{LoginRequest, LoginResponse},
    errors::AppError,
    settings::AppConfig,
};

/// Stand-in for real authentication: a single username/password pair from
/// configuration, exchanged for a fixed admin token. The token carries no
/// claims and never expires.
pub struct AuthHandler {
    admin_username: String,
    admin_password: String,
    admin_token: String,
}

impl AuthHandler {
    pub fn new(config: &AppConfig) -> Self {
        AuthHandler {
            admin_username: config.admin_username.clone(),
            admin_password: config.admin_password.clone(),
            admin_token: config.admin_token.clone(),
        }
    }

    pub fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError> {
        if request.username == self.admin_username && request.password == self.admin_password {
            Ok(LoginResponse {
                success: true,
                token: self.admin_token.clone(),
            })
        } else {
            Err(AppError::UnauthorizedAccess)
        }
    }

    pub fn is_valid_token(&self, token: &str) -> bool {
        token == self.admin_token
    }
}
