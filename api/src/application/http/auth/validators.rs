use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct RegisterRequest {
    #[validate(length(
        min = 3,
        max = 80,
        message = "username must be between 3 and 80 characters"
    ))]
    pub username: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub gender: Option<String>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub activity_level: Option<String>,
    pub dietary_preferences: Option<String>,
    pub allergies: Option<String>,
    pub health_goals: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct LoginRequest {
    /// Username or email.
    #[validate(length(min = 1, message = "identifier must not be empty"))]
    pub identifier: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_rejects_short_password() {
        let request = RegisterRequest {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "short".to_string(),
            name: None,
            phone: None,
            birthday: None,
            gender: None,
            height: None,
            weight: None,
            activity_level: None,
            dietary_preferences: None,
            allergies: None,
            health_goals: None,
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn register_rejects_bad_email() {
        let request = RegisterRequest {
            username: "alice".to_string(),
            email: "not-an-email".to_string(),
            password: "long-enough".to_string(),
            name: None,
            phone: None,
            birthday: None,
            gender: None,
            height: None,
            weight: None,
            activity_level: None,
            dietary_preferences: None,
            allergies: None,
            health_goals: None,
        };

        assert!(request.validate().is_err());
    }
}
