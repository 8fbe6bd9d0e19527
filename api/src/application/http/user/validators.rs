use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub phone: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub gender: Option<String>,
    #[validate(range(min = 30.0, max = 300.0, message = "height must be between 30 and 300 cm"))]
    pub height: Option<f64>,
    #[validate(range(min = 1.0, max = 500.0, message = "weight must be between 1 and 500 kg"))]
    pub weight: Option<f64>,
    pub activity_level: Option<String>,
    pub dietary_preferences: Option<String>,
    pub allergies: Option<String>,
    pub health_goals: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    #[validate(length(min = 8, message = "new password must be at least 8 characters"))]
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_update_rejects_absurd_height() {
        let request = UpdateProfileRequest {
            name: None,
            avatar: None,
            phone: None,
            birthday: None,
            gender: None,
            height: Some(500.0),
            weight: None,
            activity_level: None,
            dietary_preferences: None,
            allergies: None,
            health_goals: None,
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn change_password_requires_long_enough_replacement() {
        let request = ChangePasswordRequest {
            old_password: "whatever".to_string(),
            new_password: "short".to_string(),
        };

        assert!(request.validate().is_err());
    }
}
