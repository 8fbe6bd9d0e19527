use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub phone: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub gender: Option<String>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub activity_level: Option<String>,
    pub dietary_preferences: Option<String>,
    pub allergies: Option<String>,
    pub health_goals: Option<String>,
    pub is_active: bool,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct UserConfig {
    pub username: String,
    pub email: String,
    pub password_hash: String,
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

/// Profile fields a user may change; `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub avatar: Option<String>,
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

impl User {
    pub fn new(config: UserConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            username: config.username,
            email: config.email,
            password_hash: config.password_hash,
            name: config.name,
            avatar: None,
            phone: config.phone,
            birthday: config.birthday,
            gender: config.gender,
            height: config.height,
            weight: config.weight,
            activity_level: config.activity_level,
            dietary_preferences: config.dietary_preferences,
            allergies: config.allergies,
            health_goals: config.health_goals,
            is_active: true,
            is_admin: false,
            created_at: now,
            updated_at: now,
            last_login: None,
        }
    }

    pub fn apply_profile_update(&mut self, update: ProfileUpdate) {
        let (now, _) = generate_timestamp();

        if let Some(name) = update.name {
            self.name = Some(name);
        }
        if let Some(avatar) = update.avatar {
            self.avatar = Some(avatar);
        }
        if let Some(phone) = update.phone {
            self.phone = Some(phone);
        }
        if let Some(birthday) = update.birthday {
            self.birthday = Some(birthday);
        }
        if let Some(gender) = update.gender {
            self.gender = Some(gender);
        }
        if let Some(height) = update.height {
            self.height = Some(height);
        }
        if let Some(weight) = update.weight {
            self.weight = Some(weight);
        }
        if let Some(activity_level) = update.activity_level {
            self.activity_level = Some(activity_level);
        }
        if let Some(dietary_preferences) = update.dietary_preferences {
            self.dietary_preferences = Some(dietary_preferences);
        }
        if let Some(allergies) = update.allergies {
            self.allergies = Some(allergies);
        }
        if let Some(health_goals) = update.health_goals {
            self.health_goals = Some(health_goals);
        }
        self.updated_at = now;
    }

    pub fn set_password_hash(&mut self, hash: String) {
        let (now, _) = generate_timestamp();
        self.password_hash = hash;
        self.updated_at = now;
    }

    pub fn touch_last_login(&mut self) {
        let (now, _) = generate_timestamp();
        self.last_login = Some(now);
    }
}
