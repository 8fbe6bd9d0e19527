use crate::{domain::user::entities::User, entity::users};

impl From<&users::Model> for User {
    fn from(model: &users::Model) -> Self {
        Self {
            id: model.id,
            username: model.username.clone(),
            email: model.email.clone(),
            password_hash: model.password_hash.clone(),
            name: model.name.clone(),
            avatar: model.avatar.clone(),
            phone: model.phone.clone(),
            birthday: model.birthday,
            gender: model.gender.clone(),
            height: model.height,
            weight: model.weight,
            activity_level: model.activity_level.clone(),
            dietary_preferences: model.dietary_preferences.clone(),
            allergies: model.allergies.clone(),
            health_goals: model.health_goals.clone(),
            is_active: model.is_active,
            is_admin: model.is_admin,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
            last_login: model.last_login.map(|t| t.to_utc()),
        }
    }
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self::from(&model)
    }
}

pub fn to_active_model(user: &User) -> users::ActiveModel {
    use sea_orm::ActiveValue::Set;

    users::ActiveModel {
        id: Set(user.id),
        username: Set(user.username.clone()),
        email: Set(user.email.clone()),
        password_hash: Set(user.password_hash.clone()),
        name: Set(user.name.clone()),
        avatar: Set(user.avatar.clone()),
        phone: Set(user.phone.clone()),
        birthday: Set(user.birthday),
        gender: Set(user.gender.clone()),
        height: Set(user.height),
        weight: Set(user.weight),
        activity_level: Set(user.activity_level.clone()),
        dietary_preferences: Set(user.dietary_preferences.clone()),
        allergies: Set(user.allergies.clone()),
        health_goals: Set(user.health_goals.clone()),
        is_active: Set(user.is_active),
        is_admin: Set(user.is_admin),
        created_at: Set(user.created_at.fixed_offset()),
        updated_at: Set(user.updated_at.fixed_offset()),
        last_login: Set(user.last_login.map(|t| t.fixed_offset())),
    }
}
