use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access-token claims. `sub` is the user id; times are unix seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaim {
    pub sub: Uuid,
    pub iat: i64,
    pub exp: i64,
}
