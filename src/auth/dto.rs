use serde::{Deserialize, Serialize};

use crate::tasks::dto::TaskOut;

/// Request body for user registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request body for authentication. The name field is accepted for parity
/// with registration; lookup goes by email.
#[derive(Debug, Deserialize)]
pub struct AuthenticateRequest {
    #[serde(default)]
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Response returned after successful authentication.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Public part of the user returned to the client, never the password hash.
#[derive(Debug, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub tasks: Vec<TaskOut>,
}
