/// Bearer token verification settings.
///
/// Tokens are HS256 JWTs signed with `JWT_SECRET`; their `sub` claim is
/// the caller's user id. When `JWT_ISSUER` is set, the `iss` claim must
/// match it.
#[derive(Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub issuer: Option<String>,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self {
            secret: std::env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            issuer: std::env::var("JWT_ISSUER")
                .ok()
                .filter(|issuer| !issuer.is_empty()),
        }
    }
}
