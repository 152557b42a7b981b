use business::domain::shared::value_objects::UserId;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use poem::Request;
use poem::http::header;
use poem_openapi::SecurityScheme;
use poem_openapi::auth::Bearer;
use serde::{Deserialize, Serialize};

use crate::config::auth_config::AuthConfig;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    exp: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    iss: Option<String>,
}

/// Verifies an HS256 bearer token and returns its subject.
pub fn verify_token(token: &str, config: &AuthConfig) -> Result<UserId, String> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.validate_aud = false;
    validation.set_required_spec_claims(&["exp", "sub"]);
    if let Some(issuer) = &config.issuer {
        validation.set_issuer(&[issuer]);
    }

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map_err(|e| format!("auth.token_validation_failed: {e}"))?;

    let subject = data.claims.sub.trim();
    if subject.is_empty() {
        return Err("auth.missing_subject".to_string());
    }
    Ok(UserId::new(subject))
}

/// JWT bearer authentication. Wraps the caller's user id.
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "bearer_checker")]
pub struct BearerAuth(pub UserId);

async fn bearer_checker(req: &Request, bearer: Bearer) -> Option<UserId> {
    let Some(config) = req.data::<AuthConfig>() else {
        tracing::error!("Auth configuration missing from request data");
        return None;
    };

    match verify_token(&bearer.token, config) {
        Ok(user_id) => Some(user_id),
        Err(e) => {
            tracing::warn!("Bearer auth failed: {e}");
            None
        }
    }
}

/// Caller of a read endpoint that also serves anonymous users. An absent
/// or invalid token yields `None`.
pub fn optional_viewer(req: &Request) -> Option<UserId> {
    let value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let config = req.data::<AuthConfig>()?;
    verify_token(token.trim(), config).ok()
}
