//! Actor identity extractor
//!
//! Identity is established by the upstream identity provider, which this
//! service trusts to set the `x-actor-id`, `x-actor-name`, and
//! `x-actor-roles` headers on proxied requests. Requests without identity
//! headers (background callers, local tooling) act as the System sentinel,
//! which is also what the audit trail records for them.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use hr_core::value_objects::Actor;

use crate::response::ApiError;

/// Header carrying the stable actor id
pub const ACTOR_ID_HEADER: &str = "x-actor-id";
/// Header carrying the actor display name
pub const ACTOR_NAME_HEADER: &str = "x-actor-name";
/// Header carrying a comma-separated role list
pub const ACTOR_ROLES_HEADER: &str = "x-actor-roles";

/// Role required for admin-gated routes
const ADMIN_ROLE: &str = "admin";

fn header_value(parts: &Parts, name: &str) -> Option<String> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

fn actor_from_parts(parts: &Parts) -> Actor {
    match (
        header_value(parts, ACTOR_ID_HEADER),
        header_value(parts, ACTOR_NAME_HEADER),
    ) {
        (Some(id), Some(name)) => Actor::new(id, name),
        (Some(id), None) => {
            let name = id.clone();
            Actor::new(id, name)
        }
        _ => Actor::system(),
    }
}

fn has_role(parts: &Parts, role: &str) -> bool {
    header_value(parts, ACTOR_ROLES_HEADER)
        .map(|roles| {
            roles
                .split(',')
                .any(|r| r.trim().eq_ignore_ascii_case(role))
        })
        .unwrap_or(false)
}

/// The identity performing the request
#[derive(Debug, Clone)]
pub struct ActorIdentity(pub Actor);

#[async_trait]
impl<S> FromRequestParts<S> for ActorIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(ActorIdentity(actor_from_parts(parts)))
    }
}

/// The identity performing the request, required to carry the admin role
#[derive(Debug, Clone)]
pub struct AdminActor(pub Actor);

#[async_trait]
impl<S> FromRequestParts<S> for AdminActor
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if !has_role(parts, ADMIN_ROLE) {
            return Err(ApiError::MissingRole("admin"));
        }
        Ok(AdminActor(actor_from_parts(parts)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts(headers: &[(&str, &str)]) -> Parts {
        let mut builder = Request::builder().uri("/");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let (parts, ()) = builder.body(()).unwrap().into_parts();
        parts
    }

    #[test]
    fn test_missing_headers_yield_system() {
        let actor = actor_from_parts(&parts(&[]));
        assert!(actor.is_system());
    }

    #[test]
    fn test_headers_yield_named_actor() {
        let actor = actor_from_parts(&parts(&[
            (ACTOR_ID_HEADER, "u-42"),
            (ACTOR_NAME_HEADER, "Thandi Nkosi"),
        ]));
        assert_eq!(actor.id, "u-42");
        assert_eq!(actor.name, "Thandi Nkosi");
    }

    #[test]
    fn test_role_check_is_case_insensitive() {
        let p = parts(&[(ACTOR_ROLES_HEADER, "hr, Admin")]);
        assert!(has_role(&p, "admin"));

        let p = parts(&[(ACTOR_ROLES_HEADER, "hr")]);
        assert!(!has_role(&p, "admin"));
    }
}
