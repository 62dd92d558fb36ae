// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Acting-employee extraction.
//!
//! The caller asserts who is acting through two headers; nothing is
//! verified beyond the role name being known.
//!
//! ```text
//! x-actor-nip: 198503122010011001
//! x-actor-role: ADMIN_TIM
//! ```

use axum::{extract::FromRequestParts, http::request::Parts};
use situgas_api::{AuthenticatedActor, resolve_actor};
use tracing::debug;

use crate::AppState;
use crate::error::HttpError;

/// Header carrying the acting employee's NIP.
pub const ACTOR_NIP_HEADER: &str = "x-actor-nip";
/// Header carrying the acting employee's role.
pub const ACTOR_ROLE_HEADER: &str = "x-actor-role";

/// Extractor for the acting employee.
///
/// The unit is taken from the current snapshot's roster.
///
/// # Errors
///
/// Returns HTTP 401 Unauthorized if a header is missing, not valid text,
/// blank, or names an unknown role.
pub struct SessionActor(pub AuthenticatedActor);

fn header<'a>(parts: &'a Parts, name: &str) -> Result<&'a str, HttpError> {
    parts
        .headers
        .get(name)
        .ok_or_else(|| HttpError::unauthenticated(&format!("Missing {name} header")))?
        .to_str()
        .map_err(|_| HttpError::unauthenticated(&format!("Invalid {name} header encoding")))
}

impl FromRequestParts<AppState> for SessionActor {
    type Rejection = HttpError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let nip: &str = header(parts, ACTOR_NIP_HEADER)?;
        let role: &str = header(parts, ACTOR_ROLE_HEADER)?;

        let snapshot = state.store.snapshot().await;
        let actor: AuthenticatedActor = resolve_actor(&snapshot.registry, nip, role)?;

        debug!(nip = %actor.nip, role = %actor.role, "Actor resolved");
        Ok(Self(actor))
    }
}
