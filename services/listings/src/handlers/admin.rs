use axum::{
    Form,
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use time::Duration;

use crate::domain::types::ADMIN_SESSION_TTL_SECS;
use crate::error::ListingsServiceError;
use crate::pages;
use crate::state::AppState;
use crate::usecase::code::ListCodesUseCase;
use crate::usecase::session::{
    CheckAdminSessionUseCase, CreateAdminSessionUseCase, RevokeAdminSessionUseCase,
};
use crate::usecase::submission::ListSubmissionsUseCase;

/// Cookie name for the dashboard session token.
pub const ADMIN_SESSION_COOKIE: &str = "doorcode_admin_session";

fn set_session_cookie(jar: CookieJar, value: String, domain: String) -> CookieJar {
    let cookie = Cookie::build((ADMIN_SESSION_COOKIE, value))
        .path("/")
        .domain(domain)
        .max_age(Duration::seconds(ADMIN_SESSION_TTL_SECS))
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .build();
    jar.add(cookie)
}

fn clear_session_cookie(jar: CookieJar, domain: String) -> CookieJar {
    let cookie = Cookie::build((ADMIN_SESSION_COOKIE, ""))
        .path("/")
        .domain(domain)
        .max_age(Duration::ZERO)
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .build();
    jar.add(cookie)
}

fn error_page(err: ListingsServiceError) -> Response {
    err.log_server_error();
    (
        err.status(),
        Html(pages::message_page("Something went wrong", &err.to_string())),
    )
        .into_response()
}

// ── GET /admin/login ─────────────────────────────────────────────────────────

pub async fn login_page() -> Html<String> {
    Html(pages::admin_login(None))
}

// ── POST /admin/login ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(body): Form<LoginRequest>,
) -> Response {
    let usecase = CreateAdminSessionUseCase {
        credentials: state.credential_verifier(),
        sessions: state.admin_session_repo(),
    };
    match usecase.execute(&body.password).await {
        Ok(session) => {
            let jar = set_session_cookie(jar, session.token, state.cookie_domain.clone());
            (jar, Redirect::to("/admin")).into_response()
        }
        Err(err @ ListingsServiceError::InvalidCredentials) => (
            err.status(),
            Html(pages::admin_login(Some("Wrong password."))),
        )
            .into_response(),
        Err(err) => error_page(err),
    }
}

// ── POST /admin/logout ───────────────────────────────────────────────────────

pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    if let Some(cookie) = jar.get(ADMIN_SESSION_COOKIE) {
        let usecase = RevokeAdminSessionUseCase {
            sessions: state.admin_session_repo(),
        };
        if let Err(err) = usecase.execute(cookie.value()).await {
            err.log_server_error();
        }
    }
    let jar = clear_session_cookie(jar, state.cookie_domain.clone());
    (jar, Redirect::to("/admin/login")).into_response()
}

// ── GET /admin ───────────────────────────────────────────────────────────────

pub async fn dashboard(State(state): State<AppState>, jar: CookieJar) -> Response {
    let Some(token) = jar.get(ADMIN_SESSION_COOKIE).map(|c| c.value().to_owned()) else {
        return Redirect::to("/admin/login").into_response();
    };

    let check = CheckAdminSessionUseCase {
        sessions: state.admin_session_repo(),
    };
    match check.execute(&token).await {
        Ok(_) => {}
        Err(ListingsServiceError::InvalidSession) => {
            return Redirect::to("/admin/login").into_response();
        }
        Err(err) => return error_page(err),
    }

    let submissions = ListSubmissionsUseCase {
        submissions: state.submission_repo(),
    }
    .execute()
    .await;
    let codes = ListCodesUseCase {
        codes: state.code_repo(),
    }
    .execute()
    .await;

    match (submissions, codes) {
        (Ok(submissions), Ok(codes)) => {
            Html(pages::admin_dashboard(&submissions, &codes)).into_response()
        }
        (Err(err), _) | (_, Err(err)) => error_page(err),
    }
}
