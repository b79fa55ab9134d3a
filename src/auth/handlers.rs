use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use tracing::{error, instrument};

use crate::{
    auth::{
        dto::{LoginForm, LoginQuery, RegisterForm, WelcomeQuery},
        error::AuthError,
        services, views,
    },
    state::AppState,
};

pub const REGISTER_URL: &str = "/register";
pub const LOGIN_URL: &str = "/login";
pub const WELCOME_URL: &str = "/welcome";

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route(REGISTER_URL, get(register_form).post(register))
        .route(LOGIN_URL, get(login_form).post(login))
        .route(WELCOME_URL, get(welcome))
}

pub async fn index() -> Redirect {
    Redirect::to(LOGIN_URL)
}

pub async fn register_form() -> Html<String> {
    views::register_page(None)
}

#[instrument(skip(state, form))]
pub async fn register(State(state): State<AppState>, Form(form): Form<RegisterForm>) -> Response {
    match services::register(&state.db, &form).await {
        Ok(_) => Redirect::to(&format!("{LOGIN_URL}?success_message=True")).into_response(),
        Err(e) => render_failure(e, |msg| views::register_page(Some(msg))),
    }
}

pub async fn login_form(Query(q): Query<LoginQuery>) -> Html<String> {
    let success = q
        .success_message
        .as_deref()
        .filter(|v| !v.is_empty())
        .map(|_| views::REGISTRATION_SUCCESS_MESSAGE);
    views::login_page(success, None)
}

#[instrument(skip(state, form))]
pub async fn login(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    match services::login(&state.db, &form).await {
        Ok(user) => Redirect::to(&welcome_location(&user.name)).into_response(),
        Err(e) => render_failure(e, |msg| views::login_page(None, Some(msg))),
    }
}

/// Greets whatever name the caller passes; there is no session behind it.
pub async fn welcome(Query(q): Query<WelcomeQuery>) -> Html<String> {
    views::welcome_page(q.name.as_deref())
}

fn welcome_location(name: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("name", name)
        .finish();
    format!("{WELCOME_URL}?{query}")
}

/// User-facing failures re-render the form; anything else is a 500.
fn render_failure(err: AuthError, form_with: impl FnOnce(&str) -> Html<String>) -> Response {
    match err.user_message() {
        Some(msg) => form_with(&msg).into_response(),
        None => {
            error!(error = %err, "request failed");
            (StatusCode::INTERNAL_SERVER_ERROR, views::internal_error_page()).into_response()
        }
    }
}
