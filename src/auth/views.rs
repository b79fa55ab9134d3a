//! HTML pages for the sign-up flow. Markup is kept minimal; every value
//! interpolated into a page goes through [`escape`].

use axum::response::Html;

pub const REGISTRATION_SUCCESS_MESSAGE: &str = "Registration successful! Please log in.";

pub(crate) fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    out
}

fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n<body>\n{body}</body>\n</html>\n"
    ))
}

fn notice(class: &str, message: Option<&str>) -> String {
    message
        .map(|m| format!("<p class=\"{class}\">{}</p>\n", escape(m)))
        .unwrap_or_default()
}

pub fn register_page(error_message: Option<&str>) -> Html<String> {
    let body = format!(
        "<h1>Register</h1>\n{}<form method=\"post\" action=\"/register\">\n\
         <input type=\"text\" name=\"name\" placeholder=\"Name\" required>\n\
         <input type=\"email\" name=\"email\" placeholder=\"Email\" required>\n\
         <input type=\"password\" name=\"password\" placeholder=\"Password\" required>\n\
         <input type=\"password\" name=\"repeat_password\" placeholder=\"Repeat password\" required>\n\
         <button type=\"submit\">Register</button>\n</form>\n\
         <p>Already have an account? <a href=\"/login\">Log in</a></p>\n",
        notice("error", error_message)
    );
    page("Register", &body)
}

pub fn login_page(success_message: Option<&str>, error_message: Option<&str>) -> Html<String> {
    let body = format!(
        "<h1>Login</h1>\n{}{}<form method=\"post\" action=\"/login\">\n\
         <input type=\"email\" name=\"email\" placeholder=\"Email\" required>\n\
         <input type=\"password\" name=\"password\" placeholder=\"Password\" required>\n\
         <button type=\"submit\">Log in</button>\n</form>\n\
         <p>No account yet? <a href=\"/register\">Register</a></p>\n",
        notice("success", success_message),
        notice("error", error_message)
    );
    page("Login", &body)
}

pub fn welcome_page(name: Option<&str>) -> Html<String> {
    let greeting = match name {
        Some(n) if !n.is_empty() => format!("Welcome, {}!", escape(n)),
        _ => "Welcome!".to_string(),
    };
    page("Welcome", &format!("<h1>{greeting}</h1>\n"))
}

pub fn internal_error_page() -> Html<String> {
    page(
        "Error",
        "<h1>Something went wrong</h1>\n<p>Please try again later.</p>\n",
    )
}
