//! Page templates, bundled into the binary and rendered with HTML auto-escaping.

use std::sync::OnceLock;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use minijinja::Environment;
use serde::Serialize;
use tracing::error;

static TEMPLATES: OnceLock<Environment<'static>> = OnceLock::new();

fn bundled(name: &str) -> Option<&'static str> {
    match name {
        "base.html" => Some(include_str!("../../templates/base.html")),
        "form.html" => Some(include_str!("../../templates/form.html")),
        "results.html" => Some(include_str!("../../templates/results.html")),
        "style.css" => Some(include_str!("../../templates/style.css")),
        _ => None,
    }
}

fn templates() -> &'static Environment<'static> {
    TEMPLATES.get_or_init(|| {
        let mut env = Environment::new();
        env.set_loader(|name| Ok(bundled(name).map(String::from)));
        env
    })
}

/// Render a bundled template. `.html` templates escape every interpolated value.
pub fn render<S: Serialize>(name: &str, ctx: S) -> Result<String, minijinja::Error> {
    templates().get_template(name)?.render(ctx)
}

/// Turn a render result into a response, logging failures as a 500.
pub fn into_html(rendered: Result<String, minijinja::Error>, status: StatusCode) -> Response {
    match rendered {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            error!("Template rendering failed: {:#}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn test_stylesheet_is_inlined() {
        let html = render("results.html", context! { title => "x" }).unwrap();
        assert!(html.contains(".bar-fill"));
        assert!(html.contains("<title>x — Healthscan</title>"));
    }

    #[test]
    fn test_title_is_escaped() {
        let html = render("results.html", context! { title => "<x>" }).unwrap();
        assert!(html.contains("<title>&lt;x&gt; — Healthscan</title>"));
    }

    #[test]
    fn test_unknown_template_is_error() {
        assert!(render("missing.html", context! {}).is_err());
    }
}
