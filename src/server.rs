use axum::{response::Redirect, routing::get, Router};
use leptos::prelude::*;
use leptos_axum::{generate_route_list_with_exclusions, LeptosRoutes};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::app::{shell, App};
use crate::i18n::DEFAULT_LOCALE;

/// The site router: `/` redirects to the default locale, the locale pages are
/// rendered by leptos, and anything else is served from the site root or
/// answered with the not-found page.
pub fn router(leptos_options: LeptosOptions) -> Router {
    // the bare root is answered here so the redirect carries a real status
    let routes = generate_route_list_with_exclusions(App, Some(vec!["/".to_string()]));

    Router::new()
        .route(
            "/",
            get(|| async { Redirect::temporary(&DEFAULT_LOCALE.home_route()) }),
        )
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(leptos_options)
}
