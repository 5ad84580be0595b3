//! Request routing: locale middleware plus the API surface.

use rig_core::{Method, RequestContext};
use rig_i18n::{Locale, Resolution};

/// Everything the configurator can serve.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    /// Plain-text health probe; bypasses locale resolution.
    Health,
    /// The server-rendered configurator page.
    Page {
        locale: Locale,
        /// Set when the request path carried no locale prefix and was
        /// internally rewritten to the default-locale path.
        rewritten_to: Option<String>,
    },
    /// `GET /api/categories`
    Categories,
    /// `GET /api/parts`
    Parts,
    /// `GET /api/build`
    Build,
    /// `POST /api/build/choose`
    Choose,
    /// `POST /api/build/remove`
    Remove,
    /// `POST /api/build/reset`
    Reset,
    /// `GET /api/export`
    Export,
    NotFound,
    MethodNotAllowed,
}

impl Route {
    /// Classify a request.
    pub fn of(ctx: &RequestContext) -> Self {
        if ctx.path == "/_health" {
            return Route::Health;
        }

        if ctx.path.starts_with("/api") {
            return Self::api(ctx);
        }

        match Resolution::of(&ctx.path) {
            // Remaining reserved paths (/_next assets, favicon) have no
            // server-side counterpart here.
            Resolution::Bypass => Route::NotFound,
            Resolution::Resolved(locale) => Route::Page {
                locale,
                rewritten_to: None,
            },
            Resolution::Rewrite { locale, target } => Route::Page {
                locale,
                rewritten_to: Some(target),
            },
        }
    }

    fn api(ctx: &RequestContext) -> Self {
        let get = ctx.method == Method::Get;
        let post = ctx.method == Method::Post;

        match ctx.path.as_str() {
            "/api/categories" if get => Route::Categories,
            "/api/parts" if get => Route::Parts,
            "/api/build" if get => Route::Build,
            "/api/build/choose" if post => Route::Choose,
            "/api/build/remove" if post => Route::Remove,
            "/api/build/reset" if post => Route::Reset,
            "/api/export" if get => Route::Export,
            "/api/categories" | "/api/parts" | "/api/build" | "/api/build/choose"
            | "/api/build/remove" | "/api/build/reset" | "/api/export" => {
                Route::MethodNotAllowed
            }
            _ => Route::NotFound,
        }
    }
}
