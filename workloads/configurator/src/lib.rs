//! BinaRig configurator HTTP component.
//!
//! One selection per deployment: every request loads the persisted build,
//! applies at most one operation, and writes the result back (last write
//! wins). All request handling is a pure function from request context to
//! [`AppResponse`]; only the entry point at the bottom touches Spin.

mod api;
mod pages;
mod response;
mod router;

pub use api::BuildView;
pub use response::AppResponse;
pub use router::Route;

use rig_cache::BuildSlot;
use rig_catalog::{CatalogBackend, CatalogProvider};
use rig_commerce::SelectionStore;
use rig_core::{LogLevel, RequestContext, StructuredLogger};

/// The configurator application: catalog access plus the persisted build.
pub struct App<B> {
    pub(crate) provider: CatalogProvider<B>,
    pub(crate) slot: BuildSlot,
}

impl<B: CatalogBackend> App<B> {
    pub fn new(provider: CatalogProvider<B>, slot: BuildSlot) -> Self {
        Self { provider, slot }
    }

    /// Handle one request.
    pub fn dispatch(&self, ctx: &RequestContext) -> AppResponse {
        let logger = StructuredLogger::new(ctx.request_id.clone())
            .with_component("configurator")
            .with_route(&ctx.path)
            .with_min_level(LogLevel::Info);

        let response = match Route::of(ctx) {
            Route::Health => AppResponse::text(200, "BinaRig: OK"),
            Route::Page {
                locale,
                rewritten_to,
            } => self.handle_page(ctx, locale, rewritten_to),
            Route::Categories => self.handle_categories(ctx),
            Route::Parts => self.handle_parts(ctx),
            Route::Build => self.handle_build(),
            Route::Choose => self.handle_choose(ctx, &logger),
            Route::Remove => self.handle_remove(ctx, &logger),
            Route::Reset => self.handle_reset(&logger),
            Route::Export => self.handle_export(ctx),
            Route::NotFound => AppResponse::not_found("no such route"),
            Route::MethodNotAllowed => AppResponse::method_not_allowed(),
        };

        logger
            .info_builder("Request handled")
            .field_i64("status", i64::from(response.status))
            .emit();

        response
    }

    /// Load the working selection: persisted IDs re-resolved against the
    /// current catalog, or an empty store when nothing usable is saved.
    pub(crate) fn load_store(&self) -> SelectionStore {
        let catalog = self.provider.parts(None);
        match self.slot.load() {
            Some(saved) => SelectionStore::rehydrate(&saved, &catalog.value),
            None => SelectionStore::new(),
        }
    }

    /// Write the selection back to the slot. Failures are logged and
    /// swallowed; the in-memory state stays authoritative for this request.
    pub(crate) fn persist(&self, store: &SelectionStore, logger: &StructuredLogger) {
        if let Err(e) = self.slot.save(&store.to_saved()) {
            logger
                .warn_builder("Build save failed")
                .field("error", e.to_string())
                .emit();
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod spin_entry {
    use super::*;
    use rig_catalog::{SampleBackend, SqliteBackend};
    use rig_core::Method;
    use spin_sdk::http::{Request, Response};
    use spin_sdk::http_component;

    #[http_component]
    fn handle(req: Request) -> anyhow::Result<Response> {
        let method = Method::parse(&format!("{:?}", req.method()));
        let ctx = RequestContext::new(method, req.path_and_query().unwrap_or("/"));

        // A database that won't even open is the same as an empty one.
        let backend: Box<dyn CatalogBackend> = match SqliteBackend::open_default() {
            Ok(backend) => Box::new(backend),
            Err(_) => Box::new(SampleBackend),
        };
        let slot = BuildSlot::open()?;
        let app = App::new(CatalogProvider::new(backend), slot);

        let out = app.dispatch(&ctx);
        let mut builder = Response::builder();
        builder.status(out.status);
        for (name, value) in &out.headers {
            builder.header(name.as_str(), value.as_str());
        }
        Ok(builder.body(out.body).build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rig_cache::KvStore;
    use rig_catalog::SampleBackend;
    use rig_core::Method;

    fn app() -> App<SampleBackend> {
        let store = KvStore::open_default().unwrap();
        App::new(
            CatalogProvider::new(SampleBackend),
            BuildSlot::with_store(store),
        )
    }

    fn get(app: &App<SampleBackend>, path: &str) -> AppResponse {
        app.dispatch(&RequestContext::new(Method::Get, path))
    }

    fn post(app: &App<SampleBackend>, path: &str) -> AppResponse {
        app.dispatch(&RequestContext::new(Method::Post, path))
    }

    #[test]
    fn test_health_probe() {
        let app = app();
        let resp = get(&app, "/_health");
        assert_eq!(resp.status, 200);
        assert_eq!(resp.body_text(), "BinaRig: OK");
    }

    #[test]
    fn test_unprefixed_page_rewrites_to_default_locale() {
        let app = app();
        let resp = get(&app, "/");
        assert_eq!(resp.status, 200);
        assert_eq!(resp.header("content-language"), Some("ms"));
        assert_eq!(resp.header("x-rewritten-path"), Some("/ms/"));
    }

    #[test]
    fn test_prefixed_page_serves_that_locale() {
        let app = app();
        let resp = get(&app, "/en");
        assert_eq!(resp.header("content-language"), Some("en"));
        assert_eq!(resp.header("x-rewritten-path"), None);
        assert!(resp.body_text().contains("Pick parts and see your build summary."));
    }

    #[test]
    fn test_categories_are_localized() {
        let app = app();
        let resp = get(&app, "/api/categories?locale=ms");
        assert_eq!(resp.status, 200);
        let body: serde_json::Value = serde_json::from_slice(&resp.body).unwrap();
        assert_eq!(body.as_array().unwrap().len(), 8);
        assert_eq!(body[1]["label"], "Papan Induk");
        assert_eq!(resp.header("x-catalog-source"), Some("primary"));
    }

    #[test]
    fn test_parts_filterable_by_category() {
        let app = app();
        let resp = get(&app, "/api/parts?category=gpu");
        let body: serde_json::Value = serde_json::from_slice(&resp.body).unwrap();
        assert_eq!(body.as_array().unwrap().len(), 3);
        assert_eq!(body[0]["categoryKey"], "gpu");
    }

    #[test]
    fn test_parts_unknown_category_is_400() {
        let app = app();
        let resp = get(&app, "/api/parts?category=keyboard");
        assert_eq!(resp.status, 400);
        assert!(resp.body_text().contains("keyboard"));
    }

    #[test]
    fn test_choose_persists_across_requests() {
        let app = app();
        let resp = post(&app, "/api/build/choose?category=cpu&part=cpu-1");
        assert_eq!(resp.status, 200);

        let build = get(&app, "/api/build");
        let body: serde_json::Value = serde_json::from_slice(&build.body).unwrap();
        assert_eq!(body["selection"]["slots"]["cpu"][0]["id"], "cpu-1");
        assert_eq!(body["totals"]["total_price"], 189.0);
        assert_eq!(body["totals"]["total_watt"], 65);
    }

    #[test]
    fn test_choose_single_select_replaces() {
        let app = app();
        post(&app, "/api/build/choose?category=cpu&part=cpu-1");
        post(&app, "/api/build/choose?category=cpu&part=cpu-2");

        let build = get(&app, "/api/build");
        let body: serde_json::Value = serde_json::from_slice(&build.body).unwrap();
        let cpus = body["selection"]["slots"]["cpu"].as_array().unwrap();
        assert_eq!(cpus.len(), 1);
        assert_eq!(cpus[0]["id"], "cpu-2");
    }

    #[test]
    fn test_choose_multi_select_accumulates() {
        let app = app();
        post(&app, "/api/build/choose?category=ram&part=ram-1");
        post(&app, "/api/build/choose?category=ram&part=ram-2");
        // Duplicate is a no-op, not an error.
        let resp = post(&app, "/api/build/choose?category=ram&part=ram-1");
        assert_eq!(resp.status, 200);

        let build = get(&app, "/api/build");
        let body: serde_json::Value = serde_json::from_slice(&build.body).unwrap();
        assert_eq!(body["selection"]["slots"]["ram"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_choose_unknown_part_is_404() {
        let app = app();
        let resp = post(&app, "/api/build/choose?category=cpu&part=cpu-999");
        assert_eq!(resp.status, 404);
    }

    #[test]
    fn test_choose_missing_params_is_400() {
        let app = app();
        assert_eq!(post(&app, "/api/build/choose?part=cpu-1").status, 400);
        assert_eq!(post(&app, "/api/build/choose?category=cpu").status, 400);
    }

    #[test]
    fn test_remove_one_part() {
        let app = app();
        post(&app, "/api/build/choose?category=ram&part=ram-1");
        post(&app, "/api/build/choose?category=ram&part=ram-2");
        post(&app, "/api/build/remove?category=ram&part=ram-1");

        let build = get(&app, "/api/build");
        let body: serde_json::Value = serde_json::from_slice(&build.body).unwrap();
        let rams = body["selection"]["slots"]["ram"].as_array().unwrap();
        assert_eq!(rams.len(), 1);
        assert_eq!(rams[0]["id"], "ram-2");
    }

    #[test]
    fn test_remove_whole_category() {
        let app = app();
        post(&app, "/api/build/choose?category=ram&part=ram-1");
        post(&app, "/api/build/choose?category=ram&part=ram-2");
        post(&app, "/api/build/remove?category=ram");

        let build = get(&app, "/api/build");
        let body: serde_json::Value = serde_json::from_slice(&build.body).unwrap();
        assert!(body["selection"]["slots"]["ram"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let app = app();
        post(&app, "/api/build/choose?category=cpu&part=cpu-1");
        post(&app, "/api/build/choose?category=gpu&part=gpu-1");
        let resp = post(&app, "/api/build/reset");
        assert_eq!(resp.status, 200);

        let build = get(&app, "/api/build");
        let body: serde_json::Value = serde_json::from_slice(&build.body).unwrap();
        assert_eq!(body["totals"]["total_watt"], 0);
        assert!(body["selection"]["slots"]["cpu"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_export_document_shape_and_filename() {
        let app = app();
        post(&app, "/api/build/choose?category=gpu&part=gpu-1");

        let resp = get(&app, "/api/export?locale=en");
        assert_eq!(resp.status, 200);
        assert_eq!(
            resp.header("content-disposition"),
            Some("attachment; filename=binarig-build-en.json")
        );
        let body: serde_json::Value = serde_json::from_slice(&resp.body).unwrap();
        assert_eq!(body["rows"].as_array().unwrap().len(), 9);
        assert!(body["rows"][2]["parts"][0]["buyUrl"]
            .as_str()
            .unwrap()
            .contains("google.com"));
    }

    #[test]
    fn test_page_picker_opens_from_query() {
        let app = app();
        let resp = get(&app, "/en?choose=gpu");
        assert!(resp.body_text().contains(r#"data-section="picker""#));
        assert!(resp.body_text().contains("RTX 4070 Super"));
    }

    #[test]
    fn test_wrong_method_is_405() {
        let app = app();
        assert_eq!(get(&app, "/api/build/reset").status, 405);
        assert_eq!(post(&app, "/api/parts").status, 405);
    }

    #[test]
    fn test_stale_saved_id_is_dropped_on_load() {
        // Persist an ID the catalog no longer carries, then read the build.
        use rig_commerce::{CategoryKey, PartId, SavedSelection};
        use std::collections::BTreeMap;

        let store = KvStore::open_default().unwrap();
        let slot = BuildSlot::with_store(store);
        let mut map = BTreeMap::new();
        map.insert(CategoryKey::Cpu, vec![PartId::from("cpu-gone")]);
        map.insert(CategoryKey::Gpu, vec![PartId::from("gpu-1")]);
        slot.save(&SavedSelection(map)).unwrap();

        let app = App::new(CatalogProvider::new(SampleBackend), slot);
        let build = get(&app, "/api/build");
        let body: serde_json::Value = serde_json::from_slice(&build.body).unwrap();
        assert!(body["selection"]["slots"]["cpu"].as_array().unwrap().is_empty());
        assert_eq!(body["selection"]["slots"]["gpu"][0]["id"], "gpu-1");
    }
}
