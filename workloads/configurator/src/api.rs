//! JSON API handlers.

use crate::response::AppResponse;
use crate::App;
use rig_catalog::{CatalogBackend, CatalogSource, Sourced};
use rig_commerce::{aggregate, BuildTotals, Category, CategoryKey, PartId, Selection};
use rig_core::{RequestContext, StructuredLogger};
use rig_export::ExportDocument;
use rig_i18n::{Locale, DEFAULT_LOCALE};
use serde::Serialize;

/// The selection plus its derived totals, as served by `/api/build`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildView {
    pub selection: Selection,
    pub totals: BuildTotals,
}

impl BuildView {
    fn of(selection: &Selection) -> Self {
        Self {
            selection: selection.clone(),
            totals: aggregate(selection),
        }
    }
}

fn source_str(source: CatalogSource) -> &'static str {
    match source {
        CatalogSource::Primary => "primary",
        CatalogSource::Fallback => "fallback",
    }
}

fn locale_param(ctx: &RequestContext) -> Locale {
    ctx.query_param("locale")
        .and_then(Locale::from_segment)
        .unwrap_or(DEFAULT_LOCALE)
}

impl<B: CatalogBackend> App<B> {
    pub(crate) fn handle_categories(&self, ctx: &RequestContext) -> AppResponse {
        let locale = locale_param(ctx);
        let dict = locale.dict();
        let Sourced { value, source } = self.provider.categories();

        let localized: Vec<Category> = value
            .iter()
            .map(|c| Category::new(c.key, dict.category_label(c.key)))
            .collect();

        AppResponse::json(&localized).with_header("x-catalog-source", source_str(source))
    }

    pub(crate) fn handle_parts(&self, ctx: &RequestContext) -> AppResponse {
        let category = match ctx.query_param("category") {
            Some(raw) => match CategoryKey::parse(raw) {
                Ok(key) => Some(key),
                Err(e) => return AppResponse::bad_request(e.to_string()),
            },
            None => None,
        };

        let Sourced { value, source } = self.provider.parts(category);
        AppResponse::json(&value).with_header("x-catalog-source", source_str(source))
    }

    pub(crate) fn handle_build(&self) -> AppResponse {
        let store = self.load_store();
        AppResponse::json(&BuildView::of(store.selection()))
    }

    pub(crate) fn handle_choose(
        &self,
        ctx: &RequestContext,
        logger: &StructuredLogger,
    ) -> AppResponse {
        let key = match required_category(ctx) {
            Ok(key) => key,
            Err(resp) => return resp,
        };
        let part_id = match ctx.query_param("part") {
            Some(id) if !id.is_empty() => PartId::from(id),
            _ => return AppResponse::bad_request("missing part parameter"),
        };

        let candidates = self.provider.parts(Some(key));
        let part = match candidates.value.into_iter().find(|p| p.id == part_id) {
            Some(part) => part,
            None => {
                return AppResponse::not_found(format!(
                    "no part {} in category {}",
                    part_id, key
                ))
            }
        };

        let mut store = self.load_store();
        store.choose(key, part);
        self.persist(&store, logger);

        logger
            .info_builder("Part chosen")
            .field("category", key.as_str())
            .field("part", part_id.as_str())
            .emit();

        AppResponse::json(&BuildView::of(store.selection()))
    }

    pub(crate) fn handle_remove(
        &self,
        ctx: &RequestContext,
        logger: &StructuredLogger,
    ) -> AppResponse {
        let key = match required_category(ctx) {
            Ok(key) => key,
            Err(resp) => return resp,
        };
        let part_id = ctx
            .query_param("part")
            .filter(|id| !id.is_empty())
            .map(PartId::from);

        let mut store = self.load_store();
        store.remove(key, part_id.as_ref());
        self.persist(&store, logger);

        AppResponse::json(&BuildView::of(store.selection()))
    }

    pub(crate) fn handle_reset(&self, logger: &StructuredLogger) -> AppResponse {
        let store = rig_commerce::SelectionStore::new();
        if let Err(e) = self.slot.clear() {
            logger
                .warn_builder("Build slot clear failed")
                .field("error", e.to_string())
                .emit();
        }
        AppResponse::json(&BuildView::of(store.selection()))
    }

    pub(crate) fn handle_export(&self, ctx: &RequestContext) -> AppResponse {
        let locale = locale_param(ctx);
        let store = self.load_store();
        let doc = ExportDocument::build(store.selection(), locale);

        AppResponse::json(&doc).with_header(
            "content-disposition",
            format!("attachment; filename={}", doc.filename()),
        )
    }
}

fn required_category(ctx: &RequestContext) -> Result<CategoryKey, AppResponse> {
    match ctx.query_param("category") {
        Some(raw) => CategoryKey::parse(raw).map_err(|e| AppResponse::bad_request(e.to_string())),
        None => Err(AppResponse::bad_request("missing category parameter")),
    }
}
