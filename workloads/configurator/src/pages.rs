//! Server-rendered configurator page.
//!
//! Sections are rendered as HTML strings and stitched into one document,
//! with a single styles constant for the whole page.

use crate::response::AppResponse;
use crate::App;
use rig_catalog::CatalogBackend;
use rig_commerce::{CategoryKey, Part, SelectionStore};
use rig_core::RequestContext;
use rig_export::ExportDocument;
use rig_i18n::{toggle, Locale};

impl<B: CatalogBackend> App<B> {
    pub(crate) fn handle_page(
        &self,
        ctx: &RequestContext,
        locale: Locale,
        rewritten_to: Option<String>,
    ) -> AppResponse {
        let mut store = self.load_store();

        // The open-picker cursor lives in the URL; an unknown category in
        // ?choose= just leaves every picker closed.
        if let Some(key) = ctx
            .query_param("choose")
            .and_then(|raw| CategoryKey::parse(raw).ok())
        {
            store.open_picker(key);
        }

        let catalog = self.provider.parts(None);
        let html = render_page(locale, &ctx.path, &store, &catalog.value);

        let mut resp =
            AppResponse::html(html).with_header("content-language", locale.as_str());
        if let Some(target) = rewritten_to {
            resp = resp.with_header("x-rewritten-path", target);
        }
        resp
    }
}

/// Render the full configurator document.
pub fn render_page(
    locale: Locale,
    path: &str,
    store: &SelectionStore,
    catalog: &[Part],
) -> String {
    let dict = locale.dict();

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{styles}</style>
</head>
<body>
<header class="site-header">
    <div>
        <h1>{title}</h1>
        <p class="subtitle">{subtitle}</p>
    </div>
    <nav class="header-actions">
        <a class="locale-toggle" href="{toggle_href}">{other_locale}</a>
        <form method="post" action="/api/build/reset">
            <button class="btn btn-ghost" type="submit">{reset}</button>
        </form>
        <a class="btn btn-primary" href="/api/export?locale={locale}">{export}</a>
    </nav>
</header>
<main class="container">
{cards}
{picker}
{summary}
</main>
</body>
</html>"#,
        lang = locale,
        title = dict.title,
        subtitle = dict.subtitle,
        styles = PAGE_STYLES,
        toggle_href = toggle(path),
        other_locale = locale.other().as_str().to_uppercase(),
        reset = dict.actions.reset_all,
        export = dict.actions.export_list,
        locale = locale,
        cards = render_category_cards(locale, store),
        picker = render_picker(locale, store, catalog),
        summary = render_summary(locale, store),
    )
}

/// One card per category showing what is chosen in it.
fn render_category_cards(locale: Locale, store: &SelectionStore) -> String {
    let dict = locale.dict();

    let cards: String = CategoryKey::ALL
        .iter()
        .map(|key| {
            let parts = store.selection().parts(*key);
            let action = if parts.is_empty() {
                dict.actions.choose
            } else {
                dict.actions.change
            };

            let contents = if parts.is_empty() {
                format!(r#"<p class="empty">{}</p>"#, dict.general.not_selected)
            } else {
                parts
                    .iter()
                    .map(|part| {
                        format!(
                            r#"<div class="selected-part">
            <span class="part-name">{name}</span>
            <span class="part-price">{price}</span>
            <form method="post" action="/api/build/remove?category={key}&amp;part={id}">
                <button class="btn btn-ghost btn-small" type="submit">{remove}</button>
            </form>
        </div>"#,
                            name = part.name,
                            price = locale.format_price(part.price),
                            key = key,
                            id = part.id,
                            remove = dict.actions.remove,
                        )
                    })
                    .collect()
            };

            format!(
                r#"<article class="category-card" data-category="{key}">
        <h2>{label}</h2>
        {contents}
        <a class="btn btn-outline" href="/{locale}?choose={key}">{action}</a>
    </article>"#,
                key = key,
                label = dict.category_label(*key),
                contents = contents,
                locale = locale,
                action = action,
            )
        })
        .collect();

    format!(
        r#"<section class="category-grid" data-section="categories">
    {cards}
</section>"#
    )
}

/// The part picker for the open category, if one is open.
fn render_picker(locale: Locale, store: &SelectionStore, catalog: &[Part]) -> String {
    let Some(key) = store.open_category() else {
        return String::new();
    };
    let dict = locale.dict();

    let rows: String = catalog
        .iter()
        .filter(|part| part.category_key == key)
        .map(|part| {
            format!(
                r#"<tr>
            <td>{name}</td>
            <td>{brand}</td>
            <td>{details}</td>
            <td class="num">{price}</td>
            <td class="num">{watt}</td>
            <td>
                <form method="post" action="/api/build/choose?category={key}&amp;part={id}">
                    <button class="btn btn-primary btn-small" type="submit">{select}</button>
                </form>
            </td>
        </tr>"#,
                name = part.name,
                brand = part.brand,
                details = part.details.as_deref().unwrap_or(dict.general.dash),
                price = locale.format_price(part.price),
                watt = part.watt,
                key = key,
                id = part.id,
                select = dict.actions.select,
            )
        })
        .collect();

    format!(
        r#"<section class="picker" data-section="picker" data-category="{key}">
    <header class="picker-header">
        <h2>{prefix} {label}</h2>
        <a class="btn btn-ghost" href="/{locale}">{close}</a>
    </header>
    <table>
        <thead>
        <tr><th>{part}</th><th>{brand}</th><th>{details}</th><th>{price}</th><th>{watt}</th><th></th></tr>
        </thead>
        <tbody>
        {rows}
        </tbody>
    </table>
</section>"#,
        key = key,
        prefix = dict.dialog.choose_category_prefix,
        label = dict.category_label(key),
        locale = locale,
        close = dict.actions.close,
        part = dict.table.part,
        brand = dict.table.brand,
        details = dict.table.details,
        price = dict.table.price,
        watt = dict.table.watt,
        rows = rows,
    )
}

/// The build summary table: one row per category plus the totals row.
fn render_summary(locale: Locale, store: &SelectionStore) -> String {
    let dict = locale.dict();
    let doc = ExportDocument::build(store.selection(), locale);

    let rows: String = doc
        .rows
        .iter()
        .map(|row| {
            let is_totals = row.category.is_none();
            let parts_cell = if row.parts.is_empty() && !is_totals {
                format!(r#"<span class="empty">{}</span>"#, dict.general.not_selected)
            } else {
                row.parts
                    .iter()
                    .map(|part| {
                        format!(
                            r#"<div class="summary-part">{name} <a class="buy-link" href="{url}" target="_blank" rel="noopener">{buy}</a></div>"#,
                            name = part.name,
                            url = part.buy_url,
                            buy = dict.actions.buy,
                        )
                    })
                    .collect()
            };

            format!(
                r#"<tr class="{class}">
            <td>{label}</td>
            <td>{parts}</td>
            <td class="num">{price}</td>
            <td class="num">{watt}W</td>
        </tr>"#,
                class = if is_totals { "totals-row" } else { "" },
                label = row.label,
                parts = parts_cell,
                price = row.price,
                watt = row.watt,
            )
        })
        .collect();

    format!(
        r#"<section class="summary" data-section="summary">
    <h2>{title}</h2>
    <table>
        <thead>
        <tr><th>{category}</th><th>{part}</th><th>{price}</th><th>{watt}</th></tr>
        </thead>
        <tbody>
        {rows}
        </tbody>
    </table>
</section>"#,
        title = dict.table.title,
        category = dict.table.category,
        part = dict.table.part,
        price = dict.table.price,
        watt = dict.table.watt,
        rows = rows,
    )
}

/// CSS for the configurator page.
const PAGE_STYLES: &str = r#"
* { box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; background: #f5f6f8; color: #1c1e21; }
.site-header { display: flex; justify-content: space-between; align-items: center; background: #14213d; color: white; padding: 1rem 2rem; }
.site-header h1 { margin: 0; font-size: 1.5rem; }
.subtitle { margin: 0.25rem 0 0 0; color: #cbd5e1; font-size: 0.9rem; }
.header-actions { display: flex; gap: 0.75rem; align-items: center; }
.locale-toggle { color: #fca311; text-decoration: none; font-weight: bold; }
.container { max-width: 1100px; margin: 0 auto; padding: 2rem; }

.btn { border: none; border-radius: 6px; padding: 0.5rem 1rem; font-size: 0.9rem; cursor: pointer; text-decoration: none; display: inline-block; }
.btn-primary { background: #fca311; color: #14213d; }
.btn-outline { background: transparent; border: 1px solid #14213d; color: #14213d; }
.btn-ghost { background: transparent; color: inherit; border: 1px solid transparent; }
.btn-small { padding: 0.25rem 0.6rem; font-size: 0.8rem; }

.category-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 1rem; margin-bottom: 2rem; }
.category-card { background: white; border-radius: 8px; padding: 1.25rem; display: flex; flex-direction: column; gap: 0.75rem; }
.category-card h2 { margin: 0; font-size: 1.05rem; }
.category-card .empty { color: #94a3b8; margin: 0; }
.selected-part { display: flex; align-items: center; gap: 0.5rem; justify-content: space-between; }
.part-name { flex: 1; }
.part-price { font-weight: bold; white-space: nowrap; }

.picker { background: white; border-radius: 8px; padding: 1.5rem; margin-bottom: 2rem; }
.picker-header { display: flex; justify-content: space-between; align-items: center; }
.picker-header h2 { margin: 0; }

.summary { background: white; border-radius: 8px; padding: 1.5rem; }
.summary h2 { margin-top: 0; }
table { width: 100%; border-collapse: collapse; }
th { text-align: left; border-bottom: 2px solid #e2e8f0; padding: 0.5rem; font-size: 0.85rem; color: #475569; }
td { border-bottom: 1px solid #eef2f7; padding: 0.5rem; vertical-align: top; }
td.num { text-align: right; white-space: nowrap; }
.summary-part { margin: 0.1rem 0; }
.buy-link { color: #b45309; font-size: 0.85rem; margin-left: 0.4rem; }
.totals-row td { font-weight: bold; border-top: 2px solid #14213d; border-bottom: none; }
"#;
