//! The exported build-summary payload.

use crate::links::SearchTarget;
use rig_commerce::{aggregate, CategoryKey, Part, Price, Selection};
use rig_i18n::Locale;
use serde::{Deserialize, Serialize};

/// One selected part as it appears in the export.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExportPart {
    pub name: String,
    pub brand: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Locale-formatted price string.
    pub price: String,
    pub watt: u32,
    /// Search URL for the locale's buy target.
    pub buy_url: String,
}

/// One row of the exported summary.
///
/// Eight category rows in display order, then one totals row. A category
/// with nothing selected becomes a placeholder: empty part list, dash for
/// the price. The totals row carries no category key and no parts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExportRow {
    /// Localized row label (category name, or the totals label).
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryKey>,
    pub parts: Vec<ExportPart>,
    /// Locale-formatted row price, or a dash for empty categories.
    pub price: String,
    pub watt: u32,
}

/// The complete export payload for one build.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub locale: Locale,
    pub title: String,
    pub rows: Vec<ExportRow>,
}

impl ExportDocument {
    /// Build the export payload from a selection.
    pub fn build(selection: &Selection, locale: Locale) -> Self {
        let dict = locale.dict();
        let target = SearchTarget::for_locale(locale);

        let mut rows: Vec<ExportRow> = CategoryKey::ALL
            .iter()
            .map(|key| {
                let parts = selection.parts(*key);
                let row_price = Price::sum(parts.iter().map(|p| &p.price));
                let row_watt = parts.iter().fold(0u32, |acc, p| acc.saturating_add(p.watt));
                ExportRow {
                    label: dict.category_label(*key).to_string(),
                    category: Some(*key),
                    parts: parts.iter().map(|p| export_part(p, locale, target)).collect(),
                    price: if parts.is_empty() {
                        dict.general.dash.to_string()
                    } else {
                        locale.format_price(row_price)
                    },
                    watt: row_watt,
                }
            })
            .collect();

        let totals = aggregate(selection);
        rows.push(ExportRow {
            label: dict.table.total.to_string(),
            category: None,
            parts: vec![],
            price: locale.format_price(totals.total_price),
            watt: totals.total_watt,
        });

        Self {
            locale,
            title: dict.table.title.to_string(),
            rows,
        }
    }

    /// The download filename for this document.
    pub fn filename(&self) -> String {
        format!("binarig-build-{}.json", self.locale)
    }
}

fn export_part(part: &Part, locale: Locale, target: SearchTarget) -> ExportPart {
    ExportPart {
        name: part.name.clone(),
        brand: part.brand.clone(),
        details: part.details.clone(),
        price: locale.format_price(part.price),
        watt: part.watt,
        buy_url: target.url(part),
    }
}
