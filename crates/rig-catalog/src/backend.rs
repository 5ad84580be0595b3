//! Catalog storage backends.

use crate::CatalogError;
use rig_commerce::{Category, CategoryKey, Part, Price};

/// A source of catalog rows.
///
/// Backends return plain `Result`s; deciding what to do when a backend
/// fails or comes back empty is the provider's job, not theirs.
pub trait CatalogBackend {
    /// All categories, ordered by key ascending.
    fn categories(&self) -> Result<Vec<Category>, CatalogError>;

    /// Parts, optionally restricted to one category.
    ///
    /// Ordered by category key then name, both ascending.
    fn parts(&self, category: Option<CategoryKey>) -> Result<Vec<Part>, CatalogError>;
}

impl<T: CatalogBackend + ?Sized> CatalogBackend for Box<T> {
    fn categories(&self) -> Result<Vec<Category>, CatalogError> {
        (**self).categories()
    }

    fn parts(&self, category: Option<CategoryKey>) -> Result<Vec<Part>, CatalogError> {
        (**self).parts(category)
    }
}

/// SQLite-backed catalog (Spin's SQLite binding).
#[cfg(target_arch = "wasm32")]
pub struct SqliteBackend {
    conn: spin_sdk::sqlite::Connection,
}

#[cfg(target_arch = "wasm32")]
impl SqliteBackend {
    /// Open the default SQLite database.
    pub fn open_default() -> Result<Self, CatalogError> {
        let conn = spin_sdk::sqlite::Connection::open_default()
            .map_err(|e| CatalogError::OpenError(e.to_string()))?;
        Ok(Self { conn })
    }
}

#[cfg(target_arch = "wasm32")]
impl CatalogBackend for SqliteBackend {
    fn categories(&self) -> Result<Vec<Category>, CatalogError> {
        let result = self
            .conn
            .execute("SELECT key, label FROM categories ORDER BY key ASC", &[])
            .map_err(|e| CatalogError::QueryError(e.to_string()))?;

        result
            .rows
            .iter()
            .map(|row| {
                let key = text_at(&result.columns, &row.values, "key")?;
                let label = text_at(&result.columns, &row.values, "label")?;
                let key = CategoryKey::parse(&key)
                    .map_err(|e| CatalogError::MalformedRow(e.to_string()))?;
                Ok(Category::new(key, label))
            })
            .collect()
    }

    fn parts(&self, category: Option<CategoryKey>) -> Result<Vec<Part>, CatalogError> {
        let base = "SELECT p.id, p.name, p.brand, p.price, p.watt, p.details, c.key AS category_key \
                    FROM parts p JOIN categories c ON c.id = p.category_id";
        let (sql, params) = match category {
            Some(key) => (
                format!("{base} WHERE c.key = ? ORDER BY c.key ASC, p.name ASC"),
                vec![spin_sdk::sqlite::Value::Text(key.as_str().to_string())],
            ),
            None => (format!("{base} ORDER BY c.key ASC, p.name ASC"), vec![]),
        };

        let result = self
            .conn
            .execute(&sql, params.as_slice())
            .map_err(|e| CatalogError::QueryError(e.to_string()))?;

        result
            .rows
            .iter()
            .map(|row| {
                let key_str = text_at(&result.columns, &row.values, "category_key")?;
                let key = CategoryKey::parse(&key_str)
                    .map_err(|e| CatalogError::MalformedRow(e.to_string()))?;
                let details = opt_text_at(&result.columns, &row.values, "details")?;
                Ok(Part::new(
                    text_at(&result.columns, &row.values, "id")?,
                    text_at(&result.columns, &row.values, "name")?,
                    text_at(&result.columns, &row.values, "brand")?,
                    Price::from_ringgit(real_at(&result.columns, &row.values, "price")?),
                    int_at(&result.columns, &row.values, "watt")? as u32,
                    details.as_deref(),
                    key,
                ))
            })
            .collect()
    }
}

#[cfg(target_arch = "wasm32")]
fn value_at<'a>(
    columns: &[String],
    values: &'a [spin_sdk::sqlite::Value],
    name: &str,
) -> Result<&'a spin_sdk::sqlite::Value, CatalogError> {
    let index = columns
        .iter()
        .position(|c| c == name)
        .ok_or_else(|| CatalogError::MalformedRow(format!("missing column {name}")))?;
    values
        .get(index)
        .ok_or_else(|| CatalogError::MalformedRow(format!("short row at column {name}")))
}

#[cfg(target_arch = "wasm32")]
fn text_at(
    columns: &[String],
    values: &[spin_sdk::sqlite::Value],
    name: &str,
) -> Result<String, CatalogError> {
    match value_at(columns, values, name)? {
        spin_sdk::sqlite::Value::Text(s) => Ok(s.clone()),
        other => Err(CatalogError::MalformedRow(format!(
            "expected text in {name}, got {other:?}"
        ))),
    }
}

#[cfg(target_arch = "wasm32")]
fn opt_text_at(
    columns: &[String],
    values: &[spin_sdk::sqlite::Value],
    name: &str,
) -> Result<Option<String>, CatalogError> {
    match value_at(columns, values, name)? {
        spin_sdk::sqlite::Value::Text(s) => Ok(Some(s.clone())),
        spin_sdk::sqlite::Value::Null => Ok(None),
        other => Err(CatalogError::MalformedRow(format!(
            "expected text or null in {name}, got {other:?}"
        ))),
    }
}

#[cfg(target_arch = "wasm32")]
fn real_at(
    columns: &[String],
    values: &[spin_sdk::sqlite::Value],
    name: &str,
) -> Result<f64, CatalogError> {
    match value_at(columns, values, name)? {
        spin_sdk::sqlite::Value::Real(f) => Ok(*f),
        spin_sdk::sqlite::Value::Integer(i) => Ok(*i as f64),
        other => Err(CatalogError::MalformedRow(format!(
            "expected number in {name}, got {other:?}"
        ))),
    }
}

#[cfg(target_arch = "wasm32")]
fn int_at(
    columns: &[String],
    values: &[spin_sdk::sqlite::Value],
    name: &str,
) -> Result<i64, CatalogError> {
    match value_at(columns, values, name)? {
        spin_sdk::sqlite::Value::Integer(i) => Ok(*i),
        other => Err(CatalogError::MalformedRow(format!(
            "expected integer in {name}, got {other:?}"
        ))),
    }
}
