//! The fallback-aware catalog provider.

use crate::backend::CatalogBackend;
use crate::sample;
use rig_commerce::{Category, CategoryKey, Part};
use serde::{Deserialize, Serialize};

/// Where a catalog answer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSource {
    /// The configured backend answered with data.
    Primary,
    /// The built-in sample catalog answered instead.
    Fallback,
}

/// A catalog answer tagged with its origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sourced<T> {
    pub value: T,
    pub source: CatalogSource,
}

impl<T> Sourced<T> {
    fn primary(value: T) -> Self {
        Self {
            value,
            source: CatalogSource::Primary,
        }
    }

    fn fallback(value: T) -> Self {
        Self {
            value,
            source: CatalogSource::Fallback,
        }
    }
}

/// Reads the catalog through a backend and silently substitutes the sample
/// data when the backend errors or answers with nothing.
///
/// The provider never returns an error: a broken or unseeded database
/// degrades to the sample catalog rather than to a failed page.
pub struct CatalogProvider<B> {
    backend: B,
}

impl<B: CatalogBackend> CatalogProvider<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// All categories in display order.
    pub fn categories(&self) -> Sourced<Vec<Category>> {
        match self.backend.categories() {
            Ok(categories) if !categories.is_empty() => Sourced::primary(categories),
            _ => Sourced::fallback(sample::sample_categories()),
        }
    }

    /// Parts, optionally restricted to one category.
    pub fn parts(&self, category: Option<CategoryKey>) -> Sourced<Vec<Part>> {
        match self.backend.parts(category) {
            Ok(parts) if !parts.is_empty() => Sourced::primary(parts),
            _ => {
                let mut parts = sample::sample_parts();
                if let Some(key) = category {
                    parts.retain(|part| part.category_key == key);
                }
                Sourced::fallback(parts)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CatalogError;
    use rig_commerce::Price;

    struct FailingBackend;

    impl CatalogBackend for FailingBackend {
        fn categories(&self) -> Result<Vec<Category>, CatalogError> {
            Err(CatalogError::QueryError("no such table".to_string()))
        }

        fn parts(&self, _category: Option<CategoryKey>) -> Result<Vec<Part>, CatalogError> {
            Err(CatalogError::QueryError("no such table".to_string()))
        }
    }

    struct EmptyBackend;

    impl CatalogBackend for EmptyBackend {
        fn categories(&self) -> Result<Vec<Category>, CatalogError> {
            Ok(vec![])
        }

        fn parts(&self, _category: Option<CategoryKey>) -> Result<Vec<Part>, CatalogError> {
            Ok(vec![])
        }
    }

    struct OnePartBackend;

    impl CatalogBackend for OnePartBackend {
        fn categories(&self) -> Result<Vec<Category>, CatalogError> {
            Ok(vec![Category::new(CategoryKey::Cpu, "CPU")])
        }

        fn parts(&self, _category: Option<CategoryKey>) -> Result<Vec<Part>, CatalogError> {
            Ok(vec![Part::new(
                "cpu-x",
                "Threadripper 7960X",
                "AMD",
                Price::from_ringgit(2499.0),
                350,
                None,
                CategoryKey::Cpu,
            )])
        }
    }

    #[test]
    fn test_backend_error_falls_back() {
        let provider = CatalogProvider::new(FailingBackend);
        let cats = provider.categories();
        assert_eq!(cats.source, CatalogSource::Fallback);
        assert_eq!(cats.value.len(), 8);

        let parts = provider.parts(None);
        assert_eq!(parts.source, CatalogSource::Fallback);
        assert_eq!(parts.value.len(), 24);
    }

    #[test]
    fn test_empty_backend_falls_back() {
        let provider = CatalogProvider::new(EmptyBackend);
        assert_eq!(provider.categories().source, CatalogSource::Fallback);
        assert_eq!(provider.parts(None).source, CatalogSource::Fallback);
    }

    #[test]
    fn test_fallback_respects_category_filter() {
        let provider = CatalogProvider::new(FailingBackend);
        let rams = provider.parts(Some(CategoryKey::Ram));
        assert_eq!(rams.source, CatalogSource::Fallback);
        assert_eq!(rams.value.len(), 3);
        assert!(rams.value.iter().all(|p| p.category_key == CategoryKey::Ram));
    }

    #[test]
    fn test_populated_backend_is_primary() {
        let provider = CatalogProvider::new(OnePartBackend);
        let parts = provider.parts(None);
        assert_eq!(parts.source, CatalogSource::Primary);
        assert_eq!(parts.value.len(), 1);
        assert_eq!(parts.value[0].id.as_str(), "cpu-x");
    }
}
