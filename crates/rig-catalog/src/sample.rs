//! Built-in sample catalog.
//!
//! Serves as the fallback dataset when the primary backend errors or is
//! empty, and as the whole catalog in environments without a database.

use crate::backend::CatalogBackend;
use crate::CatalogError;
use rig_commerce::{Category, CategoryKey, Part, Price};

/// All sample categories, in display order.
pub fn sample_categories() -> Vec<Category> {
    CategoryKey::ALL
        .iter()
        .map(|key| {
            let label = match key {
                CategoryKey::Cpu => "CPU",
                CategoryKey::Motherboard => "Motherboard",
                CategoryKey::Gpu => "GPU",
                CategoryKey::Ram => "Memory (RAM)",
                CategoryKey::Storage => "Storage",
                CategoryKey::Psu => "Power Supply",
                CategoryKey::Case => "Case",
                CategoryKey::Cooler => "CPU Cooler",
            };
            Category::new(*key, label)
        })
        .collect()
}

/// All sample parts, three per category.
pub fn sample_parts() -> Vec<Part> {
    use CategoryKey::*;

    let p = Price::from_ringgit;
    vec![
        Part::new("cpu-1", "Ryzen 5 7600", "AMD", p(189.0), 65, Some("6-Core, 12-Thread"), Cpu),
        Part::new("cpu-2", "Core i5-13600K", "Intel", p(299.0), 125, Some("14-Core hybrid"), Cpu),
        Part::new("cpu-3", "Ryzen 7 7800X3D", "AMD", p(399.0), 120, Some("Gaming focused"), Cpu),
        Part::new("mb-1", "B650 Tomahawk", "MSI", p(179.0), 35, Some("AM5, ATX"), Motherboard),
        Part::new("mb-2", "Z790 AORUS Elite", "Gigabyte", p(249.0), 40, Some("LGA1700, ATX"), Motherboard),
        Part::new("mb-3", "B650M-A", "ASUS", p(129.0), 30, Some("AM5, mATX"), Motherboard),
        Part::new("gpu-1", "RTX 4070 Super", "NVIDIA", p(599.0), 220, Some("12GB GDDR6X"), Gpu),
        Part::new("gpu-2", "RX 7800 XT", "AMD", p(499.0), 260, Some("16GB GDDR6"), Gpu),
        Part::new("gpu-3", "RTX 4060", "NVIDIA", p(299.0), 115, Some("8GB GDDR6"), Gpu),
        Part::new("ram-1", "32GB DDR5 6000", "Corsair", p(119.0), 10, Some("2x16GB"), Ram),
        Part::new("ram-2", "16GB DDR5 5600", "G.Skill", p(69.0), 8, Some("2x8GB"), Ram),
        Part::new("ram-3", "64GB DDR5 6000", "Kingston", p(249.0), 14, Some("2x32GB"), Ram),
        Part::new("sto-1", "1TB NVMe SSD", "Samsung 980", p(79.0), 5, Some("Gen3"), Storage),
        Part::new("sto-2", "2TB NVMe SSD", "WD Black SN850", p(159.0), 8, Some("Gen4"), Storage),
        Part::new("sto-3", "4TB SATA SSD", "Crucial MX500", p(199.0), 4, Some("SATA"), Storage),
        Part::new("psu-1", "750W Gold", "Seasonic", p(129.0), 0, Some("Fully Modular"), Psu),
        Part::new("psu-2", "650W Bronze", "Cooler Master", p(69.0), 0, Some("Semi Modular"), Psu),
        Part::new("psu-3", "850W Gold", "Corsair", p(159.0), 0, Some("Fully Modular"), Psu),
        Part::new("case-1", "Meshify 2", "Fractal", p(169.0), 0, Some("ATX, Airflow"), Case),
        Part::new("case-2", "NZXT H5 Flow", "NZXT", p(99.0), 0, Some("ATX, Airflow"), Case),
        Part::new("case-3", "Lian Li O11 Dynamic", "Lian Li", p(149.0), 0, Some("ATX, Showcase"), Case),
        Part::new("cool-1", "Thermalright Peerless Assassin", "Thermalright", p(39.0), 2, Some("Air, Dual Tower"), Cooler),
        Part::new("cool-2", "Corsair H100i", "Corsair", p(139.0), 10, Some("240mm AIO"), Cooler),
        Part::new("cool-3", "Noctua NH-D15", "Noctua", p(99.0), 2, Some("Air, Dual Tower"), Cooler),
    ]
}

/// A backend that serves the sample catalog.
///
/// Infallible in practice; it exists so the host build and the fallback
/// path speak the same trait as the SQLite backend.
pub struct SampleBackend;

impl CatalogBackend for SampleBackend {
    fn categories(&self) -> Result<Vec<Category>, CatalogError> {
        Ok(sample_categories())
    }

    fn parts(&self, category: Option<CategoryKey>) -> Result<Vec<Part>, CatalogError> {
        let mut parts = sample_parts();
        if let Some(key) = category {
            parts.retain(|part| part.category_key == key);
        }
        Ok(parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_parts_per_category() {
        for key in CategoryKey::ALL {
            let count = sample_parts()
                .iter()
                .filter(|part| part.category_key == key)
                .count();
            assert_eq!(count, 3, "{key}");
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let parts = sample_parts();
        for (i, part) in parts.iter().enumerate() {
            assert!(
                parts[i + 1..].iter().all(|other| other.id != part.id),
                "duplicate id {}",
                part.id
            );
        }
    }

    #[test]
    fn test_backend_filters_by_category() {
        let backend = SampleBackend;
        let gpus = backend.parts(Some(CategoryKey::Gpu)).unwrap();
        assert_eq!(gpus.len(), 3);
        assert!(gpus.iter().all(|p| p.category_key == CategoryKey::Gpu));
    }

    #[test]
    fn test_categories_cover_all_keys() {
        let cats = sample_categories();
        assert_eq!(cats.len(), CategoryKey::ALL.len());
        assert_eq!(cats[0].key, CategoryKey::Cpu);
        assert_eq!(cats[0].label, "CPU");
    }
}
