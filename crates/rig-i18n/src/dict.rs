//! Static string tables for the supported locales.

use rig_commerce::CategoryKey;

/// The full string table for one locale.
///
/// Everything is `&'static str`; the tables are data, not logic, and the
/// two locales carry exactly the same keys.
#[derive(Debug, Clone, Copy)]
pub struct Dictionary {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub general: GeneralStrings,
    pub actions: ActionStrings,
    pub table: TableStrings,
    pub dialog: DialogStrings,
    categories: [&'static str; 8],
}

#[derive(Debug, Clone, Copy)]
pub struct GeneralStrings {
    pub not_selected: &'static str,
    pub choose_category_prefix: &'static str,
    pub dash: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ActionStrings {
    pub reset_all: &'static str,
    pub save_build: &'static str,
    pub change: &'static str,
    pub choose: &'static str,
    pub remove: &'static str,
    pub export_list: &'static str,
    pub select: &'static str,
    pub close: &'static str,
    pub buy: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct TableStrings {
    pub title: &'static str,
    pub category: &'static str,
    pub part: &'static str,
    pub price: &'static str,
    pub total: &'static str,
    pub brand: &'static str,
    pub details: &'static str,
    pub watt: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct DialogStrings {
    pub choose_category_prefix: &'static str,
    pub choose_part: &'static str,
}

impl Dictionary {
    /// The localized display label for a category.
    ///
    /// The table is indexed in `CategoryKey::ALL` order.
    pub fn category_label(&self, key: CategoryKey) -> &'static str {
        let index = CategoryKey::ALL
            .iter()
            .position(|k| *k == key)
            .unwrap_or(0);
        self.categories[index]
    }
}

/// English strings.
pub static DICT_EN: Dictionary = Dictionary {
    title: "BinaRig",
    subtitle: "Pick parts and see your build summary.",
    general: GeneralStrings {
        not_selected: "Not selected",
        choose_category_prefix: "Choose",
        dash: "\u{2014}",
    },
    actions: ActionStrings {
        reset_all: "Reset All",
        save_build: "Save Build",
        change: "Change",
        choose: "Choose",
        remove: "Remove",
        export_list: "Export List",
        select: "Select",
        close: "Close",
        buy: "Buy",
    },
    table: TableStrings {
        title: "Build Summary",
        category: "Category",
        part: "Part",
        price: "Price",
        total: "Total",
        brand: "Brand",
        details: "Details",
        watt: "Estimated Watt",
    },
    dialog: DialogStrings {
        choose_category_prefix: "Choose",
        choose_part: "Choose Part",
    },
    categories: [
        "CPU",
        "Motherboard",
        "GPU",
        "Memory (RAM)",
        "Storage",
        "Power Supply",
        "Case",
        "CPU Cooler",
    ],
};

/// Bahasa Melayu strings.
pub static DICT_MS: Dictionary = Dictionary {
    title: "BinaRig",
    subtitle: "Pilih komponen dan lihat ringkasan binaan.",
    general: GeneralStrings {
        not_selected: "Belum dipilih",
        choose_category_prefix: "Pilih",
        dash: "\u{2014}",
    },
    actions: ActionStrings {
        reset_all: "Tetapkan Semula",
        save_build: "Simpan Binaan",
        change: "Tukar",
        choose: "Pilih",
        remove: "Buang",
        export_list: "Eksport Senarai",
        select: "Pilih",
        close: "Tutup",
        buy: "Beli",
    },
    table: TableStrings {
        title: "Ringkasan Binaan",
        category: "Kategori",
        part: "Komponen",
        price: "Harga",
        total: "Jumlah",
        brand: "Jenama",
        details: "Perincian",
        watt: "Watt Anggaran",
    },
    dialog: DialogStrings {
        choose_category_prefix: "Pilih",
        choose_part: "Pilih Komponen",
    },
    categories: [
        "CPU",
        "Papan Induk",
        "GPU",
        "Memori (RAM)",
        "Storan",
        "Bekalan Kuasa",
        "Casing",
        "Penyejuk CPU",
    ],
};
