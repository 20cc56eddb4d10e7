use crate::types::NewCatalogEntry;

/// Sample rows loaded at every startup, in insertion order.
pub fn sample_cheeses() -> Vec<NewCatalogEntry> {
    vec![
        NewCatalogEntry::new(
            "Пармезан",
            "Италия",
            25.99,
            "/images/parmesan.jpg",
            "Твердый итальянский сыр с насыщенным вкусом и ароматом.",
            "твердый",
        ),
        NewCatalogEntry::new(
            "Бри",
            "Франция",
            19.50,
            "/images/brie.jpg",
            "Мягкий сыр с белой плесенью и нежным кремовым вкусом.",
            "мягкий",
        ),
        NewCatalogEntry::new(
            "Чеддер",
            "Англия",
            15.00,
            "/images/cheddar.jpg",
            "Полутвердый сыр с острым, слегка пикантным вкусом.",
            "полутвердый",
        ),
        NewCatalogEntry::new(
            "Гауда",
            "Нидерланды",
            18.75,
            "/images/gouda.jpg",
            "Полутвердый сыр с мягким сливочным вкусом.",
            "полутвердый",
        ),
        NewCatalogEntry::new(
            "Рокфор",
            "Франция",
            30.00,
            "/images/roquefort.jpg",
            "Синий сыр с насыщенным и острым вкусом.",
            "с плесенью",
        ),
        NewCatalogEntry::new(
            "Моцарелла",
            "Италия",
            12.00,
            "/images/mozzarella.jpg",
            "Свежий мягкий сыр, отлично подходит для салатов и пиццы.",
            "мягкий",
        ),
    ]
}
