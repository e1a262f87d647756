//! Demo catalog data.

use chrono::Utc;

use tambo_catalog::{Category, NewProduct};
use tambo_core::Money;

use crate::catalog_store::{CatalogError, InMemoryCatalog};

/// The demo storefront catalog (a La Paz liquor store).
pub fn demo_products() -> Vec<NewProduct> {
    vec![
        NewProduct {
            name: "Cerveza Pilsener 330ml".to_string(),
            description: Some("Cerveza nacional boliviana, botella de vidrio 330ml".to_string()),
            category: Category::Cervezas,
            cost_price: Money::from_centavos(350),
            sale_price: Money::from_centavos(600),
            stock: 48,
            min_stock: 20,
            supplier: Some("Cervecería Boliviana Nacional".to_string()),
        },
        NewProduct {
            name: "Vino Kohlberg Tinto".to_string(),
            description: Some("Vino tinto boliviano de Tarija, cosecha 2022".to_string()),
            category: Category::Vinos,
            cost_price: Money::from_centavos(4500),
            sale_price: Money::from_centavos(7500),
            stock: 12,
            min_stock: 5,
            supplier: Some("Bodegas Kohlberg".to_string()),
        },
        NewProduct {
            name: "Singani Casa Real".to_string(),
            description: Some("Singani boliviano premium, botella 750ml".to_string()),
            category: Category::Licores,
            cost_price: Money::from_centavos(6500),
            sale_price: Money::from_centavos(9500),
            stock: 8,
            min_stock: 10,
            supplier: Some("Casa Real".to_string()),
        },
        NewProduct {
            name: "Whisky Johnnie Walker Red".to_string(),
            description: Some("Whisky escocés Red Label, 750ml".to_string()),
            category: Category::Whiskey,
            cost_price: Money::from_centavos(12000),
            sale_price: Money::from_centavos(18000),
            stock: 6,
            min_stock: 8,
            supplier: Some("Importadora Boliviana".to_string()),
        },
        NewProduct {
            name: "Vodka Smirnoff".to_string(),
            description: Some("Vodka premium importado, 750ml".to_string()),
            category: Category::Vodka,
            cost_price: Money::from_centavos(8500),
            sale_price: Money::from_centavos(13000),
            stock: 15,
            min_stock: 10,
            supplier: Some("Importadora Premium".to_string()),
        },
        NewProduct {
            name: "Ron Bacardi Superior".to_string(),
            description: Some("Ron blanco caribeño, 750ml".to_string()),
            category: Category::Ron,
            cost_price: Money::from_centavos(7000),
            sale_price: Money::from_centavos(11000),
            stock: 9,
            min_stock: 12,
            supplier: Some("Distribuidora Caribe".to_string()),
        },
        NewProduct {
            name: "Cerveza Corona Extra".to_string(),
            description: Some("Cerveza mexicana importada, 355ml".to_string()),
            category: Category::Cervezas,
            cost_price: Money::from_centavos(800),
            sale_price: Money::from_centavos(1400),
            stock: 24,
            min_stock: 15,
            supplier: Some("Importadora México".to_string()),
        },
        NewProduct {
            name: "Pisco Control C".to_string(),
            description: Some("Pisco peruano premium, 750ml".to_string()),
            category: Category::Licores,
            cost_price: Money::from_centavos(5500),
            sale_price: Money::from_centavos(8500),
            stock: 7,
            min_stock: 10,
            supplier: Some("Importadora Perú".to_string()),
        },
    ]
}

/// Load the demo products into an empty catalog. Returns how many were added.
pub fn seed_demo_catalog(catalog: &InMemoryCatalog) -> Result<usize, CatalogError> {
    let products = demo_products();
    let count = products.len();
    let now = Utc::now();
    for product in products {
        catalog.insert(product, now)?;
    }
    tracing::info!("seeded demo catalog with {} products", count);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tambo_catalog::CatalogReader;

    #[test]
    fn demo_catalog_seeds_in_definition_order() {
        let catalog = InMemoryCatalog::new();
        let count = seed_demo_catalog(&catalog).unwrap();
        assert_eq!(count, 8);

        let products = catalog.list_all().unwrap();
        assert_eq!(products[0].name, "Cerveza Pilsener 330ml");
        assert_eq!(products[7].name, "Pisco Control C");
    }

    #[test]
    fn demo_catalog_has_low_stock_entries_out_of_the_box() {
        let catalog = InMemoryCatalog::new();
        seed_demo_catalog(&catalog).unwrap();

        let low: Vec<String> = catalog
            .low_stock()
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        // Singani (8 <= 10), Johnnie Walker (6 <= 8), Bacardi (9 <= 12),
        // Pisco (7 <= 10).
        assert_eq!(low.len(), 4);
        assert!(low.contains(&"Singani Casa Real".to_string()));
    }
}
