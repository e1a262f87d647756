//! Reply rendering.
//!
//! Every reply the engine can produce is rendered here, so the whole of the
//! user-visible Spanish lives in one place. Rendering is pure string work;
//! the dispatcher decides which reply applies.

use tambo_catalog::Product;
use tambo_core::Money;

/// Upper bound of candidate names listed for an ambiguous `/stock` query.
pub const MAX_STOCK_MATCHES: usize = 5;

/// Upper bound of products listed by `/productos`.
pub const MAX_PRODUCTS_LISTED: usize = 10;

/// Greeting for anything that is not a recognized command.
pub fn greeting() -> String {
    "¡Hola! 👋 Bienvenido a Tambo.\nEscriba /menu para ver los comandos disponibles.".to_string()
}

/// The `/menu` listing. Fixed text, one line per recognized command.
pub fn menu() -> String {
    "📋 Comandos disponibles:\n\
     /menu - Ver este menú\n\
     /stock <producto> - Consultar stock de un producto\n\
     /reporte ventas - Reporte de ventas\n\
     /productos - Ver los productos disponibles"
        .to_string()
}

/// `/stock` called without a product name.
pub fn stock_usage() -> String {
    "❓ Uso: /stock <producto>\nEjemplo: /stock pilsener".to_string()
}

/// `/stock` with exactly one match.
pub fn stock_single(product: &Product) -> String {
    let mut reply = format!(
        "📦 Stock de {}: {} unidades\n💰 Precio: {}",
        product.name, product.stock, product.sale_price
    );
    if product.is_low_stock() {
        reply.push_str(&format!("\n⚠️ Stock bajo (mínimo {})", product.min_stock));
    }
    reply
}

/// `/stock` with several matches: list candidates, ask the sender to narrow.
pub fn stock_multiple(query: &str, matches: &[Product]) -> String {
    let mut reply = format!("🔍 Varios productos coinciden con \"{query}\":");
    for product in matches.iter().take(MAX_STOCK_MATCHES) {
        reply.push_str(&format!("\n• {}", product.name));
    }
    let remaining = matches.len().saturating_sub(MAX_STOCK_MATCHES);
    if remaining > 0 {
        reply.push_str(&format!("\n(+{remaining} más)"));
    }
    reply.push_str("\nEscriba un nombre más específico.");
    reply
}

/// `/stock` with no match.
pub fn stock_no_match(query: &str) -> String {
    format!(
        "❌ No encontré \"{query}\" en el catálogo.\nEscriba /productos para ver la lista completa."
    )
}

/// `/reporte` called without a subtype.
pub fn report_usage() -> String {
    "❓ Uso: /reporte ventas".to_string()
}

/// `/reporte` with a subtype other than `ventas`.
pub fn report_unsupported(subtype: &str) -> String {
    format!("❓ No existe el reporte \"{subtype}\".\nPor ahora solo está disponible /reporte ventas.")
}

/// The `/reporte ventas` figures.
pub fn sales_report(today: Money, month: Money) -> String {
    format!("📊 Reporte de ventas\nHoy: {today}\nEste mes: {month}")
}

/// The `/productos` listing: newest products first, bounded.
pub fn product_listing(products: &[Product]) -> String {
    if products.is_empty() {
        return "📭 El catálogo está vacío por el momento.".to_string();
    }
    let mut reply = "🍷 Nuestros productos:".to_string();
    for product in products.iter().rev().take(MAX_PRODUCTS_LISTED) {
        reply.push_str(&format!("\n• {} - {}", product.name, product.sale_price));
    }
    let remaining = products.len().saturating_sub(MAX_PRODUCTS_LISTED);
    if remaining > 0 {
        reply.push_str(&format!("\n(+{remaining} productos más)"));
    }
    reply
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tambo_catalog::{Category, NewProduct};
    use tambo_core::ProductId;

    fn product(name: &str, stock: u32, min_stock: u32, sale_centavos: u64) -> Product {
        Product::create(
            ProductId::new(),
            NewProduct {
                name: name.to_string(),
                description: None,
                category: Category::Cervezas,
                cost_price: Money::from_centavos(350),
                sale_price: Money::from_centavos(sale_centavos),
                stock,
                min_stock,
                supplier: None,
            },
            Utc::now(),
        )
        .expect("valid product")
    }

    #[test]
    fn menu_names_every_command() {
        let menu = menu();
        for command in ["/menu", "/stock", "/reporte ventas", "/productos"] {
            assert!(menu.contains(command), "menu should mention {command}");
        }
    }

    #[test]
    fn single_stock_reply_shows_units_and_price() {
        let reply = stock_single(&product("Cerveza Pilsener 330ml", 48, 20, 600));
        assert!(reply.contains("Stock de Cerveza Pilsener 330ml: 48 unidades"));
        assert!(reply.contains("Bs. 6.00"));
        assert!(!reply.contains("Stock bajo"));
    }

    #[test]
    fn low_stock_warning_appears_at_the_threshold() {
        let at_threshold = stock_single(&product("Singani Casa Real", 10, 10, 9500));
        assert!(at_threshold.contains("⚠️ Stock bajo (mínimo 10)"));

        let above = stock_single(&product("Singani Casa Real", 11, 10, 9500));
        assert!(!above.contains("Stock bajo"));
    }

    #[test]
    fn multiple_matches_are_capped_with_a_remainder_note() {
        let matches: Vec<Product> = (1..=7)
            .map(|i| product(&format!("Cerveza {i}"), 20, 10, 600))
            .collect();
        let reply = stock_multiple("cerveza", &matches);

        assert!(reply.contains("Cerveza 1"));
        assert!(reply.contains("Cerveza 5"));
        assert!(!reply.contains("Cerveza 6"));
        assert!(reply.contains("(+2 más)"));
        assert!(reply.contains("más específico"));
    }

    #[test]
    fn empty_catalog_gets_an_explicit_message() {
        assert_eq!(product_listing(&[]), "📭 El catálogo está vacío por el momento.");
    }

    #[test]
    fn product_listing_is_newest_first_and_bounded() {
        let products: Vec<Product> = (1..=12)
            .map(|i| product(&format!("Producto {i}"), 20, 10, 1000))
            .collect();
        let reply = product_listing(&products);

        // Product 12 is the newest definition and leads the list.
        let p12 = reply.find("• Producto 12 -").expect("newest product listed");
        let p3 = reply.find("• Producto 3 -").expect("tenth-newest product listed");
        assert!(p12 < p3);
        assert!(!reply.contains("• Producto 2 -"));
        assert!(!reply.contains("• Producto 1 -"));
        assert!(reply.contains("(+2 productos más)"));
    }

    #[test]
    fn report_replies_name_the_supported_subtype() {
        assert!(report_usage().contains("/reporte ventas"));
        let unsupported = report_unsupported("envios");
        assert!(unsupported.contains("\"envios\""));
        assert!(unsupported.contains("/reporte ventas"));
    }

    #[test]
    fn sales_report_renders_both_windows_with_two_decimals() {
        let reply = sales_report(Money::from_centavos(12550), Money::from_centavos(983200));
        assert!(reply.contains("Hoy: Bs. 125.50"));
        assert!(reply.contains("Este mes: Bs. 9832.00"));
    }
}
