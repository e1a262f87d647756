use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;

use tambo_catalog::{CatalogReader, Category, NewProduct, Product};
use tambo_chatlog::InMemoryTurnLog;
use tambo_core::{Money, ProductId, StoreResult};
use tambo_messaging::{parse, MessageEngine};
use tambo_sales::RevenueReader;

/// Fixed catalog; same matching rule as the production stores.
struct BenchCatalog {
    products: Vec<Product>,
}

impl BenchCatalog {
    fn with_products(count: usize) -> Self {
        let products = (0..count)
            .map(|i| {
                Product::create(
                    ProductId::new(),
                    NewProduct {
                        name: format!("Producto {i}"),
                        description: None,
                        category: Category::Otros,
                        cost_price: Money::from_centavos(500),
                        sale_price: Money::from_centavos(900),
                        stock: 30,
                        min_stock: 10,
                        supplier: None,
                    },
                    Utc::now(),
                )
                .unwrap()
            })
            .collect();
        Self { products }
    }
}

impl CatalogReader for BenchCatalog {
    fn list_all(&self) -> StoreResult<Vec<Product>> {
        Ok(self.products.clone())
    }

    fn find_by_name_fragment(&self, fragment: &str) -> StoreResult<Vec<Product>> {
        let needle = fragment.to_lowercase();
        Ok(self
            .products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}

struct BenchLedger;

impl RevenueReader for BenchLedger {
    fn revenue_in_range(&self, _start: DateTime<Utc>, _end: DateTime<Utc>) -> StoreResult<Money> {
        Ok(Money::from_centavos(123_456))
    }
}

fn bench_parse_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_latency");
    group.sample_size(1000);

    for (label, text) in [
        ("menu", "/menu"),
        ("stock_with_argument", "/stock   Cerveza   Pilsener "),
        ("free_text", "hola, quisiera saber si tienen singani en oferta esta semana"),
    ] {
        group.bench_function(label, |b| {
            b.iter(|| parse(black_box(text)));
        });
    }

    group.finish();
}

fn bench_message_processing(c: &mut Criterion) {
    let mut group = c.benchmark_group("message_processing");
    group.throughput(Throughput::Elements(1));

    for catalog_size in [10, 100, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::new("stock_lookup", catalog_size),
            catalog_size,
            |b, &size| {
                let engine = MessageEngine::new(
                    BenchCatalog::with_products(size),
                    BenchLedger,
                    Arc::new(InMemoryTurnLog::new()),
                );
                let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();

                b.iter(|| {
                    engine
                        .process_message_at(
                            black_box("+591 70000001"),
                            black_box("/stock Producto 7"),
                            now,
                        )
                        .unwrap()
                });
            },
        );
    }

    group.bench_function("free_text_greeting", |b| {
        let engine = MessageEngine::new(
            BenchCatalog::with_products(100),
            BenchLedger,
            Arc::new(InMemoryTurnLog::new()),
        );
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();

        b.iter(|| {
            engine
                .process_message_at(black_box("+591 70000001"), black_box("hola"), now)
                .unwrap()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_parse_latency, bench_message_processing);
criterion_main!(benches);
