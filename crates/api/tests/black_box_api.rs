use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(seed_demo: bool) -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        let app = tambo_api::app::build_app(seed_demo);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn process(
    client: &reqwest::Client,
    base_url: &str,
    phone: &str,
    message: &str,
) -> reqwest::Response {
    client
        .post(format!("{}/api/whatsapp/process", base_url))
        .json(&json!({ "phone": phone, "message": message }))
        .send()
        .await
        .unwrap()
}

async fn find_product_id(client: &reqwest::Client, base_url: &str, name: &str) -> String {
    let res = client
        .get(format!("{}/api/products", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();

    body["items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["name"] == name)
        .unwrap_or_else(|| panic!("product {name} not in catalog"))["id"]
        .as_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn health_endpoint_responds() {
    let srv = TestServer::spawn(false).await;

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/health", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn stock_command_answers_from_seeded_catalog() {
    let srv = TestServer::spawn(true).await;
    let client = reqwest::Client::new();

    let res = process(&client, &srv.base_url, "59170000001", "/stock pilsener").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();

    assert_eq!(body["command"], "stock");
    let reply = body["reply"].as_str().unwrap();
    assert!(reply.contains("Stock de Cerveza Pilsener 330ml: 48 unidades"));
    assert!(reply.contains("Precio: Bs. 6.00"));
}

#[tokio::test]
async fn free_text_gets_greeting_without_command() {
    let srv = TestServer::spawn(true).await;
    let client = reqwest::Client::new();

    let res = process(&client, &srv.base_url, "59170000001", "hola, ¿atienden hoy?").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();

    assert!(body["command"].is_null());
    assert!(body["reply"].as_str().unwrap().contains("Bienvenido a Tambo"));
}

#[tokio::test]
async fn blank_phone_is_rejected_before_processing() {
    let srv = TestServer::spawn(true).await;
    let client = reqwest::Client::new();

    let res = process(&client, &srv.base_url, "   ", "/menu").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");

    // Nothing reached the engine, so nothing was logged.
    let res = client
        .get(format!("{}/api/whatsapp/messages", srv.base_url))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn message_listing_is_oldest_first_with_limit_and_offset() {
    let srv = TestServer::spawn(true).await;
    let client = reqwest::Client::new();

    process(&client, &srv.base_url, "59170000001", "/menu").await;
    process(&client, &srv.base_url, "59170000002", "hola").await;
    process(&client, &srv.base_url, "59170000001", "/productos").await;

    let res = client
        .get(format!("{}/api/whatsapp/messages?limit=2", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["message"], "/menu");
    assert_eq!(items[0]["command"], "menu");
    assert_eq!(items[1]["message"], "hola");
    assert!(items[1]["command"].is_null());

    let res = client
        .get(format!(
            "{}/api/whatsapp/messages?limit=50&offset=2",
            srv.base_url
        ))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["message"], "/productos");
    assert_eq!(items[0]["phone"], "59170000001");
}

#[tokio::test]
async fn product_create_update_and_low_stock_listing() {
    let srv = TestServer::spawn(false).await;
    let client = reqwest::Client::new();

    // Create
    let res = client
        .post(format!("{}/api/products", srv.base_url))
        .json(&json!({
            "name": "Fernet Branca 750ml",
            "category": "licores",
            "cost_price": 5000,
            "sale_price": 8000,
            "stock": 4,
            "min_stock": 6,
            "supplier": "Importadora Argentina"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: serde_json::Value = res.json().await.unwrap();
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["category"], "licores");
    assert_eq!(created["low_stock"], true);
    assert_eq!(created["sale_price_display"], "Bs. 80.00");

    // Low stock listing picks it up
    let res = client
        .get(format!("{}/api/products/low-stock", srv.base_url))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["items"].as_array().unwrap().len(), 1);

    // Update (full replacement): restocked above the minimum
    let res = client
        .put(format!("{}/api/products/{}", srv.base_url, id))
        .json(&json!({
            "name": "Fernet Branca 750ml",
            "category": "licores",
            "cost_price": 5000,
            "sale_price": 8500,
            "stock": 30,
            "min_stock": 6,
            "supplier": "Importadora Argentina"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated: serde_json::Value = res.json().await.unwrap();
    assert_eq!(updated["sale_price"], 8500);
    assert_eq!(updated["stock"], 30);
    assert_eq!(updated["low_stock"], false);

    let res = client
        .get(format!("{}/api/products/{}", srv.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let fetched: serde_json::Value = res.json().await.unwrap();
    assert_eq!(fetched["sale_price"], 8500);
}

#[tokio::test]
async fn product_lookup_rejects_bad_ids() {
    let srv = TestServer::spawn(false).await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/products/not-a-uuid", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_id");

    let res = client
        .get(format!(
            "{}/api/products/{}",
            srv.base_url,
            uuid::Uuid::now_v7()
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn order_placement_prices_lines_and_decrements_stock() {
    let srv = TestServer::spawn(true).await;
    let client = reqwest::Client::new();

    let pilsener = find_product_id(&client, &srv.base_url, "Cerveza Pilsener 330ml").await;

    let res = client
        .post(format!("{}/api/orders", srv.base_url))
        .json(&json!({
            "customer_name": "María Condori",
            "customer_phone": "59171234567",
            "items": [{ "product_id": pilsener, "quantity": 2 }],
            "payment_method": "qr"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let order: serde_json::Value = res.json().await.unwrap();

    assert_eq!(order["status"], "pendiente");
    assert_eq!(order["subtotal"], 1200);
    assert_eq!(order["iva"], 156);
    assert_eq!(order["it"], 36);
    assert_eq!(order["total"], 1392);
    assert_eq!(order["total_display"], "Bs. 13.92");
    assert_eq!(order["items"][0]["product_name"], "Cerveza Pilsener 330ml");

    // Stock went down on the priced product.
    let res = client
        .get(format!("{}/api/products/{}", srv.base_url, pilsener))
        .send()
        .await
        .unwrap();
    let product: serde_json::Value = res.json().await.unwrap();
    assert_eq!(product["stock"], 46);

    // Status can move through the delivery flow; delivery stamps the time.
    let order_id = order["id"].as_str().unwrap();
    let res = client
        .put(format!("{}/api/orders/{}/status", srv.base_url, order_id))
        .json(&json!({ "status": "entregado" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let delivered: serde_json::Value = res.json().await.unwrap();
    assert_eq!(delivered["status"], "entregado");
    assert!(delivered["delivered_at"].is_string());
}

#[tokio::test]
async fn order_rejections_leave_stock_untouched() {
    let srv = TestServer::spawn(true).await;
    let client = reqwest::Client::new();

    let pilsener = find_product_id(&client, &srv.base_url, "Cerveza Pilsener 330ml").await;

    // Unknown product
    let res = client
        .post(format!("{}/api/orders", srv.base_url))
        .json(&json!({
            "customer_name": "María Condori",
            "customer_phone": "59171234567",
            "items": [{ "product_id": uuid::Uuid::now_v7().to_string(), "quantity": 1 }]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // More than is on the shelf
    let res = client
        .post(format!("{}/api/orders", srv.base_url))
        .json(&json!({
            "customer_name": "María Condori",
            "customer_phone": "59171234567",
            "items": [{ "product_id": pilsener, "quantity": 999 }]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("insufficient stock"));

    // No items at all
    let res = client
        .post(format!("{}/api/orders", srv.base_url))
        .json(&json!({
            "customer_name": "María Condori",
            "customer_phone": "59171234567",
            "items": []
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Stock unchanged after all three rejections.
    let res = client
        .get(format!("{}/api/products/{}", srv.base_url, pilsener))
        .send()
        .await
        .unwrap();
    let product: serde_json::Value = res.json().await.unwrap();
    assert_eq!(product["stock"], 48);
}

#[tokio::test]
async fn dashboard_stats_reflect_catalog_messages_and_sales() {
    let srv = TestServer::spawn(true).await;
    let client = reqwest::Client::new();

    // Seeded catalog, nothing else yet.
    let res = client
        .get(format!("{}/api/dashboard/stats", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let stats: serde_json::Value = res.json().await.unwrap();
    assert_eq!(stats["total_products"], 8);
    assert_eq!(stats["low_stock_alerts"], 4);
    assert_eq!(stats["total_orders"], 0);
    assert_eq!(stats["whatsapp_messages"], 0);
    assert_eq!(stats["today_sales"], "Bs. 0.00");

    // One command turn, one free-text turn.
    process(&client, &srv.base_url, "59170000001", "/reporte ventas").await;
    process(&client, &srv.base_url, "59170000002", "buenas tardes").await;

    // One sale: a single Corona at Bs. 14.00.
    let corona = find_product_id(&client, &srv.base_url, "Cerveza Corona Extra").await;
    let res = client
        .post(format!("{}/api/orders", srv.base_url))
        .json(&json!({
            "customer_name": "Jorge Mamani",
            "customer_phone": "59177654321",
            "items": [{ "product_id": corona, "quantity": 1 }]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .get(format!("{}/api/dashboard/stats", srv.base_url))
        .send()
        .await
        .unwrap();
    let stats: serde_json::Value = res.json().await.unwrap();
    assert_eq!(stats["whatsapp_messages"], 2);
    assert_eq!(stats["commands_processed"], 1);
    assert_eq!(stats["total_orders"], 1);
    assert_eq!(stats["pending_orders"], 1);
    // 1400 + 13% IVA (182) + 3% IT (42)
    assert_eq!(stats["today_sales"], "Bs. 16.24");
    assert_eq!(stats["monthly_sales"], "Bs. 16.24");
}
