use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::http::{Method, Uri};
use axum::routing::post;
use axum::{Json, Router};
use chrono::NaiveDate;
use serde_json::{json, Value};
use shop_api::{ProductQuery, ShopApi};
use shop_cache::MemoryStore;
use shop_commerce::prelude::*;
use shop_data::{ApiClient, CollectingNotifier, FetchClient, FetchError};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
struct Captured {
    method: String,
    path: String,
    query: String,
    body: Value,
}

#[derive(Clone, Default)]
struct Mock {
    responses: Arc<HashMap<String, Value>>,
    captured: Arc<Mutex<Vec<Captured>>>,
}

impl Mock {
    fn with(responses: Vec<(&str, Value)>) -> Self {
        Self {
            responses: Arc::new(
                responses
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v))
                    .collect(),
            ),
            captured: Arc::default(),
        }
    }

    fn last(&self) -> Captured {
        self.captured.lock().unwrap().last().cloned().unwrap()
    }
}

async fn record(State(mock): State<Mock>, method: Method, uri: Uri, body: Bytes) -> Json<Value> {
    let body = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let path = uri.path().trim_start_matches("/api").to_string();
    mock.captured.lock().unwrap().push(Captured {
        method: method.to_string(),
        path: path.clone(),
        query: uri.query().unwrap_or_default().to_string(),
        body,
    });

    let key = format!("{} {}", method, path);
    match mock.responses.get(&key) {
        Some(data) => Json(json!({"code": 200, "message": "success", "data": data})),
        None => Json(json!({"code": 500, "message": format!("no handler for {}", key), "data": null})),
    }
}

async fn upload(mut multipart: Multipart) -> Json<Value> {
    while let Some(field) = multipart.next_field().await.unwrap() {
        if field.name() == Some("file") {
            let name = field.file_name().unwrap_or_default().to_string();
            let bytes = field.bytes().await.unwrap();
            return Json(json!({
                "code": 200,
                "message": "success",
                "data": format!("/api/image/{}-{}", bytes.len(), name)
            }));
        }
    }
    Json(json!({"code": 400, "message": "missing file", "data": null}))
}

async fn start(mock: Mock) -> (ShopApi, CollectingNotifier) {
    let app = Router::new()
        .route("/api/upload", post(upload))
        .fallback(record)
        .with_state(mock);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let notifier = CollectingNotifier::new();
    let client = ApiClient::new(FetchClient::new().with_base_url(format!("http://{}/api", addr)))
        .with_notifier(notifier.clone());
    (ShopApi::new(client), notifier)
}

fn product_json(id: i64, price: f64) -> Value {
    json!({
        "id": id,
        "name": format!("Product {}", id),
        "images": [format!("/api/image/{}.jpg", id)],
        "sellPrice": price,
        "categoryId": 1,
        "purchasePrice": 2,
        "createTime": "2024-05-01T09:00:00",
        "updateTime": "2024-05-01T09:00:00"
    })
}

#[tokio::test]
async fn list_products_sends_paging_and_category() {
    let mock = Mock::with(vec![(
        "GET /products",
        json!({
            "records": [product_json(1, 10.0), product_json(2, 3.5)],
            "total": 12,
            "size": 10,
            "current": 1,
            "pages": 2
        }),
    )]);
    let (api, notifier) = start(mock.clone()).await;

    let page = api
        .list_products(&ProductQuery::in_category(CategoryId::new(1)))
        .await
        .unwrap();

    assert_eq!(page.records.len(), 2);
    assert_eq!(page.records[1].sell_price, Price::from_parts(35, 1));
    assert!(page.has_next());
    assert_eq!(mock.last().query, "categoryId=1&pageNum=1&pageSize=10");
    assert!(notifier.messages().is_empty());
}

#[tokio::test]
async fn product_crud_paths() {
    let mock = Mock::with(vec![
        ("GET /products/all", json!([product_json(1, 10.0)])),
        ("GET /products/7", product_json(7, 4.0)),
        ("POST /products", product_json(8, 6.0)),
        ("PUT /products/8", Value::Null),
        ("DELETE /products/8", Value::Null),
    ]);
    let (api, _) = start(mock.clone()).await;

    assert_eq!(api.all_products().await.unwrap().len(), 1);
    assert_eq!(api.get_product(ProductId::new(7)).await.unwrap().id, ProductId::new(7));

    let input = ProductInput {
        name: "Product 8".into(),
        sell_price: Price::from(6),
        category_id: Some(CategoryId::new(1)),
        ..Default::default()
    };
    let created = api.add_product(&input).await.unwrap();
    assert_eq!(created.id, ProductId::new(8));
    assert_eq!(mock.last().body["sellPrice"], json!(6));

    api.update_product(created.id, &ProductInput::from(&created))
        .await
        .unwrap();
    assert_eq!(mock.last().method, "PUT");

    api.delete_product(created.id).await.unwrap();
    let last = mock.last();
    assert_eq!((last.method.as_str(), last.path.as_str()), ("DELETE", "/products/8"));
}

#[tokio::test]
async fn categories_sort_posts_id_list() {
    let mock = Mock::with(vec![
        (
            "GET /categories",
            json!([{"id": 2, "name": "Tea", "sortOrder": 0}, {"id": 1, "name": "Snacks", "sortOrder": 1}]),
        ),
        ("POST /categories/sort", Value::Null),
        ("POST /categories", Value::Null),
    ]);
    let (api, _) = start(mock.clone()).await;

    let categories = api.all_categories().await.unwrap();
    assert_eq!(categories[0].name, "Tea");

    api.sort_categories(&[CategoryId::new(1), CategoryId::new(2)])
        .await
        .unwrap();
    assert_eq!(mock.last().body, json!([1, 2]));

    api.add_category(&CategoryInput {
        name: "Fruit".into(),
        sort_order: None,
    })
    .await
    .unwrap();
    assert_eq!(mock.last().body, json!({"name": "Fruit"}));
}

#[tokio::test]
async fn specifications_for_product() {
    let mock = Mock::with(vec![(
        "GET /specifications/product/3",
        json!([{"id": 9, "productId": 3, "name": "500g", "specs": {"weight": "500g"}, "stock": 4}]),
    )]);
    let (api, _) = start(mock).await;

    let specs = api
        .specifications_for_product(ProductId::new(3))
        .await
        .unwrap();
    assert_eq!(specs.len(), 1);
    assert_eq!(specs[0].id, SpecificationId::new(9));
    assert_eq!(specs[0].specs.get("weight").map(String::as_str), Some("500g"));
}

#[tokio::test]
async fn create_order_from_cart() {
    let mock = Mock::with(vec![("POST /orders", json!("20240501093000123456"))]);
    let (api, _) = start(mock.clone()).await;

    let product = Product::new(ProductId::new(1), "A", Price::from(10));
    let spec = Specification::new(SpecificationId::new(9), product.id, "S");
    let mut cart = CartStore::open(MemoryStore::new());
    cart.add_to_cart(&product, Some(&spec), 2, "Snacks");

    let draft = OrderDraft::from_items(cart.items())
        .unwrap()
        .with_notes("no ice");
    let number = api.create_order(&draft).await.unwrap();

    assert_eq!(number, "20240501093000123456");
    assert_eq!(
        mock.last().body,
        json!({
            "items": {"1": [{"规格id": 9, "购买数量": 2}]},
            "totalAmount": 20,
            "paidAmount": 20,
            "notes": "no ice"
        })
    );
}

#[tokio::test]
async fn order_lookups() {
    let order = json!({
        "id": 5,
        "orderNumber": "20240501093000123456",
        "items": {"1": [{"规格id": 9, "购买数量": 2}]},
        "totalAmount": 20,
        "paidAmount": 20,
        "orderDate": "2024-05-01 09:30:00"
    });
    let mock = Mock::with(vec![
        (
            "GET /orders",
            json!({"records": [order.clone()], "total": 1, "size": 10, "current": 1, "pages": 1}),
        ),
        ("GET /orders/5", order.clone()),
        ("GET /orders/number/20240501093000123456", order),
        ("DELETE /orders/5", Value::Null),
    ]);
    let (api, _) = start(mock.clone()).await;

    let query = OrderQuery {
        start_date: NaiveDate::from_ymd_opt(2024, 5, 1).and_then(|d| d.and_hms_opt(0, 0, 0)),
        ..Default::default()
    };
    let page = api.list_orders(&query).await.unwrap();
    assert_eq!(page.records[0].item_count(), 2);
    assert!(mock.last().query.contains("startDate=2024-05-01"));

    assert_eq!(api.get_order(OrderId::new(5)).await.unwrap().id, OrderId::new(5));
    let found = api
        .get_order_by_number("20240501093000123456")
        .await
        .unwrap();
    assert_eq!(found.order_date_display(), "2024-05-01 09:30:00");
    api.delete_order(OrderId::new(5)).await.unwrap();
}

#[tokio::test]
async fn statistics_queries() {
    let mock = Mock::with(vec![
        (
            "GET /statistics/revenue",
            json!({"data": [{"time": "1", "revenue": 20.5}, {"time": "2", "revenue": 0}]}),
        ),
        ("GET /statistics/revenue/day", json!(88.8)),
        (
            "GET /statistics/hot-products",
            json!([{"productId": 1, "productName": "A", "categoryId": 1, "images": [], "sellPrice": 10, "sales": 5}]),
        ),
    ]);
    let (api, _) = start(mock.clone()).await;
    let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();

    let series = api.revenue(date, RevenueMode::Day).await.unwrap();
    assert_eq!(series.total(), Price::from_parts(205, 1));
    assert_eq!(mock.last().query, "date=2024-05-01&mode=day");

    let day = api.day_total_revenue(None).await.unwrap();
    assert_eq!(day, Price::from_parts(888, 1));
    assert_eq!(mock.last().query, "");

    let hot = api.hot_products(Some(date), Some(date), 5).await.unwrap();
    assert_eq!(hot[0].sales, 5);
    assert_eq!(
        mock.last().query,
        "startDate=2024-05-01&endDate=2024-05-01&limit=5"
    );
}

#[tokio::test]
async fn upload_image_sends_file_field() {
    let (api, _) = start(Mock::default()).await;
    let path = api
        .upload_image("tea.png", vec![0u8; 16])
        .await
        .unwrap();
    assert_eq!(path, "/api/image/16-tea.png");
}

#[tokio::test]
async fn api_error_is_notified_once() {
    let (api, notifier) = start(Mock::default()).await;

    let err = api.get_product(ProductId::new(404)).await.unwrap_err();
    assert!(matches!(err, FetchError::Api { code: 500, .. }));
    assert_eq!(
        notifier.messages(),
        vec!["no handler for GET /products/404".to_string()]
    );
}
