use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::{get, post, put},
    Json, Router,
};
use client::ApiClient;
use serde_json::{json, Value};

pub const STUDENT_ID: &str = "stu-1";
pub const ADMIN_ID: &str = "adm-1";
pub const VALID_OTP: &str = "123456";
pub const OTP_TOKEN: &str = "otp-token-1";

/// Everything the mock backend has seen and holds.
#[derive(Debug, Default)]
pub struct MockState {
    /// `"METHOD /path"` for every request, in arrival order.
    pub hits: Vec<String>,
    pub last_auth: Option<String>,
    pub users: Vec<Value>,
    pub orders: Vec<Value>,
    pub notifications: Vec<Value>,
    next_id: u32,
}

impl MockState {
    fn fresh_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{}", self.next_id)
    }

    pub fn hit_count(&self, needle: &str) -> usize {
        self.hits.iter().filter(|h| h.as_str() == needle).count()
    }
}

pub type Shared = Arc<Mutex<MockState>>;

pub struct MockBackend {
    pub base_url: String,
    pub state: Shared,
}

impl MockBackend {
    pub fn api(&self) -> ApiClient {
        ApiClient::new(&self.base_url)
    }

    pub fn api_with_token(&self, token: &str) -> ApiClient {
        self.api().with_token(Some(token.to_string()))
    }

    pub fn hit_count(&self, needle: &str) -> usize {
        self.state.lock().unwrap().hit_count(needle)
    }

    pub fn hits(&self) -> Vec<String> {
        self.state.lock().unwrap().hits.clone()
    }

    pub fn last_auth(&self) -> Option<String> {
        self.state.lock().unwrap().last_auth.clone()
    }

    pub fn seed_notifications(&self, user_id: &str, specs: &[(&str, bool)]) {
        let mut state = self.state.lock().unwrap();
        for (i, (id, read)) in specs.iter().enumerate() {
            state.notifications.push(json!({
                "_id": id,
                "userId": user_id,
                "title": format!("Notice {id}"),
                "message": "Your order status changed",
                "read": read,
                "createdAt": format!("2024-05-01T09:{:02}:00Z", i),
            }));
        }
    }
}

pub fn student_json() -> Value {
    json!({
        "_id": STUDENT_ID,
        "name": "Maria Santos",
        "email": "student@example.com",
        "role": "Student",
        "isAdmin": false,
        "verified": true
    })
}

pub fn admin_json() -> Value {
    json!({
        "_id": ADMIN_ID,
        "name": "Ana Cruz",
        "email": "admin@example.com",
        "role": "Admin",
        "isAdmin": true,
        "verified": true
    })
}

/// Start a mock backend on an ephemeral port.
pub async fn spawn_backend() -> MockBackend {
    let state: Shared = Arc::default();
    {
        let mut s = state.lock().unwrap();
        s.users = vec![student_json(), admin_json()];
        s.orders = vec![json!({
            "_id": "ord-1",
            "userId": STUDENT_ID,
            "items": [
                {"productType": "Uniform", "size": "M", "quantity": 2, "unitPrice": 350.0},
                {"productType": "PE Shirt", "quantity": 1, "unitPrice": 180.0}
            ],
            "status": "Pending"
        })];
    }

    let app = router(state.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockBackend {
        base_url: format!("http://{addr}"),
        state,
    }
}

type ApiResult = Result<Json<Value>, (StatusCode, Json<Value>)>;

fn fail(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "message": message })))
}

async fn record(State(state): State<Shared>, req: Request, next: Next) -> Response {
    {
        let mut s = state.lock().unwrap();
        s.hits.push(format!("{} {}", req.method(), req.uri().path()));
        s.last_auth = req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
    }
    next.run(req).await
}

fn router(state: Shared) -> Router {
    Router::new()
        .route("/auth/signin", post(sign_in))
        .route("/auth/signup", post(sign_up))
        .route("/auth/signout", post(ok_empty))
        .route("/auth/send-otp", post(forgot_password))
        .route("/auth/forgot-password", post(forgot_password))
        .route("/auth/verify-otp/{token}", post(verify_otp))
        .route("/auth/reset-password/{token}", post(reset_password))
        .route("/users", get(list_users))
        .route("/users/{id}", put(update_user).delete(delete_user))
        .route("/orders", get(list_orders).post(create_order))
        .route("/orders/user/{user_id}", get(orders_for_user))
        .route("/orders/{id}", axum::routing::delete(delete_order))
        .route("/orders/{id}/receipt", get(order_receipt))
        .route("/productions", get(server_error))
        .route("/raw-materials", get(malformed_body))
        .route("/reports/sales", get(sales_report))
        .route(
            "/notifications/{id}",
            get(list_notifications).delete(delete_notification),
        )
        .route(
            "/notifications/{id}/read",
            put(mark_notification_read).delete(delete_read_notifications),
        )
        .route("/notifications/{id}/read-all", put(mark_all_read))
        .layer(middleware::from_fn_with_state(state.clone(), record))
        .with_state(state)
}

async fn ok_empty() -> Json<Value> {
    Json(json!({}))
}

async fn server_error() -> ApiResult {
    Err(fail(StatusCode::INTERNAL_SERVER_ERROR, "db exploded"))
}

async fn malformed_body() -> Json<Value> {
    Json(json!({ "unexpected": true }))
}

// --- auth ---

async fn sign_in(Json(body): Json<Value>) -> ApiResult {
    let email = body["email"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();
    match (email, password) {
        ("student@example.com", "secret") => Ok(Json(json!({
            "token": "student-token",
            "user": student_json(),
        }))),
        ("unverified@example.com", _) => Err(fail(StatusCode::FORBIDDEN, "not verified")),
        _ => Err(fail(StatusCode::UNAUTHORIZED, "Invalid credentials")),
    }
}

async fn sign_up(State(state): State<Shared>, Json(body): Json<Value>) -> ApiResult {
    let mut s = state.lock().unwrap();
    let email = body["email"].as_str().unwrap_or_default().to_string();
    if s.users.iter().any(|u| u["email"] == email.as_str()) {
        return Err(fail(StatusCode::CONFLICT, "Email already registered"));
    }
    let id = s.fresh_id("usr");
    let mut user = body.clone();
    user["_id"] = json!(id);
    s.users.push(user);
    Ok(Json(json!({ "message": "created" })))
}

async fn forgot_password(Json(body): Json<Value>) -> ApiResult {
    match body["email"].as_str() {
        Some("nobody@example.com") => Err(fail(StatusCode::NOT_FOUND, "no such user")),
        Some(_) => Ok(Json(json!({ "token": OTP_TOKEN }))),
        None => Err(fail(StatusCode::BAD_REQUEST, "Email is required")),
    }
}

async fn verify_otp(Path(token): Path<String>, Json(body): Json<Value>) -> ApiResult {
    if token != OTP_TOKEN {
        return Err(fail(StatusCode::BAD_REQUEST, "Reset link is invalid"));
    }
    if body["otp"] != VALID_OTP {
        return Err(fail(StatusCode::BAD_REQUEST, "Invalid code"));
    }
    Ok(Json(json!({ "verified": true })))
}

async fn reset_password(Path(token): Path<String>, Json(body): Json<Value>) -> ApiResult {
    if token != OTP_TOKEN {
        return Err(fail(StatusCode::BAD_REQUEST, "Reset link is invalid"));
    }
    if body["password"] != body["confirmPassword"] {
        return Err(fail(StatusCode::BAD_REQUEST, "Passwords do not match"));
    }
    Ok(Json(json!({})))
}

// --- users ---

async fn list_users(State(state): State<Shared>) -> Json<Value> {
    Json(Value::Array(state.lock().unwrap().users.clone()))
}

async fn update_user(
    State(state): State<Shared>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult {
    let mut s = state.lock().unwrap();
    let user = s
        .users
        .iter_mut()
        .find(|u| u["_id"] == id.as_str())
        .ok_or_else(|| fail(StatusCode::NOT_FOUND, "user not found"))?;
    if let (Some(target), Some(patch)) = (user.as_object_mut(), body.as_object()) {
        for (k, v) in patch {
            target.insert(k.clone(), v.clone());
        }
    }
    Ok(Json(user.clone()))
}

async fn delete_user(State(state): State<Shared>, Path(id): Path<String>) -> StatusCode {
    let mut s = state.lock().unwrap();
    let before = s.users.len();
    s.users.retain(|u| u["_id"] != id.as_str());
    if s.users.len() < before {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

// --- orders ---

async fn list_orders(State(state): State<Shared>) -> Json<Value> {
    Json(Value::Array(state.lock().unwrap().orders.clone()))
}

async fn create_order(State(state): State<Shared>, Json(body): Json<Value>) -> ApiResult {
    if body["items"].as_array().map_or(true, |items| items.is_empty()) {
        return Err(fail(StatusCode::UNPROCESSABLE_ENTITY, "Order has no items"));
    }
    let mut s = state.lock().unwrap();
    let mut order = body.clone();
    order["_id"] = json!(s.fresh_id("ord"));
    order["status"] = json!("Pending");
    s.orders.push(order.clone());
    Ok(Json(order))
}

async fn orders_for_user(State(state): State<Shared>, Path(user_id): Path<String>) -> Json<Value> {
    let s = state.lock().unwrap();
    Json(Value::Array(
        s.orders
            .iter()
            .filter(|o| o["userId"] == user_id.as_str())
            .cloned()
            .collect(),
    ))
}

async fn delete_order(State(state): State<Shared>, Path(id): Path<String>) -> StatusCode {
    let mut s = state.lock().unwrap();
    let before = s.orders.len();
    s.orders.retain(|o| o["_id"] != id.as_str());
    if s.orders.len() < before {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn order_receipt(State(state): State<Shared>, Path(id): Path<String>) -> ApiResult {
    let s = state.lock().unwrap();
    let order = s
        .orders
        .iter()
        .find(|o| o["_id"] == id.as_str())
        .ok_or_else(|| fail(StatusCode::NOT_FOUND, "order not found"))?;
    Ok(Json(json!({
        "orderId": id,
        "receiptNumber": "OR-0001",
        "customerName": "Maria Santos",
        "items": order["items"],
        "issuedAt": "2024-05-02T10:00:00Z"
    })))
}

async fn sales_report() -> Json<Value> {
    Json(json!({
        "rows": [
            {"productType": "Uniform", "quantity": 10, "amount": 3500.0},
            {"productType": "PE Shirt", "quantity": 4, "amount": 720.0}
        ]
    }))
}

// --- notifications ---

async fn list_notifications(State(state): State<Shared>, Path(user_id): Path<String>) -> Json<Value> {
    let s = state.lock().unwrap();
    Json(Value::Array(
        s.notifications
            .iter()
            .filter(|n| n["userId"] == user_id.as_str())
            .cloned()
            .collect(),
    ))
}

async fn mark_notification_read(State(state): State<Shared>, Path(id): Path<String>) -> ApiResult {
    let mut s = state.lock().unwrap();
    let n = s
        .notifications
        .iter_mut()
        .find(|n| n["_id"] == id.as_str())
        .ok_or_else(|| fail(StatusCode::NOT_FOUND, "notification not found"))?;
    n["read"] = json!(true);
    Ok(Json(n.clone()))
}

async fn mark_all_read(State(state): State<Shared>, Path(user_id): Path<String>) -> Json<Value> {
    let mut s = state.lock().unwrap();
    for n in s.notifications.iter_mut().filter(|n| n["userId"] == user_id.as_str()) {
        n["read"] = json!(true);
    }
    Json(json!({}))
}

async fn delete_notification(State(state): State<Shared>, Path(id): Path<String>) -> StatusCode {
    let mut s = state.lock().unwrap();
    let before = s.notifications.len();
    s.notifications.retain(|n| n["_id"] != id.as_str());
    if s.notifications.len() < before {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn delete_read_notifications(
    State(state): State<Shared>,
    Path(user_id): Path<String>,
) -> StatusCode {
    let mut s = state.lock().unwrap();
    s.notifications
        .retain(|n| !(n["userId"] == user_id.as_str() && n["read"] == true));
    StatusCode::NO_CONTENT
}
