//! In-process stand-in for the dish-search service.

use std::collections::HashMap;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use reqwest::Url;
use serde_json::{Value, json};
use tokio::net::TcpListener;

pub async fn spawn_service(router: Router) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Url::parse(&format!("http://{addr}")).unwrap()
}

/// A loopback address nothing listens on.
pub async fn unreachable_url() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{addr}")).unwrap()
}

pub fn dish_service() -> Router {
    Router::new()
        .route("/health", get(|| async { Json(json!({ "status": "OK" })) }))
        .route("/search/dishes", get(search))
}

async fn search(Query(params): Query<HashMap<String, String>>) -> Response {
    let (Some(name), Some(min), Some(max)) = (
        params.get("name"),
        params.get("minPrice"),
        params.get("maxPrice"),
    ) else {
        return bad_request("name, minPrice and maxPrice are required");
    };
    let (Ok(min), Ok(max)) = (min.parse::<f64>(), max.parse::<f64>()) else {
        return bad_request("minPrice and maxPrice must be numbers");
    };

    let needle = name.to_lowercase();
    let restaurants: Vec<Value> = menu()
        .into_iter()
        .filter(|(_, _, dish, price, _)| {
            dish.to_lowercase().contains(&needle) && (min..=max).contains(price)
        })
        .map(|(restaurant, city, dish, price, orders)| {
            json!({
                "restaurantName": restaurant,
                "city": city,
                "dishName": dish,
                "dishPrice": format!("{price:.2}"),
                "orderCount": orders,
            })
        })
        .collect();

    Json(json!({ "restaurants": restaurants })).into_response()
}

fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}

fn menu() -> Vec<(&'static str, &'static str, &'static str, f64, u64)> {
    vec![
        ("Paradise Biryani", "Hyderabad", "Chicken Biryani", 280.0, 96),
        ("Bawarchi", "Hyderabad", "Mutton Biryani", 299.0, 81),
        ("Shah Ghouse", "Hyderabad", "Veg Biryani", 180.0, 64),
        ("Meghana Foods", "Bangalore", "Andhra Biryani", 250.0, 58),
        ("Empire", "Bangalore", "Egg Biryani", 160.0, 47),
        ("Behrouz", "Mumbai", "Dum Biryani", 299.0, 33),
        ("Biryani Blues", "Delhi", "Lucknowi Biryani", 270.0, 21),
        ("Karim's", "Delhi", "Butter Chicken", 240.0, 77),
        ("Moti Mahal", "Delhi", "Chicken Tikka", 210.0, 45),
        ("Saravana Bhavan", "Chennai", "Masala Dosa", 120.0, 88),
    ]
}
