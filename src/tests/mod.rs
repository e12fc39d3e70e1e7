
use crate::AppState;
use crate::database::BakeryRepository;
use crate::domain::{BakedGood, Bakery, NewBakedGood};
use anyhow::Result;
use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use chrono::NaiveDateTime;
use http::{Method, header::CONTENT_TYPE};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

pub fn fixed_datetime() -> NaiveDateTime {
    NaiveDateTime::parse_from_str("2023-01-01 12:00:00", "%Y-%m-%d %H:%M:%S").unwrap()
}

// --- Manual Mock: BakeryRepository ---
// keeps both "tables" in memory so router tests don't need SQLite
#[derive(Default)]
pub struct MockStore {
    pub bakeries: Vec<Bakery>,
    pub baked_goods: Vec<BakedGood>,
    pub next_id: i64,
}

#[derive(Clone, Default)]
pub struct MockRepository {
    pub store: Arc<Mutex<MockStore>>,
}

impl MockRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_bakery(&self, name: &str) -> i64 {
        let mut store = self.store.lock().unwrap();
        store.next_id += 1;
        let id = store.next_id;
        store.bakeries.push(Bakery {
            id,
            name: name.to_string(),
            created_at: fixed_datetime(),
            updated_at: None,
            baked_goods: Vec::new(),
        });
        id
    }

    pub fn add_baked_good(&self, name: &str, price: f64, bakery_id: Option<i64>) -> i64 {
        let mut store = self.store.lock().unwrap();
        store.next_id += 1;
        let id = store.next_id;
        store.baked_goods.push(BakedGood {
            id,
            name: name.to_string(),
            price,
            bakery_id,
            created_at: fixed_datetime(),
            updated_at: None,
        });
        id
    }

    fn with_goods(store: &MockStore, bakery: &Bakery) -> Bakery {
        let mut bakery = bakery.clone();
        bakery.baked_goods = store
            .baked_goods
            .iter()
            .filter(|bg| bg.bakery_id == Some(bakery.id))
            .cloned()
            .collect();
        bakery
    }

    fn sorted_by_price(store: &MockStore) -> Vec<BakedGood> {
        let mut goods = store.baked_goods.clone();
        goods.sort_by(|a, b| b.price.total_cmp(&a.price).then(a.id.cmp(&b.id)));
        goods
    }
}

#[async_trait]
impl BakeryRepository for MockRepository {
    async fn get_all_bakeries(&self) -> Result<Vec<Bakery>> {
        let store = self.store.lock().unwrap();
        Ok(store
            .bakeries
            .iter()
            .map(|b| Self::with_goods(&store, b))
            .collect())
    }

    async fn get_bakery(&self, id: i64) -> Result<Option<Bakery>> {
        let store = self.store.lock().unwrap();
        Ok(store
            .bakeries
            .iter()
            .find(|b| b.id == id)
            .map(|b| Self::with_goods(&store, b)))
    }

    async fn rename_bakery(&self, id: i64, name: Option<&str>) -> Result<Option<Bakery>> {
        let mut store = self.store.lock().unwrap();
        let Some(bakery) = store.bakeries.iter_mut().find(|b| b.id == id) else {
            return Ok(None);
        };
        if let Some(name) = name {
            bakery.name = name.to_string();
            bakery.updated_at = Some(fixed_datetime());
        }
        let bakery = bakery.clone();
        Ok(Some(Self::with_goods(&store, &bakery)))
    }

    async fn get_baked_goods_by_price(&self) -> Result<Vec<BakedGood>> {
        let store = self.store.lock().unwrap();
        Ok(Self::sorted_by_price(&store))
    }

    async fn get_most_expensive_baked_good(&self) -> Result<Option<BakedGood>> {
        let store = self.store.lock().unwrap();
        Ok(Self::sorted_by_price(&store).into_iter().next())
    }

    async fn save_baked_good(&self, baked_good: &NewBakedGood) -> Result<BakedGood> {
        let id = self.add_baked_good(&baked_good.name, baked_good.price, baked_good.bakery_id);
        let store = self.store.lock().unwrap();
        Ok(store
            .baked_goods
            .iter()
            .find(|bg| bg.id == id)
            .cloned()
            .unwrap())
    }

    async fn delete_baked_good(&self, id: i64) -> Result<bool> {
        let mut store = self.store.lock().unwrap();
        let before = store.baked_goods.len();
        store.baked_goods.retain(|bg| bg.id != id);
        Ok(store.baked_goods.len() != before)
    }
}

// --- Manual Mock: a repository whose storage is always down ---
pub struct FailingRepository;

#[async_trait]
impl BakeryRepository for FailingRepository {
    async fn get_all_bakeries(&self) -> Result<Vec<Bakery>> {
        anyhow::bail!("disk I/O error")
    }

    async fn get_bakery(&self, _id: i64) -> Result<Option<Bakery>> {
        anyhow::bail!("disk I/O error")
    }

    async fn rename_bakery(&self, _id: i64, _name: Option<&str>) -> Result<Option<Bakery>> {
        anyhow::bail!("disk I/O error")
    }

    async fn get_baked_goods_by_price(&self) -> Result<Vec<BakedGood>> {
        anyhow::bail!("disk I/O error")
    }

    async fn get_most_expensive_baked_good(&self) -> Result<Option<BakedGood>> {
        anyhow::bail!("disk I/O error")
    }

    async fn save_baked_good(&self, _baked_good: &NewBakedGood) -> Result<BakedGood> {
        anyhow::bail!("disk I/O error")
    }

    async fn delete_baked_good(&self, _id: i64) -> Result<bool> {
        anyhow::bail!("disk I/O error")
    }
}

pub fn app_with_repo(repo: Arc<dyn BakeryRepository>) -> Router {
    crate::features::app_router().with_state(AppState { repo })
}

pub async fn send(app: &Router, method: Method, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn send_form(app: &Router, method: Method, uri: &str, form: &str) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

// builds a multipart/form-data body the way `curl -F` does
pub async fn send_multipart(
    app: &Router,
    method: Method,
    uri: &str,
    fields: &[(&str, &str)],
) -> Response<Body> {
    let boundary = "bakery-form-boundary";
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
            boundary, name, value
        ));
    }
    body.push_str(&format!("--{}--\r\n", boundary));

    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(
                    CONTENT_TYPE,
                    format!("multipart/form-data; boundary={}", boundary),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
