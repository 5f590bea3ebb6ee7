//! Farmer-records collaborator interface and its in-memory backing

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::error::{AppError, AppResult};
use crate::models::Farmer;

/// Farmer-records collaborator consumed by the gateway.
///
/// Every farmer route forwards to exactly one of these methods and returns
/// whatever comes back, untouched.
#[async_trait]
pub trait FarmerService: Send + Sync {
    async fn add_farmer(&self, farmer: Farmer) -> AppResult<Farmer>;
    async fn update_farmer(&self, farmer: Farmer) -> AppResult<()>;
    async fn delete_farmer(&self, farmer_id: i32) -> AppResult<()>;
    async fn get_by_gender(&self, gender: &str) -> AppResult<Vec<Farmer>>;
    async fn get_by_age(&self, age: i32) -> AppResult<Vec<Farmer>>;
    async fn get_by_id(&self, farmer_id: i32) -> AppResult<Farmer>;
    async fn get_all(&self) -> AppResult<Vec<Farmer>>;
    async fn get_by_city(&self, city: &str) -> AppResult<Vec<Farmer>>;
    async fn get_by_soil_city(&self, soil: &str, city: &str) -> AppResult<Vec<Farmer>>;
    async fn get_by_soil(&self, soil: &str) -> AppResult<Vec<Farmer>>;
}

/// Development backing for [`FarmerService`]: a plain in-memory table.
///
/// Lookups are literal field-equality matches against the opaque detail map
/// (keys `gender`, `age`, `city`, `soil`). This keeps the server runnable
/// and testable without a persistence layer; it is not one.
#[derive(Default)]
pub struct InMemoryFarmerService {
    inner: RwLock<FarmerTable>,
}

struct FarmerTable {
    rows: BTreeMap<i32, Farmer>,
    next_id: i32,
}

impl Default for FarmerTable {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl FarmerTable {
    /// Upserts a record, assigning the next free id when none is present.
    fn save(&mut self, farmer: Farmer) -> Farmer {
        let id = match farmer.farmer_id {
            Some(id) => id,
            None => self.next_id,
        };
        let farmer = farmer.with_id(id);
        self.next_id = self.next_id.max(id.saturating_add(1));
        self.rows.insert(id, farmer.clone());
        farmer
    }

    fn matching<F>(&self, predicate: F) -> Vec<Farmer>
    where
        F: Fn(&Farmer) -> bool,
    {
        self.rows.values().filter(|f| predicate(f)).cloned().collect()
    }
}

impl InMemoryFarmerService {
    pub fn new() -> Self {
        Self::default()
    }
}

fn detail_str(farmer: &Farmer, key: &str) -> Option<String> {
    farmer
        .details
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_owned)
}

#[async_trait]
impl FarmerService for InMemoryFarmerService {
    async fn add_farmer(&self, farmer: Farmer) -> AppResult<Farmer> {
        let mut table = self.inner.write().await;
        Ok(table.save(farmer))
    }

    async fn update_farmer(&self, farmer: Farmer) -> AppResult<()> {
        let mut table = self.inner.write().await;
        table.save(farmer);
        Ok(())
    }

    async fn delete_farmer(&self, farmer_id: i32) -> AppResult<()> {
        let mut table = self.inner.write().await;
        table.rows.remove(&farmer_id);
        Ok(())
    }

    async fn get_by_gender(&self, gender: &str) -> AppResult<Vec<Farmer>> {
        let table = self.inner.read().await;
        Ok(table.matching(|f| detail_str(f, "gender").as_deref() == Some(gender)))
    }

    async fn get_by_age(&self, age: i32) -> AppResult<Vec<Farmer>> {
        let table = self.inner.read().await;
        Ok(table.matching(|f| {
            f.details.get("age").and_then(Value::as_i64) == Some(i64::from(age))
        }))
    }

    async fn get_by_id(&self, farmer_id: i32) -> AppResult<Farmer> {
        let table = self.inner.read().await;
        table
            .rows
            .get(&farmer_id)
            .cloned()
            .ok_or(AppError::FarmerNotFound(farmer_id))
    }

    async fn get_all(&self) -> AppResult<Vec<Farmer>> {
        let table = self.inner.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn get_by_city(&self, city: &str) -> AppResult<Vec<Farmer>> {
        let table = self.inner.read().await;
        Ok(table.matching(|f| detail_str(f, "city").as_deref() == Some(city)))
    }

    async fn get_by_soil_city(&self, soil: &str, city: &str) -> AppResult<Vec<Farmer>> {
        let table = self.inner.read().await;
        Ok(table.matching(|f| {
            detail_str(f, "soil").as_deref() == Some(soil)
                && detail_str(f, "city").as_deref() == Some(city)
        }))
    }

    async fn get_by_soil(&self, soil: &str) -> AppResult<Vec<Farmer>> {
        let table = self.inner.read().await;
        Ok(table.matching(|f| detail_str(f, "soil").as_deref() == Some(soil)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn farmer(value: serde_json::Value) -> Farmer {
        serde_json::from_value(value).unwrap()
    }

    async fn seeded() -> InMemoryFarmerService {
        let service = InMemoryFarmerService::new();
        for record in [
            json!({ "name": "Anita", "gender": "female", "age": 40, "city": "Madurai", "soil": "clay" }),
            json!({ "name": "Bala", "gender": "male", "age": 30, "city": "Madurai", "soil": "loam" }),
            json!({ "name": "Chitra", "gender": "female", "age": 30, "city": "Salem", "soil": "clay" }),
        ] {
            service.add_farmer(farmer(record)).await.unwrap();
        }
        service
    }

    #[tokio::test]
    async fn add_assigns_sequential_ids() {
        let service = InMemoryFarmerService::new();

        let first = service.add_farmer(farmer(json!({ "name": "A" }))).await.unwrap();
        let second = service.add_farmer(farmer(json!({ "name": "B" }))).await.unwrap();

        assert_eq!(first.farmer_id, Some(1));
        assert_eq!(second.farmer_id, Some(2));
    }

    #[tokio::test]
    async fn add_keeps_explicit_id_and_advances_counter() {
        let service = InMemoryFarmerService::new();

        let explicit = service
            .add_farmer(farmer(json!({ "farmerId": 10, "name": "A" })))
            .await
            .unwrap();
        let next = service.add_farmer(farmer(json!({ "name": "B" }))).await.unwrap();

        assert_eq!(explicit.farmer_id, Some(10));
        assert_eq!(next.farmer_id, Some(11));
    }

    #[tokio::test]
    async fn filters_match_literal_detail_fields() {
        let service = seeded().await;

        let females = service.get_by_gender("female").await.unwrap();
        assert_eq!(females.len(), 2);

        let thirty = service.get_by_age(30).await.unwrap();
        assert_eq!(thirty.len(), 2);

        let madurai = service.get_by_city("Madurai").await.unwrap();
        assert_eq!(madurai.len(), 2);

        let clay_in_salem = service.get_by_soil_city("clay", "Salem").await.unwrap();
        assert_eq!(clay_in_salem.len(), 1);
        assert_eq!(detail_str(&clay_in_salem[0], "name").as_deref(), Some("Chitra"));

        let loam = service.get_by_soil("loam").await.unwrap();
        assert_eq!(loam.len(), 1);
    }

    #[tokio::test]
    async fn get_by_id_miss_raises_farmer_not_found() {
        let service = seeded().await;

        let err = service.get_by_id(99).await.unwrap_err();
        assert!(matches!(err, AppError::FarmerNotFound(99)));
    }

    #[tokio::test]
    async fn update_replaces_the_stored_record() {
        let service = seeded().await;

        service
            .update_farmer(farmer(json!({ "farmerId": 1, "name": "Anita", "city": "Erode" })))
            .await
            .unwrap();

        let updated = service.get_by_id(1).await.unwrap();
        assert_eq!(detail_str(&updated, "city").as_deref(), Some("Erode"));
    }

    #[tokio::test]
    async fn delete_removes_the_record() {
        let service = seeded().await;

        service.delete_farmer(2).await.unwrap();

        let all = service.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.iter().all(|f| f.farmer_id != Some(2)));
    }
}
