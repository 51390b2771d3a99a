use crate::domain::model::{LayoutRequest, TankSpec};
use crate::domain::ports::Repository;
use crate::domain::records::AquaLayout;
use crate::utils::error::{AdvisorError, Result};
use crate::utils::validation::validate_email;
use chrono::{DateTime, Utc};

pub struct LayoutService<R: Repository<AquaLayout>> {
    repository: R,
}

fn to_record(id: u64, created_at: DateTime<Utc>, request: &LayoutRequest) -> Result<AquaLayout> {
    validate_email(&request.owner_email)?;
    let tank = TankSpec::try_from(request)?;
    let comments = tank.comments().map(str::to_string);

    Ok(AquaLayout {
        id,
        owner_email: request.owner_email.trim().to_string(),
        created_at,
        tank_name: tank.name,
        tank_length: tank.length,
        tank_width: tank.width,
        tank_height: tank.height,
        unit: tank.unit,
        water_type: tank.water_type,
        fish_data: tank.fish,
        comments,
    })
}

impl<R: Repository<AquaLayout>> LayoutService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// 依建立時間由新到舊，可選擇只列出某位使用者的佈局
    pub async fn list(&self, owner_email: Option<&str>) -> Result<Vec<AquaLayout>> {
        let mut layouts: Vec<AquaLayout> = self
            .repository
            .list()
            .await?
            .into_iter()
            .filter(|l| {
                owner_email.map_or(true, |owner| l.owner_email.eq_ignore_ascii_case(owner))
            })
            .collect();

        layouts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(layouts)
    }

    pub async fn get(&self, id: u64) -> Result<AquaLayout> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| AdvisorError::not_found("Aquarium layout", id))
    }

    pub async fn create(&self, request: &LayoutRequest) -> Result<AquaLayout> {
        let layout = to_record(0, Utc::now(), request)?;
        let layout = self.repository.create(layout).await?;
        tracing::info!(
            "🐠 Saved layout {} '{}' for {}",
            layout.id,
            layout.tank_name,
            layout.owner_email
        );
        Ok(layout)
    }

    pub async fn update(&self, id: u64, request: &LayoutRequest) -> Result<AquaLayout> {
        let existing = self.get(id).await?;
        let layout = to_record(id, existing.created_at, request)?;
        self.repository
            .update(id, layout)
            .await?
            .ok_or_else(|| AdvisorError::not_found("Aquarium layout", id))
    }

    pub async fn delete(&self, id: u64) -> Result<AquaLayout> {
        self.repository
            .delete(id)
            .await?
            .ok_or_else(|| AdvisorError::not_found("Aquarium layout", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryRepository;
    use crate::domain::model::{FishEntry, Unit, WaterType};

    fn request(owner: &str, name: &str) -> LayoutRequest {
        LayoutRequest {
            owner_email: owner.to_string(),
            tank_name: name.to_string(),
            tank_length: 60.0,
            tank_width: 30.0,
            tank_height: 40.0,
            water_type: "Freshwater".to_string(),
            fish_data: vec![FishEntry::new("Neon Tetra", 6)],
            comments: Some("  planted  ".to_string()),
            unit: Unit::Cm,
        }
    }

    #[tokio::test]
    async fn test_create_normalizes_the_record() {
        let service = LayoutService::new(InMemoryRepository::new());
        let layout = service
            .create(&request("reef@example.com", "My First Aquarium"))
            .await
            .unwrap();

        assert_eq!(layout.id, 1);
        assert_eq!(layout.water_type, WaterType::Freshwater);
        assert_eq!(layout.comments.as_deref(), Some("planted"));
        assert_eq!(layout.fish_data.len(), 1);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_layouts() {
        let service = LayoutService::new(InMemoryRepository::new());

        let mut bad = request("reef@example.com", "Tank");
        bad.tank_height = 0.0;
        assert_eq!(service.create(&bad).await.unwrap_err().status_code(), 400);

        let bad = request("reef-at-example", "Tank");
        assert_eq!(service.create(&bad).await.unwrap_err().status_code(), 400);

        let mut bad = request("reef@example.com", "Tank");
        bad.fish_data.clear();
        assert_eq!(service.create(&bad).await.unwrap_err().status_code(), 400);

        assert!(service.list(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_is_newest_first_and_filters_by_owner() {
        let service = LayoutService::new(InMemoryRepository::new());
        service.create(&request("a@example.com", "One")).await.unwrap();
        service.create(&request("b@example.com", "Two")).await.unwrap();
        service.create(&request("a@example.com", "Three")).await.unwrap();

        let all: Vec<String> = service
            .list(None)
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.tank_name)
            .collect();
        assert_eq!(all, vec!["Three", "Two", "One"]);

        let mine = service.list(Some("A@example.com")).await.unwrap();
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|l| l.owner_email == "a@example.com"));
    }

    #[tokio::test]
    async fn test_update_keeps_created_at() {
        let service = LayoutService::new(InMemoryRepository::new());
        let created = service
            .create(&request("reef@example.com", "Before"))
            .await
            .unwrap();

        let updated = service
            .update(created.id, &request("reef@example.com", "After"))
            .await
            .unwrap();
        assert_eq!(updated.tank_name, "After");
        assert_eq!(updated.created_at, created.created_at);

        let err = service
            .update(99, &request("reef@example.com", "Ghost"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let service = LayoutService::new(InMemoryRepository::new());
        let created = service
            .create(&request("reef@example.com", "Short-lived"))
            .await
            .unwrap();

        service.delete(created.id).await.unwrap();
        assert_eq!(service.get(created.id).await.unwrap_err().status_code(), 404);
        assert_eq!(service.delete(created.id).await.unwrap_err().status_code(), 404);
    }
}
