use crate::domain::model::WaterType;
use crate::domain::ports::Repository;
use crate::domain::records::{FishSpecies, NewFish};
use crate::utils::error::{AdvisorError, Result};
use serde::Deserialize;
use tokio::sync::Mutex;

/// One row of a catalog seed file: `name,image_url,water_type`.
#[derive(Debug, Deserialize)]
struct CatalogRow {
    name: String,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    water_type: Option<String>,
}

pub struct FishCatalogService<R: Repository<FishSpecies>> {
    repository: R,
    // 名稱唯一性檢查與寫入必須一起完成
    write_lock: Mutex<()>,
}

impl<R: Repository<FishSpecies>> FishCatalogService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            write_lock: Mutex::new(()),
        }
    }

    pub async fn list(&self) -> Result<Vec<FishSpecies>> {
        self.repository.list().await
    }

    pub async fn get(&self, id: u64) -> Result<FishSpecies> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| AdvisorError::not_found("Fish", id))
    }

    /// 不分大小寫比對名稱
    pub async fn get_by_name(&self, name: &str) -> Result<Option<FishSpecies>> {
        let name = name.trim();
        Ok(self
            .repository
            .list()
            .await?
            .into_iter()
            .find(|f| f.name.eq_ignore_ascii_case(name)))
    }

    pub async fn create(&self, new_fish: NewFish) -> Result<FishSpecies> {
        let name = new_fish.name.trim().to_string();
        if name.is_empty() {
            return Err(AdvisorError::validation("Fish name cannot be empty"));
        }

        let _guard = self.write_lock.lock().await;
        if self.get_by_name(&name).await?.is_some() {
            return Err(AdvisorError::Conflict {
                message: format!("Fish '{}' already exists in the catalog", name),
            });
        }

        self.repository
            .create(FishSpecies {
                id: 0,
                name,
                image_url: new_fish.image_url,
                water_type: new_fish.water_type,
            })
            .await
    }

    pub async fn update(&self, id: u64, new_fish: NewFish) -> Result<FishSpecies> {
        let name = new_fish.name.trim().to_string();
        if name.is_empty() {
            return Err(AdvisorError::validation("Fish name cannot be empty"));
        }

        let _guard = self.write_lock.lock().await;
        if let Some(existing) = self.get_by_name(&name).await? {
            if existing.id != id {
                return Err(AdvisorError::Conflict {
                    message: format!("Fish '{}' already exists in the catalog", name),
                });
            }
        }

        self.repository
            .update(
                id,
                FishSpecies {
                    id,
                    name,
                    image_url: new_fish.image_url,
                    water_type: new_fish.water_type,
                },
            )
            .await?
            .ok_or_else(|| AdvisorError::not_found("Fish", id))
    }

    pub async fn delete(&self, id: u64) -> Result<FishSpecies> {
        self.repository
            .delete(id)
            .await?
            .ok_or_else(|| AdvisorError::not_found("Fish", id))
    }

    /// Seeds the catalog from CSV; names already present are skipped.
    /// Returns the number of species inserted.
    pub async fn import_csv<Rd: std::io::Read>(&self, reader: Rd) -> Result<usize> {
        let rows: Vec<CatalogRow> = {
            let mut csv_reader = csv::ReaderBuilder::new()
                .trim(csv::Trim::All)
                .from_reader(reader);
            csv_reader
                .deserialize()
                .collect::<std::result::Result<_, csv::Error>>()?
        };

        let mut inserted = 0;
        for row in rows {
            if row.name.is_empty() {
                continue;
            }

            let water_type = match row.water_type.as_deref().filter(|w| !w.is_empty()) {
                Some(raw) => Some(WaterType::parse(raw)?),
                None => None,
            };

            let name = row.name.clone();
            match self
                .create(NewFish {
                    name: row.name,
                    image_url: row.image_url.filter(|u| !u.is_empty()),
                    water_type,
                })
                .await
            {
                Ok(_) => inserted += 1,
                Err(AdvisorError::Conflict { .. }) => {
                    tracing::debug!("Skipping existing fish: {}", name);
                }
                Err(e) => return Err(e),
            }
        }

        tracing::info!("🐟 Imported {} fish into the catalog", inserted);
        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryRepository;

    fn new_fish(name: &str) -> NewFish {
        NewFish {
            name: name.to_string(),
            image_url: None,
            water_type: Some(WaterType::Freshwater),
        }
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_names() {
        let service = FishCatalogService::new(InMemoryRepository::new());
        service.create(new_fish("Neon Tetra")).await.unwrap();

        let err = service.create(new_fish(" neon tetra ")).await.unwrap_err();
        assert!(matches!(err, AdvisorError::Conflict { .. }));

        let err = service.create(new_fish("")).await.unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[tokio::test]
    async fn test_update_allows_same_name_but_not_anothers() {
        let service = FishCatalogService::new(InMemoryRepository::new());
        let tetra = service.create(new_fish("Neon Tetra")).await.unwrap();
        service.create(new_fish("Guppy")).await.unwrap();

        let mut renamed = new_fish("Neon Tetra");
        renamed.image_url = Some("https://img.example.com/neon.png".to_string());
        let updated = service.update(tetra.id, renamed).await.unwrap();
        assert!(updated.image_url.is_some());

        let err = service.update(tetra.id, new_fish("Guppy")).await.unwrap_err();
        assert_eq!(err.status_code(), 409);

        let err = service.update(42, new_fish("Molly")).await.unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_import_csv_skips_blank_and_existing() {
        let service = FishCatalogService::new(InMemoryRepository::new());
        service.create(new_fish("Guppy")).await.unwrap();

        let data = "\
name,image_url,water_type
Neon Tetra,https://img.example.com/neon.png,freshwater
Guppy,,freshwater
 ,,
Clownfish,,Saltwater
Betta Fish,,
";
        let inserted = service.import_csv(data.as_bytes()).await.unwrap();
        assert_eq!(inserted, 3);

        let clown = service.get_by_name("clownfish").await.unwrap().unwrap();
        assert_eq!(clown.water_type, Some(WaterType::Saltwater));
        let betta = service.get_by_name("Betta Fish").await.unwrap().unwrap();
        assert_eq!(betta.water_type, None);
        assert_eq!(service.list().await.unwrap().len(), 4);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_keep_names_unique() {
        let service = std::sync::Arc::new(FishCatalogService::new(InMemoryRepository::new()));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let service = service.clone();
                tokio::spawn(async move { service.create(new_fish("Neon Tetra")).await })
            })
            .collect();

        let mut created = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                created += 1;
            }
        }

        assert_eq!(created, 1);
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_import_csv_rejects_unknown_water_type() {
        let service = FishCatalogService::new(InMemoryRepository::new());
        let data = "name,image_url,water_type\nAxolotl,,brackish\n";

        let err = service.import_csv(data.as_bytes()).await.unwrap_err();
        assert_eq!(err.status_code(), 400);
    }
}
