use crate::domain::ports::Repository;
use crate::domain::records::Entity;
use crate::utils::error::Result;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<u64, T>,
    next_id: u64,
}

/// 記憶體內的資料表，id 從 1 開始遞增且不重複使用
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T> {
    table: Arc<Mutex<Table<T>>>,
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            table: Arc::new(Mutex::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn create(&self, mut record: T) -> Result<T> {
        let mut table = self.table.lock().await;
        let id = table.next_id;
        table.next_id += 1;
        record.set_id(id);
        table.rows.insert(id, record.clone());
        tracing::debug!("Created {} {}", T::NAME, id);
        Ok(record)
    }

    async fn get_by_id(&self, id: u64) -> Result<Option<T>> {
        let table = self.table.lock().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn update(&self, id: u64, mut record: T) -> Result<Option<T>> {
        let mut table = self.table.lock().await;
        match table.rows.get_mut(&id) {
            Some(row) => {
                record.set_id(id);
                *row = record.clone();
                tracing::debug!("Updated {} {}", T::NAME, id);
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: u64) -> Result<Option<T>> {
        let mut table = self.table.lock().await;
        let removed = table.rows.remove(&id);
        if removed.is_some() {
            tracing::debug!("Deleted {} {}", T::NAME, id);
        }
        Ok(removed)
    }

    async fn list(&self) -> Result<Vec<T>> {
        let table = self.table.lock().await;
        Ok(table.rows.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::records::FishSpecies;

    fn fish(name: &str) -> FishSpecies {
        FishSpecies {
            id: 0,
            name: name.to_string(),
            image_url: None,
            water_type: None,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = InMemoryRepository::new();
        let first = repo.create(fish("Neon Tetra")).await.unwrap();
        let second = repo.create(fish("Guppy")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryRepository::new();
        let first = repo.create(fish("Neon Tetra")).await.unwrap();
        assert!(repo.delete(first.id).await.unwrap().is_some());
        assert!(repo.delete(first.id).await.unwrap().is_none());

        let next = repo.create(fish("Guppy")).await.unwrap();
        assert_eq!(next.id, 2);
    }

    #[tokio::test]
    async fn test_update_keeps_id_and_misses_unknown_rows() {
        let repo = InMemoryRepository::new();
        let created = repo.create(fish("Neon Tetra")).await.unwrap();

        let updated = repo
            .update(created.id, fish("Cardinal Tetra"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(
            repo.get_by_id(created.id).await.unwrap().unwrap().name,
            "Cardinal Tetra"
        );

        assert!(repo.update(99, fish("Ghost")).await.unwrap().is_none());
    }
}
