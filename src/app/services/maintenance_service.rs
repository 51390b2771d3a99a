use crate::domain::ports::Repository;
use crate::domain::records::{AquaLayout, MaintenanceEntry, NewMaintenance};
use crate::utils::error::{AdvisorError, Result};
use chrono::Utc;

/// Maintenance log entries tied to a stored layout and its owner.
pub struct MaintenanceService<M, L>
where
    M: Repository<MaintenanceEntry>,
    L: Repository<AquaLayout>,
{
    entries: M,
    layouts: L,
}

impl<M, L> MaintenanceService<M, L>
where
    M: Repository<MaintenanceEntry>,
    L: Repository<AquaLayout>,
{
    pub fn new(entries: M, layouts: L) -> Self {
        Self { entries, layouts }
    }

    async fn require_layout(&self, layout_id: u64) -> Result<AquaLayout> {
        self.layouts
            .get_by_id(layout_id)
            .await?
            .ok_or_else(|| AdvisorError::not_found("Aquarium layout", layout_id))
    }

    pub async fn get(&self, id: u64) -> Result<MaintenanceEntry> {
        self.entries
            .get_by_id(id)
            .await?
            .ok_or_else(|| AdvisorError::not_found("Maintenance entry", id))
    }

    pub async fn list_by_layout(&self, layout_id: u64) -> Result<Vec<MaintenanceEntry>> {
        self.require_layout(layout_id).await?;
        Ok(self
            .entries
            .list()
            .await?
            .into_iter()
            .filter(|e| e.layout_id == layout_id)
            .collect())
    }

    pub async fn list_by_owner(&self, owner_email: &str) -> Result<Vec<MaintenanceEntry>> {
        Ok(self
            .entries
            .list()
            .await?
            .into_iter()
            .filter(|e| e.owner_email.eq_ignore_ascii_case(owner_email))
            .collect())
    }

    pub async fn create(&self, new_entry: NewMaintenance) -> Result<MaintenanceEntry> {
        if new_entry.maintenance_type.trim().is_empty() {
            return Err(AdvisorError::validation("Maintenance type cannot be empty"));
        }

        let layout = self.require_layout(new_entry.layout_id).await?;
        if !layout.owner_email.eq_ignore_ascii_case(&new_entry.owner_email) {
            return Err(AdvisorError::Forbidden {
                message: "You can only create maintenance entries for your own aquariums"
                    .to_string(),
            });
        }

        let entry = self
            .entries
            .create(MaintenanceEntry {
                id: 0,
                layout_id: new_entry.layout_id,
                owner_email: new_entry.owner_email,
                created_at: Utc::now(),
                maintenance_date: new_entry.maintenance_date,
                maintenance_type: new_entry.maintenance_type.trim().to_string(),
                description: new_entry.description,
                notes: new_entry.notes,
                completed: new_entry.completed,
            })
            .await?;

        tracing::info!(
            "🧽 Logged '{}' for layout {}",
            entry.maintenance_type,
            entry.layout_id
        );
        Ok(entry)
    }

    pub async fn update(&self, id: u64, changes: NewMaintenance) -> Result<MaintenanceEntry> {
        if changes.maintenance_type.trim().is_empty() {
            return Err(AdvisorError::validation("Maintenance type cannot be empty"));
        }

        let existing = self.get(id).await?;

        if !existing.owner_email.eq_ignore_ascii_case(&changes.owner_email) {
            return Err(AdvisorError::Forbidden {
                message: "You can only update your own maintenance entries".to_string(),
            });
        }

        if existing.layout_id != changes.layout_id {
            self.require_layout(changes.layout_id).await?;
        }

        self.entries
            .update(
                id,
                MaintenanceEntry {
                    id,
                    layout_id: changes.layout_id,
                    owner_email: existing.owner_email,
                    created_at: existing.created_at,
                    maintenance_date: changes.maintenance_date,
                    maintenance_type: changes.maintenance_type.trim().to_string(),
                    description: changes.description,
                    notes: changes.notes,
                    completed: changes.completed,
                },
            )
            .await?
            .ok_or_else(|| AdvisorError::not_found("Maintenance entry", id))
    }

    pub async fn delete(&self, id: u64, owner_email: &str) -> Result<MaintenanceEntry> {
        let existing = self.get(id).await?;
        if !existing.owner_email.eq_ignore_ascii_case(owner_email) {
            return Err(AdvisorError::Forbidden {
                message: "You can only delete your own maintenance entries".to_string(),
            });
        }

        self.entries
            .delete(id)
            .await?
            .ok_or_else(|| AdvisorError::not_found("Maintenance entry", id))
    }
}
