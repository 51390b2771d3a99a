use anyhow::Result;
use aqua_advisor::app::services::{
    FishCatalogService, LayoutService, MaintenanceService, UserService,
};
use aqua_advisor::domain::records::{AquaLayout, NewMaintenance, NewUser, UserRole};
use aqua_advisor::{FishEntry, InMemoryRepository, LayoutRequest, Unit};
use chrono::Utc;

#[tokio::test]
async fn test_owner_builds_a_tank_and_logs_maintenance() -> Result<()> {
    let users = UserService::new(InMemoryRepository::new());
    let catalog = FishCatalogService::new(InMemoryRepository::new());
    let layout_repo: InMemoryRepository<AquaLayout> = InMemoryRepository::new();
    let layouts = LayoutService::new(layout_repo.clone());
    let maintenance = MaintenanceService::new(InMemoryRepository::new(), layout_repo);

    let owner = users
        .register(NewUser {
            first_name: "Marina".to_string(),
            last_name: "Shore".to_string(),
            email: "marina@example.com".to_string(),
            birthdate: None,
            role: UserRole::User,
        })
        .await?;

    let seed = "name,image_url,water_type\nNeon Tetra,,freshwater\nCorydoras,,freshwater\n";
    assert_eq!(catalog.import_csv(seed.as_bytes()).await?, 2);
    let tetra = catalog
        .get_by_name("neon tetra")
        .await?
        .ok_or_else(|| anyhow::anyhow!("catalog is missing Neon Tetra"))?;

    let layout = layouts
        .create(&LayoutRequest {
            owner_email: owner.email.clone(),
            tank_name: "Living Room".to_string(),
            tank_length: 90.0,
            tank_width: 45.0,
            tank_height: 45.0,
            water_type: "freshwater".to_string(),
            fish_data: vec![FishEntry::new(tetra.name, 12)],
            comments: None,
            unit: Unit::Cm,
        })
        .await?;

    let logged = maintenance
        .create(NewMaintenance {
            layout_id: layout.id,
            owner_email: owner.email.clone(),
            maintenance_date: Utc::now(),
            maintenance_type: "water change".to_string(),
            description: None,
            notes: Some("nitrates at 10ppm".to_string()),
            completed: true,
        })
        .await?;

    assert_eq!(maintenance.list_by_layout(layout.id).await?.len(), 1);
    assert_eq!(layouts.list(Some("marina@example.com")).await?.len(), 1);

    // 佈局刪除後，無法再為它新增紀錄
    layouts.delete(layout.id).await?;
    let err = maintenance
        .create(NewMaintenance {
            layout_id: layout.id,
            owner_email: owner.email,
            maintenance_date: Utc::now(),
            maintenance_type: "filter clean".to_string(),
            description: None,
            notes: None,
            completed: false,
        })
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);
    assert_eq!(maintenance.get(logged.id).await?.layout_id, layout.id);
    Ok(())
}
