use crate::domain::model::{FishEntry, Unit, WaterType};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// 可被 Repository 保存的紀錄
pub trait Entity: Clone + Send + Sync + 'static {
    const NAME: &'static str;

    fn id(&self) -> u64;
    fn set_id(&mut self, id: u64);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    User,
    Moderator,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub birthdate: Option<NaiveDate>,
    pub role: UserRole,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub birthdate: Option<NaiveDate>,
    #[serde(default)]
    pub role: UserRole,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FishSpecies {
    pub id: u64,
    pub name: String,
    pub image_url: Option<String>,
    pub water_type: Option<WaterType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFish {
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub water_type: Option<WaterType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AquaLayout {
    pub id: u64,
    pub owner_email: String,
    pub created_at: DateTime<Utc>,
    pub tank_name: String,
    pub tank_length: f64,
    pub tank_width: f64,
    pub tank_height: f64,
    pub unit: Unit,
    pub water_type: WaterType,
    pub fish_data: Vec<FishEntry>,
    pub comments: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceEntry {
    pub id: u64,
    pub layout_id: u64,
    pub owner_email: String,
    pub created_at: DateTime<Utc>,
    pub maintenance_date: DateTime<Utc>,
    pub maintenance_type: String,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMaintenance {
    pub layout_id: u64,
    pub owner_email: String,
    pub maintenance_date: DateTime<Utc>,
    pub maintenance_type: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

macro_rules! impl_entity {
    ($ty:ty, $name:literal) => {
        impl Entity for $ty {
            const NAME: &'static str = $name;

            fn id(&self) -> u64 {
                self.id
            }

            fn set_id(&mut self, id: u64) {
                self.id = id;
            }
        }
    };
}

impl_entity!(User, "User");
impl_entity!(FishSpecies, "Fish");
impl_entity!(AquaLayout, "Aquarium layout");
impl_entity!(MaintenanceEntry, "Maintenance entry");
