pub mod fish_service;
pub mod layout_service;
pub mod maintenance_service;
pub mod user_service;

pub use fish_service::FishCatalogService;
pub use layout_service::LayoutService;
pub use maintenance_service::MaintenanceService;
pub use user_service::UserService;
