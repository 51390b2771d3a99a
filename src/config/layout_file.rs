use crate::domain::model::LayoutRequest;
use crate::utils::error::{AdvisorError, Result};
use crate::utils::validation;
use std::path::Path;

/// 讀取 JSON 或 TOML 格式的佈局請求
pub fn load_layout_request<P: AsRef<Path>>(path: P) -> Result<LayoutRequest> {
    let path = path.as_ref();
    let display = path.display().to_string();
    validation::validate_file_extensions("layout", &[display.clone()], &["json", "toml"])?;

    let content = std::fs::read_to_string(path)?;
    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    if is_toml {
        toml::from_str(&content).map_err(|e| {
            AdvisorError::validation(format!("Malformed layout file '{}': {}", display, e))
        })
    } else {
        serde_json::from_str(&content).map_err(|e| {
            AdvisorError::validation(format!("Malformed layout file '{}': {}", display, e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Unit;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_load_json_layout() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        let body = serde_json::json!({
            "owner_email": "user@example.com",
            "tank_name": "My First Aquarium",
            "tank_length": 60,
            "tank_width": 30,
            "tank_height": 40,
            "water_type": "freshwater",
            "fish_data": [{"name": "Neon Tetra", "quantity": 6}]
        });
        file.write_all(body.to_string().as_bytes()).unwrap();

        let request = load_layout_request(file.path()).unwrap();
        assert_eq!(request.tank_name, "My First Aquarium");
        assert_eq!(request.unit, Unit::Cm);
    }

    #[test]
    fn test_load_toml_layout() {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        let body = r#"
owner_email = "user@example.com"
tank_name = "Reef"
tank_length = 36.0
tank_width = 18.0
tank_height = 20.0
water_type = "saltwater"
unit = "inch"

[[fish_data]]
name = "Clownfish"
quantity = 2
"#;
        file.write_all(body.as_bytes()).unwrap();

        let request = load_layout_request(file.path()).unwrap();
        assert_eq!(request.unit, Unit::Inch);
        assert_eq!(request.fish_data[0].name, "Clownfish");
    }

    #[test]
    fn test_rejects_unknown_extension_and_bad_content() {
        let file = Builder::new().suffix(".yaml").tempfile().unwrap();
        assert!(load_layout_request(file.path()).is_err());

        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(b"{ not json").unwrap();
        let err = load_layout_request(file.path()).unwrap_err();
        assert!(matches!(err, AdvisorError::ValidationError { .. }));
    }
}
