use crate::utils::error::{AdvisorError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Unit {
    #[default]
    #[serde(rename = "cm")]
    Cm,
    #[serde(rename = "inch", alias = "inches", alias = "in")]
    Inch,
}

impl Unit {
    /// 提示詞裡尺寸後面的單位文字
    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Cm => "cm",
            Unit::Inch => "inches",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterType {
    Freshwater,
    Saltwater,
}

impl WaterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaterType::Freshwater => "freshwater",
            WaterType::Saltwater => "saltwater",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WaterType::Freshwater => "Freshwater",
            WaterType::Saltwater => "Saltwater",
        }
    }

    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "freshwater" => Ok(WaterType::Freshwater),
            "saltwater" => Ok(WaterType::Saltwater),
            _ => Err(AdvisorError::validation(
                "Water type must be either 'freshwater' or 'saltwater'",
            )),
        }
    }
}

impl fmt::Display for WaterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FishEntry {
    pub name: String,
    pub quantity: u32,
}

impl FishEntry {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// Inbound evaluation payload, also the create/update shape for stored layouts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutRequest {
    pub owner_email: String,
    pub tank_name: String,
    pub tank_length: f64,
    pub tank_width: f64,
    pub tank_height: f64,
    pub water_type: String,
    pub fish_data: Vec<FishEntry>,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub unit: Unit,
}

/// A validated tank description ready for evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct TankSpec {
    pub name: String,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub unit: Unit,
    pub water_type: WaterType,
    pub fish: Vec<FishEntry>,
    pub comments: Option<String>,
}

impl TankSpec {
    pub fn total_fish(&self) -> u64 {
        self.fish.iter().map(|f| u64::from(f.quantity)).sum()
    }

    /// "6 Neon Tetra, 1 Betta Fish"
    pub fn fish_summary(&self) -> String {
        self.fish
            .iter()
            .map(|f| format!("{} {}", f.quantity, f.name))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn comments(&self) -> Option<&str> {
        self.comments
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

fn is_valid_dimension(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

impl TryFrom<&LayoutRequest> for TankSpec {
    type Error = AdvisorError;

    fn try_from(request: &LayoutRequest) -> Result<Self> {
        let dimensions = [request.tank_length, request.tank_width, request.tank_height];
        if !dimensions.iter().all(|d| is_valid_dimension(*d)) {
            return Err(AdvisorError::validation(
                "Tank dimensions must be provided and greater than zero",
            ));
        }

        let water_type = WaterType::parse(&request.water_type)?;

        if request.fish_data.is_empty() {
            return Err(AdvisorError::validation("Fish data cannot be empty"));
        }

        if let Some(bad) = request
            .fish_data
            .iter()
            .find(|f| f.name.trim().is_empty() || f.quantity == 0)
        {
            return Err(AdvisorError::validation(format!(
                "Fish entries need a species name and a quantity of at least 1 (got '{}' x {})",
                bad.name, bad.quantity
            )));
        }

        Ok(TankSpec {
            name: request.tank_name.clone(),
            length: request.tank_length,
            width: request.tank_width,
            height: request.tank_height,
            unit: request.unit,
            water_type,
            fish: request
                .fish_data
                .iter()
                .map(|f| FishEntry::new(f.name.trim(), f.quantity))
                .collect(),
            comments: request.comments.clone(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationStatus {
    Success,
    Error,
}

/// Where the response text came from. Not part of the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseOrigin {
    #[default]
    Model,
    MalformedFallback,
    ProviderFallback,
    Remote,
}

impl ResponseOrigin {
    pub fn is_fallback(&self) -> bool {
        matches!(
            self,
            ResponseOrigin::MalformedFallback | ResponseOrigin::ProviderFallback
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub status: EvaluationStatus,
    pub response: String,
    #[serde(skip)]
    pub origin: ResponseOrigin,
}

impl EvaluationResult {
    pub fn success(response: String, origin: ResponseOrigin) -> Self {
        Self {
            status: EvaluationStatus::Success,
            response,
            origin,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Chat-completion call sent to the advice provider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
}
