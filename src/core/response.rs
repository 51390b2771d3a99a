use crate::core::prompt::SECTION_HEADERS;
use crate::core::volume::VolumeReport;
use crate::domain::model::TankSpec;

const MIN_RESPONSE_CHARS: usize = 50;
const FALLBACK_RATING: &str = "7/10";

fn is_long_enough(trimmed: &str) -> bool {
    trimmed.chars().count() >= MIN_RESPONSE_CHARS
}

/// Pass/fail check of the model answer against the six-section format:
/// starts with the first header and has every header in order.
pub fn validate_response(response: &str) -> bool {
    let trimmed = response.trim();

    if !is_long_enough(trimmed) || !trimmed.starts_with(SECTION_HEADERS[0]) {
        return false;
    }

    let mut rest = trimmed;
    for header in SECTION_HEADERS {
        match rest.find(header) {
            Some(pos) => rest = &rest[pos + header.len()..],
            None => return false,
        }
    }
    true
}

/// 無法取得有效的模型回應時，以本地資料組出六段式回覆
pub fn fallback_response(tank: &TankSpec, volume: &VolumeReport) -> String {
    let fish_list = tank.fish_summary();
    let total_fish = tank.total_fish();
    let water = tank.water_type.as_str();

    let sections = [
        format!(
            "{}\n- Tank volume: {}.\n- Estimated stocking capacity: about {} inches of adult fish.",
            SECTION_HEADERS[0],
            volume.describe(),
            volume.capacity_inches
        ),
        format!(
            "{}\n- Total fish selected: {}.\n- Compare the adult size of each species against the estimated capacity and leave room for growth.\n- Plan regular partial water changes and filtration sized for the tank volume.",
            SECTION_HEADERS[1], total_fish
        ),
        format!(
            "{}\n- Selected fish: {}.\n- Water type: {}. Confirm every species is suited to {} conditions.\n- Research temperament, preferred temperature and pH for each species before adding them together.",
            SECTION_HEADERS[2], fish_list, water, water
        ),
        format!(
            "{}\n- Keep schooling and shoaling species in groups of at least six.\n- Give solitary or territorial species enough space and hiding places.",
            SECTION_HEADERS[3]
        ),
        format!(
            "{}\n- Cycle the tank fully before adding fish.\n- Add fish gradually and monitor ammonia, nitrite and nitrate levels.\n- Quarantine new arrivals when possible.",
            SECTION_HEADERS[4]
        ),
        format!(
            "{}\n{} - The setup looks workable, but a detailed compatibility review could not be completed automatically. Verify the points above before stocking.",
            SECTION_HEADERS[5], FALLBACK_RATING
        ),
    ];

    sections.join("\n\n")
}
