use crate::core::volume::VolumeReport;
use crate::domain::model::TankSpec;
use std::fmt::Write;

pub const SYSTEM_PROMPT: &str = "You are an intelligent aquarium design assistant. The user provides the tank dimensions and whether the aquarium is freshwater or saltwater, together with the fish they selected from a catalog. You must:
- Calculate the tank volume and how much of its stocking capacity the selection uses.
- Check compatibility of the selected fish based on aggression levels, environmental needs (pH, temperature, water type) and behavior.
- Warn if fish are incompatible or if tank capacity is exceeded.
- Provide brief reasoning for compatibility results.
- Make recommendations if problems arise.
Always answer in the exact section format the user asks for.";

/// 回應必須依序包含的六個段落標題
pub const SECTION_HEADERS: [&str; 6] = [
    "🔵 Tank Volume Assessment",
    "🟡 Bioload Assessment",
    "🟣 Fish Compatibility & Behavior",
    "🟢 Schooling Requirements",
    "✅ Recommendations",
    "⭐ Overall Rating",
];

/// Renders 60.0 as "60" and 60.5 as "60.5".
fn format_dimension(value: f64) -> String {
    format!("{}", value)
}

/// Builds the user prompt. Output depends only on its inputs.
pub fn build_prompt(tank: &TankSpec, volume: &VolumeReport) -> String {
    let mut prompt = String::new();

    // write! 到 String 不會失敗
    let _ = writeln!(prompt, "Tank Setup:");
    let _ = writeln!(prompt, "Tank Name: {}", tank.name);
    let _ = writeln!(
        prompt,
        "Dimensions: {} x {} x {} {}",
        format_dimension(tank.length),
        format_dimension(tank.width),
        format_dimension(tank.height),
        tank.unit.suffix()
    );
    let _ = writeln!(prompt, "Volume: {}", volume.describe());
    let _ = writeln!(prompt, "Water Type: {}", tank.water_type.display_name());
    let _ = writeln!(
        prompt,
        "Estimated Capacity: about {} inches of adult fish (0.8 inch per gallon)",
        volume.capacity_inches
    );
    let _ = writeln!(prompt, "Fish Selection: {}", tank.fish_summary());
    let _ = writeln!(prompt, "Total Fish: {}", tank.total_fish());
    if let Some(comments) = tank.comments() {
        let _ = writeln!(prompt, "Comments: {}", comments);
    }

    let _ = writeln!(prompt);
    let _ = writeln!(
        prompt,
        "Evaluate this setup using exactly these six sections, in this order:"
    );
    for header in SECTION_HEADERS {
        let _ = writeln!(prompt, "{}", header);
    }

    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Formatting rules:");
    let _ = writeln!(
        prompt,
        "- Write every section header exactly as shown above, including its marker symbol."
    );
    let _ = writeln!(prompt, "- Keep the sections in the order shown.");
    let _ = writeln!(prompt, "- Leave exactly one blank line between sections.");
    let _ = writeln!(
        prompt,
        "- Do not add any introduction, closing remarks or commentary outside the sections."
    );
    let _ = writeln!(
        prompt,
        "- Start the response with \"{}\" and end it with the \"{}\" section.",
        SECTION_HEADERS[0],
        SECTION_HEADERS[SECTION_HEADERS.len() - 1]
    );
    let _ = write!(
        prompt,
        "- In the Overall Rating section give a score out of 10 followed by a one-sentence justification."
    );

    prompt
}
