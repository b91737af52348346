use scene::components::{ComponentProperties, PropertyError};
use serde::Serialize;

pub const SAR_SWATH_ENTITY_TYPE: &str = "sar_swath";

/// Sensor pointing side. Affects styling only.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LookSide {
    Left,
    Right,
}

impl LookSide {
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("left") {
            Some(LookSide::Left)
        } else if value.eq_ignore_ascii_case("right") {
            Some(LookSide::Right)
        } else {
            None
        }
    }
}

/// Typed view of a swath object's property bag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwathProperties {
    pub opportunity_id: String,
    pub target_id: String,
    pub run_id: Option<String>,
    pub look_side: LookSide,
    pub pass_direction: Option<String>,
    pub incidence_deg: Option<f64>,
    pub swath_width_km: Option<f64>,
    pub imaging_time: Option<String>,
}

/// Reads swath properties off a scene object's bag.
///
/// Returns `None` when there is no bag, when `entity_type` is missing or is
/// not `sar_swath`, or when any read fails. Absent optional fields are fine;
/// present fields of the wrong type are failures.
pub fn extract(bag: Option<&ComponentProperties>) -> Option<SwathProperties> {
    let bag = bag?;
    match bag.text("entity_type") {
        Ok(SAR_SWATH_ENTITY_TYPE) => {}
        _ => return None,
    }
    read_swath(bag).ok()
}

fn read_swath(bag: &ComponentProperties) -> Result<SwathProperties, PropertyError> {
    let look_side_raw = bag.text("look_side")?;
    let look_side = LookSide::parse(look_side_raw).ok_or_else(|| PropertyError::TypeMismatch {
        name: "look_side".to_string(),
        expected: "LEFT|RIGHT",
        found: "text",
    })?;

    Ok(SwathProperties {
        opportunity_id: bag.text("opportunity_id")?.to_string(),
        target_id: bag.text("target_id")?.to_string(),
        run_id: bag.optional_text("run_id")?.map(str::to_string),
        look_side,
        pass_direction: bag.optional_text("pass_direction")?.map(str::to_string),
        incidence_deg: bag.optional_number("incidence_deg")?,
        swath_width_km: bag.optional_number("swath_width_km")?,
        imaging_time: bag.optional_text("imaging_time")?.map(str::to_string),
    })
}
