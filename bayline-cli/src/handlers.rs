use bayline_core::types::{AllocationReceipt, LeaseStatus, Occupancy, ReleaseSummary, ResourceClass};
use serde::{Deserialize, Serialize};

// ─── Validation Helpers ─────────────────────────────────────────────────────

const VALID_CLASSES: &[&str] = &["CAR", "BIKE", "TRUCK", "EMERGENCY", "ECO_FRIENDLY"];

/// Accepts a menu number (0-4) or a class name in any case.
pub fn parse_class(input: &str) -> Result<ResourceClass, String> {
    let input = input.trim();
    if let Ok(index) = input.parse::<usize>() {
        return ResourceClass::from_index(index)
            .ok_or_else(|| format!("Invalid vehicle type {}. Must be 0-4", index));
    }

    match input.to_uppercase().replace('-', "_").as_str() {
        "CAR" => Ok(ResourceClass::Car),
        "BIKE" => Ok(ResourceClass::Bike),
        "TRUCK" => Ok(ResourceClass::Truck),
        "EMERGENCY" => Ok(ResourceClass::Emergency),
        "ECO_FRIENDLY" | "ECOFRIENDLY" => Ok(ResourceClass::EcoFriendly),
        _ => Err(format!(
            "Invalid vehicle type '{}'. Must be one of: {}",
            input,
            VALID_CLASSES.join(", ")
        )),
    }
}

pub fn validate_plate(plate: &str) -> Result<&str, String> {
    let plate = plate.trim();
    if plate.is_empty() {
        return Err("plate number is required".to_string());
    }
    if plate.chars().any(char::is_whitespace) {
        return Err(format!("plate number '{}' must not contain spaces", plate));
    }
    Ok(plate)
}

// ─── Replay Script ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ReplayStep {
    /// Seconds since the start of the replay
    pub at_secs: u64,
    #[serde(flatten)]
    pub op: ReplayOp,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ReplayOp {
    Enter {
        plate: String,
        vehicle_type: String,
    },
    Exit {
        plate: String,
        /// Accept the membership offer if one is made
        #[serde(default)]
        enroll: bool,
    },
    Enroll { plate: String },
    Status,
}

// ─── Response Types ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EnterResponse {
    pub plate: String,
    pub spot: String,
    pub rate: f64,
    pub discount_applied: bool,
}

impl From<AllocationReceipt> for EnterResponse {
    fn from(receipt: AllocationReceipt) -> Self {
        Self {
            plate: receipt.client_id,
            spot: receipt.spot.to_string(),
            rate: receipt.rate,
            discount_applied: receipt.discount_applied,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExitResponse {
    pub plate: String,
    pub hours_stayed: f64,
    pub charge: u64,
    pub overstayed: bool,
    pub freed_spot: String,
    pub enrolled: bool,
}

impl ExitResponse {
    pub fn new(summary: ReleaseSummary, enrolled: bool) -> Self {
        Self {
            plate: summary.client_id,
            hours_stayed: summary.hours_stayed,
            charge: summary.charge,
            overstayed: summary.overstayed,
            freed_spot: summary.freed_spot.to_string(),
            enrolled,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EnrollResponse {
    pub plate: String,
    pub newly_enrolled: bool,
}

#[derive(Debug, Serialize)]
pub struct ParkedVehicleInfo {
    pub plate: String,
    pub rate: f64,
    pub spot: String,
    pub overstayed: bool,
}

impl From<LeaseStatus> for ParkedVehicleInfo {
    fn from(status: LeaseStatus) -> Self {
        Self {
            plate: status.client_id,
            rate: status.rate,
            spot: status.spot.to_string(),
            overstayed: status.overstayed,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub occupied: usize,
    pub capacity: usize,
    pub vehicles: Vec<ParkedVehicleInfo>,
}

impl StatusResponse {
    pub fn new(occupancy: Occupancy, vehicles: Vec<ParkedVehicleInfo>) -> Self {
        Self {
            occupied: occupancy.occupied,
            capacity: occupancy.capacity,
            vehicles,
        }
    }
}
