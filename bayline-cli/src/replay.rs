//! Runs a timed JSON script of operations against a fresh engine.

use bayline_core::clock::ManualClock;
use bayline_core::config::EngineConfig;
use bayline_core::ParkingEngine;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::handlers::*;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Invalid replay script: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Step {index} at {at_secs}s goes back in time (previous step at {previous_secs}s)")]
    OutOfOrder {
        index: usize,
        at_secs: u64,
        previous_secs: u64,
    },
}

/// Executes every step and returns one response per step, in order.
/// Engine errors are reported per step; only malformed scripts fail the run.
pub fn run(config: &EngineConfig, script: &str) -> Result<Vec<Value>, ReplayError> {
    let steps: Vec<ReplayStep> = serde_json::from_str(script)?;

    let clock = ManualClock::new(0);
    let mut engine = ParkingEngine::with_clock(config, clock.clone());
    let mut results = Vec::with_capacity(steps.len());
    let mut previous_secs = 0;

    for (index, step) in steps.into_iter().enumerate() {
        if step.at_secs < previous_secs {
            return Err(ReplayError::OutOfOrder {
                index,
                at_secs: step.at_secs,
                previous_secs,
            });
        }
        previous_secs = step.at_secs;
        clock.set(step.at_secs.saturating_mul(1000));

        tracing::debug!(index, at_secs = step.at_secs, op = ?step.op, "replaying step");
        results.push(apply(&mut engine, step.op)?);
    }

    Ok(results)
}

fn apply(engine: &mut ParkingEngine, op: ReplayOp) -> Result<Value, serde_json::Error> {
    match op {
        ReplayOp::Enter { plate, vehicle_type } => {
            let outcome = validate_plate(&plate)
                .and_then(|plate| Ok((plate, parse_class(&vehicle_type)?)))
                .and_then(|(plate, class)| {
                    engine
                        .allocate(plate, class)
                        .map(EnterResponse::from)
                        .map_err(|e| e.to_string())
                });
            respond(outcome)
        }
        ReplayOp::Exit { plate, enroll } => {
            let outcome = validate_plate(&plate).and_then(|plate| {
                let summary = engine.release(plate).map_err(|e| e.to_string())?;
                let enrolled =
                    enroll && summary.offer_enrollment && engine.enroll(&summary.client_id);
                Ok(ExitResponse::new(summary, enrolled))
            });
            respond(outcome)
        }
        ReplayOp::Enroll { plate } => {
            let outcome = validate_plate(&plate).map(|plate| EnrollResponse {
                plate: plate.to_string(),
                newly_enrolled: engine.enroll(plate),
            });
            respond(outcome)
        }
        ReplayOp::Status => {
            let vehicles = engine
                .snapshot()
                .iter()
                .map(ParkedVehicleInfo::from)
                .collect();
            respond(Ok(StatusResponse::new(engine.occupancy(), vehicles)))
        }
    }
}

fn respond<T: Serialize>(outcome: Result<T, String>) -> Result<Value, serde_json::Error> {
    match outcome {
        Ok(data) => serde_json::to_value(ApiResponse::ok(data)),
        Err(e) => serde_json::to_value(ApiResponse::<T>::err(e)),
    }
}
