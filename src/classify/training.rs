//! Training data for the service classifier.

use serde::{Deserialize, Serialize};

/// Training sample for service classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingExample {
    /// Query text.
    pub text: String,
    /// Service title this query should map to.
    pub label: String,
}

impl TrainingExample {
    pub fn new(text: &str, label: &str) -> Self {
        TrainingExample {
            text: text.to_string(),
            label: label.to_string(),
        }
    }
}

/// The compiled-in training set: synthetic customer queries labeled with
/// catalog titles. Counts are kept balanced across services so the model
/// priors stay uniform.
pub fn builtin_training_set() -> Vec<TrainingExample> {
    vec![
        // Oil Change
        TrainingExample::new("time for an oil change", "Oil Change"),
        TrainingExample::new("oil light came on need new oil", "Oil Change"),
        TrainingExample::new("synthetic oil and filter replacement", "Oil Change"),
        TrainingExample::new("car is due for an oil service", "Oil Change"),
        // Tire Rotation
        TrainingExample::new("tires are wearing unevenly", "Tire Rotation"),
        TrainingExample::new("need my tires rotated", "Tire Rotation"),
        TrainingExample::new("front tires more worn than the back", "Tire Rotation"),
        TrainingExample::new("tread wear looks uneven", "Tire Rotation"),
        // Coolant Flush
        TrainingExample::new("overheating in stop and go traffic", "Coolant Flush"),
        TrainingExample::new("temperature gauge reads high", "Coolant Flush"),
        TrainingExample::new("coolant is low and smells sweet", "Coolant Flush"),
        TrainingExample::new("radiator needs a flush", "Coolant Flush"),
        // Brake Inspection
        TrainingExample::new("brakes are squealing when i stop", "Brake Inspection"),
        TrainingExample::new("grinding noise when braking", "Brake Inspection"),
        TrainingExample::new("brake pedal feels soft", "Brake Inspection"),
        TrainingExample::new("car takes too long to stop", "Brake Inspection"),
        // Suspension Repair
        TrainingExample::new("car bounces over every bump", "Suspension Repair"),
        TrainingExample::new("clunking noise from the front end", "Suspension Repair"),
        TrainingExample::new("ride feels rough and loose", "Suspension Repair"),
        TrainingExample::new("shocks seem worn out", "Suspension Repair"),
        // Battery Replacement
        TrainingExample::new("Engine won't turn over", "Battery Replacement"),
        TrainingExample::new("car won't start in the morning", "Battery Replacement"),
        TrainingExample::new("engine turns over but won't start", "Battery Replacement"),
        TrainingExample::new("battery is dead and needs replacing", "Battery Replacement"),
        // Alternator Repair
        TrainingExample::new("headlights dim at idle", "Alternator Repair"),
        TrainingExample::new("battery light stays on while driving", "Alternator Repair"),
        TrainingExample::new("whining noise that rises with rpm", "Alternator Repair"),
        TrainingExample::new("electrical system keeps losing power", "Alternator Repair"),
        // Engine Diagnostics
        TrainingExample::new("check engine light is on", "Engine Diagnostics"),
        TrainingExample::new("engine is stalling at red lights", "Engine Diagnostics"),
        TrainingExample::new("car runs rough and misfires", "Engine Diagnostics"),
        TrainingExample::new("engine hesitates when accelerating", "Engine Diagnostics"),
        // Transmission Service
        TrainingExample::new("transmission is slipping between gears", "Transmission Service"),
        TrainingExample::new("hard shifting when the car is cold", "Transmission Service"),
        TrainingExample::new("car jerks when changing gears", "Transmission Service"),
        TrainingExample::new("transmission fluid looks dark", "Transmission Service"),
        // Wheel Alignment
        TrainingExample::new("car pulls to the left", "Wheel Alignment"),
        TrainingExample::new("steering wheel is off center", "Wheel Alignment"),
        TrainingExample::new("car drifts on the highway", "Wheel Alignment"),
        TrainingExample::new("steering vibrates at speed", "Wheel Alignment"),
        // AC Recharge
        TrainingExample::new("ac is blowing warm air", "AC Recharge"),
        TrainingExample::new("air conditioning is not cold anymore", "AC Recharge"),
        TrainingExample::new("ac stopped working this summer", "AC Recharge"),
        TrainingExample::new("no cold air from the vents", "AC Recharge"),
        // Exhaust Repair
        TrainingExample::new("exhaust is very loud", "Exhaust Repair"),
        TrainingExample::new("rattling noise under the car", "Exhaust Repair"),
        TrainingExample::new("smell exhaust fumes in the cabin", "Exhaust Repair"),
        TrainingExample::new("muffler is hanging low", "Exhaust Repair"),
    ]
}
