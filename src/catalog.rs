//! Static service catalog for the shop.
//!
//! The catalog is a fixed taxonomy of categories and services compiled
//! into the binary. It is constructed once at startup and shared
//! read-only by the resolver and the HTTP surface; nothing mutates it
//! afterwards.

use serde::{Deserialize, Serialize};

/// A single service offered by the shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDefinition {
    /// Service title, unique catalog-wide.
    pub title: String,
    /// Customer-facing description.
    pub description: String,
    /// Lowercase keywords matched verbatim against query tokens.
    pub keywords: Vec<String>,
    /// Category this service belongs to.
    pub category: String,
}

impl ServiceDefinition {
    pub fn new(title: &str, description: &str, keywords: &[&str], category: &str) -> Self {
        ServiceDefinition {
            title: title.to_string(),
            description: description.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            category: category.to_string(),
        }
    }
}

/// The full service catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceCatalog {
    services: Vec<ServiceDefinition>,
}

impl ServiceCatalog {
    pub fn new(services: Vec<ServiceDefinition>) -> Self {
        ServiceCatalog { services }
    }

    /// All services, in catalog order.
    pub fn services(&self) -> &[ServiceDefinition] {
        &self.services
    }

    /// Look up a service by exact title, across all categories.
    ///
    /// Titles are expected to be unique catalog-wide; if a duplicate ever
    /// slips in, the first match wins.
    pub fn find_by_title(&self, title: &str) -> Option<&ServiceDefinition> {
        self.services.iter().find(|s| s.title == title)
    }

    /// All service titles, in catalog order.
    pub fn titles(&self) -> Vec<&str> {
        self.services.iter().map(|s| s.title.as_str()).collect()
    }

    /// Services grouped by category, preserving first-seen category order.
    pub fn by_category(&self) -> Vec<(&str, Vec<&ServiceDefinition>)> {
        let mut groups: Vec<(&str, Vec<&ServiceDefinition>)> = Vec::new();
        for service in &self.services {
            match groups.iter_mut().find(|(name, _)| *name == service.category) {
                Some((_, services)) => services.push(service),
                None => groups.push((service.category.as_str(), vec![service])),
            }
        }
        groups
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

/// The shop's catalog of services.
pub fn builtin_catalog() -> ServiceCatalog {
    ServiceCatalog::new(vec![
        ServiceDefinition::new(
            "Oil Change",
            "Engine oil and filter replacement with a multi-point fluid check.",
            &["oil", "change", "filter", "synthetic", "lube"],
            "Maintenance",
        ),
        ServiceDefinition::new(
            "Tire Rotation",
            "Rotate all four tires to even out tread wear.",
            &["tire", "rotation", "tread", "wear", "uneven"],
            "Maintenance",
        ),
        ServiceDefinition::new(
            "Coolant Flush",
            "Drain and replace engine coolant, pressure-test the system.",
            &["coolant", "antifreeze", "radiator", "overheating", "temperature"],
            "Maintenance",
        ),
        ServiceDefinition::new(
            "Brake Inspection",
            "Full inspection of pads, rotors, lines, and brake fluid.",
            &["brakes", "squealing", "grinding", "pedal", "stopping"],
            "Brakes & Suspension",
        ),
        ServiceDefinition::new(
            "Suspension Repair",
            "Diagnose and repair shocks, struts, and bushings.",
            &["suspension", "shocks", "struts", "bouncing", "clunking"],
            "Brakes & Suspension",
        ),
        ServiceDefinition::new(
            "Battery Replacement",
            "Test the charging system and replace the battery if it is failing.",
            &["battery", "dead", "start", "crank", "clicking"],
            "Electrical",
        ),
        ServiceDefinition::new(
            "Alternator Repair",
            "Diagnose charging faults and replace the alternator if needed.",
            &["alternator", "charging", "dim", "voltage", "whining"],
            "Electrical",
        ),
        ServiceDefinition::new(
            "Engine Diagnostics",
            "Computer diagnostics for warning lights and drivability problems.",
            &["engine", "check", "light", "stalling", "misfire"],
            "Diagnostics",
        ),
        ServiceDefinition::new(
            "Transmission Service",
            "Transmission fluid exchange and shift quality inspection.",
            &["transmission", "shifting", "gears", "slipping", "fluid"],
            "Drivetrain",
        ),
        ServiceDefinition::new(
            "Wheel Alignment",
            "Four-wheel alignment to factory specifications.",
            &["alignment", "pulling", "steering", "drift", "vibration"],
            "Tires & Wheels",
        ),
        ServiceDefinition::new(
            "AC Recharge",
            "Evacuate and recharge the air conditioning system, check for leaks.",
            &["ac", "air", "conditioning", "cold", "blowing"],
            "Climate Control",
        ),
        ServiceDefinition::new(
            "Exhaust Repair",
            "Inspect and repair the muffler, pipes, and exhaust hangers.",
            &["exhaust", "muffler", "loud", "rattling", "fumes"],
            "Exhaust",
        ),
    ])
}
