//! Itinerary generation.
//!
//! The generator accepts the caller's preferences and budget so the API
//! contract allows them to influence output, but the current behavior is a
//! fixed 3-day plan regardless of input. That input-independence is the
//! literal contract; callers must not be given a different plan for
//! different inputs.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One scheduled activity within a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Start time of day, "HH:MM".
    pub time: String,

    /// Human-readable activity name.
    pub activity: String,

    /// Duration, e.g. "2h".
    pub duration: String,

    /// Cost, e.g. "$20".
    pub cost: String,

    /// Expected crowd level: "Low", "Medium", or "High".
    #[serde(rename = "crowdLevel")]
    pub crowd_level: String,
}

/// One day of an itinerary: a day number and its ordered activities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryDay {
    pub day: u32,
    pub activities: Vec<Activity>,
}

fn activity(time: &str, name: &str, duration: &str, cost: &str, crowd: &str) -> Activity {
    Activity {
        time: time.to_string(),
        activity: name.to_string(),
        duration: duration.to_string(),
        cost: cost.to_string(),
        crowd_level: crowd.to_string(),
    }
}

/// Generate a 3-day itinerary.
///
/// Always succeeds and always returns the same plan; the arguments are
/// accepted but ignored.
pub fn generate(_preferences: &HashMap<String, bool>, _budget: &str) -> Vec<ItineraryDay> {
    vec![
        ItineraryDay {
            day: 1,
            activities: vec![
                activity("09:00", "Visit Museum", "2h", "$20", "Low"),
                activity("12:00", "Lunch at Local Cafe", "1h", "$15", "Medium"),
            ],
        },
        ItineraryDay {
            day: 2,
            activities: vec![
                activity("10:00", "City Tour", "3h", "$50", "High"),
                activity("14:00", "Shopping", "2h", "$100", "Medium"),
            ],
        },
        ItineraryDay {
            day: 3,
            activities: vec![
                activity("09:00", "Hiking Adventure", "4h", "$0", "Low"),
                activity("14:00", "Dinner at Restaurant", "2h", "$40", "High"),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_is_independent_of_input() {
        let empty = generate(&HashMap::new(), "moderate");
        let with_prefs = generate(
            &HashMap::from([("museums".to_string(), true)]),
            "luxury",
        );
        assert_eq!(empty, with_prefs);
    }

    #[test]
    fn plan_is_three_days_with_two_activities_each() {
        let plan = generate(&HashMap::new(), "moderate");
        assert_eq!(plan.len(), 3);
        for (i, day) in plan.iter().enumerate() {
            assert_eq!(day.day, i as u32 + 1);
            assert_eq!(day.activities.len(), 2);
        }
    }

    #[test]
    fn crowd_level_serializes_in_camel_case() {
        let plan = generate(&HashMap::new(), "moderate");
        let json = serde_json::to_value(&plan[0].activities[0]).unwrap();
        assert_eq!(json["crowdLevel"], "Low");
        assert!(json.get("crowd_level").is_none());
    }

    #[test]
    fn first_day_starts_at_the_museum() {
        let plan = generate(&HashMap::new(), "moderate");
        assert_eq!(plan[0].activities[0].activity, "Visit Museum");
        assert_eq!(plan[0].activities[0].cost, "$20");
    }
}
