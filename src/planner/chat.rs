//! Canned chat responses.
//!
//! Classification is lowercase substring containment with a fixed priority
//! order, first match wins. No NLP, no state, no memory of prior turns.

const EAT_RESPONSE: &str = "I recommend trying the local bistro for authentic cuisine!";
const PHARMACY_RESPONSE: &str = "The nearest pharmacy is 200m from your location.";
const EVENTS_RESPONSE: &str = "There is a local festival happening downtown today!";
const FALLBACK_RESPONSE: &str = "I'm here to help with your trip! Ask me anything.";

/// Classify a chat message and return the canned response.
///
/// Priority order: "eat", then "pharmacy", then "events"/"happening",
/// then the generic fallback. Always succeeds.
pub fn respond(message: &str) -> &'static str {
    let message = message.to_lowercase();

    if message.contains("eat") {
        EAT_RESPONSE
    } else if message.contains("pharmacy") {
        PHARMACY_RESPONSE
    } else if message.contains("events") || message.contains("happening") {
        EVENTS_RESPONSE
    } else {
        FALLBACK_RESPONSE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_each_keyword() {
        assert_eq!(respond("Where can I eat?"), EAT_RESPONSE);
        assert_eq!(respond("I need a pharmacy"), PHARMACY_RESPONSE);
        assert_eq!(respond("any events happening"), EVENTS_RESPONSE);
        assert_eq!(respond("hello"), FALLBACK_RESPONSE);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(respond("WHERE TO EAT"), EAT_RESPONSE);
        assert_eq!(respond("PHARMACY?"), PHARMACY_RESPONSE);
    }

    #[test]
    fn eat_wins_over_pharmacy_on_priority() {
        assert_eq!(
            respond("should I eat before going to the pharmacy"),
            EAT_RESPONSE
        );
    }

    #[test]
    fn happening_alone_matches_the_festival_response() {
        assert_eq!(respond("what is happening today"), EVENTS_RESPONSE);
    }
}
