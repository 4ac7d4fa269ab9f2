//! Formatting and display logic
//!
//! Pure functions that derive the display text of each container from a
//! decoded payload.

use crate::api::{GenderGuess, Message};
use crate::config::GenderFormat;

/// Fixed string written into the lookup container when the request fails
pub const LOOKUP_ERROR_TEXT: &str = "Error fetching data. Please try again later.";

/// Text of a feed node whose response carried no fact
pub const MISSING_FACT_TEXT: &str = "(no fact in response)";

/// Format a 0..1 probability as a percentage
///
/// Integral percentages print without a fractional part, anything else keeps
/// one decimal.
///
/// # Examples
/// ```
/// use fetchdeck::logic::formatting::format_percent;
///
/// assert_eq!(format_percent(0.96), "96");
/// assert_eq!(format_percent(1.0), "100");
/// assert_eq!(format_percent(0.955), "95.5");
/// assert_eq!(format_percent(0.0), "0");
/// ```
pub fn format_percent(probability: f64) -> String {
    let tenths = (probability * 1000.0).round();
    if tenths % 10.0 == 0.0 {
        format!("{:.0}", tenths / 10.0)
    } else {
        format!("{:.1}", tenths / 10.0)
    }
}

/// Sentence shown in the lookup container for a successful response
///
/// `name` is the trimmed input the user typed, not the name echoed by the
/// service.
pub fn gender_message(name: &str, guess: &GenderGuess, format: GenderFormat) -> String {
    let pct = format_percent(guess.probability);
    match format {
        GenderFormat::Sentence => match guess.gender.as_deref() {
            Some(gender @ ("male" | "female")) => {
                format!("The gender of {} is {} with {}% certainty.", name, gender, pct)
            }
            _ => format!("The gender of {} is unisex or not found.", name),
        },
        GenderFormat::Compact => {
            let gender = guess.gender.as_deref().unwrap_or("unknown");
            format!("Result : {} is {}% {}", name, pct, gender)
        }
    }
}

/// One line per message, in payload order
pub fn message_lines(messages: &[Message]) -> Vec<String> {
    messages
        .iter()
        .map(|message| format!("#{} {}", message.id, message.content))
        .collect()
}

/// Collapse runs of whitespace so a fact draws on as few rows as possible
///
/// Display only: the feed node keeps the fact exactly as received.
pub fn normalize_fact(fact: &str) -> String {
    fact.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MessageId;

    fn guess(gender: Option<&str>, probability: f64) -> GenderGuess {
        GenderGuess {
            gender: gender.map(str::to_string),
            probability,
        }
    }

    #[test]
    fn test_sentence_female() {
        assert_eq!(
            gender_message("alice", &guess(Some("female"), 0.96), GenderFormat::Sentence),
            "The gender of alice is female with 96% certainty."
        );
    }

    #[test]
    fn test_sentence_male() {
        assert_eq!(
            gender_message("bob", &guess(Some("male"), 0.99), GenderFormat::Sentence),
            "The gender of bob is male with 99% certainty."
        );
    }

    #[test]
    fn test_sentence_unknown_gender() {
        assert_eq!(
            gender_message("zzyzx", &guess(None, 0.0), GenderFormat::Sentence),
            "The gender of zzyzx is unisex or not found."
        );
        // Anything outside male/female falls into the same branch
        assert_eq!(
            gender_message("sam", &guess(Some("other"), 0.5), GenderFormat::Sentence),
            "The gender of sam is unisex or not found."
        );
    }

    #[test]
    fn test_compact_format() {
        assert_eq!(
            gender_message("alice", &guess(Some("female"), 0.96), GenderFormat::Compact),
            "Result : alice is 96% female"
        );
        assert_eq!(
            gender_message("zzyzx", &guess(None, 0.0), GenderFormat::Compact),
            "Result : zzyzx is 0% unknown"
        );
    }

    #[test]
    fn test_format_percent_float_noise() {
        // 0.07 * 100 is 7.000000000000001 in binary floating point
        assert_eq!(format_percent(0.07), "7");
        assert_eq!(format_percent(0.5), "50");
    }

    #[test]
    fn test_message_lines_keep_order() {
        let messages = vec![
            Message {
                id: MessageId::Int(2),
                content: "second".to_string(),
            },
            Message {
                id: MessageId::Int(1),
                content: "first".to_string(),
            },
        ];
        assert_eq!(message_lines(&messages), vec!["#2 second", "#1 first"]);
    }

    #[test]
    fn test_normalize_fact() {
        assert_eq!(normalize_fact("Cats\n  purr   softly."), "Cats purr softly.");
    }
}
