//! API Response Handler
//!
//! Writes each background response into its display container. Failures
//! stop here: they are logged, classified for the status bar and turned
//! into display text.

use crate::logic::errors::{classify_error, FetchError};
use crate::logic::formatting::{gender_message, LOOKUP_ERROR_TEXT};
use crate::model::{FactNode, LookupNode, LookupNodeKind, Model};
use crate::services::api::ApiResponse;
use crate::utils::log_debug;

/// Handle API response from background service
///
/// Response types:
/// - FactResult: prepend a node to the fact feed (arrival order)
/// - GenderResult: replace the lookup result unless a newer lookup already landed
/// - MessagesResult: replace the message board unless a newer load already landed
pub fn handle_api_response(model: &mut Model, response: ApiResponse) {
    model.ui.request_finished();

    match response {
        ApiResponse::FactResult { seq, fact } => match fact {
            Ok(fact) => {
                model.feed.prepend(FactNode::new(seq, fact.fact));
            }
            Err(e) => {
                record_failure(model, "FactResult", &e);
                if e.is_malformed() {
                    // Something answered; make the empty answer visible in the feed
                    model.feed.prepend(FactNode::missing(seq));
                } else {
                    model.show_toast("Error: could not fetch a cat fact".to_string());
                }
            }
        },

        ApiResponse::GenderResult { seq, name, guess } => {
            let (node, succeeded) = match guess {
                Ok(guess) => (
                    LookupNode {
                        text: gender_message(&name, &guess, model.ui.gender_format),
                        kind: LookupNodeKind::Answer,
                    },
                    true,
                ),
                Err(e) => {
                    record_failure(model, "GenderResult", &e);
                    (
                        LookupNode {
                            text: LOOKUP_ERROR_TEXT.to_string(),
                            kind: LookupNodeKind::Error,
                        },
                        false,
                    )
                }
            };

            if !model.lookup.apply(seq, node) {
                log_debug(&format!(
                    "DEBUG [GenderResult]: dropping stale seq={} (showing seq={})",
                    seq,
                    model.lookup.applied_seq()
                ));
                return;
            }

            // Leave the field alone if the user already started typing another name
            if succeeded
                && model.ui.clear_input_on_success
                && model.lookup.input.trim() == name
            {
                model.lookup.clear_input();
            }
        }

        ApiResponse::MessagesResult { seq, messages } => {
            let applied = match messages {
                Ok(messages) => {
                    log_debug(&format!("DEBUG [MessagesResult]: {} messages", messages.len()));
                    model.board.replace(seq, messages)
                }
                Err(e) => {
                    record_failure(model, "MessagesResult", &e);
                    model.board.fail(seq, format!("Could not load messages ({})", e))
                }
            };
            if !applied {
                log_debug(&format!("DEBUG [MessagesResult]: dropping stale seq={}", seq));
            }
        }
    }
}

fn record_failure(model: &mut Model, context: &str, error: &FetchError) {
    let error_type = classify_error(error);
    log_debug(&format!("DEBUG [{}]: {} ({:?})", context, error, error_type));
    model.ui.last_error = Some(error_type);
}
