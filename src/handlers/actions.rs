//! Fetch-Render Action triggers
//!
//! The first half of every action: guard, allocate a sequence number, hand
//! the request to the background worker. The second half lives in
//! `handlers::api`, which writes the response into the container.

use tokio::sync::mpsc::UnboundedSender;

use crate::logic::input::{validate_name, EMPTY_NAME_GUIDANCE};
use crate::model::{LookupNode, LookupNodeKind, Model};
use crate::services::api::ApiRequest;
use crate::utils::log_debug;

/// Fetch one cat fact into the feed
///
/// Returns the sequence number of the issued request.
pub fn trigger_fact(model: &mut Model, requests: &UnboundedSender<ApiRequest>) -> Option<u64> {
    let seq = model.next_seq();
    dispatch(model, requests, ApiRequest::FetchFact { seq })
}

/// Look up the gender of the name currently in the input field
///
/// A blank field short-circuits: the guidance string replaces the result and
/// no request is issued.
pub fn trigger_lookup(model: &mut Model, requests: &UnboundedSender<ApiRequest>) -> Option<u64> {
    let seq = model.next_seq();

    let name = match validate_name(&model.lookup.input) {
        Ok(name) => name,
        Err(_) => {
            log_debug("DEBUG [Lookup]: empty name, no request issued");
            model.lookup.apply(
                seq,
                LookupNode {
                    text: EMPTY_NAME_GUIDANCE.to_string(),
                    kind: LookupNodeKind::Guidance,
                },
            );
            return None;
        }
    };

    dispatch(model, requests, ApiRequest::Genderize { seq, name })
}

/// Reload the message board
pub fn trigger_messages(
    model: &mut Model,
    requests: &UnboundedSender<ApiRequest>,
) -> Option<u64> {
    let seq = model.next_seq();
    dispatch(model, requests, ApiRequest::ListMessages { seq })
}

fn dispatch(
    model: &mut Model,
    requests: &UnboundedSender<ApiRequest>,
    request: ApiRequest,
) -> Option<u64> {
    let seq = request.seq();
    log_debug(&format!("DEBUG [Trigger]: {:?}", request));

    if requests.send(request).is_err() {
        log_debug("DEBUG [Trigger]: API service is gone, request dropped");
        model.show_toast("Error: request service stopped".to_string());
        return None;
    }

    model.ui.request_started();
    Some(seq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[test]
    fn test_fact_trigger_sends_request() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut model = Model::default();

        let seq = trigger_fact(&mut model, &tx);
        assert_eq!(rx.try_recv().ok(), Some(ApiRequest::FetchFact { seq: seq.unwrap() }));
        assert_eq!(model.ui.in_flight, 1);
    }

    #[test]
    fn test_lookup_sends_trimmed_name() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut model = Model::default();
        model.lookup.input = "  alice ".to_string();

        let seq = trigger_lookup(&mut model, &tx).unwrap();
        assert_eq!(
            rx.try_recv().ok(),
            Some(ApiRequest::Genderize {
                seq,
                name: "alice".to_string()
            })
        );
    }

    #[test]
    fn test_blank_lookup_shows_guidance_without_request() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut model = Model::default();

        for input in ["", "   "] {
            model.lookup.input = input.to_string();
            assert_eq!(trigger_lookup(&mut model, &tx), None);
            assert!(rx.try_recv().is_err());
            assert_eq!(
                model.lookup.result.as_ref().map(|n| n.text.as_str()),
                Some(EMPTY_NAME_GUIDANCE)
            );
        }
        assert_eq!(model.ui.in_flight, 0);
    }

    #[test]
    fn test_closed_service_is_reported() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let mut model = Model::default();

        assert_eq!(trigger_messages(&mut model, &tx), None);
        assert_eq!(model.ui.in_flight, 0);
        assert!(model.ui.toast_message.is_some());
    }
}
