//! Tab scoping of opaque edit-request batches.
//!
//! Batches are caller-defined JSON objects forwarded to the service without
//! interpretation; the set of operation kinds is open. Scoping is therefore
//! a structural walk over each operation body looking for the three known
//! addressing fields plus the text-match criterion, never a match on
//! operation names.

use serde_json::{Value, json};

/// Addressing fields that accept a tab scope.
const SCOPED_FIELDS: [&str; 3] = ["location", "range", "insertionLocation"];

/// Inject `tab_id` into every addressing field of `requests` that lacks an
/// explicit scope, and add a `tabsCriteria` to every request carrying a
/// `containsText` criterion without one.
///
/// Fields that already carry a scope are left untouched; explicit caller
/// intent is never overridden. An empty `tab_id` returns the batch
/// unmodified, which is how legacy tab-less documents bypass rewriting.
pub fn scope_requests(mut requests: Vec<Value>, tab_id: &str) -> Vec<Value> {
    if tab_id.is_empty() {
        return requests;
    }

    for request in &mut requests {
        let Some(ops) = request.as_object_mut() else { continue };
        for op_body in ops.values_mut() {
            let Some(body) = op_body.as_object_mut() else { continue };

            for field in SCOPED_FIELDS {
                if let Some(target) = body.get_mut(field).and_then(Value::as_object_mut) {
                    if !target.contains_key("tabId") {
                        target.insert("tabId".to_string(), Value::String(tab_id.to_string()));
                    }
                }
            }

            if body.contains_key("containsText") && !body.contains_key("tabsCriteria") {
                body.insert("tabsCriteria".to_string(), json!({ "tabIds": [tab_id] }));
            }
        }
    }

    requests
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_injects_tab_id_into_unscoped_location() {
        let requests = vec![json!({
            "insertText": { "location": { "index": 5 }, "text": "hello" }
        })];

        let scoped = scope_requests(requests, "tab123");
        assert_eq!(scoped[0]["insertText"]["location"]["tabId"], "tab123");
        assert_eq!(scoped[0]["insertText"]["location"]["index"], 5);
    }

    #[test]
    fn test_explicit_scope_never_overridden() {
        let requests = vec![json!({
            "insertText": { "location": { "index": 5, "tabId": "mine" }, "text": "x" }
        })];

        let scoped = scope_requests(requests.clone(), "other");
        assert_eq!(scoped, requests);
    }

    #[test]
    fn test_empty_tab_id_returns_batch_unchanged() {
        let requests = vec![json!({
            "insertText": { "location": { "index": 5 }, "text": "x" }
        })];

        let scoped = scope_requests(requests.clone(), "");
        assert_eq!(scoped, requests);
    }

    #[test]
    fn test_scopes_range_and_insertion_location() {
        let requests = vec![
            json!({ "updateTextStyle": {
                "range": { "startIndex": 1, "endIndex": 10 },
                "textStyle": { "bold": true },
                "fields": "bold"
            }}),
            json!({ "insertInlineImage": {
                "insertionLocation": { "index": 3 },
                "uri": "https://example.com/x.png"
            }}),
        ];

        let scoped = scope_requests(requests, "t1");
        assert_eq!(scoped[0]["updateTextStyle"]["range"]["tabId"], "t1");
        assert_eq!(scoped[1]["insertInlineImage"]["insertionLocation"]["tabId"], "t1");
    }

    #[test]
    fn test_contains_text_gains_tabs_criteria() {
        let requests = vec![json!({
            "replaceAllText": {
                "containsText": { "text": "old", "matchCase": true },
                "replaceText": "new"
            }
        })];

        let scoped = scope_requests(requests, "t9");
        assert_eq!(
            scoped[0]["replaceAllText"]["tabsCriteria"],
            json!({ "tabIds": ["t9"] })
        );
    }

    #[test]
    fn test_existing_tabs_criteria_untouched() {
        let requests = vec![json!({
            "replaceAllText": {
                "containsText": { "text": "old" },
                "replaceText": "new",
                "tabsCriteria": { "tabIds": ["keep"] }
            }
        })];

        let scoped = scope_requests(requests.clone(), "t9");
        assert_eq!(scoped, requests);
    }

    #[test]
    fn test_unknown_operation_kinds_pass_through() {
        // The operation set is open; a kind invented tomorrow still gets its
        // location scoped and everything else left alone.
        let requests = vec![json!({
            "someFutureOp": {
                "location": { "index": 2 },
                "payload": { "nested": [1, 2, 3] }
            }
        })];

        let scoped = scope_requests(requests, "t2");
        assert_eq!(scoped[0]["someFutureOp"]["location"]["tabId"], "t2");
        assert_eq!(scoped[0]["someFutureOp"]["payload"], json!({ "nested": [1, 2, 3] }));
    }

    #[test]
    fn test_non_object_requests_left_alone() {
        let requests = vec![json!("not an object"), json!({ "op": 42 })];
        let scoped = scope_requests(requests.clone(), "t1");
        assert_eq!(scoped, requests);
    }
}
