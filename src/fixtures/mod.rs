//! Canned payloads for tests.
//!
//! Wire-shaped JSON used across unit and integration tests.

/// An update carrying a text message
pub const UPDATE_WITH_MESSAGE: &str = r#"{
    "update_id": 1001,
    "message": {
        "message_id": 7,
        "from": {"id": 42, "is_bot": false, "first_name": "Bob", "username": "bob"},
        "chat": {"id": 1234, "type": "private", "first_name": "Bob", "username": "bob"},
        "date": 1687000000,
        "text": "hi"
    }
}"#;

/// An update carrying a callback query
pub const UPDATE_WITH_CALLBACK: &str = r#"{
    "update_id": 1002,
    "callback_query": {
        "id": "4382bfdwdsb323b2d9",
        "from": {"id": 42, "is_bot": false, "first_name": "Bob", "username": "bob"},
        "chat_instance": "-571892375934",
        "data": "yes"
    }
}"#;

/// A successful `sendMessage` envelope
pub const SEND_MESSAGE_OK: &str = r#"{
    "ok": true,
    "result": {
        "message_id": 7,
        "from": {"id": 99, "is_bot": true, "first_name": "testbot", "username": "testbot"},
        "chat": {"id": 1234, "type": "private", "first_name": "Bob", "username": "bob"},
        "date": 1687000000,
        "text": "hi"
    }
}"#;

/// A failed envelope: unknown chat
pub const CHAT_NOT_FOUND: &str =
    r#"{"ok":false,"error_code":400,"description":"Bad Request: chat not found"}"#;

/// A failed envelope carrying a retry hint
pub const TOO_MANY_REQUESTS: &str = r#"{
    "ok": false,
    "error_code": 429,
    "description": "Too Many Requests: retry after 7",
    "parameters": {"retry_after": 7}
}"#;

/// A `getMe` envelope
pub const GET_ME_OK: &str = r#"{
    "ok": true,
    "result": {
        "id": 99,
        "is_bot": true,
        "first_name": "testbot",
        "username": "testbot",
        "can_join_groups": true,
        "can_read_all_group_messages": false,
        "supports_inline_queries": false
    }
}"#;

/// A successful envelope wrapping one update batch
pub fn updates_envelope(ids: &[i64]) -> String {
    let updates: Vec<String> = ids
        .iter()
        .map(|id| format!(r#"{{"update_id":{}}}"#, id))
        .collect();
    format!(r#"{{"ok":true,"result":[{}]}}"#, updates.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ApiResponse, Message, Update};

    #[test]
    fn test_fixtures_decode() {
        let _: Update = serde_json::from_str(UPDATE_WITH_MESSAGE).unwrap();
        let _: Update = serde_json::from_str(UPDATE_WITH_CALLBACK).unwrap();

        let envelope: ApiResponse = serde_json::from_str(SEND_MESSAGE_OK).unwrap();
        let message: Message = envelope.decode().unwrap();
        assert_eq!(message.message_id, 7);

        let envelope: ApiResponse = serde_json::from_str(TOO_MANY_REQUESTS).unwrap();
        assert_eq!(
            envelope.parameters.as_ref().and_then(|p| p.retry_after),
            Some(7)
        );
    }

    #[test]
    fn test_updates_envelope_builder() {
        assert_eq!(updates_envelope(&[]), r#"{"ok":true,"result":[]}"#);
        assert_eq!(
            updates_envelope(&[1, 2]),
            r#"{"ok":true,"result":[{"update_id":1},{"update_id":2}]}"#
        );
    }
}
