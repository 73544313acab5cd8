use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The single persisted aggregate.
///
/// Every field defaults on its own so a document written by an older build
/// (or missing a key) still loads. A field of the wrong type makes the whole
/// document unreadable, which the store treats the same as a missing file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// chat-id -> normalized username, in registration order
    #[serde(default)]
    pub users: IndexMap<String, String>,
    #[serde(default)]
    pub cookie: String,
    /// Opaque game records, replaced wholesale.
    #[serde(default)]
    pub all_games: Vec<Value>,
    /// Completed game ids. Never holds the same value twice.
    #[serde(default)]
    pub done_games: Vec<Value>,
}

impl Document {
    /// Upsert a user. The username is expected to be normalized already.
    pub fn set_user(&mut self, chat_id: String, username: String) {
        self.users.insert(chat_id, username);
    }

    /// Append `game_id` unless an equal value is already present.
    /// Returns true if the sequence changed.
    ///
    /// Equality is exact JSON equality: `1` and `"1"` are different ids.
    pub fn add_done_game(&mut self, game_id: Value) -> bool {
        if self.done_games.contains(&game_id) {
            return false;
        }
        self.done_games.push(game_id);
        true
    }
}

/// Trim and lowercase a username. Returns `None` if nothing is left.
pub fn normalize_username(raw: &str) -> Option<String> {
    let name = raw.trim().to_lowercase();
    if name.is_empty() { None } else { Some(name) }
}

/// JSON truthiness: null, false, zero, "" and empty containers are falsy.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_document_is_empty() {
        let doc = Document::default();
        assert!(doc.users.is_empty());
        assert_eq!(doc.cookie, "");
        assert!(doc.all_games.is_empty());
        assert!(doc.done_games.is_empty());
    }

    #[test]
    fn missing_fields_default_individually() {
        let doc: Document = serde_json::from_str(r#"{"cookie": "abc"}"#).unwrap();
        assert_eq!(doc.cookie, "abc");
        assert!(doc.users.is_empty());
        assert!(doc.done_games.is_empty());
    }

    #[test]
    fn add_done_game_is_idempotent() {
        let mut doc = Document::default();
        assert!(doc.add_done_game(json!("g1")));
        assert!(!doc.add_done_game(json!("g1")));
        assert_eq!(doc.done_games, vec![json!("g1")]);
    }

    #[test]
    fn repeated_add_keeps_order() {
        let mut doc = Document {
            done_games: vec![json!("a"), json!("b")],
            ..Default::default()
        };
        assert!(!doc.add_done_game(json!("a")));
        assert_eq!(doc.done_games, vec![json!("a"), json!("b")]);

        assert!(doc.add_done_game(json!("c")));
        assert_eq!(doc.done_games, vec![json!("a"), json!("b"), json!("c")]);
    }

    #[test]
    fn number_and_string_ids_are_distinct() {
        let mut doc = Document::default();
        assert!(doc.add_done_game(json!(1)));
        assert!(doc.add_done_game(json!("1")));
        assert_eq!(doc.done_games.len(), 2);
    }

    #[test]
    fn set_user_overwrites_existing_entry() {
        let mut doc = Document::default();
        doc.set_user("123".into(), "alice".into());
        doc.set_user("123".into(), "bob".into());
        assert_eq!(doc.users.len(), 1);
        assert_eq!(doc.users["123"], "bob");
    }

    #[test]
    fn users_keep_registration_order() {
        let mut doc = Document::default();
        doc.set_user("9".into(), "zed".into());
        doc.set_user("1".into(), "amy".into());
        doc.set_user("9".into(), "zoe".into());

        let users: Vec<_> = doc.users.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(users, vec![("9", "zoe"), ("1", "amy")]);

        let text = serde_json::to_string(&doc).unwrap();
        assert!(text.starts_with(r#"{"users":{"9":"zoe","1":"amy"}"#));
    }

    #[test]
    fn username_is_trimmed_and_lowercased() {
        assert_eq!(normalize_username("  Alice ").as_deref(), Some("alice"));
        assert_eq!(normalize_username("   "), None);
        assert_eq!(normalize_username(""), None);
    }

    #[test]
    fn falsy_values() {
        for v in [json!(null), json!(false), json!(0), json!(0.0), json!(""), json!([]), json!({})] {
            assert!(is_falsy(&v), "{v} should be falsy");
        }
        for v in [json!(true), json!(7), json!("g1"), json!([0]), json!({"id": 1})] {
            assert!(!is_falsy(&v), "{v} should be truthy");
        }
    }
}
