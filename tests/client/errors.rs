//! Error surfaces: every failure comes back as a typed `Err`.

use serde_json::json;
use zeondb::{Account, Command, Connection, Error, KeyPath, Result, Session};

use crate::common::FakeEngine;

#[test]
fn engine_failure_carries_message() {
    let engine = FakeEngine::new();
    let session = engine.session();
    session.login("admin", "admin").unwrap();

    let err = session.get(&KeyPath::new("missing")).unwrap_err();
    assert_eq!(
        err,
        Error::Engine {
            message: "key missing not found".into()
        }
    );
}

#[test]
fn commands_before_login_fail_in_engine() {
    let engine = FakeEngine::new();
    let session = engine.session();

    let err = session.get(&KeyPath::new("users")).unwrap_err();
    assert!(matches!(err, Error::Engine { .. }));
}

#[test]
fn format_validation_never_reaches_engine() {
    let engine = FakeEngine::new();
    let session = engine.session();
    session.login("admin", "admin").unwrap();
    let before = engine.log().len();

    let err = session.config(Some("format"), Some(json!("XML"))).unwrap_err();
    assert_eq!(err.to_string(), "invalid input: Format must be JSON");
    assert!(err.is_client_side());
    assert_eq!(engine.log().len(), before);
}

#[test]
fn negative_index_rejected_before_engine() {
    let key = KeyPath::new("list").with_index(1);
    let err: Error = key.try_with_index(-1).unwrap_err().into();

    assert!(matches!(err, Error::InvalidKey { .. }));
    assert_eq!(key.render(), "list[1]");
}

#[test]
fn identity_required_for_permission_reads() {
    let engine = FakeEngine::new();
    let session = engine.session();

    let err = session
        .auth(&Account::new("theo").get_perms(KeyPath::new("users")))
        .unwrap_err();
    assert_eq!(err, Error::NotAuthenticated);
    assert!(engine.log().is_empty());
}

#[test]
fn raw_command_interface_matches_typed_api() {
    let engine = FakeEngine::new();
    let session = engine.session();
    session.login("admin", "admin").unwrap();

    session
        .execute(Command::Set {
            key: KeyPath::new("k"),
            value: json!({"a": 1}),
        })
        .unwrap();
    assert_eq!(
        session.execute(Command::Get { key: KeyPath::new("k") }).unwrap(),
        session.get(&KeyPath::new("k")).unwrap()
    );
}

/// Engine that claims success but answers with plain text.
struct ChattyConnection;

impl Connection for ChattyConnection {
    fn is_up(&self) -> bool {
        true
    }

    fn authenticate(&mut self, _username: &str, _password: &str) -> Result<bool> {
        Ok(true)
    }

    fn execute(&mut self, _command: &str) -> Result<bool> {
        Ok(true)
    }

    fn last_error(&self) -> Result<String> {
        Ok(String::new())
    }

    fn last_output(&self) -> Result<String> {
        Ok("done!".into())
    }
}

#[test]
fn unreadable_success_output_is_decode_error() {
    let session = Session::new(ChattyConnection);

    // The format follow-up also gets "done!", which login swallows.
    assert!(session.login("admin", "admin").unwrap());

    let err = session.get(&KeyPath::new("k")).unwrap_err();
    assert_eq!(
        err,
        Error::Decode {
            output: "done!".into(),
            reason: serde_json::from_str::<serde_json::Value>("done!")
                .unwrap_err()
                .to_string(),
        }
    );
}

#[test]
fn boxed_connections_work() {
    let engine = FakeEngine::new();
    let conn: Box<dyn Connection> = Box::new(engine.connect());
    let session = Session::new(conn);

    assert!(session.login("admin", "admin").unwrap());
    assert!(session.is_up());
}
