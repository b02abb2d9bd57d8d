//! End-to-end sessions against the in-memory engine.

use serde::Serialize;
use serde_json::json;
use zeondb::{Account, KeyPath, Output, Permission};

use crate::common::FakeEngine;

#[derive(Serialize, Clone)]
struct Blog {
    title: String,
    author: String,
    tags: Vec<String>,
}

fn blog() -> Blog {
    Blog {
        title: "blog".into(),
        author: "amogus".into(),
        tags: "this will kill my pc for sure"
            .split(' ')
            .map(String::from)
            .collect(),
    }
}

#[test]
fn login_switches_engine_to_json() {
    let engine = FakeEngine::new();
    let session = engine.session();

    assert!(session.login("admin", "admin").unwrap());
    assert_eq!(engine.option("format"), Some(json!("JSON")));
    assert_eq!(engine.log(), vec![r#"options set format "JSON""#]);
}

#[test]
fn failed_login_exposes_engine_error() {
    let engine = FakeEngine::new();
    let session = engine.session();

    assert!(!session.login("admin", "nope").unwrap());
    assert_eq!(session.last_error().unwrap(), "invalid credentials");
    assert!(engine.log().is_empty());
}

#[test]
fn set_then_get_round_trips_through_engine() {
    let engine = FakeEngine::new();
    let session = engine.session();
    session.login("admin", "admin").unwrap();

    let doc = KeyPath::new("users").with_branch("theo");
    let data = vec![blog(); 4];

    assert_eq!(session.set(&doc, &data).unwrap(), Output::Ack);
    let value = session.get(&doc).unwrap().into_value().unwrap();

    assert_eq!(value, serde_json::to_value(&data).unwrap());
    assert_eq!(value[0]["tags"][2], json!("kill"));
}

#[test]
fn options_print_returns_document() {
    let engine = FakeEngine::new();
    let session = engine.session();
    session.login("admin", "admin").unwrap();

    let out = session.config(None, None).unwrap();
    assert_eq!(out, Output::Value(json!({"format": "JSON"})));
}

#[test]
fn chained_keys_and_links() {
    let engine = FakeEngine::new();
    let session = engine.session();
    session.login("admin", "admin").unwrap();

    session
        .set(&KeyPath::new("hello").chain(KeyPath::new("world")), "hey")
        .unwrap();
    session
        .link(
            &KeyPath::new("hello").chain(KeyPath::new("svet")),
            &KeyPath::new("$").chain(KeyPath::new("world")),
        )
        .unwrap();

    let out = session
        .get(&KeyPath::new("hello").chain(KeyPath::new("world")))
        .unwrap();
    assert_eq!(out, Output::Value(json!("hey")));
    assert!(engine.log().contains(&"link hello.svet $.world".to_string()));
}

#[test]
fn accounts_and_branches() {
    let engine = FakeEngine::new();
    let session = engine.session();
    session.login("admin", "admin").unwrap();

    let theo = Account::new("theo");
    assert_eq!(session.auth(&theo.create("paris")).unwrap(), Output::Ack);
    assert_eq!(session.auth(&theo.promote()).unwrap(), Output::Ack);

    session.set(&KeyPath::new("users"), &json!([])).unwrap();
    session
        .set(&KeyPath::new("users").with_branch("theo"), &json!([1]))
        .unwrap();

    let branches = session.branches(&KeyPath::new("users")).unwrap();
    assert_eq!(branches, Output::Value(json!(["theo"])));

    assert_eq!(
        session.merge(&KeyPath::new("users"), "default", "theo").unwrap(),
        Output::Ack
    );

    // The new account can log in on its own handle
    let other = engine.session();
    assert!(other.login("theo", "paris").unwrap());
}

#[test]
fn permission_commands_route_by_identity() {
    let engine = FakeEngine::new();
    let session = engine.session();
    session.login("admin", "admin").unwrap();

    let key = KeyPath::new("users");
    session.auth(&Account::new("admin").get_perms(key.clone())).unwrap();
    session
        .auth(&Account::new("theo").set_perms(key, Permission::read_only()))
        .unwrap();

    let log = engine.log();
    assert_eq!(log[1], "auth get users");
    assert_eq!(
        log[2],
        "auth set users {can_write: false, can_read: true } to theo"
    );
}

#[test]
fn templates_per_branch() {
    let engine = FakeEngine::new();
    let session = engine.session();
    session.login("admin", "admin").unwrap();

    let company = json!({"name": "", "employees": [], "projects": []});
    session.new_template("company", &company).unwrap();
    assert_eq!(
        session.template("company").unwrap(),
        Output::Value(company.clone())
    );

    session.set(&KeyPath::new("companies"), &json!({})).unwrap();
    for org in ["Oven", "Deno"] {
        session
            .use_template("company", &KeyPath::new("companies").with_branch(org))
            .unwrap();
    }

    let orgs = session
        .branches(&KeyPath::new("companies"))
        .unwrap()
        .into_value()
        .unwrap();
    let orgs: Vec<String> = serde_json::from_value(orgs).unwrap();
    assert_eq!(orgs, ["Deno", "Oven"]);

    for org in &orgs {
        let out = session
            .get(&KeyPath::new("companies").with_branch(org.as_str()))
            .unwrap();
        assert_eq!(out, Output::Value(company.clone()));
    }
}

#[test]
fn array_mutation() {
    let engine = FakeEngine::new();
    let session = engine.session();
    session.login("admin", "admin").unwrap();

    let list = KeyPath::new("list");
    session.array_push(&list, "b").unwrap();
    session.array_insert(&list, 0, "a").unwrap();
    session.array_push(&list, "c").unwrap();
    session.array_erase(&list, 1).unwrap();

    assert_eq!(session.array_length(&list).unwrap(), Output::Value(json!(2)));
    assert_eq!(
        session.get(&list).unwrap(),
        Output::Value(json!(["a", "c"]))
    );
}

#[test]
fn independent_sessions_run_in_parallel() {
    let engine = FakeEngine::new();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let engine = engine.clone();
            std::thread::spawn(move || {
                let session = engine.session();
                session.login("admin", "admin").unwrap();
                let key = KeyPath::new(format!("worker{}", i));
                for n in 0..10 {
                    session.array_push(&key, &n).unwrap();
                }
                session.array_length(&key).unwrap()
            })
        })
        .collect();

    for h in handles {
        assert_eq!(h.join().unwrap(), Output::Value(json!(10)));
    }
}
