//! Shared test utilities for the client integration suite.
//!
//! [`FakeEngine`] is an in-memory stand-in for the engine behind the
//! connection primitive. It understands enough of the command grammar to run
//! realistic sessions end to end and keeps the same single error/output slot
//! per handle as the real engine.

#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::{json, Value};
use zeondb::{Connection, Result, Session};

/// Engine state, shared by every handle created from one [`FakeEngine`].
#[derive(Default)]
pub struct EngineState {
    users: HashMap<String, String>,
    admins: Vec<String>,
    data: BTreeMap<String, Value>,
    templates: HashMap<String, Value>,
    options: BTreeMap<String, Value>,
    pub log: Vec<String>,
}

/// Factory for connections to one shared in-memory engine.
#[derive(Clone)]
pub struct FakeEngine {
    state: Arc<Mutex<EngineState>>,
}

impl FakeEngine {
    /// Engine with a single `admin`/`admin` account.
    pub fn new() -> Self {
        let mut state = EngineState::default();
        state.users.insert("admin".into(), "admin".into());
        state.admins.push("admin".into());
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    pub fn connect(&self) -> FakeConnection {
        FakeConnection {
            state: Arc::clone(&self.state),
            user: None,
            error: String::new(),
            output: String::new(),
        }
    }

    pub fn session(&self) -> Session<FakeConnection> {
        Session::new(self.connect())
    }

    /// Every command line received so far, in order.
    pub fn log(&self) -> Vec<String> {
        self.state.lock().log.clone()
    }

    pub fn option(&self, key: &str) -> Option<Value> {
        self.state.lock().options.get(key).cloned()
    }
}

/// One handle on a [`FakeEngine`].
pub struct FakeConnection {
    state: Arc<Mutex<EngineState>>,
    user: Option<String>,
    error: String,
    output: String,
}

type Reply = std::result::Result<String, String>;

impl FakeConnection {
    fn run(&mut self, line: &str) -> Reply {
        let mut state = self.state.lock();
        state.log.push(line.to_string());

        if self.user.is_none() {
            return Err("not logged in".into());
        }

        let (verb, rest) = split(line);
        match verb {
            "set" => {
                let (key, value) = split(rest);
                state.data.insert(key.to_string(), parse(value)?);
                Ok("OK".into())
            }
            "get" => state
                .data
                .get(rest)
                .map(Value::to_string)
                .ok_or_else(|| format!("key {} not found", rest)),
            "delete" => state
                .data
                .remove(rest)
                .map(|_| "OK".to_string())
                .ok_or_else(|| format!("key {} not found", rest)),
            "link" => {
                let (key, target) = split(rest);
                let value = json!({ "$link": target });
                state.data.insert(key.to_string(), value);
                Ok("OK".into())
            }
            "branches" => branches(&mut state, rest),
            "template" => template(&mut state, rest),
            "options" => options(&mut state, rest),
            "array" => array(&mut state, rest),
            "auth" => auth(&mut state, rest),
            other => Err(format!("unknown command {}", other)),
        }
    }
}

impl Connection for FakeConnection {
    fn is_up(&self) -> bool {
        true
    }

    fn authenticate(&mut self, username: &str, password: &str) -> Result<bool> {
        let ok = self.state.lock().users.get(username).map(String::as_str) == Some(password);
        if ok {
            self.user = Some(username.to_string());
        } else {
            self.error = "invalid credentials".into();
        }
        Ok(ok)
    }

    fn execute(&mut self, command: &str) -> Result<bool> {
        match self.run(command) {
            Ok(output) => {
                self.output = output;
                Ok(true)
            }
            Err(error) => {
                self.error = error;
                Ok(false)
            }
        }
    }

    fn last_error(&self) -> Result<String> {
        Ok(self.error.clone())
    }

    fn last_output(&self) -> Result<String> {
        Ok(self.output.clone())
    }
}

fn split(s: &str) -> (&str, &str) {
    s.split_once(' ').unwrap_or((s, ""))
}

fn parse(s: &str) -> std::result::Result<Value, String> {
    serde_json::from_str(s).map_err(|e| format!("invalid JSON: {}", e))
}

fn branches(state: &mut EngineState, rest: &str) -> Reply {
    let (op, args) = split(rest);
    match op {
        "get" => {
            let prefix = format!("{}@", args);
            let names: Vec<&str> = state
                .data
                .keys()
                .filter_map(|k| k.strip_prefix(&prefix))
                .collect();
            Ok(json!(names).to_string())
        }
        "merge" => {
            let mut parts = args.split(' ');
            let key = parts.next().unwrap_or_default();
            if !state.data.contains_key(key) {
                return Err(format!("key {} not found", key));
            }
            Ok("OK".into())
        }
        other => Err(format!("unknown branches op {}", other)),
    }
}

fn template(state: &mut EngineState, rest: &str) -> Reply {
    let (op, args) = split(rest);
    let (name, arg) = split(args);
    match op {
        "create" => {
            state.templates.insert(name.to_string(), parse(arg)?);
            Ok("OK".into())
        }
        "get" => state
            .templates
            .get(name)
            .map(Value::to_string)
            .ok_or_else(|| format!("template {} not found", name)),
        "set" => {
            let value = state
                .templates
                .get(name)
                .cloned()
                .ok_or_else(|| format!("template {} not found", name))?;
            state.data.insert(arg.to_string(), value);
            Ok("OK".into())
        }
        other => Err(format!("unknown template op {}", other)),
    }
}

fn options(state: &mut EngineState, rest: &str) -> Reply {
    let (op, args) = split(rest);
    match op {
        "set" => {
            let (key, value) = split(args);
            state.options.insert(key.to_string(), parse(value)?);
            Ok("OK".into())
        }
        "get" => state
            .options
            .get(args)
            .map(Value::to_string)
            .ok_or_else(|| format!("option {} not set", args)),
        "print" => Ok(json!(state.options).to_string()),
        other => Err(format!("unknown options op {}", other)),
    }
}

fn array(state: &mut EngineState, rest: &str) -> Reply {
    let (op, args) = split(rest);
    let (key, arg) = split(args);
    let slot = state
        .data
        .entry(key.to_string())
        .or_insert_with(|| json!([]));
    let items = slot
        .as_array_mut()
        .ok_or_else(|| format!("{} is not an array", key))?;
    match op {
        "push" => {
            items.push(parse(arg)?);
            Ok("OK".into())
        }
        "insert" => {
            let (index, value) = split(arg);
            let index: usize = index.parse().map_err(|_| "bad index".to_string())?;
            if index > items.len() {
                return Err("index out of range".into());
            }
            items.insert(index, parse(value)?);
            Ok("OK".into())
        }
        "erase" => {
            let index: usize = arg.parse().map_err(|_| "bad index".to_string())?;
            if index >= items.len() {
                return Err("index out of range".into());
            }
            items.remove(index);
            Ok("OK".into())
        }
        "length" => Ok(items.len().to_string()),
        other => Err(format!("unknown array op {}", other)),
    }
}

fn auth(state: &mut EngineState, rest: &str) -> Reply {
    let (op, args) = split(rest);
    match op {
        "create" => {
            let (user, rest) = split(args);
            let (password, _perms) = split(rest);
            state.users.insert(user.to_string(), password.to_string());
            Ok("OK".into())
        }
        "promote" => {
            if !state.users.contains_key(args) {
                return Err(format!("user {} not found", args));
            }
            state.admins.push(args.to_string());
            Ok("OK".into())
        }
        "demote" => {
            state.admins.retain(|a| a != args);
            Ok("OK".into())
        }
        "delete" => state
            .users
            .remove(args)
            .map(|_| "OK".to_string())
            .ok_or_else(|| format!("user {} not found", args)),
        "get" => Ok(json!({"can_read": true, "can_write": true}).to_string()),
        "set" => Ok("OK".into()),
        other => Err(format!("unknown auth op {}", other)),
    }
}
