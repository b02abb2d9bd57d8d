//! [`Connection`] backed by the engine's C API.
//!
//! The engine ships a shared library exporting `ZeonAPI_Connection_*`
//! functions. [`ZeonLibrary`] loads it once; every [`NativeConnection`] holds
//! an `Arc` to the library so the code stays mapped for as long as any
//! handle is alive. Independent connections share nothing else.
//!
//! All strings cross the boundary NUL-terminated. Arguments containing an
//! interior NUL are rejected with `InvalidInput` instead of being truncated.

mod dl;

use std::ffi::{c_char, c_void, CStr, CString};
use std::path::Path;
use std::ptr::NonNull;
use std::sync::Arc;

use tracing::{debug, info};

use self::dl::DynLib;
use crate::{Connection, Error, Result};

type CreateFn = unsafe extern "C" fn(*const c_char, u16) -> *mut c_void;
type DestroyFn = unsafe extern "C" fn(*mut c_void);
type IsUpFn = unsafe extern "C" fn(*mut c_void) -> i32;
type GetStrFn = unsafe extern "C" fn(*mut c_void) -> *const c_char;
type AuthFn = unsafe extern "C" fn(*mut c_void, *const c_char, *const c_char) -> i32;
type ExecFn = unsafe extern "C" fn(*mut c_void, *const c_char) -> i32;

/// The loaded engine client library.
pub struct ZeonLibrary {
    create: CreateFn,
    destroy: DestroyFn,
    is_up: IsUpFn,
    get_error: GetStrFn,
    get_buffer: GetStrFn,
    auth: AuthFn,
    exec: ExecFn,
    // Dropped last: the function pointers above point into it.
    _lib: DynLib,
}

impl ZeonLibrary {
    /// Load the library at `path` and resolve every connection symbol.
    pub fn open(path: impl AsRef<Path>) -> Result<Arc<Self>> {
        let path = path.as_ref();
        let name = path.to_str().ok_or_else(|| Error::Connection {
            reason: format!("library path {} is not valid UTF-8", path.display()),
        })?;
        let lib = DynLib::open(&c_string(name)?)?;

        // SAFETY: each symbol is cast to the signature the engine's C API declares.
        let library = unsafe {
            Self {
                create: std::mem::transmute::<*mut c_void, CreateFn>(
                    lib.sym(c"ZeonAPI_Connection_create")?,
                ),
                destroy: std::mem::transmute::<*mut c_void, DestroyFn>(
                    lib.sym(c"ZeonAPI_Connection_destroy")?,
                ),
                is_up: std::mem::transmute::<*mut c_void, IsUpFn>(
                    lib.sym(c"ZeonAPI_Connection_is_up")?,
                ),
                get_error: std::mem::transmute::<*mut c_void, GetStrFn>(
                    lib.sym(c"ZeonAPI_Connection_get_error")?,
                ),
                get_buffer: std::mem::transmute::<*mut c_void, GetStrFn>(
                    lib.sym(c"ZeonAPI_Connection_get_buffer")?,
                ),
                auth: std::mem::transmute::<*mut c_void, AuthFn>(
                    lib.sym(c"ZeonAPI_Connection_auth")?,
                ),
                exec: std::mem::transmute::<*mut c_void, ExecFn>(
                    lib.sym(c"ZeonAPI_Connection_exec")?,
                ),
                _lib: lib,
            }
        };

        info!(target: "zeondb::native", path = %path.display(), "Loaded engine library");
        Ok(Arc::new(library))
    }

    /// Create a new handle connected to `address:port`.
    pub fn connect(self: &Arc<Self>, address: &str, port: u16) -> Result<NativeConnection> {
        let addr = c_string(address)?;
        // SAFETY: addr is NUL-terminated and outlives the call.
        let raw = unsafe { (self.create)(addr.as_ptr(), port) };
        let handle = NonNull::new(raw).ok_or_else(|| Error::Connection {
            reason: format!("engine returned no handle for {}:{}", address, port),
        })?;

        debug!(target: "zeondb::native", address, port, "Created connection handle");
        Ok(NativeConnection {
            lib: Arc::clone(self),
            handle,
        })
    }
}

/// A connection handle created by [`ZeonLibrary::connect`].
///
/// The handle is destroyed exactly once, when this value is dropped.
pub struct NativeConnection {
    lib: Arc<ZeonLibrary>,
    handle: NonNull<c_void>,
}

// SAFETY: the handle is owned exclusively by this value and every use goes
// through &self / &mut self, which the Session serializes behind a mutex.
unsafe impl Send for NativeConnection {}

impl NativeConnection {
    fn read_slot(&self, getter: GetStrFn) -> Vec<u8> {
        // SAFETY: the handle is live; the engine returns null or a
        // NUL-terminated string valid until the next call on this handle.
        unsafe {
            let ptr = getter(self.handle.as_ptr());
            if ptr.is_null() {
                Vec::new()
            } else {
                CStr::from_ptr(ptr).to_bytes().to_vec()
            }
        }
    }
}

impl Connection for NativeConnection {
    fn is_up(&self) -> bool {
        // SAFETY: the handle is live until drop.
        unsafe { (self.lib.is_up)(self.handle.as_ptr()) == 1 }
    }

    fn authenticate(&mut self, username: &str, password: &str) -> Result<bool> {
        let user = c_string(username)?;
        let pass = c_string(password)?;
        // SAFETY: both strings are NUL-terminated and outlive the call.
        let ok = unsafe { (self.lib.auth)(self.handle.as_ptr(), user.as_ptr(), pass.as_ptr()) };
        Ok(ok == 1)
    }

    fn execute(&mut self, command: &str) -> Result<bool> {
        let line = c_string(command)?;
        // SAFETY: line is NUL-terminated and outlives the call.
        let ok = unsafe { (self.lib.exec)(self.handle.as_ptr(), line.as_ptr()) };
        Ok(ok == 1)
    }

    fn last_error(&self) -> Result<String> {
        Ok(String::from_utf8_lossy(&self.read_slot(self.lib.get_error)).into_owned())
    }

    fn last_output(&self) -> Result<String> {
        output_text(self.read_slot(self.lib.get_buffer))
    }
}

impl Drop for NativeConnection {
    fn drop(&mut self) {
        // SAFETY: drop runs once; the handle is never used afterwards.
        unsafe { (self.lib.destroy)(self.handle.as_ptr()) };
        debug!(target: "zeondb::native", "Destroyed connection handle");
    }
}

/// Output slot bytes as text. Invalid UTF-8 is a protocol violation.
fn output_text(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| Error::Decode {
        output: String::from_utf8_lossy(e.as_bytes()).into_owned(),
        reason: "output is not valid UTF-8".to_string(),
    })
}

fn c_string(s: &str) -> Result<CString> {
    CString::new(s).map_err(|_| Error::InvalidInput {
        reason: "string argument contains a NUL byte".to_string(),
    })
}
