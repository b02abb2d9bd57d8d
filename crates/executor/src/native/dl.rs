//! Shared-library loading without external crates.
//!
//! Wraps `dlopen`/`dlsym` on Unix and `LoadLibraryA`/`GetProcAddress` on
//! Windows. Used to load the engine's C API (`libZeonCAPI`).

use std::ffi::{c_char, c_void, CStr};

use crate::{Error, Result};

/// An open shared library. Closed on drop.
pub(crate) struct DynLib {
    handle: *mut c_void,
}

// SAFETY: the handle is only passed back to the loader, which is thread-safe.
unsafe impl Send for DynLib {}
unsafe impl Sync for DynLib {}

impl DynLib {
    /// Open the library at `name` (a path or a loader search name).
    pub(crate) fn open(name: &CStr) -> Result<Self> {
        #[cfg(unix)]
        {
            // SAFETY: name is NUL-terminated; RTLD_NOW resolves every symbol up front.
            let handle = unsafe { dlopen(name.as_ptr(), RTLD_NOW | RTLD_LOCAL) };
            if handle.is_null() {
                return Err(Error::Connection {
                    reason: format!("cannot load {:?}: {}", name, last_dl_error()),
                });
            }
            Ok(Self { handle })
        }

        #[cfg(windows)]
        {
            // SAFETY: name is NUL-terminated.
            let handle = unsafe { LoadLibraryA(name.as_ptr()) };
            if handle.is_null() {
                return Err(Error::Connection {
                    reason: format!("LoadLibraryA failed for {:?}", name),
                });
            }
            Ok(Self { handle })
        }

        #[cfg(not(any(unix, windows)))]
        {
            Err(Error::Connection {
                reason: format!("cannot load {:?}: unsupported platform", name),
            })
        }
    }

    /// Resolve `name` to a non-null symbol address.
    ///
    /// # Safety
    ///
    /// The caller must cast the pointer to the symbol's real signature.
    pub(crate) unsafe fn sym(&self, name: &CStr) -> Result<*mut c_void> {
        #[cfg(unix)]
        let ptr = {
            dlerror();
            dlsym(self.handle, name.as_ptr())
        };

        #[cfg(windows)]
        let ptr = GetProcAddress(self.handle, name.as_ptr());

        #[cfg(not(any(unix, windows)))]
        let ptr: *mut c_void = std::ptr::null_mut();

        if ptr.is_null() {
            return Err(Error::Connection {
                reason: format!("missing symbol {:?}", name),
            });
        }
        Ok(ptr)
    }
}

impl Drop for DynLib {
    fn drop(&mut self) {
        if self.handle.is_null() {
            return;
        }

        #[cfg(unix)]
        unsafe {
            dlclose(self.handle);
        }

        #[cfg(windows)]
        unsafe {
            FreeLibrary(self.handle);
        }
    }
}

#[cfg(unix)]
fn last_dl_error() -> String {
    // SAFETY: dlerror returns null or a NUL-terminated, thread-local message.
    let err = unsafe { dlerror() };
    if err.is_null() {
        "unknown dlopen error".to_string()
    } else {
        unsafe { CStr::from_ptr(err) }.to_string_lossy().into_owned()
    }
}

#[cfg(unix)]
const RTLD_NOW: i32 = 2;
#[cfg(unix)]
const RTLD_LOCAL: i32 = 0;

#[cfg(unix)]
extern "C" {
    fn dlopen(filename: *const c_char, flags: i32) -> *mut c_void;
    fn dlsym(handle: *mut c_void, symbol: *const c_char) -> *mut c_void;
    fn dlclose(handle: *mut c_void) -> i32;
    fn dlerror() -> *const c_char;
}

#[cfg(windows)]
extern "system" {
    fn LoadLibraryA(name: *const c_char) -> *mut c_void;
    fn GetProcAddress(module: *mut c_void, name: *const c_char) -> *mut c_void;
    fn FreeLibrary(module: *mut c_void) -> i32;
}
