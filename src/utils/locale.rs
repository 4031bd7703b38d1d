//! Process locale handling

use crate::error::{ClientError, Result};
use std::ffi::CString;
use tracing::{debug, instrument};

/// Switch the whole process to `name` (as `setlocale(LC_ALL, name)`)
#[instrument]
pub fn set_locale(name: &str) -> Result<()> {
    let c_name = CString::new(name).map_err(|_| ClientError::locale_unavailable(name))?;

    // SAFETY: `c_name` is a valid NUL-terminated string that outlives the
    // call, and the client only ever runs on one thread.
    let result = unsafe { libc::setlocale(libc::LC_ALL, c_name.as_ptr()) };

    if result.is_null() {
        return Err(ClientError::locale_unavailable(name));
    }
    debug!("Locale set to {}", name);
    Ok(())
}
