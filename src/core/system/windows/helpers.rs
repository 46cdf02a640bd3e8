use crate::core::strategy::{RawCode, RawResult};
use std::ptr;
use widestring::{WideCString, WideString};
use winapi::shared::minwindef::HLOCAL;
use winapi::shared::winerror::ERROR_INVALID_NAME;
use winapi::um::errhandlingapi::GetLastError;
use winapi::um::winbase::LocalFree;
use winapi::um::winnt::LPWSTR;

/// Null terminated UTF-16 copy of `s`. Interior NULs can't be passed to the
/// API at all, so they are reported like any other bad name.
pub(crate) fn to_wide(s: &str) -> RawResult<WideCString> {
    WideCString::from_str(s).map_err(|_| ERROR_INVALID_NAME)
}

pub(crate) fn last_error() -> RawCode {
    unsafe { GetLastError() }
}

pub(crate) fn error_str(code: RawCode) -> String {
    use winapi::um::winbase::{
        FormatMessageW, FORMAT_MESSAGE_ALLOCATE_BUFFER, FORMAT_MESSAGE_FROM_SYSTEM,
        FORMAT_MESSAGE_IGNORE_INSERTS,
    };

    let mut buffer: LPWSTR = ptr::null_mut();
    unsafe {
        let strlen = FormatMessageW(
            FORMAT_MESSAGE_FROM_SYSTEM
                | FORMAT_MESSAGE_ALLOCATE_BUFFER
                | FORMAT_MESSAGE_IGNORE_INSERTS,
            ptr::null(),
            code,
            0,
            (&mut buffer as *mut LPWSTR) as LPWSTR,
            0,
            ptr::null_mut(),
        );

        if strlen == 0 || buffer.is_null() {
            return format!("error {}", code);
        }

        let widestr = WideString::from_ptr(buffer, strlen as usize);
        LocalFree(buffer as HLOCAL);
        widestr.to_string_lossy().trim().to_owned()
    }
}
