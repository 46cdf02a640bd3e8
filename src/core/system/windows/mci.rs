use super::helpers::*;
use crate::core::strategy::{MediaCommands, RawCode, RawResult};
use std::ptr::null_mut;
use widestring::WideCStr;
use winapi::shared::minwindef::{BOOL, DWORD, UINT};
use winapi::shared::windef::HWND;
use winapi::um::winnt::{LPCWSTR, LPWSTR};

type MCIERROR = DWORD;

#[link(name = "winmm")]
extern "system" {
    fn mciSendStringW(
        command: LPCWSTR,
        return_string: LPWSTR,
        return_length: UINT,
        callback: HWND,
    ) -> MCIERROR;

    fn mciGetErrorStringW(error: MCIERROR, text: LPWSTR, length: UINT) -> BOOL;
}

/// `mciSendStringW`, synchronous, no notification window.
pub struct MciCommands;

impl MediaCommands for MciCommands {
    fn send(&self, command: &str) -> RawResult<()> {
        let wide_command = to_wide(command)?;
        let result = unsafe { mciSendStringW(wide_command.as_ptr(), null_mut(), 0, null_mut()) };

        tracing::debug!(command, result, "mci command sent");

        if result == 0 {
            Ok(())
        } else {
            Err(result)
        }
    }
}

pub(crate) fn mci_error_str(code: RawCode) -> String {
    // MCI messages are limited to 128 characters
    let mut buffer = [0u16; 256];
    let ok = unsafe { mciGetErrorStringW(code, buffer.as_mut_ptr(), buffer.len() as UINT) };
    if ok == 0 {
        return format!("MCI error {}", code);
    }

    match WideCStr::from_slice_with_nul(&buffer) {
        Ok(s) => s.to_string_lossy(),
        Err(_) => format!("MCI error {}", code),
    }
}
