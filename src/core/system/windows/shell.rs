use super::helpers::*;
use crate::core::strategy::{RawCode, RawResult, ShellService};
use std::ptr::null_mut;
use winapi::um::shellapi::ShellExecuteW;
use winapi::um::winuser::SW_HIDE;

/// The shell's `eject` verb on a drive root, as offered in Explorer.
pub struct ShellEject;

impl ShellService for ShellEject {
    fn eject(&self, root_path: &str) -> RawResult<()> {
        let verb = to_wide("eject")?;
        let file = to_wide(root_path)?;

        let instance = unsafe {
            ShellExecuteW(
                null_mut(),
                verb.as_ptr(),
                file.as_ptr(),
                null_mut(),
                null_mut(),
                SW_HIDE,
            )
        };

        // values up to 32 are error codes
        let code = instance as usize;
        tracing::debug!(root_path, code, "shell eject invoked");
        if code > 32 {
            Ok(())
        } else {
            Err(code as RawCode)
        }
    }
}
