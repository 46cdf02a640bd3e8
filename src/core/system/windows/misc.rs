use std::mem;
use std::ptr::null_mut;
use winapi::shared::minwindef::DWORD;
use winapi::shared::ntdef::PVOID;
use winapi::um::handleapi::CloseHandle;
use winapi::um::processthreadsapi::{GetCurrentProcess, OpenProcessToken};
use winapi::um::securitybaseapi::GetTokenInformation;
use winapi::um::winnt::{TokenElevation, HANDLE, TOKEN_ELEVATION, TOKEN_QUERY};

struct ProcessToken(HANDLE);

impl ProcessToken {
    fn current() -> Option<ProcessToken> {
        let mut handle: HANDLE = null_mut();
        if unsafe { OpenProcessToken(GetCurrentProcess(), TOKEN_QUERY, &mut handle) } == 0 {
            return None;
        }
        Some(ProcessToken(handle))
    }

    fn elevation(&self) -> Option<TOKEN_ELEVATION> {
        let mut elevation: TOKEN_ELEVATION = unsafe { mem::zeroed() };
        let size = mem::size_of::<TOKEN_ELEVATION>() as DWORD;
        let mut returned = size;
        let ok = unsafe {
            GetTokenInformation(
                self.0,
                TokenElevation,
                &mut elevation as *mut _ as PVOID,
                size,
                &mut returned,
            )
        };
        if ok == 0 {
            None
        } else {
            Some(elevation)
        }
    }
}

impl Drop for ProcessToken {
    fn drop(&mut self) {
        unsafe {
            CloseHandle(self.0);
        }
    }
}

/// Storage IOCTLs on optical drives are commonly denied to non-elevated
/// processes.
pub fn is_elevated() -> bool {
    ProcessToken::current()
        .and_then(|t| t.elevation())
        .map(|e| e.TokenIsElevated != 0)
        .unwrap_or(false)
}
