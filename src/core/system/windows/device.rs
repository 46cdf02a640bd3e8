use super::helpers::*;
use crate::core::strategy::{ControlRequest, DeviceControl, RawResult};
use std::ptr::null_mut;
use winapi::shared::minwindef::DWORD;
use winapi::um::fileapi::{CreateFileW, OPEN_EXISTING};
use winapi::um::handleapi::{CloseHandle, INVALID_HANDLE_VALUE};
use winapi::um::ioapiset::DeviceIoControl;
use winapi::um::winioctl::{IOCTL_STORAGE_EJECT_MEDIA, IOCTL_STORAGE_LOAD_MEDIA};
use winapi::um::winnt::{FILE_SHARE_READ, FILE_SHARE_WRITE, GENERIC_READ, HANDLE};

/// Open volume handle, closed on drop.
pub struct DeviceFile {
    handle: HANDLE,
}

impl Drop for DeviceFile {
    fn drop(&mut self) {
        if !self.handle.is_null() {
            unsafe {
                let _ = CloseHandle(self.handle);
            }
        }
    }
}

/// Storage class IOCTLs against `\\.\X:`.
pub struct DeviceIo;

impl DeviceControl for DeviceIo {
    type Handle = DeviceFile;

    fn acquire(&self, path: &str) -> RawResult<DeviceFile> {
        let wide_path = to_wide(path)?;

        let handle = unsafe {
            CreateFileW(
                wide_path.as_ptr(),
                GENERIC_READ,
                FILE_SHARE_READ | FILE_SHARE_WRITE,
                null_mut(),
                OPEN_EXISTING,
                0,
                null_mut(),
            )
        };

        if handle == INVALID_HANDLE_VALUE {
            let code = last_error();
            tracing::debug!(path, code, "cannot open device: {}", error_str(code));
            return Err(code);
        }

        Ok(DeviceFile { handle })
    }

    fn request(&self, device: &DeviceFile, request: ControlRequest) -> RawResult<()> {
        let control_code = match request {
            ControlRequest::EjectMedia => IOCTL_STORAGE_EJECT_MEDIA,
            ControlRequest::LoadMedia => IOCTL_STORAGE_LOAD_MEDIA,
        };

        let mut returned: DWORD = 0;
        let ok = unsafe {
            DeviceIoControl(
                device.handle,
                control_code,
                null_mut(),
                0,
                null_mut(),
                0,
                &mut returned,
                null_mut(),
            )
        };

        if ok == 0 {
            let code = last_error();
            tracing::debug!(?request, code, "device control failed: {}", error_str(code));
            return Err(code);
        }

        Ok(())
    }
}
