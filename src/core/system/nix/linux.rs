use crate::core::strategy::*;
use ::nix::*;
use std::fs::{File, OpenOptions};
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::io::AsRawFd;

use super::ProcessRunner;

ioctl_none!(cdrom_eject, 0x53, 0x09); // CDROMEJECT
ioctl_none!(cdrom_close_tray, 0x53, 0x19); // CDROMCLOSETRAY

pub fn available_strategies() -> &'static [StrategyKind] {
    &[StrategyKind::PrivilegedControl, StrategyKind::TrayUtility]
}

pub fn create(kind: StrategyKind) -> Option<Box<dyn AccessStrategy>> {
    match kind {
        StrategyKind::PrivilegedControl => Some(Box::new(PrivilegedControl::new(CdromDevice))),
        StrategyKind::TrayUtility => Some(Box::new(TrayUtility::new(vec![Utility::Eject], ProcessRunner))),
        _ => None,
    }
}

/// CD-ROM driver ioctls. The device is opened read-only and non-blocking,
/// which is what the driver expects when there may be no medium inserted.
pub struct CdromDevice;

impl DeviceControl for CdromDevice {
    type Handle = File;

    fn acquire(&self, path: &str) -> RawResult<File> {
        OpenOptions::new()
            .read(true)
            .custom_flags(libc::O_NONBLOCK)
            .open(path)
            .map_err(|e| {
                tracing::debug!(path, error = %e, "unable to open device");
                e.raw_os_error().unwrap_or(libc::EIO) as RawCode
            })
    }

    fn request(&self, handle: &File, request: ControlRequest) -> RawResult<()> {
        let fd = handle.as_raw_fd();
        let result = unsafe {
            match request {
                ControlRequest::EjectMedia => cdrom_eject(fd),
                ControlRequest::LoadMedia => cdrom_close_tray(fd),
            }
        };

        result.map(|_| ()).map_err(|e| {
            tracing::debug!(?request, error = %e, "cdrom ioctl failed");
            match e {
                Error::Sys(errno) => errno as i32 as RawCode,
                _ => libc::EIO as RawCode,
            }
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_missing_device_fails_to_acquire() {
        let code = CdromDevice.acquire("/dev/trayctl-missing").err();
        assert_eq!(code, Some(libc::ENOENT as RawCode));
    }

    #[test]
    fn test_ioctl_on_regular_file_fails() {
        let file = File::open("/proc/self/status").unwrap();
        assert!(CdromDevice.request(&file, ControlRequest::EjectMedia).is_err());
    }
}
