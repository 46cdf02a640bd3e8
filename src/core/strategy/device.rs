use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlRequest {
    EjectMedia,
    LoadMedia,
}

/// Low level device access. The handle must release the underlying OS
/// resource when dropped.
pub trait DeviceControl {
    type Handle;

    /// Opens the device with shared read access only.
    fn acquire(&self, path: &str) -> RawResult<Self::Handle>;
    fn request(&self, handle: &Self::Handle, request: ControlRequest) -> RawResult<()>;
}

/// Direct device I/O control. Fastest path, but may need an elevated process.
pub struct PrivilegedControl<D: DeviceControl> {
    device: D,
}

impl<D: DeviceControl> PrivilegedControl<D> {
    pub fn new(device: D) -> Self {
        PrivilegedControl { device }
    }

    fn perform(&self, drive: &DriveId, request: ControlRequest) -> Outcome {
        let path = drive.device_path();

        let handle = match self.device.acquire(&path) {
            Ok(h) => h,
            Err(code) => return Outcome::failure(Step::AcquireHandle, code, path),
        };

        let result = self.device.request(&handle, request);
        drop(handle);

        Outcome::from_result(Step::ControlRequest, result, path)
    }
}

impl<D: DeviceControl> AccessStrategy for PrivilegedControl<D> {
    fn kind(&self) -> StrategyKind {
        StrategyKind::PrivilegedControl
    }

    fn open(&self, drive: &DriveId) -> Option<Outcome> {
        Some(self.perform(drive, ControlRequest::EjectMedia))
    }

    fn close(&self, drive: &DriveId) -> Option<Outcome> {
        Some(self.perform(drive, ControlRequest::LoadMedia))
    }
}
