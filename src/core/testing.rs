use crate::core::strategy::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct DeviceState {
    calls: Vec<String>,
    open_handles: i32,
}

#[derive(Clone, Default)]
pub struct FakeDevice {
    state: Rc<RefCell<DeviceState>>,
    acquire_error: Option<RawCode>,
    request_error: Option<RawCode>,
}

impl FakeDevice {
    pub fn new() -> Self {
        FakeDevice::default()
    }

    pub fn fail_acquire(mut self, code: RawCode) -> Self {
        self.acquire_error = Some(code);
        self
    }

    pub fn fail_request(mut self, code: RawCode) -> Self {
        self.request_error = Some(code);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.borrow().calls.clone()
    }

    pub fn open_handles(&self) -> i32 {
        self.state.borrow().open_handles
    }
}

pub struct FakeHandle {
    state: Rc<RefCell<DeviceState>>,
}

impl Drop for FakeHandle {
    fn drop(&mut self) {
        let mut s = self.state.borrow_mut();
        s.open_handles -= 1;
        s.calls.push("release".to_owned());
    }
}

impl DeviceControl for FakeDevice {
    type Handle = FakeHandle;

    fn acquire(&self, path: &str) -> RawResult<FakeHandle> {
        let mut s = self.state.borrow_mut();
        s.calls.push(format!("acquire {}", path));
        if let Some(code) = self.acquire_error {
            return Err(code);
        }
        s.open_handles += 1;
        Ok(FakeHandle {
            state: Rc::clone(&self.state),
        })
    }

    fn request(&self, _handle: &FakeHandle, request: ControlRequest) -> RawResult<()> {
        self.state
            .borrow_mut()
            .calls
            .push(format!("request {:?}", request));
        match self.request_error {
            Some(code) => Err(code),
            None => Ok(()),
        }
    }
}

#[derive(Clone, Default)]
pub struct FakeCommands {
    sent: Rc<RefCell<Vec<String>>>,
    failures: Vec<(&'static str, RawCode)>,
}

impl FakeCommands {
    pub fn new() -> Self {
        FakeCommands::default()
    }

    /// Commands starting with `prefix` fail with `code`.
    pub fn fail_on(mut self, prefix: &'static str, code: RawCode) -> Self {
        self.failures.push((prefix, code));
        self
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.borrow().clone()
    }
}

impl MediaCommands for FakeCommands {
    fn send(&self, command: &str) -> RawResult<()> {
        self.sent.borrow_mut().push(command.to_owned());
        match self.failures.iter().find(|(p, _)| command.starts_with(p)) {
            Some((_, code)) => Err(*code),
            None => Ok(()),
        }
    }
}

#[derive(Clone)]
pub struct FakeShell {
    result: RawResult<()>,
    ejected: Rc<RefCell<Vec<String>>>,
}

impl FakeShell {
    pub fn new(result: RawResult<()>) -> Self {
        FakeShell {
            result,
            ejected: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn ejected(&self) -> Vec<String> {
        self.ejected.borrow().clone()
    }
}

impl ShellService for FakeShell {
    fn eject(&self, root_path: &str) -> RawResult<()> {
        self.ejected.borrow_mut().push(root_path.to_owned());
        self.result
    }
}

#[derive(Clone)]
pub struct FakeRunner {
    result: Result<(), RunFailure>,
    failures: Vec<(&'static str, RunFailure)>,
    runs: Rc<RefCell<Vec<String>>>,
}

impl FakeRunner {
    pub fn new(result: Result<(), RunFailure>) -> Self {
        FakeRunner {
            result,
            failures: Vec::new(),
            runs: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Command lines starting with `prefix` fail with `failure`.
    pub fn fail_on(mut self, prefix: &'static str, failure: RunFailure) -> Self {
        self.failures.push((prefix, failure));
        self
    }

    pub fn runs(&self) -> Vec<String> {
        self.runs.borrow().clone()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<(), RunFailure> {
        let mut line = vec![program.to_owned()];
        line.extend(args.iter().cloned());
        let line = line.join(" ");
        self.runs.borrow_mut().push(line.clone());
        match self.failures.iter().find(|(p, _)| line.starts_with(p)) {
            Some((_, failure)) => Err(*failure),
            None => self.result,
        }
    }
}
