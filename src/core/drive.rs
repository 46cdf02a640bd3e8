use crate::core::api::TrayError;
use regex::Regex;
use std::fmt;

/// Bare device names (`sr0`, `CdRom0`) are resolved under this prefix.
#[cfg(windows)]
pub const DEVICE_PREFIX: &str = "\\\\.\\";
#[cfg(not(windows))]
pub const DEVICE_PREFIX: &str = "/dev/";

/// Identifies one optical drive. Either a drive letter (Windows style, `D:`)
/// or a device path (`/dev/sr0`, `\\.\CdRom0`).
///
/// Every strategy needs a different spelling of the same drive, so the
/// conversions below are pure and never touch the system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriveId {
    Letter(char),
    Path(String),
}

impl DriveId {
    pub fn parse(s: &str) -> Result<DriveId, TrayError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(TrayError::InvalidDrive(
                "drive identifier is empty".to_owned(),
            ));
        }

        if s.contains('\0') {
            return Err(TrayError::InvalidDrive(format!(
                "drive identifier contains a NUL character: {:?}",
                s
            )));
        }

        // D, d:, D::, D:\, D:/
        let letter_regex = Regex::new(r"^(?i)([a-z])(:+[\\/]?)?$").unwrap();
        if let Some(groups) = letter_regex.captures(s) {
            let letter = groups[1]
                .chars()
                .next()
                .map(|c| c.to_ascii_uppercase())
                .ok_or_else(|| TrayError::InvalidDrive(s.to_owned()))?;
            return Ok(DriveId::Letter(letter));
        }

        if s.ends_with(':') {
            return Err(TrayError::InvalidDrive(format!(
                "not a drive letter: {}",
                s
            )));
        }

        if s.starts_with('/') || s.starts_with('\\') {
            Ok(DriveId::Path(s.to_owned()))
        } else {
            Ok(DriveId::Path(format!("{}{}", DEVICE_PREFIX, s)))
        }
    }

    /// `D:`, used by the command interface and for display.
    pub fn volume(&self) -> String {
        match self {
            DriveId::Letter(l) => format!("{}:", l),
            DriveId::Path(p) => p.clone(),
        }
    }

    /// Path accepted by the device open call, e.g. `\\.\D:`.
    pub fn device_path(&self) -> String {
        match self {
            DriveId::Letter(l) => format!("\\\\.\\{}:", l),
            DriveId::Path(p) => p.clone(),
        }
    }

    /// Root of the mounted volume, e.g. `D:\`.
    pub fn root_path(&self) -> String {
        match self {
            DriveId::Letter(l) => format!("{}:\\", l),
            DriveId::Path(p) => p.clone(),
        }
    }

    /// Command interface alias scoped to this drive.
    pub fn alias(&self) -> String {
        let suffix = match self {
            DriveId::Letter(l) => l.to_ascii_lowercase().to_string(),
            DriveId::Path(p) => {
                let last = p
                    .rsplit(|c| c == '/' || c == '\\')
                    .find(|part| !part.is_empty())
                    .unwrap_or("");
                last.chars()
                    .filter(|c| c.is_ascii_alphanumeric())
                    .map(|c| c.to_ascii_lowercase())
                    .collect()
            }
        };

        if suffix.is_empty() {
            "trayctl_drive".to_owned()
        } else {
            format!("trayctl_{}", suffix)
        }
    }
}

impl fmt::Display for DriveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.volume())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_matches::*;

    #[test]
    fn test_letter_normalization() {
        assert_eq!(DriveId::parse("D:").unwrap(), DriveId::Letter('D'));
        assert_eq!(DriveId::parse("d").unwrap(), DriveId::Letter('D'));
        assert_eq!(DriveId::parse("E::").unwrap(), DriveId::Letter('E'));
        assert_eq!(DriveId::parse("f:\\").unwrap(), DriveId::Letter('F'));
        assert_eq!(DriveId::parse("D:/").unwrap(), DriveId::Letter('D'));
        assert_eq!(DriveId::parse("  G:  ").unwrap(), DriveId::Letter('G'));
    }

    #[test]
    fn test_paths() {
        assert_eq!(
            DriveId::parse("/dev/sr0").unwrap(),
            DriveId::Path("/dev/sr0".to_owned())
        );
        assert_eq!(
            DriveId::parse("\\\\.\\CdRom0").unwrap(),
            DriveId::Path("\\\\.\\CdRom0".to_owned())
        );
    }

    #[test]
    fn test_bare_name_uses_platform_prefix() {
        let d = DriveId::parse("CdRom0").unwrap();
        assert_eq!(d, DriveId::Path(format!("{}CdRom0", DEVICE_PREFIX)));
        assert_eq!(d.alias(), "trayctl_cdrom0");
    }

    #[cfg(windows)]
    #[test]
    fn test_bare_name_on_windows() {
        assert_eq!(
            DriveId::parse("CdRom0").unwrap().device_path(),
            "\\\\.\\CdRom0"
        );
    }

    #[cfg(not(windows))]
    #[test]
    fn test_bare_name_on_unix() {
        assert_eq!(
            DriveId::parse("sr1").unwrap(),
            DriveId::Path("/dev/sr1".to_owned())
        );
    }

    #[test]
    fn test_bad_input() {
        assert_matches!(DriveId::parse(""), Err(TrayError::InvalidDrive(_)));
        assert_matches!(DriveId::parse("   "), Err(TrayError::InvalidDrive(_)));
        assert_matches!(DriveId::parse("DE:"), Err(TrayError::InvalidDrive(_)));
        assert_matches!(DriveId::parse("D\0"), Err(TrayError::InvalidDrive(_)));
    }

    #[test]
    fn test_letter_forms() {
        let d = DriveId::parse("d:").unwrap();
        assert_eq!(d.volume(), "D:");
        assert_eq!(d.device_path(), "\\\\.\\D:");
        assert_eq!(d.root_path(), "D:\\");
        assert_eq!(d.alias(), "trayctl_d");
        assert_eq!(d.to_string(), "D:");
    }

    #[test]
    fn test_path_forms() {
        let d = DriveId::parse("/dev/sr0").unwrap();
        assert_eq!(d.volume(), "/dev/sr0");
        assert_eq!(d.device_path(), "/dev/sr0");
        assert_eq!(d.root_path(), "/dev/sr0");
        assert_eq!(d.alias(), "trayctl_sr0");

        let w = DriveId::parse("\\\\.\\CdRom0").unwrap();
        assert_eq!(w.alias(), "trayctl_cdrom0");

        let odd = DriveId::parse("/dev/--/").unwrap();
        assert_eq!(odd.alias(), "trayctl_drive");
    }
}
