use super::PostCleanup;
use crate::error::Result;
use std::io::Write;
use tracing::{info, warn};

/// Empties the Windows Recycle Bin through the Shell API
#[derive(Debug, Default, Clone, Copy)]
pub struct RecycleBin;

impl PostCleanup for RecycleBin {
    fn name(&self) -> &str {
        "Recycle Bin"
    }

    fn description(&self) -> &str {
        "Emptying Recycle Bin"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        empty_unless_already_empty(query_item_count(), empty_recycle_bin, out)
    }
}

/// Skip `empty` when the bin is known to hold nothing; the Shell reports an
/// error when asked to empty an empty bin.
fn empty_unless_already_empty<F>(
    item_count: Result<i64>,
    empty: F,
    out: &mut dyn Write,
) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    match item_count {
        Ok(0) => {
            info!("Recycle Bin is empty");
            writeln!(out, "Recycle Bin is already empty.")?;
            Ok(())
        }
        Ok(items) => {
            info!("Recycle Bin holds {} items", items);
            empty()
        }
        Err(e) => {
            warn!("Could not query Recycle Bin: {}", e);
            empty()
        }
    }
}

#[cfg(windows)]
fn query_item_count() -> Result<i64> {
    use crate::error::CleanError;
    use std::ptr;
    use winapi::shared::winerror::S_OK;
    use winapi::um::shellapi::{SHQueryRecycleBinW, SHQUERYRBINFO};

    let mut info = SHQUERYRBINFO {
        cbSize: std::mem::size_of::<SHQUERYRBINFO>() as u32,
        i64Size: 0,
        i64NumItems: 0,
    };

    // Null root path: every drive.
    let result = unsafe { SHQueryRecycleBinW(ptr::null(), &mut info) };

    if result == S_OK {
        Ok(info.i64NumItems)
    } else {
        Err(CleanError::WindowsError(format!(
            "SHQueryRecycleBinW returned {:#010x}",
            result
        )))
    }
}

#[cfg(windows)]
fn empty_recycle_bin() -> Result<()> {
    use crate::error::CleanError;
    use std::ptr;
    use winapi::shared::winerror::S_OK;
    use winapi::um::shellapi::{
        SHEmptyRecycleBinW, SHERB_NOCONFIRMATION, SHERB_NOPROGRESSUI, SHERB_NOSOUND,
    };

    info!("Emptying Recycle Bin...");

    // Null window and root path: every drive, no UI.
    let result = unsafe {
        SHEmptyRecycleBinW(
            ptr::null_mut(),
            ptr::null(),
            SHERB_NOCONFIRMATION | SHERB_NOPROGRESSUI | SHERB_NOSOUND,
        )
    };

    if result == S_OK {
        info!("Recycle Bin emptied successfully");
        Ok(())
    } else {
        Err(CleanError::WindowsError(format!(
            "SHEmptyRecycleBinW returned {:#010x}",
            result
        )))
    }
}

#[cfg(not(windows))]
fn query_item_count() -> Result<i64> {
    use crate::error::CleanError;

    Err(CleanError::NotSupported(
        "Recycle Bin is only available on Windows".to_string(),
    ))
}

#[cfg(not(windows))]
fn empty_recycle_bin() -> Result<()> {
    use crate::error::CleanError;

    info!("Recycle Bin cleaning is not supported on this platform");
    Err(CleanError::NotSupported(
        "Recycle Bin is only available on Windows".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CleanError;
    use std::cell::Cell;

    #[test]
    fn test_empty_bin_is_not_emptied_again() {
        let mut out = Vec::new();
        empty_unless_already_empty(Ok(0), || panic!("bin is already empty"), &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Recycle Bin is already empty.\n");
    }

    #[test]
    fn test_full_bin_is_emptied() {
        let emptied = Cell::new(false);
        let mut out = Vec::new();

        empty_unless_already_empty(
            Ok(3),
            || {
                emptied.set(true);
                Ok(())
            },
            &mut out,
        )
        .unwrap();

        assert!(emptied.get());
        assert!(out.is_empty());
    }

    #[test]
    fn test_failed_query_still_empties() {
        let emptied = Cell::new(false);
        let mut out = Vec::new();
        let query = Err(CleanError::WindowsError("access denied".to_string()));

        empty_unless_already_empty(
            query,
            || {
                emptied.set(true);
                Ok(())
            },
            &mut out,
        )
        .unwrap();

        assert!(emptied.get());
    }

    #[cfg(not(windows))]
    #[test]
    fn test_recycle_bin_off_windows() {
        let mut out = Vec::new();
        let err = RecycleBin.run(&mut out).unwrap_err();

        assert!(matches!(err, CleanError::NotSupported(_)));
        assert!(out.is_empty());
    }
}
