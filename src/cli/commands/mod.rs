pub mod config;
pub mod form;
pub mod format;
pub mod init;
pub mod options;
pub mod prescribe;
pub mod presets;

use crate::errors::AppResult;
use std::io::Read;

/// Script text from a file, or stdin when no file is given.
pub(crate) fn read_script(path: Option<&str>) -> AppResult<String> {
    match path {
        Some(p) => Ok(std::fs::read_to_string(p)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

pub(crate) fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}
