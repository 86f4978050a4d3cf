#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rxform::core::duration::{DurationSelector, SelectorEvent};
use std::env;
use std::fs;
use std::path::PathBuf;

/// rxform binary pointed at a config path that never exists, so tests run
/// on defaults regardless of the machine's home directory.
pub fn rxf() -> Command {
    let mut cmd = cargo_bin_cmd!("rxform");
    cmd.env_remove("RXFORM_LOG");
    cmd.args(["--config", &temp_path("no_such_config", "conf")]);
    cmd
}

/// Unique path inside the system temp dir; any existing file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rxform.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Writes a script file and returns its path.
pub fn write_script(name: &str, body: &str) -> String {
    let path = temp_path(name, "rxs");
    fs::write(&path, body).expect("write script");
    path
}

/// Feeds events in order, returning the selector.
pub fn drive(events: &[SelectorEvent]) -> DurationSelector {
    let mut selector = DurationSelector::default();
    for e in events {
        selector.handle(e.clone());
    }
    selector
}

/// Script that fills entry `n` completely with a preset duration.
pub fn fill_entry(n: usize, name: &str) -> String {
    format!(
        "set {n} name \"{name}\"\n\
         set {n} dose 500\n\
         set {n} unit mg\n\
         set {n} timing \"After Lunch\"\n\
         set {n} frequency \"Twice daily\"\n\
         duration {n} open\n\
         duration {n} preset 3\n"
    )
}
