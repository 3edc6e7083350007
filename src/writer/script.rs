//! Dump synthesized script text: the flattened program plus one file per
//! thread lane.

use crate::processor::synth::{THREAD_COUNT, ThreadScripts};
use std::fs;
use std::io;
use std::path::Path;

pub const SCRIPT_FILE: &str = "script.txt";

pub fn emit(scripts: &ThreadScripts, out_dir: &Path) -> io::Result<()> {
    fs::write(out_dir.join(SCRIPT_FILE), with_newline(scripts.flatten()))?;
    for thread in 0..THREAD_COUNT {
        let path = out_dir.join(thread_file(thread));
        fs::write(&path, with_newline(scripts.text(thread)))?;
    }
    Ok(())
}

/// `thread_1.txt` for lane 0, and so on.
pub fn thread_file(thread: usize) -> String {
    format!("thread_{}.txt", thread + 1)
}

fn with_newline(mut text: String) -> String {
    if !text.is_empty() {
        text.push('\n');
    }
    text
}
