use std::fs::OpenOptions;
use std::io::Write;
use std::path::{ Path, PathBuf };

use chrono::Local;
use copypasta_ext::prelude::*;
use log::debug;
use serde::Serialize;

use crate::entropy::{ EntropyEstimate, Strength };

#[derive(Serialize)]
pub struct Report<'a> {
    pub password: &'a str,
    pub length: usize,
    pub alphabet_size: usize,
    pub entropy_bits: u32,
    pub strength: Strength,
}

// The password goes to stdout on its own line so it can be piped; the
// strength summary goes to stderr.
pub fn print_summary(password: &str, estimate: &EntropyEstimate) {
    println!("{}", password);
    eprintln!("strength: {} ({} bits)", estimate.label, estimate.bits);
}

pub fn print_json(report: &Report) {
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Could not serialize report: {}", e),
    }
}

pub fn copy_to_clipboard(password: &str) {
    match copypasta_ext::try_context() {
        Some(mut ctx) => match ctx.set_contents(password.to_string()) {
            Ok(()) => eprintln!("Password copied to clipboard."),
            Err(e) => eprintln!("Could not copy to clipboard: {}", e),
        },
        None => eprintln!("No clipboard backend available."),
    }
}

pub fn default_export_path() -> PathBuf {
    PathBuf::from(format!("password-{}.txt", Local::now().format("%Y%m%d-%H%M%S")))
}

pub fn export_to_file(path: &Path, password: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", password)?;

    debug!("password appended to {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_appends_one_line_per_password() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        export_to_file(&path, "abc123").unwrap();
        export_to_file(&path, "def456").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "abc123\ndef456\n");
    }

    #[test]
    fn default_export_name_is_timestamped() {
        let path = default_export_path();
        let name = path.to_string_lossy();

        assert!(name.starts_with("password-"));
        assert!(name.ends_with(".txt"));
    }
}
