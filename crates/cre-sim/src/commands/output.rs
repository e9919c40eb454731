use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use cre_core::{hash_bytes, to_canonical_json_pretty, DISCLAIMER};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Serialize)]
struct ManifestEntry {
    path: String,
    sha256: String,
}

#[derive(Debug, Serialize)]
struct Manifest<'a, P: Serialize> {
    command: &'a str,
    version: &'a str,
    parameters: &'a P,
    files: Vec<ManifestEntry>,
    validated: bool,
    disclaimer: &'a str,
}

/// Collects the artefacts of one command and records them in `manifest.json`.
pub struct OutputDir {
    root: PathBuf,
    files: Vec<ManifestEntry>,
}

impl OutputDir {
    pub fn create(root: &Path) -> Result<Self, Box<dyn Error>> {
        fs::create_dir_all(root)?;
        Ok(Self {
            root: root.to_path_buf(),
            files: Vec::new(),
        })
    }

    pub fn write_json<T: Serialize>(&mut self, name: &str, value: &T) -> Result<(), Box<dyn Error>> {
        let json = to_canonical_json_pretty(value)?;
        self.record(name, json.as_bytes())
    }

    pub fn write_csv<I, R>(&mut self, name: &str, header: &[&str], rows: I) -> Result<(), Box<dyn Error>>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = String>,
    {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(header)?;
        for row in rows {
            writer.write_record(row)?;
        }
        let bytes = writer.into_inner().map_err(|err| err.to_string())?;
        self.record(name, &bytes)
    }

    fn record(&mut self, name: &str, bytes: &[u8]) -> Result<(), Box<dyn Error>> {
        let path = self.root.join(name);
        fs::write(&path, bytes)?;
        info!(path = %path.display(), bytes = bytes.len(), "wrote artefact");
        self.files.push(ManifestEntry {
            path: name.to_string(),
            sha256: hash_bytes(bytes),
        });
        Ok(())
    }

    pub fn finish<P: Serialize>(self, command: &str, parameters: &P) -> Result<(), Box<dyn Error>> {
        let manifest = Manifest {
            command,
            version: env!("CARGO_PKG_VERSION"),
            parameters,
            files: self.files,
            validated: false,
            disclaimer: DISCLAIMER,
        };
        let json = to_canonical_json_pretty(&manifest)?;
        fs::write(self.root.join("manifest.json"), json)?;
        Ok(())
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", to_canonical_json_pretty(value)?);
    Ok(())
}

pub fn print_disclaimer() {
    eprintln!("{DISCLAIMER}");
}

/// Shortest representation that parses back to the same value.
pub fn fmt_f64(value: f64) -> String {
    value.to_string()
}
