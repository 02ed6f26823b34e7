//! Keyspace snapshots
//!
//! The whole keyspace is written on every save; there is no incremental
//! format. Files are written next to the target and renamed into place so a
//! crash mid-write leaves the previous snapshot intact.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tiercache_domain::constants::{SNAPSHOT_FORMAT_VERSION, SNAPSHOT_TMP_EXTENSION};
use tiercache_domain::error::{Error, Result};
use tiercache_domain::value_objects::Entry;

#[derive(Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    entries: &'a HashMap<String, Entry>,
}

#[derive(Deserialize)]
struct SnapshotFile {
    version: u32,
    entries: HashMap<String, Entry>,
}

/// Snapshot target on disk
#[derive(Debug, Clone)]
pub struct Snapshot {
    path: PathBuf,
}

impl Snapshot {
    /// Create a snapshot target
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Snapshot file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the keyspace back
    ///
    /// # Returns
    /// `Ok(None)` when no snapshot has been written yet
    pub fn load(&self) -> Result<Option<HashMap<String, Entry>>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(Error::persistence(
                    format!("Failed to open snapshot {}", self.path.display()),
                    e,
                ));
            }
        };

        let snapshot: SnapshotFile = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| {
                Error::persistence(
                    format!("Failed to decode snapshot {}", self.path.display()),
                    e,
                )
            })?;

        if snapshot.version != SNAPSHOT_FORMAT_VERSION {
            return Err(Error::persistence(
                format!("Unsupported snapshot {}", self.path.display()),
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("format version {}", snapshot.version),
                ),
            ));
        }

        Ok(Some(snapshot.entries))
    }

    /// Overwrite the snapshot with `entries`
    pub fn save(&self, entries: &HashMap<String, Entry>) -> Result<()> {
        let tmp_path = self.tmp_path();
        let write = || -> io::Result<()> {
            let mut writer = BufWriter::new(File::create(&tmp_path)?);
            serde_json::to_writer(
                &mut writer,
                &SnapshotRef {
                    version: SNAPSHOT_FORMAT_VERSION,
                    entries,
                },
            )?;
            writer.flush()?;
            writer.get_ref().sync_all()?;
            fs::rename(&tmp_path, &self.path)
        };

        write().map_err(|e| {
            Error::persistence(
                format!("Failed to write snapshot {}", self.path.display()),
                e,
            )
        })
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".");
        name.push(SNAPSHOT_TMP_EXTENSION);
        PathBuf::from(name)
    }
}
