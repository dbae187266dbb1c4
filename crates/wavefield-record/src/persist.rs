//! JSON files on disk.

use crate::error::RecordError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

pub(crate) fn save_json<T: Serialize>(
    value: &T,
    path: &Path,
    overwrite: bool,
) -> Result<(), RecordError> {
    let io_err = |source| RecordError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut options = OpenOptions::new();
    options.write(true);
    if overwrite {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    let file = options.open(path).map_err(|e| {
        if e.kind() == io::ErrorKind::AlreadyExists {
            RecordError::AlreadyExists {
                path: path.to_path_buf(),
            }
        } else {
            io_err(e)
        }
    })?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, value).map_err(|source| RecordError::Format {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(io_err)?;
    log::info!("saved {}", path.display());
    Ok(())
}

pub(crate) fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, RecordError> {
    let file = File::open(path).map_err(|source| RecordError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        RecordError::Format {
            path: path.to_path_buf(),
            source,
        }
    })?;
    log::debug!("loaded {}", path.display());
    Ok(value)
}
