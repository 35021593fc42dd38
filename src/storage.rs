use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::codec::{CodecError, Export};
use crate::model::DigitalLibrary;

pub const DEFAULT_JSON_PATH: &str = "library.json";
pub const DEFAULT_XML_PATH: &str = "library.xml";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Codec(#[from] CodecError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryFormat {
    Json,
    Xml,
}

impl LibraryFormat {
    pub fn default_path(&self) -> &'static str {
        match self {
            LibraryFormat::Json => DEFAULT_JSON_PATH,
            LibraryFormat::Xml => DEFAULT_XML_PATH,
        }
    }

    /// Picks a format from the file extension, ignoring case.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(LibraryFormat::Json),
            "xml" => Some(LibraryFormat::Xml),
            _ => None,
        }
    }
}

impl DigitalLibrary {
    pub fn save_to<P: AsRef<Path>>(
        &self,
        path: P,
        format: LibraryFormat,
    ) -> Result<(), StorageError> {
        let path = path.as_ref();
        let content = match format {
            LibraryFormat::Json => self.to_json()?,
            LibraryFormat::Xml => self.to_xml()?,
        };
        fs::write(path, content).map_err(|source| StorageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), ?format, books = self.len(), "library saved");
        Ok(())
    }

    pub fn load_from<P: AsRef<Path>>(path: P, format: LibraryFormat) -> Result<Self, StorageError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| StorageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let library = match format {
            LibraryFormat::Json => Self::from_json_str(&content)?,
            LibraryFormat::Xml => Self::from_xml_str(&content)?,
        };
        debug!(path = %path.display(), ?format, books = library.len(), "library loaded");
        Ok(library)
    }

    /// Saves to the format's default file in the working directory.
    pub fn save(&self, format: LibraryFormat) -> Result<(), StorageError> {
        self.save_to(format.default_path(), format)
    }

    pub fn load(format: LibraryFormat) -> Result<Self, StorageError> {
        Self::load_from(format.default_path(), format)
    }

    pub fn save_to_json<P: AsRef<Path>>(&self, path: P) -> Result<(), StorageError> {
        self.save_to(path, LibraryFormat::Json)
    }

    pub fn load_from_json<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        Self::load_from(path, LibraryFormat::Json)
    }

    pub fn save_to_xml<P: AsRef<Path>>(&self, path: P) -> Result<(), StorageError> {
        self.save_to(path, LibraryFormat::Xml)
    }

    pub fn load_from_xml<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        Self::load_from(path, LibraryFormat::Xml)
    }
}
