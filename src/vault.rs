use crate::error::{Error, Result};
use log::{debug, info};
use std::ffi::{OsStr, OsString};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

pub const NOTE_EXTENSION: &str = "md";

/// Point-in-time snapshot of one note file. Never updated in place.
/// `name` is for display; `file_name` is the exact on-disk name and may not be UTF-8.
#[derive(Clone, Debug, PartialEq)]
pub struct ListEntry {
    pub name: String,
    pub file_name: OsString,
    pub modified: SystemTime,
}

/// Exclusive read-write handle on one note file.
#[derive(Debug)]
pub struct NoteHandle {
    name: String,
    file: File,
}

#[derive(Clone, Debug)]
pub struct Vault {
    dir: PathBuf,
}

impl NoteHandle {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Truncate, rewind, then write the whole content.
    pub fn overwrite(&mut self, content: &str) -> Result<()> {
        let save = |file: &mut File| -> io::Result<()> {
            file.set_len(0)?;
            file.seek(SeekFrom::Start(0))?;
            file.write_all(content.as_bytes())?;
            file.flush()
        };
        save(&mut self.file).map_err(|source| Error::Save { name: self.name.clone(), source })?;
        debug!("event=note_write name={} bytes={}", self.name, content.len());
        Ok(())
    }

    /// Dropping a `File` swallows errors, so sync first to surface them.
    pub fn close(self) -> Result<()> {
        let NoteHandle { name, file } = self;
        file.sync_all().map_err(|source| Error::Close { name: name.clone(), source })?;
        drop(file);
        debug!("event=note_close name={name}");
        Ok(())
    }
}

/// Trims and checks a user supplied base name. Returns the file name with the
/// note extension appended.
pub fn note_file_name(base: &str, char_limit: usize) -> Result<String> {
    let invalid = |reason: &'static str| -> Result<String> {
        Err(Error::InvalidName { name: base.to_owned(), reason })
    };
    let trimmed = base.trim();
    if trimmed.is_empty() {
        return invalid("name is empty");
    }
    if trimmed == "." || trimmed == ".." {
        return invalid("reserved name");
    }
    if trimmed.contains(['/', '\\', '\0']) {
        return invalid("contains a path separator or NUL");
    }
    if trimmed.chars().count() > char_limit {
        return invalid("name is too long");
    }
    Ok(format!("{trimmed}.{NOTE_EXTENSION}"))
}

impl Vault {
    pub fn new(dir: PathBuf) -> Vault {
        Vault { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_of(&self, file_name: &OsStr) -> PathBuf {
        self.dir.join(file_name)
    }

    /// Creates the vault and its parents when missing. Idempotent.
    pub fn ensure(&self) -> Result<()> {
        let mut builder = fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        std::os::unix::fs::DirBuilderExt::mode(&mut builder, 0o700);
        builder
            .create(&self.dir)
            .map_err(|source| Error::CreateVault { path: self.dir.clone(), source })?;
        info!("event=vault_ready path={}", self.dir.display());
        Ok(())
    }

    /// Non-directory entries in enumeration order. Entries whose metadata
    /// cannot be read are skipped.
    pub fn list_notes(&self) -> Result<Vec<ListEntry>> {
        let entries = fs::read_dir(&self.dir)
            .map_err(|source| Error::ReadVault { path: self.dir.clone(), source })?;
        let notes: Vec<ListEntry> = entries
            .filter_map(|entry| {
                let entry = entry.ok()?;
                let metadata = entry.metadata().ok()?;
                if metadata.is_dir() {
                    return None;
                }
                let modified = metadata.modified().ok()?;
                let file_name = entry.file_name();
                let name = file_name.to_string_lossy().into_owned();
                Some(ListEntry { name, file_name, modified })
            })
            .collect();
        debug!("event=vault_list count={}", notes.len());
        Ok(notes)
    }

    pub fn read_note(&self, file_name: impl AsRef<OsStr>) -> Result<String> {
        let file_name = file_name.as_ref();
        fs::read_to_string(self.path_of(file_name)).map_err(|source| {
            let name = file_name.to_string_lossy().into_owned();
            match source.kind() {
                io::ErrorKind::NotFound => Error::NotFound(name),
                _ => Error::Read { name, source },
            }
        })
    }

    /// Never overwrites: an existing file yields `AlreadyExists`.
    pub fn create_note(&self, name: &str) -> Result<NoteHandle> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create_new(true)
            .open(self.path_of(OsStr::new(name)))
            .map_err(|source| match source.kind() {
                io::ErrorKind::AlreadyExists => Error::AlreadyExists(name.to_owned()),
                _ => Error::Open { name: name.to_owned(), source },
            })?;
        info!("event=note_create name={name}");
        Ok(NoteHandle { name: name.to_owned(), file })
    }

    /// Opens an existing note read-write without truncating it.
    pub fn open_for_edit(&self, file_name: impl AsRef<OsStr>) -> Result<NoteHandle> {
        let file_name = file_name.as_ref();
        let name = file_name.to_string_lossy().into_owned();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(self.path_of(file_name))
            .map_err(|source| match source.kind() {
                io::ErrorKind::NotFound => Error::NotFound(name.clone()),
                _ => Error::Open { name: name.clone(), source },
            })?;
        info!("event=note_open name={name}");
        Ok(NoteHandle { name, file })
    }
}

#[cfg(test)]
impl NoteHandle {
    /// A handle whose writes fail, for exercising the save error path.
    pub fn read_only(path: &Path) -> NoteHandle {
        let name = path.file_name().unwrap_or_default().to_string_lossy().into_owned();
        NoteHandle { name, file: File::open(path).unwrap() }
    }
}
