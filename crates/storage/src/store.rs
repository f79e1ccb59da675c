// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! File-per-collection snapshot store
//!
//! The store owns no state of its own. Saves take borrowed collections and
//! convert them into storable records; loads hand back freshly built
//! collections. Loads never fail: a missing file is a first run, and an
//! unreadable one is logged and treated as empty.

use crate::format::{
    CollectionFile, MetaFile, StorableBook, StorableMember, StorableTransaction, FORMAT_VERSION,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shelf_core::id::FIRST_ID;
use shelf_core::{Book, BookId, Member, MemberId, Transaction, TransactionId};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur while writing an artifact
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to create data directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode {artifact}: {source}")]
    Encode {
        artifact: Artifact,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write {artifact}: {source}")]
    Write {
        artifact: Artifact,
        #[source]
        source: io::Error,
    },
}

/// One of the four files making up a persisted library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    Books,
    Members,
    Transactions,
    Meta,
}

impl Artifact {
    /// All artifacts in canonical save/load order
    pub const ALL: [Artifact; 4] = [
        Artifact::Books,
        Artifact::Members,
        Artifact::Transactions,
        Artifact::Meta,
    ];

    /// File name inside the data directory
    pub fn file_name(self) -> &'static str {
        match self {
            Artifact::Books => "books.json",
            Artifact::Members => "members.json",
            Artifact::Transactions => "transactions.json",
            Artifact::Meta => "meta.json",
        }
    }
}

impl std::fmt::Display for Artifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Artifact::Books => "books",
            Artifact::Members => "members",
            Artifact::Transactions => "transactions",
            Artifact::Meta => "meta",
        };
        write!(f, "{}", name)
    }
}

/// Next-id counters, persisted separately from the collections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meta {
    pub next_book_id: u32,
    pub next_member_id: u32,
    pub next_transaction_id: u32,
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            next_book_id: FIRST_ID,
            next_member_id: FIRST_ID,
            next_transaction_id: FIRST_ID,
        }
    }
}

/// Borrowed view of the full state, taken while the owner holds its lock
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub books: &'a BTreeMap<BookId, Book>,
    pub members: &'a BTreeMap<MemberId, Member>,
    pub transactions: &'a BTreeMap<TransactionId, Transaction>,
    pub meta: Meta,
}

/// Owned state rebuilt from disk
#[derive(Debug, Clone, Default)]
pub struct LoadedState {
    pub books: BTreeMap<BookId, Book>,
    pub members: BTreeMap<MemberId, Member>,
    pub transactions: BTreeMap<TransactionId, Transaction>,
    pub meta: Meta,
}

/// Snapshot store rooted at a data directory
#[derive(Debug, Clone)]
pub struct Store {
    data_dir: PathBuf,
}

impl Store {
    /// Open a store at the given directory, creating it if absent
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let store = Self {
            data_dir: data_dir.into(),
        };
        store.ensure_dir()?;
        Ok(store)
    }

    /// Directory holding the artifacts
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of an artifact inside the data directory
    pub fn path_for(&self, artifact: Artifact) -> PathBuf {
        self.data_dir.join(artifact.file_name())
    }

    /// Save the book collection, replacing the previous file
    pub fn save_books(&self, books: &BTreeMap<BookId, Book>) -> Result<(), StorageError> {
        let records = books.values().map(StorableBook::from).collect();
        self.write_artifact(Artifact::Books, &CollectionFile::new(records))
    }

    /// Save the member collection, replacing the previous file
    pub fn save_members(&self, members: &BTreeMap<MemberId, Member>) -> Result<(), StorageError> {
        let records = members.values().map(StorableMember::from).collect();
        self.write_artifact(Artifact::Members, &CollectionFile::new(records))
    }

    /// Save the transaction collection, replacing the previous file
    pub fn save_transactions(
        &self,
        transactions: &BTreeMap<TransactionId, Transaction>,
    ) -> Result<(), StorageError> {
        let records = transactions
            .values()
            .map(StorableTransaction::from)
            .collect();
        self.write_artifact(Artifact::Transactions, &CollectionFile::new(records))
    }

    /// Save the id counters
    pub fn save_meta(&self, meta: &Meta) -> Result<(), StorageError> {
        let file = MetaFile {
            format_version: FORMAT_VERSION,
            next_book_id: meta.next_book_id,
            next_member_id: meta.next_member_id,
            next_transaction_id: meta.next_transaction_id,
        };
        self.write_artifact(Artifact::Meta, &file)
    }

    /// Save every artifact in canonical order
    ///
    /// The four writes are independent: a failure does not stop the
    /// remaining writes, and a crash part-way leaves earlier files updated
    /// and later ones stale. Returns every failure encountered.
    pub fn save_all(&self, snapshot: Snapshot<'_>) -> Vec<StorageError> {
        [
            self.save_books(snapshot.books),
            self.save_members(snapshot.members),
            self.save_transactions(snapshot.transactions),
            self.save_meta(&snapshot.meta),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect()
    }

    /// Load the book collection, empty if missing or unreadable
    pub fn load_books(&self) -> BTreeMap<BookId, Book> {
        self.load_records::<StorableBook>(Artifact::Books)
            .into_iter()
            .map(Book::from)
            .map(|b| (b.id, b))
            .collect()
    }

    /// Load the member collection, empty if missing or unreadable
    pub fn load_members(&self) -> BTreeMap<MemberId, Member> {
        self.load_records::<StorableMember>(Artifact::Members)
            .into_iter()
            .map(Member::from)
            .map(|m| (m.id, m))
            .collect()
    }

    /// Load the transaction collection, empty if missing or unreadable
    pub fn load_transactions(&self) -> BTreeMap<TransactionId, Transaction> {
        self.load_records::<StorableTransaction>(Artifact::Transactions)
            .into_iter()
            .map(Transaction::from)
            .map(|t| (t.id, t))
            .collect()
    }

    /// Load the id counters, all at their initial value if missing or
    /// unreadable
    pub fn load_meta(&self) -> Meta {
        let Some(file) = self.read_artifact::<MetaFile>(Artifact::Meta) else {
            return Meta::default();
        };
        check_version(Artifact::Meta, file.format_version);
        Meta {
            next_book_id: restored_counter("next_book_id", file.next_book_id),
            next_member_id: restored_counter("next_member_id", file.next_member_id),
            next_transaction_id: restored_counter(
                "next_transaction_id",
                file.next_transaction_id,
            ),
        }
    }

    /// Load every artifact in canonical order
    pub fn load_all(&self) -> LoadedState {
        LoadedState {
            books: self.load_books(),
            members: self.load_members(),
            transactions: self.load_transactions(),
            meta: self.load_meta(),
        }
    }

    fn ensure_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.data_dir).map_err(|source| StorageError::CreateDir {
            path: self.data_dir.clone(),
            source,
        })
    }

    /// Decode each record on its own so one damaged record does not take
    /// the rest of the collection with it
    fn load_records<T: DeserializeOwned>(&self, artifact: Artifact) -> Vec<T> {
        let Some(file) = self.read_artifact::<CollectionFile<serde_json::Value>>(artifact) else {
            return Vec::new();
        };
        check_version(artifact, file.format_version);

        file.records
            .into_iter()
            .filter_map(|record| {
                let id = record.get("id").cloned().unwrap_or(serde_json::Value::Null);
                match serde_json::from_value(record) {
                    Ok(value) => Some(value),
                    Err(e) => {
                        warn!(
                            artifact = %artifact,
                            id = %id,
                            error = %e,
                            "skipping unreadable record"
                        );
                        None
                    }
                }
            })
            .collect()
    }

    /// Write to a sibling temp file, then rename over the target so a
    /// single artifact is never left half-written
    fn write_artifact<T: Serialize>(&self, artifact: Artifact, value: &T) -> Result<(), StorageError> {
        self.ensure_dir()?;

        let bytes = serde_json::to_vec_pretty(value)
            .map_err(|source| StorageError::Encode { artifact, source })?;

        let path = self.path_for(artifact);
        let tmp_path = path.with_extension("json.tmp");
        let result = write_synced(&tmp_path, &bytes).and_then(|()| fs::rename(&tmp_path, &path));
        if let Err(source) = result {
            let _ = fs::remove_file(&tmp_path);
            return Err(StorageError::Write { artifact, source });
        }

        debug!(artifact = %artifact, bytes = bytes.len(), "artifact saved");
        Ok(())
    }

    fn read_artifact<T: DeserializeOwned>(&self, artifact: Artifact) -> Option<T> {
        let path = self.path_for(artifact);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(artifact = %artifact, "no saved artifact, starting empty");
                return None;
            }
            Err(e) => {
                warn!(artifact = %artifact, error = %e, "failed to read artifact, starting empty");
                return None;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(
                    artifact = %artifact,
                    path = %path.display(),
                    error = %e,
                    "corrupt artifact, starting empty"
                );
                None
            }
        }
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

/// Counters below [`FIRST_ID`] would hand out id 0
fn restored_counter(field: &str, value: u32) -> u32 {
    if value < FIRST_ID {
        warn!(field, value, "invalid id counter in meta, resetting to {}", FIRST_ID);
        return FIRST_ID;
    }
    value
}

fn check_version(artifact: Artifact, version: u32) {
    if version > FORMAT_VERSION {
        warn!(
            artifact = %artifact,
            version,
            supported = FORMAT_VERSION,
            "artifact written by a newer format, reading known fields only"
        );
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
