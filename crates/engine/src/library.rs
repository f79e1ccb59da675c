// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The library engine
//!
//! `Library` is the single owner of the state. Every public call takes the
//! state lock once, applies its change, writes the affected artifacts while
//! still holding the lock, and only then returns. Write failures are logged
//! and never undo or fail the in-memory change.

use crate::error::LoanError;
use crate::outcome::{Issued, Returned};
use crate::state::LibraryState;
use shelf_core::{Book, BookId, Clock, Member, MemberId, SystemClock, Transaction};
use shelf_storage::{Artifact, StorageError, Store};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info, warn};

/// Books added by [`Library::seed_sample_data`], as (title, author)
pub const SAMPLE_BOOKS: [(&str, &str); 2] = [
    ("Clean Code", "Robert C. Martin"),
    ("Introduction to Algorithms", "Cormen et al."),
];

/// Members added by [`Library::seed_sample_data`]
pub const SAMPLE_MEMBERS: [&str; 2] = ["Alice", "Bob"];

/// Library engine with write-through persistence
pub struct Library<C: Clock = SystemClock> {
    store: Store,
    clock: C,
    state: Mutex<LibraryState>,
    running: AtomicBool,
}

impl Library<SystemClock> {
    /// Open the library stored in `data_dir` using the system clock
    pub fn open_dir(data_dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        Ok(Self::open(Store::open(data_dir)?, SystemClock))
    }
}

impl<C: Clock> Library<C> {
    /// Load all saved state from the store
    ///
    /// Missing or unreadable artifacts come back empty, so this always
    /// yields a usable library.
    pub fn open(store: Store, clock: C) -> Self {
        let state = LibraryState::from(store.load_all());
        info!(
            data_dir = %store.data_dir().display(),
            books = state.books.len(),
            members = state.members.len(),
            transactions = state.transactions.len(),
            "library loaded"
        );
        Self {
            store,
            clock,
            state: Mutex::new(state),
            running: AtomicBool::new(true),
        }
    }

    /// The backing store, for diagnostics and test fixtures
    ///
    /// Writes made through it bypass the state lock and are overwritten by
    /// the next save of the same artifact.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Add a book with one available copy
    pub fn add_book(&self, title: &str, author: &str) -> Book {
        let mut state = self.lock();
        self.add_book_locked(&mut state, title, author)
    }

    /// Register a member
    pub fn add_member(&self, name: &str) -> Member {
        let mut state = self.lock();
        self.add_member_locked(&mut state, name)
    }

    /// Lend a copy of `book_id` to `member_id`, due after the loan period
    pub fn issue_book(&self, book_id: BookId, member_id: MemberId) -> Result<Issued, LoanError> {
        let mut state = self.lock();
        let today = self.clock.today();

        match state.issue(book_id, member_id, today) {
            Ok(issued) => {
                self.persist(
                    &state,
                    &[Artifact::Transactions, Artifact::Books, Artifact::Meta],
                );
                info!(
                    transaction_id = %issued.transaction_id,
                    book_id = %book_id,
                    member_id = %member_id,
                    due_date = %issued.due_date,
                    "book issued"
                );
                Ok(issued)
            }
            Err(e) => {
                debug!(book_id = %book_id, member_id = %member_id, "issue refused: {}", e);
                Err(e)
            }
        }
    }

    /// Take back the member's oldest outstanding loan of `book_id`
    pub fn return_book(&self, book_id: BookId, member_id: MemberId) -> Result<Returned, LoanError> {
        let mut state = self.lock();
        let today = self.clock.today();

        match state.return_loan(book_id, member_id, today) {
            Ok(returned) => {
                // Counters are unchanged by a return
                self.persist(&state, &[Artifact::Transactions, Artifact::Books]);
                info!(
                    transaction_id = %returned.transaction_id,
                    late_days = returned.late_days,
                    fine = returned.fine,
                    "book returned"
                );
                Ok(returned)
            }
            Err(e) => {
                debug!(book_id = %book_id, member_id = %member_id, "return refused: {}", e);
                Err(e)
            }
        }
    }

    /// All books, ascending by id
    pub fn list_books(&self) -> Vec<Book> {
        self.lock().books.values().cloned().collect()
    }

    /// All members, ascending by id
    pub fn list_members(&self) -> Vec<Member> {
        self.lock().members.values().cloned().collect()
    }

    /// All transactions, ascending by id
    pub fn list_transactions(&self) -> Vec<Transaction> {
        self.lock().transactions.values().cloned().collect()
    }

    /// Transactions not yet returned, ascending by id
    pub fn active_loans(&self) -> Vec<Transaction> {
        self.lock()
            .transactions
            .values()
            .filter(|t| t.is_active())
            .cloned()
            .collect()
    }

    /// Look up a book by id
    pub fn book(&self, id: BookId) -> Option<Book> {
        self.lock().books.get(&id).cloned()
    }

    /// Look up a member by id
    pub fn member(&self, id: MemberId) -> Option<Member> {
        self.lock().members.get(&id).cloned()
    }

    /// Populate an empty library with two books and two members
    ///
    /// Does nothing if any book or member exists. Returns whether anything
    /// was added.
    pub fn seed_sample_data(&self) -> bool {
        let mut state = self.lock();
        if !state.is_unpopulated() {
            debug!("library already populated, skipping sample data");
            return false;
        }

        for (title, author) in SAMPLE_BOOKS {
            self.add_book_locked(&mut state, title, author);
        }
        for name in SAMPLE_MEMBERS {
            self.add_member_locked(&mut state, name);
        }
        info!("seeded sample data");
        true
    }

    /// Write every artifact
    ///
    /// Returns true when all four writes succeeded.
    pub fn auto_save(&self) -> bool {
        let state = self.lock();
        self.save_all(&state)
    }

    /// Stop the engine and write every artifact
    ///
    /// Clearing the running flag only informs supervisors polling
    /// [`Library::is_running`]; the engine keeps serving calls.
    pub fn shutdown(&self) -> bool {
        let state = self.lock();
        self.running.store(false, Ordering::SeqCst);
        info!("library shutting down, saving state");
        self.save_all(&state)
    }

    /// Whether [`Library::shutdown`] has not been called yet
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    fn lock(&self) -> MutexGuard<'_, LibraryState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn add_book_locked(&self, state: &mut LibraryState, title: &str, author: &str) -> Book {
        let book = state.add_book(title, author);
        self.persist(state, &[Artifact::Books, Artifact::Meta]);
        info!(book_id = %book.id, title = %book.title, "book added");
        book
    }

    fn add_member_locked(&self, state: &mut LibraryState, name: &str) -> Member {
        let member = state.add_member(name);
        self.persist(state, &[Artifact::Members, Artifact::Meta]);
        info!(member_id = %member.id, name = %member.name, "member added");
        member
    }

    /// Write the given artifacts from the locked state, logging failures
    fn persist(&self, state: &LibraryState, artifacts: &[Artifact]) {
        for artifact in artifacts {
            let result = match artifact {
                Artifact::Books => self.store.save_books(&state.books),
                Artifact::Members => self.store.save_members(&state.members),
                Artifact::Transactions => self.store.save_transactions(&state.transactions),
                Artifact::Meta => self.store.save_meta(&state.meta),
            };
            if let Err(e) = result {
                warn!(artifact = %artifact, error = %e, "save failed, in-memory state kept");
            }
        }
    }

    fn save_all(&self, state: &LibraryState) -> bool {
        let failures = self.store.save_all(state.snapshot());
        for e in &failures {
            warn!(error = %e, "save failed, in-memory state kept");
        }
        failures.is_empty()
    }
}

#[cfg(test)]
#[path = "library_tests.rs"]
mod tests;
