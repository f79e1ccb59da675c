//! Saves are per file, not across files
//!
//! A crash between a collection write and the meta write leaves the id
//! counters behind the collections. These specs pin down what happens then.

use crate::prelude::*;
use shelf_core::{BookId, MemberId, TransactionId};
use shelf_storage::Meta;

#[test]
fn stale_transaction_counter_reuses_an_id_and_replaces_the_loan() {
    let project = Project::empty();
    {
        let library = project.open();
        library.add_book("Clean Code", "Robert C. Martin");
        library.add_book("Dune", "Frank Herbert");
        library.add_member("Alice");
        library.issue_book(BookId(1), MemberId(1)).unwrap();

        // Meta as it was before the issue reached disk
        let store = library.store();
        let mut meta = store.load_meta();
        meta.next_transaction_id = 1;
        store.save_meta(&meta).unwrap();
    }

    let library = project.open();
    let issued = library.issue_book(BookId(2), MemberId(1)).unwrap();

    assert_eq!(issued.transaction_id, TransactionId(1));
    let transactions = library.list_transactions();
    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].book_id, BookId(2));
    // The overwritten loan's copy stays checked out
    assert_eq!(library.book(BookId(1)).unwrap().copies, 0);
}

#[test]
fn missing_meta_restarts_counters_at_one() {
    let project = Project::empty();
    {
        let library = project.open();
        library.add_member("Alice");
        library.add_member("Bob");
    }
    std::fs::remove_file(project.data_dir().join("meta.json")).unwrap();

    let library = project.open();
    assert_eq!(library.store().load_meta(), Meta::default());
    let carol = library.add_member("Carol");

    assert_eq!(carol.id, MemberId(1));
    let names: Vec<_> = library.list_members().into_iter().map(|m| m.name).collect();
    assert_eq!(names, vec!["Carol", "Bob"]);
}
