//! Reloading a data directory after a restart

use crate::prelude::*;
use shelf_core::{BookId, MemberId, TransactionId};
use shelf_storage::Artifact;

#[test]
fn saved_state_reloads_identically() {
    let project = Project::empty();
    let (books, members, transactions) = {
        let library = project.open();
        library.add_book("Clean Code", "Robert C. Martin");
        library.add_book("Dune", "Frank Herbert");
        library.add_member("Alice");
        library.issue_book(BookId(2), MemberId(1)).unwrap();
        project.clock.advance_days(16);
        library.return_book(BookId(2), MemberId(1)).unwrap();
        library.issue_book(BookId(1), MemberId(1)).unwrap();
        assert!(library.auto_save());
        (
            library.list_books(),
            library.list_members(),
            library.list_transactions(),
        )
    };

    let library = project.open();
    similar_asserts::assert_eq!(library.list_books(), books);
    similar_asserts::assert_eq!(library.list_members(), members);
    similar_asserts::assert_eq!(library.list_transactions(), transactions);
}

#[test]
fn counters_resume_after_restart() {
    let project = Project::empty();
    {
        let library = project.open();
        library.add_book("Clean Code", "Robert C. Martin");
        library.add_member("Alice");
        library.issue_book(BookId(1), MemberId(1)).unwrap();
        library.shutdown();
    }

    let library = project.open();
    assert_eq!(library.add_book("Dune", "Frank Herbert").id, BookId(2));
    assert_eq!(library.add_member("Bob").id, MemberId(2));
    let issued = library.issue_book(BookId(2), MemberId(2)).unwrap();
    assert_eq!(issued.transaction_id, TransactionId(2));
    assert_eq!(library.list_transactions().len(), 2);
}

#[test]
fn missing_directory_contents_start_empty() {
    let project = Project::empty();
    let library = project.open();

    assert!(library.list_books().is_empty());
    assert!(library.list_members().is_empty());
    assert!(library.list_transactions().is_empty());
    assert_eq!(library.add_book("Dune", "Frank Herbert").id, BookId(1));
}

#[test]
fn corrupt_collection_is_treated_as_empty() {
    let project = Project::empty();
    {
        let library = project.open();
        library.add_book("Dune", "Frank Herbert");
        library.add_member("Alice");
    }
    let books_path = project.data_dir().join(Artifact::Books.file_name());
    std::fs::write(&books_path, "{ not json").unwrap();

    let library = project.open();
    assert!(library.list_books().is_empty());
    assert_eq!(library.list_members().len(), 1);
    // Meta survived, so the next book does not reuse id 1
    assert_eq!(library.add_book("Emma", "Jane Austen").id, BookId(2));
}

#[test]
fn sample_data_is_seeded_once_across_restarts() {
    let project = Project::empty();
    {
        let library = project.open();
        assert!(library.seed_sample_data());
        assert!(!library.seed_sample_data());
    }

    let library = project.open();
    assert!(!library.seed_sample_data());
    let titles: Vec<_> = library.list_books().into_iter().map(|b| b.title).collect();
    assert_eq!(titles, vec!["Clean Code", "Introduction to Algorithms"]);
    assert_eq!(library.list_members().len(), 2);
}

#[test]
fn files_on_disk_are_versioned_json() {
    let project = Project::empty();
    let library = project.open();
    library.add_book("Dune", "Frank Herbert");
    library.add_member("Alice");
    library.issue_book(BookId(1), MemberId(1)).unwrap();

    let read = |artifact: Artifact| -> serde_json::Value {
        let text = std::fs::read_to_string(project.data_dir().join(artifact.file_name())).unwrap();
        serde_json::from_str(&text).unwrap()
    };

    let books = read(Artifact::Books);
    assert_eq!(books["format_version"], shelf_storage::FORMAT_VERSION);
    assert_eq!(books["records"][0]["title"], "Dune");
    assert_eq!(books["records"][0]["copies"], 0);

    let transactions = read(Artifact::Transactions);
    assert_eq!(transactions["records"][0]["issue_date"], "2026-10-01");
    assert_eq!(transactions["records"][0]["due_date"], "2026-10-15");
    assert_eq!(transactions["records"][0]["returned"], false);

    let meta = read(Artifact::Meta);
    assert_eq!(meta["next_book_id"], 2);
    assert_eq!(meta["next_transaction_id"], 2);
}

#[test]
fn zero_counter_in_meta_never_hands_out_id_zero() {
    let project = Project::empty();
    std::fs::create_dir_all(project.data_dir()).unwrap();
    std::fs::write(
        project.data_dir().join(Artifact::Meta.file_name()),
        r#"{"format_version": 1, "next_book_id": 0, "next_member_id": 0, "next_transaction_id": 0}"#,
    )
    .unwrap();

    let library = project.open();
    assert_eq!(library.add_book("Dune", "Frank Herbert").id, BookId(1));
    assert_eq!(library.add_member("Alice").id, MemberId(1));
    let issued = library.issue_book(BookId(1), MemberId(1)).unwrap();
    assert_eq!(issued.transaction_id, TransactionId(1));
}

#[test]
fn damaged_loan_record_does_not_strand_the_others() {
    let project = Project::empty();
    {
        let library = project.open();
        library.add_book("Clean Code", "Robert C. Martin");
        library.add_book("Dune", "Frank Herbert");
        library.add_member("Alice");
        library.issue_book(BookId(1), MemberId(1)).unwrap();
        library.issue_book(BookId(2), MemberId(1)).unwrap();
    }
    let path = project.data_dir().join(Artifact::Transactions.file_name());
    let mut file: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    file["records"][1].as_object_mut().unwrap().remove("issue_date");
    std::fs::write(&path, serde_json::to_string(&file).unwrap()).unwrap();

    let library = project.open();
    let transactions = library.list_transactions();
    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].id, TransactionId(1));

    library.return_book(BookId(1), MemberId(1)).unwrap();
    assert_eq!(library.book(BookId(1)).unwrap().copies, 1);
}
