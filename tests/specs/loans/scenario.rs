//! End-to-end loan lifecycle

use crate::prelude::*;
use shelf_core::{BookId, MemberId, TransactionId};
use shelf_engine::LoanError;

#[test]
fn issue_and_return_walkthrough() {
    let project = Project::empty();
    let library = project.open();

    let book = library.add_book("Clean Code", "Robert C. Martin");
    assert_eq!(book.id, BookId(1));
    assert_eq!(book.copies, 1);

    // Member 1 does not exist yet
    let err = library.issue_book(BookId(1), MemberId(1)).unwrap_err();
    assert_eq!(err, LoanError::MemberNotFound(MemberId(1)));
    assert_eq!(library.book(BookId(1)).unwrap().copies, 1);

    let alice = library.add_member("Alice");
    assert_eq!(alice.id, MemberId(1));

    let issued = library.issue_book(BookId(1), MemberId(1)).unwrap();
    assert_eq!(issued.transaction_id, TransactionId(1));
    assert_eq!(library.book(BookId(1)).unwrap().copies, 0);

    let err = library.issue_book(BookId(1), MemberId(1)).unwrap_err();
    assert!(matches!(err, LoanError::NoCopiesAvailable { .. }));
    assert_eq!(err.to_string(), "No copies available for: Clean Code");

    library.return_book(BookId(1), MemberId(1)).unwrap();
    assert_eq!(library.book(BookId(1)).unwrap().copies, 1);
    assert!(library.list_transactions()[0].returned);

    let err = library.return_book(BookId(1), MemberId(1)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "No active transaction found for Book ID 1 and Member ID 1"
    );
}

#[test]
fn unknown_book_is_reported_before_unknown_member() {
    let project = Project::empty();
    let library = project.open();

    let err = library.issue_book(BookId(3), MemberId(4)).unwrap_err();
    assert_eq!(err.to_string(), "Book not found (ID: 3)");
}

#[test]
fn every_loan_is_due_fourteen_days_after_issue() {
    let project = Project::empty();
    let library = project.open();
    library.add_book("A", "Anon");
    library.add_book("B", "Anon");
    library.add_member("Alice");

    library.issue_book(BookId(1), MemberId(1)).unwrap();
    project.clock.advance_days(9);
    library.issue_book(BookId(2), MemberId(1)).unwrap();

    for loan in library.list_transactions() {
        assert_eq!(
            loan.due_date.signed_duration_since(loan.issue_date).num_days(),
            14
        );
    }
}

#[test]
fn same_member_can_hold_two_copies_and_returns_oldest_first() {
    let project = Project::empty();
    {
        // Two copies on the shelf, as recorded by an earlier process
        let library = project.open();
        library.add_book("Clean Code", "Robert C. Martin");
        library.add_member("Alice");
        let mut books = library.store().load_books();
        books.get_mut(&BookId(1)).unwrap().copies = 2;
        library.store().save_books(&books).unwrap();
    }

    let library = project.open();
    let first = library.issue_book(BookId(1), MemberId(1)).unwrap();
    project.clock.advance_days(3);
    let second = library.issue_book(BookId(1), MemberId(1)).unwrap();
    assert_eq!(library.active_loans().len(), 2);
    assert_eq!(library.book(BookId(1)).unwrap().copies, 0);

    let returned = library.return_book(BookId(1), MemberId(1)).unwrap();
    assert_eq!(returned.transaction_id, first.transaction_id);

    let returned = library.return_book(BookId(1), MemberId(1)).unwrap();
    assert_eq!(returned.transaction_id, second.transaction_id);
    assert_eq!(library.book(BookId(1)).unwrap().copies, 2);
}
