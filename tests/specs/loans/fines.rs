//! Late fines at return time

use crate::prelude::*;
use shelf_core::{BookId, MemberId};

fn lend_one(project: &Project) -> shelf_engine::Library<shelf_core::FakeClock> {
    let library = project.open();
    library.add_book("Clean Code", "Robert C. Martin");
    library.add_member("Alice");
    library.issue_book(BookId(1), MemberId(1)).unwrap();
    library
}

#[test]
fn return_on_due_date_is_free() {
    let project = Project::empty();
    let library = lend_one(&project);
    project.clock.advance_days(14);

    let returned = library.return_book(BookId(1), MemberId(1)).unwrap();
    assert_eq!(returned.late_days, 0);
    assert_eq!(returned.fine, 0.0);
}

#[test]
fn one_day_late_costs_five() {
    let project = Project::empty();
    let library = lend_one(&project);
    project.clock.advance_days(15);

    let returned = library.return_book(BookId(1), MemberId(1)).unwrap();
    assert_eq!(returned.late_days, 1);
    assert_eq!(returned.fine, 5.0);
    assert_eq!(returned.to_string(), "Book returned. Late days: 1. Fine: 5.00");
}

#[test]
fn early_return_reports_zero_late_days() {
    let project = Project::empty();
    let library = lend_one(&project);
    project.clock.advance_days(11);

    let returned = library.return_book(BookId(1), MemberId(1)).unwrap();
    assert_eq!(returned.late_days, 0);
    assert_eq!(returned.fine, 0.0);
}

#[test]
fn lateness_survives_a_restart() {
    let project = Project::empty();
    drop(lend_one(&project));
    project.clock.advance_days(20);

    let library = project.open();
    let returned = library.return_book(BookId(1), MemberId(1)).unwrap();
    assert_eq!(returned.late_days, 6);
    assert_eq!(returned.fine, 30.0);
    assert_eq!(
        library.list_transactions()[0].return_date,
        Some(date(2026, 10, 21))
    );
}
