use contacts::model::*;

fn record(name: &str, phone: &str) -> Record {
    let mut r = Record::new(name);
    r.add_phone(phone).unwrap();
    r
}

// ==========================================================================
// ADD / LOOKUP / REMOVE
// ==========================================================================

#[test]
fn add_record_then_get() {
    let mut book = AddressBook::new();
    book.add_record(record("Alice", "5551234567"));

    assert_eq!(book.len(), 1);
    assert!(book.contains("Alice"));
    let alice = book.get("Alice").unwrap();
    assert_eq!(alice.phones()[0].value(), Some("5551234567"));
}

#[test]
fn get_is_exact_match_only() {
    let mut book = AddressBook::new();
    book.add_record(record("Alice", "5551234567"));
    assert!(book.get("alice").is_none());
    assert!(book.get("Ali").is_none());
}

#[test]
fn add_record_same_name_overwrites() {
    let mut book = AddressBook::new();
    book.add_record(record("Alice", "5551111111"));
    book.add_record(record("Alice", "5552222222"));

    assert_eq!(book.len(), 1);
    let alice = book.get("Alice").unwrap();
    assert_eq!(alice.phones()[0].value(), Some("5552222222"));
}

#[test]
fn overwrite_keeps_original_position() {
    let mut book = AddressBook::new();
    book.add_record(record("Alice", "5551111111"));
    book.add_record(record("Bob", "5552222222"));
    book.add_record(record("Alice", "5553333333"));

    let names: Vec<&str> = book.records().map(|r| r.name()).collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
}

#[test]
fn remove_returns_the_record() {
    let mut book = AddressBook::new();
    book.add_record(record("Alice", "5551234567"));

    let removed = book.remove("Alice").unwrap();
    assert_eq!(removed.name(), "Alice");
    assert!(book.is_empty());
}

#[test]
fn remove_missing_name_returns_none() {
    let mut book = AddressBook::new();
    book.add_record(record("Alice", "5551234567"));
    assert!(book.remove("Bob").is_none());
    assert_eq!(book.len(), 1);
}

#[test]
fn remove_preserves_order_of_the_rest() {
    let mut book = AddressBook::new();
    for name in ["Alice", "Bob", "Carol"] {
        book.add_record(record(name, "5551234567"));
    }
    book.remove("Bob").unwrap();

    let names: Vec<&str> = book.records().map(|r| r.name()).collect();
    assert_eq!(names, vec!["Alice", "Carol"]);
}

#[test]
fn get_mut_allows_editing_in_place() {
    let mut book = AddressBook::new();
    book.add_record(record("Alice", "5551111111"));

    book.get_mut("Alice")
        .unwrap()
        .edit_phone(0, "5559999999")
        .unwrap();
    assert_eq!(
        book.get("Alice").unwrap().phones()[0].value(),
        Some("5559999999")
    );
}

// ==========================================================================
// PAGINATION
// ==========================================================================

#[test]
fn pages_of_two_over_five_records() {
    let mut book = AddressBook::new();
    for name in ["Alice", "Bob", "Carol", "Dave", "Eve"] {
        book.add_record(record(name, "5551234567"));
    }

    let batches: Vec<Vec<Record>> = book.pages(2).collect();
    let sizes: Vec<usize> = batches.iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![2, 2, 1]);

    let names: Vec<&str> = batches.iter().flatten().map(Record::name).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Carol", "Dave", "Eve"]);
}

#[test]
fn pages_of_one_yield_single_records() {
    let mut book = AddressBook::new();
    for name in ["Alice", "Bob", "Carol"] {
        book.add_record(record(name, "5551234567"));
    }
    assert_eq!(book.pages(1).count(), 3);
}

#[test]
fn page_size_zero_is_treated_as_one() {
    let mut book = AddressBook::new();
    book.add_record(record("Alice", "5551234567"));
    book.add_record(record("Bob", "5551234567"));
    assert_eq!(book.pages(0).count(), 2);
}

#[test]
fn pages_over_empty_book_yield_nothing() {
    let book = AddressBook::new();
    assert_eq!(book.pages(3).count(), 0);
}

#[test]
fn pages_snapshot_ignores_later_mutation() {
    let mut book = AddressBook::new();
    book.add_record(record("Alice", "5551234567"));
    book.add_record(record("Bob", "5551234567"));

    let pages = book.pages(1);
    book.add_record(record("Carol", "5551234567"));
    book.remove("Alice").unwrap();

    let names: Vec<String> = pages
        .flatten()
        .map(|r| r.name().to_string())
        .collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
}

// ==========================================================================
// RENDERING
// ==========================================================================

#[test]
fn book_display_concatenates_records() {
    let mut book = AddressBook::new();
    book.add_record(record("Alice", "555-123-4567"));
    book.add_record(record("Bob", "555-987-6543"));

    assert_eq!(
        book.to_string(),
        "Name: Alice\n5551234567\nName: Bob\n5559876543"
    );
}

#[test]
fn empty_book_displays_empty() {
    assert_eq!(AddressBook::new().to_string(), "");
}
