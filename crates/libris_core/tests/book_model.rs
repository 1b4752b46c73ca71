use libris_core::{Book, BookStatus};
use uuid::Uuid;

#[test]
fn book_serializes_with_expected_field_names() {
    let id = Uuid::parse_str("00000000-0000-4000-8000-000000000001").unwrap();
    let book = Book::with_id(id, "Dune", "Herbert", 1965);

    let value = serde_json::to_value(&book).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "id": "00000000-0000-4000-8000-000000000001",
            "title": "Dune",
            "author": "Herbert",
            "year": 1965,
            "status": "available"
        })
    );
}

#[test]
fn book_deserializes_from_backing_file_shape() {
    let text = r#"{
        "id": "00000000-0000-4000-8000-000000000002",
        "title": "Foundation",
        "author": "Asimov",
        "year": 1951,
        "status": "lent"
    }"#;

    let book: Book = serde_json::from_str(text).unwrap();
    assert_eq!(book.title, "Foundation");
    assert_eq!(book.year, 1951);
    assert_eq!(book.status, BookStatus::Lent);
}

#[test]
fn unknown_status_value_fails_deserialization() {
    let text = r#"{
        "id": "00000000-0000-4000-8000-000000000003",
        "title": "Dune",
        "author": "Herbert",
        "year": 1965,
        "status": "borrowed"
    }"#;

    assert!(serde_json::from_str::<Book>(text).is_err());
}

#[test]
fn negative_year_is_accepted_as_is() {
    let book = Book::new("Ars Poetica", "Horace", -19);
    let roundtrip: Book = serde_json::from_str(&serde_json::to_string(&book).unwrap()).unwrap();
    assert_eq!(roundtrip.year, -19);
}
