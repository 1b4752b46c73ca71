use libris_core::{
    Book, BookRepository, BookStatus, CatalogService, JsonFileBookRepository, RepoError,
};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use uuid::Uuid;

fn catalog_path(dir: &TempDir) -> PathBuf {
    dir.path().join("library.json")
}

#[test]
fn add_and_get_roundtrip() {
    let dir = TempDir::new().unwrap();
    let mut repo = JsonFileBookRepository::open(catalog_path(&dir)).unwrap();

    let book = Book::new("Dune", "Herbert", 1965);
    let id = repo.add_book(&book).unwrap();

    let loaded = repo.get_book(id).unwrap().unwrap();
    assert_eq!(loaded.id, book.id);
    assert_eq!(loaded.title, "Dune");
    assert_eq!(loaded.author, "Herbert");
    assert_eq!(loaded.year, 1965);
    assert_eq!(loaded.status, BookStatus::Available);
}

#[test]
fn add_persists_across_reopen() {
    let dir = TempDir::new().unwrap();
    let path = catalog_path(&dir);

    let book = Book::new("Dune", "Herbert", 1965);
    {
        let mut repo = JsonFileBookRepository::open(&path).unwrap();
        repo.add_book(&book).unwrap();
    }

    let reopened = JsonFileBookRepository::open(&path).unwrap();
    let loaded = reopened.get_book(book.id).unwrap().unwrap();
    assert_eq!(loaded, book);
}

#[test]
fn remove_deletes_only_the_requested_book() {
    let dir = TempDir::new().unwrap();
    let path = catalog_path(&dir);
    let mut repo = JsonFileBookRepository::open(&path).unwrap();

    let first = Book::new("Dune", "Herbert", 1965);
    let second = Book::new("Foundation", "Asimov", 1951);
    repo.add_book(&first).unwrap();
    repo.add_book(&second).unwrap();

    repo.remove_book(first.id).unwrap();

    assert!(repo.get_book(first.id).unwrap().is_none());
    assert!(repo.get_book(second.id).unwrap().is_some());

    let reopened = JsonFileBookRepository::open(&path).unwrap();
    assert_eq!(reopened.len(), 1);
    assert!(reopened.get_book(second.id).unwrap().is_some());
}

#[test]
fn remove_unknown_id_leaves_file_untouched() {
    let dir = TempDir::new().unwrap();
    let path = catalog_path(&dir);
    let mut repo = JsonFileBookRepository::open(&path).unwrap();
    repo.add_book(&Book::new("Dune", "Herbert", 1965)).unwrap();

    let before = fs::read(&path).unwrap();
    let missing = Uuid::new_v4();
    let err = repo.remove_book(missing).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == missing));

    let after = fs::read(&path).unwrap();
    assert_eq!(before, after);
}

#[test]
fn set_status_updates_record_and_disk() {
    let dir = TempDir::new().unwrap();
    let path = catalog_path(&dir);
    let mut repo = JsonFileBookRepository::open(&path).unwrap();

    let book = Book::new("Dune", "Herbert", 1965);
    repo.add_book(&book).unwrap();
    repo.set_status(book.id, BookStatus::Lent).unwrap();

    let loaded = repo.get_book(book.id).unwrap().unwrap();
    assert_eq!(loaded.status, BookStatus::Lent);

    let reopened = JsonFileBookRepository::open(&path).unwrap();
    let persisted = reopened.get_book(book.id).unwrap().unwrap();
    assert_eq!(persisted.status, BookStatus::Lent);
}

#[test]
fn set_status_unknown_id_returns_not_found() {
    let dir = TempDir::new().unwrap();
    let mut repo = JsonFileBookRepository::open(catalog_path(&dir)).unwrap();

    let missing = Uuid::new_v4();
    let err = repo.set_status(missing, BookStatus::Lent).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == missing));
}

#[test]
fn list_returns_every_book_without_mutating() {
    let dir = TempDir::new().unwrap();
    let path = catalog_path(&dir);
    let mut repo = JsonFileBookRepository::open(&path).unwrap();

    let first = Book::new("Dune", "Herbert", 1965);
    let second = Book::new("Foundation", "Asimov", 1951);
    repo.add_book(&first).unwrap();
    repo.add_book(&second).unwrap();

    let before = fs::read(&path).unwrap();
    let ids: HashSet<_> = repo
        .list_books()
        .unwrap()
        .into_iter()
        .map(|book| book.id)
        .collect();
    assert_eq!(ids, HashSet::from([first.id, second.id]));

    let after = fs::read(&path).unwrap();
    assert_eq!(before, after);
}

#[test]
fn generated_ids_are_unique_across_adds() {
    let dir = TempDir::new().unwrap();
    let mut service = CatalogService::new(
        JsonFileBookRepository::open(catalog_path(&dir)).unwrap(),
    );

    let mut seen = HashSet::new();
    for n in 0..50 {
        let book = service.add_book("Title", "Author", 1900 + n).unwrap();
        assert!(seen.insert(book.id), "duplicate id generated: {}", book.id);
    }
    assert_eq!(service.list_books().unwrap().len(), 50);
}

#[test]
fn service_wraps_repository_calls() {
    let dir = TempDir::new().unwrap();
    let repo = JsonFileBookRepository::open(catalog_path(&dir)).unwrap();
    let mut service = CatalogService::new(repo);

    let book = service.add_book("Dune", "Herbert", 1965).unwrap();
    assert_eq!(book.status, BookStatus::Available);

    let fetched = service.get_book(book.id).unwrap().unwrap();
    assert_eq!(fetched.title, "Dune");

    service.set_status(book.id, BookStatus::Lent).unwrap();
    assert_eq!(
        service.get_book(book.id).unwrap().unwrap().status,
        BookStatus::Lent
    );

    service.remove_book(book.id).unwrap();
    assert!(service.get_book(book.id).unwrap().is_none());
}
