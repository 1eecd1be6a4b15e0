//! Integration tests for the public API
//!
//! Tests the full flow: metadata → store → navigation → rendered list view

use list_pager::cli::{render, run_repl, Control, ListView};
use list_pager::loader::load_metadata_from_str;
use list_pager::types::OutputFormat;
use list_pager::{ListMetadata, PageCount, Pagination, PaginationStore};
use pretty_assertions::assert_eq;

const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

// ============================================================================
// Scenario Tests
// ============================================================================

#[test]
fn test_first_page_of_two() {
    let store = PaginationStore::new();
    let state = store.initialize(4, 2, None);

    assert_eq!(state.current_page, 1);
    assert_eq!(state.total_pages, PageCount::Finite(2));
    assert_eq!(state.page_size, 2);
    assert!(state.next_enabled);
    assert!(!state.previous_enabled);
    assert!(ListView::from(&state).offers(Control::ViewMore));
}

#[test]
fn test_view_more_reaches_last_page() {
    let store = PaginationStore::from_metadata(&ListMetadata::new(4, 2));
    let state = store.advance();

    assert_eq!(state.current_page, 2);
    assert_eq!(state.total_pages, PageCount::Finite(2));
    assert!(!state.next_enabled);
    assert!(!ListView::from(&state).offers(Control::ViewMore));
}

#[test]
fn test_view_previous_returns_to_first_page() {
    let store = PaginationStore::from_metadata(&ListMetadata::new(4, 2));
    store.advance();
    let state = store.retreat();

    assert_eq!(state.current_page, 1);
    assert!(!ListView::from(&state).offers(Control::ViewPrevious));
}

#[test]
fn test_view_first_page() {
    let store = PaginationStore::from_metadata(&ListMetadata::new(10, 2));
    store.advance();
    let state = store.reset();

    assert_eq!(
        state,
        Pagination {
            current_page: 1,
            page_size: 2,
            total_items: 10,
            total_pages: PageCount::Finite(5),
            next_enabled: true,
            previous_enabled: false,
        }
    );
    let view = ListView::from(&state);
    assert!(view.offers(Control::ViewMore));
    assert!(!view.offers(Control::ViewFirst));
}

// ============================================================================
// Edge Case Tests
// ============================================================================

#[test]
fn test_max_safe_integer_pages() {
    let state = PaginationStore::new().initialize(MAX_SAFE_INTEGER, 1, None);
    assert_eq!(state.total_pages, PageCount::Finite(MAX_SAFE_INTEGER));
    assert!(state.next_enabled);
    assert_eq!(
        render(&state, OutputFormat::Pretty).unwrap().lines().nth(1),
        Some("totalPages: 9007199254740991")
    );
}

#[test]
fn test_max_safe_integer_page_size() {
    let state = PaginationStore::new().initialize(MAX_SAFE_INTEGER, MAX_SAFE_INTEGER, None);
    assert_eq!(state.total_pages, PageCount::Finite(1));
    assert_eq!(state.page_size, MAX_SAFE_INTEGER);
}

#[test]
fn test_consumer_banners_for_degenerate_metadata() {
    let cases = [
        ("total: -4\nperPage: 2", ListView::Invalid),
        ("total: 4\nperPage: -2", ListView::Invalid),
        ("total: 0\nperPage: 2", ListView::Empty),
        ("total: 2\nperPage: 0", ListView::Empty),
    ];

    for (yaml, expected) in cases {
        let metadata = load_metadata_from_str(yaml).unwrap();
        let store = PaginationStore::from_metadata(&metadata);
        assert_eq!(ListView::from(&store.current()), expected, "{yaml}");
    }
}

// ============================================================================
// Property Tests
// ============================================================================

#[test]
fn test_total_pages_is_ceiling() {
    for total in 1..=200_i64 {
        for per_page in 1..=25_i64 {
            let state = Pagination::initialize(total, per_page, None);
            let expected = (total + per_page - 1) / per_page;
            assert_eq!(state.total_pages, PageCount::Finite(expected));
        }
    }
}

#[test]
fn test_idempotent_boundaries() {
    let store = PaginationStore::from_metadata(&ListMetadata::new(7, 3));
    while store.current().next_enabled {
        store.advance();
    }
    let last = store.current();
    for _ in 0..5 {
        assert_eq!(store.advance().current_page, last.current_page);
    }

    store.reset();
    for _ in 0..5 {
        assert_eq!(store.retreat().current_page, 1);
        assert!(!store.current().previous_enabled);
    }
}

#[test]
fn test_metadata_change_replaces_state() {
    let store = PaginationStore::from_metadata(&ListMetadata::new(10, 2));
    store.advance();
    store.advance();

    let state = store.initialize_from(&ListMetadata::new(3, 2));
    assert_eq!(state.current_page, 1);
    assert_eq!(state.total_pages, PageCount::Finite(2));
    assert!(state.next_enabled);
    assert!(!state.previous_enabled);
}

// ============================================================================
// Interactive Session Tests
// ============================================================================

#[tokio::test]
async fn test_repl_session_pretty() {
    let store = PaginationStore::new();
    let input: &[u8] = b"init 10 2\nnext\nfirst\nshow\n";
    let out = run_repl(store.clone(), input, Vec::new(), OutputFormat::Pretty)
        .await
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    let pages: Vec<&str> = text
        .lines()
        .filter(|line| line.starts_with("currentPage: "))
        .collect();
    assert_eq!(
        pages,
        ["currentPage: 1", "currentPage: 2", "currentPage: 1", "currentPage: 1"]
    );
    assert!(text.ends_with("currentPage: 1\ntotalPages: 5\npageSize: 2\n[next] view more\n"));
    assert_eq!(store.current().current_page, 1);
}
