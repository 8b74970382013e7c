use crate::catalog::{Temple, TEMPLES, TIPS};
use crate::filter::{filter_temples, filter_tips, TempleFilter, TipFilter};
use crate::storage::{FileStore, KeyValueStore, MemoryStore, STORAGE_REVIEW_COUNT};

const TIP_SELECTORS: &[&str] = &["all", "beginner", "intermediate", "expert", ""];
const TEMPLE_SELECTORS: &[&str] = &["all", "old", "new", "large", "small", "home", "x"];

fn is_ordered_subsequence<T: PartialEq>(sub: &[&T], source: &[T]) -> bool {
    let mut it = source.iter();
    sub.iter().all(|s| it.any(|x| x == *s))
}

#[test]
fn every_tip_selector_yields_ordered_subsequence() {
    for sel in TIP_SELECTORS {
        let out = filter_tips(TIPS, TipFilter::parse(sel));
        assert!(is_ordered_subsequence(&out, TIPS), "selector {sel}");
    }
}

#[test]
fn every_temple_selector_yields_ordered_subsequence() {
    for sel in TEMPLE_SELECTORS {
        let out = filter_temples(TEMPLES, TempleFilter::parse(sel));
        assert!(is_ordered_subsequence(&out, TEMPLES), "selector {sel}");
    }
}

#[test]
fn old_and_new_are_disjoint_and_skip_yearless_records() {
    let mut temples: Vec<Temple> = TEMPLES.to_vec();
    temples.push(Temple {
        temple_name: "Pending",
        location: "Somewhere",
        dedicated: "to be announced",
        area: 50_000,
        image_url: "images/temple.jpg",
    });
    let old = filter_temples(&temples, TempleFilter::Old);
    let new = filter_temples(&temples, TempleFilter::New);
    assert!(old.iter().all(|o| !new.contains(o)));
    assert!(!old.iter().chain(new.iter()).any(|t| t.temple_name == "Pending"));
}

#[test]
fn filtering_does_not_touch_source() {
    let before = TEMPLES.to_vec();
    let _ = filter_temples(TEMPLES, TempleFilter::Large);
    assert_eq!(before.as_slice(), TEMPLES);
}

#[test]
fn double_toggle_restores_membership() {
    let mut store = MemoryStore::new();
    for id in [4, 1, 3] {
        crate::state::toggle_favorite(&mut store, id).unwrap();
    }
    let before = crate::state::load_favorites(&store);
    for id in [1, 2] {
        crate::state::toggle_favorite(&mut store, id).unwrap();
        let after = crate::state::toggle_favorite(&mut store, id).unwrap();
        let mut sorted_after = after.clone();
        let mut sorted_before = before.clone();
        sorted_after.sort_unstable();
        sorted_before.sort_unstable();
        assert_eq!(sorted_after, sorted_before);
    }
    // toggling a present id twice moves it to the end; an absent id leaves order intact
    assert_eq!(crate::state::load_favorites(&store), vec![4, 3, 1]);
    let mut fresh = MemoryStore::new();
    crate::state::toggle_favorite(&mut fresh, 9).unwrap();
    crate::state::toggle_favorite(&mut fresh, 9).unwrap();
    assert!(crate::state::load_favorites(&fresh).is_empty());
}

#[test]
fn escaping_example_from_review_form() {
    assert_eq!(
        crate::render::escape_html(r#"Bob & "Friend" <3>"#),
        "Bob &amp; &quot;Friend&quot; &lt;3&gt;"
    );
}

#[test]
fn confirmation_for_performance_tee_counts_once() {
    let mut store = MemoryStore::new();
    store.set(STORAGE_REVIEW_COUNT, "4").unwrap();

    let query =
        crate::review::ReviewQuery::parse("?product=prd-002&rating=4&features=a&features=b");
    let confirmation = crate::review::confirm(&mut store, &query).unwrap();

    assert!(confirmation.submitted);
    assert!(confirmation
        .markup
        .contains("MaxiFit Oversized Tee - Performance"));
    assert!(confirmation.markup.contains("<ul><li>a</li><li>b</li></ul>"));
    assert_eq!(confirmation.markup.matches("<li>").count(), 2);
    assert_eq!(confirmation.submission_count, Some(5));
    assert_eq!(crate::state::load_review_count(&store), 5);
}

#[test]
fn confirmation_without_query_leaves_counter() {
    let mut store = MemoryStore::new();
    store.set(STORAGE_REVIEW_COUNT, "4").unwrap();

    let confirmation =
        crate::review::confirm(&mut store, &crate::review::ReviewQuery::parse("")).unwrap();

    assert!(!confirmation.submitted);
    assert_eq!(confirmation.submission_count, None);
    assert_eq!(store.get(STORAGE_REVIEW_COUNT).as_deref(), Some("4"));
}

#[test]
fn unknown_product_renders_raw_id() {
    let mut store = MemoryStore::new();
    let query = crate::review::ReviewQuery::parse("product=prd-777");
    let confirmation = crate::review::confirm(&mut store, &query).unwrap();
    assert_eq!(confirmation.product_name.as_deref(), Some("prd-777"));
    assert!(confirmation.markup.contains("<strong>prd-777</strong>"));
}

#[test]
fn profile_survives_file_store_reopen_and_clear() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let mut store = FileStore::open(&path);
    crate::state::save_user(&mut store, "Ana", "mobility").unwrap();
    crate::state::toggle_favorite(&mut store, 2).unwrap();

    let mut reopened = FileStore::open(&path);
    let user = crate::state::load_user(&reopened).unwrap();
    assert_eq!(user.name, "Ana");
    assert_eq!(user.pref, "mobility");
    assert_eq!(crate::state::load_favorites(&reopened), vec![2]);

    crate::state::clear_saved_data(&mut reopened).unwrap();
    let cleared = FileStore::open(&path);
    assert_eq!(crate::state::load_user(&cleared), None);
    assert!(crate::state::load_favorites(&cleared).is_empty());
}

#[test]
fn stores_are_interchangeable_behind_trait_objects() {
    let dir = tempfile::tempdir().unwrap();
    let mut stores: Vec<Box<dyn KeyValueStore>> = vec![
        Box::new(MemoryStore::new()),
        Box::new(FileStore::open(dir.path().join("storage.json"))),
    ];
    for store in stores.iter_mut() {
        let store = store.as_mut();
        assert_eq!(crate::state::increment_review_count(store).unwrap(), 1);
        assert_eq!(crate::state::toggle_favorite(store, 3).unwrap(), vec![3]);
        assert_eq!(crate::state::load_user(&*store), None);
    }
}
