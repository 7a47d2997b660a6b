//! Snapshot tests for reader views using insta
//!
//! These capture the serialized shape consumed by front-ends so that
//! field renames or reorderings show up as test failures.

use gita_core::content::bhagavad_gita;
use gita_core::{ReaderController, ReaderView};
use std::sync::Arc;

#[test]
fn test_not_found_panel_json() {
    let reader = ReaderController::mount(Arc::new(bhagavad_gita()), Some("1"), Some("5"));
    let view = ReaderView::of(&reader);

    insta::assert_json_snapshot!(view, @r###"
    {
      "state": "not_found",
      "message": "The requested chapter or verse is not available yet.",
      "requested": {
        "text_id": "gita",
        "chapter": 1,
        "verse": 5,
        "reason": "verse_out_of_range"
      },
      "recovery_location": "/read/gita/1/1"
    }
    "###);
}

#[test]
fn test_verse_view_navigation_fields() {
    let mut reader = ReaderController::mount(Arc::new(bhagavad_gita()), Some("1"), Some("1"));
    reader.next().unwrap();
    reader.select_commentary("easwaran").unwrap();

    let ReaderView::Verse(view) = ReaderView::of(&reader) else {
        panic!("expected a verse view");
    };

    insta::assert_json_snapshot!(view.chapter, @r###"
    {
      "number": 1,
      "title": "Arjuna's Dilemma",
      "sanskrit_title": "अर्जुन उवाच",
      "verse_count": 2
    }
    "###);
    assert_eq!(view.location, "/read/gita/1/2");
    assert_eq!(view.previous.as_deref(), Some("/read/gita/1/1"));
    assert_eq!(view.next, None);
    assert_eq!(view.selected_commentary.as_deref(), Some("easwaran"));
    assert_eq!(view.share_title, "Bhagavad Gita 1.2");
    assert!(view.copy_text.starts_with(&view.sanskrit));
}
