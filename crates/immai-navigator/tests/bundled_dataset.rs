//! Consistency checks over the bundled catalog, forms and detail pages.

use immai_navigator::{DetailTable, DetailView, Navigator, SelectionAction, SelectionState};
use pretty_assertions::assert_eq;

#[test]
fn test_bundled_catalog_shape() {
    let nav = Navigator::bundled().expect("bundled dataset should load");
    let ids: Vec<&str> = nav.catalog().categories().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["family", "employment", "humanitarian", "diversity", "special", "nonimmigrant-adjustment", "military"]
    );
    assert_eq!(nav.catalog().paths().count(), 42);
}

#[test]
fn test_every_referenced_form_is_described() {
    let nav = Navigator::bundled().unwrap();
    for path in nav.catalog().paths() {
        assert!(!path.forms.is_empty(), "path {} lists no forms", path.id);
        for code in &path.forms {
            assert!(
                nav.forms().describe(code).is_some(),
                "form {code} used by {} has no description",
                path.id
            );
        }
    }
}

#[test]
fn test_detail_pages_belong_to_catalog_paths() {
    let nav = Navigator::bundled().unwrap();
    let mut covered = 0;
    for path in nav.catalog().paths() {
        if nav.details().get(&path.id).is_some() {
            covered += 1;
        }
    }
    assert_eq!(covered, nav.details().len(), "detail page keyed by an unknown path id");
}

#[test]
fn test_navigator_session_walkthrough() {
    let nav = Navigator::bundled().unwrap();
    let mut state = SelectionState::new();

    nav.apply(&mut state, &SelectionAction::SelectCategory { id: "humanitarian".into() }).unwrap();
    nav.apply(&mut state, &SelectionAction::SelectSubcategory { id: "asylee".into() }).unwrap();
    assert!(nav.current_detail(&state).is_none());

    nav.apply(
        &mut state,
        &SelectionAction::SelectPath {
            category_id: "humanitarian".into(),
            subcategory_id: "asylee".into(),
            path_id: "asylee-path".into(),
        },
    )
    .unwrap();

    match nav.current_detail(&state).unwrap() {
        DetailView::Complete { forms, form_descriptions, .. } => {
            assert_eq!(forms, vec!["I-589", "I-730", "I-485"]);
            assert!(form_descriptions.iter().all(|f| f.description.is_some()));
        }
        other => panic!("expected complete detail, got {other:?}"),
    }

    // The navigator page variant ships without detail pages.
    let navigator_page = nav.with_details(DetailTable::empty());
    let pending = navigator_page.current_detail(&state).unwrap();
    assert!(pending.is_pending());

    nav.apply(&mut state, &SelectionAction::SelectCategory { id: "humanitarian".into() }).unwrap();
    assert_eq!(state, SelectionState::default());
}
