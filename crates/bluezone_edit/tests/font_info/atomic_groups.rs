use bluezone_edit::{FontInfoEditState, FontInfoUndoOp, UndoState, ZoneDocument, ZoneEditScope};
use bluezone_engine::{FontInfo, ZoneFamily};

fn create_state() -> FontInfoEditState {
    let mut info = FontInfo::new("Test Sans", "Regular");
    info.postscript_blue_values = vec![0, 20];
    info.postscript_other_blues = vec![-250, -240];
    FontInfoEditState::new(info)
}

#[test]
fn test_guard_groups_operations() {
    let mut state = create_state();
    {
        let _guard = state.begin_atomic_undo("Zone change");
        state.set_zone_values(ZoneFamily::Primary, vec![0, 30]).unwrap();
        state.set_zone_values(ZoneFamily::Other, vec![-260, -240]).unwrap();
    }

    assert_eq!(state.undo_stack_len(), 1);
    assert_eq!(state.undo_description(), Some("Zone change".to_string()));

    state.undo().unwrap();
    assert_eq!(state.zone_values(ZoneFamily::Primary), &[0, 20]);
    assert_eq!(state.zone_values(ZoneFamily::Other), &[-250, -240]);

    state.redo().unwrap();
    assert_eq!(state.zone_values(ZoneFamily::Primary), &[0, 30]);
    assert_eq!(state.zone_values(ZoneFamily::Other), &[-260, -240]);
}

#[test]
fn test_explicit_end() {
    let mut state = create_state();
    let mut guard = state.begin_atomic_undo("First");
    state.set_zone_values(ZoneFamily::Primary, vec![0, 30]).unwrap();
    guard.end();
    state.set_zone_values(ZoneFamily::Primary, vec![0, 40]).unwrap();
    drop(guard);

    assert_eq!(state.undo_stack_len(), 2);
    assert_eq!(state.undo_description(), Some("Change postscriptBlueValues".to_string()));
}

#[test]
fn test_empty_group_leaves_no_step() {
    let mut state = create_state();
    {
        let _guard = state.begin_atomic_undo("Nothing");
    }
    assert_eq!(state.undo_stack_len(), 0);
}

#[test]
fn test_edit_scope_through_document_interface() {
    let mut state = create_state();
    {
        let document: &mut dyn ZoneDocument = &mut state;
        let mut scope = ZoneEditScope::begin(document, "Zone change");
        scope.set_zone_values(ZoneFamily::Primary, vec![0, 25]).unwrap();
        scope.set_zone_values(ZoneFamily::Other, vec![]).unwrap();
        assert_eq!(scope.zone_values(ZoneFamily::Other), Vec::<i32>::new());
    }

    let stack = state.undo_stack();
    assert_eq!(stack.undo_len(), 1);
    assert_eq!(stack.undo_description(), Some("Zone change".to_string()));
    assert!(ZoneDocument::take_info_changed(&mut state));

    state.undo().unwrap();
    assert_eq!(state.zone_values(ZoneFamily::Primary), &[0, 20]);
}

#[test]
fn test_nested_groups_collapse_outward() {
    let mut state = create_state();
    state.begin_undo_group("Outer");
    state.set_zone_values(ZoneFamily::Primary, vec![0, 30]).unwrap();
    state.begin_undo_group("Inner");
    state.set_zone_values(ZoneFamily::Primary, vec![0, 40]).unwrap();
    state.end_undo_group();
    state.end_undo_group();

    assert_eq!(state.undo_stack_len(), 1);
    let stack = state.undo_stack();
    assert_eq!(stack.undo_description(), Some("Outer".to_string()));

    state.undo().unwrap();
    assert_eq!(state.zone_values(ZoneFamily::Primary), &[0, 20]);
}

#[test]
fn test_unbalanced_end_is_harmless() {
    let mut state = create_state();
    state.end_undo_group();
    state.set_zone_values(ZoneFamily::Primary, vec![0, 30]).unwrap();
    assert_eq!(state.undo_stack_len(), 1);
    assert!(matches!(state.undo_stack().pop_undo(), Some(FontInfoUndoOp::SetZoneValues { .. })));
}
