use std::path::PathBuf;

use bluezone_edit::{FontInfoEditState, UndoState};
use bluezone_engine::{FontInfo, ZoneFamily};

fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("bluezone_edit_{}_{}.toml", std::process::id(), name))
}

#[test]
fn test_new_state_is_clean() {
    let state = FontInfoEditState::new(FontInfo::default());
    assert!(!state.is_dirty());
    assert!(state.file_path().is_none());
}

#[test]
fn test_write_marks_dirty() {
    let mut state = FontInfoEditState::new(FontInfo::default());
    state.set_zone_values(ZoneFamily::Primary, vec![0, 20]).unwrap();
    assert!(state.is_dirty());
}

#[test]
fn test_undo_back_to_save_point_is_clean() {
    let mut state = FontInfoEditState::new(FontInfo::default());
    state.set_zone_values(ZoneFamily::Primary, vec![0, 20]).unwrap();
    state.mark_saved();
    assert!(!state.is_dirty());

    state.set_zone_values(ZoneFamily::Primary, vec![0, 30]).unwrap();
    assert!(state.is_dirty());

    state.undo().unwrap();
    assert!(!state.is_dirty());

    state.undo().unwrap();
    assert!(state.is_dirty());

    state.redo().unwrap();
    assert!(!state.is_dirty());
}

#[test]
fn test_save_and_load() {
    let path = temp_file("save_and_load");
    let mut info = FontInfo::new("Test Sans", "Bold");
    info.postscript_blue_values = vec![-12, 0, 700, 712];
    let mut state = FontInfoEditState::new(info);
    state.set_zone_values(ZoneFamily::Other, vec![-220, -210]).unwrap();

    state.save_as(&path).unwrap();
    assert!(!state.is_dirty());
    assert_eq!(state.file_path(), Some(path.as_path()));

    let loaded = FontInfoEditState::load(&path).unwrap();
    assert_eq!(loaded.info(), state.info());
    assert_eq!(loaded.zone_values(ZoneFamily::Other), &[-220, -210]);
    assert!(!loaded.is_dirty());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_save_without_path_fails() {
    let mut state = FontInfoEditState::new(FontInfo::default());
    assert!(state.save().is_err());
}
