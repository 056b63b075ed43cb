//! The font document as seen by the zone editor
//!
//! The editor only needs three things from a document: read the two zone
//! lists, write them back inside an undoable group, and tell whether the
//! info record changed since the last time it was asked.

use std::sync::Arc;

use bluezone_engine::{Result, ZoneFamily};
use parking_lot::Mutex;

mod edit_scope;
pub use edit_scope::ZoneEditScope;

pub trait ZoneDocument: Send {
    /// Flat list of edge positions, pairs of (start, end).
    fn zone_values(&self, family: ZoneFamily) -> Vec<i32>;

    /// Replace one zone list. Writes outside of an undo group are allowed
    /// but become their own undo step.
    fn set_zone_values(&mut self, family: ZoneFamily, values: Vec<i32>) -> Result<()>;

    /// Open an undo group; groups may nest.
    fn begin_undo_group(&mut self, description: &str);

    /// Close the innermost undo group.
    fn end_undo_group(&mut self);

    /// Returns `true` once per batch of info record changes.
    fn take_info_changed(&mut self) -> bool;
}

/// A document shared between the host and the tool
pub type SharedDocument = Arc<Mutex<dyn ZoneDocument>>;

/// Document identity, independent of the vtable used to reach it.
pub fn same_document(a: Option<&SharedDocument>, b: Option<&SharedDocument>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b)),
        (None, None) => true,
        _ => false,
    }
}
