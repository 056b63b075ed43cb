use std::ops::{Deref, DerefMut};

use super::ZoneDocument;

/// Scoped undo group on a [`ZoneDocument`].
///
/// The group opens on [`begin`](Self::begin) and closes on drop.
pub struct ZoneEditScope<'a> {
    document: &'a mut dyn ZoneDocument,
}

impl<'a> ZoneEditScope<'a> {
    pub fn begin(document: &'a mut dyn ZoneDocument, description: &str) -> Self {
        document.begin_undo_group(description);
        Self { document }
    }
}

impl<'a> Deref for ZoneEditScope<'a> {
    type Target = dyn ZoneDocument + 'a;

    fn deref(&self) -> &Self::Target {
        &*self.document
    }
}

impl<'a> DerefMut for ZoneEditScope<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.document
    }
}

impl Drop for ZoneEditScope<'_> {
    fn drop(&mut self) {
        self.document.end_undo_group();
    }
}
