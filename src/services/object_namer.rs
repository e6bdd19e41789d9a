use uuid::Uuid;

use crate::domain::value_objects::{ImageExtension, ObjectKey};

/// Derives the storage key for a validated upload.
///
/// Keys have the shape `uploads/<32 hex chars><ext>`. The random component
/// is a v4 UUID, which makes collisions negligible without consulting
/// existing objects. The original filename contributes nothing but its
/// already-validated extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectNamer;

impl ObjectNamer {
    pub fn new() -> Self {
        Self
    }

    pub fn name(&self, ext: ImageExtension) -> ObjectKey {
        let key = format!("uploads/{}{}", Uuid::new_v4().simple(), ext.as_suffix());
        ObjectKey::new(key).expect("generated key is always valid")
    }
}
