//! Field registration on shared objects.

use tracing::trace;

use crate::schema::{Field, ObjectType};

/// Adds a field to an object, replacing any field with the same name.
///
/// Insertion happens under the object's write lock, so concurrent callers
/// targeting the same object never corrupt its field set. The order in which
/// concurrent registrations land is unspecified; the last write wins.
///
/// Returns the replaced field, if any.
pub fn add_field(object: &ObjectType, field: Field) -> Option<Field> {
    trace!(object = %object.name(), field = %field.name, "Adding field");
    object.insert_field(field)
}
