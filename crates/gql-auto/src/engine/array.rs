//! List building.

use tracing::trace;

use super::Engine;
use crate::error::Result;
use crate::options::SchemaOption;
use crate::reflect::TypeInfo;
use crate::schema::SchemaType;

impl Engine {
    /// Builds a list of `element`.
    ///
    /// One pointer level is stripped from the element. A cached element is
    /// reused; otherwise a custom mapping wins, then records become objects
    /// (with `options` applied) and anything else goes through
    /// [`Engine::type_of`]. The element type is cached before the list is
    /// returned.
    pub fn array_of(&self, element: &TypeInfo, options: &[&dyn SchemaOption]) -> Result<SchemaType> {
        self.scoped(|| self.build_array(element, options))
    }

    fn build_array(&self, element: &TypeInfo, options: &[&dyn SchemaOption]) -> Result<SchemaType> {
        if let Some(cached) = self.cache.lookup(element) {
            return Ok(SchemaType::list(cached));
        }

        let target = element.dereferenced();
        let built = match element.custom_through_pointer() {
            Some(custom) => custom.schema_type(),
            None if target.is_record() => SchemaType::Object(self.object_of(target, options)?),
            None => self.type_of(target)?,
        };

        trace!(element = %target, ty = %built, "Built list element");
        let canonical = self.cache.register(target, built);
        Ok(SchemaType::list(canonical))
    }
}
