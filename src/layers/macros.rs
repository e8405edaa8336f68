//! Macros to reduce boilerplate in layer implementations

/// Implements the property-backed part of `LayerTrait`:
/// - id(), name(), layer_type()
/// - z_index()
/// - is_visible(), set_visible()
/// - as_any()
///
/// Usage:
/// ```ignore
/// impl LayerTrait for MyLayer {
///     quakemap::impl_layer_trait!(MyLayer, properties);
///     // render(), options()
/// }
/// ```
#[macro_export]
macro_rules! impl_layer_trait {
    ($layer_type:ty, $properties_field:ident) => {
        fn id(&self) -> &str {
            &self.$properties_field.id
        }

        fn name(&self) -> &str {
            &self.$properties_field.name
        }

        fn layer_type(&self) -> $crate::layers::base::LayerType {
            self.$properties_field.layer_type
        }

        fn z_index(&self) -> i32 {
            self.$properties_field.z_index
        }

        fn is_visible(&self) -> bool {
            self.$properties_field.visible
        }

        fn set_visible(&mut self, visible: bool) {
            self.$properties_field.visible = visible;
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }
    };
}
