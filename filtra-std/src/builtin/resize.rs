//! Resize filter.

use filtra_core::{Filter, FilterError, Opts, Param, Registrable, Value, validate};

/// Scales the subject to an explicit `width` × `height`.
///
/// Both dimensions are required and must be positive.
#[derive(Debug, Default, Clone, Copy)]
pub struct Resize;

impl Resize {
    /// Name this filter registers under.
    pub const NAME: &'static str = "resize";
}

impl Filter for Resize {
    fn apply(&self, subject: &Value, opts: &Opts) -> Result<Value, FilterError> {
        let src = super::subject_str(subject)?;
        let width: u64 = Param::new("width").validate(validate::positive).get(opts)?;
        let height: u64 = Param::new("height").validate(validate::positive).get(opts)?;
        Ok(Value::String(format!("resized({src}, {width}x{height})")))
    }
}

impl Registrable for Resize {}

#[cfg(feature = "inventory")]
inventory::submit! {
    crate::registry::FilterDef::named::<Resize>(Resize::NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use filtra_core::ExtractError;
    use serde_json::json;

    fn opts(value: Value) -> Opts {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn resizes_with_explicit_dimensions() {
        let out = Resize
            .apply(&json!("img.jpg"), &opts(json!({"width": 100, "height": 80})))
            .unwrap();
        assert_eq!(out, json!("resized(img.jpg, 100x80)"));
    }

    #[test]
    fn dimensions_are_required() {
        let err = Resize
            .apply(&json!("img.jpg"), &opts(json!({"height": 80})))
            .unwrap_err();
        assert!(matches!(
            err,
            FilterError::Opt(ExtractError::Missing("width"))
        ));
    }

    #[test]
    fn zero_dimension_is_rejected() {
        let err = Resize
            .apply(&json!("img.jpg"), &opts(json!({"width": 0, "height": 80})))
            .unwrap_err();
        assert!(matches!(
            err,
            FilterError::Opt(ExtractError::Invalid { name: "width", .. })
        ));
    }
}
