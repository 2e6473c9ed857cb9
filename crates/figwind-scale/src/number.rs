//! Number formatting for class names and style declarations.

/// Format a pixel value in its shortest form: `16`, `2.5`, `0`.
///
/// Integral values carry no trailing `.0`, and negative zero prints as `0`.
pub fn format_px(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}
