//! Text written to the clipboard by the copy-coordinates click action

use crate::overlay::js_number;

/// Clipboard text for a click at viewport coordinates (`X:320, Y:75`)
pub fn clipboard_text(client_x: f64, client_y: f64) -> String {
    format!("X:{}, Y:{}", js_number(client_x), js_number(client_y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_click() {
        assert_eq!(clipboard_text(320.0, 75.0), "X:320, Y:75");
    }

    #[test]
    fn test_fractional_click_keeps_fraction() {
        assert_eq!(clipboard_text(320.5, 75.25), "X:320.5, Y:75.25");
    }

    #[test]
    fn test_origin() {
        assert_eq!(clipboard_text(0.0, -0.0), "X:0, Y:0");
    }
}
