//! Color utilities for CLI output

use console::{Style, StyledObject};

/// Marker for a session step result
///
/// - success -> green check
/// - failure -> red cross
pub fn step_style(succeeded: bool) -> StyledObject<&'static str> {
    if succeeded {
        Style::new().green().apply_to("✓")
    } else {
        Style::new().red().bold().apply_to("✗")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_style_success_is_check() {
        let styled = step_style(true);
        assert!(styled.to_string().contains('✓'));
    }

    #[test]
    fn step_style_failure_is_cross() {
        let styled = step_style(false);
        assert!(styled.to_string().contains('✗'));
    }
}
