/// Supplies a presentation-ready label for menus and the generated prompt.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Trimmed non-empty check used by the required-field rules.
pub fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}
