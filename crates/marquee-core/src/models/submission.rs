/// One form response pending validation.
///
/// `color` holds the raw form value until validation replaces it with the
/// normalized `#rrggbb` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub text: String,
    pub color: String,
}

impl Submission {
    pub fn new(text: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: color.into(),
        }
    }
}
