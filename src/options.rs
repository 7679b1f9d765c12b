/// Name of the Lua variable the literal is assigned to when none is given.
pub const DEFAULT_VARIABLE_NAME: &str = "png_data";

/// Maximum number of counted characters on one output line.
pub const DEFAULT_MAX_LINE_WIDTH: usize = 120;

/// Presentation settings for the emitted literal.
///
/// The defaults reproduce the canonical output, e.g. for a PNG signature:
///
/// ```text
/// png_data = "\137\80\78\71\13\10\26\10"
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiteralOptions {
    pub variable_name: String,
    pub max_line_width: usize,
}

impl LiteralOptions {
    pub fn new(variable_name: impl Into<String>, max_line_width: usize) -> Self {
        Self {
            variable_name: variable_name.into(),
            max_line_width,
        }
    }

    /// Assignment target and opening quote, e.g. `png_data = "`.
    pub fn prefix(&self) -> String {
        format!("{} = \"", self.variable_name)
    }

    /// Continuation indentation. Spaces up to the prefix's opening quote,
    /// followed by a new opening quote, so both lines start their escapes
    /// in the same column.
    pub fn indent(&self) -> String {
        let width = self.prefix().len();
        let mut indent = " ".repeat(width - 1);
        indent.push('"');
        return indent;
    }
}

impl Default for LiteralOptions {
    fn default() -> Self {
        Self::new(DEFAULT_VARIABLE_NAME, DEFAULT_MAX_LINE_WIDTH)
    }
}
