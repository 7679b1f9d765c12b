use crate::LiteralOptions;

/// Closes the current segment and continues the literal on the next line.
const SEGMENT_JOINER: &str = "\" ..\n";

/// Renders one byte as a Lua decimal escape, e.g. `10` becomes `\10`.
///
/// No padding is applied, so the escape is 2, 3 or 4 characters long.
pub fn escape_byte(byte: u8) -> String {
    let mut escape = String::with_capacity(4);
    push_escape(&mut escape, byte);
    escape
}

fn push_escape(out: &mut String, byte: u8) {
    out.push('\\');
    if byte >= 100 {
        out.push(char::from(b'0' + byte / 100));
    }
    if byte >= 10 {
        out.push(char::from(b'0' + byte / 10 % 10));
    }
    out.push(char::from(b'0' + byte % 10));
}

/// Length of [`escape_byte`]'s output without allocating it.
pub fn escape_len(byte: u8) -> usize {
    match byte {
        0..=9 => 2,
        10..=99 => 3,
        _ => 4,
    }
}

/// Line-wrapping state for one literal.
///
/// Tracks the number of counted characters on the current output line. The
/// segment joiner is not counted, so a wrapped line may extend past the
/// threshold by the length of `" ..`.
#[derive(Clone, Debug)]
pub struct Escaper {
    indent: String,
    max_line_width: usize,
    line_length: usize,
    lines: usize,
}

impl Escaper {
    /// Appends the prefix (`png_data = "`) to `out` and returns the state
    /// positioned right after it.
    pub fn begin(options: &LiteralOptions, out: &mut String) -> Self {
        let prefix = options.prefix();
        out.push_str(&prefix);
        Self {
            indent: options.indent(),
            max_line_width: options.max_line_width,
            line_length: prefix.len(),
            lines: 1,
        }
    }

    /// Appends the escape for `byte`, wrapping first if it would push the
    /// line strictly past the threshold.
    pub fn push(&mut self, out: &mut String, byte: u8) {
        let len = escape_len(byte);
        if self.line_length + len > self.max_line_width {
            out.push_str(SEGMENT_JOINER);
            out.push_str(&self.indent);
            self.line_length = self.indent.len();
            self.lines += 1;
            tracing::trace!(line = self.lines, "wrapped literal");
        }
        push_escape(out, byte);
        self.line_length += len;
    }

    pub fn push_all(&mut self, out: &mut String, bytes: &[u8]) {
        for &byte in bytes {
            self.push(out, byte);
        }
    }

    /// Appends the closing quote and returns the number of output lines.
    pub fn end(self, out: &mut String) -> usize {
        out.push('"');
        return self.lines;
    }

    pub fn line_length(&self) -> usize {
        self.line_length
    }

    pub fn lines(&self) -> usize {
        self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::{escape_byte, escape_len, Escaper};
    use crate::LiteralOptions;

    #[test]
    fn test_escape_widths() {
        for byte in 0..=255u8 {
            let escape = escape_byte(byte);
            assert_eq!(escape.len(), escape_len(byte), "byte {byte}");
            assert_eq!(escape, format!("\\{}", byte));
        }

        assert_eq!(escape_byte(0), "\\0");
        assert_eq!(escape_byte(9), "\\9");
        assert_eq!(escape_byte(10), "\\10");
        assert_eq!(escape_byte(99), "\\99");
        assert_eq!(escape_byte(100), "\\100");
        assert_eq!(escape_byte(255), "\\255");
    }

    #[test]
    fn test_no_zero_padding() {
        for byte in 0..=255u8 {
            let escape = escape_byte(byte);
            let digits = &escape[1..];
            assert!(
                byte == 0 || !digits.starts_with('0'),
                "byte {byte} rendered as {escape}"
            );
        }
    }

    #[test]
    fn test_push_renders_decimal_digits() {
        let options = LiteralOptions::new("png_data", usize::MAX);
        let mut out = String::new();
        let mut escaper = Escaper::begin(&options, &mut out);
        let bytes: Vec<u8> = (0..=255u8).collect();
        escaper.push_all(&mut out, &bytes);
        escaper.end(&mut out);

        let expected: String = bytes.iter().map(|byte| format!("\\{byte}")).collect();
        assert_eq!(out, format!("png_data = \"{expected}\""));
    }

    #[test]
    fn test_line_length_tracking() {
        let options = LiteralOptions::default();
        let mut out = String::new();
        let mut escaper = Escaper::begin(&options, &mut out);
        assert_eq!(escaper.line_length(), 12);

        escaper.push_all(&mut out, &[1, 20, 200]);
        assert_eq!(escaper.line_length(), 12 + 2 + 3 + 4);
        assert_eq!(escaper.lines(), 1);

        let lines = escaper.end(&mut out);
        assert_eq!(lines, 1);
        assert_eq!(out, "png_data = \"\\1\\20\\200\"");
    }

    #[test]
    fn test_wrap_resets_to_indent_width() {
        let options = LiteralOptions::new("png_data", 20);
        let mut out = String::new();
        let mut escaper = Escaper::begin(&options, &mut out);

        // 12 + 4 + 4 = 20, exactly at the threshold.
        escaper.push_all(&mut out, &[200, 200]);
        assert_eq!(escaper.lines(), 1);
        assert_eq!(escaper.line_length(), 20);

        escaper.push(&mut out, 1);
        assert_eq!(escaper.lines(), 2);
        assert_eq!(escaper.line_length(), 12 + 2);

        escaper.end(&mut out);
        assert_eq!(out, "png_data = \"\\200\\200\" ..\n           \"\\1\"");
    }
}
