use std::io::{self, Read, Write};
use std::path::Path;

use crate::{ConvertError, ConvertResult, EscapedLiteralWriter, Escaper, FileSystem, LiteralOptions};

/// Converts `bytes` into a Lua literal with the default options.
///
/// ```
/// assert_eq!(bin2lua::convert(&[]), "png_data = \"\"");
/// assert_eq!(bin2lua::convert(&[65, 10]), "png_data = \"\\65\\10\"");
/// ```
pub fn convert(bytes: &[u8]) -> String {
    convert_with(bytes, &LiteralOptions::default())
}

pub fn convert_with(bytes: &[u8], options: &LiteralOptions) -> String {
    render(bytes, options).0
}

/// Builds the literal and counts its lines.
fn render(bytes: &[u8], options: &LiteralOptions) -> (String, usize) {
    let mut out = String::with_capacity(options.prefix().len() + bytes.len() * 4 + 1);
    let mut escaper = Escaper::begin(options, &mut out);
    escaper.push_all(&mut out, bytes);
    let lines = escaper.end(&mut out);
    (out, lines)
}

/// Pipes everything `reader` yields through an [`EscapedLiteralWriter`]
/// into `writer`, without holding the whole input in memory. Returns the
/// number of input bytes consumed.
pub fn convert_stream<R: Read, W: Write>(
    mut reader: R,
    writer: W,
    options: &LiteralOptions,
) -> io::Result<u64> {
    let mut literal = EscapedLiteralWriter::with_options(writer, options.clone());
    let copied = io::copy(&mut reader, &mut literal)?;
    literal.finish()?;
    Ok(copied)
}

/// Summary of a finished file conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConversionStats {
    pub input_bytes: usize,
    pub output_chars: usize,
    pub lines: usize,
}

/// Reads `input` in full, converts it and writes the literal to `output`.
///
/// Nothing is written if the read fails.
pub fn convert_file<F: FileSystem>(
    fs: &F,
    input: &Path,
    output: &Path,
    options: &LiteralOptions,
) -> ConvertResult<ConversionStats> {
    let bytes = fs.read_all_bytes(input).map_err(|source| ConvertError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let (text, lines) = render(&bytes, options);

    fs.write_all_text(output, &text).map_err(|source| ConvertError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    let stats = ConversionStats {
        input_bytes: bytes.len(),
        output_chars: text.len(),
        lines,
    };
    tracing::debug!(
        input = %input.display(),
        output = %output.display(),
        input_bytes = stats.input_bytes,
        output_chars = stats.output_chars,
        lines = stats.lines,
        "converted file"
    );
    Ok(stats)
}
