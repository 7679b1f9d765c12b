//! Embeds binary files in Lua source.
//!
//! The input bytes are rendered as a Lua string literal of decimal escapes
//! (`\137\80\78\71`), split into `..`-joined segments so that no line runs
//! past a fixed width:
//!
//! ```text
//! png_data = "\137\80\78\71\13\10\26\10\0\0\0\13\73\72\68\82\0\0\0\32\0\0\0\32\8\6\0\0\0\115\122\122\244\0\0\0\1\115\82\71" ..
//!            "\66\0\174\206\28\233"
//! ```
//!
//! [`convert`] builds the literal in memory, [`EscapedLiteralWriter`] streams
//! it into any [`std::io::Write`], and [`convert_file`] goes from one file to
//! another through a [`FileSystem`].

mod convert;
mod error;
mod escape;
mod fs;
mod literal_writer;
mod options;

pub mod cli;

pub use convert::{convert, convert_file, convert_stream, convert_with, ConversionStats};
pub use error::{ConvertError, ConvertResult};
pub use escape::{escape_byte, escape_len, Escaper};
pub use fs::{FileSystem, RealFileSystem};
pub use literal_writer::EscapedLiteralWriter;
pub use options::{LiteralOptions, DEFAULT_MAX_LINE_WIDTH, DEFAULT_VARIABLE_NAME};
