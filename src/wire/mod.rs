//! JSON body encoding for function responses.
//!
//! Bodies are written with `", "` between items and `": "` between a key
//! and its value, the layout existing clients of the create-session
//! endpoint already receive. Everything else matches `serde_json`'s
//! compact output.

use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;

use crate::error::Result;

/// Compact formatter with a single space after `,` and `:`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Encode `value` as a JSON string using [`SpacedFormatter`].
pub fn to_body_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let mut buf = Vec::with_capacity(128);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf)?)
}
