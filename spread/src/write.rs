//! The [`Writer`] trait
use crate::Result;

pub trait Writer {
    /// write a buffer as is
    fn write_str(&mut self, value: &str) -> Result<()>;
}

impl<R> Writer for &mut R where R: Writer {
    fn write_str(&mut self, value: &str) -> Result<()> {
        R::write_str(self, value)
    }
}

impl Writer for Vec<u8> {
    fn write_str(&mut self, value: &str) -> Result<()> {
        self.extend_from_slice(value.as_bytes());
        Ok(())
    }
}

impl Writer for String {
    fn write_str(&mut self, value: &str) -> Result<()> {
        self.push_str(value);
        Ok(())
    }
}

impl Writer for bytes::BytesMut {
    fn write_str(&mut self, value: &str) -> Result<()> {
        bytes::BufMut::put(self, value.as_bytes());
        Ok(())
    }
}

/// Wrap [`std::io::Write`] as [`Writer`].
pub struct IoWriter<W>(pub W);

impl<W> Writer for IoWriter<W> where W: std::io::Write {
    fn write_str(&mut self, value: &str) -> Result<()> {
        self.0.write_all(value.as_bytes())?;
        Ok(())
    }
}

/// Wrap [`Writer`] to escape input.
///
/// escape based on the [HTML serialization algorithm][1], text content escapes `&`, `<`, `>`,
/// attribute values escapes `&` and `"`, both escapes no-break space.
///
/// [1]: <https://html.spec.whatwg.org/multipage/parsing.html#escapingString>
pub struct Escape<W> {
    writer: W,
    attribute: bool,
}

impl<W> Escape<W> {
    /// escape for text content
    pub fn text(writer: W) -> Self {
        Self { writer, attribute: false }
    }

    /// escape for double quoted attribute value
    pub fn attr(writer: W) -> Self {
        Self { writer, attribute: true }
    }
}

impl<W> Writer for Escape<W> where W: Writer {
    fn write_str(&mut self, value: &str) -> Result<()> {
        let mut latest = 0;

        for (i,ch) in value.char_indices() {
            let escaped = match ch {
                '&' => "&amp;",
                '\u{a0}' => "&nbsp;",
                '"' if self.attribute => "&quot;",
                '<' if !self.attribute => "&lt;",
                '>' if !self.attribute => "&gt;",
                _ => continue,
            };

            self.writer.write_str(&value[latest..i])?;
            self.writer.write_str(escaped)?;

            latest = i + ch.len_utf8();
        }

        if let Some(value) = value.get(latest..) {
            if !value.is_empty() {
                self.writer.write_str(value)?;
            }
        }

        Ok(())
    }
}
