//! Binary PPM (`P6`) encoding and decoding.
//!
//! An image consists of the ASCII magic `P6`, the width, the height and the maximum channel value (always `255`),
//! separated by whitespace and followed by exactly one whitespace byte, then `width * height * 3` raw bytes in
//! row-major R, G, B order. `#` comments in the header are skipped.

use crate::{Canvas, Color, Error, Result};
use std::io::{self, Read, Write};

const MAGIC: &str = "P6";
const MAX_VALUE: usize = 255;

/// Write a binary PPM image with the given dimensions and raw RGB bytes.
pub(crate) fn write<W: Write>(mut writer: W, [width, height]: [usize; 2], rgb: &[u8]) -> Result<()> {
    debug_assert_eq!(rgb.len(), width * height * 3);
    write!(writer, "{}\n{} {}\n{}\n", MAGIC, width, height, MAX_VALUE)?;
    writer.write_all(rgb)?;
    Ok(())
}

/// Read a binary PPM image into a new canvas.
pub(crate) fn read<R: Read>(reader: R) -> Result<Canvas> {
    let mut header = Header { reader };

    let magic = header.token("magic number")?;
    if magic != MAGIC.as_bytes() {
        return Err(Error::format(format!(
            "expected magic number {:?}, found {:?}",
            MAGIC,
            String::from_utf8_lossy(&magic)
        )));
    }
    let width = header.number("width")?;
    let height = header.number("height")?;
    let max_value = header.number("maximum value")?;

    if width == 0 || height == 0 {
        return Err(Error::format(format!("image size {}x{} is empty", width, height)));
    }
    if max_value != MAX_VALUE {
        return Err(Error::format(format!(
            "unsupported maximum value {}, expected {}",
            max_value, MAX_VALUE
        )));
    }

    let byte_len = width
        .checked_mul(height)
        .and_then(|len| len.checked_mul(3))
        .ok_or_else(|| Error::format(format!("image size {}x{} is too large", width, height)))?;

    // `token` consumed the single whitespace byte that ends the header. The header's size never decides an
    // allocation on its own: the buffer only grows with the bytes actually read.
    let mut bytes = Vec::new();
    header.reader.take(byte_len as u64).read_to_end(&mut bytes)?;
    if bytes.len() < byte_len {
        return Err(Error::format(format!(
            "pixel data is {} bytes, expected {}",
            bytes.len(),
            byte_len
        )));
    }
    let pixels = bytemuck::cast_slice::<u8, Color>(&bytes).to_vec();

    Ok(Canvas::from_raw([width, height], pixels))
}

struct Header<R> {
    reader: R,
}

impl<R: Read> Header<R> {
    fn next_byte(&mut self) -> Result<Option<u8>> {
        let mut byte = [0];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(Error::Io(err)),
            }
        }
    }

    /// Read the next whitespace-delimited token, consuming exactly one trailing whitespace byte.
    fn token(&mut self, what: &str) -> Result<Vec<u8>> {
        let mut token = Vec::new();
        loop {
            match self.next_byte()? {
                None if token.is_empty() => {
                    return Err(Error::format(format!("missing {}", what)))
                }
                None => {
                    return Err(Error::format(format!(
                        "header ends without whitespace after {}",
                        what
                    )))
                }
                Some(b'#') if token.is_empty() => self.skip_comment()?,
                Some(b) if b.is_ascii_whitespace() => {
                    if !token.is_empty() {
                        return Ok(token);
                    }
                }
                Some(b) => token.push(b),
            }
        }
    }

    fn number(&mut self, what: &str) -> Result<usize> {
        let token = self.token(what)?;
        std::str::from_utf8(&token)
            .ok()
            .filter(|s| s.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| {
                Error::format(format!(
                    "invalid {} {:?}",
                    what,
                    String::from_utf8_lossy(&token)
                ))
            })
    }

    fn skip_comment(&mut self) -> Result<()> {
        while let Some(b) = self.next_byte()? {
            if b == b'\n' {
                break;
            }
        }
        Ok(())
    }
}
