//! Text form of `Vector3`
//!
//! Vectors render as `(x,y,z)`. Rust's default `f64` formatting prints the
//! shortest string that parses back to the same value, so rendering and
//! parsing a finite vector reproduces it bit for bit.
//!
//! Parsing accepts the rendered form and the plain stream form of three
//! whitespace-separated numbers:
//!
//! ```rust
//! use threevector::Vector3;
//!
//! let v = Vector3::new(0.1, -2.5, 1e-30);
//! let text = v.to_string();
//! assert_eq!(text.parse::<Vector3>().unwrap(), v);
//!
//! let w: Vector3 = "1 2\t3".parse().unwrap();
//! assert_eq!(w, Vector3::new(1.0, 2.0, 3.0));
//! ```

use super::vector3::Vector3;
use crate::{Result, VectorError};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

lazy_static! {
    /// The rendered `(x,y,z)` form, whitespace allowed around each part
    static ref PARENTHESIZED: Regex =
        Regex::new(r"^\s*\(\s*([^,()\s]+)\s*,\s*([^,()\s]+)\s*,\s*([^,()\s]+)\s*\)\s*$")
            .unwrap();
}

fn parse_component(token: &str) -> Result<f64> {
    token
        .parse::<f64>()
        .map_err(|source| VectorError::InvalidComponent {
            token: token.to_string(),
            source,
        })
}

fn from_tokens<'a, I: Iterator<Item = &'a str>>(tokens: I) -> Result<Vector3> {
    let tokens: Vec<&str> = tokens.collect();
    if tokens.len() != 3 {
        return Err(VectorError::WrongComponentCount(tokens.len()));
    }
    Ok(Vector3::new(
        parse_component(tokens[0])?,
        parse_component(tokens[1])?,
        parse_component(tokens[2])?,
    ))
}

/// Reads the next whitespace-delimited token, consuming only what it needs
fn next_token<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut token = Vec::new();
    loop {
        let (used, complete) = {
            let buf = reader.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            let mut used = 0;
            let mut complete = false;
            for &byte in buf {
                used += 1;
                if byte.is_ascii_whitespace() {
                    if !token.is_empty() {
                        complete = true;
                        break;
                    }
                } else {
                    token.push(byte);
                }
            }
            (used, complete)
        };
        reader.consume(used);
        if complete {
            break;
        }
    }

    if token.is_empty() {
        Ok(None)
    } else {
        Ok(Some(String::from_utf8_lossy(&token).into_owned()))
    }
}

impl Vector3 {
    /// Reads three whitespace-separated numbers from a stream as `(x, y, z)`
    ///
    /// Tokens may span lines. Only the three tokens (and the whitespace that
    /// ends the last one) are consumed, so consecutive vectors can be read
    /// from the same reader.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use threevector::Vector3;
    /// use std::io::Cursor;
    ///
    /// let mut input = Cursor::new("1 2\n3 4 5 6");
    /// assert_eq!(Vector3::read_from(&mut input).unwrap(), Vector3::new(1.0, 2.0, 3.0));
    /// assert_eq!(Vector3::read_from(&mut input).unwrap(), Vector3::new(4.0, 5.0, 6.0));
    /// assert!(Vector3::read_from(&mut input).is_err());
    /// ```
    pub fn read_from<R: BufRead>(reader: &mut R) -> Result<Vector3> {
        let mut components = [0.0; 3];
        for (found, slot) in components.iter_mut().enumerate() {
            let token = next_token(reader)?.ok_or(VectorError::UnexpectedEof(found))?;
            *slot = parse_component(&token)?;
        }
        Ok(Vector3::from(components))
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}

impl FromStr for Vector3 {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self> {
        match PARENTHESIZED.captures(s) {
            Some(caps) => from_tokens(caps.iter().skip(1).flatten().map(|m| m.as_str())),
            None => from_tokens(s.split_whitespace()),
        }
    }
}
