//! Stateless text utilities: alignment, padding, truncation, wrapping
//!
//! Alignment accepts string slices and byte slices through the sealed
//! [`Alignable`] family; slices of displayable values go through the `*_each`
//! variants, which stringify and pad every element independently.

use std::fmt::Display;

/// Errors raised by the text utilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TextError {
    /// Padding direction code outside 'l'/'r'/'c'
    #[error("Direction '{0}' is not supported")]
    UnsupportedDirection(char),

    /// Byte-string alignment needs a fill character that fits in one byte
    #[error("Fill character '{0}' does not fit in a single byte")]
    WideFill(char),
}

pub type Result<T> = std::result::Result<T, TextError>;

/// Which side the text sits on after padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Center,
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl Sealed for [u8] {}
    impl Sealed for Vec<u8> {}
}

/// Input family accepted by the alignment functions.
pub trait Alignable: sealed::Sealed {
    type Output;

    fn align(&self, side: Side, width: usize, fill: char) -> Result<Self::Output>;
}

impl Alignable for str {
    type Output = String;

    fn align(&self, side: Side, width: usize, fill: char) -> Result<String> {
        Ok(align_str(self, side, width, fill))
    }
}

impl Alignable for String {
    type Output = String;

    fn align(&self, side: Side, width: usize, fill: char) -> Result<String> {
        self.as_str().align(side, width, fill)
    }
}

impl Alignable for [u8] {
    type Output = Vec<u8>;

    fn align(&self, side: Side, width: usize, fill: char) -> Result<Vec<u8>> {
        if fill.len_utf8() != 1 {
            return Err(TextError::WideFill(fill));
        }
        let fill = fill as u8;
        if self.len() >= width {
            return Ok(self.to_vec());
        }
        let (left, right) = margins(side, width, self.len());
        let mut out = Vec::with_capacity(width);
        out.resize(left, fill);
        out.extend_from_slice(self);
        out.resize(width, fill);
        Ok(out)
    }
}

impl Alignable for Vec<u8> {
    type Output = Vec<u8>;

    fn align(&self, side: Side, width: usize, fill: char) -> Result<Vec<u8>> {
        self.as_slice().align(side, width, fill)
    }
}

/// Split the margin between the two sides of the text.
fn margins(side: Side, width: usize, len: usize) -> (usize, usize) {
    let margin = width - len;
    match side {
        Side::Left => (0, margin),
        Side::Right => (margin, 0),
        Side::Center => {
            // Extra fill lands on the right, unless both margin and width are
            // odd, matching the platform center semantics.
            let left = margin / 2 + (margin & width & 1);
            (left, margin - left)
        }
    }
}

fn align_str(text: &str, side: Side, width: usize, fill: char) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let (left, right) = margins(side, width, len);
    let mut out = String::with_capacity(width + text.len());
    out.extend(std::iter::repeat(fill).take(left));
    out.push_str(text);
    out.extend(std::iter::repeat(fill).take(right));
    out
}

/// Align `text` to the left, padding to `width` with `fill`.
pub fn l_align<T: Alignable + ?Sized>(text: &T, width: usize, fill: char) -> Result<T::Output> {
    text.align(Side::Left, width, fill)
}

/// Align `text` to the right, padding to `width` with `fill`.
pub fn r_align<T: Alignable + ?Sized>(text: &T, width: usize, fill: char) -> Result<T::Output> {
    text.align(Side::Right, width, fill)
}

/// Center `text`, padding to `width` with `fill`.
pub fn c_align<T: Alignable + ?Sized>(text: &T, width: usize, fill: char) -> Result<T::Output> {
    text.align(Side::Center, width, fill)
}

/// Pad `text` in the direction named by `direction` ('l', 'r' or 'c',
/// case-insensitive).
pub fn pad<T: Alignable + ?Sized>(
    text: &T,
    width: usize,
    fill: char,
    direction: char,
) -> Result<T::Output> {
    match direction {
        'l' | 'L' => text.align(Side::Left, width, fill),
        'r' | 'R' => text.align(Side::Right, width, fill),
        'c' | 'C' => text.align(Side::Center, width, fill),
        other => Err(TextError::UnsupportedDirection(other)),
    }
}

/// Left-align every element of `items`, stringified independently.
pub fn l_align_each<T: Display>(items: &[T], width: usize, fill: char) -> Vec<String> {
    items
        .iter()
        .map(|item| align_str(&item.to_string(), Side::Left, width, fill))
        .collect()
}

/// Right-align every element of `items`, stringified independently.
pub fn r_align_each<T: Display>(items: &[T], width: usize, fill: char) -> Vec<String> {
    items
        .iter()
        .map(|item| align_str(&item.to_string(), Side::Right, width, fill))
        .collect()
}

/// Center every element of `items`, stringified independently.
pub fn c_align_each<T: Display>(items: &[T], width: usize, fill: char) -> Vec<String> {
    items
        .iter()
        .map(|item| align_str(&item.to_string(), Side::Center, width, fill))
        .collect()
}

/// Pad every element of `items` in the direction named by `direction`.
pub fn pad_each<T: Display>(
    items: &[T],
    width: usize,
    fill: char,
    direction: char,
) -> Result<Vec<String>> {
    let side = match direction {
        'l' | 'L' => Side::Left,
        'r' | 'R' => Side::Right,
        'c' | 'C' => Side::Center,
        other => return Err(TextError::UnsupportedDirection(other)),
    };
    Ok(items
        .iter()
        .map(|item| align_str(&item.to_string(), side, width, fill))
        .collect())
}

/// Truncate `text` to `width` characters, replacing the tail with `ellipsis`
/// when truncation occurs. Text already within `width` is returned unchanged.
pub fn shorten(text: &str, width: usize, ellipsis: &str) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    let keep = width.saturating_sub(ellipsis.chars().count());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ellipsis);
    out
}

/// [`shorten`] for function names: the ellipsis keeps a trailing `()`.
pub fn fn_shorten(text: &str, width: usize, ellipsis: &str) -> String {
    shorten(text, width, &format!("{}()", ellipsis))
}

/// Surround `text` with a decoration of `width` characters built by cycling
/// `deco`, on each side. The sentinel `-1` uses `deco`'s own character
/// length as the width.
pub fn wrap(text: &str, width: isize, deco: &str) -> String {
    let count = if width < 0 {
        deco.chars().count()
    } else {
        width as usize
    };
    let band: String = deco.chars().cycle().take(count).collect();
    format!("{}{}{}", band, text, band)
}

/// Wrap `text` in an HTML-style tag pair. Literal `<`, `>` and `/` are
/// stripped from `tag` before it is reused.
pub fn tag_wrap(text: &str, tag: &str) -> String {
    let clean: String = tag
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '/'))
        .collect();
    format!("<{0}>{1}</{0}>", clean, text)
}

/// Prefix `text` with `length` space characters.
pub fn indent(text: &str, length: usize) -> String {
    format!("{}{}", " ".repeat(length), text)
}
