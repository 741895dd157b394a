// Title-casing of name words

use crate::character::{simple_lower, simple_upper};

/// Uppercase the first character of `word` and lowercase the rest.
///
/// An empty slice is left as is.
pub fn title_case(word: &mut [char]) {
    if let Some((head, tail)) = word.split_first_mut() {
        *head = simple_upper(*head);
        for c in tail.iter_mut() {
            *c = simple_lower(*c);
        }
    }
}
