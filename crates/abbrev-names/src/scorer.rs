// Letter scoring for normalized names
//
// Word boundaries are found on the fly: a letter is the last of its word if
// it ends the name or the next letter is uppercase. The word-local position
// counter is reset after every last letter.

use abbrev_core::character::simple_upper;
use abbrev_core::{LetterValueTable, MissingLetterValue, NormalizedName, Score, ScoreVector};

/// Score of the first letter of every word.
pub const FIRST_LETTER_SCORE: Score = 0;

/// Score of the last letter of a word longer than one letter.
pub const LAST_LETTER_SCORE: Score = 5;

/// Score of a word-final `E`, overriding [`LAST_LETTER_SCORE`].
pub const TERMINAL_E_SCORE: Score = 20;

/// Cap on the word-position bonus added to interior letters.
pub const MAX_POSITION_BONUS: usize = 3;

/// Compute the score of every letter of `name`.
///
/// - first letter of a word: [`FIRST_LETTER_SCORE`]
/// - last letter of a word: [`LAST_LETTER_SCORE`], or [`TERMINAL_E_SCORE`] for `E`
/// - interior letter: table value + `min(word position, 3)`
///
/// Only interior letters consult the table, so a missing entry is reported
/// only when such a letter actually needs it. Scores saturate at
/// `Score::MAX` instead of wrapping.
pub fn score_letters(
    name: &NormalizedName,
    table: &LetterValueTable,
) -> Result<ScoreVector, MissingLetterValue> {
    let chars = name.as_chars();
    let mut scores = Vec::with_capacity(chars.len());
    let mut word_pos = 0usize;

    for (index, &letter) in chars.iter().enumerate() {
        let last = name.is_last_letter_of_word(index);

        let score = if word_pos == 0 {
            FIRST_LETTER_SCORE
        } else if last {
            if simple_upper(letter) == 'E' {
                TERMINAL_E_SCORE
            } else {
                LAST_LETTER_SCORE
            }
        } else {
            let value = table
                .value(letter)
                .ok_or(MissingLetterValue { letter, index })?;
            value.saturating_add(word_pos.min(MAX_POSITION_BONUS) as Score)
        };
        scores.push(score);

        word_pos = if last { 0 } else { word_pos + 1 };
    }

    Ok(ScoreVector::from(scores))
}
