/// Per-position classification of typed text against the target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CharClass {
    Correct,
    Incorrect,
    /// The cursor position: the next character to type.
    Current,
    /// Target characters not yet reached.
    Pending,
    /// Typed characters beyond the end of the target; always an error.
    Overflow,
}

impl CharClass {
    pub fn is_error(&self) -> bool {
        matches!(self, CharClass::Incorrect | CharClass::Overflow)
    }
}

/// One display cell of the diff view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiffCell {
    pub ch: char,
    pub class: CharClass,
}

/// Classifies every position in `0..max(|target|, |typed|)`.
///
/// Cells within the target show the target character (the typist sees what
/// they should have hit); overflow cells show what was actually typed.
pub fn diff_cells(target: &str, typed: &str) -> Vec<DiffCell> {
    let target_chars: Vec<char> = target.chars().collect();
    let typed_chars: Vec<char> = typed.chars().collect();

    let mut cells = Vec::with_capacity(target_chars.len().max(typed_chars.len()));

    for (i, &ch) in target_chars.iter().enumerate() {
        let class = if i < typed_chars.len() {
            if typed_chars[i] == ch {
                CharClass::Correct
            } else {
                CharClass::Incorrect
            }
        } else if i == typed_chars.len() && !typed_chars.is_empty() {
            CharClass::Current
        } else {
            CharClass::Pending
        };
        cells.push(DiffCell { ch, class });
    }

    for &ch in typed_chars.iter().skip(target_chars.len()) {
        cells.push(DiffCell {
            ch,
            class: CharClass::Overflow,
        });
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(target: &str, typed: &str) -> Vec<CharClass> {
        diff_cells(target, typed).iter().map(|c| c.class).collect()
    }

    #[test]
    fn test_cell_count_is_max_of_lengths() {
        assert_eq!(diff_cells("cat", "").len(), 3);
        assert_eq!(diff_cells("cat", "ca").len(), 3);
        assert_eq!(diff_cells("cat", "cats!").len(), 5);
        assert_eq!(diff_cells("", "abc").len(), 3);
    }

    #[test]
    fn test_untouched_target_is_pending() {
        assert_eq!(
            classes("cat", ""),
            vec![CharClass::Pending, CharClass::Pending, CharClass::Pending]
        );
    }

    #[test]
    fn test_correct_and_incorrect_positions() {
        assert_eq!(
            classes("cat", "cab"),
            vec![CharClass::Correct, CharClass::Correct, CharClass::Incorrect]
        );
    }

    #[test]
    fn test_cursor_marks_current() {
        assert_eq!(
            classes("cat", "c"),
            vec![CharClass::Correct, CharClass::Current, CharClass::Pending]
        );
    }

    #[test]
    fn test_no_current_before_first_keystroke() {
        assert!(!classes("cat", "").contains(&CharClass::Current));
    }

    #[test]
    fn test_overflow_is_always_an_error() {
        let cells = diff_cells("cat", "cats!!");
        for cell in &cells[3..] {
            assert_eq!(cell.class, CharClass::Overflow);
            assert!(cell.class.is_error());
        }
    }

    #[test]
    fn test_overflow_shows_typed_char() {
        let cells = diff_cells("cat", "cats");
        assert_eq!(cells[3].ch, 's');
        assert_eq!(cells[3].class, CharClass::Overflow);
        // the matched prefix still reads as correct
        assert_eq!(cells[0].class, CharClass::Correct);
        assert_eq!(cells[2].class, CharClass::Correct);
    }

    #[test]
    fn test_incorrect_cell_shows_target_char() {
        let cells = diff_cells("cat", "cab");
        assert_eq!(cells[2].ch, 't');
    }

    #[test]
    fn test_empty_target_all_overflow() {
        let cells = diff_cells("", "hi");
        assert!(cells.iter().all(|c| c.class == CharClass::Overflow));
    }

    #[test]
    fn test_multibyte_chars_counted_per_char() {
        let cells = diff_cells("café", "café");
        assert_eq!(cells.len(), 4);
        assert!(cells.iter().all(|c| c.class == CharClass::Correct));
    }
}
