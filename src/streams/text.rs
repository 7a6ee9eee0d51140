use crate::position::LineColumn;
use crate::stream::Stream;

/// Text is read one `char` at a time and tracked by line and column
impl<'s> Stream for &'s str {
    type Item = char;
    type Position = LineColumn;

    fn uncons(&self) -> Option<(Self::Item, Self)> {
        let text: &'s str = *self;
        let mut chars = text.chars();
        let ch = chars.next()?;
        Some((ch, chars.as_str()))
    }

    fn advance_position(position: &Self::Position, item: &Self::Item) -> Self::Position {
        position.advance(*item)
    }

    fn is_exhausted(&self) -> bool {
        self.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_uncons_ascii() {
        let input = "ab";
        let (ch, rest) = input.uncons().unwrap();
        assert_eq!(ch, 'a');
        assert_eq!(rest, "b");
        // The original snapshot is untouched
        assert_eq!(input, "ab");
    }

    #[test]
    fn test_uncons_multibyte() {
        let (ch, rest) = "中文".uncons().unwrap();
        assert_eq!(ch, '中');
        assert_eq!(rest, "文");
    }

    #[test]
    fn test_uncons_empty() {
        assert!("".uncons().is_none());
        assert!("".is_exhausted());
        assert!(!"x".is_exhausted());
    }

    #[test]
    fn test_advance_position_newline() {
        let start = LineColumn::initial();
        let pos = <&str as Stream>::advance_position(&start, &'x');
        assert_eq!(pos, LineColumn::new(1, 2));

        let pos = <&str as Stream>::advance_position(&pos, &'\n');
        assert_eq!(pos, LineColumn::new(2, 1));
    }
}
