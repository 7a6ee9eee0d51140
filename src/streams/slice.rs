use crate::stream::Stream;

/// Token slices are read element by element and tracked by offset
impl<'s, T: Clone> Stream for &'s [T] {
    type Item = T;
    type Position = usize;

    fn uncons(&self) -> Option<(Self::Item, Self)> {
        let items: &'s [T] = *self;
        let (first, rest) = items.split_first()?;
        Some((first.clone(), rest))
    }

    fn advance_position(position: &Self::Position, _item: &Self::Item) -> Self::Position {
        position + 1
    }

    fn is_exhausted(&self) -> bool {
        self.is_empty()
    }
}
