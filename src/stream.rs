use crate::position::Position;

/// Input a parser can read from
///
/// A stream is an immutable snapshot: reading an item yields the item and a
/// new stream for the rest, leaving the original untouched. Backtracking is
/// then just keeping an old snapshot around, so cloning must be cheap.
pub trait Stream: Clone {
    /// The unit of input (a `char` for text, an element for slices)
    type Item;

    /// How locations in this stream are described
    type Position: Position;

    /// Split off the next item, or `None` at the end of input
    fn uncons(&self) -> Option<(Self::Item, Self)>;

    /// The position after reading `item` at `position`
    fn advance_position(position: &Self::Position, item: &Self::Item) -> Self::Position;

    /// Check if there is nothing left to read
    fn is_exhausted(&self) -> bool {
        self.uncons().is_none()
    }
}
