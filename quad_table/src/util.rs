/// Implements `Iterator` for a wrapper struct with an `inner` iterator over occupied entries and a
/// `remaining` count of entries not yet yielded, mapping each entry with the given closure.
macro_rules! impl_iterator {
    ($f: expr) => {
        fn next(&mut self) -> Option<Self::Item> {
            let item = self.inner.next().map($f);
            if item.is_some() {
                self.remaining -= 1;
            }
            item
        }
        fn size_hint(&self) -> (usize, Option<usize>) {
            (self.remaining, Some(self.remaining))
        }
        fn count(self) -> usize {
            self.remaining
        }
        fn last(self) -> Option<Self::Item> {
            self.inner.last().map($f)
        }
    };
}
pub(crate) use impl_iterator;
