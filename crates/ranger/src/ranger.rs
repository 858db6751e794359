use crate::error::{IndexOutOfRange, InvalidBounds, NotEnoughSpace, ReadOnly};


/// Arithmetic sequence of `i32` with a term to term rule of +1,
/// bounded by `begin` and `end` inclusive.
///
/// The sequence is never materialized: indexing, membership and
/// iteration are computed from the two bounds alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ranger {
    begin: i32,
    end: i32
}


impl Ranger {
    pub fn new(begin: i32, end: i32) -> Result<Self, InvalidBounds> {
        if begin >= end {
            return Err(InvalidBounds { begin, end })
        }
        Ok(Self { begin, end })
    }

    /// The inclusive lower bound and first item of the sequence.
    #[inline]
    pub fn begin(&self) -> i32 {
        self.begin
    }

    /// The inclusive upper bound and last item of the sequence.
    #[inline]
    pub fn end(&self) -> i32 {
        self.end
    }

    // computed in i64, so the full i32 span cannot overflow
    #[inline]
    pub fn count(&self) -> usize {
        (self.end as i64 - self.begin as i64 + 1) as usize
    }

    pub fn at(&self, index: usize) -> Result<i32, IndexOutOfRange> {
        if index < self.count() {
            Ok((self.begin as i64 + index as i64) as i32)
        } else {
            Err(IndexOutOfRange {
                index,
                count: self.count()
            })
        }
    }

    /// Zero-based position of `value` in the sequence, or `-1` when
    /// the value lies outside the bounds.
    pub fn index_of(&self, value: i32) -> i64 {
        if self.contains(value) {
            value as i64 - self.begin as i64
        } else {
            -1
        }
    }

    #[inline]
    pub fn contains(&self, value: i32) -> bool {
        self.begin <= value && value <= self.end
    }

    /// Writes all `count()` items into `dst` starting at `dst[offset]`.
    ///
    /// Validates capacity up front and touches nothing on failure;
    /// items before `offset` are left as they were.
    pub fn copy_into(&self, dst: &mut [i32], offset: usize) -> Result<(), NotEnoughSpace> {
        if self.count() + offset > dst.len() {
            return Err(NotEnoughSpace {
                count: self.count(),
                offset,
                space: dst.len()
            })
        }
        for (i, slot) in dst[offset..offset + self.count()].iter_mut().enumerate() {
            *slot = (self.begin as i64 + i as i64) as i32;
        }
        Ok(())
    }

    /// A fresh pass over the sequence. Each call starts over from
    /// `begin`; iterators share no state.
    pub fn iter(&self) -> Iter {
        Iter {
            next: self.begin as i64,
            last: self.end as i64
        }
    }
}


/// Mutation entry points of the generic ordered-collection surface.
///
/// The sequence is fixed by construction, so every one of them is a
/// stub that fails with [`ReadOnly`] without looking at its arguments.
impl Ranger {
    pub fn add(&self, _item: i32) -> Result<(), ReadOnly> {
        Err(ReadOnly { operation: "add" })
    }

    pub fn clear(&self) -> Result<(), ReadOnly> {
        Err(ReadOnly { operation: "clear" })
    }

    pub fn insert(&self, _index: usize, _item: i32) -> Result<(), ReadOnly> {
        Err(ReadOnly { operation: "insert" })
    }

    pub fn remove(&self, _item: i32) -> Result<bool, ReadOnly> {
        Err(ReadOnly { operation: "remove" })
    }

    pub fn remove_at(&self, _index: usize) -> Result<(), ReadOnly> {
        Err(ReadOnly { operation: "remove_at" })
    }

    pub fn set(&self, _index: usize, _item: i32) -> Result<(), ReadOnly> {
        Err(ReadOnly { operation: "set" })
    }
}


pub struct Iter {
    next: i64,
    last: i64
}


impl Iterator for Iter {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        if self.next > self.last {
            return None
        }
        let value = self.next as i32;
        self.next += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.last - self.next + 1).max(0) as usize;
        (remaining, Some(remaining))
    }
}


impl DoubleEndedIterator for Iter {
    fn next_back(&mut self) -> Option<i32> {
        if self.next > self.last {
            return None
        }
        let value = self.last as i32;
        self.last -= 1;
        Some(value)
    }
}


impl ExactSizeIterator for Iter {}


impl std::iter::FusedIterator for Iter {}


impl IntoIterator for Ranger {
    type Item = i32;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}


impl IntoIterator for &Ranger {
    type Item = i32;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}
