use std::fmt::{Display, Formatter};


#[derive(Debug)]
pub struct InvalidBounds {
    pub begin: i32,
    pub end: i32
}


impl Display for InvalidBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f, "begin bound {} must be strictly less than end bound {}",
            self.begin,
            self.end
        )
    }
}


impl std::error::Error for InvalidBounds {}


#[derive(Debug)]
pub struct IndexOutOfRange {
    pub index: usize,
    pub count: usize
}


impl Display for IndexOutOfRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f, "index {} is not a valid index in a ranger of {} items",
            self.index,
            self.count
        )
    }
}


impl std::error::Error for IndexOutOfRange {}


#[derive(Debug)]
pub struct ReadOnly {
    pub operation: &'static str
}


impl Display for ReadOnly {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ranger is read-only, {} is not supported", self.operation)
    }
}


impl std::error::Error for ReadOnly {}


#[derive(Debug)]
pub struct NotEnoughSpace {
    pub count: usize,
    pub offset: usize,
    pub space: usize
}


impl Display for NotEnoughSpace {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f, "cannot copy {} items at offset {} into a destination of {} items",
            self.count,
            self.offset,
            self.space
        )
    }
}


impl std::error::Error for NotEnoughSpace {}
