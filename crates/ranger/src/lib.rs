pub mod error;
mod ranger;


pub use ranger::{Iter, Ranger};
