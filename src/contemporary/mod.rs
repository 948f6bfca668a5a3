//! Hybrid and adaptive engines: the algorithms under study.

pub mod cocktail;
pub mod comb;
pub mod intro;
pub mod library;
pub mod tim;
pub mod tournament;

pub use cocktail::CocktailSort;
pub use comb::CombSort;
pub use intro::IntroSort;
pub use library::LibrarySort;
pub use tim::TimSort;
pub use tournament::TournamentSort;
