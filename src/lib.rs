//! Bistro
//!
//! Bistro is a point-of-sale billing engine for a small restaurant counter: a fixed
//! menu, free-text quantity entry, a live bill with a flat tax surcharge and a
//! validated finalisation step.

pub mod amounts;
pub mod bill;
pub mod catalog;
pub mod customer;
pub mod finalize;
pub mod menu;
pub mod prelude;
pub mod quantity;
pub mod records;
pub mod selections;
pub mod session;
pub mod tax;
pub mod terminal;
