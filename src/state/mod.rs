//! Pure page state: theme, mobile menu, typing cursor, navigation table.
//!
//! DESIGN
//! ======
//! Each module pairs an explicit state enum with a pure projection to the
//! classes/text the DOM should show. Nothing here touches `web-sys`, so all
//! of it runs under plain `cargo test`.

pub mod menu;
pub mod nav;
pub mod theme;
pub mod typing;
