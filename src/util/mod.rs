//! Utility helpers shared across page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (selector lookup, storage,
//! observers, history) behind small traits so component logic stays testable.

pub mod debug;
pub mod error_hook;
pub mod observer;
pub mod scroll;
pub mod selector;
pub mod storage;
