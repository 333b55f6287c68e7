//! Pointer interactions as bus events.

/// A completed click and the element it landed on.
///
/// `T` is whatever identifies a rendered element on the current platform
/// (a DOM `Node` in the browser, a plain id in tests).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerEvent<T> {
    pub target: T,
}

impl<T> PointerEvent<T> {
    pub fn click(target: T) -> Self {
        Self { target }
    }
}
