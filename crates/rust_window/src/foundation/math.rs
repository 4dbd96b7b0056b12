//! Math utilities and types
//!
//! The window layer only deals in 2D quantities: integer framebuffer sizes and
//! floating point cursor coordinates.

pub use nalgebra::Vector2;

/// Framebuffer or window size in pixels
pub type Size = Vector2<i32>;

/// Cursor position in screen coordinates relative to the window's top-left corner
pub type Position = Vector2<f64>;

/// Scroll wheel or touchpad translation
pub type ScrollDelta = Vector2<f64>;

/// Create a size from width and height
pub fn size(width: i32, height: i32) -> Size {
    Size::new(width, height)
}

/// Difference between two sizes, `to - from`
pub fn size_delta(from: Size, to: Size) -> Size {
    to - from
}

/// Whether both dimensions are at least one pixel
pub fn is_positive_size(size: Size) -> bool {
    size.x > 0 && size.y > 0
}
