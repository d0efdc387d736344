//! Scroll-follow: keep the live caret visible inside a horizontally
//! scrolling wrapper.

/// How the host should animate a scroll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// A horizontal scroll the host should apply to the wrapper element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    /// Target `scrollLeft`-style offset, in host units
    pub left: i32,
    pub behavior: ScrollBehavior,
}

/// Compute the scroll that brings `input` to the left edge of `wrapper`.
///
/// Both arguments are left offsets measured from the same origin. Returns
/// `None` when either element is not laid out (not mounted yet).
pub fn follow_input(wrapper_left: Option<i32>, input_left: Option<i32>) -> Option<ScrollRequest> {
    let (wrapper_left, input_left) = (wrapper_left?, input_left?);

    Some(ScrollRequest {
        left: input_left - wrapper_left,
        behavior: ScrollBehavior::Smooth,
    })
}
