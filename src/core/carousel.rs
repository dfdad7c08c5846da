use super::constants::DRAG_SENSITIVITY;

/// Click-and-drag bookkeeping for the horizontal gallery strip.
///
/// Valid only between a press and the matching release or leave.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct CarouselDrag {
    pub active: bool,
    pub start_x: f64,
    pub scroll_left: f64,
}

impl CarouselDrag {
    /// `page_x - offset_left` is the pointer position inside the strip.
    pub fn press(&mut self, page_x: f64, offset_left: f64, scroll_left: f64) {
        self.active = true;
        self.start_x = page_x - offset_left;
        self.scroll_left = scroll_left;
    }

    pub fn release(&mut self) {
        self.active = false;
    }

    /// New scroll offset for a move while pressed, `None` otherwise. The
    /// browser clamps the value to the strip's scroll range.
    pub fn drag_to(&self, page_x: f64, offset_left: f64) -> Option<f64> {
        if !self.active {
            return None;
        }
        let x = page_x - offset_left;
        let walk = (x - self.start_x) * DRAG_SENSITIVITY;
        Some(self.scroll_left - walk)
    }
}
