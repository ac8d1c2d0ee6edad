// Before/after slider state - reveal percentage driven by pointer drags

pub const DEFAULT_REVEAL: f32 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeforeAfterSlider {
    /// Share of the "after" image revealed, 0..=100.
    pub position: f32,
    pub dragging: bool,
}

impl Default for BeforeAfterSlider {
    fn default() -> Self {
        Self {
            position: DEFAULT_REVEAL,
            dragging: false,
        }
    }
}

impl BeforeAfterSlider {
    pub fn press(&mut self) {
        self.dragging = true;
    }

    /// Pointer released or left the comparison area.
    pub fn release(&mut self) {
        self.dragging = false;
    }

    /// Mouse moves only count while the handle is held.
    pub fn pointer_moved(&mut self, x: f32, left: f32, width: f32) {
        if self.dragging {
            self.move_to(x, left, width);
        }
    }

    pub fn touch_moved(&mut self, x: f32, left: f32, width: f32) {
        self.move_to(x, left, width);
    }

    fn move_to(&mut self, x: f32, left: f32, width: f32) {
        if width.is_nan() || width <= 0.0 || !x.is_finite() {
            return;
        }
        let offset = (x - left).clamp(0.0, width);
        self.position = (offset / width * 100.0).clamp(0.0, 100.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reveals_half() {
        let slider = BeforeAfterSlider::default();
        assert_eq!(slider.position, 50.0);
        assert!(!slider.dragging);
    }

    #[test]
    fn test_pointer_moves_ignored_unless_dragging() {
        let mut slider = BeforeAfterSlider::default();
        slider.pointer_moved(10.0, 0.0, 100.0);
        assert_eq!(slider.position, 50.0);

        slider.press();
        slider.pointer_moved(125.0, 100.0, 200.0);
        assert_eq!(slider.position, 12.5);

        slider.release();
        slider.pointer_moved(300.0, 100.0, 200.0);
        assert_eq!(slider.position, 12.5);
    }

    #[test]
    fn test_touch_moves_always_apply() {
        let mut slider = BeforeAfterSlider::default();
        slider.touch_moved(75.0, 0.0, 100.0);
        assert_eq!(slider.position, 75.0);
    }

    #[test]
    fn test_position_clamped_to_bounds() {
        let mut slider = BeforeAfterSlider::default();
        slider.touch_moved(-40.0, 0.0, 100.0);
        assert_eq!(slider.position, 0.0);
        slider.touch_moved(900.0, 0.0, 100.0);
        assert_eq!(slider.position, 100.0);
    }

    #[test]
    fn test_degenerate_width_ignored() {
        let mut slider = BeforeAfterSlider::default();
        slider.touch_moved(10.0, 0.0, 0.0);
        slider.touch_moved(10.0, 0.0, -5.0);
        slider.touch_moved(10.0, 0.0, f32::NAN);
        assert_eq!(slider.position, 50.0);
    }
}
