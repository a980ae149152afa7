pub const GLOW_RADIUS: f64 = 100.0;

/// Pointer position relative to a card's top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Spot {
    pub x: f64,
    pub y: f64,
}

impl Spot {
    pub fn relative(client_x: f64, client_y: f64, left: f64, top: f64) -> Self {
        Self {
            x: client_x - left,
            y: client_y - top,
        }
    }

    // (0, 0) doubles as "pointer outside"
    pub fn is_visible(&self) -> bool {
        self.x > 0.0 && self.y > 0.0
    }
}
