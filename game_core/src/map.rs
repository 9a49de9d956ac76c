use glam::Vec2;

/// Axis-aligned bounding box in screen space (y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Build from a top-left corner and a size
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Overlap test. Boxes that only share an edge do not intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// The rectangular area ball and paddles move in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Lowest top edge for something `extent` tall
    pub fn max_y(&self, extent: f32) -> f32 {
        (self.height - extent).max(0.0)
    }

    /// Clamp the top edge of something `extent` tall so it stays on the field
    pub fn clamp_y(&self, y: f32, extent: f32) -> f32 {
        y.clamp(0.0, self.max_y(extent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_intersects_overlapping() {
        let a = Aabb::from_pos_size(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::from_pos_size(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_aabb_touching_edges_do_not_intersect() {
        let a = Aabb::from_pos_size(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::from_pos_size(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_aabb_center_and_size() {
        let a = Aabb::from_pos_size(Vec2::new(10.0, 20.0), Vec2::new(10.0, 100.0));
        assert_eq!(a.width(), 10.0);
        assert_eq!(a.height(), 100.0);
        assert_eq!(a.center(), Vec2::new(15.0, 70.0));
    }

    #[test]
    fn test_playfield_clamp_y() {
        let field = Playfield::new(800.0, 600.0);
        assert_eq!(field.clamp_y(-5.0, 100.0), 0.0);
        assert_eq!(field.clamp_y(550.0, 100.0), 500.0);
        assert_eq!(field.clamp_y(250.0, 100.0), 250.0);
    }

    #[test]
    fn test_playfield_max_y_never_negative() {
        let field = Playfield::new(800.0, 50.0);
        assert_eq!(field.max_y(100.0), 0.0);
        assert_eq!(field.clamp_y(30.0, 100.0), 0.0);
    }

    #[test]
    fn test_playfield_center() {
        let field = Playfield::new(800.0, 600.0);
        assert_eq!(field.center(), Vec2::new(400.0, 300.0));
    }
}
