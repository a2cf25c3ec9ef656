use common::*;

/// Receives presentation-only hints from steering, never affects the maths
pub trait DebugDisplay {
    fn draw_circle(&mut self, centre: Vector3, radius: F);

    fn clear_drawing(&mut self);

    fn set_label(&mut self, text: &str);
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Annotation {
    Circle { centre: Vector3, radius: F },
    Clear,
}

impl Annotation {
    pub fn apply_to<D: DebugDisplay + ?Sized>(self, display: &mut D) {
        match self {
            Annotation::Circle { centre, radius } => display.draw_circle(centre, radius),
            Annotation::Clear => display.clear_drawing(),
        }
    }
}
