use rib_types::CurvePoint;

/// Raw point buffer of an interactive curve drawing.
///
/// Points arrive in strokes. Undo and clear swap the whole buffer for an
/// earlier snapshot rather than editing it in place.
#[derive(Debug, Clone, Default)]
pub struct CurveDrawing {
    points: Vec<CurvePoint>,
    history: Vec<Vec<CurvePoint>>,
    stroke_active: bool,
}

impl CurveDrawing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new stroke; undo returns to the state before it.
    pub fn begin_stroke(&mut self) {
        self.history.push(self.points.clone());
        self.stroke_active = true;
    }

    /// Add a point to the current stroke, starting one if needed. Coordinates
    /// are clamped to the unit square.
    pub fn add_point(&mut self, x: f64, y: f64) {
        if !self.stroke_active {
            self.begin_stroke();
        }
        self.points.push(CurvePoint::new(x, y).clamped());
    }

    pub fn end_stroke(&mut self) {
        self.stroke_active = false;
    }

    /// Restore the buffer as it was before the last stroke or clear.
    pub fn undo(&mut self) -> bool {
        self.stroke_active = false;
        match self.history.pop() {
            Some(previous) => {
                self.points = previous;
                true
            }
            None => false,
        }
    }

    /// Empty the buffer. Undoable.
    pub fn clear(&mut self) {
        self.stroke_active = false;
        if !self.points.is_empty() {
            self.history.push(std::mem::take(&mut self.points));
        }
    }

    /// Drop points and history alike.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undo_removes_whole_stroke() {
        let mut drawing = CurveDrawing::new();
        drawing.add_point(0.1, 0.5);
        drawing.add_point(0.2, 0.6);
        drawing.end_stroke();
        drawing.add_point(0.5, 0.7);
        drawing.add_point(0.6, 0.7);
        drawing.end_stroke();
        assert_eq!(drawing.len(), 4);

        assert!(drawing.undo());
        assert_eq!(drawing.len(), 2);
        assert!(drawing.undo());
        assert!(drawing.is_empty());
        assert!(!drawing.undo());
    }

    #[test]
    fn clear_is_undoable() {
        let mut drawing = CurveDrawing::new();
        drawing.add_point(0.3, 0.3);
        drawing.clear();
        assert!(drawing.is_empty());
        assert!(drawing.undo());
        assert_eq!(drawing.points(), &[CurvePoint::new(0.3, 0.3)]);
    }

    #[test]
    fn points_are_clamped() {
        let mut drawing = CurveDrawing::new();
        drawing.add_point(-0.5, 1.7);
        assert_eq!(drawing.points(), &[CurvePoint::new(0.0, 1.0)]);
    }

    #[test]
    fn reset_forgets_history() {
        let mut drawing = CurveDrawing::new();
        drawing.add_point(0.3, 0.3);
        drawing.reset();
        assert!(drawing.is_empty());
        assert!(!drawing.can_undo());
    }
}
