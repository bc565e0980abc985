use squish::{
    DragController, PressureBody, PressureConfig, SpringBody, SpringConfig, Vec2, World,
};
use wasm_bindgen::prelude::*;

/// Canvas pixels per world unit.
const SCALE: f64 = 10.0;

// ---- Soft Body Demo ----

#[wasm_bindgen]
pub struct SoftBodyDemo {
    world: World<f64>,
    drag: DragController<f64>,
}

#[wasm_bindgen]
impl SoftBodyDemo {
    /// Build the demo scene for a canvas of the given pixel size.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_width: f64, canvas_height: f64) -> Result<SoftBodyDemo, JsError> {
        let mut world = World::new(canvas_width / SCALE, canvas_height / SCALE)
            .map_err(|e| JsError::new(&e.to_string()))?;

        let springs = SpringConfig::new();
        for (n, at) in [(3, 10.0), (4, 25.0), (5, 40.0)] {
            let body = SpringBody::new(n, 10.0, Vec2::new(at, at), &springs)
                .map_err(|e| JsError::new(&e.to_string()))?;
            world.add(body);
        }
        let blob = PressureBody::new(12, 8.0, Vec2::new(60.0, 20.0), &PressureConfig::new())
            .map_err(|e| JsError::new(&e.to_string()))?;
        world.add(blob);

        Ok(SoftBodyDemo { world, drag: DragController::new() })
    }

    pub fn update(&mut self) {
        self.world.step();
    }

    /// Returns flat [x0, y0, x1, y1, ...] in canvas pixels
    pub fn positions(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.world.point_count() * 2);
        for p in self.world.points() {
            out.push(p.position.x * SCALE);
            out.push(p.position.y * SCALE);
        }
        out
    }

    /// Returns flat [ax, ay, bx, by, strain, ...] for every spring, in canvas pixels
    pub fn springs(&self) -> Vec<f64> {
        let mut out = Vec::new();
        for body in self.world.bodies() {
            let points = body.points();
            for s in body.springs() {
                let (a, b) = s.endpoints();
                out.push(points[a].position.x * SCALE);
                out.push(points[a].position.y * SCALE);
                out.push(points[b].position.x * SCALE);
                out.push(points[b].position.y * SCALE);
                out.push(s.strain(points));
            }
        }
        out
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        self.drag.press(&mut self.world, Vec2::new(x / SCALE, y / SCALE)).is_some()
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.drag.drag_to(&mut self.world, Vec2::new(x / SCALE, y / SCALE));
    }

    pub fn pointer_up(&mut self) {
        self.drag.release();
    }

    pub fn point_count(&self) -> usize {
        self.world.point_count()
    }
}
