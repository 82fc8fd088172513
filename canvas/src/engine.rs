//! Engine core: viewport, camera, gestures, and frame building.
//!
//! DESIGN
//! ======
//! The application owns [`VisualState`] and therefore the view transform.
//! The engine mirrors that transform in its [`Camera`], turns pointer input
//! into new transforms (returned as [`Action::ViewChanged`] for the host to
//! dispatch), and rebuilds the entire scene from the state on every
//! [`EngineCore::frame`] call. Nothing drawn survives between frames.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use curriculum::{ViewTransform, VisualState};

use crate::camera::{Camera, Point};
use crate::consts::{BASE_X_DOMAIN, BASE_Y_DOMAIN, JUMP_VIEW_HEIGHTS, SAMPLE_STEPS, X_TICKS, Y_TICKS, ZOOM_STEP};
use crate::input::{Button, InputState, WheelDelta};
use crate::overlay::{OverlayContext, OverlayRegistry};
use crate::plot::PlotModel;
use crate::sample::sample_path;
use crate::scale::{LinearScale, tick_step};
use crate::scene::{Rgb, Scene};

/// What the host should do after an input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    None,
    /// The camera moved; store this transform in the visual state.
    ViewChanged(ViewTransform),
}

/// One fully built frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotFrame {
    pub scene: Scene,
    /// Localized parse/compile error; when set nothing but the grid is drawn.
    pub error: Option<&'static str>,
    /// Visible world x-interval, ascending.
    pub x_domain: (f64, f64),
    /// Visible world y-interval, ascending.
    pub y_domain: (f64, f64),
    /// Surface size in pixels.
    pub width_px: f64,
    pub height_px: f64,
}

/// All plot logic that does not touch the terminal.
pub struct EngineCore {
    pub camera: Camera,
    pub input: InputState,
    pub viewport_width: f64,
    pub viewport_height: f64,
    overlays: OverlayRegistry,
    model: Option<PlotModel>,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            camera: Camera::default(),
            input: InputState::default(),
            viewport_width: 0.0,
            viewport_height: 0.0,
            overlays: OverlayRegistry::standard(),
            model: None,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom overlay registry.
    #[must_use]
    pub fn with_overlays(overlays: OverlayRegistry) -> Self {
        Self { overlays, ..Self::default() }
    }

    // --- Viewport / camera ---

    /// Update the drawing surface size in pixels.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    /// Adopt the transform stored in the visual state.
    pub fn sync_view(&mut self, view: ViewTransform) {
        self.camera = Camera::from(view);
    }

    #[must_use]
    pub fn view(&self) -> ViewTransform {
        self.camera.into()
    }

    fn size(&self) -> (f64, f64) {
        (self.viewport_width.max(1.0), self.viewport_height.max(1.0))
    }

    /// Scales at the identity transform.
    #[must_use]
    pub fn base_scales(&self) -> (LinearScale, LinearScale) {
        let (w, h) = self.size();
        (LinearScale::new(BASE_X_DOMAIN, (0.0, w)), LinearScale::new(BASE_Y_DOMAIN, (h, 0.0)))
    }

    /// Scales seen through the current camera.
    #[must_use]
    pub fn visible_scales(&self) -> (LinearScale, LinearScale) {
        let (x, y) = self.base_scales();
        (x.rescale_x(&self.camera), y.rescale_y(&self.camera))
    }

    /// World coordinates under a screen pixel.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        let (x, y) = self.visible_scales();
        Point::new(x.invert(screen.x), y.invert(screen.y))
    }

    fn commit(&mut self, camera: Camera) -> Action {
        if camera == self.camera {
            return Action::None;
        }
        self.camera = camera;
        tracing::trace!(k = camera.zoom, x = camera.pan_x, y = camera.pan_y, "view changed");
        Action::ViewChanged(self.view())
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Action {
        if button.pans() {
            self.input = InputState::Panning { last_screen: screen_pt };
        }
        Action::None
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Action {
        let InputState::Panning { last_screen } = self.input else {
            return Action::None;
        };
        self.input = InputState::Panning { last_screen: screen_pt };
        self.commit(self.camera.panned(screen_pt.x - last_screen.x, screen_pt.y - last_screen.y))
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, _button: Button) -> Action {
        let action = self.on_pointer_move(screen_pt);
        self.input = InputState::Idle;
        action
    }

    /// Zoom about the pointer; scrolling up zooms in.
    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta) -> Action {
        if !delta.dy.is_finite() || delta.dy == 0.0 {
            return Action::None;
        }
        self.commit(self.camera.zoomed_about(screen_pt, ZOOM_STEP.powf(-delta.dy)))
    }

    /// Pan by a pixel delta (keyboard panning).
    pub fn pan_by(&mut self, dx: f64, dy: f64) -> Action {
        self.commit(self.camera.panned(dx, dy))
    }

    /// Zoom about the centre of the surface.
    pub fn zoom_by(&mut self, factor: f64) -> Action {
        let (w, h) = self.size();
        self.commit(self.camera.zoomed_about(Point::new(w / 2.0, h / 2.0), factor))
    }

    pub fn reset_view(&mut self) -> Action {
        self.input = InputState::Idle;
        self.commit(Camera::default())
    }

    // --- Frame ---

    /// Rebuild the whole scene for `state`.
    ///
    /// The compiled model is reused while function, x0, order and topic are
    /// unchanged.
    pub fn frame(&mut self, state: &VisualState) -> PlotFrame {
        self.sync_view(state.view);
        let model = match self.model.take() {
            Some(m) if m.matches(state) => m,
            _ => PlotModel::build(state),
        };

        let (w, h) = self.size();
        let (xs, ys) = self.visible_scales();
        let (x_domain, y_domain) = (xs.extent(), ys.extent());
        let px = ((x_domain.1 - x_domain.0) / w, (y_domain.1 - y_domain.0) / h);

        let mut scene = Scene::new();
        draw_grid(&mut scene, x_domain, y_domain, px);

        let error = model.error_message();
        if error.is_none() {
            let jump = JUMP_VIEW_HEIGHTS * (y_domain.1 - y_domain.0);
            if !state.topic.is_two_variable() {
                let segments = sample_path(|x| model.eval(x).unwrap_or(f64::NAN), x_domain, SAMPLE_STEPS, jump);
                scene.paths(segments, Rgb::FUNCTION, false);
            }
            let mut ctx = OverlayContext { model: &model, x_domain, y_domain, px, scene: &mut scene };
            self.overlays.draw(&mut ctx, state);
            if !state.topic.is_two_variable() {
                if let Some(y0) = model.eval(state.x0) {
                    scene.marker((state.x0, y0), Rgb::INK);
                }
            }
        }

        self.model = Some(model);
        PlotFrame { scene, error, x_domain, y_domain, width_px: w, height_px: h }
    }
}

// =============================================================================
// GRID
// =============================================================================

/// Digits after the point needed to show ticks `step` apart.
fn tick_decimals(step: f64) -> usize {
    if step >= 1.0 { 0 } else { (-step.log10()).ceil().max(0.0) as usize }
}

fn draw_grid(scene: &mut Scene, x_domain: (f64, f64), y_domain: (f64, f64), px: (f64, f64)) {
    let xs = LinearScale::new(x_domain, x_domain);
    let ys = LinearScale::new(y_domain, y_domain);
    let x_ticks = xs.ticks(X_TICKS);
    let y_ticks = ys.ticks(Y_TICKS);

    for &x in &x_ticks {
        scene.line((x, y_domain.0), (x, y_domain.1), Rgb::GRID);
    }
    for &y in &y_ticks {
        scene.line((x_domain.0, y), (x_domain.1, y), Rgb::GRID);
    }

    let axis_y = 0.0_f64.clamp(y_domain.0, y_domain.1);
    let axis_x = 0.0_f64.clamp(x_domain.0, x_domain.1);
    if y_domain.0 <= 0.0 && 0.0 <= y_domain.1 {
        scene.line((x_domain.0, 0.0), (x_domain.1, 0.0), Rgb::AXIS);
    }
    if x_domain.0 <= 0.0 && 0.0 <= x_domain.1 {
        scene.line((0.0, y_domain.0), (0.0, y_domain.1), Rgb::AXIS);
    }

    let x_decimals = tick_step(x_domain.0, x_domain.1, X_TICKS).map_or(0, tick_decimals);
    let y_decimals = tick_step(y_domain.0, y_domain.1, Y_TICKS).map_or(0, tick_decimals);
    let label_y = (axis_y - 4.0 * px.1).max(y_domain.0);
    for &x in x_ticks.iter().step_by(2).filter(|&&x| x != 0.0) {
        scene.label((x + px.0, label_y), format!("{x:.x_decimals$}"), Rgb::AXIS);
    }
    let label_x = (axis_x + 2.0 * px.0).min(x_domain.1);
    for &y in y_ticks.iter().filter(|&&y| y != 0.0) {
        scene.label((label_x, y), format!("{y:.y_decimals$}"), Rgb::AXIS);
    }
}
