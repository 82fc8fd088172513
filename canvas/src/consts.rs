//! Shared numeric constants for the canvas crate.

// ── Camera ──────────────────────────────────────────────────────

/// Smallest allowed zoom factor.
pub const MIN_ZOOM: f64 = 0.1;

/// Largest allowed zoom factor.
pub const MAX_ZOOM: f64 = 100.0;

/// Zoom multiplier for one wheel notch or one zoom key press.
pub const ZOOM_STEP: f64 = 1.2;

// ── Scales ──────────────────────────────────────────────────────

/// World x-domain shown at the identity transform.
pub const BASE_X_DOMAIN: (f64, f64) = (-10.0, 10.0);

/// World y-domain shown at the identity transform.
pub const BASE_Y_DOMAIN: (f64, f64) = (-5.0, 5.0);

/// Target tick count on the x axis.
pub const X_TICKS: usize = 10;

/// Target tick count on the y axis.
pub const Y_TICKS: usize = 6;

// ── Sampling ────────────────────────────────────────────────────

/// Fixed number of steps across the visible x-domain for every curve.
pub const SAMPLE_STEPS: usize = 300;

/// Adjacent samples further apart than this many view heights start a new path.
pub const JUMP_VIEW_HEIGHTS: f64 = 2.0;

// ── Overlays ────────────────────────────────────────────────────

/// Samples used by the ε-δ verdict across `[x0 - δ, x0 + δ]`.
pub const EPSILON_DELTA_SAMPLES: usize = 200;

/// Riemann rectangles always cover `[x0, x0 + RIEMANN_SPAN]`.
pub const RIEMANN_SPAN: f64 = 5.0;

/// Cap on user-requested rectangle / disk counts.
pub const MAX_PARTITIONS: usize = 500;

/// Simpson panels for area and volume readouts.
pub const QUADRATURE_PANELS: usize = 200;

/// Bisection iterations when refining a bracketed root.
pub const BISECT_ITERATIONS: usize = 60;

/// Grid cells per axis for slope and gradient fields.
pub const FIELD_COLUMNS: usize = 21;
pub const FIELD_ROWS: usize = 11;

/// Length of a slope-field tick in screen pixels.
pub const SLOPE_TICK_PX: f64 = 6.0;

/// Euler integration stops after this many steps in each direction.
pub const MAX_EULER_STEPS: usize = 5_000;

/// Smallest Euler step accepted from the user.
pub const MIN_EULER_STEP: f64 = 0.01;

/// Offset used for one-sided numeric limit estimates.
pub const LIMIT_PROBE: f64 = 1e-6;

/// Dash length in screen pixels.
pub const DASH_PX: f64 = 4.0;
