//! Services — async work that runs beside the UI loop.

pub mod tutor;
