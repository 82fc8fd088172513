//! Curriculum data shared by the plot engine and the application.
//!
//! Everything here is immutable `'static` configuration or plain state
//! structs: the closed set of topics, what each topic plots by default, the
//! storyline of derivation steps, and the unit/chapter catalog used for
//! navigation. No I/O, no interior mutability.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`topic`] | [`TopicId`] enumeration and parsing |
//! | [`visual`] | [`VisualState`], [`VisualHint`], [`ViewTransform`] |
//! | [`step`] | [`DerivationStep`] and [`Prerequisite`] |
//! | [`manifest`] | [`TopicManifest`] |
//! | [`registry`] | Manifest lookup with placeholder fallbacks |
//! | [`catalog`] | Units → chapters → topics |

pub mod catalog;
pub mod manifest;
pub mod registry;
pub mod step;
pub mod topic;
pub mod visual;

pub use manifest::TopicManifest;
pub use step::{DerivationStep, Prerequisite};
pub use topic::{ParseTopicError, TopicId};
pub use visual::{MAX_ORDER, ParamSlot, ViewTransform, VisualDefaults, VisualHint, VisualState};
