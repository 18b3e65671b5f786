//! Trigonometry diagrams: angle math, projection and canvas rendering.
//!
//! This crate computes sine/cosine/tangent values for display and projects a
//! right-triangle diagram and a unit-circle diagram into renderer-agnostic
//! [`scene::Scene`]s. It is compiled to WebAssembly for the browser, where
//! [`engine::Engine`] paints scenes onto canvases, and used natively by the
//! `trigviz` command line tool. The host JavaScript layer only wires DOM
//! events to the engine and applies the returned [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`angle`] | Degree/radian conversion, rounding, special-angle checks |
//! | [`trig`] | Sine/cosine/tangent evaluation with the undefined tangent |
//! | [`project`] | Triangle and unit-circle projection into scenes |
//! | [`scene`] | Scene primitives and diagram kinds |
//! | [`viewport`] | Pixel points, viewport sizes and the responsive scale |
//! | [`config`] | Desired sizes, precision and slider range |
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`page`] | Page fragments and preset angles |
//! | [`render`] | Canvas2D scene painter |
//! | [`style`] | Role colors and fonts |
//! | [`consts`] | Shared numeric constants (paddings, radii, font sizes, etc.) |
//! | `web` | wasm-bindgen exports (wasm32 only) |

pub mod angle;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod page;
pub mod project;
pub mod render;
pub mod scene;
pub mod style;
pub mod trig;
pub mod viewport;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::DiagramError;
pub use project::{project, project_triangle, project_unit_circle};
pub use scene::{DiagramKind, Scene};
pub use trig::{Tangent, TrigResult, evaluate};
pub use viewport::ViewportSize;
