//! Palette and type for painting scenes. Shared by every renderer so canvas
//! and SVG output look alike.

use crate::scene::{FontFace, Label, Role};

/// CSS color for a role.
#[must_use]
pub fn color(role: Role) -> &'static str {
    match role {
        Role::Shape | Role::Guide => "rgba(37, 99, 235, 0.1)",
        Role::Outline => "#2563eb",
        Role::Indicator => "#ff6b6b",
        Role::Circle => "#cbd5e1",
        Role::Axis => "#94a3b8",
        Role::Text => "#1e293b",
        Role::Muted => "#64748b",
        Role::Highlight => "#10b981",
        Role::AxisLabel => "#475569",
    }
}

/// Stroke color for a role. Differs from [`color`] only where a shape has
/// both a translucent fill and a stronger outline.
#[must_use]
pub fn stroke_color(role: Role) -> &'static str {
    match role {
        Role::Guide => "rgba(37, 99, 235, 0.3)",
        other => color(other),
    }
}

/// CSS font-family list for a face.
#[must_use]
pub fn font_family(face: FontFace) -> &'static str {
    match face {
        FontFace::Sans => "Poppins, sans-serif",
        FontFace::Mono => "'Roboto Mono', monospace",
    }
}

/// CSS `font` shorthand for a label, e.g. `bold 14.0px Poppins, sans-serif`.
#[must_use]
pub fn font(label: &Label) -> String {
    let weight = if label.bold { "bold " } else { "" };
    format!("{weight}{:.1}px {}", label.size, font_family(label.face))
}
