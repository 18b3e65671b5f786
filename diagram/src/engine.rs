use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::DiagramConfig;
use crate::consts::{INITIAL_CIRCLE_DEG, INITIAL_TRIANGLE_DEG};
use crate::error::DiagramError;
use crate::page::Page;
use crate::project::project;
use crate::render;
use crate::scene::{DiagramKind, Scene};
use crate::trig::TrigResult;
use crate::viewport::ViewportSize;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from state changes for the host to apply.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Action {
    /// Write the page fragment into the location bar.
    SetFragment(String),
    /// Show these values in the calculator panel.
    Display(TrigResult),
    /// Paint this scene on the canvas for its kind.
    Render(Scene),
    /// Move the triangle slider (and its value readout) to this angle.
    SetSlider(f64),
    /// Highlight this preset button, or none.
    SetActivePreset(Option<f64>),
}

/// Core engine state: everything that does not depend on canvas elements.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineCore {
    pub config: DiagramConfig,
    pub page: Page,
    /// Triangle slider position in degrees.
    pub slider_angle: f64,
    /// Angle shown on the unit circle in degrees.
    pub circle_angle: f64,
    pub active_preset: Option<f64>,
    /// Last values shown in the calculator panel.
    pub display: Option<TrigResult>,
    pub triangle_viewport: ViewportSize,
    pub circle_viewport: ViewportSize,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_config(DiagramConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh state with canvases at their desired sizes.
    #[must_use]
    pub fn with_config(config: DiagramConfig) -> Self {
        Self {
            page: Page::Home,
            slider_angle: INITIAL_TRIANGLE_DEG,
            circle_angle: INITIAL_CIRCLE_DEG,
            active_preset: None,
            display: None,
            triangle_viewport: config.triangle_size,
            circle_viewport: config.circle_size,
            config,
        }
    }

    // --- Navigation ---

    /// Initial page load from the location fragment. Unknown fragments open
    /// the home page. The calculator starts at the slider's initial angle.
    pub fn load(&mut self, fragment: &str) -> Vec<Action> {
        let mut actions = self.navigate(Page::from_fragment(fragment));
        actions.push(self.show(INITIAL_TRIANGLE_DEG));
        actions
    }

    /// Switch to `page` and redraw its diagram, if it has one.
    pub fn navigate(&mut self, page: Page) -> Vec<Action> {
        log::debug!("navigate to {page}");
        self.page = page;
        let mut actions = vec![Action::SetFragment(page.fragment().to_owned())];
        match page.diagram() {
            Some(DiagramKind::Triangle) => actions.push(self.render(DiagramKind::Triangle)),
            Some(DiagramKind::UnitCircle) => {
                actions.push(self.render(DiagramKind::UnitCircle));
                if let Some(angle) = self.active_preset {
                    actions.push(self.show(angle));
                }
            }
            None => {}
        }
        actions
    }

    // --- Angle inputs ---

    /// Triangle slider moved.
    pub fn set_slider(&mut self, angle: f64) -> Vec<Action> {
        self.slider_angle = self.config.clamp_slider(angle);
        vec![self.render(DiagramKind::Triangle), self.show(self.slider_angle)]
    }

    /// Preset angle button pressed on the unit-circle page.
    pub fn select_preset(&mut self, angle: f64) -> Vec<Action> {
        self.active_preset = Some(angle);
        self.circle_angle = angle;
        vec![
            Action::SetActivePreset(Some(angle)),
            self.render(DiagramKind::UnitCircle),
            self.show(angle),
        ]
    }

    /// Calculator submitted with the raw text of its input field.
    ///
    /// The display always shows the typed angle. On the comparison page the
    /// slider follows, clamped to its range; on the special-angles page the
    /// unit circle redraws and no preset stays highlighted.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::InvalidAngle`] for empty, non-numeric, or
    /// non-finite input. State is left untouched.
    pub fn calculate(&mut self, input: &str) -> Result<Vec<Action>, DiagramError> {
        let angle = parse_angle(input)?;
        let mut actions = vec![self.show(angle)];
        match self.page {
            Page::Comparison => {
                self.slider_angle = self.config.clamp_slider(angle);
                actions.push(Action::SetSlider(self.slider_angle));
                actions.push(self.render(DiagramKind::Triangle));
            }
            Page::SpecialAngles => {
                self.circle_angle = angle;
                self.active_preset = None;
                actions.push(self.render(DiagramKind::UnitCircle));
                actions.push(Action::SetActivePreset(None));
            }
            _ => {}
        }
        Ok(actions)
    }

    // --- Viewport ---

    /// The container around `kind`'s canvas is now `available_width` pixels
    /// wide. Redraws only if that diagram is on the active page.
    pub fn resize(&mut self, kind: DiagramKind, available_width: f64) -> Vec<Action> {
        self.refit(kind, available_width);
        if self.page.diagram() == Some(kind) { vec![self.render(kind)] } else { Vec::new() }
    }

    /// Fit `kind`'s viewport to its container without redrawing.
    pub fn refit(&mut self, kind: DiagramKind, available_width: f64) {
        let viewport = self.config.fit(kind, available_width);
        log::debug!("{kind} viewport {}x{}", viewport.width, viewport.height);
        match kind {
            DiagramKind::Triangle => self.triangle_viewport = viewport,
            DiagramKind::UnitCircle => self.circle_viewport = viewport,
        }
    }

    // --- Queries ---

    /// Current angle of `kind`'s diagram.
    #[must_use]
    pub fn angle(&self, kind: DiagramKind) -> f64 {
        match kind {
            DiagramKind::Triangle => self.slider_angle,
            DiagramKind::UnitCircle => self.circle_angle,
        }
    }

    #[must_use]
    pub fn viewport(&self, kind: DiagramKind) -> ViewportSize {
        match kind {
            DiagramKind::Triangle => self.triangle_viewport,
            DiagramKind::UnitCircle => self.circle_viewport,
        }
    }

    /// Project `kind` at its current angle and viewport.
    #[must_use]
    pub fn scene(&self, kind: DiagramKind) -> Scene {
        project(kind, self.angle(kind), self.viewport(kind), &self.config)
    }

    // --- Helpers ---

    fn render(&self, kind: DiagramKind) -> Action {
        Action::Render(self.scene(kind))
    }

    fn show(&mut self, angle: f64) -> Action {
        let result = self.config.evaluator().evaluate(angle);
        self.display = Some(result);
        Action::Display(result)
    }
}

/// Parse calculator input as degrees.
///
/// # Errors
///
/// Returns [`DiagramError::InvalidAngle`] unless the trimmed text is a finite
/// number.
pub fn parse_angle(input: &str) -> Result<f64, DiagramError> {
    let text = input.trim();
    match text.parse::<f64>() {
        Ok(angle) if angle.is_finite() => Ok(angle),
        _ => Err(DiagramError::InvalidAngle(text.to_owned())),
    }
}

/// The browser engine. Wraps `EngineCore` and owns the two canvas elements.
///
/// Either canvas may be absent (the host page doesn't have it); scenes for a
/// missing canvas are dropped.
pub struct Engine {
    triangle: Option<HtmlCanvasElement>,
    circle: Option<HtmlCanvasElement>,
    dpr: f64,
    pub core: EngineCore,
}

impl Engine {
    /// Create an engine bound to the given canvases.
    #[must_use]
    pub fn new(triangle: Option<HtmlCanvasElement>, circle: Option<HtmlCanvasElement>, dpr: f64) -> Self {
        let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        Self { triangle, circle, dpr, core: EngineCore::new() }
    }

    // --- Delegated inputs ---

    pub fn load(&mut self, fragment: &str) -> Vec<Action> {
        self.sync_viewports();
        let actions = self.core.load(fragment);
        self.dispatch(actions)
    }

    pub fn navigate(&mut self, page: Page) -> Vec<Action> {
        let actions = self.core.navigate(page);
        self.dispatch(actions)
    }

    pub fn set_slider(&mut self, angle: f64) -> Vec<Action> {
        let actions = self.core.set_slider(angle);
        self.dispatch(actions)
    }

    pub fn select_preset(&mut self, angle: f64) -> Vec<Action> {
        let actions = self.core.select_preset(angle);
        self.dispatch(actions)
    }

    /// # Errors
    ///
    /// Propagates [`EngineCore::calculate`] errors.
    pub fn calculate(&mut self, input: &str) -> Result<Vec<Action>, DiagramError> {
        let actions = self.core.calculate(input)?;
        Ok(self.dispatch(actions))
    }

    /// Re-measure both canvas containers and redraw the active diagram.
    pub fn resize(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        for kind in DiagramKind::ALL {
            if let Some(width) = self.container_width(kind) {
                actions.extend(self.core.resize(kind, width));
            }
        }
        self.dispatch(actions)
    }

    // --- Render ---

    /// Paint every `Render` action and hand the rest back to the host.
    pub fn dispatch(&self, actions: Vec<Action>) -> Vec<Action> {
        actions
            .into_iter()
            .filter_map(|action| match action {
                Action::Render(scene) => {
                    if let Err(err) = self.paint(&scene) {
                        log::warn!("failed to paint {} scene: {err:?}", scene.kind);
                    }
                    None
                }
                other => Some(other),
            })
            .collect()
    }

    fn paint(&self, scene: &Scene) -> Result<(), JsValue> {
        let Some(canvas) = self.canvas(scene.kind) else {
            log::debug!("no canvas for {} scene", scene.kind);
            return Ok(());
        };

        let ViewportSize { width, height } = scene.viewport;
        canvas.set_width(backing_px(width * self.dpr));
        canvas.set_height(backing_px(height * self.dpr));
        canvas.set_attribute("style", &format!("width: {width}px; height: {height}px;"))?;

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        render::draw(&ctx, scene, self.dpr)
    }

    // --- Viewport ---

    fn sync_viewports(&mut self) {
        for kind in DiagramKind::ALL {
            if let Some(width) = self.container_width(kind) {
                self.core.refit(kind, width);
            }
        }
    }

    /// Width of the element wrapping `kind`'s canvas, in CSS pixels.
    fn container_width(&self, kind: DiagramKind) -> Option<f64> {
        let parent = self.canvas(kind)?.parent_element()?;
        Some(f64::from(parent.client_width()))
    }

    fn canvas(&self, kind: DiagramKind) -> Option<&HtmlCanvasElement> {
        match kind {
            DiagramKind::Triangle => self.triangle.as_ref(),
            DiagramKind::UnitCircle => self.circle.as_ref(),
        }
    }
}

/// Round a backing-store dimension to whole device pixels.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn backing_px(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 { value.round().min(f64::from(u32::MAX)) as u32 } else { 0 }
}
