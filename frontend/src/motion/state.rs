/// The animatable visual properties of one target.
///
/// Offsets are in pixels, rotation in degrees. `count` is only read by
/// counter targets, which render it as text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
    pub scale: f64,
    pub rotate: f64,
    pub count: f64,
}

impl Default for VisualState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl VisualState {
    /// Resting state: no offset, fully opaque, natural size.
    pub const IDENTITY: VisualState = VisualState {
        x: 0.0,
        y: 0.0,
        opacity: 1.0,
        scale: 1.0,
        rotate: 0.0,
        count: 0.0,
    };

    pub fn hidden() -> Self {
        Self::IDENTITY.with_opacity(0.0)
    }

    pub fn with_x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    pub fn with_y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_rotate(mut self, rotate: f64) -> Self {
        self.rotate = rotate;
        self
    }

    pub fn with_count(mut self, count: f64) -> Self {
        self.count = count;
        self
    }

    /// Blend toward `to` by an eased progress value.
    ///
    /// `t` is not clamped: curves such as `back.out` briefly pass 1.0 on
    /// purpose. Callers hand in exactly 1.0 (or skip the call) at the end.
    pub fn interpolate(&self, to: &VisualState, t: f64) -> VisualState {
        VisualState {
            x: lerp(self.x, to.x, t),
            y: lerp(self.y, to.y, t),
            opacity: lerp(self.opacity, to.opacity, t),
            scale: lerp(self.scale, to.scale, t),
            rotate: lerp(self.rotate, to.rotate, t),
            count: lerp(self.count, to.count, t),
        }
    }

    pub fn transform_css(&self) -> String {
        format!(
            "translate3d({}px, {}px, 0) rotate({}deg) scale({})",
            self.x, self.y, self.rotate, self.scale
        )
    }

    /// CSS opacity, clamped to what browsers accept.
    pub fn opacity_css(&self) -> String {
        self.opacity.clamp(0.0, 1.0).to_string()
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    if t == 1.0 {
        return b;
    }
    a + (b - a) * t
}
