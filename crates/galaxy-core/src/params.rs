//! Galaxy parameter store and the control table that edits it.
//!
//! The generator trusts whatever is stored here. Range enforcement happens
//! when a control commits a value (see [`GalaxyParams::commit`]), mirroring a
//! slider that cannot leave its `{min, max, step}` grid.

use crate::color::Rgb;

#[derive(Clone, Debug, PartialEq)]
pub struct GalaxyParams {
    pub count: u32,
    pub size: f32,
    pub radius: f32,
    pub branches: u32,
    pub spin: f32,
    pub randomness: f32,
    pub randomness_power: f32,
    pub inside_color: Rgb,
    pub outside_color: Rgb,
}

impl Default for GalaxyParams {
    fn default() -> Self {
        Self {
            count: 100_000,
            size: 0.01,
            radius: 5.0,
            branches: 3,
            spin: 1.0,
            randomness: 0.2,
            randomness_power: 3.0,
            inside_color: Rgb::from_bytes(0xff, 0x60, 0x30),
            outside_color: Rgb::from_bytes(0x1b, 0x39, 0x84),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamKey {
    Count,
    Size,
    Radius,
    Branches,
    Spin,
    Randomness,
    RandomnessPower,
    InsideColor,
    OutsideColor,
}

impl ParamKey {
    /// Panel order.
    pub const ALL: [ParamKey; 9] = [
        ParamKey::Count,
        ParamKey::Size,
        ParamKey::Radius,
        ParamKey::Branches,
        ParamKey::Spin,
        ParamKey::Randomness,
        ParamKey::RandomnessPower,
        ParamKey::InsideColor,
        ParamKey::OutsideColor,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ParamKey::Count => "count",
            ParamKey::Size => "size",
            ParamKey::Radius => "radius",
            ParamKey::Branches => "branches",
            ParamKey::Spin => "spin",
            ParamKey::Randomness => "randomness",
            ParamKey::RandomnessPower => "randomnessPower",
            ParamKey::InsideColor => "insideColor",
            ParamKey::OutsideColor => "outsideColor",
        }
    }

    pub fn control(self) -> Control {
        let range = |min, max, step| Control::Numeric(NumericRange { min, max, step });
        match self {
            ParamKey::Count => range(100.0, 1_000_000.0, 100.0),
            ParamKey::Size => range(0.001, 0.1, 0.001),
            ParamKey::Radius => range(0.01, 20.0, 0.01),
            ParamKey::Branches => range(2.0, 20.0, 1.0),
            ParamKey::Spin => range(-5.0, 5.0, 0.001),
            ParamKey::Randomness => range(0.0, 2.0, 0.001),
            ParamKey::RandomnessPower => range(1.0, 10.0, 0.001),
            ParamKey::InsideColor | ParamKey::OutsideColor => Control::Color,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Control {
    Numeric(NumericRange),
    Color,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl NumericRange {
    /// Snap onto the step grid anchored at `min`, then clamp into range.
    /// Non-finite input collapses to `min`.
    pub fn clamp_snap(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        let clamped = value.clamp(self.min, self.max);
        let snapped = if self.step > 0.0 {
            self.min + ((clamped - self.min) / self.step).round() * self.step
        } else {
            clamped
        };
        // trim float noise left by the step multiply
        ((snapped * 1e12).round() / 1e12).clamp(self.min, self.max)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParamValue {
    Number(f64),
    Color(Rgb),
}

impl GalaxyParams {
    pub fn value(&self, key: ParamKey) -> ParamValue {
        match key {
            ParamKey::Count => ParamValue::Number(self.count as f64),
            ParamKey::Size => ParamValue::Number(self.size as f64),
            ParamKey::Radius => ParamValue::Number(self.radius as f64),
            ParamKey::Branches => ParamValue::Number(self.branches as f64),
            ParamKey::Spin => ParamValue::Number(self.spin as f64),
            ParamKey::Randomness => ParamValue::Number(self.randomness as f64),
            ParamKey::RandomnessPower => ParamValue::Number(self.randomness_power as f64),
            ParamKey::InsideColor => ParamValue::Color(self.inside_color),
            ParamKey::OutsideColor => ParamValue::Color(self.outside_color),
        }
    }

    /// Apply a committed control value. Numbers are clamped and snapped to the
    /// key's range first. Returns `false` (and leaves the store untouched) when
    /// the value kind does not match the key.
    pub fn commit(&mut self, key: ParamKey, value: ParamValue) -> bool {
        match (key.control(), value) {
            (Control::Numeric(range), ParamValue::Number(raw)) => {
                let v = range.clamp_snap(raw);
                match key {
                    ParamKey::Count => self.count = v.round() as u32,
                    ParamKey::Size => self.size = v as f32,
                    ParamKey::Radius => self.radius = v as f32,
                    ParamKey::Branches => self.branches = v.round() as u32,
                    ParamKey::Spin => self.spin = v as f32,
                    ParamKey::Randomness => self.randomness = v as f32,
                    ParamKey::RandomnessPower => self.randomness_power = v as f32,
                    ParamKey::InsideColor | ParamKey::OutsideColor => return false,
                }
                true
            }
            (Control::Color, ParamValue::Color(c)) => {
                match key {
                    ParamKey::InsideColor => self.inside_color = c,
                    ParamKey::OutsideColor => self.outside_color = c,
                    _ => return false,
                }
                true
            }
            _ => {
                log::warn!("[params] {} rejected {:?}", key.label(), value);
                false
            }
        }
    }
}
