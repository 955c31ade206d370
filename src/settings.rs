//! Tunables exposed to control surfaces
//!
//! Each setting carries its own range, step and label so a control panel can
//! build sliders without hardcoding knowledge of the active preset.

use serde::Serialize;

/// A single clamped tunable
#[derive(Debug, Clone, Serialize)]
pub struct Setting {
    pub value: f32,
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub label: &'static str,
}

impl Setting {
    pub const fn new(value: f32, min: f32, max: f32, step: f32, label: &'static str) -> Self {
        Self {
            value,
            min,
            max,
            step,
            label,
        }
    }

    /// Clamp into range and store. Returns the stored value.
    pub fn set(&mut self, value: f32) -> f32 {
        self.value = value.clamp(self.min, self.max);
        self.value
    }
}

/// Tunables for the segmented-ring preset
#[derive(Debug, Clone, Serialize)]
pub struct RingSettings {
    pub rotation_speed: Setting,
    pub segments: Setting,
    pub hole_segments: Setting,
    pub radius: Setting,
    pub thickness: Setting,
}

impl Default for RingSettings {
    fn default() -> Self {
        Self {
            rotation_speed: Setting::new(0.01, -0.05, 0.05, 0.001, "Rotation Speed"),
            segments: Setting::new(12.0, 3.0, 50.0, 1.0, "Segments"),
            hole_segments: Setting::new(2.0, 0.0, 10.0, 1.0, "Hole Size (segments)"),
            radius: Setting::new(150.0, 50.0, 300.0, 10.0, "Radius"),
            thickness: Setting::new(15.0, 5.0, 50.0, 1.0, "Thickness"),
        }
    }
}

impl RingSettings {
    pub fn get(&self, name: &str) -> Option<&Setting> {
        match name {
            "rotation_speed" => Some(&self.rotation_speed),
            "segments" => Some(&self.segments),
            "hole_segments" => Some(&self.hole_segments),
            "radius" => Some(&self.radius),
            "thickness" => Some(&self.thickness),
            _ => None,
        }
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut Setting> {
        match name {
            "rotation_speed" => Some(&mut self.rotation_speed),
            "segments" => Some(&mut self.segments),
            "hole_segments" => Some(&mut self.hole_segments),
            "radius" => Some(&mut self.radius),
            "thickness" => Some(&mut self.thickness),
            _ => None,
        }
    }

    /// Store a value by name, clamped into the setting's range.
    /// Returns false for unknown names.
    pub fn set(&mut self, name: &str, value: f32) -> bool {
        let Some(setting) = self.get_mut(name) else {
            return false;
        };
        let stored = setting.set(value);
        log::debug!("setting {name} = {stored}");
        true
    }

    /// Segment count rounded to a whole number
    pub fn segment_count(&self) -> usize {
        self.segments.value.round() as usize
    }

    /// Hole size in segments, rounded to a whole number
    pub fn hole_count(&self) -> usize {
        self.hole_segments.value.round() as usize
    }
}
