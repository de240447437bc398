use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameplayConfig {
    pub gravity: f32,
    pub jump_impulse: f32,
    pub walk_speed: f32,
    pub sprint_speed: f32,
    pub slow_walk_speed: f32,
    pub mouse_sensitivity: f32,
    pub zoom: f32,
    pub min_fov: f32,
    pub max_fov: f32,
    pub sprint_zoom_factor: f32,
    pub half_width: f32,
    pub half_height: f32,
    pub spawn_position: [f32; 3],
    pub yaw: f32,
    pub pitch: f32,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            gravity: -15.8,
            jump_impulse: 6.0,
            walk_speed: 4.3,
            sprint_speed: 5.0,
            slow_walk_speed: 2.5,
            mouse_sensitivity: 0.1,
            zoom: 75.0,
            min_fov: 1.0,
            max_fov: 90.0,
            sprint_zoom_factor: 1.2,
            half_width: 0.6,
            half_height: 1.3,
            spawn_position: [0.0, 2.5, 3.0],
            yaw: -90.0,
            pitch: 0.0,
        }
    }
}
