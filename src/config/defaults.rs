//! Default value functions for serde deserialization.

pub fn grid_side() -> usize {
    800
}

pub fn robot_size() -> i32 {
    20
}

pub fn start_x() -> i32 {
    400
}

pub fn start_y() -> i32 {
    400
}

pub fn sensor_range() -> i32 {
    50
}

pub fn jitter() -> Vec<i32> {
    vec![-3, 0, 3]
}

pub fn motion_margin() -> i32 {
    10
}

pub fn queue_depth() -> usize {
    1
}

pub fn band_height() -> i32 {
    50
}

pub fn top_barrier_margin() -> f32 {
    0.5
}

pub fn top_barrier_push() -> i32 {
    2
}

pub fn angled_stop_margin() -> i32 {
    5
}

pub fn max_clearance_steps() -> u32 {
    800
}

pub fn max_ticks() -> u32 {
    7200
}
