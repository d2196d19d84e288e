//! Map diagram geometry, in normalized map units (0-100)

pub struct MapConfig {
    pub marker_radius: f32,
    pub hovered_marker_radius: f32,
    /// Outer ring drawn around interchange stations
    pub transfer_ring_radius: f32,
    pub line_width: f32,
    /// Extra slack around a marker that still counts as a hit
    pub hit_slop: f32,
    /// Width:height of the map canvas
    pub aspect_ratio: f32,
}

pub const MAP_CONFIG: MapConfig = MapConfig {
    marker_radius: 2.0,
    hovered_marker_radius: 2.5,
    transfer_ring_radius: 3.0,
    line_width: 0.8,
    hit_slop: 0.5,
    aspect_ratio: 4.0 / 3.0,
};
