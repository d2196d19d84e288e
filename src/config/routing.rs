//! Route planner configuration

pub struct MockRouteSettings {
    /// Inclusive bounds of the synthesized trip duration (minutes)
    pub min_duration: u32,
    pub max_duration: u32,
    /// Inclusive upper bound of the synthesized transfer count
    pub max_transfers: u32,
    /// Station every synthesized route passes through
    pub via_station: &'static str,
}

pub struct GraphRouteSettings {
    /// Travel minutes per map unit between adjacent stations on a line
    pub minutes_per_unit: f32,
    /// Walking minutes for a transfer corridor
    pub transfer_minutes: u32,
    /// Extra cost of a transfer when minimising transfers
    pub transfer_penalty: u32,
}

pub struct RoutingConfig {
    pub mock: MockRouteSettings,
    pub graph: GraphRouteSettings,
}

pub const ROUTING: RoutingConfig = RoutingConfig {
    mock: MockRouteSettings {
        min_duration: 10,
        max_duration: 39,
        max_transfers: 2,
        via_station: "Площадь Революции",
    },
    graph: GraphRouteSettings {
        minutes_per_unit: 0.2,
        transfer_minutes: 4,
        transfer_penalty: 1_000,
    },
};
