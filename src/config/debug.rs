//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; they only take effect in debug builds.

pub struct DebugFlags {
    /// Emit UI interaction logs (tab switches, station picks, swaps).
    pub print_ui_interactions: bool,
    /// Emit every route search with its result.
    pub print_route_searches: bool,
    /// Emit every ticket purchase.
    pub print_purchases: bool,
    /// Emit arrival board (re)generation.
    pub print_schedule_generation: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_ui_interactions: true,
    print_route_searches: true,
    print_purchases: true,
    print_schedule_generation: false,
    print_shutdown: false,
};
