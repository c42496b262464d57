//! Shared chart palette.

/// Categorical colors for slices and bars. Series longer than the palette
/// cycle; slice, legend entry, and bar at index `i` always agree.
pub const PALETTE: [&str; 8] = [
    "#0ea5e9", "#8b5cf6", "#f97316", "#10b981", "#ec4899", "#facc15", "#3b82f6", "#22c55e",
];

pub fn color_at(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}
