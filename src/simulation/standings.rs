/// Projected final record for one competitor.
#[derive(Debug, Clone, PartialEq)]
pub struct Standing {
    pub id: String,
    pub wins: f64,
    pub losses: f64,
}

/// Descending (wins, losses, identifier), the league's published order.
pub fn sort_standings(rows: &mut [Standing]) {
    rows.sort_by(|a, b| {
        b.wins
            .total_cmp(&a.wins)
            .then(b.losses.total_cmp(&a.losses))
            .then(b.id.cmp(&a.id))
    });
}

pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}
