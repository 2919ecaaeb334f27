/// Cities appearing in the round-trip route matrix, in matrix order.
pub const ROUTE_CITIES: [&str; 4] = ["Seoul", "New York", "Paris", "Tokyo"];

/// Base round-trip flight price for an unrecognized route, in USD.
pub const DEFAULT_ROUTE_PRICE: f64 = 1200.0;

// Full origin x destination matrix, indexed by ROUTE_CITIES position.
// Symmetric by construction; self-routes cost zero.
const ROUTE_MATRIX: [[f64; 4]; 4] = [
    [0.0, 1350.0, 1100.0, 250.0],
    [1350.0, 0.0, 650.0, 1300.0],
    [1100.0, 650.0, 0.0, 950.0],
    [250.0, 1300.0, 950.0, 0.0],
];

fn city_index(city: &str) -> Option<usize> {
    ROUTE_CITIES.iter().position(|c| *c == city)
}

/// Base round-trip price for a route, falling back to a fixed default when
/// either endpoint is not in the matrix.
pub fn route_base_price(origin: &str, destination: &str) -> f64 {
    match (city_index(origin), city_index(destination)) {
        (Some(o), Some(d)) => ROUTE_MATRIX[o][d],
        _ => {
            tracing::debug!(
                "Unknown route {} -> {}, using default base price",
                origin,
                destination
            );
            DEFAULT_ROUTE_PRICE
        }
    }
}
