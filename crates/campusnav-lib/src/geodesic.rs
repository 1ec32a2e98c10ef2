//! Ellipsoidal surface distances between latitude/longitude pairs.
//!
//! Distances are computed with Vincenty's inverse formula on the WGS-84
//! ellipsoid. Every edge weight and every A* heuristic evaluation passes
//! through [`distance_with`], so the routine is bounded (at most
//! [`MAX_ITERATIONS`] refinements) and returns a best estimate instead of
//! failing when the iteration does not settle.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// WGS-84 semi-major axis in meters.
pub const WGS84_SEMI_MAJOR_AXIS: f64 = 6_378_137.0;

/// WGS-84 flattening.
pub const WGS84_FLATTENING: f64 = 1.0 / 298.257_223_563;

/// WGS-84 semi-minor axis in meters.
pub const WGS84_SEMI_MINOR_AXIS: f64 = WGS84_SEMI_MAJOR_AXIS * (1.0 - WGS84_FLATTENING);

/// Upper bound on longitude refinements; near-antipodal inputs may never settle.
pub const MAX_ITERATIONS: usize = 100;

/// Refinement stops once successive longitude estimates differ by less than this (radians).
pub const CONVERGENCE_THRESHOLD: f64 = 1e-12;

/// Which set of series terms the inverse solution uses.
///
/// Edge weights are truncated to whole meters, so the two variants can
/// produce different integer weights for the same pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeodesicFormula {
    /// The campus distance table's formula: `cos σ` stands in for `cos 2σm`
    /// in the longitude refinement, and Δσ uses `cos 2σ` without the
    /// sixth-order term.
    #[default]
    Campus,
    /// Vincenty's published formula with the `cos 2σm` midpoint terms.
    Standard,
}

/// Geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Outcome of the inverse geodesic problem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodesicSolution {
    /// Surface distance in meters.
    pub meters: f64,
    /// Number of longitude refinements performed.
    pub iterations: usize,
    /// `false` when the iteration cap was hit before settling.
    pub converged: bool,
}

/// Shortest surface distance in meters between two positions.
pub fn distance(from: Coordinates, to: Coordinates) -> f64 {
    distance_with(from, to, GeodesicFormula::default())
}

/// Shortest surface distance in meters using the given formula.
pub fn distance_with(from: Coordinates, to: Coordinates, formula: GeodesicFormula) -> f64 {
    let solution = inverse(from, to, formula);
    if !solution.converged {
        warn!(
            from_lat = from.latitude,
            from_lon = from.longitude,
            to_lat = to.latitude,
            to_lon = to.longitude,
            iterations = solution.iterations,
            "geodesic refinement did not converge; using best available estimate"
        );
    }
    solution.meters
}

struct Terms {
    sin_sigma: f64,
    cos_sigma: f64,
    sigma: f64,
    sin_alpha: f64,
    cos_sq_alpha: f64,
    cos_2sigma_m: f64,
}

/// Solve the inverse problem, reporting iteration statistics alongside the distance.
pub fn inverse(from: Coordinates, to: Coordinates, formula: GeodesicFormula) -> GeodesicSolution {
    let f = WGS84_FLATTENING;
    let l = (to.longitude - from.longitude).to_radians();
    let u1 = ((1.0 - f) * from.latitude.to_radians().tan()).atan();
    let u2 = ((1.0 - f) * to.latitude.to_radians().tan()).atan();
    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_u2, cos_u2) = u2.sin_cos();

    let evaluate = |lambda: f64| -> Option<Terms> {
        let (sin_lambda, cos_lambda) = lambda.sin_cos();
        let sin_sigma = ((cos_u2 * sin_lambda).powi(2)
            + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2))
        .sqrt();
        if sin_sigma == 0.0 {
            return None;
        }
        let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        let sigma = sin_sigma.atan2(cos_sigma);
        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
        let cos_2sigma_m = match formula {
            GeodesicFormula::Campus => cos_sigma,
            // Equatorial lines have cos²α = 0.
            GeodesicFormula::Standard if cos_sq_alpha != 0.0 => {
                cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
            }
            GeodesicFormula::Standard => 0.0,
        };
        Some(Terms {
            sin_sigma,
            cos_sigma,
            sigma,
            sin_alpha,
            cos_sq_alpha,
            cos_2sigma_m,
        })
    };

    let mut lambda = l;
    let mut iterations = 0;
    let mut converged = false;
    let terms = loop {
        iterations += 1;
        let Some(terms) = evaluate(lambda) else {
            return GeodesicSolution {
                meters: 0.0,
                iterations,
                converged: true,
            };
        };

        let c = f / 16.0 * terms.cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * terms.cos_sq_alpha));
        let previous = lambda;
        lambda = l
            + (1.0 - c)
                * f
                * terms.sin_alpha
                * (terms.sigma
                    + c * terms.sin_sigma
                        * (terms.cos_2sigma_m
                            + c * terms.cos_sigma
                                * (-1.0 + 2.0 * terms.cos_2sigma_m * terms.cos_2sigma_m)));

        if (lambda - previous).abs() < CONVERGENCE_THRESHOLD {
            converged = true;
            break terms;
        }
        if iterations >= MAX_ITERATIONS {
            break terms;
        }
    };

    let a_sq = WGS84_SEMI_MAJOR_AXIS * WGS84_SEMI_MAJOR_AXIS;
    let b_sq = WGS84_SEMI_MINOR_AXIS * WGS84_SEMI_MINOR_AXIS;
    let u_sq = terms.cos_sq_alpha * (a_sq - b_sq) / b_sq;
    let big_a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
    let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
    let delta_sigma = match formula {
        GeodesicFormula::Campus => {
            big_b
                * terms.sin_sigma
                * (terms.cos_sigma
                    + big_b / 4.0
                        * ((2.0 * terms.sigma).cos() - 3.0 * terms.sin_sigma * terms.sin_sigma))
        }
        GeodesicFormula::Standard => {
            let cos_2sigma_m = terms.cos_2sigma_m;
            big_b
                * terms.sin_sigma
                * (cos_2sigma_m
                    + big_b / 4.0
                        * (terms.cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                            - big_b / 6.0
                                * cos_2sigma_m
                                * (-3.0 + 4.0 * terms.sin_sigma * terms.sin_sigma)
                                * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)))
        }
    };

    let meters = WGS84_SEMI_MINOR_AXIS * big_a * (terms.sigma - delta_sigma);

    GeodesicSolution {
        meters: meters.max(0.0),
        iterations,
        converged,
    }
}
