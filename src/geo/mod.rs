mod centroids;
mod haversine;

pub use centroids::country_centroid;
pub use haversine::distance;
