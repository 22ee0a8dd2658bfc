use crate::domain::GeoPoint;

// Rough per-country centroids, keyed by ISO 3166-1 alpha-2 region code
static COUNTRY_CENTROIDS: &[(&str, f64, f64)] = &[
    ("US", 39.8283, -98.5795),
    ("CA", 56.1304, -106.3468),
    ("MX", 23.6345, -102.5528),
    ("BR", -14.2350, -51.9253),
    ("AR", -38.4161, -63.6167),
    ("CO", 4.7110, -74.0721),
    ("PE", -9.1900, -75.0152),
    ("CL", -35.6751, -71.5430),
    ("EC", -1.8312, -78.1834),
    ("VE", 6.4238, -66.5897),
    ("GB", 55.3781, -3.4360),
    ("FR", 46.2276, 2.2137),
    ("DE", 51.1657, 10.4515),
    ("ES", 40.4637, -3.7492),
    ("IT", 41.8719, 12.5674),
    ("PT", 39.3999, -8.2245),
    ("NL", 52.1326, 5.2913),
    ("BE", 50.5039, 4.4699),
    ("SE", 60.1282, 18.6435),
    ("NO", 60.4720, 8.4689),
    ("FI", 61.9241, 25.7482),
    ("RU", 61.5240, 105.3188),
    ("UA", 48.3794, 31.1656),
    ("PL", 51.9194, 19.1451),
    ("RO", 45.9432, 24.9668),
    ("TR", 38.9637, 35.2433),
    ("CN", 35.8617, 104.1954),
    ("JP", 36.2048, 138.2529),
    ("KR", 35.9078, 127.7669),
    ("IN", 20.5937, 78.9629),
    ("PK", 30.3753, 69.3451),
    ("ID", -0.7893, 113.9213),
    ("AU", -25.2744, 133.7751),
    ("NZ", -40.9006, 174.8860),
    ("ZA", -30.5595, 22.9375),
    ("EG", 26.8206, 30.8025),
    ("NG", 9.0820, 8.6753),
    ("KE", 0.0236, 37.9062),
    ("MA", 31.7917, -7.0926),
    ("SA", 23.8859, 45.0792),
    ("AE", 23.4241, 53.8478),
    ("IR", 32.4279, 53.6880),
    ("UY", -32.5228, -55.7658),
    ("PY", -23.4425, -58.4438),
    ("BO", -16.2902, -63.5887),
    ("DK", 56.2639, 9.5018),
    ("IS", 64.9631, -19.0208),
    ("IE", 53.1424, -7.6921),
    ("GR", 39.0742, 23.8093),
    ("BG", 42.7339, 25.4858),
    ("HR", 45.1000, 15.2000),
    ("RS", 44.0165, 21.0059),
    ("BD", 23.6850, 90.3563),
    ("TH", 15.8700, 100.9925),
    ("VN", 14.0583, 108.2772),
    ("MY", 4.2105, 101.9758),
    ("SG", 1.3521, 103.8198),
    ("PH", 12.8797, 121.7740),
    ("DZ", 28.0339, 1.6596),
    ("TN", 33.8869, 9.5375),
    ("IQ", 33.2232, 43.6793),
    ("IL", 31.0461, 34.8516),
    ("JO", 30.5852, 36.2384),
    ("LB", 33.8547, 35.8623),
    ("SY", 34.8021, 38.9968),
    ("QA", 25.3548, 51.1839),
    ("KW", 29.3117, 47.4818),
    ("OM", 21.4735, 55.9754),
    ("BH", 25.9304, 50.6378),
];

pub fn country_centroid(region: &str) -> Option<GeoPoint> {
    COUNTRY_CENTROIDS
        .iter()
        .find(|(code, _, _)| *code == region)
        .map(|&(_, latitude, longitude)| GeoPoint::new(latitude, longitude).expect("centroid table holds valid coordinates"))
}
