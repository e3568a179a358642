//! Country placement for the map charts.
//! Approximate geographic centroids keyed by ISO 3166-1 alpha-3 code.

/// Plotted extent of the map charts, in degrees.
pub const LON_RANGE: (f64, f64) = (-180.0, 180.0);
pub const LAT_RANGE: (f64, f64) = (-60.0, 85.0);

/// (code, latitude, longitude)
const CENTROIDS: &[(&str, f64, f64)] = &[
    ("ABW", 12.52, -69.97),
    ("AFG", 33.94, 67.71),
    ("AGO", -11.20, 17.87),
    ("ALB", 41.15, 20.17),
    ("AND", 42.55, 1.60),
    ("ARE", 23.42, 53.85),
    ("ARG", -38.42, -63.62),
    ("ARM", 40.07, 45.04),
    ("ATG", 17.06, -61.80),
    ("AUS", -25.27, 133.78),
    ("AUT", 47.52, 14.55),
    ("AZE", 40.14, 47.58),
    ("BDI", -3.37, 29.92),
    ("BEL", 50.50, 4.47),
    ("BEN", 9.31, 2.32),
    ("BFA", 12.24, -1.56),
    ("BGD", 23.68, 90.36),
    ("BGR", 42.73, 25.49),
    ("BHR", 26.07, 50.56),
    ("BHS", 25.03, -77.40),
    ("BIH", 43.92, 17.68),
    ("BLR", 53.71, 27.95),
    ("BLZ", 17.19, -88.50),
    ("BMU", 32.32, -64.76),
    ("BOL", -16.29, -63.59),
    ("BRA", -14.24, -51.93),
    ("BRB", 13.19, -59.54),
    ("BRN", 4.54, 114.73),
    ("BTN", 27.51, 90.43),
    ("BWA", -22.33, 24.68),
    ("CAF", 6.61, 20.94),
    ("CAN", 56.13, -106.35),
    ("CHE", 46.82, 8.23),
    ("CHL", -35.68, -71.54),
    ("CHN", 35.86, 104.20),
    ("CIV", 7.54, -5.55),
    ("CMR", 7.37, 12.35),
    ("COD", -4.04, 21.76),
    ("COG", -0.23, 15.83),
    ("COL", 4.57, -74.30),
    ("COM", -11.88, 43.87),
    ("CPV", 16.00, -24.01),
    ("CRI", 9.75, -83.75),
    ("CUB", 21.52, -77.78),
    ("CYM", 19.31, -81.25),
    ("CYP", 35.13, 33.43),
    ("CZE", 49.82, 15.47),
    ("DEU", 51.17, 10.45),
    ("DJI", 11.83, 42.59),
    ("DMA", 15.41, -61.37),
    ("DNK", 56.26, 9.50),
    ("DOM", 18.74, -70.16),
    ("DZA", 28.03, 1.66),
    ("ECU", -1.83, -78.18),
    ("EGY", 26.82, 30.80),
    ("ERI", 15.18, 39.78),
    ("ESP", 40.46, -3.75),
    ("EST", 58.60, 25.01),
    ("ETH", 9.15, 40.49),
    ("FIN", 61.92, 25.75),
    ("FJI", -17.71, 178.07),
    ("FRA", 46.23, 2.21),
    ("FRO", 61.89, -6.91),
    ("FSM", 7.43, 150.55),
    ("GAB", -0.80, 11.61),
    ("GBR", 55.38, -3.44),
    ("GEO", 42.32, 43.36),
    ("GHA", 7.95, -1.02),
    ("GIN", 9.95, -9.70),
    ("GMB", 13.44, -15.31),
    ("GNB", 11.80, -15.18),
    ("GNQ", 1.65, 10.27),
    ("GRC", 39.07, 21.82),
    ("GRD", 12.12, -61.68),
    ("GRL", 71.71, -42.60),
    ("GTM", 15.78, -90.23),
    ("GUY", 4.86, -58.93),
    ("HKG", 22.40, 114.11),
    ("HND", 15.20, -86.24),
    ("HRV", 45.10, 15.20),
    ("HTI", 18.97, -72.29),
    ("HUN", 47.16, 19.50),
    ("IDN", -0.79, 113.92),
    ("IND", 20.59, 78.96),
    ("IRL", 53.41, -8.24),
    ("IRN", 32.43, 53.69),
    ("IRQ", 33.22, 43.68),
    ("ISL", 64.96, -19.02),
    ("ISR", 31.05, 34.85),
    ("ITA", 41.87, 12.57),
    ("JAM", 18.11, -77.30),
    ("JOR", 30.59, 36.24),
    ("JPN", 36.20, 138.25),
    ("KAZ", 48.02, 66.92),
    ("KEN", -0.02, 37.91),
    ("KGZ", 41.20, 74.77),
    ("KHM", 12.57, 104.99),
    ("KIR", 1.87, -157.36),
    ("KNA", 17.36, -62.78),
    ("KOR", 35.91, 127.77),
    ("KWT", 29.31, 47.48),
    ("LAO", 19.86, 102.50),
    ("LBN", 33.85, 35.86),
    ("LBR", 6.43, -9.43),
    ("LBY", 26.34, 17.23),
    ("LCA", 13.91, -60.98),
    ("LIE", 47.17, 9.56),
    ("LKA", 7.87, 80.77),
    ("LSO", -29.61, 28.23),
    ("LTU", 55.17, 23.88),
    ("LUX", 49.82, 6.13),
    ("LVA", 56.88, 24.60),
    ("MAC", 22.20, 113.54),
    ("MAR", 31.79, -7.09),
    ("MCO", 43.75, 7.41),
    ("MDA", 47.41, 28.37),
    ("MDG", -18.77, 46.87),
    ("MDV", 3.20, 73.22),
    ("MEX", 23.63, -102.55),
    ("MHL", 7.13, 171.18),
    ("MKD", 41.61, 21.75),
    ("MLI", 17.57, -4.00),
    ("MLT", 35.94, 14.38),
    ("MMR", 21.91, 95.96),
    ("MNE", 42.71, 19.37),
    ("MNG", 46.86, 103.85),
    ("MOZ", -18.67, 35.53),
    ("MRT", 21.01, -10.94),
    ("MUS", -20.35, 57.55),
    ("MWI", -13.25, 34.30),
    ("MYS", 4.21, 101.98),
    ("NAM", -22.96, 18.49),
    ("NCL", -20.90, 165.62),
    ("NER", 17.61, 8.08),
    ("NGA", 9.08, 8.68),
    ("NIC", 12.87, -85.21),
    ("NLD", 52.13, 5.29),
    ("NOR", 60.47, 8.47),
    ("NPL", 28.39, 84.12),
    ("NRU", -0.52, 166.93),
    ("NZL", -40.90, 174.89),
    ("OMN", 21.51, 55.92),
    ("PAK", 30.38, 69.35),
    ("PAN", 8.54, -80.78),
    ("PER", -9.19, -75.02),
    ("PHL", 12.88, 121.77),
    ("PLW", 7.51, 134.58),
    ("PNG", -6.31, 143.96),
    ("POL", 51.92, 19.15),
    ("PRI", 18.22, -66.59),
    ("PRK", 40.34, 127.51),
    ("PRT", 39.40, -8.22),
    ("PRY", -23.44, -58.44),
    ("PSE", 31.95, 35.23),
    ("PYF", -17.68, -149.41),
    ("QAT", 25.35, 51.18),
    ("ROU", 45.94, 24.97),
    ("RUS", 61.52, 105.32),
    ("RWA", -1.94, 29.87),
    ("SAU", 23.89, 45.08),
    ("SDN", 12.86, 30.22),
    ("SEN", 14.50, -14.45),
    ("SGP", 1.35, 103.82),
    ("SLB", -9.65, 160.16),
    ("SLE", 8.46, -11.78),
    ("SLV", 13.79, -88.90),
    ("SMR", 43.94, 12.46),
    ("SOM", 5.15, 46.20),
    ("SRB", 44.02, 21.01),
    ("SSD", 6.88, 31.31),
    ("STP", 0.19, 6.61),
    ("SUR", 3.92, -56.03),
    ("SVK", 48.67, 19.70),
    ("SVN", 46.15, 14.99),
    ("SWE", 60.13, 18.64),
    ("SWZ", -26.52, 31.47),
    ("SYC", -4.68, 55.49),
    ("SYR", 34.80, 39.00),
    ("TCD", 15.45, 18.73),
    ("TGO", 8.62, 0.82),
    ("THA", 15.87, 100.99),
    ("TJK", 38.86, 71.28),
    ("TKM", 38.97, 59.56),
    ("TLS", -8.87, 125.73),
    ("TON", -21.18, -175.20),
    ("TTO", 10.69, -61.22),
    ("TUN", 33.89, 9.54),
    ("TUR", 38.96, 35.24),
    ("TUV", -7.11, 177.65),
    ("TZA", -6.37, 34.89),
    ("UGA", 1.37, 32.29),
    ("UKR", 48.38, 31.17),
    ("URY", -32.52, -55.77),
    ("USA", 37.09, -95.71),
    ("UZB", 41.38, 64.59),
    ("VCT", 12.98, -61.29),
    ("VEN", 6.42, -66.59),
    ("VNM", 14.06, 108.28),
    ("VUT", -15.38, 166.96),
    ("WSM", -13.76, -172.10),
    ("XKX", 42.60, 20.90),
    ("YEM", 15.55, 48.52),
    ("ZAF", -30.56, 22.94),
    ("ZMB", -13.13, 27.85),
    ("ZWE", -19.02, 29.15),
];

/// (longitude, latitude) of a country, or `None` for unknown and aggregate
/// codes such as `WLD`.
pub fn centroid(code: &str) -> Option<(f64, f64)> {
    let code = code.trim();
    CENTROIDS
        .iter()
        .find(|(c, _, _)| c.eq_ignore_ascii_case(code))
        .map(|&(_, lat, lon)| (lon, lat))
}
