use std::collections::HashMap;

/// Neutral fallback score for missing or malformed signals
///
/// "No signal" is deliberately distinct from "no match": unparseable ages,
/// absent locations and unknown education levels all land here instead of
/// failing the request or zeroing the factor.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Ordinal rank assigned to education levels not in the hierarchy
const DEFAULT_EDUCATION_RANK: u8 = 3;

/// Shared defensive-parse helper: a fully parsed score, or the neutral
/// sentinel when any part of the input was malformed
fn score_or_neutral(parsed: Option<f64>) -> f64 {
    parsed.unwrap_or(NEUTRAL_SCORE)
}

/// Static categorical affinity tables
///
/// Sector adjacency, metro/satellite city pairs and the education hierarchy
/// are fixed lookup data: built once at engine construction, never mutated.
pub struct AffinityTables {
    /// Directed lookahead: candidate-preferred sector to related sectors
    related_sectors: HashMap<&'static str, &'static [&'static str]>,
    /// Metro city to its satellite cities; checked in both directions
    nearby_cities: HashMap<&'static str, &'static [&'static str]>,
    /// Six-level ordinal education hierarchy, with spelling variants
    education_ranks: HashMap<&'static str, u8>,
}

impl Default for AffinityTables {
    fn default() -> Self {
        let related_sectors: HashMap<&'static str, &'static [&'static str]> = HashMap::from([
            ("technology", &["design", "media"] as &[_]),
            ("finance", &["business", "operations"] as &[_]),
            ("healthcare", &["education"] as &[_]),
            ("education", &["technology", "media"] as &[_]),
            ("media", &["technology", "design"] as &[_]),
            ("design", &["technology", "media"] as &[_]),
            ("sales", &["marketing", "business"] as &[_]),
            ("marketing", &["sales", "media"] as &[_]),
            ("operations", &["business", "finance"] as &[_]),
            ("human resources", &["business", "operations"] as &[_]),
        ]);

        let nearby_cities: HashMap<&'static str, &'static [&'static str]> = HashMap::from([
            ("mumbai", &["pune", "nashik"] as &[_]),
            ("delhi", &["gurgaon", "noida"] as &[_]),
            ("bangalore", &["mysore", "mangalore"] as &[_]),
            ("hyderabad", &["secunderabad"] as &[_]),
            ("chennai", &["coimbatore", "madurai"] as &[_]),
        ]);

        let education_ranks: HashMap<&'static str, u8> = HashMap::from([
            ("10th pass", 1),
            ("12th pass", 2),
            ("diploma", 3),
            ("graduate", 4),
            ("post graduate", 5),
            ("post-graduate", 5),
            ("phd", 6),
            ("doctoral", 6),
        ]);

        Self {
            related_sectors,
            nearby_cities,
            education_ranks,
        }
    }
}

impl AffinityTables {
    /// Sector match score (0-1)
    ///
    /// Exact case-insensitive membership in the candidate's preferred
    /// sectors scores 1.0, an adjacency-table hit 0.7, anything else 0.
    /// No preferences supplied means no sector signal at all.
    pub fn sector_score(&self, candidate_sectors: &[String], posting_sector: &str) -> f64 {
        if candidate_sectors.is_empty() {
            return 0.0;
        }

        let posting = posting_sector.trim().to_lowercase();
        if candidate_sectors
            .iter()
            .any(|s| s.trim().to_lowercase() == posting)
        {
            return 1.0;
        }

        for sector in candidate_sectors {
            if let Some(related) = self.related_sectors.get(sector.trim().to_lowercase().as_str()) {
                if related.iter().any(|r| *r == posting) {
                    return 0.7;
                }
            }
        }

        0.0
    }

    /// Location match score (0-1)
    ///
    /// Locations are "city, region" strings. Same region or same city
    /// scores 1.0, a metro/satellite pair 0.8, and any other concrete
    /// mismatch 0.3 rather than 0 since relocation is often viable.
    pub fn location_score(&self, candidate_location: &str, posting_location: &str) -> f64 {
        if candidate_location.trim().is_empty() || posting_location.trim().is_empty() {
            return NEUTRAL_SCORE;
        }

        let candidate_region = last_segment(candidate_location);
        let posting_region = last_segment(posting_location);
        if candidate_region == posting_region {
            return 1.0;
        }

        let candidate_city = first_segment(candidate_location);
        let posting_city = first_segment(posting_location);
        if candidate_city == posting_city {
            return 1.0;
        }

        if self.is_satellite(&candidate_city, &posting_city)
            || self.is_satellite(&posting_city, &candidate_city)
        {
            return 0.8;
        }

        0.3
    }

    /// Education match score (0-1)
    ///
    /// Unknown level text on either side defaults to the diploma rank, a
    /// neutral midpoint rather than an error.
    pub fn education_score(&self, candidate_education: &str, required_education: &str) -> f64 {
        let candidate_rank = self.education_rank(candidate_education);
        let required_rank = self.education_rank(required_education);

        if candidate_rank == required_rank {
            1.0
        } else if candidate_rank > required_rank {
            0.9
        } else {
            0.3
        }
    }

    fn education_rank(&self, level: &str) -> u8 {
        self.education_ranks
            .get(level.trim().to_lowercase().as_str())
            .copied()
            .unwrap_or(DEFAULT_EDUCATION_RANK)
    }

    fn is_satellite(&self, metro: &str, city: &str) -> bool {
        self.nearby_cities
            .get(metro)
            .map_or(false, |cities| cities.iter().any(|c| *c == city))
    }
}

/// Age match score (0-1)
///
/// Candidate age and posting "min-max" range are both parsed defensively:
/// in-range scores 1.0, out-of-range or any parse failure the neutral 0.5.
/// Malformed age data must never fail a request.
pub fn age_score(candidate_age: &str, posting_age_range: &str) -> f64 {
    score_or_neutral(try_age_score(candidate_age, posting_age_range))
}

fn try_age_score(candidate_age: &str, posting_age_range: &str) -> Option<f64> {
    let age: i64 = candidate_age.trim().parse().ok()?;

    let (min, max) = posting_age_range.trim().split_once('-')?;
    let min: i64 = min.trim().parse().ok()?;
    let max: i64 = max.trim().parse().ok()?;

    if (min..=max).contains(&age) {
        Some(1.0)
    } else {
        Some(NEUTRAL_SCORE)
    }
}

fn first_segment(location: &str) -> String {
    location
        .split(',')
        .next()
        .unwrap_or("")
        .trim()
        .to_lowercase()
}

fn last_segment(location: &str) -> String {
    location
        .rsplit(',')
        .next()
        .unwrap_or("")
        .trim()
        .to_lowercase()
}
