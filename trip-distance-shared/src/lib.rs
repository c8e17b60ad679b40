pub mod trips {
    use serde::{Deserialize, Serialize};

    /// Travel modes understood by the distance provider.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum TravelMode {
        Driving,
        Walking,
        Bicycling,
        Transit,
    }

    impl TravelMode {
        /// Every mode, in the order the form renders its radio group.
        pub const ALL: [TravelMode; 4] = [
            TravelMode::Bicycling,
            TravelMode::Driving,
            TravelMode::Transit,
            TravelMode::Walking,
        ];

        /// Wire value, passed through untouched to the provider's `mode`
        /// query parameter.
        pub fn as_str(&self) -> &'static str {
            match self {
                TravelMode::Driving => "driving",
                TravelMode::Walking => "walking",
                TravelMode::Bicycling => "bicycling",
                TravelMode::Transit => "transit",
            }
        }

        pub fn label(&self) -> &'static str {
            match self {
                TravelMode::Driving => "DRIVING",
                TravelMode::Walking => "WALKING",
                TravelMode::Bicycling => "BICYCLING",
                TravelMode::Transit => "TRANSIT",
            }
        }
    }

    /// A single lookup request as submitted by the form.
    ///
    /// Fields fall back to empty strings when absent, so a missing field
    /// reaches the provider as an empty parameter instead of being rejected
    /// at extraction.
    #[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub struct TripRequest {
        #[serde(rename = "startInput", default)]
        pub start_input: String,
        #[serde(rename = "destinationInput", default)]
        pub destination_input: String,
        #[serde(rename = "travelMode", default)]
        pub travel_mode: String,
    }

    /// Human-readable text plus the raw magnitude as the provider reports
    /// them, e.g. `{ "text": "173 mi", "value": 278000 }`.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct TextValue {
        pub text: String,
        pub value: u64,
    }

    /// One measure slot of a result. On the wire this is either the
    /// `{text, value}` object or the empty string, never null or absent.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(untagged)]
    pub enum Measure {
        Present(TextValue),
        Missing(String),
    }

    impl Measure {
        pub fn empty() -> Measure {
            Measure::Missing(String::new())
        }

        /// The `.text` sub-field, when this measure carries one.
        pub fn text(&self) -> Option<&str> {
            match self {
                Measure::Present(tv) => Some(&tv.text),
                Measure::Missing(_) => None,
            }
        }
    }

    /// Domain-level outcome tag of a lookup.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub enum LookupStatus {
        #[serde(rename = "OK")]
        Ok,
        #[serde(rename = "ERROR")]
        Error,
    }

    /// Normalized proxy response: a found route with both measures
    /// populated, or an error with both measures empty.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct TripResult {
        pub status: LookupStatus,
        #[serde(rename = "distanceResult")]
        pub distance_result: Measure,
        #[serde(rename = "durationResult")]
        pub duration_result: Measure,
    }

    impl TripResult {
        pub fn found(distance: TextValue, duration: TextValue) -> TripResult {
            TripResult {
                status: LookupStatus::Ok,
                distance_result: Measure::Present(distance),
                duration_result: Measure::Present(duration),
            }
        }

        pub fn not_found() -> TripResult {
            TripResult {
                status: LookupStatus::Error,
                distance_result: Measure::empty(),
                duration_result: Measure::empty(),
            }
        }
    }
}
