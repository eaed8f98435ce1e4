use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct EventsResponse {
    #[serde(default)]
    pub events: Vec<Event>,
}

#[derive(Debug, Deserialize)]
pub struct Event {
    pub id: serde_json::Value,
    pub title: Option<String>,
    pub venue: Option<Venue>,
    pub stats: Option<Stats>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Venue {
    pub city: Option<String>,
    pub state: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Stats {
    pub listing_count: Option<i64>,
    pub average_price: Option<f64>,
}

impl Event {
    /// The upstream ID rendered without JSON quoting.
    pub fn id_string(&self) -> String {
        match &self.id {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}
