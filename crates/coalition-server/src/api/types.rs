//! Request and response bodies.

use coalition::{Coalition, Dataset, Member, Party};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartyView {
    pub name: String,
    pub seats: u32,
    pub economic: f64,
    pub social: f64,
}

impl From<&Party> for PartyView {
    fn from(party: &Party) -> Self {
        Self {
            name: party.name().to_string(),
            seats: party.seats(),
            economic: party.economic(),
            social: party.social(),
        }
    }
}

pub fn party_views(dataset: &Dataset) -> Vec<PartyView> {
    dataset.parties().iter().map(PartyView::from).collect()
}

#[derive(Debug, Serialize)]
pub struct InitializeResponse {
    pub success: bool,
    pub parties: Vec<PartyView>,
    pub total_seats: u64,
    pub polls: Vec<String>,
    pub current_poll: String,
}

#[derive(Debug, Deserialize)]
pub struct ChangePollRequest {
    pub poll_name: String,
}

#[derive(Debug, Serialize)]
pub struct ChangePollResponse {
    pub success: bool,
    pub parties: Vec<PartyView>,
    pub total_seats: u64,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePositionRequest {
    pub party_name: String,
    pub economic: f64,
    pub social: f64,
}

#[derive(Debug, Serialize)]
pub struct UpdatePositionResponse {
    pub success: bool,
    pub parties: Vec<PartyView>,
}

fn default_min_parties() -> usize {
    1
}

fn default_max_parties() -> usize {
    6
}

#[derive(Debug, Deserialize)]
pub struct CoalitionsRequest {
    #[serde(default = "default_min_parties")]
    pub min_parties: usize,
    #[serde(default = "default_max_parties")]
    pub max_parties: usize,
    /// Each entry names one party or a pair.
    #[serde(default)]
    pub exclusions: Vec<Vec<String>>,
    /// Each entry names a pair.
    #[serde(default)]
    pub inclusions: Vec<Vec<String>>,
    #[serde(default)]
    pub majority_only: Option<bool>,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberView {
    pub name: String,
    pub seats: u32,
}

impl From<&Member> for MemberView {
    fn from(member: &Member) -> Self {
        Self {
            name: member.name.clone(),
            seats: member.seats,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoalitionView {
    pub parties: Vec<String>,
    pub seats: u64,
    pub party_details: Vec<MemberView>,
    pub avg_economic: f64,
    pub avg_social: f64,
    pub compatibility: f64,
    pub is_majority: bool,
}

impl From<&Coalition> for CoalitionView {
    fn from(c: &Coalition) -> Self {
        Self {
            parties: c.party_names().map(str::to_string).collect(),
            seats: c.seats,
            party_details: c.members.iter().map(MemberView::from).collect(),
            avg_economic: c.avg_economic,
            avg_social: c.avg_social,
            compatibility: c.compatibility.value(),
            is_majority: c.is_majority,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CoalitionsResponse {
    pub success: bool,
    pub coalitions: Vec<CoalitionView>,
    pub total_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct SelectCoalitionRequest {
    #[serde(default)]
    pub parties: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SelectCoalitionResponse {
    pub success: bool,
    pub parties: Vec<String>,
    pub coalition_seats: u64,
    pub has_majority: bool,
}
