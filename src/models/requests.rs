use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{CreatorProfile, SponsorProfile};

/// Request to rank creators for a sponsor
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SponsorMatchRequest {
    #[validate(nested)]
    pub sponsor: SponsorProfile,
    #[validate(nested)]
    #[serde(default)]
    pub creators: Vec<CreatorProfile>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request to rank sponsors for a creator
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatorMatchRequest {
    #[validate(nested)]
    pub creator: CreatorProfile,
    #[validate(nested)]
    #[serde(default)]
    pub sponsors: Vec<SponsorProfile>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}
