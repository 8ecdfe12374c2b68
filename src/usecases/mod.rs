//! Application use cases. Orchestrate domain logic via ports.

pub mod campaign_service;

pub use campaign_service::CampaignService;
