use fake::Fake;
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::SafeEmail;
use fake::faker::phone_number::en::PhoneNumber;
use rayon::prelude::*;
use uuid::Uuid;

use plantdesk_models::{Contractor, ContractorStatus, Metadata, Trade};

use super::{pick, recent_timestamp};

const TRADES: [Trade; 7] = [
    Trade::General,
    Trade::Electrical,
    Trade::Plumbing,
    Trade::Hvac,
    Trade::Roofing,
    Trade::Landscaping,
    Trade::Other,
];

/// Mostly active, with a few inactive and suspended.
const STATUSES: [ContractorStatus; 6] = [
    ContractorStatus::Active,
    ContractorStatus::Active,
    ContractorStatus::Active,
    ContractorStatus::Active,
    ContractorStatus::Inactive,
    ContractorStatus::Suspended,
];

/// Generates contractor data in parallel using Rayon
pub fn generate_contractors(count: usize) -> Vec<Contractor> {
    (0..count)
        .into_par_iter()
        .map(|_| {
            let created_at = recent_timestamp();
            let name: String = CompanyName().fake();

            Contractor {
                id: Uuid::new_v4(),
                name,
                trade: pick(&TRADES),
                status: pick(&STATUSES),
                email: Some(SafeEmail().fake()),
                phone: Some(PhoneNumber().fake()),
                metadata: Metadata::new(),
                created_at,
                updated_at: created_at,
            }
        })
        .collect()
}
