use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use plantdesk_models::Setting;

/// Settings every fresh office starts with.
pub fn default_settings() -> Vec<Setting> {
    let now = Utc::now();
    [
        (
            "fiscal_year.start_month",
            json!(7),
            "Month (1-12) the fiscal year starts",
        ),
        (
            "bidding.threshold_cents",
            json!(2_500_000),
            "Budgets at or above this amount require competitive bids",
        ),
        (
            "notifications.email_digest",
            json!({"enabled": true, "hour": 7}),
            "Daily project digest sent to managers",
        ),
        (
            "office.timezone",
            json!("America/Chicago"),
            "Timezone used for schedules and reports",
        ),
    ]
    .into_iter()
    .map(|(key, value, description)| Setting {
        id: Uuid::new_v4(),
        key: key.to_string(),
        value,
        description: Some(description.to_string()),
        created_at: now,
        updated_at: now,
    })
    .collect()
}
