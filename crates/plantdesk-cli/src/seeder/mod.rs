//! Fake fixture generation.
//!
//! Rows are generated in parallel with Rayon and written as one JSON
//! [`Fixture`] that the API server loads with `--seed`.

pub mod contractors;
pub mod models;
pub mod projects;
pub mod settings;

use std::path::Path;
use std::time::Instant;

use chrono::{DateTime, Duration, Utc};
use fake::Fake;
use uuid::Uuid;

use plantdesk_store::Fixture;

pub use models::{AttachmentsPerProject, SeedConfig};

/// Picks one element uniformly.
pub(crate) fn pick<T: Copy>(items: &[T]) -> T {
    items[(0..items.len()).fake::<usize>()]
}

/// A timestamp within the last year.
pub(crate) fn recent_timestamp() -> DateTime<Utc> {
    let minutes: i64 = (0..365 * 24 * 60i64).fake();
    Utc::now() - Duration::minutes(minutes)
}

/// Generates a complete fixture and the client ids owning its projects.
pub fn generate_fixture(config: &SeedConfig) -> (Fixture, Vec<Uuid>) {
    let client_ids: Vec<Uuid> = (0..config.num_clients).map(|_| Uuid::new_v4()).collect();

    let contractors = contractors::generate_contractors(config.num_contractors);
    let contractor_ids: Vec<Uuid> = contractors.iter().map(|c| c.id).collect();

    let projects =
        projects::generate_projects(&client_ids, &contractor_ids, config.projects_per_client);
    let documents = projects::generate_documents(&projects, config.attachments.documents);
    let media = projects::generate_media(&projects, config.attachments.media);

    let fixture = Fixture {
        projects,
        contractors,
        documents,
        media,
        settings: settings::default_settings(),
    };

    (fixture, client_ids)
}

/// Generates a fixture and writes it to `path`.
pub async fn seed_fixture(
    path: &Path,
    config: SeedConfig,
) -> Result<Fixture, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!(
        "🏗️  Generating fixture for {} clients ({} projects each)...",
        config.num_clients, config.projects_per_client
    );

    let (fixture, client_ids) = generate_fixture(&config);
    fixture.write(path).await?;

    println!("   ✓ {} contractors", fixture.contractors.len());
    println!("   ✓ {} projects", fixture.projects.len());
    println!("   ✓ {} documents", fixture.documents.len());
    println!("   ✓ {} media records", fixture.media.len());
    println!("   ✓ {} settings", fixture.settings.len());
    println!("\n👤 Client ids (use with `plantdesk-cli token --role client --user-id <id>`):");
    for id in &client_ids {
        println!("   {}", id);
    }
    println!(
        "\n✅ Wrote {} in {:?}",
        path.display(),
        start_time.elapsed()
    );

    Ok(fixture)
}
