//! Project, document and media generation.

use chrono::Duration;
use fake::faker::lorem::en::{Sentence, Words};
use fake::{Fake, Faker};
use rayon::prelude::*;
use serde_json::json;
use uuid::Uuid;

use plantdesk_models::{
    Document, DocumentCategory, Media, MediaKind, Metadata, Project, ProjectCategory,
    ProjectStatus,
};

use super::{pick, recent_timestamp};

const CAMPUSES: [&str; 4] = ["Main", "North", "Medical", "Athletics"];

const BUILDINGS: [&str; 8] = [
    "Science Hall",
    "Memorial Library",
    "Student Union",
    "Engineering Annex",
    "Fine Arts Center",
    "Fieldhouse",
    "Residence Hall A",
    "Central Plant",
];

const STATUSES: [ProjectStatus; 6] = [
    ProjectStatus::Planning,
    ProjectStatus::Bidding,
    ProjectStatus::InProgress,
    ProjectStatus::OnHold,
    ProjectStatus::Completed,
    ProjectStatus::Cancelled,
];

const CATEGORIES: [ProjectCategory; 5] = [
    ProjectCategory::Construction,
    ProjectCategory::Renovation,
    ProjectCategory::Repair,
    ProjectCategory::Maintenance,
    ProjectCategory::Inspection,
];

const DOCUMENT_CATEGORIES: [DocumentCategory; 6] = [
    DocumentCategory::Contract,
    DocumentCategory::Permit,
    DocumentCategory::Invoice,
    DocumentCategory::Drawing,
    DocumentCategory::Report,
    DocumentCategory::Other,
];

const MEDIA_KINDS: [MediaKind; 3] = [MediaKind::Photo, MediaKind::Video, MediaKind::Audio];

const FILE_HOST: &str = "https://files.plantdesk.example.edu";

/// Generates projects for every client in parallel.
pub fn generate_projects(
    client_ids: &[Uuid],
    contractor_ids: &[Uuid],
    per_client: usize,
) -> Vec<Project> {
    client_ids
        .par_iter()
        .flat_map(|&client_id| {
            (0..per_client)
                .map(|_| generate_project(client_id, contractor_ids))
                .collect::<Vec<_>>()
        })
        .collect()
}

fn generate_project(client_id: Uuid, contractor_ids: &[Uuid]) -> Project {
    let created_at = recent_timestamp();
    let building = pick(&BUILDINGS);
    let category = pick(&CATEGORIES);
    let words: Vec<String> = Words(1..3).fake();

    let start_date = Faker
        .fake::<bool>()
        .then(|| created_at.date_naive() + Duration::days((7..90i64).fake::<i64>()));
    let end_date = start_date.map(|start| start + Duration::days((14..240i64).fake::<i64>()));

    let contractor_id = if contractor_ids.is_empty() || Faker.fake::<bool>() {
        None
    } else {
        Some(pick(contractor_ids))
    };

    let mut metadata = Metadata::new();
    metadata.insert(
        "work_order",
        json!(format!("WO-{}", (1000..99999u32).fake::<u32>())),
    );

    Project {
        id: Uuid::new_v4(),
        title: format!("{} {} {}", building, category, words.join(" ")),
        description: Some(Sentence(6..14).fake()),
        status: pick(&STATUSES),
        category,
        campus: pick(&CAMPUSES).to_string(),
        building: Some(building.to_string()),
        is_emergency: (0..10u8).fake::<u8>() == 0,
        budget_cents: (50_000..50_000_000i64).fake::<i64>(),
        client_id,
        contractor_id,
        start_date,
        end_date,
        metadata,
        created_at,
        updated_at: created_at,
    }
}

/// Generates documents for every project; owners follow the project client.
pub fn generate_documents(projects: &[Project], per_project: usize) -> Vec<Document> {
    projects
        .par_iter()
        .flat_map(|project| {
            (0..per_project)
                .map(|n| {
                    let category = pick(&DOCUMENT_CATEGORIES);
                    let id = Uuid::new_v4();
                    Document {
                        id,
                        project_id: project.id,
                        owner_id: project.client_id,
                        title: format!("{} {} {}", project.title, category, n + 1),
                        category,
                        url: format!("{}/documents/{}.pdf", FILE_HOST, id),
                        metadata: Metadata::new(),
                        created_at: project.created_at,
                        updated_at: project.created_at,
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

pub fn generate_media(projects: &[Project], per_project: usize) -> Vec<Media> {
    projects
        .par_iter()
        .flat_map(|project| {
            (0..per_project)
                .map(|_| {
                    let kind = pick(&MEDIA_KINDS);
                    let extension = match kind {
                        MediaKind::Photo => "jpg",
                        MediaKind::Video => "mp4",
                        MediaKind::Audio => "m4a",
                    };
                    let id = Uuid::new_v4();
                    Media {
                        id,
                        project_id: project.id,
                        owner_id: project.client_id,
                        kind,
                        caption: Some(Sentence(3..8).fake()),
                        url: format!("{}/media/{}.{}", FILE_HOST, id, extension),
                        metadata: Metadata::new(),
                        created_at: project.created_at,
                        updated_at: project.created_at,
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect()
}
