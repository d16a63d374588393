use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use uuid::Uuid;

use plantdesk_auth::{Role, create_access_token};
use plantdesk_cli::seeder::{self, AttachmentsPerProject, SeedConfig};
use plantdesk_config::JwtConfig;

#[derive(Parser)]
#[command(name = "plantdesk-cli")]
#[command(about = "PlantDesk CLI - Development tools for PlantDesk", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a fake fixture file for `plantdesk --seed`
    Seed {
        /// Where to write the fixture
        #[arg(short = 'o', long, default_value = "fixtures/demo.json")]
        output: PathBuf,

        /// Number of client departments
        #[arg(short = 'c', long, default_value = "5")]
        clients: usize,

        /// Number of projects per client
        #[arg(short = 'p', long, default_value = "8")]
        projects: usize,

        /// Number of contractors
        #[arg(long, default_value = "12")]
        contractors: usize,

        /// Number of documents per project
        #[arg(long, default_value = "3")]
        documents: usize,

        /// Number of media records per project
        #[arg(long, default_value = "4")]
        media: usize,
    },
    /// Mint a bearer token signed with JWT_SECRET for local testing
    Token {
        /// Role granted by the token (admin, manager, client)
        #[arg(short = 'r', long)]
        role: Role,

        /// Subject id; a client's id must match its projects' client_id
        #[arg(short = 'u', long)]
        user_id: Option<Uuid>,

        /// Email address carried in the token
        #[arg(short = 'e', long, default_value = "dev@plantdesk.example.edu")]
        email: String,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Seed {
            output,
            clients,
            projects,
            contractors,
            documents,
            media,
        } => handle_seed(output, clients, projects, contractors, documents, media).await,
        Commands::Token {
            role,
            user_id,
            email,
        } => handle_token(role, user_id, email),
    }
}

async fn handle_seed(
    output: PathBuf,
    clients: usize,
    projects: usize,
    contractors: usize,
    documents: usize,
    media: usize,
) {
    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
        && let Err(e) = tokio::fs::create_dir_all(parent).await
    {
        eprintln!("\n❌ Error creating {}: {}", parent.display(), e);
        std::process::exit(1);
    }

    let config = SeedConfig::new(clients)
        .with_projects(projects)
        .with_contractors(contractors)
        .with_attachments(AttachmentsPerProject { documents, media });

    if let Err(e) = seeder::seed_fixture(&output, config).await {
        eprintln!("\n❌ Error generating fixture: {}", e);
        std::process::exit(1);
    }
}

fn handle_token(role: Role, user_id: Option<Uuid>, email: String) {
    let jwt_config = JwtConfig::from_env();
    let user_id = user_id.unwrap_or_else(Uuid::new_v4);

    match create_access_token(user_id, &email, role, &jwt_config) {
        Ok(token) => {
            println!("✅ {} token for {} ({})", role, email, user_id);
            println!(
                "   Expires in {} seconds\n",
                jwt_config.access_token_expiry
            );
            println!("{}", token);
        }
        Err(e) => {
            eprintln!("\n❌ Error creating token: {}", e.message());
            std::process::exit(1);
        }
    }
}
