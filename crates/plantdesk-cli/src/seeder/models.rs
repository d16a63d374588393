//! Configuration for fixture generation.

/// Records generated for each project.
#[derive(Debug, Clone)]
pub struct AttachmentsPerProject {
    pub documents: usize,
    pub media: usize,
}

impl Default for AttachmentsPerProject {
    fn default() -> Self {
        Self {
            documents: 3,
            media: 4,
        }
    }
}

/// Complete configuration for fixture generation.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    /// Client departments owning projects
    pub num_clients: usize,
    pub projects_per_client: usize,
    pub num_contractors: usize,
    pub attachments: AttachmentsPerProject,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            num_clients: 5,
            projects_per_client: 8,
            num_contractors: 12,
            attachments: AttachmentsPerProject::default(),
        }
    }
}

impl SeedConfig {
    pub fn new(num_clients: usize) -> Self {
        Self {
            num_clients,
            ..Default::default()
        }
    }

    pub fn with_projects(mut self, projects_per_client: usize) -> Self {
        self.projects_per_client = projects_per_client;
        self
    }

    pub fn with_contractors(mut self, num_contractors: usize) -> Self {
        self.num_contractors = num_contractors;
        self
    }

    pub fn with_attachments(mut self, attachments: AttachmentsPerProject) -> Self {
        self.attachments = attachments;
        self
    }
}
