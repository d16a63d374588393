use std::env;

#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: parse_origins(DEFAULT_ORIGINS),
        }
    }
}

/// Admin dashboard and client portal dev servers.
const DEFAULT_ORIGINS: &str = "http://localhost:3000,http://localhost:5173,http://localhost:5174";

impl CorsConfig {
    pub fn from_env() -> Self {
        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_else(|_| parse_origins(DEFAULT_ORIGINS));

        Self { allowed_origins }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_skips_blanks() {
        let origins = parse_origins(" https://plant.example.edu , ,https://portal.example.edu");
        assert_eq!(
            origins,
            vec![
                "https://plant.example.edu".to_string(),
                "https://portal.example.edu".to_string()
            ]
        );
    }

    #[test]
    fn test_default_origins() {
        assert_eq!(CorsConfig::default().allowed_origins.len(), 3);
    }
}
