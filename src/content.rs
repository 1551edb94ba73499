//! Diary pages: the built-in journey diary or a user supplied TOML file.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::registry::{PageId, PageRegistry};

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DiaryPage {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub body: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Diary {
    #[serde(default = "default_diary_title")]
    pub title: String,
    pub pages: Vec<DiaryPage>,
}

fn default_diary_title() -> String {
    "Diary".to_string()
}

impl Diary {
    pub fn load_from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| {
            AppError::io_with_context(source, format!("failed to read content: {}", path.display()))
        })?;
        let diary = toml::from_str::<Self>(&raw)
            .map_err(|source| AppError::content(path, source.to_string()))?;
        diary
            .registry()
            .map_err(|err| AppError::content(path, err.to_string()))?;
        Ok(diary)
    }

    pub fn registry(&self) -> AppResult<PageRegistry> {
        PageRegistry::new(self.pages.iter().map(|page| PageId::new(page.id.as_str())))
    }

    pub fn page(&self, index: usize) -> Option<&DiaryPage> {
        self.pages.get(index)
    }

    pub fn built_in() -> Self {
        let pages = BUILT_IN_PAGES
            .iter()
            .map(|(id, title, subtitle, body)| DiaryPage {
                id: (*id).to_string(),
                title: (*title).to_string(),
                subtitle: (!subtitle.is_empty()).then(|| (*subtitle).to_string()),
                body: body.iter().map(|line| (*line).to_string()).collect(),
            })
            .collect();
        Self {
            title: "Leapfrog Journey".to_string(),
            pages,
        }
    }
}

type BuiltInPage = (&'static str, &'static str, &'static str, &'static [&'static str]);

const BUILT_IN_PAGES: &[BuiltInPage] = &[
    (
        "hero",
        "My Leapfrog Journey",
        "A Diary of Growth, Innovation, and Collaboration",
        &[
            "Documenting my experience in the Leapfrog Student Partnership Program.",
            "Use the arrow keys to turn the pages.",
        ],
    ),
    (
        "about",
        "About the Program",
        "",
        &[
            "The program bridged the gap between academic learning and real-world industry practice.",
            "It offered meaningful projects, talented peers and experienced mentors.",
            "12+ weeks of learning. 5+ projects completed. Countless memories created.",
        ],
    ),
    (
        "team",
        "Our Team",
        "The people I had the privilege to work with",
        &["Our diverse team brought unique perspectives and skills to every project."],
    ),
    (
        "design-thinking",
        "Design Thinking Session",
        "Exploring problem-solving methodologies",
        &[
            "Empathize: understanding user needs and challenges.",
            "Define: clearly articulating the problem statement.",
            "Ideate: brainstorming creative solutions.",
            "Prototype: building tangible representations.",
            "Test: gathering feedback and iterating.",
        ],
    ),
    (
        "ai-session",
        "AI Session",
        "Diving into Artificial Intelligence and Machine Learning",
        &[
            "Fundamentals: understanding AI and ML concepts.",
            "Applications: real-world use cases and implementations.",
            "Ethics: responsible AI development practices.",
            "Future trends: where AI is heading.",
        ],
    ),
    (
        "devops-session",
        "DevOps Session",
        "Modern DevOps practices and CI/CD pipelines",
        &[
            "Containerization: Docker and container orchestration.",
            "CI/CD pipelines: automated testing and deployment workflows.",
            "Infrastructure as code: managing infrastructure programmatically.",
            "Monitoring and logging: application observability and debugging.",
        ],
    ),
    (
        "learnings",
        "Key Learnings",
        "",
        &[
            "Technical skills: modern tools, frameworks and practices.",
            "Collaboration: teamwork and effective communication.",
            "Problem solving: design thinking and agile methods.",
            "Innovation: a mindset of continuous learning.",
            "Industry insights: how the tech industry operates.",
            "Creative thinking: approaching problems from many angles.",
        ],
    ),
    (
        "reflection",
        "Personal Reflection",
        "",
        &[
            "More than a learning experience: a journey of self-discovery, growth and lasting connections.",
            "From the first nervous day to the confident presentations, every moment shaped who I am today.",
            "This isn't the end; it's just the beginning.",
        ],
    ),
];

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::process;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::Diary;
    use crate::error::AppError;

    fn unique_temp_path(suffix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("diary_content_{suffix}_{}_{}", process::id(), nanos));
        path
    }

    #[test]
    fn built_in_diary_has_eight_unique_pages() {
        let diary = Diary::built_in();
        let registry = diary.registry().expect("built-in ids are unique");
        assert_eq!(registry.len(), 8);
        assert_eq!(registry.id_at(0).as_str(), "hero");
        assert_eq!(registry.id_at(7).as_str(), "reflection");
        assert!(diary.page(3).is_some_and(|page| page.subtitle.is_some()));
        assert!(diary.page(1).is_some_and(|page| page.subtitle.is_none()));
    }

    #[test]
    fn load_from_path_reads_pages_in_order() {
        let path = unique_temp_path("pages.toml");
        fs::write(
            &path,
            r#"
            title = "Trip"

            [[pages]]
            id = "day-1"
            title = "Arrival"
            body = ["Landed at noon."]

            [[pages]]
            id = "day-2"
            title = "Hiking"
            "#,
        )
        .expect("content file should be written");

        let diary = Diary::load_from_path(&path).expect("content should parse");
        assert_eq!(diary.title, "Trip");
        assert_eq!(diary.pages.len(), 2);
        assert_eq!(diary.pages[1].id, "day-2");
        assert!(diary.pages[1].body.is_empty());

        fs::remove_file(&path).expect("content file should be removed");
    }

    #[test]
    fn load_from_path_rejects_duplicate_ids() {
        let path = unique_temp_path("dupes.toml");
        fs::write(
            &path,
            r#"
            [[pages]]
            id = "same"
            title = "One"

            [[pages]]
            id = "same"
            title = "Two"
            "#,
        )
        .expect("content file should be written");

        let err = Diary::load_from_path(&path).expect_err("duplicate ids must fail");
        assert!(matches!(err, AppError::Content { .. }));

        fs::remove_file(&path).expect("content file should be removed");
    }
}
