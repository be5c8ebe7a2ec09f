use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Difficulty tier advertised for a course module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl CourseLevel {
    pub fn label(&self) -> &'static str {
        match self {
            CourseLevel::Beginner => "Beginner",
            CourseLevel::Intermediate => "Intermediate",
            CourseLevel::Advanced => "Advanced",
        }
    }

    /// Parse the exact labels used on enrollment forms; no aliases.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Beginner" => Some(CourseLevel::Beginner),
            "Intermediate" => Some(CourseLevel::Intermediate),
            "Advanced" => Some(CourseLevel::Advanced),
            _ => None,
        }
    }
}

/// One static catalog entry describing a course offering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseModule {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub level: CourseLevel,
    pub image: String,
    pub features: Vec<String>,
}

fn module(
    id: &str,
    title: &str,
    description: &str,
    duration: &str,
    level: CourseLevel,
    image: &str,
    features: [&str; 4],
) -> CourseModule {
    CourseModule {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        duration: duration.to_string(),
        level,
        image: image.to_string(),
        features: features.iter().map(|feature| feature.to_string()).collect(),
    }
}

/// The full marketing catalog, seeded on first access and immutable for the
/// process lifetime.
pub fn course_modules() -> &'static [CourseModule] {
    static CATALOG: OnceLock<Vec<CourseModule>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        vec![
            module(
                "1",
                "Selenium WebDriver Fundamentals",
                "Master the basics of Selenium WebDriver for web automation testing",
                "4 weeks",
                CourseLevel::Beginner,
                "https://images.unsplash.com/photo-1573164574472-797cdf4a583a",
                [
                    "Element locators",
                    "WebDriver commands",
                    "Browser automation",
                    "Basic test scripts",
                ],
            ),
            module(
                "2",
                "Advanced Test Automation",
                "Build robust automation frameworks with advanced testing patterns",
                "6 weeks",
                CourseLevel::Advanced,
                "https://images.unsplash.com/photo-1592609931095-54a2168ae893",
                [
                    "Page Object Model",
                    "Data-driven testing",
                    "Parallel execution",
                    "CI/CD integration",
                ],
            ),
            module(
                "3",
                "API Testing Mastery",
                "Comprehensive API testing with REST, GraphQL, and automation tools",
                "5 weeks",
                CourseLevel::Intermediate,
                "https://images.unsplash.com/photo-1573496773905-f5b17e717f05",
                [
                    "REST API testing",
                    "Postman automation",
                    "JSON validation",
                    "Performance testing",
                ],
            ),
            module(
                "4",
                "Mobile Test Automation",
                "Native and hybrid mobile app testing with Appium and modern tools",
                "5 weeks",
                CourseLevel::Intermediate,
                "https://images.unsplash.com/photo-1649451844931-57e22fc82de3",
                [
                    "Appium setup",
                    "iOS/Android testing",
                    "Mobile gestures",
                    "Device cloud testing",
                ],
            ),
            module(
                "5",
                "Performance Testing",
                "Load testing, stress testing, and performance optimization strategies",
                "4 weeks",
                CourseLevel::Advanced,
                "https://images.unsplash.com/photo-1588690154757-badf4644190f",
                [
                    "JMeter mastery",
                    "Load scenarios",
                    "Performance metrics",
                    "Bottleneck analysis",
                ],
            ),
            module(
                "6",
                "Test Framework Design",
                "Build scalable, maintainable test automation frameworks from scratch",
                "8 weeks",
                CourseLevel::Advanced,
                "https://images.unsplash.com/photo-1551033406-611cf9a28f67",
                [
                    "Framework architecture",
                    "Custom utilities",
                    "Reporting systems",
                    "Maintenance strategies",
                ],
            ),
        ]
    })
}

/// Filter the catalog without touching the seeded list. Level matches by
/// case-insensitive equality, duration by case-insensitive substring; both
/// conditions AND together and an absent parameter is a no-op.
pub fn filter_modules(level: Option<&str>, duration: Option<&str>) -> Vec<CourseModule> {
    course_modules()
        .iter()
        .filter(|course| match level {
            Some(wanted) => course.level.label().eq_ignore_ascii_case(wanted),
            None => true,
        })
        .filter(|course| match duration {
            Some(wanted) => course
                .duration
                .to_lowercase()
                .contains(&wanted.to_lowercase()),
            None => true,
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_seeds_exactly_six_modules() {
        let modules = course_modules();
        assert_eq!(modules.len(), 6);
        for course in modules {
            assert!(!course.id.is_empty());
            assert!(!course.title.is_empty());
            assert!(!course.description.is_empty());
            assert!(!course.duration.is_empty());
            assert!(course.image.starts_with("https://"));
            assert_eq!(course.features.len(), 4);
        }
    }

    #[test]
    fn level_filter_is_case_insensitive_equality() {
        let beginners = filter_modules(Some("beginner"), None);
        assert_eq!(beginners.len(), 1);
        assert_eq!(beginners[0].level, CourseLevel::Beginner);

        // "Begin" is not a level, substring matching does not apply here.
        assert!(filter_modules(Some("Begin"), None).is_empty());
    }

    #[test]
    fn query_values_are_matched_verbatim() {
        // Surrounding whitespace is part of the query, not stripped.
        assert!(filter_modules(Some(" Beginner"), None).is_empty());
        assert!(filter_modules(None, Some(" 4 weeks ")).is_empty());
    }

    #[test]
    fn duration_filter_matches_substrings() {
        let four_weeks = filter_modules(None, Some("4 WEEKS"));
        assert_eq!(four_weeks.len(), 2);
        assert!(four_weeks.iter().all(|course| course.duration == "4 weeks"));
    }

    #[test]
    fn filters_compose_with_and_semantics() {
        let hits = filter_modules(Some("Advanced"), Some("6 weeks"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Advanced Test Automation");

        assert!(filter_modules(Some("Beginner"), Some("6 weeks")).is_empty());
    }

    #[test]
    fn union_of_level_filters_covers_whole_catalog() {
        let mut ids: Vec<String> = ["Beginner", "Intermediate", "Advanced"]
            .iter()
            .flat_map(|level| filter_modules(Some(level), None))
            .map(|course| course.id)
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), course_modules().len());
    }

    #[test]
    fn filtering_never_mutates_the_catalog() {
        let before: Vec<String> = course_modules().iter().map(|c| c.id.clone()).collect();
        let _ = filter_modules(Some("Advanced"), None);
        let _ = filter_modules(None, Some("weeks"));
        let after: Vec<String> = course_modules().iter().map(|c| c.id.clone()).collect();
        assert_eq!(before, after);
    }
}
