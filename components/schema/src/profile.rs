//! Career profiles, one per user.
//!
//! Experience and education are embedded sequences with the same
//! prepend-with-fresh-id / remove-by-id discipline as post comments.

use chrono::{DateTime, NaiveDate, Utc};

use crate::aliases::{EducationId, ExperienceId, UserId};

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Experience {
    pub id: ExperienceId,
    pub title: String,
    pub company: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    pub from: NaiveDate,

    /// None while `current` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,

    #[serde(default)]
    pub current: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Education {
    pub id: EducationId,
    pub school: String,
    pub degree: String,

    #[serde(rename = "fieldofstudy")]
    pub field_of_study: String,

    pub from: NaiveDate,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,

    #[serde(default)]
    pub current: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Profile {
    pub user: UserId,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    pub status: String,
    pub skills: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    #[serde(rename = "githubusername", skip_serializing_if = "Option::is_none")]
    pub github_username: Option<String>,

    #[serde(default)]
    pub social: SocialLinks,

    #[serde(default)]
    pub experience: Vec<Experience>,

    #[serde(default)]
    pub education: Vec<Education>,

    pub date: DateTime<Utc>,
}

impl Profile {
    pub fn new(user: UserId, status: String, skills: Vec<String>) -> Profile {
        Profile {
            user,
            company: None,
            website: None,
            location: None,
            status,
            skills,
            bio: None,
            github_username: None,
            social: SocialLinks::default(),
            experience: Vec::new(),
            education: Vec::new(),
            date: Utc::now(),
        }
    }

    /// Prepends an experience entry, returning its generated id.
    pub fn add_experience(&mut self, mut entry: Experience) -> ExperienceId {
        entry.id = ExperienceId::new_v4();
        let id = entry.id;
        self.experience.insert(0, entry);
        id
    }

    pub fn remove_experience(&mut self, id: ExperienceId) -> bool {
        let before = self.experience.len();
        self.experience.retain(|entry| entry.id != id);
        self.experience.len() != before
    }

    /// Prepends an education entry, returning its generated id.
    pub fn add_education(&mut self, mut entry: Education) -> EducationId {
        entry.id = EducationId::new_v4();
        let id = entry.id;
        self.education.insert(0, entry);
        id
    }

    pub fn remove_education(&mut self, id: EducationId) -> bool {
        let before = self.education.len();
        self.education.retain(|entry| entry.id != id);
        self.education.len() != before
    }
}

/// Splits the comma-separated skills field into trimmed, non-empty entries.
pub fn split_skills(skills: &str) -> Vec<String> {
    skills
        .split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn experience(title: &str) -> Experience {
        Experience {
            id: ExperienceId::nil(),
            title: title.to_owned(),
            company: "Acme".to_owned(),
            location: None,
            from: NaiveDate::from_ymd_opt(2019, 1, 1).unwrap(),
            to: None,
            current: true,
            description: None,
        }
    }

    #[test]
    fn experience_is_prepended_with_fresh_ids() {
        let mut profile = Profile::new(UserId::new_v4(), "Developer".to_owned(), vec![]);

        let first = profile.add_experience(experience("first"));
        let second = profile.add_experience(experience("second"));

        assert_ne!(first, second);
        assert_ne!(second, ExperienceId::nil());
        assert_eq!(profile.experience[0].title, "second");
        assert_eq!(profile.experience[1].title, "first");
    }

    #[test]
    fn experience_removal_shrinks_by_exactly_one() {
        let mut profile = Profile::new(UserId::new_v4(), "Developer".to_owned(), vec![]);

        profile.add_experience(experience("keep"));
        let id = profile.add_experience(experience("gone"));

        assert!(profile.remove_experience(id));
        assert_eq!(profile.experience.len(), 1);
        assert!(profile.experience.iter().all(|e| e.id != id));

        // removing again is a no-op
        assert!(!profile.remove_experience(id));
        assert_eq!(profile.experience.len(), 1);
    }

    #[test]
    fn education_follows_the_same_pattern() {
        let mut profile = Profile::new(UserId::new_v4(), "Student".to_owned(), vec![]);

        let id = profile.add_education(Education {
            id: EducationId::nil(),
            school: "State".to_owned(),
            degree: "BSc".to_owned(),
            field_of_study: "CS".to_owned(),
            from: NaiveDate::from_ymd_opt(2015, 9, 1).unwrap(),
            to: None,
            current: true,
            description: None,
        });

        assert_eq!(profile.education.len(), 1);
        assert!(profile.remove_education(id));
        assert!(profile.education.is_empty());
    }

    #[test]
    fn skills_split_trims_and_drops_empties() {
        assert_eq!(
            split_skills("Rust, SQL ,, async ,"),
            vec!["Rust", "SQL", "async"]
        );
        assert!(split_skills("  ").is_empty());
    }
}
