// Bundled sample roster, shown when no roster file is configured

use super::{CardId, CardRecord, MemberProfile, ProjectSummary, Roster};

fn member(name: &str, role: &str, handle: &str, photo: &str) -> CardRecord<MemberProfile> {
    CardRecord::new(
        CardId::slug(name),
        MemberProfile {
            name: name.to_string(),
            role: role.to_string(),
            email: format!("{}@example.org", handle),
            phone: String::new(),
            stream: "CSE-AIML".to_string(),
            year: "2nd".to_string(),
            linkedin: format!("https://linkedin.com/in/{}", handle),
            github: format!("https://github.com/{}", handle),
            photo: photo.to_string(),
            expanded_photo: String::new(),
        },
    )
}

fn project(title: &str, description: &str) -> CardRecord<ProjectSummary> {
    CardRecord::new(
        CardId::slug(title),
        ProjectSummary {
            title: title.to_string(),
            description: description.to_string(),
            link: "#".to_string(),
        },
    )
}

pub(super) fn roster() -> Roster {
    Roster {
        members: vec![
            member("Amitava Datta", "Team Leader", "amitava-datta", "/devImages/Amitava.jpg"),
            member("Pranay De", "Team Member", "pranay-de", "/dev/Pranay.jpg"),
            member("Anirban Ghosh", "Team Member", "anirban-ghosh", "/dev/Anirban.jpg"),
            member("Srinjinee Mitra", "Team Member", "srinjinee-mitra", "/dev/Srinjinee.jpg"),
            member("Aitijhya Roy", "Team Member", "aitijhya-roy", "/dev/Aitijhya.jpg"),
            member("Rudranil Das", "Team Member", "rudranil-das", "/devImages/Rudranil.jpg"),
        ],
        projects: vec![
            project(
                "Portfolio Website",
                "A modern portfolio built with Next.js and Tailwind.",
            ),
            project("E-commerce App", "A full-stack app with Stripe integration."),
        ],
    }
}
