//! Static marketing and dashboard content.

use crate::backend::auth::session::Role;
use crate::backend::utils::config::LinkKey;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Achievement {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CallToAction {
    pub title: &'static str,
    pub body: &'static str,
    pub button: &'static str,
    pub link: LinkKey,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resource {
    pub title: &'static str,
    pub description: &'static str,
    pub link: LinkKey,
}

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        value: "1,200+",
        label: "Students tutored",
    },
    Achievement {
        value: "94%",
        label: "Improved by a full grade",
    },
    Achievement {
        value: "35",
        label: "Specialist tutors",
    },
    Achievement {
        value: "12 yrs",
        label: "Helping local families",
    },
];

pub const CALLS_TO_ACTION: &[CallToAction] = &[
    CallToAction {
        title: "Book a free assessment",
        body: "A 30 minute session to find gaps and set goals before any commitment.",
        button: "Enroll now",
        link: LinkKey::Enrollment,
    },
    CallToAction {
        title: "Talk to a coordinator",
        body: "Questions about subjects, scheduling or pricing? We reply within a day.",
        button: "Contact us",
        link: LinkKey::Contact,
    },
];

const STUDENT_RESOURCES: &[Resource] = &[
    Resource {
        title: "My schedule",
        description: "Upcoming sessions and room links.",
        link: LinkKey::Schedule,
    },
    Resource {
        title: "Homework",
        description: "Assignments from your tutor.",
        link: LinkKey::Homework,
    },
];

const PARENT_RESOURCES: &[Resource] = &[
    Resource {
        title: "Progress reports",
        description: "Monthly notes from each tutor.",
        link: LinkKey::ProgressReports,
    },
    Resource {
        title: "Session schedule",
        description: "See and reschedule upcoming sessions.",
        link: LinkKey::Schedule,
    },
    Resource {
        title: "Billing",
        description: "Invoices and payment details.",
        link: LinkKey::Billing,
    },
];

pub fn resources_for(role: Role) -> &'static [Resource] {
    match role {
        Role::Student => STUDENT_RESOURCES,
        Role::Parent => PARENT_RESOURCES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_role_has_its_own_resources() {
        assert!(
            resources_for(Role::Parent)
                .iter()
                .any(|r| r.link == LinkKey::Billing)
        );
        assert!(
            !resources_for(Role::Student)
                .iter()
                .any(|r| r.link == LinkKey::Billing)
        );
    }
}
