use super::Workflow;

const CANNED: [(&str, &str, u32, &[&str], &str, &str, &str); 16] = [
    ("workflow-1", "Customer Support Main Line", 4, &["Customer Service"], "John Davis", "JD", "December 02, 2025"),
    ("workflow-2", "General Customer Inquiries", 3, &["Customer Service", "Spanish"], "Sarah Wilson", "SW", "November 30, 2025"),
    ("workflow-3", "Sales Inquiry Router", 3, &["Sales Support"], "Alice Martinez", "AM", "November 28, 2025"),
    ("workflow-4", "Product Sales Pipeline", 2, &["Sales Support", "Enterprise Customers", "Technical Support"], "David Chen", "DC", "November 26, 2025"),
    ("workflow-5", "Technical Support Queue", 2, &["Technical Support"], "Robert Wilson", "RW", "November 25, 2025"),
    ("workflow-6", "IT Help Desk Flow", 4, &["Technical Support", "Billing Support"], "Emma Thompson", "ET", "November 23, 2025"),
    ("workflow-7", "Billing Department Flow", 5, &["Billing Support"], "Lisa Thompson", "LT", "November 20, 2025"),
    ("workflow-8", "Payment Processing Center", 3, &["Billing Support", "Payment Issues"], "Mark Johnson", "MJ", "November 18, 2025"),
    ("workflow-9", "Enterprise Client Support", 6, &["Enterprise Customers", "Customer Service", "Technical Support", "Spanish"], "Michael Johnson", "MJ", "November 15, 2025"),
    ("workflow-10", "Corporate Account Management", 4, &["Enterprise Customers"], "Jennifer Lee", "JL", "November 12, 2025"),
    ("workflow-11", "Spanish Language Support", 2, &["Spanish"], "Carlos Rodriguez", "CR", "November 10, 2025"),
    ("workflow-12", "Multilingual Customer Care", 3, &["Spanish", "Customer Service"], "Maria Garcia", "MG", "November 08, 2025"),
    ("workflow-13", "Payment Issues Resolution", 2, &["Payment Issues"], "Alex Brown", "AB", "November 05, 2025"),
    ("workflow-14", "Billing Dispute Handler", 4, &["Payment Issues", "Billing Support", "Customer Service"], "Rachel Green", "RG", "November 03, 2025"),
    ("workflow-15", "Subscription Management Hub", 3, &["Subscription Management"], "Tom Wilson", "TW", "November 01, 2025"),
    ("workflow-16", "Account Subscription Center", 5, &["Subscription Management", "Billing Support"], "Lisa Chen", "LC", "October 30, 2025"),
];

/// Required skills per routing workflow, checked when IVR skill validation is on.
const REQUIRED_SKILLS: [(&str, &[&str]); 5] = [
    ("Customer Support Main", &["Technical Support"]),
    ("Sales Inquiry", &["Sales"]),
    ("Billing Questions", &["Billing"]),
    ("Account Management", &["Account Management"]),
    ("Emergency Support", &["Priority Support"]),
];

/// The workflows shown on the workflow list screen.
pub fn canned_workflows() -> Vec<Workflow> {
    CANNED
        .iter()
        .map(|&(id, name, entry_points, skills, user, initials, date)| Workflow {
            id: id.to_string(),
            name: name.to_string(),
            entry_points,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            user: user.to_string(),
            user_initials: initials.to_string(),
            date: date.to_string(),
        })
        .collect()
}

pub(super) fn required_skills(workflow_name: &str) -> &'static [&'static str] {
    REQUIRED_SKILLS
        .iter()
        .find(|(name, _)| *name == workflow_name)
        .map(|(_, skills)| *skills)
        .unwrap_or(&[])
}
