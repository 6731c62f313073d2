use serde::{Deserialize, Serialize};
use std::fmt;

/// Transfer target category of a Transfer node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Destination {
    Voicemail,
    #[default]
    Operators,
    ContactCenter,
    TeamMember,
    RoomPhone,
}

impl Destination {
    pub const ALL: [Destination; 5] = [
        Destination::Voicemail,
        Destination::Operators,
        Destination::ContactCenter,
        Destination::TeamMember,
        Destination::RoomPhone,
    ];

    /// Label read back from the store when a node is opened for editing.
    pub fn canonical_label(&self) -> &'static str {
        match self {
            Destination::Voicemail => "Voicemail",
            Destination::Operators => "Operators",
            Destination::ContactCenter => "Contact Center",
            Destination::TeamMember => "Team Member",
            Destination::RoomPhone => "Room Phone",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_label())
    }
}

/// The named contact centers offered once ContactCenter is the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactCenter {
    #[serde(rename = "billing-center")]
    Billing,
    #[serde(rename = "customer-service")]
    CustomerService,
    #[serde(rename = "sales-center")]
    Sales,
    #[serde(rename = "support-center")]
    Support,
    #[serde(rename = "technical-center")]
    Technical,
}

impl ContactCenter {
    pub const ALL: [ContactCenter; 5] = [
        ContactCenter::Billing,
        ContactCenter::CustomerService,
        ContactCenter::Sales,
        ContactCenter::Support,
        ContactCenter::Technical,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ContactCenter::Billing => "billing-center",
            ContactCenter::CustomerService => "customer-service",
            ContactCenter::Sales => "sales-center",
            ContactCenter::Support => "support-center",
            ContactCenter::Technical => "technical-center",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ContactCenter::Billing => "Billing Center",
            ContactCenter::CustomerService => "Customer Service Center",
            ContactCenter::Sales => "Sales Center",
            ContactCenter::Support => "Support Center",
            ContactCenter::Technical => "Technical Center",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

/// A name/value annotation passed along to a contact center.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabelPair {
    pub name: String,
    pub value: String,
}

impl LabelPair {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Resolves the label written to the store for a destination.
///
/// Returns `None` when no label can be resolved (ContactCenter without a chosen
/// center, TeamMember, RoomPhone); the stored destination is then left as is.
pub fn resolve_destination_label(
    destination: Destination,
    center: Option<ContactCenter>,
) -> Option<&'static str> {
    match destination {
        Destination::Operators => Some("Operators"),
        Destination::Voicemail => Some("Voicemail"),
        Destination::ContactCenter => center.map(|c| c.name()),
        Destination::TeamMember | Destination::RoomPhone => None,
    }
}

/// Maps a stored destination label back to the form value.
///
/// Center names map back to ContactCenter with that center selected. Absent or
/// unknown labels fall back to Operators.
pub fn destination_from_label(label: Option<&str>) -> (Destination, Option<ContactCenter>) {
    let Some(label) = label else {
        return (Destination::Operators, None);
    };
    if let Some(destination) = Destination::ALL
        .into_iter()
        .find(|d| d.canonical_label() == label)
    {
        return (destination, None);
    }
    match ContactCenter::from_name(label) {
        Some(center) => (Destination::ContactCenter, Some(center)),
        None => (Destination::Operators, None),
    }
}
