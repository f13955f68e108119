use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use strum::{EnumIter, IntoEnumIterator};

/// Organisational unit a user can associate with their profile.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter,
)]
pub enum Category {
    #[serde(rename = "System")]
    System,
    #[serde(rename = "Finance")]
    Finance,
    #[serde(rename = "Business Planning")]
    BusinessPlanning,
    #[serde(rename = "Design")]
    Design,
    #[serde(rename = "Sales")]
    Sales,
    #[serde(rename = "Human Resources")]
    HumanResources,
    #[serde(rename = "Procurement")]
    Procurement,
    #[serde(rename = "Legal")]
    Legal,
    #[serde(rename = "Intellectual Property")]
    IntellectualProperty,
    #[serde(rename = "Information Security")]
    InformationSecurity,
}

impl Category {
    /// Return the value sent over the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::System => "System",
            Self::Finance => "Finance",
            Self::BusinessPlanning => "Business Planning",
            Self::Design => "Design",
            Self::Sales => "Sales",
            Self::HumanResources => "Human Resources",
            Self::Procurement => "Procurement",
            Self::Legal => "Legal",
            Self::IntellectualProperty => "Intellectual Property",
            Self::InformationSecurity => "Information Security",
        }
    }

    /// Translation key of the localised label.
    #[must_use]
    pub const fn i18n_key(self) -> &'static str {
        match self {
            Self::System => "category.system",
            Self::Finance => "category.finance",
            Self::BusinessPlanning => "category.business_planning",
            Self::Design => "category.design",
            Self::Sales => "category.sales",
            Self::HumanResources => "category.human_resources",
            Self::Procurement => "category.procurement",
            Self::Legal => "category.legal",
            Self::IntellectualProperty => "category.intellectual_property",
            Self::InformationSecurity => "category.information_security",
        }
    }

    /// All categories in display order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or("unknown category")
    }
}
