use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Launch sites known to the dashboard
// ---------------------------------------------------------------------------

/// The closed set of launch sites offered in the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaunchSite {
    CcafsLc,
    VafbSlc,
    KscLc,
    CcafsSlc,
}

impl LaunchSite {
    /// Dropdown order.
    pub const ALL: [LaunchSite; 4] = [
        LaunchSite::CcafsLc,
        LaunchSite::VafbSlc,
        LaunchSite::KscLc,
        LaunchSite::CcafsSlc,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            LaunchSite::CcafsLc => "CCAFS_LC",
            LaunchSite::VafbSlc => "VAFB_SLC",
            LaunchSite::KscLc => "KSC_LC",
            LaunchSite::CcafsSlc => "CCAFS_SLC",
        }
    }

    /// Name as it appears in the `Launch Site` column.
    pub fn display_name(self) -> &'static str {
        match self {
            LaunchSite::CcafsLc => "CCAFS LC-40",
            LaunchSite::VafbSlc => "VAFB SLC-4E",
            LaunchSite::KscLc => "KSC LC-39A",
            LaunchSite::CcafsSlc => "CCAFS SLC-40",
        }
    }
}

// ---------------------------------------------------------------------------
// SiteSelector – dropdown value
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectorError {
    #[error("invalid site selector: {0:?}")]
    InvalidSelector(String),
}

/// Scope of the charts: every site, or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SiteSelector {
    #[default]
    All,
    Site(LaunchSite),
}

impl SiteSelector {
    pub const ALL_TAG: &'static str = "ALL";

    /// Resolve a dropdown tag.
    pub fn from_tag(tag: &str) -> Result<Self, SelectorError> {
        if tag == Self::ALL_TAG {
            return Ok(SiteSelector::All);
        }
        LaunchSite::ALL
            .into_iter()
            .find(|site| site.tag() == tag)
            .map(SiteSelector::Site)
            .ok_or_else(|| SelectorError::InvalidSelector(tag.to_string()))
    }

    pub fn tag(self) -> &'static str {
        match self {
            SiteSelector::All => Self::ALL_TAG,
            SiteSelector::Site(site) => site.tag(),
        }
    }

    /// Label shown in the dropdown.
    pub fn label(self) -> &'static str {
        match self {
            SiteSelector::All => "All Sites",
            SiteSelector::Site(site) => site.display_name(),
        }
    }

    /// Site name records must match, `None` for [`SiteSelector::All`].
    pub fn site_name(self) -> Option<&'static str> {
        match self {
            SiteSelector::All => None,
            SiteSelector::Site(site) => Some(site.display_name()),
        }
    }

    /// Dropdown entries as `(label, tag)` pairs, in display order.
    pub fn options() -> impl Iterator<Item = (&'static str, &'static str)> {
        std::iter::once(SiteSelector::All)
            .chain(LaunchSite::ALL.into_iter().map(SiteSelector::Site))
            .map(|s| (s.label(), s.tag()))
    }
}

impl FromStr for SiteSelector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SiteSelector::from_tag(s)
    }
}

impl fmt::Display for SiteSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
