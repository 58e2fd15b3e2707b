use chrono::{DateTime, Utc};

use super::package::{Milestone, Package};
use crate::utils::datetime::parse_timestamp;

/// Display status of a package, derived from its milestones
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PackageStatus {
    Created,
    Processing,
    PickedUp,
    Departed,
    Delivered,
    Cancelled,
}

impl PackageStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PackageStatus::Created => "Created",
            PackageStatus::Processing => "Processing",
            PackageStatus::PickedUp => "Picked Up",
            PackageStatus::Departed => "Departed",
            PackageStatus::Delivered => "Delivered",
            PackageStatus::Cancelled => "Cancelled",
        }
    }

    /// Bootstrap color used for the badge
    pub fn color(&self) -> &'static str {
        match self {
            PackageStatus::Delivered => "success",
            PackageStatus::Cancelled => "danger",
            PackageStatus::Processing => "info",
            PackageStatus::PickedUp => "primary",
            PackageStatus::Departed => "warning",
            PackageStatus::Created => "secondary",
        }
    }

    pub fn badge_class(&self) -> String {
        let color = self.color();
        format!("badge bg-{}-subtle text-{}", color, color)
    }
}

impl From<Milestone> for PackageStatus {
    fn from(milestone: Milestone) -> Self {
        match milestone {
            Milestone::Processing => PackageStatus::Processing,
            Milestone::PickedUp => PackageStatus::PickedUp,
            Milestone::Departed => PackageStatus::Departed,
            Milestone::Delivered => PackageStatus::Delivered,
            Milestone::Cancelled => PackageStatus::Cancelled,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct LatestStatus {
    pub status: PackageStatus,
    /// `None` when even `createdAt` is missing or unparseable
    pub at: Option<DateTime<Utc>>,
}

/// Most recent milestone of the package, or `Created` when none is set.
///
/// Milestones are scanned in [`Milestone::PRIORITY`] order and a later entry
/// only wins if it is strictly more recent. Values that cannot be parsed as
/// timestamps are skipped.
pub fn latest_status(package: &Package) -> LatestStatus {
    latest_status_with(package, parse_timestamp)
}

pub fn latest_status_with<F>(package: &Package, parse: F) -> LatestStatus
where
    F: Fn(&str) -> Option<DateTime<Utc>>,
{
    let mut latest: Option<(Milestone, DateTime<Utc>)> = None;

    for milestone in Milestone::PRIORITY {
        let Some(at) = package.milestone(milestone).and_then(&parse) else {
            continue;
        };
        match latest {
            Some((_, best)) if at <= best => {}
            _ => latest = Some((milestone, at)),
        }
    }

    match latest {
        Some((milestone, at)) => LatestStatus { status: milestone.into(), at: Some(at) },
        None => LatestStatus {
            status: PackageStatus::Created,
            at: package.created_at().and_then(&parse),
        },
    }
}
